//! HTML renderer for the component tree.
//!
//! Inline styles cannot express breakpoints or `:hover`, so every styled
//! element gets a generated class (`t0`, `t1`, ...) in document order and its
//! declarations are emitted into a stylesheet. Base rules come first, then one
//! `@media` block per breakpoint in ascending order so wider viewports win.
//! Class numbering depends only on tree shape, which keeps output
//! byte-identical across renders of the same tree.

use crate::core::node::{Element, Node};
use crate::core::style::{Breakpoint, Style};
use std::collections::BTreeMap;
use std::fmt::Write;

const VOID_TAGS: [&str; 4] = ["img", "meta", "link", "br"];

/// Markup plus the stylesheet generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub css: String,
}

#[derive(Default)]
struct Renderer {
    html: String,
    base_css: String,
    media_css: BTreeMap<Breakpoint, String>,
    next_class: usize,
}

pub fn render_fragment(node: &Node) -> Fragment {
    let mut renderer = Renderer::default();
    renderer.node(node);

    let mut css = renderer.base_css;
    for (breakpoint, rules) in renderer.media_css {
        if let Some(query) = breakpoint.media_query() {
            let _ = write!(css, "@media {}{{{}}}", query, rules);
        } else {
            css.push_str(&rules);
        }
    }

    Fragment {
        html: renderer.html,
        css,
    }
}

impl Renderer {
    fn node(&mut self, node: &Node) {
        match node {
            Node::Text { text } => self.html.push_str(&escape_html(text)),
            Node::Element(el) => self.element(el),
        }
    }

    fn element(&mut self, el: &Element) {
        let generated = if el.style.is_empty() {
            None
        } else {
            let class = format!("t{}", self.next_class);
            self.next_class += 1;
            self.style_rules(&class, &el.style);
            Some(class)
        };

        self.html.push('<');
        self.html.push_str(el.tag);

        let mut wrote_class = false;
        for (name, value) in &el.attrs {
            let value = match (&generated, name.as_str()) {
                (Some(class), "class") => {
                    wrote_class = true;
                    format!("{} {}", value, class)
                }
                _ => value.clone(),
            };
            let _ = write!(self.html, " {}=\"{}\"", name, escape_attr(&value));
        }
        if let (Some(class), false) = (&generated, wrote_class) {
            let _ = write!(self.html, " class=\"{}\"", class);
        }
        self.html.push('>');

        if VOID_TAGS.contains(&el.tag) {
            return;
        }

        for child in &el.children {
            self.node(child);
        }
        let _ = write!(self.html, "</{}>", el.tag);
    }

    fn style_rules(&mut self, class: &str, style: &Style) {
        let mut by_breakpoint: BTreeMap<Breakpoint, String> = BTreeMap::new();
        for (prop, value) in style.declarations() {
            for (breakpoint, v) in value.steps() {
                let _ = write!(by_breakpoint.entry(*breakpoint).or_default(), "{}:{};", prop, v);
            }
        }

        for (breakpoint, decls) in by_breakpoint {
            let rule = format!(".{}{{{}}}", class, decls);
            if breakpoint == Breakpoint::Initial {
                self.base_css.push_str(&rule);
            } else {
                self.media_css.entry(breakpoint).or_default().push_str(&rule);
            }
        }

        if !style.hover_declarations().is_empty() {
            let _ = write!(
                self.base_css,
                ".{}:hover{{{}}}",
                class,
                join_decls(style.hover_declarations())
            );
        }
        if !style.before_declarations().is_empty() {
            let _ = write!(
                self.base_css,
                ".{}::before{{{}}}",
                class,
                join_decls(style.before_declarations())
            );
        }
    }
}

fn join_decls(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{}:{};", prop, value))
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::{div, img, link};
    use crate::core::style::{below_above_md, Responsive};

    #[test]
    fn test_unstyled_tree_has_no_css() {
        let tree: Node = div().child(link("#a").child("A & B")).into();
        let out = render_fragment(&tree);
        assert_eq!(out.html, "<div><a href=\"#a\">A &amp; B</a></div>");
        assert!(out.css.is_empty());
    }

    #[test]
    fn test_responsive_values_go_to_media_blocks() {
        let tree: Node = div()
            .style(
                Style::new()
                    .set("gap", "1rem")
                    .responsive("display", below_above_md("none", "flex")),
            )
            .into();
        let out = render_fragment(&tree);
        assert_eq!(out.html, "<div class=\"t0\"></div>");
        assert_eq!(
            out.css,
            ".t0{gap:1rem;display:none;}@media (min-width: 48em){.t0{display:flex;}}"
        );
    }

    #[test]
    fn test_media_blocks_ordered_smallest_first() {
        let cols = Responsive::fixed("1".to_string())
            .at(Breakpoint::Lg, "3".to_string())
            .at(Breakpoint::Sm, "2".to_string());
        let tree: Node = div().style(Style::new().responsive("order", cols)).into();
        let css = render_fragment(&tree).css;
        let sm = css.find("30em").unwrap();
        let lg = css.find("62em").unwrap();
        assert!(sm < lg);
    }

    #[test]
    fn test_generated_class_merges_with_existing() {
        let tree: Node = div()
            .class("card")
            .style(Style::new().set("padding", "2rem").hover("transform", "scale(1.1)"))
            .into();
        let out = render_fragment(&tree);
        assert_eq!(out.html, "<div class=\"card t0\"></div>");
        assert!(out.css.contains(".t0:hover{transform:scale(1.1);}"));
    }

    #[test]
    fn test_void_tags_are_not_closed() {
        let tree: Node = img("/logo.png", "Logo \"T\"").into();
        let out = render_fragment(&tree);
        assert_eq!(out.html, "<img src=\"/logo.png\" alt=\"Logo &quot;T&quot;\">");
    }
}
