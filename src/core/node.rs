use crate::core::style::Style;
use serde::Serialize;

/// A node of the component tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct element children, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Every descendant element (self included) matching `pred`, in document order.
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        collect(self, &pred, &mut found);
        found
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Vec<&Element> {
        self.find_all(|el| el.get_attr(name) == Some(value))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text { text } => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }
}

fn collect<'a, F>(el: &'a Element, pred: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if pred(el) {
        found.push(el);
    }
    for child in el.child_elements() {
        collect(child, pred, found);
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
        }
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text { text }
    }
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn section(id: &str) -> Element {
    Element::new("section").id(id)
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn p(text: impl Into<String>) -> Element {
    Element::new("p").child(text.into())
}

pub fn heading(level: u8, text: impl Into<String>) -> Element {
    let tag = match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        _ => "h4",
    };
    Element::new(tag).child(text.into())
}

pub fn link(href: &str) -> Element {
    Element::new("a").attr("href", href)
}

pub fn img(src: &str, alt: &str) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}
