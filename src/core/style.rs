use serde::{Deserialize, Serialize};

/// Named viewport-width thresholds, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Initial,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Initial => "initial",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }

    /// Media query guarding values for this breakpoint. `Initial` applies
    /// unconditionally.
    pub fn media_query(&self) -> Option<&'static str> {
        match self {
            Breakpoint::Initial => None,
            Breakpoint::Sm => Some("(min-width: 30em)"),
            Breakpoint::Md => Some("(min-width: 48em)"),
            Breakpoint::Lg => Some("(min-width: 62em)"),
        }
    }
}

/// A value that varies by breakpoint.
///
/// Steps are kept sorted by breakpoint; a step stays active from its
/// breakpoint upward until the next step takes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsive<T> {
    steps: Vec<(Breakpoint, T)>,
}

impl<T> Responsive<T> {
    pub fn fixed(value: T) -> Self {
        Self {
            steps: vec![(Breakpoint::Initial, value)],
        }
    }

    /// Adds or replaces the value for `breakpoint`.
    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        match self.steps.binary_search_by_key(&breakpoint, |(bp, _)| *bp) {
            Ok(idx) => self.steps[idx].1 = value,
            Err(idx) => self.steps.insert(idx, (breakpoint, value)),
        }
        self
    }

    pub fn steps(&self) -> &[(Breakpoint, T)] {
        &self.steps
    }

    pub fn is_fixed(&self) -> bool {
        self.steps.len() == 1 && self.steps[0].0 == Breakpoint::Initial
    }

    /// The value in effect at `breakpoint`, if any step covers it.
    pub fn value_at(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.steps
            .iter()
            .rev()
            .find(|(bp, _)| *bp <= breakpoint)
            .map(|(_, value)| value)
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::fixed(value)
    }
}

impl From<&str> for Responsive<String> {
    fn from(value: &str) -> Self {
        Responsive::fixed(value.to_string())
    }
}

/// Shorthand for the common `initial → md` switch.
pub fn below_above_md(below: &str, above: &str) -> Responsive<String> {
    Responsive::fixed(below.to_string()).at(Breakpoint::Md, above.to_string())
}

/// CSS declarations attached to one element, including its hover and
/// `::before` rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    decls: Vec<(String, Responsive<String>)>,
    hover: Vec<(String, String)>,
    before: Vec<(String, String)>,
}

fn upsert<V>(list: &mut Vec<(String, V)>, prop: &str, value: V) {
    match list.iter_mut().find(|(p, _)| p == prop) {
        Some(entry) => entry.1 = value,
        None => list.push((prop.to_string(), value)),
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(self, prop: &str, value: impl Into<String>) -> Self {
        self.responsive(prop, Responsive::fixed(value.into()))
    }

    pub fn responsive(mut self, prop: &str, value: Responsive<String>) -> Self {
        upsert(&mut self.decls, prop, value);
        self
    }

    pub fn hover(mut self, prop: &str, value: impl Into<String>) -> Self {
        upsert(&mut self.hover, prop, value.into());
        self
    }

    pub fn before(mut self, prop: &str, value: impl Into<String>) -> Self {
        upsert(&mut self.before, prop, value.into());
        self
    }

    pub fn get(&self, prop: &str) -> Option<&Responsive<String>> {
        self.decls.iter().find(|(p, _)| p == prop).map(|(_, v)| v)
    }

    pub fn declarations(&self) -> &[(String, Responsive<String>)] {
        &self.decls
    }

    pub fn hover_declarations(&self) -> &[(String, String)] {
        &self.hover
    }

    pub fn before_declarations(&self) -> &[(String, String)] {
        &self.before
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty() && self.hover.is_empty() && self.before.is_empty()
    }
}

/// Font size for a step of the type scale (1 = smallest, 9 = display).
pub fn text_size(step: u8) -> &'static str {
    match step {
        0 | 1 => "0.75rem",
        2 => "0.875rem",
        3 => "1rem",
        4 => "1.125rem",
        5 => "1.25rem",
        6 => "1.5rem",
        7 => "1.75rem",
        8 => "2.1875rem",
        _ => "3.75rem",
    }
}

/// Gap/padding for a step of the spacing scale.
pub fn space(step: u8) -> &'static str {
    match step {
        0 => "0",
        1 => "0.25rem",
        2 => "0.5rem",
        3 => "0.75rem",
        4 => "1rem",
        5 => "1.5rem",
        6 => "2rem",
        7 => "2.5rem",
        8 => "3rem",
        _ => "4rem",
    }
}
