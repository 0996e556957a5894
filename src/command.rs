// Typed argument-vector builder for dialog invocations

use std::fmt::Display;

/// Ordered list of argv tokens for one dialog invocation.
///
/// Every token is delivered to the child process as its own argv entry via
/// `std::process::Command`, so no shell ever sees the command and caller text
/// needs no quoting or escaping. Quotes, spaces, and metacharacters in
/// content strings reach dialog verbatim.
#[derive(Debug, Clone, Default)]
pub struct ArgList {
    args: Vec<String>,
}

impl ArgList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare flag token, e.g. `--checklist`.
    pub fn flag(&mut self, name: &str) -> &mut Self {
        self.args.push(name.to_string());
        self
    }

    /// Append caller-supplied text as a single argv entry.
    pub fn text(&mut self, value: impl Into<String>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    /// Append a numeric token.
    pub fn num(&mut self, value: impl Display) -> &mut Self {
        self.args.push(value.to_string());
        self
    }

    /// Append an `on`/`off` token (checklist and radiolist row state).
    pub fn on_off(&mut self, state: bool) -> &mut Self {
        self.args.push(if state { "on" } else { "off" }.to_string());
        self
    }

    pub fn extend(&mut self, other: ArgList) -> &mut Self {
        self.args.extend(other.args);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl From<ArgList> for Vec<String> {
    fn from(list: ArgList) -> Self {
        list.args
    }
}
