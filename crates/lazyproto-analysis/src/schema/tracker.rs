//! Top-level message tracking by brace depth.
//!
//! Shared by the schema reader and the annotator so both walk the file with
//! exactly the same notion of "inside message X at depth N".

/// How a line relates to the enclosing top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRole {
    /// Not inside any top-level message.
    Outside,
    /// A `message Name {` line at depth 0. Depth becomes 1; any other braces
    /// on the opener line are not counted.
    Opened(String),
    /// The line that brought depth back to 0.
    Closed(String),
    /// A line inside a message, with the depth after applying its braces.
    Body { depth: i64 },
}

#[derive(Debug, Default)]
pub struct MessageTracker {
    current: Option<String>,
    depth: i64,
}

impl MessageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one stripped line and reports its role.
    pub fn advance(&mut self, stripped: &str) -> LineRole {
        match self.current {
            None => match super::patterns::message_opener(stripped) {
                Some(name) => {
                    self.current = Some(name.to_string());
                    self.depth = 1;
                    LineRole::Opened(name.to_string())
                }
                None => LineRole::Outside,
            },
            Some(_) => {
                self.depth += super::patterns::brace_delta(stripped);
                if self.depth == 0 {
                    match self.current.take() {
                        Some(name) => LineRole::Closed(name),
                        None => LineRole::Outside,
                    }
                } else {
                    LineRole::Body { depth: self.depth }
                }
            }
        }
    }

    /// Name of the message the last line belonged to, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}
