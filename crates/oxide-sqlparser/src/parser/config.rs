//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default bound on the parse stack.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Options for a [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum number of frames on the parse stack; `None` removes the
    /// bound. Deeply nested input fails with
    /// [`ParseError::DepthExceeded`](super::ParseError::DepthExceeded).
    pub max_depth: Option<usize>,
}

impl ParserConfig {
    /// A configuration with no depth bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Sets the depth bound.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}
