//! ANSI palette for token stream dumps.
//!
//! Colors carry meaning, not decoration:
//! - `name`: entity and field names from metadata
//! - `encoding`: primitive type and byte order of leaf tokens
//! - `muted`: positions, identifiers, sizes, offsets
//! - `deferred`: offsets and sizes only known at runtime

/// ANSI palette for dump output.
///
/// Sticks to the standard 16-color codes so dumps stay legible on light and
/// dark terminals. `Colors::OFF` renders every slot as an empty string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub name: &'static str,
    pub encoding: &'static str,
    pub muted: &'static str,
    pub deferred: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        encoding: "\x1b[32m",
        muted: "\x1b[2m",
        deferred: "\x1b[33m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        encoding: "",
        muted: "",
        deferred: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `color` and a reset, or return it untouched when disabled.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if self.is_enabled() {
            format!("{color}{text}{}", self.reset)
        } else {
            text.to_string()
        }
    }
}
