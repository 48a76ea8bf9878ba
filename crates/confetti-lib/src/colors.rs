//! ANSI color codes for terminal output.
//!
//! - Blue: directive headers
//! - Green: argument values
//! - Reset: return to default

/// ANSI palette used by [`TreePrinter`](crate::TreePrinter).
///
/// Sticks to the standard 16 colors so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub directive: &'static str,
    pub argument: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        directive: "\x1b[34m",
        argument: "\x1b[32m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        directive: "",
        argument: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
