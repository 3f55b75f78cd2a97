//! Terminal capability probing.
//!
//! Detection runs once at startup and only inspects the environment; no
//! escape-sequence round trips. The renderer consults `truecolor` to decide
//! between 24-bit RGB bars and the 256-color ANSI fallback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub truecolor: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    /// Classify from `COLORTERM` / `TERM` values.
    pub fn from_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        let colorterm = colorterm.unwrap_or_default().to_ascii_lowercase();
        let term = term.unwrap_or_default().to_ascii_lowercase();
        let truecolor = matches!(colorterm.as_str(), "truecolor" | "24bit")
            || term.contains("truecolor")
            || term.contains("24bit")
            || term.contains("direct");
        Self { truecolor }
    }

    /// Capabilities assumed when nothing is known (tests, piped output).
    pub const fn basic() -> Self {
        Self { truecolor: false }
    }
}
