use serde::Serialize;

/// Color tokens for one display mode.
///
/// Only the writer reads these; the parse is identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub dark: bool,
    /// Background behind `==highlight==`.
    pub highlight_bg: &'static str,
    /// Background behind inline code and code blocks.
    pub code_bg: &'static str,
    pub link_color: &'static str,
    /// Border and tint of block quotes.
    pub quote_accent: &'static str,
    pub rule_color: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        dark: false,
        highlight_bg: "#fff694",
        code_bg: "rgba(0, 0, 0, 0.1)",
        link_color: "#ff6fa5",
        quote_accent: "#ff6fa5",
        rule_color: "rgba(0, 0, 0, 0.2)",
    };

    pub const DARK: Theme = Theme {
        dark: true,
        highlight_bg: "#8a7d1f",
        code_bg: "rgba(255, 255, 255, 0.08)",
        link_color: "#ff8fbb",
        quote_accent: "#ff6fa5",
        rule_color: "rgba(255, 255, 255, 0.2)",
    };

    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}
