use crate::formatting::{apply_markdown, highlight_url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How emphasis markup is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleType {
    /// Leave emphasis delimiters as plain text.
    None,
    /// Apply emphasis and keep the delimiters visible.
    WithChars,
    /// Apply emphasis and drop the delimiters.
    #[default]
    WithoutChars,
}

impl StyleType {
    pub const ALL: [StyleType; 3] = [
        StyleType::None,
        StyleType::WithChars,
        StyleType::WithoutChars,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleType::None => "none",
            StyleType::WithChars => "with-chars",
            StyleType::WithoutChars => "without-chars",
        }
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style '{0}', expected one of: none, with-chars, without-chars")]
pub struct ParseStyleError(pub String);

impl FromStr for StyleType {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleType::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// Which passes [`render_message`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: StyleType,
    pub highlight_urls: bool,
    pub escape_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: StyleType::default(),
            highlight_urls: true,
            escape_html: true,
        }
    }
}

/// Renders a raw chat message to HTML.
///
/// Escaping runs first so markup typed by the sender stays text and cannot
/// unbalance the emphasis guard; URL highlighting runs before emphasis so
/// slashes and underscores inside links are already wrapped.
pub fn render_message(raw: &str, options: &RenderOptions) -> String {
    let mut text = if options.escape_html {
        html_escape::encode_text(raw).into_owned()
    } else {
        raw.to_string()
    };

    if options.highlight_urls {
        text = highlight_url(&text);
    }

    match options.style {
        StyleType::None => text,
        StyleType::WithChars => apply_markdown(&text, true),
        StyleType::WithoutChars => apply_markdown(&text, false),
    }
}
