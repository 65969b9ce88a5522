//! # Rule Tables
//!
//! The ordered, read-only pattern tables shared by both passes.
//!
//! ## Boundary Policy
//!
//! Every emphasis rule requires its opening delimiter to sit at the start of
//! the text or after whitespace, and its closing delimiter to sit at the end of
//! the text or before whitespace. Both are written as one-character negative
//! lookarounds (`(?<!\S)`, `(?!\S)`) so the lookbehind stays
//! constant-width.
//!
//! Delimiters are written as one-character classes (`[*]`, `[~]`) so none of
//! them needs escaping.

use std::sync::LazyLock;

/// Foreground colour of inline and fenced code spans.
pub const CODE_COLOR: &str = "#595959";

/// The markup an emphasis rule wraps its captured text in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Italic,
    Bold,
    Underline,
    Strikethrough,
    Code,
}

impl Emphasis {
    /// Wraps `text` in this emphasis' HTML template.
    pub fn wrap(self, text: &str) -> String {
        match self {
            Emphasis::Italic => format!("<i>{text}</i>"),
            Emphasis::Bold => format!("<b>{text}</b>"),
            Emphasis::Underline => format!("<u>{text}</u>"),
            Emphasis::Strikethrough => format!("<s>{text}</s>"),
            Emphasis::Code => format!("<font color={CODE_COLOR}><code>{text}</code></font>"),
        }
    }
}

/// Delimiter syntax recognised by an emphasis rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `/x/`, `*x*`: content may not hold a newline or the delimiter itself.
    Single(char),
    /// `**x**`: content may not hold a newline.
    Double(char),
    /// Triple backticks; content may span lines.
    Fence,
}

impl Delimiter {
    pub const FENCE: &'static str = "```";

    /// Builds the lookaround pattern for this delimiter. Group 1 is the inner
    /// text; group 0 the full span including delimiters.
    pub fn pattern(self) -> String {
        match self {
            Delimiter::Single(d) => format!(
                r"(?<!\S)[{d}](?!\s)([^{d}\n]+?)(?<!\s)[{d}](?!\S)"
            ),
            Delimiter::Double(d) => format!(
                r"(?<!\S)[{d}]{{2}}(?!\s)([^\n]+?)(?<!\s)[{d}]{{2}}(?!\S)"
            ),
            Delimiter::Fence => format!(
                r"(?<!\S){fence}(?!`)([\s\S]+?)(?<!`){fence}(?!\S)",
                fence = Self::FENCE
            ),
        }
    }
}

/// One entry of the emphasis table.
pub struct MarkdownRule {
    pub delimiter: Delimiter,
    pub emphasis: Emphasis,
    pub regex: fancy_regex::Regex,
}

impl MarkdownRule {
    fn new(delimiter: Delimiter, emphasis: Emphasis) -> Self {
        let regex = fancy_regex::Regex::new(&delimiter.pattern())
            .expect("MARKDOWN_RULES: hardcoded regex is valid");
        Self {
            delimiter,
            emphasis,
            regex,
        }
    }
}

/// Emphasis rules in application order.
///
/// Single-character rules run before their double-character counterparts:
/// `**x**` never matches a single-asterisk rule (the inner class rejects `*`),
/// while `*x*` would be lost if a looser rule ran first.
pub static MARKDOWN_RULES: LazyLock<Vec<MarkdownRule>> = LazyLock::new(|| {
    use Delimiter::{Double, Fence, Single};
    use Emphasis::{Bold, Code, Italic, Strikethrough, Underline};

    vec![
        MarkdownRule::new(Single('/'), Italic),
        MarkdownRule::new(Single('*'), Bold),
        MarkdownRule::new(Single('_'), Underline),
        MarkdownRule::new(Single('~'), Strikethrough),
        MarkdownRule::new(Single('`'), Code),
        MarkdownRule::new(Double('*'), Bold),
        MarkdownRule::new(Double('/'), Italic),
        MarkdownRule::new(Double('_'), Underline),
        MarkdownRule::new(Double('~'), Strikethrough),
        MarkdownRule::new(Fence, Code),
    ]
});

/// Characters allowed in a URL path, after RFC 3986 section 2.
const URL_PATH: &str = r"[\w:/?#\[\]@!$&'{}*+,;.~%=\-]+";

/// URL recognisers in application order.
///
/// The 76-character Tox ID runs before the looser `tox:user@host` form so a
/// Tox ID is already wrapped when the looser pass scans the text.
pub static URL_PATTERNS: LazyLock<Vec<regex::Regex>> = LazyLock::new(|| {
    [
        format!(r"\b(www\.|((https?)|ftp)://){URL_PATH}"),
        r"\b(file|smb)://([\S| ]*)".to_string(),
        r"\btox:[a-zA-Z0-9]{76}".to_string(),
        r"\bmailto:\S+@\S+\.\S+".to_string(),
        r"\btox:\S+@\S+".to_string(),
    ]
    .iter()
    .map(|pattern| regex::Regex::new(pattern).expect("URL_PATTERNS: hardcoded regex is valid"))
    .collect()
});

/// Wraps a matched URL as an anchor pointing at itself.
pub fn href(url: &str) -> String {
    format!(r#"<a href="{url}">{url}</a>"#)
}
