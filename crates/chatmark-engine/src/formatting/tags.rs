use regex::Regex;
use std::sync::LazyLock;

/// A tag-name token directly enclosed by angle brackets: `<b>`, `</code>`.
///
/// Two tokens can never share a bracket, so consuming the brackets finds the
/// same tokens a lookaround form would.
static TAG_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?[a-zA-Z0-9]+)>").expect("TAG_TOKEN: hardcoded regex is valid")
});

/// Returns true when `text` holds a different number of opening and closing
/// tag-name tokens.
///
/// Only counts are compared; names and nesting order are ignored, so
/// `<b></i>` is balanced. Tags carrying attributes (`<font color=...>`) are
/// not tokens, while their closing form (`</font>`) is.
pub fn is_tag_intersection(text: &str) -> bool {
    let (opening, closing) =
        TAG_TOKEN
            .captures_iter(text)
            .fold((0usize, 0usize), |(opening, closing), caps| {
                if caps[1].starts_with('/') {
                    (opening, closing + 1)
                } else {
                    (opening + 1, closing)
                }
            });
    opening != closing
}
