use super::{
    rewrite::Rewriter,
    rules::{URL_PATTERNS, href},
};

/// Wraps every URL-shaped substring of `message` in an anchor pointing at
/// itself.
///
/// Each pattern scans the output of the previous one. Within a pattern's pass
/// the matches come from a snapshot taken before the pass, so an anchor
/// inserted by the pass is never rescanned by that same pass. A later pattern
/// can still match inside an earlier anchor's `href`, and running the function
/// twice can double-wrap.
pub fn highlight_url(message: &str) -> String {
    let mut result = message.to_owned();
    for pattern in URL_PATTERNS.iter() {
        let snapshot = result.clone();
        let mut rewriter = Rewriter::new(&mut result);
        for m in pattern.find_iter(&snapshot) {
            rewriter.replace(m.range(), &href(m.as_str()));
        }
        if rewriter.replaced() > 0 {
            log::debug!(
                "URL pattern {} wrapped {} match(es), length change {}",
                pattern.as_str(),
                rewriter.replaced(),
                rewriter.offset()
            );
        }
    }
    result
}
