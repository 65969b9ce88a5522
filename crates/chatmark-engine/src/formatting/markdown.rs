use super::{rewrite::Rewriter, rules::MARKDOWN_RULES, tags::is_tag_intersection};

/// Applies the emphasis rules to `message`.
///
/// When `show_formatting_symbols` is set the delimiters stay inside the
/// wrapper (`*b*` becomes `<b>*b*</b>`), otherwise they are dropped.
///
/// Rules run in table order, each over the previous rule's output. A candidate
/// whose captured text has unbalanced tag-name tokens is left as it is and
/// does not move later replacements of the same rule.
pub fn apply_markdown(message: &str, show_formatting_symbols: bool) -> String {
    let group = if show_formatting_symbols { 0 } else { 1 };
    let mut result = message.to_owned();

    for rule in MARKDOWN_RULES.iter() {
        let snapshot = result.clone();
        let mut rewriter = Rewriter::new(&mut result);

        for caps in rule.regex.captures_iter(&snapshot) {
            let caps = match caps {
                Ok(caps) => caps,
                Err(e) => {
                    log::warn!("{:?} rule stopped early: {e}", rule.delimiter);
                    break;
                }
            };
            let (Some(span), Some(captured)) = (caps.get(0), caps.get(group)) else {
                continue;
            };
            let captured = captured.as_str();
            if is_tag_intersection(captured) {
                log::debug!(
                    "{:?} rule skipped {:?}: tag intersection",
                    rule.delimiter,
                    span.as_str()
                );
                continue;
            }
            rewriter.replace(span.start()..span.end(), &rule.emphasis.wrap(captured));
        }

        if rewriter.replaced() > 0 {
            log::debug!(
                "{:?} rule wrapped {} span(s), length change {}",
                rule.delimiter,
                rewriter.replaced(),
                rewriter.offset()
            );
        }
    }

    result
}
