//! End-to-end checks of the public formatting API.
//!
//! Uses insta inline snapshots so the expected HTML sits next to each input.

use chatmark_engine::{
    RenderOptions, StyleType, apply_markdown, highlight_url, is_tag_intersection, render_message,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn highlights_www_link_in_sentence() {
    assert_snapshot!(
        highlight_url("check www.example.com now"),
        @r#"check <a href="www.example.com">www.example.com</a> now"#
    );
}

#[test]
fn strips_or_keeps_bold_delimiters() {
    assert_snapshot!(apply_markdown("*bold*", false), @"<b>bold</b>");
    assert_snapshot!(apply_markdown("*bold*", true), @"<b>*bold*</b>");
}

#[test]
fn accumulates_offsets_across_matches() {
    assert_snapshot!(
        apply_markdown("/it/ and _u_ and ~s~ and `c`", false),
        @"<i>it</i> and <u>u</u> and <s>s</s> and <font color=#595959><code>c</code></font>"
    );
}

#[test]
fn urls_then_markdown_compose() {
    let html = apply_markdown(&highlight_url("*see* https://tox.chat/download.html"), false);
    assert_snapshot!(
        html,
        @r#"<b>see</b> <a href="https://tox.chat/download.html">https://tox.chat/download.html</a>"#
    );
}

#[test]
fn underscores_inside_links_are_left_alone() {
    let html = render_message("www.a.com/_x_", &RenderOptions::default());
    assert_snapshot!(html, @r#"<a href="www.a.com/_x_">www.a.com/_x_</a>"#);
}

#[test]
fn fenced_block_covers_newlines() {
    let html = apply_markdown("look:\n```fn main() {\n    run();\n}```\ndone", false);
    assert_eq!(
        html,
        "look:\n<font color=#595959><code>fn main() {\n    run();\n}</code></font>\ndone"
    );
}

#[rstest]
#[case("a*bold*b")]
#[case("snake_case and path/to/file")]
#[case("1 * 2 * 3")]
#[case("~ tilde ~")]
fn boundary_violations_pass_through(#[case] message: &str) {
    assert_eq!(apply_markdown(message, false), message);
    assert_eq!(apply_markdown(message, true), message);
    assert_eq!(highlight_url(message), message);
}

#[test]
fn tag_guard_rejects_unbalanced_candidate() {
    assert!(is_tag_intersection("a <b> c"));
    assert_eq!(apply_markdown("*a <b> c*", false), "*a <b> c*");
}

#[rstest]
#[case(StyleType::None, "*x* /y/")]
#[case(StyleType::WithChars, "<b>*x*</b> <i>/y/</i>")]
#[case(StyleType::WithoutChars, "<b>x</b> <i>y</i>")]
fn render_follows_style(#[case] style: StyleType, #[case] expected: &str) {
    let options = RenderOptions {
        style,
        ..RenderOptions::default()
    };
    assert_eq!(render_message("*x* /y/", &options), expected);
}

#[test]
fn rule_tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || apply_markdown(&format!("*{i}* www.{i}.org"), false))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<b>{i}</b> www.{i}.org"));
    }
}
