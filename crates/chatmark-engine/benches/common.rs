// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_log(lines: usize) -> String {
    let samples = [
        "hey, did you see *this* already?",
        "link: https://tox.chat/download.html and www.example.com",
        "_underlined_ and ~struck~ and `inline code` here",
        "**strong** //slanted// __under__ ~~gone~~",
        "plain message without anything special in it at all",
        "```\nfn main() {\n    println!(\"hi\");\n}\n```",
        "mail me: mailto:someone@example.org or tox:alice@tox.chat",
    ];

    let mut log = String::new();
    for i in 0..lines {
        log.push_str(samples[i % samples.len()]);
        log.push('\n');
    }
    log
}
