//! # Formatting
//!
//! Pure string-to-string rewrites that turn chat text into HTML.
//!
//! ## Passes
//!
//! - **`url`**: `highlight_url()` wraps URL-shaped text in self-referencing anchors
//! - **`markdown`**: `apply_markdown()` wraps lightweight emphasis in inline tags
//! - **`tags`**: `is_tag_intersection()`, the tag-count guard used by `markdown`
//!
//! ## Rewrite Discipline
//!
//! Every rule scans a snapshot of the text once, then applies its matches
//! left to right to the live string through a `Rewriter`, which
//! corrects each match position by the length delta of the replacements
//! before it. A rule never rescans its own output; the next rule scans the
//! result.
//!
//! Rule tables live in **`rules`** and are built once on first use.

pub mod markdown;
mod rewrite;
pub mod rules;
pub mod tags;
pub mod url;

pub use markdown::apply_markdown;
pub use tags::is_tag_intersection;
pub use url::highlight_url;
