pub mod formatting;
pub mod message;

// Re-export key types for easier usage
pub use formatting::{apply_markdown, highlight_url, is_tag_intersection};
pub use message::{ParseStyleError, RenderOptions, StyleType, render_message};
