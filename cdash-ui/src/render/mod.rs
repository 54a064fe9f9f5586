//! HTML/SVG rendering
//!
//! Binds aggregation results to chart primitives. Nothing here groups or
//! counts records.

pub mod charts;
mod page;
pub mod palette;

pub use page::{dashboard_page, error_page};

/// Escape text for HTML bodies and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
