//! Static HTML rendering
//!
//! Generates a self-contained page (inline CSS, inline SVG charts and a
//! small script for filter clicks, the accordion and the view toggle).
//! The page works offline once written.

pub mod assets;
pub mod charts;
pub mod html;

pub use html::{render_error_page, render_page};

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(html_escape("Resolución 10/2025"), "Resolución 10/2025");
    }
}
