//! HTML gallery of saved images
//!
//! [`IndexBuilder`] is what [`save_images`](crate::save_images) registers
//! files into; [`HtmlPage`] is the bundled implementation writing a single
//! `index.html`.

mod page;

pub use page::HtmlPage;

/// Sink for gallery sections
pub trait IndexBuilder {
    /// Start a new section titled `title`
    fn add_header(&mut self, title: &str);

    /// Add one row of images
    ///
    /// `images`, `captions` and `links` are parallel and must have the same
    /// length. Implementations may panic in debug builds when they differ.
    fn add_images(&mut self, images: &[String], captions: &[String], links: &[String], width: u32);
}

/// Escape text for use inside HTML content and attribute values
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
