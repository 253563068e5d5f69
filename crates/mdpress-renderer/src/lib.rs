//! Line-oriented lightweight-markup to HTML conversion engine.
//!
//! Converts user-submitted markup into standalone HTML pages using two
//! sequential passes over the same line buffer:
//!
//! - [`HeaderTransformer`]: converts ATX (`# Title`) and Setext
//!   (`Title` + `====` underline) headers into `<h1>`..`<h6>` lines.
//! - [`ListTransformer`]: converts ordered/unordered list items into nested
//!   `<ol>`/`<ul>`/`<li>` structures and appends `<br>` to plain lines so
//!   paragraph line breaks survive in the rendered page.
//!
//! [`DocumentShell`] wraps the transformed body in a fixed HTML5 template.
//!
//! The engine is a pure, synchronous transformation: all parser state (cursor,
//! open-list stack) is allocated per call, so independent conversions can run
//! concurrently without coordination.
//!
//! The dialect is deliberately not CommonMark: no inline formatting, tables,
//! blockquotes, or fenced code blocks. Unrecognized lines pass through
//! unchanged.
//!
//! # Example
//!
//! ```
//! use mdpress_renderer::render_body;
//!
//! let html = render_body("# Shopping\n- milk\n- eggs");
//! assert_eq!(html, "<h1>Shopping</h1><br>\n<ul>\n<li>milk</li>\n<li>eggs</li>\n</ul>");
//! ```

mod document;
mod headers;
mod lists;

pub use document::DocumentShell;
pub use headers::HeaderTransformer;
pub use lists::ListTransformer;

/// Convert markup text into the transformed body (no document shell).
///
/// Splits on line endings (`\n` or `\r\n`), runs the header pass then the
/// list pass, and joins the result with `\n`.
#[must_use]
pub fn render_body(text: &str) -> String {
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    let lines = HeaderTransformer::transform(&lines);
    let lines = ListTransformer::transform(&lines);
    lines.join("\n")
}

/// Convert markup text into a standalone HTML page.
///
/// Total over all inputs: empty input produces the shell with an empty body,
/// unterminated list constructs are closed at end of input.
#[must_use]
pub fn render_document(text: &str) -> String {
    DocumentShell::wrap(&render_body(text))
}
