//! Output generation for Crossref deposits.
//!
//! Batches are rendered with a UTF-8 declaration and two-space indentation,
//! either to a string (for previews) or to a file next to other outputs.
//! Rendered documents can be checked against an XSD before they are written.

mod validate;
mod writer;

pub use validate::{validate_batch, validate_document};
pub use writer::{output_path, render_document, render_element, write_document, write_element};
