//! `taginject-core`.
//!
//! Inserts trees of [`TagDescriptor`]s into HTML documents that are held as
//! plain strings. The document is never parsed: a short chain of regex probes
//! finds the `<head>`/`<body>` boundary to write at, falling back to `<html>`,
//! the doctype and finally the document edges, so injection succeeds for any
//! input, however malformed. The indentation of the line that was found is
//! reused for the inserted markup.
//!
//! # Example
//!
//! ```
//! use taginject_core::{TagDescriptor, inject_to_head};
//!
//! let html = "<html>\n  <head>\n  </head>\n</html>";
//! let tags = [TagDescriptor::new("meta").attr("charset", "utf-8")];
//!
//! assert_eq!(
//!   inject_to_head(html, &tags, false),
//!   "<html>\n  <head>\n    <meta charset=\"utf-8\">\n  </head>\n</html>"
//! );
//! ```

mod apply;
mod check;
pub mod error;
pub mod inject;
pub mod serialize;
mod types;

pub use apply::{ApplyOptions, apply_html_tags};
pub use check::{disallowed_head_tags, head_tag_insert_check};
pub use error::TagError;
pub use inject::{inject_to_body, inject_to_head};
pub use serialize::{
  increment_indent,
  serialize_attrs,
  serialize_tag,
  serialize_tag_list,
  serialize_tags,
};
pub use types::{
  AttrValue,
  Attributes,
  Children,
  InjectTo,
  TagDescriptor,
  Target,
  UNARY_TAGS,
};
