//! Locating insertion points in raw HTML and splicing serialized tags in.
//!
//! Every placement intent maps to a [`Chain`]: an ordered list of [`Rung`]s,
//! each pairing an [`Anchor`] probe with the way output is joined around the
//! match. The first rung whose anchor matches wins. When none match, the
//! chain's [`Terminal`] applies, so injection always produces a document.

use std::{ops::Range, sync::LazyLock};

use log::debug;
use regex::Regex;

use crate::{
  serialize::{increment_indent, serialize_tag_list},
  types::{InjectTo, TagDescriptor, Target},
};

fn compile(pattern: &str) -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "anchor patterns are fixed and known to be valid"
  )]
  Regex::new(pattern).expect("anchor pattern should compile")
}

static HEAD_OPEN: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)([\t ]*)<head[^>]*>"));
static HEAD_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)([\t ]*)</head>"));
static BODY_OPEN: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)([\t ]*)<body[^>]*>"));
static BODY_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)([\t ]*)</body>"));
static HTML_OPEN: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)([\t ]*)<html[^>]*>"));
static HTML_CLOSE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)</html>"));
static DOCTYPE: LazyLock<Regex> =
  LazyLock::new(|| compile(r"(?i)<!doctype html>"));

/// A structural landmark probed for in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
  HeadOpen,
  HeadClose,
  BodyOpen,
  BodyClose,
  HtmlOpen,
  HtmlClose,
  Doctype,
}

/// The first occurrence of an [`Anchor`] in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMatch<'a> {
  /// Byte range of the whole match, leading whitespace included.
  pub range:  Range<usize>,
  /// Whitespace captured in front of the tag. Empty for anchors that do not
  /// capture any.
  pub indent: &'a str,
}

impl Anchor {
  fn pattern(self) -> &'static Regex {
    match self {
      Self::HeadOpen => &HEAD_OPEN,
      Self::HeadClose => &HEAD_CLOSE,
      Self::BodyOpen => &BODY_OPEN,
      Self::BodyClose => &BODY_CLOSE,
      Self::HtmlOpen => &HTML_OPEN,
      Self::HtmlClose => &HTML_CLOSE,
      Self::Doctype => &DOCTYPE,
    }
  }

  /// Find the first occurrence of this anchor, case-insensitively.
  #[must_use]
  pub fn find(self, html: &str) -> Option<AnchorMatch<'_>> {
    let captures = self.pattern().captures(html)?;
    let whole = captures.get(0)?;
    Some(AnchorMatch {
      range:  whole.range(),
      indent: captures.get(1).map_or("", |m| m.as_str()),
    })
  }
}

/// How the serialized output is joined to the matched anchor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
  /// `anchor + "\n" + output`
  After,
  /// `output + anchor`. The output already ends in a newline and the anchor
  /// starts with its own indentation, so the output gets lines of its own.
  Before,
  /// `output + "\n" + anchor`
  BeforeOnNewLine,
}

/// Indentation applied to the serialized output of a rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentRule {
  /// One level deeper than the anchor line.
  Nested,
  /// Same level as the anchor line.
  Sibling,
  /// No indentation at all.
  Flush,
}

impl IndentRule {
  fn resolve(self, captured: &str) -> String {
    match self {
      Self::Nested => increment_indent(captured),
      Self::Sibling => captured.to_owned(),
      Self::Flush => String::new(),
    }
  }
}

/// One step of a [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rung {
  pub anchor: Anchor,
  pub splice: Splice,
  pub indent: IndentRule,
}

impl Rung {
  const fn new(anchor: Anchor, splice: Splice, indent: IndentRule) -> Self {
    Self {
      anchor,
      splice,
      indent,
    }
  }

  /// Apply this rung if its anchor is present, returning the new document.
  #[must_use]
  pub fn try_apply(
    self,
    html: &str,
    tags: &[TagDescriptor],
  ) -> Option<String> {
    let found = self.anchor.find(html)?;
    let output = serialize_tag_list(tags, &self.indent.resolve(found.indent));
    let anchor = &html[found.range.clone()];

    let mut result = String::with_capacity(html.len() + output.len() + 1);
    result.push_str(&html[..found.range.start]);
    match self.splice {
      Splice::After => {
        result.push_str(anchor);
        result.push('\n');
        result.push_str(&output);
      },
      Splice::Before => {
        result.push_str(&output);
        result.push_str(anchor);
      },
      Splice::BeforeOnNewLine => {
        result.push_str(&output);
        result.push('\n');
        result.push_str(anchor);
      },
    }
    result.push_str(&html[found.range.end..]);
    Some(result)
  }
}

/// Last resort of a [`Chain`], used when no rung matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
  /// Put the unindented output in front of the whole document.
  Prepend,
  /// Put the unindented output after the document, on a new line.
  Append,
}

impl Terminal {
  #[must_use]
  pub fn apply(self, html: &str, tags: &[TagDescriptor]) -> String {
    let output = serialize_tag_list(tags, "");
    match self {
      Self::Prepend => output + html,
      Self::Append => format!("{html}\n{output}"),
    }
  }
}

/// Shared tail for chains whose section is missing entirely: after `<html>`,
/// then after the doctype, then at the very start.
const SHELL_FALLBACK: [Rung; 2] = [
  Rung::new(Anchor::HtmlOpen, Splice::After, IndentRule::Flush),
  Rung::new(Anchor::Doctype, Splice::After, IndentRule::Flush),
];

const HEAD_PREPEND_RUNGS: [Rung; 3] = [
  Rung::new(Anchor::HeadOpen, Splice::After, IndentRule::Nested),
  SHELL_FALLBACK[0],
  SHELL_FALLBACK[1],
];

const HEAD_APPEND_RUNGS: [Rung; 4] = [
  Rung::new(Anchor::HeadClose, Splice::Before, IndentRule::Nested),
  Rung::new(Anchor::BodyOpen, Splice::BeforeOnNewLine, IndentRule::Sibling),
  SHELL_FALLBACK[0],
  SHELL_FALLBACK[1],
];

const BODY_PREPEND_RUNGS: [Rung; 4] = [
  Rung::new(Anchor::BodyOpen, Splice::After, IndentRule::Nested),
  Rung::new(Anchor::HeadClose, Splice::After, IndentRule::Sibling),
  SHELL_FALLBACK[0],
  SHELL_FALLBACK[1],
];

const BODY_APPEND_RUNGS: [Rung; 2] = [
  Rung::new(Anchor::BodyClose, Splice::Before, IndentRule::Nested),
  Rung::new(Anchor::HtmlClose, Splice::BeforeOnNewLine, IndentRule::Flush),
];

/// Ordered probe chain for one placement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
  pub rungs:    &'static [Rung],
  pub terminal: Terminal,
}

impl Chain {
  /// The chain used for `inject_to`.
  #[must_use]
  pub const fn for_target(inject_to: InjectTo) -> Self {
    match inject_to {
      InjectTo::HeadPrepend => {
        Self {
          rungs:    &HEAD_PREPEND_RUNGS,
          terminal: Terminal::Prepend,
        }
      },
      InjectTo::Head => {
        Self {
          rungs:    &HEAD_APPEND_RUNGS,
          terminal: Terminal::Prepend,
        }
      },
      InjectTo::BodyPrepend => {
        Self {
          rungs:    &BODY_PREPEND_RUNGS,
          terminal: Terminal::Prepend,
        }
      },
      InjectTo::Body => {
        Self {
          rungs:    &BODY_APPEND_RUNGS,
          terminal: Terminal::Append,
        }
      },
    }
  }

  /// Walk the chain and splice `tags` in at the first matching rung.
  ///
  /// Returns `html` unchanged when `tags` is empty.
  #[must_use]
  pub fn apply(&self, html: &str, tags: &[TagDescriptor]) -> String {
    if tags.is_empty() {
      return html.to_owned();
    }

    for rung in self.rungs {
      if let Some(result) = rung.try_apply(html, tags) {
        debug!(
          "injected {} tag(s) at {:?} ({:?})",
          tags.len(),
          rung.anchor,
          rung.splice
        );
        return result;
      }
    }

    debug!(
      "no anchor found, injecting {} tag(s) via {:?}",
      tags.len(),
      self.terminal
    );
    self.terminal.apply(html, tags)
  }
}

/// Inject `tags` into the `<head>` of `html`.
///
/// With `prepend` the tags become the first children of `<head>`, otherwise
/// they go right before `</head>`. Documents without a usable head fall back
/// to the start of `<body>`, then `<html>`, the doctype, and finally the
/// start of the document.
#[must_use]
pub fn inject_to_head(
  html: &str,
  tags: &[TagDescriptor],
  prepend: bool,
) -> String {
  Chain::for_target(InjectTo::from_parts(Target::Head, prepend))
    .apply(html, tags)
}

/// Inject `tags` into the `<body>` of `html`.
///
/// With `prepend` the tags become the first children of `<body>` (or follow
/// `</head>` when there is no body), otherwise they go right before
/// `</body>`, before `</html>`, or at the end of the document.
#[must_use]
pub fn inject_to_body(
  html: &str,
  tags: &[TagDescriptor],
  prepend: bool,
) -> String {
  Chain::for_target(InjectTo::from_parts(Target::Body, prepend))
    .apply(html, tags)
}
