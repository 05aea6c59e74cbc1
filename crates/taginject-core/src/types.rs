use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Tags that are rendered without a closing tag and never carry children.
pub const UNARY_TAGS: [&str; 3] = ["link", "meta", "base"];

/// Attribute map of a [`TagDescriptor`].
///
/// Entries keep their insertion order, which is the order they are written
/// out in. A `None` value stands for an attribute that is declared but unset;
/// such entries are dropped before serialization.
pub type Attributes = IndexMap<String, Option<AttrValue>>;

/// Value of a single HTML attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
  /// Boolean attribute: written as a bare name when `true`, omitted when
  /// `false`.
  Bool(bool),
  /// Numeric attribute, written as a quoted string.
  Number(serde_json::Number),
  /// String attribute, written as a quoted and escaped string.
  Str(String),
}

impl From<bool> for AttrValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<&str> for AttrValue {
  fn from(value: &str) -> Self {
    Self::Str(value.to_owned())
  }
}

impl From<String> for AttrValue {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}

impl From<i64> for AttrValue {
  fn from(value: i64) -> Self {
    Self::Number(value.into())
  }
}

impl From<u64> for AttrValue {
  fn from(value: u64) -> Self {
    Self::Number(value.into())
  }
}

/// Content of a tag: either opaque text or further descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
  /// Emitted verbatim. Never escaped, indented or inspected.
  Text(String),
  /// Nested descriptors, each serialized one indentation level deeper.
  Nodes(Vec<TagDescriptor>),
}

/// Description of a single tag to inject, including its subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDescriptor {
  /// Element name, e.g. `meta` or `script`.
  pub tag: String,

  /// Attributes in output order.
  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub attrs: Attributes,

  /// Text or nested tags. Ignored for unary tags.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub children: Option<Children>,

  /// Where this tag wants to go when applied through
  /// [`crate::apply_html_tags`]. `None` falls back to the caller's default.
  #[serde(
    default,
    alias = "injectTo",
    skip_serializing_if = "Option::is_none"
  )]
  pub inject_to: Option<InjectTo>,
}

impl TagDescriptor {
  /// Create a descriptor with no attributes and no children.
  #[must_use]
  pub fn new(tag: impl Into<String>) -> Self {
    Self {
      tag:       tag.into(),
      attrs:     Attributes::new(),
      children:  None,
      inject_to: None,
    }
  }

  /// Append an attribute.
  #[must_use]
  pub fn attr(
    mut self,
    name: impl Into<String>,
    value: impl Into<AttrValue>,
  ) -> Self {
    self.attrs.insert(name.into(), Some(value.into()));
    self
  }

  /// Declare an attribute without a value. It will not be rendered.
  #[must_use]
  pub fn unset_attr(mut self, name: impl Into<String>) -> Self {
    self.attrs.insert(name.into(), None);
    self
  }

  /// Set a text child, replacing any previous children.
  #[must_use]
  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.children = Some(Children::Text(text.into()));
    self
  }

  /// Set nested children, replacing any previous children.
  #[must_use]
  pub fn children(mut self, children: Vec<Self>) -> Self {
    self.children = Some(Children::Nodes(children));
    self
  }

  /// Pin this descriptor to an injection target.
  #[must_use]
  pub fn inject_to(mut self, inject_to: InjectTo) -> Self {
    self.inject_to = Some(inject_to);
    self
  }

  /// Whether this tag renders without a closing tag.
  #[must_use]
  pub fn is_unary(&self) -> bool {
    UNARY_TAGS.contains(&self.tag.as_str())
  }
}

/// The document section a tag is injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
  Head,
  Body,
}

/// Placement intent: a [`Target`] combined with prepend or append.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum InjectTo {
  /// Just before the closing `</head>`.
  Head,
  /// Just before the closing `</body>`.
  Body,
  /// Right after the opening `<head>`.
  #[default]
  HeadPrepend,
  /// Right after the opening `<body>`.
  BodyPrepend,
}

impl InjectTo {
  /// All placement intents, in the order [`crate::apply_html_tags`] applies
  /// them.
  pub const ALL: [Self; 4] =
    [Self::HeadPrepend, Self::Head, Self::BodyPrepend, Self::Body];

  #[must_use]
  pub const fn target(self) -> Target {
    match self {
      Self::Head | Self::HeadPrepend => Target::Head,
      Self::Body | Self::BodyPrepend => Target::Body,
    }
  }

  #[must_use]
  pub const fn prepends(self) -> bool {
    matches!(self, Self::HeadPrepend | Self::BodyPrepend)
  }

  /// Build the intent from a target and a prepend flag.
  #[must_use]
  pub const fn from_parts(target: Target, prepend: bool) -> Self {
    match (target, prepend) {
      (Target::Head, false) => Self::Head,
      (Target::Head, true) => Self::HeadPrepend,
      (Target::Body, false) => Self::Body,
      (Target::Body, true) => Self::BodyPrepend,
    }
  }

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Head => "head",
      Self::Body => "body",
      Self::HeadPrepend => "head-prepend",
      Self::BodyPrepend => "body-prepend",
    }
  }
}

impl fmt::Display for InjectTo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for InjectTo {
  type Err = TagError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|candidate| candidate.as_str().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| TagError::UnknownInjectTo(s.to_owned()))
  }
}
