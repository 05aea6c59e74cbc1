//! Turning [`TagDescriptor`] trees back into markup.
//!
//! Output is line oriented: every descriptor in a list becomes one line
//! prefixed with the current indentation and terminated by `\n`. Nested lists
//! are indented one level deeper than their parent.

use crate::types::{AttrValue, Children, TagDescriptor};

/// Derive the indentation of a child level from its parent.
///
/// Tab-indented documents get another tab, everything else (including an
/// empty indentation) gets two spaces.
#[must_use]
pub fn increment_indent(indent: &str) -> String {
  let step = if indent.starts_with('\t') { '\t' } else { ' ' };
  let mut next = String::with_capacity(indent.len() + 2);
  next.push_str(indent);
  next.push(step);
  if step == ' ' {
    next.push(' ');
  }
  next
}

/// Serialize the children of a tag.
///
/// Text is returned untouched. Nested descriptors are serialized one per line
/// at `indent`, in the order given.
#[must_use]
pub fn serialize_tags(children: Option<&Children>, indent: &str) -> String {
  match children {
    Some(Children::Text(text)) => text.clone(),
    Some(Children::Nodes(tags)) => serialize_tag_list(tags, indent),
    None => String::new(),
  }
}

/// Serialize a list of descriptors, one line each, at `indent`.
#[must_use]
pub fn serialize_tag_list(tags: &[TagDescriptor], indent: &str) -> String {
  let mut out = String::new();
  for tag in tags {
    out.push_str(indent);
    out.push_str(&serialize_tag(tag, indent));
    out.push('\n');
  }
  out
}

/// Serialize a single descriptor.
///
/// Unary tags (`link`, `meta`, `base`) never get a closing tag and any
/// children they carry are dropped. `indent` is the indentation of the line
/// the opening tag sits on; nested children go one level deeper.
#[must_use]
pub fn serialize_tag(tag: &TagDescriptor, indent: &str) -> String {
  let attrs = serialize_attrs(
    tag
      .attrs
      .iter()
      .filter_map(|(name, value)| Some((name.as_str(), value.as_ref()?))),
  );

  if tag.is_unary() {
    return format!("<{}{attrs}>", tag.tag);
  }

  format!(
    "<{name}{attrs}>{children}</{name}>",
    name = tag.tag,
    children = serialize_tags(tag.children.as_ref(), &increment_indent(indent)),
  )
}

/// Serialize present attributes into a string with a leading space per entry.
///
/// Callers must drop unset attributes beforehand; every pair passed here is
/// rendered. `true` booleans render as a bare name and `false` booleans are
/// skipped. Strings and numbers are written as double-quoted JSON string
/// literals, so quotes, backslashes and control characters come out escaped.
#[must_use]
pub fn serialize_attrs<'a, I>(attrs: I) -> String
where
  I: IntoIterator<Item = (&'a str, &'a AttrValue)>,
{
  let mut out = String::new();
  for (name, value) in attrs {
    match value {
      AttrValue::Bool(true) => {
        out.push(' ');
        out.push_str(name);
      },
      AttrValue::Bool(false) => {},
      AttrValue::Number(number) => {
        push_quoted(&mut out, name, &number_to_string(number));
      },
      AttrValue::Str(text) => {
        push_quoted(&mut out, name, text);
      },
    }
  }
  out
}

/// Render a number the way a JavaScript `String(n)` would for the values that
/// show up in attributes: integral floats lose their `.0`.
fn number_to_string(number: &serde_json::Number) -> String {
  if let Some(value) = number.as_f64()
    && number.is_f64()
    && value.fract() == 0.0
    && value.abs() < 1e21
  {
    if value == 0.0 {
      return "0".to_owned();
    }
    return format!("{value:.0}");
  }
  number.to_string()
}

fn push_quoted(out: &mut String, name: &str, value: &str) {
  out.push(' ');
  out.push_str(name);
  out.push('=');
  // `Value`'s Display is infallible and yields a JSON string literal.
  out.push_str(&serde_json::Value::String(value.to_owned()).to_string());
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::InjectTo;

  #[test]
  fn test_increment_indent() {
    assert_eq!(increment_indent(""), "  ");
    assert_eq!(increment_indent("  "), "    ");
    assert_eq!(increment_indent("\t"), "\t\t");
    // only the first character decides
    assert_eq!(increment_indent(" \t"), " \t  ");
    assert_eq!(increment_indent("\t "), "\t \t");
  }

  #[test]
  fn test_serialize_tag_with_mixed_attrs() {
    let tag = TagDescriptor::new("div")
      .attr("class", "x")
      .attr("disabled", true)
      .attr("hidden", false)
      .text("hi");

    assert_eq!(serialize_tag(&tag, ""), r#"<div class="x" disabled>hi</div>"#);
  }

  #[test]
  fn test_unset_attrs_are_skipped() {
    let tag = TagDescriptor::new("script")
      .unset_attr("nonce")
      .attr("src", "/a.js");

    assert_eq!(serialize_tag(&tag, ""), r#"<script src="/a.js"></script>"#);
  }

  #[test]
  fn test_attr_values_are_json_escaped() {
    let tag = TagDescriptor::new("meta")
      .attr("content", "say \"hi\"\\\n")
      .attr("data-n", 42_i64);

    assert_eq!(
      serialize_tag(&tag, ""),
      r#"<meta content="say \"hi\"\\\n" data-n="42">"#
    );
  }

  #[test]
  fn test_integral_floats_drop_fraction() {
    let tag: TagDescriptor = serde_json::from_value(serde_json::json!({
      "tag": "meta",
      "attrs": { "a": 1.0, "b": 1e3, "c": 2.5, "d": -0.0, "e": 7 }
    }))
    .expect("valid descriptor");

    assert_eq!(
      serialize_tag(&tag, ""),
      r#"<meta a="1" b="1000" c="2.5" d="0" e="7">"#
    );
  }

  #[test]
  fn test_unary_tag_ignores_children() {
    let bare = TagDescriptor::new("link").attr("rel", "icon");
    let with_children = bare
      .clone()
      .children(vec![TagDescriptor::new("span").text("nope")]);

    assert_eq!(serialize_tag(&bare, ""), r#"<link rel="icon">"#);
    assert_eq!(serialize_tag(&with_children, "  "), serialize_tag(&bare, "  "));
  }

  #[test]
  fn test_text_children_are_verbatim() {
    let tag = TagDescriptor::new("style").text("\n  body { color: <red> }\n");

    assert_eq!(
      serialize_tag(&tag, "    "),
      "<style>\n  body { color: <red> }\n</style>"
    );
  }

  #[test]
  fn test_nested_children_indent_per_level() {
    let tag = TagDescriptor::new("noscript").children(vec![
      TagDescriptor::new("div")
        .children(vec![TagDescriptor::new("p").text("enable js")]),
    ]);

    assert_eq!(
      serialize_tag_list(std::slice::from_ref(&tag), "  "),
      "  <noscript>    <div>      <p>enable js</p>\n</div>\n</noscript>\n"
    );
    assert_eq!(
      serialize_tag_list(&[tag], "\t"),
      "\t<noscript>\t\t<div>\t\t\t<p>enable js</p>\n</div>\n</noscript>\n"
    );
  }

  #[test]
  fn test_serialize_tags_empty_and_missing() {
    assert_eq!(serialize_tags(None, "  "), "");
    assert_eq!(serialize_tags(Some(&Children::Nodes(Vec::new())), "  "), "");
    assert_eq!(serialize_tag_list(&[], ""), "");
  }

  #[test]
  fn test_list_keeps_order_and_duplicates() {
    let tags = vec![
      TagDescriptor::new("meta").attr("name", "a"),
      TagDescriptor::new("meta").attr("name", "b"),
      TagDescriptor::new("meta").attr("name", "a"),
    ];

    assert_eq!(
      serialize_tag_list(&tags, ""),
      "<meta name=\"a\">\n<meta name=\"b\">\n<meta name=\"a\">\n"
    );
  }

  #[test]
  fn test_inject_to_is_not_serialized_as_attr() {
    let tag = TagDescriptor::new("title")
      .text("Docs")
      .inject_to(InjectTo::Head);

    assert_eq!(serialize_tag(&tag, ""), "<title>Docs</title>");
  }
}
