use log::warn;

use crate::types::TagDescriptor;

// https://developer.mozilla.org/en-US/docs/Web/HTML/Element/head#see_also
const ELEMENTS_ALLOWED_IN_HEAD: [&str; 8] = [
  "title", "base", "link", "style", "meta", "script", "noscript", "template",
];

/// Names of tags that are not permitted inside `<head>`, deduplicated and in
/// order of first appearance.
#[must_use]
pub fn disallowed_head_tags(tags: &[TagDescriptor]) -> Vec<&str> {
  let mut disallowed: Vec<&str> = Vec::new();
  for tag in tags {
    let name = tag.tag.as_str();
    if !ELEMENTS_ALLOWED_IN_HEAD.contains(&name) && !disallowed.contains(&name)
    {
      disallowed.push(name);
    }
  }
  disallowed
}

/// Warn when tags headed for `<head>` are not valid head content.
///
/// This only logs; the tags are still injected as requested.
pub fn head_tag_insert_check(tags: &[TagDescriptor]) {
  let disallowed = disallowed_head_tags(tags);
  if disallowed.is_empty() {
    return;
  }

  let listed = disallowed
    .iter()
    .map(|name| format!("<{name}>"))
    .collect::<Vec<_>>()
    .join(",");
  warn!(
    "[{listed}] can not be used inside the <head> Element, please check the \
     'inject_to' value"
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_disallowed_head_tags_deduplicates() {
    let tags = vec![
      TagDescriptor::new("div"),
      TagDescriptor::new("div"),
      TagDescriptor::new("title"),
      TagDescriptor::new("p"),
    ];
    assert_eq!(disallowed_head_tags(&tags), ["div", "p"]);
  }

  #[test]
  fn test_disallowed_head_tags_all_allowed() {
    let tags: Vec<TagDescriptor> = ELEMENTS_ALLOWED_IN_HEAD
      .iter()
      .map(|name| TagDescriptor::new(*name))
      .collect();
    assert!(disallowed_head_tags(&tags).is_empty());
    assert!(disallowed_head_tags(&[]).is_empty());
  }

  #[test]
  fn test_check_is_case_sensitive() {
    // Descriptor names are used as given; `TITLE` is not on the list.
    let tags = vec![TagDescriptor::new("TITLE")];
    assert_eq!(disallowed_head_tags(&tags), ["TITLE"]);
  }
}
