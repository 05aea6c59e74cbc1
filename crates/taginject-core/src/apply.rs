use crate::{
  check::head_tag_insert_check,
  inject::{inject_to_body, inject_to_head},
  types::{InjectTo, TagDescriptor, Target},
};

/// Options for [`apply_html_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
  /// Target for tags that do not name their own.
  pub default_inject_to: InjectTo,
  /// Whether to warn about head-bound tags that do not belong in `<head>`.
  pub check_head:        bool,
}

impl Default for ApplyOptions {
  fn default() -> Self {
    Self {
      default_inject_to: InjectTo::default(),
      check_head:        true,
    }
  }
}

impl ApplyOptions {
  #[must_use]
  pub const fn with_default(default_inject_to: InjectTo) -> Self {
    Self {
      default_inject_to,
      check_head: true,
    }
  }
}

/// Inject a mixed set of tags, each at its own target.
///
/// Tags without an explicit [`TagDescriptor::inject_to`] use
/// [`ApplyOptions::default_inject_to`]. Tags are grouped per target (keeping
/// their relative order) and applied in the order head-prepend, head,
/// body-prepend, body, each step working on the output of the previous one.
/// Head-bound groups are run through [`head_tag_insert_check`] first unless
/// [`ApplyOptions::check_head`] is off.
#[must_use]
pub fn apply_html_tags(
  html: &str,
  tags: &[TagDescriptor],
  options: &ApplyOptions,
) -> String {
  let mut result = html.to_owned();

  for inject_to in InjectTo::ALL {
    let group: Vec<TagDescriptor> = tags
      .iter()
      .filter(|tag| {
        tag.inject_to.unwrap_or(options.default_inject_to) == inject_to
      })
      .cloned()
      .collect();
    if group.is_empty() {
      continue;
    }

    result = match inject_to.target() {
      Target::Head => {
        if options.check_head {
          head_tag_insert_check(&group);
        }
        inject_to_head(&result, &group, inject_to.prepends())
      },
      Target::Body => inject_to_body(&result, &group, inject_to.prepends()),
    };
  }

  result
}

#[cfg(test)]
mod tests {
  use super::*;

  const DOC: &str = "<html>\n  <head>\n  </head>\n  <body>\n  </body>\n</html>";

  #[test]
  fn test_apply_groups_by_target() {
    let tags = vec![
      TagDescriptor::new("script")
        .attr("src", "/late.js")
        .inject_to(InjectTo::Body),
      TagDescriptor::new("meta").attr("charset", "utf-8"),
      TagDescriptor::new("title")
        .text("Docs")
        .inject_to(InjectTo::Head),
      TagDescriptor::new("div")
        .attr("id", "app")
        .inject_to(InjectTo::BodyPrepend),
    ];

    assert_eq!(
      apply_html_tags(DOC, &tags, &ApplyOptions::default()),
      "<html>\n  <head>\n    <meta charset=\"utf-8\">\n\n    \
       <title>Docs</title>\n  </head>\n  <body>\n    <div \
       id=\"app\"></div>\n\n    <script src=\"/late.js\"></script>\n  \
       </body>\n</html>"
    );
  }

  #[test]
  fn test_apply_default_target() {
    let tags = vec![TagDescriptor::new("link").attr("rel", "icon")];
    let options = ApplyOptions::with_default(InjectTo::Head);
    assert_eq!(
      apply_html_tags(DOC, &tags, &options),
      "<html>\n  <head>\n    <link rel=\"icon\">\n  </head>\n  <body>\n  \
       </body>\n</html>"
    );
  }

  #[test]
  fn test_apply_nothing() {
    let options = ApplyOptions::with_default(InjectTo::Body);
    assert_eq!(apply_html_tags(DOC, &[], &options), DOC);
  }
}
