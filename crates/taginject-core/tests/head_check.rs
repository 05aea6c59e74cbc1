#![allow(clippy::expect_used, reason = "Expect is acceptable in tests")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use taginject_core::{
  ApplyOptions,
  InjectTo,
  TagDescriptor,
  apply_html_tags,
  head_tag_insert_check,
};

/// Collects every warning emitted in this test binary.
struct CaptureLogger {
  warnings: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= Level::Warn
  }

  fn log(&self, record: &Record) {
    if self.enabled(record.metadata()) {
      self
        .warnings
        .lock()
        .expect("logger mutex")
        .push(record.args().to_string());
    }
  }

  fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
  warnings: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
  std::mem::take(&mut *LOGGER.warnings.lock().expect("logger mutex"))
}

// A single test so the global logger is not shared between parallel tests.
#[test]
fn test_head_tag_insert_check_warnings() {
  log::set_logger(&LOGGER).expect("logger not yet installed");
  log::set_max_level(LevelFilter::Warn);

  head_tag_insert_check(&[
    TagDescriptor::new("div"),
    TagDescriptor::new("div"),
    TagDescriptor::new("title"),
  ]);
  assert_eq!(take_warnings(), [
    "[<div>] can not be used inside the <head> Element, please check the \
     'inject_to' value"
  ]);

  head_tag_insert_check(&[]);
  head_tag_insert_check(&[
    TagDescriptor::new("meta"),
    TagDescriptor::new("script"),
  ]);
  assert!(take_warnings().is_empty());

  head_tag_insert_check(&[
    TagDescriptor::new("span"),
    TagDescriptor::new("link"),
    TagDescriptor::new("p"),
    TagDescriptor::new("span"),
  ]);
  assert_eq!(take_warnings(), [
    "[<span>,<p>] can not be used inside the <head> Element, please check \
     the 'inject_to' value"
  ]);

  // Body-bound tags are never checked, head-bound ones are, and the
  // document is modified either way.
  let html = "<head></head><body></body>";
  let out = apply_html_tags(
    html,
    &[
      TagDescriptor::new("div").inject_to(InjectTo::Body),
      TagDescriptor::new("p").inject_to(InjectTo::Head),
    ],
    &ApplyOptions::default(),
  );
  assert_eq!(
    out,
    "<head>  <p></p>\n</head><body>  <div></div>\n</body>"
  );
  assert_eq!(take_warnings(), [
    "[<p>] can not be used inside the <head> Element, please check the \
     'inject_to' value"
  ]);

  let quiet = ApplyOptions {
    check_head: false,
    ..ApplyOptions::default()
  };
  let _ = apply_html_tags(html, &[TagDescriptor::new("p")], &quiet);
  assert!(take_warnings().is_empty());
}
