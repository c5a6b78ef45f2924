// src/utils/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static CONSOLE: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Routes `log` records into the viewer's console pane.
struct ConsoleLogger;

const TAGS: [(&str, &str); 4] = [
  ("error", "#d32f2f"),
  ("warn", "#ef6c00"),
  ("info", "#1565c0"),
  ("debug", "#8a8a8a"),
];

pub fn init(view: &TextView, max_level: LevelFilter) -> Result<(), SetLoggerError> {
  let tag_table = view.buffer().tag_table();
  for (name, color) in TAGS {
    if tag_table.lookup(name).is_none() {
      let tag = gtk4::TextTag::new(Some(name));
      tag.set_property("foreground", color);
      if name == "error" {
        tag.set_property("weight", 700);
      }
      tag_table.add(&tag);
    }
  }

  let _ = CONSOLE.set(view.downgrade().into());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

fn tag_for(level: Level) -> &'static str {
  match level {
    Level::Error => "error",
    Level::Warn => "warn",
    Level::Info => "info",
    Level::Debug | Level::Trace => "debug",
  }
}

impl log::Log for ConsoleLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let level = record.level();
    let msg = format!("{:<5} {}\n", level, record.args());
    if level <= Level::Warn {
      eprint!("{}", msg);
    }

    // GTK widgets may only be touched from the main context.
    glib::MainContext::default().spawn_local(async move {
      let Some(view) = CONSOLE.get().and_then(|weak| weak.upgrade()) else {
        return;
      };
      let buffer = view.buffer();
      let mut end = buffer.end_iter();
      buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_for(level)]);

      let mark = buffer.create_mark(None, &buffer.end_iter(), false);
      view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
      buffer.delete_mark(&mark);
    });
  }

  fn flush(&self) {}
}
