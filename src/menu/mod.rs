// src/menu/mod.rs

use crate::state::AppState;
use crate::ui::StepControls;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  drawing_area: &DrawingArea,
  controls: Rc<StepControls>,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), drawing_area, controls.clone());
  actions_view::setup(app, state, drawing_area, controls);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.open", &["<Primary>o"]);
  app.set_accels_for_action("app.export", &["<Primary>e"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.restart", &["<Primary>r"]);
  app.set_accels_for_action("app.reset_zoom", &["<Primary>0"]);
  app.set_accels_for_action("app.save_settings", &["<Primary>s"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Open..."), Some("app.open"));
  file_menu.append(Some("Export Frame as PNG..."), Some("app.export"));
  file_menu.append(Some("Save Settings"), Some("app.save_settings"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Restart Animation"), Some("app.restart"));
  view_menu.append(Some("Reset Zoom"), Some("app.reset_zoom"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("Controls & Shortcuts"), Some("app.help_controls"));
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
