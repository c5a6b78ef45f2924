use crate::state::AppState;
use crate::ui::StepControls;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, FileChooserAction, FileChooserNative, FileFilter, ResponseType};
use std::cell::RefCell;
use std::rc::Rc;

/// Name of the open-file action, registered on the application.
pub const ACTION_OPEN: &str = "open";

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
    controls: Rc<StepControls>,
) {
    // --- OPEN ACTION ---
    let open_action = gtk4::gio::SimpleAction::new(ACTION_OPEN, None);
    let win_weak = window.downgrade();
    let state_weak = Rc::downgrade(&state);
    let da_weak = drawing_area.downgrade();
    let controls_weak = Rc::downgrade(&controls);

    open_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() { Some(w) => w, None => return };

        let dialog = FileChooserNative::new(
            Some("Open Molecule"),
            Some(&win),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter_any = FileFilter::new();
        filter_any.set_name(Some("Molecule Files (*.json, *.xyz, *.txt)"));
        filter_any.add_pattern("*.json");
        filter_any.add_pattern("*.xyz");
        filter_any.add_pattern("*.txt");
        filter_any.add_pattern("*.md");
        dialog.add_filter(&filter_any);

        let state_weak_inner = state_weak.clone();
        let da_weak_inner = da_weak.clone();
        let controls_inner = controls_weak.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    let path_str = path.to_string_lossy().to_string();
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path_str.clone());

                    match crate::io::load_molecule(&path_str) {
                        Ok(loaded) => {
                            if let Some(st) = state_weak_inner.upgrade() {
                                let mut s = st.borrow_mut();
                                s.load(loaded, &name);
                                if let Some(ctl) = controls_inner.upgrade() {
                                    ctl.rebuild(&s);
                                }
                            }
                            if let Some(da) = da_weak_inner.upgrade() {
                                da.queue_draw();
                            }
                        }
                        Err(e) => log::error!("Error loading {}: {}", path_str, e),
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&open_action);

    // --- EXPORT ACTION ---
    let export_action = gtk4::gio::SimpleAction::new("export", None);
    let win_weak_e = window.downgrade();
    let state_weak_e = Rc::downgrade(&state);
    let da_weak_e = drawing_area.downgrade();

    export_action.connect_activate(move |_, _| {
        let win = match win_weak_e.upgrade() { Some(w) => w, None => return };
        let dialog = FileChooserNative::new(
            Some("Export Frame"),
            Some(&win),
            FileChooserAction::Save,
            Some("Export"),
            Some("Cancel"),
        );
        dialog.set_current_name("frame.png");

        let filter_png = FileFilter::new();
        filter_png.set_name(Some("PNG Image (*.png)"));
        filter_png.add_pattern("*.png");
        dialog.add_filter(&filter_png);

        let state_inner = state_weak_e.clone();
        let da_inner = da_weak_e.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let (Some(path), Some(st), Some(da)) =
                    (d.file().and_then(|f| f.path()), state_inner.upgrade(), da_inner.upgrade())
                {
                    let path_str = path.to_string_lossy().to_string();
                    let (w, h) = (da.width().max(1), da.height().max(1));
                    if let Err(e) = crate::rendering::export_png(&st.borrow(), &path_str, w, h) {
                        log::error!("Export failed: {}", e);
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&export_action);

    // --- SAVE SETTINGS ---
    let save_action = gtk4::gio::SimpleAction::new("save_settings", None);
    let state_weak_s = Rc::downgrade(&state);
    save_action.connect_activate(move |_, _| {
        if let Some(st) = state_weak_s.upgrade() {
            log::info!("{}", st.borrow().config.save());
        }
    });
    app.add_action(&save_action);

    // --- QUIT ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
