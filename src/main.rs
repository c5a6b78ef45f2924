use gtk4::prelude::*;
use gtk4::{glib, Application, ApplicationWindow, DrawingArea, Frame, Orientation, Paned, ScrolledWindow, TextView};
use gtk4::Box as GtkBox;
use std::cell::RefCell;
use std::rc::Rc;

pub mod animation;
pub mod config;
pub mod io;
pub mod menu;
pub mod model;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::{setup_interactions, StepControls};

fn main() -> glib::ExitCode {
    // Optional first argument: molecule file (.json, .xyz, .txt)
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "molanim".to_string());
    let input = args.next();

    let app = Application::builder()
        .application_id("org.molanim.molanim")
        .build();

    app.connect_activate(move |app| build_ui(app, input.as_deref()));
    // GTK must not see the file argument, it would expect an "open" handler
    app.run_with_args(&[program])
}

fn build_ui(app: &Application, input: Option<&str>) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("MolAnim - Molecule Animation Viewer")
        .default_width(1100)
        .default_height(760)
        .build();

    // Console first so startup messages land in it
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(6).bottom_margin(6)
        .build();
    if let Err(e) = utils::logger::init(&console_view, log::LevelFilter::Debug) {
        eprintln!("Logger already initialised: {}", e);
    }

    let mut initial_state = AppState::new();
    log::info!("{}", initial_state.load_config());
    match input {
        Some(path) => match io::load_molecule(path) {
            Ok(loaded) => initial_state.load(loaded, path),
            Err(e) => {
                log::error!("Error loading {}: {}. Showing the built-in demo.", path, e);
                log::info!("{}", initial_state.report());
            }
        },
        None => log::info!("{}", initial_state.report()),
    }
    let state = Rc::new(RefCell::new(initial_state));

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // 2. MAIN CONTENT: Step panel | (Drawing over Console)
    let main_hbox = GtkBox::new(Orientation::Horizontal, 0);

    let drawing_area = DrawingArea::new();
    drawing_area.set_hexpand(true);
    drawing_area.set_vexpand(true);

    let info_frame = Frame::new(None);
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    let right_paned = Paned::new(Orientation::Vertical);
    right_paned.set_start_child(Some(&drawing_area));
    right_paned.set_end_child(Some(&info_frame));
    right_paned.set_resize_end_child(false);
    right_paned.set_hexpand(true);

    let controls = Rc::new(StepControls::new());
    controls.rebuild(&state.borrow());
    controls.connect(state.clone(), &drawing_area);

    main_hbox.append(&controls.container);
    main_hbox.append(&right_paned);

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &drawing_area, controls.clone());

    root_vbox.append(&menu_bar);
    root_vbox.append(&main_hbox);

    // --- Setup Logic ---
    setup_interactions(&window, state.clone(), &drawing_area, controls.clone());

    // Drawing Function
    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();
        let (w, h) = (w as f64, h as f64);
        let result = rendering::draw_molecule(cr, &st, w, h)
            .and_then(|_| rendering::draw_overlay(cr, &st, w, h));
        if let Err(e) = result {
            log::error!("Drawing failed: {}", e);
        }
    });

    // Frame clock: fixed time step per tick
    let frame_interval = state.borrow().config.frame_interval();
    let s = state.clone();
    let da_weak = drawing_area.downgrade();
    let ctl = controls.clone();
    glib::timeout_add_local(frame_interval, move || {
        let Some(da) = da_weak.upgrade() else {
            return glib::ControlFlow::Break;
        };
        let mut st = s.borrow_mut();
        let info = st.advance_frame();
        if info.step_changed {
            ctl.update(&st);
        }
        da.queue_draw();
        glib::ControlFlow::Continue
    });

    window.present();
}
