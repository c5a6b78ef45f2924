// src/menu/actions_view.rs

use crate::state::AppState;
use crate::ui::StepControls;
use gtk4::prelude::*;
use gtk4::{Application, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
    app: &Application,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
    controls: Rc<StepControls>,
) {
    // 1. Restart script from step 1 with the current config
    let act_restart = gtk4::gio::SimpleAction::new("restart", None);
    let s_restart = state.clone();
    let da_restart = drawing_area.downgrade();
    let ctl_restart = Rc::downgrade(&controls);

    act_restart.connect_activate(move |_, _| {
        let mut st = s_restart.borrow_mut();
        let config = st.config.clone();
        st.apply_config(config);
        log::info!("Animation restarted");
        if let Some(ctl) = ctl_restart.upgrade() {
            ctl.update(&st);
        }
        if let Some(da) = da_restart.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_restart);

    // 2. Reset mouse-wheel zoom
    let act_zoom = gtk4::gio::SimpleAction::new("reset_zoom", None);
    let s_zoom = state.clone();
    let da_zoom = drawing_area.downgrade();

    act_zoom.connect_activate(move |_, _| {
        s_zoom.borrow_mut().user_zoom = 1.0;
        if let Some(da) = da_zoom.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_zoom);
}
