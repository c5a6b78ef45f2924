// src/ui/controls.rs

use crate::menu::actions_file::ACTION_OPEN;
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{glib, Align, Box, Button, DrawingArea, Frame, Label, ListBox, Orientation, ProgressBar, SelectionMode};
use std::cell::RefCell;
use std::rc::Rc;

/// Side panel: description, step list, progress and navigation buttons.
pub struct StepControls {
    pub container: Box,
    description: Label,
    step_list: ListBox,
    step_labels: RefCell<Vec<Label>>,
    step_text: Label,
    progress: ProgressBar,
    prev_button: Button,
    next_button: Button,
    pause_button: Button,
}

impl StepControls {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Vertical, 10);
        container.set_width_request(260);
        container.set_margin_start(10);
        container.set_margin_end(10);
        container.set_margin_top(10);
        container.set_margin_bottom(10);

        let title = Label::new(Some("<b>Molecule</b>"));
        title.set_use_markup(true);
        title.set_halign(Align::Start);
        container.append(&title);

        let description = Label::new(None);
        description.set_wrap(true);
        description.set_xalign(0.0);
        container.append(&description);

        let frame = Frame::new(Some("Animation Steps"));
        let step_list = ListBox::new();
        step_list.set_selection_mode(SelectionMode::None);
        step_list.set_margin_top(6);
        step_list.set_margin_bottom(6);
        frame.set_child(Some(&step_list));
        container.append(&frame);

        let step_text = Label::new(None);
        step_text.set_halign(Align::Start);
        container.append(&step_text);

        let progress = ProgressBar::new();
        container.append(&progress);

        let buttons = Box::new(Orientation::Horizontal, 6);
        buttons.set_halign(Align::Center);
        let prev_button = Button::with_label("Previous");
        let pause_button = Button::with_label("Pause");
        let next_button = Button::with_label("Next");
        for b in [&prev_button, &pause_button, &next_button] {
            // Keyboard focus stays off the buttons so Space/arrows reach the window
            b.set_focus_on_click(false);
            b.set_focusable(false);
            buttons.append(b);
        }
        container.append(&buttons);

        let open_button = Button::with_label("Open Molecule...");
        open_button.set_action_name(Some(&open_action_name()));
        open_button.set_focus_on_click(false);
        container.append(&open_button);

        Self {
            container,
            description,
            step_list,
            step_labels: RefCell::new(Vec::new()),
            step_text,
            progress,
            prev_button,
            next_button,
            pause_button,
        }
    }

    /// Repopulates the step list after a new molecule is loaded.
    pub fn rebuild(&self, state: &AppState) {
        while let Some(child) = self.step_list.first_child() {
            self.step_list.remove(&child);
        }

        let mut labels = self.step_labels.borrow_mut();
        labels.clear();
        for (i, step) in state.animator.sequence().iter().enumerate() {
            let label = Label::new(Some(&format!("{}. {}", i + 1, step)));
            label.set_wrap(true);
            label.set_xalign(0.0);
            label.set_margin_start(6);
            label.set_margin_end(6);
            self.step_list.append(&label);
            labels.push(label);
        }
        drop(labels);

        self.description.set_text(&state.molecule.description);
        self.update(state);
    }

    /// Highlights the active step and refreshes progress text.
    pub fn update(&self, state: &AppState) {
        let clock = state.animator.clock();
        let current = clock.current();

        for (i, (label, step)) in self
            .step_labels
            .borrow()
            .iter()
            .zip(state.animator.sequence())
            .enumerate()
        {
            let text = glib::markup_escape_text(&format!("{}. {}", i + 1, step));
            if i == current {
                label.set_markup(&format!("<b>{}</b>", text));
            } else {
                label.set_markup(&text);
            }
        }

        self.step_text.set_text(&clock.label());
        self.progress.set_fraction(clock.progress_fraction());
        self.prev_button.set_sensitive(current > 0);
        self.next_button.set_sensitive(current + 1 < clock.total());
        self.pause_button
            .set_label(if clock.is_paused() { "Play" } else { "Pause" });
    }

    pub fn connect(self: &Rc<Self>, state: Rc<RefCell<AppState>>, drawing_area: &DrawingArea) {
        let make_handler = |action: fn(&mut AppState)| {
            let s = state.clone();
            let da = drawing_area.clone();
            let ctl = Rc::downgrade(self);
            move |_: &Button| {
                let mut st = s.borrow_mut();
                action(&mut *st);
                if let Some(ctl) = ctl.upgrade() {
                    ctl.update(&st);
                }
                da.queue_draw();
            }
        };

        self.prev_button.connect_clicked(make_handler(|st| {
            st.animator.previous_step();
        }));
        self.next_button.connect_clicked(make_handler(|st| {
            st.animator.next_step();
        }));
        self.pause_button.connect_clicked(make_handler(|st| {
            let paused = st.animator.toggle_pause();
            log::info!("Animation {}", if paused { "paused" } else { "resumed" });
        }));
    }
}

fn open_action_name() -> String {
    format!("app.{}", ACTION_OPEN)
}

impl Default for StepControls {
    fn default() -> Self {
        Self::new()
    }
}
