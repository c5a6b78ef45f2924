// src/ui/interactions.rs

use super::controls::StepControls;
use crate::state::AppState;
use gdk4 as gdk;
use gtk4::glib;
use gtk4::{self as gtk, prelude::*};
use gtk4::{ApplicationWindow, EventControllerKey, EventControllerScroll, EventControllerScrollFlags, PropagationPhase};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
  PreviousStep,
  NextStep,
  TogglePause,
}

pub fn key_command(keyval: gdk::Key) -> Option<KeyCommand> {
  if keyval == gdk::Key::Left {
    Some(KeyCommand::PreviousStep)
  } else if keyval == gdk::Key::Right {
    Some(KeyCommand::NextStep)
  } else if keyval == gdk::Key::space {
    Some(KeyCommand::TogglePause)
  } else {
    None
  }
}

pub fn setup_interactions(
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  drawing_area: &gtk::DrawingArea,
  controls: Rc<StepControls>,
) {
  // 1. KEYBOARD: Left / Right step, Space pauses
  let key_controller = EventControllerKey::new();
  let s = state.clone();
  let da = drawing_area.clone();

  // Capture: run before a focused button's own Space/arrow bindings
  key_controller.set_propagation_phase(PropagationPhase::Capture);

  key_controller.connect_key_pressed(move |_, keyval, _keycode, _modifiers| {
    let Some(command) = key_command(keyval) else {
      return glib::Propagation::Proceed;
    };
    let mut st = s.borrow_mut();

    match command {
      KeyCommand::PreviousStep => {
        st.animator.previous_step();
      }
      KeyCommand::NextStep => {
        st.animator.next_step();
      }
      KeyCommand::TogglePause => {
        let paused = st.animator.toggle_pause();
        log::info!("Animation {}", if paused { "paused" } else { "resumed" });
      }
    }

    controls.update(&st);
    da.queue_draw();
    glib::Propagation::Stop
  });
  window.add_controller(key_controller);

  // 2. SCROLL (ZOOM)
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let s = state.clone();
  let da = drawing_area.clone();
  scroll.connect_scroll(move |_, _, dy| {
    let mut st = s.borrow_mut();
    if dy > 0.0 {
      st.zoom_by(0.9);
    } else {
      st.zoom_by(1.1);
    }
    da.queue_draw();
    glib::Propagation::Stop
  });
  drawing_area.add_controller(scroll);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_navigation_keys() {
    assert_eq!(key_command(gdk::Key::Left), Some(KeyCommand::PreviousStep));
    assert_eq!(key_command(gdk::Key::Right), Some(KeyCommand::NextStep));
    assert_eq!(key_command(gdk::Key::space), Some(KeyCommand::TogglePause));
  }

  #[test]
  fn test_other_keys_pass_through() {
    assert_eq!(key_command(gdk::Key::Return), None);
    assert_eq!(key_command(gdk::Key::a), None);
  }
}
