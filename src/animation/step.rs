// src/animation/step.rs

use std::fmt;

/// Behaviour selected for one step of the animation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
  RotateY,
  RotateX,
  ZoomIn,
  ZoomOut,
  Vibrate,
  /// Slow quarter-turn about Y for labels that match nothing else.
  Idle,
}

impl StepKind {
  /// Keyword dispatch over the lower-cased label. The checks run in order, so
  /// "rotate" labels that mention any `y` resolve to `RotateY` first.
  pub fn classify(label: &str) -> Self {
    let text = label.to_lowercase();
    let has = |needle: &str| text.contains(needle);

    if has("rotate") && has("y") {
      StepKind::RotateY
    } else if has("rotate") && has("x") {
      StepKind::RotateX
    } else if has("zoom") && has("in") {
      StepKind::ZoomIn
    } else if has("zoom") && has("out") {
      StepKind::ZoomOut
    } else if has("vibrate") || has("oscillate") {
      StepKind::Vibrate
    } else {
      StepKind::Idle
    }
  }
}

impl fmt::Display for StepKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      StepKind::RotateY => "rotate Y",
      StepKind::RotateX => "rotate X",
      StepKind::ZoomIn => "zoom in",
      StepKind::ZoomOut => "zoom out",
      StepKind::Vibrate => "vibrate",
      StepKind::Idle => "idle",
    };
    f.write_str(name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_sequence_kinds() {
    let kinds: Vec<StepKind> = crate::model::library::default_animation_sequence()
      .iter()
      .map(|s| StepKind::classify(s))
      .collect();
    assert_eq!(
      kinds,
      vec![
        StepKind::RotateY,
        StepKind::ZoomIn,
        StepKind::ZoomOut,
        StepKind::Vibrate,
        StepKind::Idle,
      ]
    );
  }

  #[test]
  fn test_rotate_x_needs_no_y() {
    assert_eq!(StepKind::classify("ROTATE about X"), StepKind::RotateX);
    // "Rotate" plus any y anywhere wins
    assert_eq!(StepKind::classify("Rotate slowly about x"), StepKind::RotateY);
  }

  #[test]
  fn test_zoom_in_beats_zoom_out() {
    // "in" appears inside "zooming"
    assert_eq!(StepKind::classify("Zooming out"), StepKind::ZoomIn);
    assert_eq!(StepKind::classify("Zoom out"), StepKind::ZoomOut);
  }

  #[test]
  fn test_oscillate_is_vibration() {
    assert_eq!(StepKind::classify("Oscillate the bonds"), StepKind::Vibrate);
  }

  #[test]
  fn test_unmatched_label_is_idle() {
    assert_eq!(StepKind::classify(""), StepKind::Idle);
    assert_eq!(StepKind::classify("Highlight the lone pairs"), StepKind::Idle);
  }
}
