// src/animation/mod.rs
pub mod clock;
pub mod pose;
pub mod step;

pub use clock::{AnimationClock, Tick};
pub use pose::{Pose, VibrationParams};
pub use step::StepKind;

/// What the last frame did, for UI refresh decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
  pub step: usize,
  pub kind: StepKind,
  pub t: f64,
  pub step_changed: bool,
}

/// Drives the step script over a fixed set of original atom positions.
#[derive(Debug, Clone)]
pub struct Animator {
  sequence: Vec<String>,
  kinds: Vec<StepKind>,
  originals: Vec<[f64; 3]>,
  clock: AnimationClock,
  pose: Pose,
  vibration: VibrationParams,
}

impl Animator {
  pub fn new(
    sequence: Vec<String>,
    originals: Vec<[f64; 3]>,
    step_duration: f64,
    vibration: VibrationParams,
  ) -> Self {
    let sequence = if sequence.is_empty() {
      log::warn!("Empty animation sequence, falling back to a single idle step");
      vec![String::from("Idle")]
    } else {
      sequence
    };
    let kinds: Vec<StepKind> = sequence.iter().map(|s| StepKind::classify(s)).collect();
    for (i, (label, kind)) in sequence.iter().zip(&kinds).enumerate() {
      log::debug!("Step {}: \"{}\" -> {}", i + 1, label, kind);
    }

    Self {
      clock: AnimationClock::new(sequence.len(), step_duration),
      pose: Pose::rest(&originals),
      sequence,
      kinds,
      originals,
      vibration,
    }
  }

  /// Advances the clock by `dt` seconds and recomputes the pose.
  pub fn frame(&mut self, dt: f64) -> FrameInfo {
    let Tick { step, t, advanced } = self.clock.tick(dt);
    let kind = self.kinds[step];
    self.pose.apply(kind, t, &self.originals, &self.vibration);

    if advanced {
      log::debug!("Auto-advance to {}", self.clock.label());
    }

    FrameInfo {
      step,
      kind,
      t,
      step_changed: advanced,
    }
  }

  pub fn next_step(&mut self) -> bool {
    let moved = self.clock.next();
    if moved {
      log::debug!("Manual step: {}", self.clock.label());
    }
    moved
  }

  pub fn previous_step(&mut self) -> bool {
    let moved = self.clock.previous();
    if moved {
      log::debug!("Manual step: {}", self.clock.label());
    }
    moved
  }

  pub fn toggle_pause(&mut self) -> bool {
    let paused = !self.clock.is_paused();
    self.clock.set_paused(paused);
    paused
  }

  pub fn pose(&self) -> &Pose {
    &self.pose
  }

  pub fn clock(&self) -> &AnimationClock {
    &self.clock
  }

  pub fn sequence(&self) -> &[String] {
    &self.sequence
  }

  pub fn current_label(&self) -> &str {
    &self.sequence[self.clock.current()]
  }

  pub fn current_kind(&self) -> StepKind {
    self.kinds[self.clock.current()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::library::default_animation_sequence;

  fn water_animator() -> Animator {
    let originals = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]];
    Animator::new(default_animation_sequence(), originals, 2.0, VibrationParams::default())
  }

  #[test]
  fn test_first_frame_rotates_about_y() {
    let mut anim = water_animator();
    let info = anim.frame(0.5);
    assert_eq!(info.kind, StepKind::RotateY);
    assert!((anim.pose().rot_y - 0.25 * std::f64::consts::TAU).abs() < 1e-12);
  }

  #[test]
  fn test_script_runs_through_and_loops() {
    let mut anim = water_animator();
    let mut seen = Vec::new();
    for _ in 0..6 {
      let info = anim.frame(2.0);
      assert!(info.step_changed);
      seen.push(info.kind);
    }
    assert_eq!(seen[0], StepKind::RotateY);
    assert_eq!(seen[3], StepKind::Vibrate);
    assert_eq!(seen[5], StepKind::RotateY);
    assert_eq!(anim.clock().current(), 1);
  }

  #[test]
  fn test_zoom_scale_survives_into_next_step() {
    let mut anim = water_animator();
    anim.next_step();
    anim.frame(1.0);
    assert!((anim.pose().scale - 1.5).abs() < 1e-12);
    anim.next_step();
    anim.next_step();
    // Vibrate leaves the scale from the last zoom frame alone
    anim.frame(0.5);
    assert_eq!(anim.current_kind(), StepKind::Vibrate);
    assert!((anim.pose().scale - 1.5).abs() < 1e-12);
  }

  #[test]
  fn test_pause_keeps_pose_still() {
    let mut anim = water_animator();
    anim.frame(0.5);
    assert!(anim.toggle_pause());
    let before = anim.pose().clone();
    anim.frame(0.5);
    assert_eq!(anim.pose(), &before);
  }

  #[test]
  fn test_empty_sequence_gets_idle_step() {
    let anim = Animator::new(Vec::new(), vec![[0.0; 3]], 5.0, VibrationParams::default());
    assert_eq!(anim.sequence().len(), 1);
    assert_eq!(anim.current_kind(), StepKind::Idle);
    assert_eq!(anim.current_label(), "Idle");
  }
}
