// src/animation/pose.rs

use super::step::StepKind;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibrationParams {
  pub amplitude: f64,
  /// Oscillations per step.
  pub frequency: f64,
}

impl Default for VibrationParams {
  fn default() -> Self {
    Self {
      amplitude: 0.1,
      frequency: 10.0,
    }
  }
}

/// Displacement of atom `index` at normalised step time `t`. Each atom gets a
/// fixed pseudo-random direction derived from its index.
pub fn vibration_offset(index: usize, t: f64, params: &VibrationParams) -> [f64; 3] {
  let offset = (t * params.frequency * TAU).sin() * params.amplitude;
  let k = index as f64;
  [
    offset * (k * 100.0).sin(),
    offset * (k * 100.0).cos(),
    offset * (k * 50.0 + 0.5).sin(),
  ]
}

/// Transform of the molecule group for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
  pub rot_x: f64,
  pub rot_y: f64,
  pub scale: f64,
  pub positions: Vec<[f64; 3]>,
}

impl Pose {
  pub fn rest(originals: &[[f64; 3]]) -> Self {
    Self {
      rot_x: 0.0,
      rot_y: 0.0,
      scale: 1.0,
      positions: originals.to_vec(),
    }
  }

  /// Applies one behaviour. Positions are always rebuilt from `originals`;
  /// rotation and scale keep whatever earlier steps left behind unless this
  /// behaviour drives them.
  pub fn apply(&mut self, kind: StepKind, t: f64, originals: &[[f64; 3]], vibration: &VibrationParams) {
    self.positions.clear();
    self.positions.extend_from_slice(originals);

    match kind {
      StepKind::RotateY => self.rot_y = t * TAU,
      StepKind::RotateX => self.rot_x = t * TAU,
      StepKind::ZoomIn => self.scale = 1.0 + t,
      StepKind::ZoomOut => self.scale = 2.0 - t,
      StepKind::Vibrate => {
        for (i, p) in self.positions.iter_mut().enumerate() {
          let d = vibration_offset(i, t, vibration);
          p[0] += d[0];
          p[1] += d[1];
          p[2] += d[2];
        }
      }
      StepKind::Idle => self.rot_y = t * 0.25 * TAU,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ORIGINALS: [[f64; 3]; 2] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];

  #[test]
  fn test_rotation_components_persist() {
    let mut pose = Pose::rest(&ORIGINALS);
    let vib = VibrationParams::default();
    pose.apply(StepKind::RotateX, 0.5, &ORIGINALS, &vib);
    pose.apply(StepKind::RotateY, 0.25, &ORIGINALS, &vib);
    assert!((pose.rot_x - std::f64::consts::PI).abs() < 1e-12);
    assert!((pose.rot_y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
  }

  #[test]
  fn test_zoom_in_and_out_meet_at_two() {
    let mut pose = Pose::rest(&ORIGINALS);
    let vib = VibrationParams::default();
    pose.apply(StepKind::ZoomIn, 0.75, &ORIGINALS, &vib);
    assert!((pose.scale - 1.75).abs() < 1e-12);
    pose.apply(StepKind::ZoomOut, 0.0, &ORIGINALS, &vib);
    assert_eq!(pose.scale, 2.0);
  }

  #[test]
  fn test_idle_is_quarter_speed_rotation() {
    let mut pose = Pose::rest(&ORIGINALS);
    pose.apply(StepKind::Idle, 1.0, &ORIGINALS, &VibrationParams::default());
    assert!((pose.rot_y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
  }

  #[test]
  fn test_vibration_moves_atoms_and_next_frame_restores() {
    let mut pose = Pose::rest(&ORIGINALS);
    let vib = VibrationParams::default();
    // sin(2pi * 10 * 0.025) = 1, full amplitude
    pose.apply(StepKind::Vibrate, 0.025, &ORIGINALS, &vib);
    let d = vibration_offset(1, 0.025, &vib);
    assert!((pose.positions[1][0] - (1.0 + d[0])).abs() < 1e-12);
    assert!(d.iter().any(|v| v.abs() > 1e-3));

    pose.apply(StepKind::RotateY, 0.1, &ORIGINALS, &vib);
    assert_eq!(pose.positions, ORIGINALS.to_vec());
  }

  #[test]
  fn test_first_atom_only_moves_in_y_and_z() {
    // sin(0) = 0 for index 0
    let d = vibration_offset(0, 0.025, &VibrationParams::default());
    assert_eq!(d[0], 0.0);
    assert!((d[1] - 0.1).abs() < 1e-12);
  }

  #[test]
  fn test_vibration_at_step_start_is_zero() {
    let d = vibration_offset(3, 0.0, &VibrationParams::default());
    assert!(d.iter().all(|v| v.abs() < 1e-15));
  }
}
