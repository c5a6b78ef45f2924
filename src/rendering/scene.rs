// src/rendering/scene.rs

use crate::model::element_style;
use crate::state::AppState;
use nalgebra::{Point3, Rotation3, Vector3};

/// Anything closer to the camera than this is culled.
const NEAR_PLANE: f64 = 0.1;

pub struct RenderAtom {
  pub screen_pos: [f64; 3], // x, y in pixels, z = distance from camera
  pub radius: f64,          // pixels
  pub element: String,
  pub index: usize,
}

#[derive(Clone)]
pub struct RenderBond {
  pub start: [f64; 3],
  pub end: [f64; 3],
  pub radius: f64,
}

/// Perspective camera on +Z looking at the origin.
pub struct Camera {
  pub distance: f64,
  pub focal: f64,
  pub width: f64,
  pub height: f64,
}

impl Camera {
  /// `fov_deg` is the vertical field of view, as in most 3D toolkits.
  pub fn new(distance: f64, fov_deg: f64, width: f64, height: f64) -> Self {
    let focal = (height * 0.5) / (fov_deg.to_radians() * 0.5).tan();
    Self {
      distance,
      focal,
      width,
      height,
    }
  }

  /// World point -> (screen x, screen y, depth). None when behind the near plane.
  pub fn project(&self, p: &Point3<f64>) -> Option<[f64; 3]> {
    let depth = self.distance - p.z;
    if depth < NEAR_PLANE {
      return None;
    }
    let k = self.focal / depth;
    Some([
      self.width * 0.5 + p.x * k,
      self.height * 0.5 - p.y * k,
      depth,
    ])
  }

  /// Pixel size of a world length seen at `depth`.
  pub fn pixels(&self, length: f64, depth: f64) -> f64 {
    length * self.focal / depth
  }
}

/// Group transform: centre, scale, rotate about X after Y.
pub struct GroupTransform {
  center: Vector3<f64>,
  scale: f64,
  rotation: Rotation3<f64>,
}

impl GroupTransform {
  pub fn new(center: [f64; 3], scale: f64, rot_x: f64, rot_y: f64) -> Self {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), rot_x)
      * Rotation3::from_axis_angle(&Vector3::y_axis(), rot_y);
    Self {
      center: Vector3::from(center),
      scale,
      rotation,
    }
  }

  pub fn apply(&self, p: [f64; 3]) -> Point3<f64> {
    // Pivot is the bounding-box centre, not the coordinate origin.
    let local = (Vector3::from(p) - self.center) * self.scale;
    Point3::from(self.rotation * local)
  }
}

/// Projects the current animation frame into screen space.
pub fn calculate_scene(state: &AppState, win_w: f64, win_h: f64) -> (Vec<RenderAtom>, Vec<RenderBond>) {
  let pose = state.animator.pose();
  let style = &state.config.style;
  let scale = pose.scale * state.user_zoom;

  let camera = Camera::new(
    state.config.camera_distance,
    state.config.field_of_view,
    win_w,
    win_h,
  );
  let transform = GroupTransform::new(state.center, scale, pose.rot_x, pose.rot_y);

  let mut render_atoms = Vec::with_capacity(pose.positions.len());
  for (i, atom) in state.molecule.atoms.iter().enumerate() {
    let Some(&pos) = pose.positions.get(i) else {
      continue;
    };
    let Some(screen) = camera.project(&transform.apply(pos)) else {
      continue;
    };
    let (raw_radius, _) = element_style(&atom.element);
    render_atoms.push(RenderAtom {
      screen_pos: screen,
      radius: camera.pixels(raw_radius * style.atom_scale * scale, screen[2]),
      element: atom.element.clone(),
      index: i,
    });
  }

  // Rebuilt from the posed positions every frame
  let mut render_bonds = Vec::with_capacity(state.bonds.len());
  for bond in &state.bonds {
    let (p1, p2) = bond.endpoints(&pose.positions);
    let (Some(start), Some(end)) = (
      camera.project(&transform.apply(p1)),
      camera.project(&transform.apply(p2)),
    ) else {
      continue;
    };
    let mid_depth = (start[2] + end[2]) * 0.5;
    render_bonds.push(RenderBond {
      start,
      end,
      radius: camera.pixels(style.bond_radius * scale, mid_depth),
    });
  }

  (render_atoms, render_bonds)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::animation::StepKind;
  use crate::io::AnimatedMolecule;
  use crate::config::Config;

  #[test]
  fn test_origin_projects_to_window_center() {
    let cam = Camera::new(5.0, 75.0, 800.0, 600.0);
    let p = cam.project(&Point3::origin()).unwrap();
    assert_eq!(p, [400.0, 300.0, 5.0]);
  }

  #[test]
  fn test_points_behind_camera_are_culled() {
    let cam = Camera::new(5.0, 75.0, 800.0, 600.0);
    assert!(cam.project(&Point3::new(0.0, 0.0, 5.0)).is_none());
    assert!(cam.project(&Point3::new(0.0, 0.0, 4.95)).is_none());
  }

  #[test]
  fn test_screen_y_points_down() {
    let cam = Camera::new(5.0, 90.0, 100.0, 100.0);
    // focal = 50 for a 90 degree fov, so (1, 1, 0) lands 10 px off centre
    let p = cam.project(&Point3::new(1.0, 1.0, 0.0)).unwrap();
    assert!((p[0] - 60.0).abs() < 1e-9);
    assert!((p[1] - 40.0).abs() < 1e-9);
  }

  #[test]
  fn test_quarter_turn_about_y_moves_x_into_depth() {
    let t = GroupTransform::new([0.0; 3], 1.0, 0.0, std::f64::consts::FRAC_PI_2);
    let p = t.apply([1.0, 0.0, 0.0]);
    assert!(p.x.abs() < 1e-12);
    assert!((p.z + 1.0).abs() < 1e-12);
  }

  #[test]
  fn test_transform_centres_then_scales() {
    let t = GroupTransform::new([1.0, 1.0, 1.0], 2.0, 0.0, 0.0);
    let p = t.apply([2.0, 1.0, 1.0]);
    assert!((p.x - 2.0).abs() < 1e-12);
  }

  #[test]
  fn test_rotation_pivots_on_group_centre() {
    let center = [5.0, -3.0, 2.0];
    let t = GroupTransform::new(center, 1.5, 0.7, 1.9);
    let p = t.apply(center);
    assert!(p.coords.norm() < 1e-12);
  }

  #[test]
  fn test_offset_molecule_projects_like_centred_one() {
    let shifted = crate::model::Molecule::new(
      "H2O",
      crate::model::library::water()
        .atoms
        .iter()
        .map(|a| crate::model::Atom::new(&a.element, [a.position[0] + 10.0, a.position[1] - 4.0, a.position[2] + 7.0]))
        .collect(),
      "shifted",
    );
    let centred = AppState::new();
    let offset = AppState::from_parts(
      Config::default(),
      AnimatedMolecule { molecule: shifted, sequence: crate::model::library::default_animation_sequence() },
      "test",
    );
    let (a, _) = calculate_scene(&centred, 400.0, 400.0);
    let (b, _) = calculate_scene(&offset, 400.0, 400.0);
    for (x, y) in a.iter().zip(&b) {
      assert!((x.screen_pos[0] - y.screen_pos[0]).abs() < 1e-9);
      assert!((x.screen_pos[1] - y.screen_pos[1]).abs() < 1e-9);
    }
  }

  #[test]
  fn test_water_scene_is_symmetric_at_rest() {
    let st = AppState::new();
    let (atoms, bonds) = calculate_scene(&st, 400.0, 400.0);
    assert_eq!(atoms.len(), 3);
    assert_eq!(bonds.len(), 2);
    // Hydrogens mirror each other about the oxygen
    let dx1 = atoms[1].screen_pos[0] - atoms[0].screen_pos[0];
    let dx2 = atoms[2].screen_pos[0] - atoms[0].screen_pos[0];
    assert!((dx1 + dx2).abs() < 1e-9);
    assert!(atoms[0].radius > atoms[1].radius);
  }

  #[test]
  fn test_zoom_step_enlarges_atoms() {
    let mut st = AppState::from_parts(
      Config::default(),
      AnimatedMolecule {
        molecule: crate::model::library::water(),
        sequence: vec!["Zoom in".into()],
      },
      "test",
    );
    let (before, _) = calculate_scene(&st, 400.0, 400.0);
    let info = st.animator.frame(2.5);
    assert_eq!(info.kind, StepKind::ZoomIn);
    let (after, _) = calculate_scene(&st, 400.0, 400.0);
    assert!(after[0].radius > before[0].radius * 1.4);
  }

  #[test]
  fn test_bonds_follow_vibration() {
    let mut st = AppState::from_parts(
      Config::default(),
      AnimatedMolecule {
        molecule: crate::model::library::water(),
        sequence: vec!["Vibrate".into()],
      },
      "test",
    );
    // t = 0.025 is a vibration peak
    st.animator.frame(0.125);
    let (atoms, bonds) = calculate_scene(&st, 400.0, 400.0);
    let h1 = atoms.iter().find(|a| a.index == 1).unwrap();
    assert!((bonds[0].end[0] - h1.screen_pos[0]).abs() < 1e-9);
    assert!((bonds[0].end[1] - h1.screen_pos[1]).abs() < 1e-9);
  }
}
