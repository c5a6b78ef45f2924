// src/state.rs
use crate::animation::{Animator, FrameInfo};
use crate::config::Config;
use crate::io::AnimatedMolecule;
use crate::model::{infer_bonds, Bond, Molecule};

pub struct AppState {
  pub config: Config,
  pub molecule: Molecule,
  pub bonds: Vec<Bond>,
  pub animator: Animator,
  /// Centre of the molecule's bounding box, fixed at load time.
  pub center: [f64; 3],
  /// Mouse-wheel zoom, multiplied onto the animated scale.
  pub user_zoom: f64,
  pub source_name: String,
}

impl AppState {
  pub fn new() -> Self {
    Self::with_config(Config::default())
  }

  pub fn with_config(config: Config) -> Self {
    Self::from_parts(config, AnimatedMolecule::demo(), "built-in demo")
  }

  pub fn from_parts(config: Config, loaded: AnimatedMolecule, source_name: &str) -> Self {
    let animator = build_animator(&config, &loaded);
    let bonds = infer_bonds(&loaded.molecule.atoms);
    let center = loaded.molecule.center();
    Self {
      config,
      molecule: loaded.molecule,
      bonds,
      animator,
      center,
      user_zoom: 1.0,
      source_name: source_name.to_string(),
    }
  }

  pub fn load_config(&mut self) -> String {
    let (config, msg) = Config::load();
    self.apply_config(config);
    msg
  }

  /// Swaps configuration and restarts the script so the new step duration
  /// and vibration settings take effect.
  pub fn apply_config(&mut self, config: Config) {
    self.config = config;
    self.animator = Animator::new(
      self.animator.sequence().to_vec(),
      self.molecule.positions(),
      self.config.step_duration,
      self.config.vibration,
    );
  }

  /// Replaces the molecule, re-infers bonds and restarts the script.
  pub fn load(&mut self, loaded: AnimatedMolecule, source_name: &str) {
    self.animator = build_animator(&self.config, &loaded);
    self.bonds = infer_bonds(&loaded.molecule.atoms);
    self.center = loaded.molecule.center();
    self.molecule = loaded.molecule;
    self.user_zoom = 1.0;
    self.source_name = source_name.to_string();
    log::info!("{}", self.report());
  }

  /// One fixed-rate frame.
  pub fn advance_frame(&mut self) -> FrameInfo {
    self.animator.frame(self.config.frame_delta())
  }

  pub fn zoom_by(&mut self, factor: f64) {
    self.user_zoom = (self.user_zoom * factor).clamp(0.1, 10.0);
  }

  pub fn report(&self) -> String {
    let composition: Vec<String> = self
      .molecule
      .composition()
      .iter()
      .map(|(el, n)| format!("{}{}", el, n))
      .collect();
    format!(
      "Loaded {} from {}: {} atoms ({}), {} bonds, {} animation steps",
      self.molecule.formula,
      self.source_name,
      self.molecule.atoms.len(),
      composition.join(" "),
      self.bonds.len(),
      self.animator.sequence().len()
    )
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

fn build_animator(config: &Config, loaded: &AnimatedMolecule) -> Animator {
  Animator::new(
    loaded.sequence.clone(),
    loaded.molecule.positions(),
    config.step_duration,
    config.vibration,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::library::carbon_dioxide;

  #[test]
  fn test_demo_state() {
    let st = AppState::new();
    assert_eq!(st.molecule.formula, "H2O");
    assert_eq!(st.bonds.len(), 2);
    assert_eq!(st.animator.sequence().len(), 5);
    assert!(st.report().contains("O1 H2"));
  }

  #[test]
  fn test_load_replaces_everything() {
    let mut st = AppState::new();
    st.zoom_by(2.0);
    st.advance_frame();
    st.load(
      AnimatedMolecule {
        molecule: carbon_dioxide(),
        sequence: vec!["Vibrate".into()],
      },
      "test",
    );
    // C-O at 1.2 is under the 1.5 cutoff, O-O at 2.4 is not bonded
    assert_eq!(st.bonds.len(), 2);
    assert_eq!(st.user_zoom, 1.0);
    assert_eq!(st.animator.clock().current(), 0);
    assert_eq!(st.animator.clock().elapsed(), 0.0);
    assert_eq!(st.animator.sequence(), &["Vibrate".to_string()]);
  }

  #[test]
  fn test_five_second_steps_at_sixty_fps() {
    let mut st = AppState::new();
    let mut changes = 0;
    // a little over one step
    for _ in 0..310 {
      if st.advance_frame().step_changed {
        changes += 1;
      }
    }
    assert_eq!(changes, 1);
    assert_eq!(st.animator.clock().current(), 1);
  }

  #[test]
  fn test_apply_config_changes_duration() {
    let mut st = AppState::new();
    let mut cfg = Config::default();
    cfg.step_duration = 1.0;
    st.apply_config(cfg);
    assert_eq!(st.animator.clock().step_duration(), 1.0);
    assert_eq!(st.animator.sequence().len(), 5);
  }

  #[test]
  fn test_zoom_is_clamped() {
    let mut st = AppState::new();
    for _ in 0..100 {
      st.zoom_by(1.1);
    }
    assert_eq!(st.user_zoom, 10.0);
  }
}
