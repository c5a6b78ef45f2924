// src/config.rs

use crate::animation::VibrationParams;
use crate::model::elements::rgb_from_hex;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for the frame timer; higher values would starve the main loop.
pub const MAX_FRAME_RATE: u32 = 240;

// --- RenderStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
  /// Multiplier on the per-element sphere radii.
  pub atom_scale: f64,
  pub bond_radius: f64,
  pub bond_color: (f64, f64, f64),
  pub background_color: (f64, f64, f64),
  /// Per-element colour overrides, e.g. "C" -> (0.1, 0.1, 0.1)
  pub element_colors: HashMap<String, (f64, f64, f64)>,
}

impl Default for RenderStyle {
  fn default() -> Self {
    Self {
      atom_scale: 1.0,
      bond_radius: 0.2,
      bond_color: rgb_from_hex(0xCCCCCC),
      background_color: rgb_from_hex(0xF8F9FA),
      element_colors: HashMap::new(),
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Seconds each animation step runs before auto-advancing.
  pub step_duration: f64,
  /// Frames per second; every frame advances the clock by 1 / frame_rate.
  pub frame_rate: u32,
  pub camera_distance: f64,
  /// Vertical field of view in degrees.
  pub field_of_view: f64,
  pub vibration: VibrationParams,
  pub style: RenderStyle,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      step_duration: 5.0,
      frame_rate: 60,
      camera_distance: 5.0,
      field_of_view: 75.0,
      vibration: VibrationParams::default(),
      style: RenderStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/molanim/settings.json)
  pub fn load() -> (Self, String) {
    Self::load_from(&Self::get_path())
  }

  pub fn load_from(path: &PathBuf) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }

    match File::open(path) {
      Ok(file) => match serde_json::from_reader::<_, Config>(BufReader::new(file)) {
        Ok(cfg) => (cfg.sanitized(), format!("Config loaded from {:?}", path)),
        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
      },
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &PathBuf) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => match serde_json::to_writer_pretty(BufWriter::new(file), self) {
        Ok(_) => format!("Config saved to {:?}", path),
        Err(e) => format!("Failed to save config: {}", e),
      },
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  /// Period of the frame timer. glib schedules timeouts in whole
  /// milliseconds, so the period is rounded to one.
  pub fn frame_interval(&self) -> Duration {
    let ms = (1000.0 / self.frame_rate.max(1) as f64).round() as u64;
    Duration::from_millis(ms.max(1))
  }

  /// Seconds advanced per rendered frame; matches the timer period so a
  /// step lasts `step_duration` of wall time.
  pub fn frame_delta(&self) -> f64 {
    self.frame_interval().as_secs_f64()
  }

  /// Replaces values the renderer cannot work with by their defaults.
  fn sanitized(mut self) -> Self {
    let defaults = Self::default();
    if !(self.step_duration.is_finite() && self.step_duration > 0.0) {
      self.step_duration = defaults.step_duration;
    }
    if self.frame_rate == 0 {
      self.frame_rate = defaults.frame_rate;
    }
    self.frame_rate = self.frame_rate.min(MAX_FRAME_RATE);
    if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
      self.camera_distance = defaults.camera_distance;
    }
    if !(self.field_of_view > 1.0 && self.field_of_view < 179.0) {
      self.field_of_view = defaults.field_of_view;
    }
    self
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "molanim", "molanim") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("molanim-test-{}-{}", std::process::id(), name))
  }

  #[test]
  fn test_missing_file_gives_defaults() {
    let (cfg, msg) = Config::load_from(&temp_path("does-not-exist.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("No config found"));
  }

  #[test]
  fn test_save_then_load() {
    let path = temp_path("roundtrip.json");
    let mut cfg = Config::default();
    cfg.step_duration = 3.0;
    cfg.style.element_colors.insert("C".into(), (0.1, 0.1, 0.1));
    cfg.save_to(&path);

    let (loaded, msg) = Config::load_from(&path);
    assert!(msg.starts_with("Config loaded"), "{}", msg);
    assert_eq!(loaded, cfg);
    let _ = fs::remove_file(path);
  }

  #[test]
  fn test_partial_file_fills_defaults_and_sanitizes() {
    let path = temp_path("partial.json");
    fs::write(&path, r#"{ "frame_rate": 0, "field_of_view": 500.0, "style": { "bond_radius": 0.1 } }"#).unwrap();

    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.frame_rate, 60);
    assert_eq!(cfg.field_of_view, 75.0);
    assert_eq!(cfg.style.bond_radius, 0.1);
    assert_eq!(cfg.style.atom_scale, 1.0);
    let _ = fs::remove_file(path);
  }

  #[test]
  fn test_default_colours_reload_bit_exact() {
    let path = temp_path("colours.json");
    let cfg = Config::default();
    cfg.save_to(&path);
    let (loaded, _) = Config::load_from(&path);
    assert_eq!(loaded.style.background_color, rgb_from_hex(0xF8F9FA));
    assert_eq!(loaded.style.bond_color, rgb_from_hex(0xCCCCCC));
    // A second cycle must not drift either
    loaded.save_to(&path);
    let (again, _) = Config::load_from(&path);
    assert_eq!(again, cfg);
    let _ = fs::remove_file(path);
  }

  #[test]
  fn test_frame_rate_is_capped() {
    let path = temp_path("fast.json");
    fs::write(&path, r#"{ "frame_rate": 5000 }"#).unwrap();
    let (cfg, _) = Config::load_from(&path);
    assert_eq!(cfg.frame_rate, MAX_FRAME_RATE);
    assert_eq!(cfg.frame_interval(), Duration::from_millis(4));
    let _ = fs::remove_file(path);
  }

  #[test]
  fn test_garbage_file_reports_error() {
    let path = temp_path("garbage.json");
    fs::write(&path, "not json").unwrap();
    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
    let _ = fs::remove_file(path);
  }

  #[test]
  fn test_frame_delta_matches_timer_period() {
    let cfg = Config::default();
    assert_eq!(cfg.frame_interval(), Duration::from_millis(17));
    assert!((cfg.frame_delta() - 0.017).abs() < 1e-12);
    // 5 s at 60 Hz is 294 timer ticks, within one tick of wall time
    let ticks = (cfg.step_duration / cfg.frame_delta()).ceil();
    assert!((ticks * cfg.frame_delta() - cfg.step_duration).abs() <= cfg.frame_delta());
  }
}
