// src/animation/clock.rs

pub const DEFAULT_STEP_DURATION: f64 = 5.0;

/// Result of one clock tick. `step` and `t` describe the frame that should be
/// drawn; `advanced` is set when the tick crossed into the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
  pub step: usize,
  pub t: f64,
  pub advanced: bool,
}

#[derive(Debug, Clone)]
pub struct AnimationClock {
  current: usize,
  total: usize,
  elapsed: f64,
  step_duration: f64,
  paused: bool,
}

impl AnimationClock {
  pub fn new(total_steps: usize, step_duration: f64) -> Self {
    let step_duration = if step_duration.is_finite() && step_duration > 0.0 {
      step_duration
    } else {
      DEFAULT_STEP_DURATION
    };
    Self {
      current: 0,
      total: total_steps.max(1),
      elapsed: 0.0,
      step_duration,
      paused: false,
    }
  }

  /// Advances by `dt` seconds. Normalised time is taken before the wrap
  /// check, so the last frame of a step is evaluated at t near 1 and the
  /// frame that crosses the boundary at the wrapped value.
  pub fn tick(&mut self, dt: f64) -> Tick {
    if !self.paused {
      self.elapsed += dt.max(0.0);
    }

    let step = self.current;
    let t = (self.elapsed % self.step_duration) / self.step_duration;

    let mut advanced = false;
    if self.elapsed >= self.step_duration {
      self.elapsed = 0.0;
      self.current = (self.current + 1) % self.total;
      advanced = true;
    }

    Tick { step, t, advanced }
  }

  /// Manual navigation; stops at the last step instead of wrapping.
  pub fn next(&mut self) -> bool {
    if self.current + 1 < self.total {
      self.current += 1;
      self.elapsed = 0.0;
      true
    } else {
      false
    }
  }

  pub fn previous(&mut self) -> bool {
    if self.current > 0 {
      self.current -= 1;
      self.elapsed = 0.0;
      true
    } else {
      false
    }
  }

  pub fn current(&self) -> usize {
    self.current
  }

  pub fn total(&self) -> usize {
    self.total
  }

  pub fn elapsed(&self) -> f64 {
    self.elapsed
  }

  pub fn step_duration(&self) -> f64 {
    self.step_duration
  }

  pub fn is_paused(&self) -> bool {
    self.paused
  }

  pub fn set_paused(&mut self, paused: bool) {
    self.paused = paused;
  }

  pub fn progress_fraction(&self) -> f64 {
    (self.current + 1) as f64 / self.total as f64
  }

  pub fn label(&self) -> String {
    format!("Step {}/{}", self.current + 1, self.total)
  }
}
