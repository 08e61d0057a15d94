use measurements::Volume;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
  pub(crate) volume: Volume,
  pub(crate) ullage: Volume,
  pub(crate) percentage: f64,
}

impl Level {
  /// Volume of the liquid in the tank.
  pub fn volume(&self) -> Volume {
    self.volume
  }

  /// Empty volume above the liquid surface.
  pub fn ullage(&self) -> Volume {
    self.ullage
  }

  /// Fill fraction between `0.0` and `1.0`.
  pub fn percentage(&self) -> f64 {
    self.percentage
  }
}

impl From<Level> for f64 {
  fn from(level: Level) -> Self {
    level.percentage
  }
}

impl From<Level> for Volume {
  fn from(level: Level) -> Self {
    level.volume
  }
}
