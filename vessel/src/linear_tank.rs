use measurements::{Length, Volume};

use crate::level::Level;
use crate::tank::Tank;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
  #[error("tank height must be positive, got {0} cm")]
  InvalidHeight(f64),
  #[error("tank volume must be positive, got {0} l")]
  InvalidVolume(f64),
}

/// A tank with a uniform cross-section, so volume grows linearly with the filling height.
#[derive(Debug, Clone, Copy)]
pub struct LinearTank {
  height: Length,
  volume: Volume,
}

impl LinearTank {
  pub fn new(height: Length, volume: Volume) -> Result<Self, Error> {
    let centimeters = height.as_centimeters();
    if !(centimeters.is_finite() && centimeters > 0.0) {
      return Err(Error::InvalidHeight(centimeters))
    }

    let liters = volume.as_liters();
    if !(liters.is_finite() && liters > 0.0) {
      return Err(Error::InvalidVolume(liters))
    }

    Ok(Self { height, volume })
  }
}

impl Tank for LinearTank {
  fn height(&self) -> Length {
    self.height
  }

  fn volume(&self) -> Volume {
    self.volume
  }

  fn level(&self, filling_height: Length) -> Level {
    let percentage = filling_height / self.height;
    let volume = self.volume * percentage;

    Level { volume, ullage: self.volume - volume, percentage }
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::*;

  fn tank() -> LinearTank {
    LinearTank::new(Length::from_centimeters(50.0), Volume::from_liters(2.0)).unwrap()
  }

  #[test]
  fn rejects_non_positive_dimensions() {
    assert_eq!(
      LinearTank::new(Length::from_centimeters(0.0), Volume::from_liters(2.0)).unwrap_err(),
      Error::InvalidHeight(0.0),
    );
    assert_eq!(
      LinearTank::new(Length::from_centimeters(50.0), Volume::from_liters(-1.0)).unwrap_err(),
      Error::InvalidVolume(-1.0),
    );
    assert!(LinearTank::new(Length::from_centimeters(f64::NAN), Volume::from_liters(1.0)).is_err());
  }

  #[test]
  fn surface_at_sensor_is_full() {
    let level = tank().level_below(Length::from_centimeters(0.0)).unwrap();
    assert_abs_diff_eq!(level.volume().as_liters(), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(level.ullage().as_liters(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(level.percentage(), 1.0);
  }

  #[test]
  fn surface_at_bottom_is_empty() {
    let level = tank().level_below(Length::from_centimeters(50.0)).unwrap();
    assert_abs_diff_eq!(level.volume().as_liters(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(level.ullage().as_liters(), 2.0, epsilon = 1e-9);
  }

  #[test]
  fn volume_is_linear_in_height() {
    let level = tank().level_below(Length::from_centimeters(25.0)).unwrap();
    assert_abs_diff_eq!(level.volume().as_liters(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(f64::from(level), 0.5);

    let level = tank().level_below(Length::from_centimeters(10.0)).unwrap();
    assert_abs_diff_eq!(Volume::from(level).as_liters(), 1.6, epsilon = 1e-9);
  }

  #[test]
  fn distance_outside_tank() {
    assert_eq!(tank().level_below(Length::from_centimeters(60.0)), None);
    assert_eq!(tank().level_below(Length::from_centimeters(-0.5)), None);
  }
}
