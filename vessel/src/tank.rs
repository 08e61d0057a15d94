use measurements::{Length, Volume};

use crate::level::Level;

pub trait Tank {
  fn height(&self) -> Length;
  fn volume(&self) -> Volume;
  fn level(&self, filling_height: Length) -> Level;

  /// Converts the distance between the top of the tank and the liquid surface
  /// into a level, or `None` if the distance does not lie within the tank.
  fn level_below(&self, distance: Length) -> Option<Level> {
    let height = self.height();

    if distance < Length::from_meters(0.0) || distance > height {
      return None
    }

    Some(self.level(height - distance))
  }
}
