use std::fmt;
use std::io::Write;
use std::thread;
use std::time::Duration;

use hc_sr04::PulseTimer;
use log::{debug, error, warn};
use measurements::Length;
use vessel::{Level, Tank};

/// Outcome of a single measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
  NoEcho,
  OutOfRange(Length),
  Filled(Level),
}

impl fmt::Display for Reading {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Reading::NoEcho => write!(f, "No echo detected"),
      Reading::OutOfRange(_) => write!(f, "Distance out of range"),
      Reading::Filled(level) => write!(f, "Filled Volume: {:.2} mL", level.volume().as_liters() * 1000.0),
    }
  }
}

/// Polls a sonar sensor mounted at the top of a tank.
#[derive(Debug)]
pub struct Gauge<P, T> {
  timer: P,
  tank: T,
}

impl<P: PulseTimer, T: Tank> Gauge<P, T> {
  pub fn new(timer: P, tank: T) -> Self {
    Self { timer, tank }
  }

  pub fn timer(&self) -> &P {
    &self.timer
  }

  pub fn tank(&self) -> &T {
    &self.tank
  }

  pub fn measure(&mut self) -> Reading {
    let echo = match self.timer.trigger() {
      Some(echo) if !echo.is_zero() => echo,
      _ => return Reading::NoEcho,
    };

    let distance = hc_sr04::distance(echo);
    debug!("Echo after {:?}, distance {:.2} cm.", echo, distance.as_centimeters());

    match self.tank.level_below(distance) {
      Some(level) => Reading::Filled(level),
      None => Reading::OutOfRange(distance),
    }
  }

  /// Measures once and writes the result as a single line.
  pub fn tick<W: Write>(&mut self, out: &mut W) -> Reading {
    let reading = self.measure();

    match reading {
      Reading::NoEcho => warn!("No echo received."),
      Reading::OutOfRange(distance) => warn!(
        "Distance {:.2} cm is outside of the tank height {:.2} cm.",
        distance.as_centimeters(),
        self.tank.height().as_centimeters(),
      ),
      Reading::Filled(level) => debug!(
        "Tank is {:.1} % full, {:.2} mL of headroom.",
        level.percentage() * 100.0,
        level.ullage().as_liters() * 1000.0,
      ),
    }

    if let Err(err) = writeln!(out, "{}", reading).and_then(|()| out.flush()) {
      error!("Failed to report reading: {}", err);
    }

    reading
  }

  pub fn run<W: Write>(&mut self, out: &mut W, interval: Duration) -> ! {
    loop {
      self.tick(out);
      thread::sleep(interval);
    }
  }
}
