use std::hint;
use std::thread;
use std::time::{Duration, Instant};

use log::trace;
use measurements::Length;
use rppal::gpio::{IoPin, Level, Mode};

/// Centimeters travelled by sound in one microsecond.
pub const SPEED_OF_SOUND: f64 = 0.0344;

/// Something that can fire an ultrasonic pulse and time the echo.
pub trait PulseTimer {
  /// Triggers a measurement and returns the length of the echo pulse,
  /// or `None` if no echo arrived in time.
  fn trigger(&mut self) -> Option<Duration>;
}

impl<P: PulseTimer + ?Sized> PulseTimer for &mut P {
  fn trigger(&mut self) -> Option<Duration> {
    (**self).trigger()
  }
}

/// Converts the length of an echo pulse into the one-way distance to the reflecting surface.
pub fn distance(echo: Duration) -> Length {
  let micros = echo.as_secs_f64() * 1e6;
  Length::from_centimeters(micros * SPEED_OF_SOUND / 2.0)
}

/// A digital line that can be switched between driving and sensing.
pub trait Line {
  fn set_mode(&mut self, mode: Mode);
  fn set_low(&mut self);
  fn set_high(&mut self);
  fn read(&self) -> Level;
}

impl Line for IoPin {
  fn set_mode(&mut self, mode: Mode) {
    IoPin::set_mode(self, mode)
  }

  fn set_low(&mut self) {
    IoPin::set_low(self)
  }

  fn set_high(&mut self) {
    IoPin::set_high(self)
  }

  fn read(&self) -> Level {
    IoPin::read(self)
  }
}

/// An HC-SR04 style sensor sharing a single line for trigger and echo.
#[derive(Debug)]
pub struct HcSr04<L = IoPin> {
  line: L,
  timeout: Duration,
}

impl<L: Line> HcSr04<L> {
  pub fn new(mut line: L, timeout: Duration) -> Self {
    line.set_mode(Mode::Output);
    line.set_low();
    line.set_mode(Mode::Input);

    HcSr04 { line, timeout }
  }

  /// Upper bound for a whole echo measurement.
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  fn wait_for(&self, level: Level, deadline: Instant) -> Option<Instant> {
    loop {
      let now = Instant::now();

      if self.line.read() == level {
        return Some(now)
      }

      if now >= deadline {
        return None
      }

      hint::spin_loop();
    }
  }
}

impl<L: Line> PulseTimer for HcSr04<L> {
  fn trigger(&mut self) -> Option<Duration> {
    self.line.set_mode(Mode::Output);
    self.line.set_low();
    thread::sleep(Duration::from_micros(2));
    self.line.set_high();
    thread::sleep(Duration::from_micros(10));
    self.line.set_low();
    self.line.set_mode(Mode::Input);

    let deadline = Instant::now() + self.timeout;

    // A pulse that is already running when we start listening cannot be timed.
    self.wait_for(Level::Low, deadline)?;
    let start = self.wait_for(Level::High, deadline)?;
    let stop = self.wait_for(Level::Low, deadline)?;

    let echo = stop - start;
    trace!("echo pulse lasted {:?}", echo);

    Some(echo)
  }
}
