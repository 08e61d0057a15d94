use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use measurements::{Length, Volume};
use vessel::LinearTank;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("invalid value {value:?} for {name}")]
  Invalid { name: &'static str, value: String },
  #[error("invalid tank profile: {0}")]
  Tank(#[from] vessel::Error),
}

/// Everything the gauge needs to know before the first measurement.
#[derive(Debug)]
pub struct Config {
  /// BCM number of the line shared by trigger and echo.
  pub sensor_pin: u8,
  pub tank: LinearTank,
  pub echo_timeout: Duration,
  pub interval: Duration,
  /// UART to report on; reports go to stdout if unset.
  pub serial_device: Option<PathBuf>,
  pub baud_rate: u32,
}

impl Config {
  pub const DEFAULT_SENSOR_PIN: u8 = 17;
  pub const DEFAULT_TANK_HEIGHT_CM: f64 = 50.0;
  pub const DEFAULT_TANK_VOLUME_ML: f64 = 2000.0;
  pub const DEFAULT_ECHO_TIMEOUT_MS: u64 = 1000;
  pub const DEFAULT_INTERVAL_MS: u64 = 1000;
  pub const DEFAULT_BAUD_RATE: u32 = 115_200;

  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let sensor_pin = parse(&lookup, "SENSOR_PIN", Self::DEFAULT_SENSOR_PIN)?;

    let height = parse(&lookup, "TANK_HEIGHT_CM", Self::DEFAULT_TANK_HEIGHT_CM)?;
    let volume = parse(&lookup, "TANK_VOLUME_ML", Self::DEFAULT_TANK_VOLUME_ML)?;
    let tank = LinearTank::new(Length::from_centimeters(height), Volume::from_liters(volume / 1000.0))?;

    let echo_timeout = Duration::from_millis(parse(&lookup, "ECHO_TIMEOUT_MS", Self::DEFAULT_ECHO_TIMEOUT_MS)?);
    let interval = Duration::from_millis(parse(&lookup, "POLL_INTERVAL_MS", Self::DEFAULT_INTERVAL_MS)?);

    let serial_device = lookup("SERIAL_DEVICE").filter(|path| !path.is_empty()).map(PathBuf::from);
    let baud_rate = parse(&lookup, "SERIAL_BAUD_RATE", Self::DEFAULT_BAUD_RATE)?;

    Ok(Config { sensor_pin, tank, echo_timeout, interval, serial_device, baud_rate })
  }
}

fn parse<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(name) {
    None => Ok(default),
    Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { name, value }),
  }
}
