use std::io;

use hc_sr04::HcSr04;
use log::info;
use rppal::gpio::{Gpio, Mode};
use vessel::Tank;

mod config;
mod gauge;
mod serial;

use self::config::{Config, ConfigError};
use self::gauge::Gauge;
use self::serial::Serial;

#[derive(Debug, thiserror::Error)]
enum Error {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error("failed to access GPIO: {0}")]
  Gpio(#[from] rppal::gpio::Error),
  #[error("failed to open serial device: {0}")]
  Uart(#[from] rppal::uart::Error),
}

fn main() -> Result<(), Error> {
  env_logger::init();

  let config = Config::from_env()?;

  let pin = Gpio::new()?.get(config.sensor_pin)?.into_io(Mode::Input);
  let sensor = HcSr04::new(pin, config.echo_timeout);

  let mut gauge = Gauge::new(sensor, config.tank);

  info!(
    "Measuring on GPIO {} every {:?}, tank height {:.1} cm, volume {:.0} mL, echo timeout {:?}.",
    config.sensor_pin,
    config.interval,
    gauge.tank().height().as_centimeters(),
    gauge.tank().volume().as_liters() * 1000.0,
    gauge.timer().timeout(),
  );

  match config.serial_device {
    Some(path) => {
      info!("Reporting on {} at {} baud.", path.display(), config.baud_rate);
      let mut serial = Serial::open(&path, config.baud_rate)?;
      gauge.run(&mut serial, config.interval)
    },
    None => {
      info!("Reporting on stdout.");
      gauge.run(&mut io::stdout().lock(), config.interval)
    },
  }
}
