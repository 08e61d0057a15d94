use std::io;
use std::path::Path;

use rppal::uart::{self, Parity, Uart};

/// A UART opened for line-oriented text output.
pub struct Serial {
  uart: Uart,
}

impl Serial {
  pub fn open(path: impl AsRef<Path>, baud_rate: u32) -> Result<Serial, uart::Error> {
    let mut uart = Uart::with_path(path, baud_rate, Parity::None, 8, 1)?;
    uart.set_write_mode(true)?;

    Ok(Serial { uart })
  }
}

impl io::Write for Serial {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.uart.write(buf).map_err(io::Error::other)
  }

  fn flush(&mut self) -> io::Result<()> {
    self.uart.drain().map_err(io::Error::other)
  }
}
