//! Opening the PMIC on a Linux i2c-dev bus.
//!
//! i2c-dev transfers are whole messages: a read fills the entire buffer or fails, and a
//! write goes out as a single transaction. [`I2cIo`] presents that as the byte stream the
//! driver is written against.

use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use tracing::debug;

/// Bus the AXP209 sits on.
pub const I2C_DEVICE: &str = "/dev/i2c-0";

/// Handle to the PMIC usable by [`crate::pmic::Axp209`].
pub type I2cBus = I2cIo<LinuxI2CDevice>;

/// Wraps an addressed [`I2CDevice`] as an `embedded_io` stream.
///
/// Errors surface as `std::io::Error`, keeping the errno of a failed transfer.
#[derive(Debug)]
pub struct I2cIo<D>(D);

impl<D> I2cIo<D> {
    pub fn new(device: D) -> Self {
        Self(device)
    }
}

impl<D> embedded_io::ErrorType for I2cIo<D> {
    type Error = std::io::Error;
}

impl<D> embedded_io::Read for I2cIo<D>
where
    D: I2CDevice,
    D::Error: Into<std::io::Error>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.0.read(buf).map_err(Into::into)?;
        Ok(buf.len())
    }
}

impl<D> embedded_io::Write for I2cIo<D>
where
    D: I2CDevice,
    D::Error: Into<std::io::Error>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.0.write(buf).map_err(Into::into)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Open `path` and address `address`, even when a kernel driver has already claimed it.
///
/// The AXP209 is normally bound to the kernel's own power driver, so a plain `I2C_SLAVE`
/// would be refused with `EBUSY`.
pub fn open_bus(path: impl AsRef<Path>, address: u16) -> Result<I2cBus, LinuxI2CError> {
    let path = path.as_ref();
    debug!(path = %path.display(), address, "Opening I2C bus");

    // SAFETY: the kernel driver bound to this address only does its own register
    // transactions. Each of ours is a complete select-then-read or a two byte write, and the
    // only registers written are the ADC enable bits.
    let device = unsafe { LinuxI2CDevice::force_new(path, address)? };
    Ok(I2cIo::new(device))
}
