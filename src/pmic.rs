use fugit::MillisDurationU32;
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    register::{ADC_ENABLE_1_MASK, ADC_ENABLE_2_MASK, Axp209Register, RegisterPair},
    scaling::reassemble_12bit,
};

/// Time the ADC needs after being enabled before its first reading is valid. (1/25 s.)
pub const ADC_SETTLE: MillisDurationU32 = MillisDurationU32::from_ticks(40);

/// You can create an Axp209 using any interface which implements [embedded_io::Read] & [embedded_io::Write]
/// and is already addressed at the PMIC, such as an i2c-dev handle.
///
/// A register read writes the register address and reads back one byte. A register write sends the
/// address followed by the value.
pub struct Axp209<S: embedded_io::Read + embedded_io::Write> {
    interface: S,
}

impl<S: embedded_io::Read + embedded_io::Write> Axp209<S> {
    /// Create a new Axp209 instance with the given interface
    pub fn new(interface: S) -> Self {
        Self { interface }
    }

    /// Give the interface back.
    pub fn release(self) -> S {
        self.interface
    }

    /// Read a single register from the PMIC.
    pub fn read_register(&mut self, register: impl Into<u8>) -> Result<u8, S::Error> {
        let register = register.into();

        self.interface
            .write_all(&[register])
            .map_err(|cause| Error::Query { register, cause })?;

        let mut buff = [0u8; 1];
        let bytes_read = self
            .interface
            .read(&mut buff)
            .map_err(|cause| Error::Read { register, cause })?;
        if bytes_read == 0 {
            return Err(Error::ShortRead { register });
        }

        Ok(buff[0])
    }

    /// Write to a single register of the PMIC.
    pub fn write_register(&mut self, register: impl Into<u8>, value: u8) -> Result<(), S::Error> {
        let register = register.into();
        self.interface
            .write_all(&[register, value])
            .map_err(|cause| Error::Write { register, cause })
    }

    /// Read a 12-bit ADC value from its high/low register pair. High register first.
    pub fn read_multi(&mut self, pair: RegisterPair) -> Result<u16, S::Error> {
        let high = self.read_register(pair.high)?;
        let low = self.read_register(pair.low)?;
        Ok(reassemble_12bit(high, low))
    }

    /// Make sure the ADC channels the plugin reads are switched on.
    ///
    /// Returns `true` when a register had to be modified. The caller must then give the ADC
    /// [`ADC_SETTLE`] to take a first reading before trusting any value.
    pub fn enable_adc(&mut self) -> Result<bool, S::Error> {
        let mut modified = false;

        for (register, mask) in [
            (Axp209Register::AdcEnable1, ADC_ENABLE_1_MASK),
            (Axp209Register::AdcEnable2, ADC_ENABLE_2_MASK),
        ] {
            let value = self.read_register(register)?;
            if value & mask != mask {
                info!(
                    register = u8::from(register),
                    from = value,
                    to = value | mask,
                    "Enabling ADC channels"
                );
                self.write_register(register, value | mask)?;
                modified = true;
            } else {
                debug!(register = u8::from(register), value, "ADC channels already enabled");
            }
        }

        Ok(modified)
    }
}
