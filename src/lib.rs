//! This crate polls the AXP209 power management IC found on CHIP single board computers and
//! reports its readings to a netdata-style collector over standard output.
//!
//! Every cycle reads the PMIC's status and ADC registers over I2C, converts them into
//! physical units and writes one frame per chart:
//!
//! * Internal temperature
//! * Battery level, charge and discharge current, voltage and the charger's current limits
//! * ACIN voltage and current
//! * VBUS voltage and current, and the input limits configured for it
//!
//! Readings whose power source is absent (no battery, no AC adapter) are sent as empty values
//! so the collector shows gaps instead of zeroes.
//!
//! The driver is generic over `embedded_io::Read + Write`; on Linux the bus is opened with
//! [`linux::open_bus`], which wraps an i2c-dev handle in [`linux::I2cIo`].

pub mod chart;
pub mod clock;
pub mod config;
mod decode;
pub mod error;
pub mod linux;
pub mod pmic;
pub mod protocol;
pub mod quantity;
pub mod register;
pub mod sample;
pub mod scaling;
pub mod scheduler;

#[cfg(test)]
mod mock_i2c;

pub use config::UpdateInterval;
pub use error::Error;
pub use pmic::Axp209;
pub use protocol::Emitter;
pub use sample::SampleStore;
pub use scheduler::Sampler;
