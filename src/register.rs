//! This module is used to define the registers on the AXP209 PMIC that the plugin touches.
//!
//! Measurement registers come in high/low pairs: the high register holds the top 8 bits and
//! the low nibble of the low register holds the bottom 4 bits of a 12-bit ADC reading.

use modular_bitfield::prelude::*;

/// 7-bit bus address of the AXP209.
pub const AXP209_ADDRESS: u16 = 0x34;

/// Bits of [`Axp209Register::AdcEnable1`] which must be set: battery voltage/current,
/// ACIN voltage/current.
pub const ADC_ENABLE_1_MASK: u8 = 0xCC;

/// Bits of [`Axp209Register::AdcEnable2`] which must be set: internal temperature.
pub const ADC_ENABLE_2_MASK: u8 = 0x80;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Axp209Register {
    /// __R__ - Power mode / charge status.
    ///
    /// See [`PowerStatus`].
    PowerStatus = 0x01,
    /// __R/W__ - VBUS-IPSOUT path management.
    ///
    /// See [`VbusIpsout`].
    VbusIpsout = 0x30,
    /// __R/W__ - Charge control 1.
    ///
    /// See [`ChargeControl`].
    ChargeControl1 = 0x33,
    /// __R__ - ACIN voltage, high 8 bits.
    AcinVoltageHigh = 0x56,
    /// __R__ - ACIN voltage, low 4 bits.
    AcinVoltageLow = 0x57,
    /// __R__ - ACIN current, high 8 bits.
    AcinCurrentHigh = 0x58,
    /// __R__ - ACIN current, low 4 bits.
    AcinCurrentLow = 0x59,
    /// __R__ - VBUS voltage, high 8 bits.
    VbusVoltageHigh = 0x5A,
    /// __R__ - VBUS voltage, low 4 bits.
    VbusVoltageLow = 0x5B,
    /// __R__ - VBUS current, high 8 bits.
    VbusCurrentHigh = 0x5C,
    /// __R__ - VBUS current, low 4 bits.
    VbusCurrentLow = 0x5D,
    /// __R__ - Internal temperature, high 8 bits.
    TemperatureHigh = 0x5E,
    /// __R__ - Internal temperature, low 4 bits.
    TemperatureLow = 0x5F,
    /// __R__ - Battery voltage, high 8 bits.
    BatteryVoltageHigh = 0x78,
    /// __R__ - Battery voltage, low 4 bits.
    BatteryVoltageLow = 0x79,
    /// __R__ - Battery charge current, high 8 bits.
    BatteryChargeHigh = 0x7A,
    /// __R__ - Battery charge current, low 4 bits.
    BatteryChargeLow = 0x7B,
    /// __R__ - Battery discharge current, high 8 bits.
    BatteryDischargeHigh = 0x7C,
    /// __R__ - Battery discharge current, low 5 bits.
    BatteryDischargeLow = 0x7D,
    /// __R/W__ - ADC enable 1.
    ///
    /// Must contain [`ADC_ENABLE_1_MASK`] for the battery and ACIN readings to update.
    AdcEnable1 = 0x82,
    /// __R/W__ - ADC enable 2.
    ///
    /// Must contain [`ADC_ENABLE_2_MASK`] for the temperature reading to update.
    AdcEnable2 = 0x83,
    /// __R__ - Fuel gauge. Bits 0-6 are the battery level in percent.
    FuelGauge = 0xB9,
}

impl From<Axp209Register> for u8 {
    fn from(value: Axp209Register) -> Self {
        value as u8
    }
}

/// A 12-bit ADC reading split over two registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisterPair {
    pub high: Axp209Register,
    pub low: Axp209Register,
}

impl RegisterPair {
    pub const fn new(high: Axp209Register, low: Axp209Register) -> Self {
        Self { high, low }
    }
}

pub const TEMPERATURE: RegisterPair =
    RegisterPair::new(Axp209Register::TemperatureHigh, Axp209Register::TemperatureLow);
pub const BATTERY_VOLTAGE: RegisterPair =
    RegisterPair::new(Axp209Register::BatteryVoltageHigh, Axp209Register::BatteryVoltageLow);
pub const BATTERY_CHARGE: RegisterPair =
    RegisterPair::new(Axp209Register::BatteryChargeHigh, Axp209Register::BatteryChargeLow);
pub const ACIN_VOLTAGE: RegisterPair =
    RegisterPair::new(Axp209Register::AcinVoltageHigh, Axp209Register::AcinVoltageLow);
pub const ACIN_CURRENT: RegisterPair =
    RegisterPair::new(Axp209Register::AcinCurrentHigh, Axp209Register::AcinCurrentLow);
pub const VBUS_VOLTAGE: RegisterPair =
    RegisterPair::new(Axp209Register::VbusVoltageHigh, Axp209Register::VbusVoltageLow);
pub const VBUS_CURRENT: RegisterPair =
    RegisterPair::new(Axp209Register::VbusCurrentHigh, Axp209Register::VbusCurrentLow);

/// "Power status register" (0x01).
///
/// Bit 5 gates the battery and VBUS readings, bit 7 gates the ACIN readings.
#[bitfield]
#[derive(Debug, Clone, Copy)]
pub struct PowerStatus {
    #[skip]
    __: B5,
    pub battery_present: bool,
    #[skip]
    __: B1,
    pub acin_present: bool,
}

/// "Charge control 1 register" (0x33).
#[bitfield]
#[derive(Debug, Clone, Copy)]
pub struct ChargeControl {
    /// Charge current setting: 300mA + 100mA per step.
    pub current: B4,
    /// Termination current is 15% of the charge current instead of 10%.
    pub termination_15_percent: bool,
    #[skip]
    __: B2,
    pub charge_enabled: bool,
}

/// "VBUS-IPSOUT path management register" (0x30).
#[bitfield]
#[derive(Debug, Clone, Copy)]
pub struct VbusIpsout {
    /// `0` - 900mA, `1` - 500mA, `2` - 100mA, `3` - not limited.
    pub current_limit: B2,
    #[skip]
    __: B1,
    /// Everything above bit 2; its bit 3 (register bit 6) enables the voltage limit.
    pub voltage_limit: B5,
}

impl VbusIpsout {
    const VOLTAGE_LIMIT_ENABLE: u8 = 0x08;

    /// Whether the VBUS hold voltage limit is asserted.
    pub fn voltage_limit_enabled(&self) -> bool {
        self.voltage_limit() & Self::VOLTAGE_LIMIT_ENABLE != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_status_bits() {
        let status = PowerStatus::from_bytes([0x20]);
        assert!(status.battery_present());
        assert!(!status.acin_present());

        let status = PowerStatus::from_bytes([0x80]);
        assert!(!status.battery_present());
        assert!(status.acin_present());

        // Neighbouring bits must not leak into either gate.
        let status = PowerStatus::from_bytes([0x5F]);
        assert!(!status.battery_present());
        assert!(!status.acin_present());
    }

    #[test]
    fn charge_control_fields() {
        let ctl = ChargeControl::from_bytes([0x8F]);
        assert!(ctl.charge_enabled());
        assert_eq!(ctl.current(), 15);
        assert!(!ctl.termination_15_percent());

        let ctl = ChargeControl::from_bytes([0x9F]);
        assert!(ctl.termination_15_percent());

        let ctl = ChargeControl::from_bytes([0x7F]);
        assert!(!ctl.charge_enabled());
    }

    #[test]
    fn vbus_ipsout_fields() {
        let reg = VbusIpsout::from_bytes([0x60]);
        assert_eq!(reg.voltage_limit(), 0x0C);
        assert!(reg.voltage_limit_enabled());
        assert_eq!(reg.current_limit(), 0);

        let reg = VbusIpsout::from_bytes([0x83]);
        assert_eq!(reg.voltage_limit(), 0x10);
        assert!(!reg.voltage_limit_enabled());
        assert_eq!(reg.current_limit(), 3);
    }

    #[test]
    fn register_addresses() {
        assert_eq!(u8::from(Axp209Register::PowerStatus), 0x01);
        assert_eq!(u8::from(Axp209Register::AdcEnable1), 0x82);
        assert_eq!(u8::from(Axp209Register::FuelGauge), 0xB9);
        assert_eq!(u8::from(TEMPERATURE.high), 0x5E);
        assert_eq!(u8::from(TEMPERATURE.low), 0x5F);
    }
}
