//! Conversions from raw AXP209 register values to physical units.
//!
//! Every ADC reading uses a fixed step size per LSB. Limits configured through control
//! registers are derived from their bit fields.

/// Reassemble a 12-bit ADC reading from its high register and the low nibble of its low register.
#[inline]
pub const fn reassemble_12bit(high: u8, low: u8) -> u16 {
    ((high as u16) << 4) | (low as u16 & 0xF)
}

/// Reassemble the 13-bit discharge reading: 8 bits high, 5 bits low.
#[inline]
pub const fn reassemble_13bit(high: u8, low: u8) -> u16 {
    ((high as u16) << 5) | (low as u16 & 0x1F)
}

/// Internal temperature. 0.1 degree steps offset by -144.7C, reported on the chart's (F) scale.
///
/// Evaluated in double precision, then narrowed.
#[inline]
pub fn raw_to_temperature(raw: u16) -> f32 {
    (raw as f64 * 0.18 - 228.46) as f32
}

/// Battery voltage in millivolts. 1.1mV per step.
#[inline]
pub fn raw_to_battery_voltage_mv(raw: u16) -> f32 {
    raw as f32 * 1.1
}

/// Battery charge current in milliamps. 0.5mA per step.
#[inline]
pub fn raw_to_battery_charge_ma(raw: u16) -> f32 {
    raw as f32 / 2.0
}

/// ACIN voltage in millivolts. 1.7mV per step.
#[inline]
pub fn raw_to_acin_voltage_mv(raw: u16) -> f32 {
    raw as f32 * 1.7
}

/// ACIN current in milliamps. 0.625mA per step.
#[inline]
pub fn raw_to_acin_current_ma(raw: u16) -> f32 {
    raw as f32 * 0.625
}

/// VBUS voltage in millivolts. 1.7mV per step.
#[inline]
pub fn raw_to_vbus_voltage_mv(raw: u16) -> f32 {
    raw as f32 * 1.7
}

/// VBUS current in milliamps. 0.375mA per step.
#[inline]
pub fn raw_to_vbus_current_ma(raw: u16) -> f32 {
    raw as f32 * 0.375
}

/// Battery level in percent; the top bit of the fuel gauge register is not part of it.
#[inline]
pub const fn battery_level_percent(raw: u8) -> u8 {
    raw & 0x7F
}

/// Charge current limit in milliamps from the 4-bit charge control field.
#[inline]
pub const fn charge_current_limit_ma(field: u8) -> u16 {
    (field as u16 & 0xF) * 100 + 300
}

/// Charge termination current in milliamps: 10% of the charge limit, or 15% when selected.
#[inline]
pub const fn charge_termination_limit_ma(charge_limit_ma: u16, fifteen_percent: bool) -> u16 {
    let limit = charge_limit_ma / 10;
    if fifteen_percent {
        limit + (limit >> 1)
    } else {
        limit
    }
}

/// VBUS hold voltage limit in millivolts from the 5-bit field above bit 2 of register 0x30.
#[inline]
pub const fn vbus_voltage_limit_mv(field: u8) -> u16 {
    (field as u16 & 0x1F) * 100 + 4000
}

/// VBUS current limit in milliamps, or `None` when the selector reads "not limited".
#[inline]
pub const fn vbus_current_limit_ma(selector: u8) -> Option<u16> {
    const TARGETS: [u16; 3] = [900, 500, 100];
    let selector = (selector & 0x3) as usize;
    if selector < TARGETS.len() {
        Some(TARGETS[selector])
    } else {
        None
    }
}
