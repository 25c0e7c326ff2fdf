//! Turns one pass of register reads into a complete [`SampleStore`].
//!
//! Each group of quantities is only read and marked valid while its gate bit is set, so an
//! unplugged battery or AC input shows up as empty values rather than stale ones.

use tracing::trace;

use crate::{
    error::Result,
    pmic::Axp209,
    quantity::Quantity,
    register::{
        ACIN_CURRENT, ACIN_VOLTAGE, Axp209Register, BATTERY_CHARGE, BATTERY_VOLTAGE,
        ChargeControl, PowerStatus, TEMPERATURE, VBUS_CURRENT, VBUS_VOLTAGE, VbusIpsout,
    },
    sample::SampleStore,
    scaling::*,
};

impl<S: embedded_io::Read + embedded_io::Write> Axp209<S> {
    /// Read every gated group from the PMIC and overwrite `store` with this cycle's values.
    ///
    /// The store is reset first: nothing survives from the previous cycle.
    pub fn sample(&mut self, store: &mut SampleStore) -> Result<(), S::Error> {
        store.reset();

        let status = PowerStatus::from_bytes([self.read_register(Axp209Register::PowerStatus)?]);
        let charge_ctl =
            ChargeControl::from_bytes([self.read_register(Axp209Register::ChargeControl1)?]);
        trace!(?status, ?charge_ctl, "Status registers");

        let temp = self.read_multi(TEMPERATURE)?;
        store.set(Quantity::InternalTemp, raw_to_temperature(temp))?;

        if charge_ctl.charge_enabled() {
            let charge_limit = charge_current_limit_ma(charge_ctl.current());
            store.set(Quantity::ChargeLimit, charge_limit)?;
            store.set(
                Quantity::ChargeTermination,
                charge_termination_limit_ma(charge_limit, charge_ctl.termination_15_percent()),
            )?;
        }

        if status.battery_present() {
            let charge = self.read_multi(BATTERY_CHARGE)?;
            store.set(Quantity::BatteryCharge, raw_to_battery_charge_ma(charge))?;

            let high = self.read_register(Axp209Register::BatteryDischargeHigh)?;
            let low = self.read_register(Axp209Register::BatteryDischargeLow)?;
            store.set(Quantity::BatteryDischarge, reassemble_13bit(high, low))?;

            let gauge = self.read_register(Axp209Register::FuelGauge)?;
            store.set(Quantity::BatteryLevel, battery_level_percent(gauge))?;

            let voltage = self.read_multi(BATTERY_VOLTAGE)?;
            store.set(Quantity::BatteryVoltage, raw_to_battery_voltage_mv(voltage))?;
        }

        if status.acin_present() {
            let voltage = self.read_multi(ACIN_VOLTAGE)?;
            store.set(Quantity::AcinVoltage, raw_to_acin_voltage_mv(voltage))?;

            let current = self.read_multi(ACIN_CURRENT)?;
            store.set(Quantity::AcinCurrent, raw_to_acin_current_ma(current))?;
        }

        // VBUS readings share the battery gate.
        if status.battery_present() {
            let voltage = self.read_multi(VBUS_VOLTAGE)?;
            store.set(Quantity::VbusVoltage, raw_to_vbus_voltage_mv(voltage))?;

            let current = self.read_multi(VBUS_CURRENT)?;
            store.set(Quantity::VbusCurrent, raw_to_vbus_current_ma(current))?;
        }

        let ipsout = VbusIpsout::from_bytes([self.read_register(Axp209Register::VbusIpsout)?]);
        if ipsout.voltage_limit_enabled() {
            store.set(
                Quantity::VbusVoltageLimit,
                vbus_voltage_limit_mv(ipsout.voltage_limit()),
            )?;
        }
        if let Some(limit) = vbus_current_limit_ma(ipsout.current_limit()) {
            store.set(Quantity::VbusCurrentLimit, limit)?;
        }

        Ok(())
    }
}
