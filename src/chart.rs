//! Chart catalog: how quantities are grouped for display.
//!
//! Chart order and member order are part of the wire contract with the collector.

use crate::quantity::Quantity;

/// A named display group of one to four quantities.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chart {
    /// `type.id` on the wire.
    pub id: &'static str,
    pub title: &'static str,
    pub units: &'static str,
    pub members: &'static [Quantity],
}

/// Upper bound on [`Chart::members`].
pub const MAX_CHART_DIMENSIONS: usize = 4;

pub static CHARTS: [Chart; 8] = [
    Chart {
        id: "Chip.temps",
        title: "Temperature",
        units: "Degrees (F)",
        members: &[Quantity::InternalTemp],
    },
    Chart {
        id: "Chip.batterylevel",
        title: "Battery Level",
        units: "%",
        members: &[Quantity::BatteryLevel],
    },
    Chart {
        id: "Chip.batterycurrent",
        title: "Battery Current",
        units: "mA",
        members: &[
            Quantity::ChargeLimit,
            Quantity::ChargeTermination,
            Quantity::BatteryCharge,
            Quantity::BatteryDischarge,
        ],
    },
    Chart {
        id: "Chip.batteryvoltage",
        title: "Battery Voltage",
        units: "mV",
        members: &[Quantity::BatteryVoltage],
    },
    Chart {
        id: "Chip.acinvoltage",
        title: "ACIN Voltage",
        units: "mV",
        members: &[Quantity::AcinVoltage],
    },
    Chart {
        id: "Chip.acincurrent",
        title: "ACIN Current",
        units: "mA",
        members: &[Quantity::AcinCurrent],
    },
    Chart {
        id: "Chip.vbusvoltage",
        title: "VBUS Voltage",
        units: "mV",
        members: &[Quantity::VbusVoltage, Quantity::VbusVoltageLimit],
    },
    Chart {
        id: "Chip.vbuscurrent",
        title: "VBUS Current",
        units: "mA",
        members: &[Quantity::VbusCurrent, Quantity::VbusCurrentLimit],
    },
];
