//! The fixed set of quantities reported to the collector.

use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

/// Every physical measurement the plugin reports.
///
/// Declaration order is the storage order of [`SampleStore`](crate::sample::SampleStore).
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, EnumCountMacro)]
#[repr(usize)]
pub enum Quantity {
    InternalTemp,
    BatteryLevel,
    ChargeLimit,
    ChargeTermination,
    BatteryCharge,
    BatteryDischarge,
    BatteryVoltage,
    AcinVoltage,
    AcinCurrent,
    VbusVoltage,
    VbusVoltageLimit,
    VbusCurrent,
    VbusCurrentLimit,
}

/// Storage type of a quantity's value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumericKind {
    Float,
    U8,
    U16,
}

/// How the collector should interpret successive values of a dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Algorithm {
    Absolute,
}

/// Display and storage metadata of one quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuantityInfo {
    /// Dimension id on the wire.
    pub id: &'static str,
    pub kind: NumericKind,
    /// Decimal places when rendered. Ignored for integer kinds.
    pub precision: usize,
    pub label: &'static str,
    pub algorithm: Algorithm,
}

impl QuantityInfo {
    const fn new(
        id: &'static str,
        kind: NumericKind,
        precision: usize,
        label: &'static str,
    ) -> Self {
        Self {
            id,
            kind,
            precision,
            label,
            algorithm: Algorithm::Absolute,
        }
    }
}

impl Quantity {
    /// Position of this quantity in per-quantity tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn info(self) -> QuantityInfo {
        use NumericKind::*;
        use Quantity as Q;
        match self {
            Q::InternalTemp => QuantityInfo::new("internaltemp", Float, 1, "Internal Temp"),
            Q::BatteryLevel => QuantityInfo::new("batlevel", U8, 0, "Charge"),
            Q::ChargeLimit => QuantityInfo::new("chargelimit", U16, 0, "Charge Limit"),
            Q::ChargeTermination => {
                QuantityInfo::new("chargeterm", U16, 0, "Charge Termination Limit")
            }
            Q::BatteryCharge => QuantityInfo::new("batcharge", Float, 1, "Batt Charge"),
            Q::BatteryDischarge => QuantityInfo::new("batdischarge", U16, 0, "Batt Discharge"),
            Q::BatteryVoltage => QuantityInfo::new("batvoltage", Float, 1, "Voltage"),
            Q::AcinVoltage => QuantityInfo::new("acinvoltage", Float, 1, "Voltage"),
            Q::AcinCurrent => QuantityInfo::new("acincurrent", Float, 3, "Current"),
            Q::VbusVoltage => QuantityInfo::new("vbusvoltage", Float, 1, "Voltage"),
            Q::VbusVoltageLimit => QuantityInfo::new("vbusvoltagelimit", U16, 0, "Limit"),
            Q::VbusCurrent => QuantityInfo::new("vbuscurrent", Float, 3, "Current"),
            Q::VbusCurrentLimit => QuantityInfo::new("vbuscurrentlimit", U16, 0, "Limit"),
        }
    }

    #[inline]
    pub const fn id(self) -> &'static str {
        self.info().id
    }

    #[inline]
    pub const fn kind(self) -> NumericKind {
        self.info().kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn indices_are_dense() {
        for (position, quantity) in Quantity::iter().enumerate() {
            assert_eq!(quantity.index(), position);
        }
        assert_eq!(Quantity::COUNT, 13);
    }

    #[test]
    fn ids_are_unique() {
        let ids: Vec<_> = Quantity::iter().map(Quantity::id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
        }
    }

    #[test]
    fn integer_kinds_have_no_decimals() {
        for quantity in Quantity::iter() {
            let info = quantity.info();
            if info.kind != NumericKind::Float {
                assert_eq!(info.precision, 0, "{}", info.id);
            }
        }
    }

    #[test]
    fn every_dimension_is_absolute() {
        for quantity in Quantity::iter() {
            assert_eq!(quantity.info().algorithm.as_ref(), "absolute");
        }
    }
}
