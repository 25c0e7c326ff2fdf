//! Per-cycle storage of decoded quantity values.

use core::fmt::Write;

use strum::EnumCount;
use thiserror::Error;

use crate::quantity::{NumericKind, Quantity};

/// Rendered values never exceed this many bytes.
pub const RENDER_CAPACITY: usize = 32;

/// Text form of one sample, as sent to the collector.
pub type Rendered = heapless::String<RENDER_CAPACITY>;

/// A decoded value, tagged with its storage type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Float(f32),
    U8(u8),
    U16(u16),
}

impl Value {
    pub const fn kind(&self) -> NumericKind {
        match self {
            Value::Float(_) => NumericKind::Float,
            Value::U8(_) => NumericKind::U8,
            Value::U16(_) => NumericKind::U16,
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::U8(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U16(value)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("{quantity:?} holds {expected:?} values, got {found:?}")]
    KindMismatch {
        quantity: Quantity,
        expected: NumericKind,
        found: NumericKind,
    },
}

/// The latest value of every [`Quantity`], or `None` when it was not valid this cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStore {
    values: [Option<Value>; Quantity::COUNT],
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleStore {
    /// A store with every quantity invalid.
    pub const fn new() -> Self {
        Self {
            values: [None; Quantity::COUNT],
        }
    }

    /// Invalidate every quantity. Called at the start of each cycle.
    pub fn reset(&mut self) {
        self.values = [None; Quantity::COUNT];
    }

    /// Store a value for `quantity` and mark it valid.
    pub fn set(&mut self, quantity: Quantity, value: impl Into<Value>) -> Result<(), SampleError> {
        let value = value.into();
        let expected = quantity.kind();
        if value.kind() != expected {
            return Err(SampleError::KindMismatch {
                quantity,
                expected,
                found: value.kind(),
            });
        }
        self.values[quantity.index()] = Some(value);
        Ok(())
    }

    pub fn get(&self, quantity: Quantity) -> Option<Value> {
        self.values[quantity.index()]
    }

    pub fn is_valid(&self, quantity: Quantity) -> bool {
        self.values[quantity.index()].is_some()
    }

    /// Format the value with the quantity's precision. Invalid quantities render empty.
    pub fn render(&self, quantity: Quantity) -> Rendered {
        let mut text = Rendered::new();
        let Some(value) = self.get(quantity) else {
            return text;
        };
        let precision = quantity.info().precision;
        // Overflow only truncates. 12-bit readings stay far below the capacity.
        let _ = match value {
            Value::Float(v) => write!(text, "{v:.precision$}"),
            Value::U8(v) => write!(text, "{v}"),
            Value::U16(v) => write!(text, "{v}"),
        };
        text
    }
}
