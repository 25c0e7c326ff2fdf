//! Our error types for the AXP209 plugin.

use thiserror::Error;

use crate::sample::SampleError;

pub type Result<T, I> = core::result::Result<T, Error<I>>;

/// Errors raised while talking to the PMIC or writing the collector stream.
///
/// Every bus variant carries the register address so the diagnostic can name it.
#[derive(Error, Debug)]
pub enum Error<I: embedded_io::Error> {
    #[error("Unable to query for register {register:#04x}: {cause:?}")]
    Query { register: u8, cause: I },
    #[error("Unable to read register {register:#04x}: {cause:?}")]
    Read { register: u8, cause: I },
    #[error("Unable to read register {register:#04x}: no data returned")]
    ShortRead { register: u8 },
    #[error("Unable to write register {register:#04x}: {cause:?}")]
    Write { register: u8, cause: I },
    #[error("Unable to write to the collector stream: {0}")]
    Output(#[from] std::io::Error),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

impl<I: embedded_io::Error> Error<I> {
    /// The register involved in a failed bus transfer, if any.
    pub fn register(&self) -> Option<u8> {
        match self {
            Error::Query { register, .. }
            | Error::Read { register, .. }
            | Error::ShortRead { register }
            | Error::Write { register, .. } => Some(*register),
            Error::Output(_) | Error::Sample(_) => None,
        }
    }
}
