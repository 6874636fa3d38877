use thiserror::Error;

use crate::base_types::{Kg, PackageId};

/// Failures of the courier core. Configuration and input problems are
/// detected at construction or parse time and never leave a partially
/// constructed component behind; an unresolvable or inapplicable offer code
/// is NOT an error (it is a defined no-discount outcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// negative base cost, empty fleet, non-positive vehicle speed or load
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// malformed instance text or json, invalid package fields, duplicate ids
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// the package is heavier than the maximal load of every vehicle of the
    /// fleet; detected before the simulation loop starts
    #[error("package {package} ({weight}kg) exceeds the maximal load of every vehicle ({max_load}kg)")]
    UnschedulableItem {
        package: PackageId,
        weight: Kg,
        max_load: Kg,
    },

    /// iteration-cap backstop of the scheduling loop
    #[error("scheduler made no progress for {rounds} rounds")]
    SchedulerStalled { rounds: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
