use thiserror::Error;

use crate::planets::Planet;

/// Error type for every fallible operation of the crate.
///
/// All variants describe caller mistakes or numerical guard trips; none of them
/// is recoverable by retrying with the same inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("{operation} is not defined for {planet:?}")]
    UnsupportedBody {
        planet: Planet,
        operation: &'static str,
    },

    #[error("non-finite value for {0}")]
    NonFiniteInput(&'static str),

    #[error("invalid comet elements: {0}")]
    InvalidCometElements(String),

    #[error("Kepler solver failed to converge after {iterations} iterations (residual {residual:e})")]
    KeplerDivergence { iterations: usize, residual: f64 },

    #[error("orbit tessellation needs at least 2 divisions, got {0}")]
    InvalidDivisions(usize),

    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
}
