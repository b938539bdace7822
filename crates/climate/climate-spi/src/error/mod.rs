//! Error module containing the engine error type and result alias

mod climate_error;

pub use climate_error::{ClimateError, Result};
