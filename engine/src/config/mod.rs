//! Config Module
//!
//! Centralized configuration for renderer colors and editor tuning.

pub mod raster_config;

pub use raster_config::{ConfigError, RasterConfig};
