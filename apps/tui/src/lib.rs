// Export our modules for use in binaries and tests
pub mod config;
pub mod domain;
pub mod logging;
pub mod radar;

pub use domain::RadarSize;
