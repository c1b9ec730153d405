pub mod markers;
pub mod popup;
pub mod radar;
pub mod telemetry;
