//! HTTP handlers

pub mod alerts;
pub mod health;
pub mod helplines;
pub mod safe_locations;
pub mod volunteers;

pub use health::health;
