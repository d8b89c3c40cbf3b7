//! Relief Server
//!
//! Disaster-information web backend: CRUD endpoints over alerts, helplines,
//! safe locations, and volunteers, backed interchangeably by an in-memory
//! document store or an embedded SQLite database.

pub mod app;
pub mod config;
pub mod handlers;
pub mod seed;
pub mod storage;

pub use app::{create_app, AppState};
pub use config::{load_config, Config, StoreBackend};
