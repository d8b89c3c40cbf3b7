//! Storage layer
//!
//! One `Store` interface, two interchangeable backends: an in-memory
//! document store (uuid string ids) and an embedded SQLite database
//! (autoincrement integer ids). The id representation difference stays
//! behind the string serialization boundary; callers only ever see opaque
//! string handles.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use crate::config::{Config, StoreBackend};
use anyhow::Result;
use async_trait::async_trait;
use relief_types::{
    Alert, EntityKind, Helpline, NewAlert, NewHelpline, NewSafeLocation, NewVolunteer,
    SafeLocation, Volunteer,
};
use std::sync::Arc;

/// How many alerts a listing returns
pub const RECENT_ALERT_LIMIT: i64 = 10;

/// Uniform persistence contract for the four record kinds.
///
/// Inserts assign the identifier and any creation timestamp, persist
/// atomically, and return the full stored record. Listings never fail on an
/// empty store; they return an empty vector.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_alert(&self, new: NewAlert) -> Result<Alert>;

    /// Up to `limit` alerts, newest first; equal timestamps order
    /// later-inserted first.
    async fn recent_alerts(&self, limit: i64) -> Result<Vec<Alert>>;

    async fn insert_helpline(&self, new: NewHelpline) -> Result<Helpline>;

    /// Every helpline, in stable insertion order.
    async fn list_helplines(&self) -> Result<Vec<Helpline>>;

    async fn insert_safe_location(&self, new: NewSafeLocation) -> Result<SafeLocation>;

    async fn list_safe_locations(&self) -> Result<Vec<SafeLocation>>;

    async fn insert_volunteer(&self, new: NewVolunteer) -> Result<Volunteer>;

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>>;

    /// Number of stored records of the given kind (seeding pre-check).
    async fn count(&self, kind: EntityKind) -> Result<u64>;
}

/// Construct the configured backend. A connection failure here is fatal to
/// the caller; the service never starts serving without a reachable store.
pub async fn connect(config: &Config) -> Result<Arc<dyn Store>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sqlite => {
            let store = SqliteStore::new(&config.database_path).await?;
            Ok(Arc::new(store))
        }
    }
}
