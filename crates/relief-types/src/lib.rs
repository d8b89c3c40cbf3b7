//! Relief Types - Pure type definitions for the disaster-information backend
//!
//! This crate contains only plain data types with no async runtime
//! dependencies: the four entity records, their creation-request shapes,
//! and the `EntityKind` enum.

pub mod alert;
pub mod helpline;
pub mod safe_location;
pub mod volunteer;

pub use alert::*;
pub use helpline::*;
pub use safe_location::*;
pub use volunteer::*;

use serde::{Deserialize, Serialize};

/// The four record kinds the backend stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Alert,
    Helpline,
    SafeLocation,
    Volunteer,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Alert => write!(f, "alerts"),
            EntityKind::Helpline => write!(f, "helplines"),
            EntityKind::SafeLocation => write!(f, "safe_locations"),
            EntityKind::Volunteer => write!(f, "volunteers"),
        }
    }
}
