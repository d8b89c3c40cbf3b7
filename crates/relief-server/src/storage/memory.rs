//! In-memory document store using DashMap

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use relief_types::{
    Alert, EntityKind, Helpline, NewAlert, NewHelpline, NewSafeLocation, NewVolunteer,
    SafeLocation, Volunteer,
};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Store;

/// Schema-less store keyed by uuid string ids.
///
/// Every record carries an insertion sequence number so listings stay in a
/// stable order even though the maps themselves are unordered.
pub struct MemoryStore {
    alerts: DashMap<String, Sequenced<Alert>>,
    helplines: DashMap<String, Sequenced<Helpline>>,
    safe_locations: DashMap<String, Sequenced<SafeLocation>>,
    volunteers: DashMap<String, Sequenced<Volunteer>>,
    next_seq: AtomicU64,
}

struct Sequenced<T> {
    seq: u64,
    record: T,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Records in insertion order.
fn in_insertion_order<T: Clone>(map: &DashMap<String, Sequenced<T>>) -> Vec<T> {
    let mut rows: Vec<(u64, T)> = map
        .iter()
        .map(|entry| (entry.seq, entry.record.clone()))
        .collect();
    rows.sort_by_key(|(seq, _)| *seq);
    rows.into_iter().map(|(_, record)| record).collect()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            alerts: DashMap::new(),
            helplines: DashMap::new(),
            safe_locations: DashMap::new(),
            volunteers: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_alert(&self, new: NewAlert) -> Result<Alert> {
        let alert = Alert {
            id: new_id(),
            title: new.title,
            message: new.message,
            severity: new.severity,
            location: new.location,
            timestamp: Utc::now(),
        };
        self.alerts.insert(
            alert.id.clone(),
            Sequenced {
                seq: self.next_seq(),
                record: alert.clone(),
            },
        );
        Ok(alert)
    }

    async fn recent_alerts(&self, limit: i64) -> Result<Vec<Alert>> {
        let mut rows: Vec<(u64, Alert)> = self
            .alerts
            .iter()
            .map(|entry| (entry.seq, entry.record.clone()))
            .collect();
        // Newest first; equal timestamps fall back to insertion order,
        // later insert first.
        rows.sort_by(|a, b| {
            b.1.timestamp
                .cmp(&a.1.timestamp)
                .then_with(|| b.0.cmp(&a.0))
        });
        rows.truncate(limit.max(0) as usize);
        Ok(rows.into_iter().map(|(_, alert)| alert).collect())
    }

    async fn insert_helpline(&self, new: NewHelpline) -> Result<Helpline> {
        let helpline = Helpline {
            id: new_id(),
            name: new.name,
            number: new.number,
            category: new.category,
            description: new.description,
        };
        self.helplines.insert(
            helpline.id.clone(),
            Sequenced {
                seq: self.next_seq(),
                record: helpline.clone(),
            },
        );
        Ok(helpline)
    }

    async fn list_helplines(&self) -> Result<Vec<Helpline>> {
        Ok(in_insertion_order(&self.helplines))
    }

    async fn insert_safe_location(&self, new: NewSafeLocation) -> Result<SafeLocation> {
        let location = SafeLocation {
            id: new_id(),
            name: new.name,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            capacity: new.capacity,
            current_occupancy: new.current_occupancy,
            facilities: new.facilities,
            contact: new.contact,
        };
        self.safe_locations.insert(
            location.id.clone(),
            Sequenced {
                seq: self.next_seq(),
                record: location.clone(),
            },
        );
        Ok(location)
    }

    async fn list_safe_locations(&self) -> Result<Vec<SafeLocation>> {
        Ok(in_insertion_order(&self.safe_locations))
    }

    async fn insert_volunteer(&self, new: NewVolunteer) -> Result<Volunteer> {
        let volunteer = Volunteer {
            id: new_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            skills: new.skills,
            availability: new.availability,
            location: new.location,
            registered_at: Utc::now(),
        };
        self.volunteers.insert(
            volunteer.id.clone(),
            Sequenced {
                seq: self.next_seq(),
                record: volunteer.clone(),
            },
        );
        Ok(volunteer)
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        Ok(in_insertion_order(&self.volunteers))
    }

    async fn count(&self, kind: EntityKind) -> Result<u64> {
        let count = match kind {
            EntityKind::Alert => self.alerts.len(),
            EntityKind::Helpline => self.helplines.len(),
            EntityKind::SafeLocation => self.safe_locations.len(),
            EntityKind::Volunteer => self.volunteers.len(),
        };
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helpline(name: &str) -> NewHelpline {
        serde_json::from_value(serde_json::json!({ "name": name, "number": "911" })).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let store = MemoryStore::new();

        let created = store.insert_helpline(helpline("Emergency Services")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.category, "general");

        let all = store.list_helplines().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn test_listing_preserves_insertion_order() {
        let store = MemoryStore::new();

        for name in ["first", "second", "third"] {
            store.insert_helpline(helpline(name)).await.unwrap();
        }

        let all = store.list_helplines().await.unwrap();
        let names: Vec<_> = all.iter().filter_map(|h| h.name.as_deref()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_recent_alerts_limit_and_order() {
        let store = MemoryStore::new();

        for i in 0..11 {
            let new: NewAlert =
                serde_json::from_value(serde_json::json!({ "title": format!("alert-{i}") }))
                    .unwrap();
            store.insert_alert(new).await.unwrap();
        }

        let recent = store.recent_alerts(10).await.unwrap();
        assert_eq!(recent.len(), 10);
        // Newest first: alert-10 down to alert-1; alert-0 fell off the end.
        assert_eq!(recent[0].title.as_deref(), Some("alert-10"));
        assert_eq!(recent[9].title.as_deref(), Some("alert-1"));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = MemoryStore::new();

        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let created = store.insert_helpline(helpline(&format!("line-{i}"))).await.unwrap();
            assert!(ids.insert(created.id));
        }
        assert_eq!(store.count(EntityKind::Helpline).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_count_by_kind() {
        let store = MemoryStore::new();
        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 0);

        let new: NewAlert = serde_json::from_str("{}").unwrap();
        store.insert_alert(new).await.unwrap();

        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 1);
        assert_eq!(store.count(EntityKind::Volunteer).await.unwrap(), 0);
    }
}
