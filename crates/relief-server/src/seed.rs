//! Sample-data seeding
//!
//! One-shot population of the store with fixed demonstration records. Each
//! kind is seeded only when it is currently empty; the check-then-insert is
//! not atomic, so this runs as a single offline step, never alongside the
//! live service.

use anyhow::Result;
use relief_types::{EntityKind, NewAlert, NewHelpline, NewSafeLocation, NewVolunteer};
use tracing::{info, warn};

use crate::storage::Store;

pub fn sample_alerts() -> Vec<NewAlert> {
    vec![
        NewAlert {
            title: Some("Heavy Rainfall Warning".to_string()),
            message: Some(
                "Heavy rainfall expected in the next 24 hours. Please stay indoors and avoid \
                 low-lying areas."
                    .to_string(),
            ),
            severity: "high".to_string(),
            location: "Downtown Area".to_string(),
        },
        NewAlert {
            title: Some("Emergency Shelter Open".to_string()),
            message: Some(
                "Community Center at 123 Main St is now open as an emergency shelter.".to_string(),
            ),
            severity: "medium".to_string(),
            location: "123 Main Street".to_string(),
        },
    ]
}

pub fn sample_helplines() -> Vec<NewHelpline> {
    vec![
        NewHelpline {
            name: Some("Emergency Services".to_string()),
            number: Some("911".to_string()),
            category: "general".to_string(),
            description: "General emergency services".to_string(),
        },
        NewHelpline {
            name: Some("Disaster Relief Hotline".to_string()),
            number: Some("1-800-DISASTER".to_string()),
            category: "rescue".to_string(),
            description: "24/7 disaster relief assistance".to_string(),
        },
        NewHelpline {
            name: Some("Medical Emergency".to_string()),
            number: Some("1-800-MEDICAL".to_string()),
            category: "medical".to_string(),
            description: "Medical emergency hotline".to_string(),
        },
        NewHelpline {
            name: Some("Fire Department".to_string()),
            number: Some("1-800-FIRE".to_string()),
            category: "fire".to_string(),
            description: "Fire emergency services".to_string(),
        },
    ]
}

pub fn sample_safe_locations() -> Vec<NewSafeLocation> {
    vec![
        NewSafeLocation {
            name: Some("Community Center".to_string()),
            address: Some("123 Main Street, City, State 12345".to_string()),
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            capacity: 200,
            current_occupancy: 45,
            facilities: ["Food", "Water", "Medical", "Restrooms", "WiFi"]
                .map(String::from)
                .to_vec(),
            contact: "555-0100".to_string(),
        },
        NewSafeLocation {
            name: Some("High School Gymnasium".to_string()),
            address: Some("456 School Road, City, State 12345".to_string()),
            latitude: Some(40.7580),
            longitude: Some(-73.9855),
            capacity: 500,
            current_occupancy: 120,
            facilities: ["Food", "Water", "Restrooms", "Showers"]
                .map(String::from)
                .to_vec(),
            contact: "555-0200".to_string(),
        },
        NewSafeLocation {
            name: Some("City Hall".to_string()),
            address: Some("789 Government Ave, City, State 12345".to_string()),
            latitude: Some(40.7505),
            longitude: Some(-73.9934),
            capacity: 150,
            current_occupancy: 30,
            facilities: ["Food", "Water", "WiFi", "Charging Stations"]
                .map(String::from)
                .to_vec(),
            contact: "555-0300".to_string(),
        },
    ]
}

pub fn sample_volunteers() -> Vec<NewVolunteer> {
    vec![
        NewVolunteer {
            name: Some("John Doe".to_string()),
            email: Some("john.doe@email.com".to_string()),
            phone: Some("555-1000".to_string()),
            skills: ["First Aid", "Cooking", "Translation"].map(String::from).to_vec(),
            availability: "available".to_string(),
            location: "Downtown Area".to_string(),
        },
        NewVolunteer {
            name: Some("Jane Smith".to_string()),
            email: Some("jane.smith@email.com".to_string()),
            phone: Some("555-2000".to_string()),
            skills: ["Medical", "Counseling"].map(String::from).to_vec(),
            availability: "available".to_string(),
            location: "North Side".to_string(),
        },
    ]
}

/// Seed every kind that is currently empty; skip the rest.
pub async fn run(store: &dyn Store) -> Result<()> {
    if store.count(EntityKind::Alert).await? == 0 {
        let alerts = sample_alerts();
        let n = alerts.len();
        for alert in alerts {
            store.insert_alert(alert).await?;
        }
        info!("Inserted {} sample {}", n, EntityKind::Alert);
    } else {
        warn!("{} already has data, skipping", EntityKind::Alert);
    }

    if store.count(EntityKind::Helpline).await? == 0 {
        let helplines = sample_helplines();
        let n = helplines.len();
        for helpline in helplines {
            store.insert_helpline(helpline).await?;
        }
        info!("Inserted {} sample {}", n, EntityKind::Helpline);
    } else {
        warn!("{} already has data, skipping", EntityKind::Helpline);
    }

    if store.count(EntityKind::SafeLocation).await? == 0 {
        let locations = sample_safe_locations();
        let n = locations.len();
        for location in locations {
            store.insert_safe_location(location).await?;
        }
        info!("Inserted {} sample {}", n, EntityKind::SafeLocation);
    } else {
        warn!("{} already has data, skipping", EntityKind::SafeLocation);
    }

    if store.count(EntityKind::Volunteer).await? == 0 {
        let volunteers = sample_volunteers();
        let n = volunteers.len();
        for volunteer in volunteers {
            store.insert_volunteer(volunteer).await?;
        }
        info!("Inserted {} sample {}", n, EntityKind::Volunteer);
    } else {
        warn!("{} already has data, skipping", EntityKind::Volunteer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_seeding_twice_inserts_one_sample_set() {
        let store = MemoryStore::new();

        run(&store).await.unwrap();
        run(&store).await.unwrap();

        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 2);
        assert_eq!(store.count(EntityKind::Helpline).await.unwrap(), 4);
        assert_eq!(store.count(EntityKind::SafeLocation).await.unwrap(), 3);
        assert_eq!(store.count(EntityKind::Volunteer).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seeding_skips_only_non_empty_kinds() {
        let store = MemoryStore::new();

        // One kind pre-populated: it keeps its single record, the rest seed.
        let existing: relief_types::NewHelpline = serde_json::from_str("{}").unwrap();
        store.insert_helpline(existing).await.unwrap();

        run(&store).await.unwrap();

        assert_eq!(store.count(EntityKind::Helpline).await.unwrap(), 1);
        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 2);
        assert_eq!(store.count(EntityKind::Volunteer).await.unwrap(), 2);
    }
}
