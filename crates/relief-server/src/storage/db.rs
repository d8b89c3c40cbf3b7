//! SQLite database backend (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use relief_types::{
    Alert, EntityKind, Helpline, NewAlert, NewHelpline, NewSafeLocation, NewVolunteer,
    SafeLocation, Volunteer,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::Store;

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS alerts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                message TEXT,
                severity TEXT NOT NULL DEFAULT 'medium',
                location TEXT NOT NULL DEFAULT '',
                timestamp DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // The alert read path sorts on timestamp
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_alerts_timestamp ON alerts(timestamp)
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS helplines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                number TEXT,
                category TEXT NOT NULL DEFAULT 'general',
                description TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS safe_locations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                address TEXT,
                latitude REAL,
                longitude REAL,
                capacity INTEGER NOT NULL DEFAULT 0,
                current_occupancy INTEGER NOT NULL DEFAULT 0,
                facilities TEXT NOT NULL DEFAULT '[]',
                contact TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS volunteers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                phone TEXT,
                skills TEXT NOT NULL DEFAULT '[]',
                availability TEXT NOT NULL DEFAULT 'available',
                location TEXT NOT NULL DEFAULT '',
                registered_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    fn table(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::Alert => "alerts",
            EntityKind::Helpline => "helplines",
            EntityKind::SafeLocation => "safe_locations",
            EntityKind::Volunteer => "volunteers",
        }
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn insert_alert(&self, new: NewAlert) -> Result<Alert> {
        let timestamp = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO alerts (title, message, severity, location, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&new.title)
        .bind(&new.message)
        .bind(&new.severity)
        .bind(&new.location)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        Ok(Alert {
            id: result.last_insert_rowid().to_string(),
            title: new.title,
            message: new.message,
            severity: new.severity,
            location: new.location,
            timestamp,
        })
    }

    async fn recent_alerts(&self, limit: i64) -> Result<Vec<Alert>> {
        let rows: Vec<AlertRow> = sqlx::query_as(
            r#"
            SELECT id, title, message, severity, location, timestamp
            FROM alerts
            ORDER BY timestamp DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert_helpline(&self, new: NewHelpline) -> Result<Helpline> {
        let result = sqlx::query(
            r#"
            INSERT INTO helplines (name, number, category, description)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&new.name)
        .bind(&new.number)
        .bind(&new.category)
        .bind(&new.description)
        .execute(&self.pool)
        .await?;

        Ok(Helpline {
            id: result.last_insert_rowid().to_string(),
            name: new.name,
            number: new.number,
            category: new.category,
            description: new.description,
        })
    }

    async fn list_helplines(&self) -> Result<Vec<Helpline>> {
        let rows: Vec<HelplineRow> = sqlx::query_as(
            r#"
            SELECT id, name, number, category, description
            FROM helplines
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert_safe_location(&self, new: NewSafeLocation) -> Result<SafeLocation> {
        let result = sqlx::query(
            r#"
            INSERT INTO safe_locations
                (name, address, latitude, longitude, capacity, current_occupancy, facilities, contact)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&new.name)
        .bind(&new.address)
        .bind(new.latitude)
        .bind(new.longitude)
        .bind(new.capacity)
        .bind(new.current_occupancy)
        .bind(serde_json::to_string(&new.facilities)?)
        .bind(&new.contact)
        .execute(&self.pool)
        .await?;

        Ok(SafeLocation {
            id: result.last_insert_rowid().to_string(),
            name: new.name,
            address: new.address,
            latitude: new.latitude,
            longitude: new.longitude,
            capacity: new.capacity,
            current_occupancy: new.current_occupancy,
            facilities: new.facilities,
            contact: new.contact,
        })
    }

    async fn list_safe_locations(&self) -> Result<Vec<SafeLocation>> {
        let rows: Vec<SafeLocationRow> = sqlx::query_as(
            r#"
            SELECT id, name, address, latitude, longitude,
                   capacity, current_occupancy, facilities, contact
            FROM safe_locations
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert_volunteer(&self, new: NewVolunteer) -> Result<Volunteer> {
        let registered_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO volunteers
                (name, email, phone, skills, availability, location, registered_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(serde_json::to_string(&new.skills)?)
        .bind(&new.availability)
        .bind(&new.location)
        .bind(registered_at)
        .execute(&self.pool)
        .await?;

        Ok(Volunteer {
            id: result.last_insert_rowid().to_string(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            skills: new.skills,
            availability: new.availability,
            location: new.location,
            registered_at,
        })
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        let rows: Vec<VolunteerRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone, skills, availability, location, registered_at
            FROM volunteers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn count(&self, kind: EntityKind) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", Self::table(kind));
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count as u64)
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct AlertRow {
    id: i64,
    title: Option<String>,
    message: Option<String>,
    severity: String,
    location: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<AlertRow> for Alert {
    fn from(r: AlertRow) -> Self {
        Alert {
            id: r.id.to_string(),
            title: r.title,
            message: r.message,
            severity: r.severity,
            location: r.location,
            timestamp: r.timestamp,
        }
    }
}

#[derive(sqlx::FromRow)]
struct HelplineRow {
    id: i64,
    name: Option<String>,
    number: Option<String>,
    category: String,
    description: String,
}

impl From<HelplineRow> for Helpline {
    fn from(r: HelplineRow) -> Self {
        Helpline {
            id: r.id.to_string(),
            name: r.name,
            number: r.number,
            category: r.category,
            description: r.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SafeLocationRow {
    id: i64,
    name: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    capacity: i64,
    current_occupancy: i64,
    facilities: String,
    contact: String,
}

impl From<SafeLocationRow> for SafeLocation {
    fn from(r: SafeLocationRow) -> Self {
        SafeLocation {
            id: r.id.to_string(),
            name: r.name,
            address: r.address,
            latitude: r.latitude,
            longitude: r.longitude,
            capacity: r.capacity,
            current_occupancy: r.current_occupancy,
            facilities: serde_json::from_str(&r.facilities).unwrap_or_default(),
            contact: r.contact,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VolunteerRow {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    skills: String,
    availability: String,
    location: String,
    registered_at: chrono::DateTime<chrono::Utc>,
}

impl From<VolunteerRow> for Volunteer {
    fn from(r: VolunteerRow) -> Self {
        Volunteer {
            id: r.id.to_string(),
            name: r.name,
            email: r.email,
            phone: r.phone,
            skills: serde_json::from_str(&r.skills).unwrap_or_default(),
            availability: r.availability,
            location: r.location,
            registered_at: r.registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relief.db");
        let store = SqliteStore::new(path.to_str().unwrap()).await.unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_string_ids() {
        let (_dir, store) = temp_store().await;

        let first: NewHelpline = serde_json::from_str(r#"{"name":"Emergency Services"}"#).unwrap();
        let second: NewHelpline = serde_json::from_str(r#"{"name":"Fire Department"}"#).unwrap();

        let a = store.insert_helpline(first).await.unwrap();
        let b = store.insert_helpline(second).await.unwrap();

        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
    }

    #[tokio::test]
    async fn test_defaults_survive_a_round_trip() {
        let (_dir, store) = temp_store().await;

        let new: NewHelpline =
            serde_json::from_str(r#"{"name":"Poison Control","number":"1-800-222-1222"}"#).unwrap();
        store.insert_helpline(new).await.unwrap();

        let all = store.list_helplines().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "general");
        assert_eq!(all[0].description, "");
        assert_eq!(all[0].name.as_deref(), Some("Poison Control"));
    }

    #[tokio::test]
    async fn test_recent_alerts_orders_and_limits() {
        let (_dir, store) = temp_store().await;

        for i in 0..11 {
            let new: NewAlert =
                serde_json::from_value(serde_json::json!({ "title": format!("alert-{i}") }))
                    .unwrap();
            store.insert_alert(new).await.unwrap();
        }

        let recent = store.recent_alerts(10).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].title.as_deref(), Some("alert-10"));
        assert_eq!(recent[9].title.as_deref(), Some("alert-1"));
    }

    #[tokio::test]
    async fn test_list_columns_round_trip_json_lists() {
        let (_dir, store) = temp_store().await;

        let new: NewSafeLocation = serde_json::from_value(serde_json::json!({
            "name": "Community Center",
            "facilities": ["Food", "Water", "Medical"],
        }))
        .unwrap();
        store.insert_safe_location(new).await.unwrap();

        let all = store.list_safe_locations().await.unwrap();
        assert_eq!(all[0].facilities, vec!["Food", "Water", "Medical"]);
        assert_eq!(all[0].capacity, 0);
        assert_eq!(all[0].latitude, None);
    }

    #[tokio::test]
    async fn test_absent_fields_stored_as_null() {
        let (_dir, store) = temp_store().await;

        let new: NewVolunteer = serde_json::from_str("{}").unwrap();
        let created = store.insert_volunteer(new).await.unwrap();
        assert_eq!(created.name, None);
        assert_eq!(created.availability, "available");

        let all = store.list_volunteers().await.unwrap();
        assert_eq!(all[0].email, None);
        assert!(all[0].skills.is_empty());
    }

    #[tokio::test]
    async fn test_count_per_kind() {
        let (_dir, store) = temp_store().await;

        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 0);

        let new: NewAlert = serde_json::from_str("{}").unwrap();
        store.insert_alert(new).await.unwrap();

        assert_eq!(store.count(EntityKind::Alert).await.unwrap(), 1);
        assert_eq!(store.count(EntityKind::SafeLocation).await.unwrap(), 0);
    }
}
