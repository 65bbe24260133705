// src/db/incidents.rs
use crate::db::connection::Database;
use crate::domain::query::ListRecord;
use crate::domain::status::IncidentStatus;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct IncidentReport {
    pub id: i64,
    pub reporter_name: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub status: IncidentStatus,
    pub reported_at: NaiveDateTime,
}

impl ListRecord for IncidentReport {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.reporter_name.clone(),
            self.id.to_string(),
            self.category.clone(),
            self.location.clone(),
            self.description.clone(),
        ]
    }

    fn filter_value(&self, filter: &str) -> Option<String> {
        match filter {
            "status" => Some(self.status.label().to_string()),
            "category" => Some(self.category.clone()),
            _ => None,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "reported" => self.reported_at.cmp(&other.reported_at),
            "reporter" => self.reporter_name.cmp(&other.reporter_name),
            "category" => self.category.cmp(&other.category),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewIncidentReport {
    pub reporter_name: String,
    pub category: String,
    pub location: String,
    pub description: String,
}

pub fn list_incidents(db: &Database) -> Result<Vec<IncidentReport>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                select id, reporter_name, category, location, description,
                       status, reported_at
                from incident_reports
                order by id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, NaiveDateTime>(6)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let (id, reporter_name, category, location, description, status, reported_at) =
                r.map_err(|e| ServerError::DbError(e.to_string()))?;
            let status = IncidentStatus::parse(&status)
                .ok_or_else(|| ServerError::DbError(format!("bad incident status: {status}")))?;
            out.push(IncidentReport {
                id,
                reporter_name,
                category,
                location,
                description,
                status,
                reported_at,
            });
        }
        Ok(out)
    })
}

pub fn create_incident(
    db: &Database,
    new: &NewIncidentReport,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into incident_reports
                (reporter_name, category, location, description, status, reported_at)
            values (?, ?, ?, ?, ?, ?)
            "#,
            params![
                new.reporter_name,
                new.category,
                new.location,
                new.description,
                IncidentStatus::None.as_str(),
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert incident failed: {e}")))?;

        Ok(conn.last_insert_rowid())
    })
}

pub fn update_incident_status(
    db: &Database,
    id: i64,
    status: IncidentStatus,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "update incident_reports set status = ? where id = ?",
                params![status.as_str(), id],
            )
            .map_err(|e| ServerError::DbError(format!("update incident failed: {e}")))?;

        if changed == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
