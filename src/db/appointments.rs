// src/db/appointments.rs
use crate::db::connection::Database;
use crate::domain::query::ListRecord;
use crate::domain::status::AppointmentStatus;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: i64,
    pub resident_name: String,
    pub subject: String,
    pub official_name: String,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: NaiveDateTime,
}

impl ListRecord for Appointment {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.resident_name.clone(),
            self.id.to_string(),
            self.subject.clone(),
            self.official_name.clone(),
        ]
    }

    fn filter_value(&self, filter: &str) -> Option<String> {
        match filter {
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            // date keys compare by instant, not rendered string
            "scheduled" => self.scheduled_at.cmp(&other.scheduled_at),
            "created" => self.created_at.cmp(&other.created_at),
            "resident" => self.resident_name.cmp(&other.resident_name),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub resident_name: String,
    pub subject: String,
    pub official_name: String,
    pub scheduled_at: NaiveDateTime,
}

pub fn list_appointments(db: &Database) -> Result<Vec<Appointment>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                select id, resident_name, subject, official_name,
                       scheduled_at, status, created_at
                from appointments
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
                    row.get::<_, NaiveDateTime>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, NaiveDateTime>(6)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let (id, resident_name, subject, official_name, scheduled_at, status, created_at) =
                r.map_err(|e| ServerError::DbError(e.to_string()))?;
            let status = AppointmentStatus::parse(&status)
                .ok_or_else(|| ServerError::DbError(format!("bad appointment status: {status}")))?;
            out.push(Appointment {
                id,
                resident_name,
                subject,
                official_name,
                scheduled_at,
                status,
                created_at,
            });
        }
        Ok(out)
    })
}

pub fn create_appointment(
    db: &Database,
    new: &NewAppointment,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into appointments
                (resident_name, subject, official_name, scheduled_at, status, created_at)
            values (?, ?, ?, ?, ?, ?)
            "#,
            params![
                new.resident_name,
                new.subject,
                new.official_name,
                new.scheduled_at,
                AppointmentStatus::Awaiting.as_str(),
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert appointment failed: {e}")))?;

        Ok(conn.last_insert_rowid())
    })
}

/// Status change is the only mutation an appointment supports.
/// `NotFound` when no row has the given id.
pub fn update_appointment_status(
    db: &Database,
    id: i64,
    status: AppointmentStatus,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "update appointments set status = ? where id = ?",
                params![status.as_str(), id],
            )
            .map_err(|e| ServerError::DbError(format!("update appointment failed: {e}")))?;

        if changed == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
