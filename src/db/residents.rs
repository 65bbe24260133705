// src/db/residents.rs
use crate::db::connection::Database;
use crate::domain::query::ListRecord;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Resident {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub age: u32,
    pub contact_number: String,
    pub address: String,
    pub username: String,
    pub registered_at: NaiveDateTime,
}

impl Resident {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ListRecord for Resident {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.username.clone(),
            self.contact_number.clone(),
            self.address.clone(),
            self.id.to_string(),
        ]
    }

    fn filter_value(&self, _filter: &str) -> Option<String> {
        None
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => (self.last_name.as_str(), self.first_name.as_str())
                .cmp(&(other.last_name.as_str(), other.first_name.as_str())),
            "age" => self.age.cmp(&other.age),
            "registered" => self.registered_at.cmp(&other.registered_at),
            _ => Ordering::Equal,
        }
    }
}

/// Fields for a new resident after normalization and derivation.
#[derive(Debug, Clone)]
pub struct NewResident {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub age: u32,
    pub contact_number: String,
    pub address: String,
    pub username: String,
}

pub fn list_residents(db: &Database) -> Result<Vec<Resident>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                select id, first_name, last_name, birth_date, age,
                       contact_number, address, username, registered_at
                from residents
                order by id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Resident {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    birth_date: row.get(3)?,
                    age: row.get(4)?,
                    contact_number: row.get(5)?,
                    address: row.get(6)?,
                    username: row.get(7)?,
                    registered_at: row.get(8)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

pub fn create_resident(
    db: &Database,
    new: &NewResident,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into residents
                (first_name, last_name, birth_date, age, contact_number,
                 address, username, registered_at)
            values (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                new.first_name,
                new.last_name,
                new.birth_date,
                new.age,
                new.contact_number,
                new.address,
                new.username,
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert resident failed: {e}")))?;

        Ok(conn.last_insert_rowid())
    })
}

pub fn count_residents(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("select count(*) from residents", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}
