// src/db/documents.rs
use crate::db::connection::Database;
use crate::domain::query::ListRecord;
use crate::domain::status::DocumentStatus;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;
use std::cmp::Ordering;

/// Document kinds the barangay issues.
pub const DOCUMENT_TYPES: &[&str] = &[
    "Barangay Clearance",
    "Certificate of Residency",
    "Certificate of Indigency",
    "Business Permit",
];

#[derive(Debug, Clone)]
pub struct DocumentRequest {
    pub id: i64,
    pub resident_name: String,
    pub document_type: String,
    pub purpose: String,
    pub status: DocumentStatus,
    pub requested_at: NaiveDateTime,
}

impl ListRecord for DocumentRequest {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.resident_name.clone(),
            self.id.to_string(),
            self.document_type.clone(),
            self.purpose.clone(),
        ]
    }

    fn filter_value(&self, filter: &str) -> Option<String> {
        match filter {
            "status" => Some(self.status.label().to_string()),
            "document_type" => Some(self.document_type.clone()),
            _ => None,
        }
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "requested" => self.requested_at.cmp(&other.requested_at),
            "resident" => self.resident_name.cmp(&other.resident_name),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewDocumentRequest {
    pub resident_name: String,
    pub document_type: String,
    pub purpose: String,
}

pub fn list_document_requests(db: &Database) -> Result<Vec<DocumentRequest>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                select id, resident_name, document_type, purpose, status, requested_at
                from document_requests
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
                    row.get::<_, NaiveDateTime>(5)?,
                ))
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let (id, resident_name, document_type, purpose, status, requested_at) =
                r.map_err(|e| ServerError::DbError(e.to_string()))?;
            let status = DocumentStatus::parse(&status)
                .ok_or_else(|| ServerError::DbError(format!("bad document status: {status}")))?;
            out.push(DocumentRequest {
                id,
                resident_name,
                document_type,
                purpose,
                status,
                requested_at,
            });
        }
        Ok(out)
    })
}

pub fn create_document_request(
    db: &Database,
    new: &NewDocumentRequest,
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            insert into document_requests
                (resident_name, document_type, purpose, status, requested_at)
            values (?, ?, ?, ?, ?)
            "#,
            params![
                new.resident_name,
                new.document_type,
                new.purpose,
                DocumentStatus::Pending.as_str(),
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert document request failed: {e}")))?;

        Ok(conn.last_insert_rowid())
    })
}

pub fn update_document_status(
    db: &Database,
    id: i64,
    status: DocumentStatus,
) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let changed = conn
            .execute(
                "update document_requests set status = ? where id = ?",
                params![status.as_str(), id],
            )
            .map_err(|e| ServerError::DbError(format!("update document request failed: {e}")))?;

        if changed == 0 {
            return Err(ServerError::NotFound);
        }
        Ok(())
    })
}
