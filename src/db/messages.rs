// src/db/messages.rs
use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;

#[derive(Debug, Clone)]
pub struct SentMessage {
    pub id: i64,
    pub body: String,
    pub recipient_count: i64,
    pub sent_at: NaiveDateTime,
}

/// Record one broadcast and its recipients in a single transaction.
pub fn record_message(
    db: &Database,
    body: &str,
    recipient_ids: &[i64],
    now: NaiveDateTime,
) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        tx.execute(
            "insert into messages (body, sent_at) values (?, ?)",
            params![body, now],
        )
        .map_err(|e| ServerError::DbError(format!("insert message failed: {e}")))?;

        let message_id = tx.last_insert_rowid();

        for resident_id in recipient_ids {
            tx.execute(
                "insert into message_recipients (message_id, resident_id) values (?, ?)",
                params![message_id, resident_id],
            )
            .map_err(|e| ServerError::DbError(format!("insert recipient failed: {e}")))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        Ok(message_id)
    })
}

pub fn list_messages(db: &Database) -> Result<Vec<SentMessage>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                select m.id, m.body, count(r.resident_id), m.sent_at
                from messages m
                left join message_recipients r on r.message_id = m.id
                group by m.id
                order by m.id desc
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SentMessage {
                    id: row.get(0)?,
                    body: row.get(1)?,
                    recipient_count: row.get(2)?,
                    sent_at: row.get(3)?,
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
