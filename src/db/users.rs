// src/db/users.rs
use crate::auth::Role;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn create_user(
    conn: &Connection,
    username: &str,
    password_hash: &[u8],
    role: Role,
    resident_id: Option<i64>,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into users (username, password_hash, role, resident_id, created_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![username, password_hash, role.as_str(), resident_id, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

pub fn username_taken(conn: &Connection, username: &str) -> Result<bool, ServerError> {
    let found: Option<i64> = conn
        .query_row(
            "select id from users where username = ?",
            params![username],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("username lookup failed: {e}")))?;

    Ok(found.is_some())
}

/// Credential check for login. Returns the user id and role on a match.
pub fn find_by_credentials(
    conn: &Connection,
    username: &str,
    password_hash: &[u8],
) -> Result<Option<(i64, Role)>, ServerError> {
    let row: Option<(i64, String)> = conn
        .query_row(
            "select id, role from users where username = ? and password_hash = ?",
            params![username, password_hash],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("credential lookup failed: {e}")))?;

    Ok(row.and_then(|(id, role)| Role::parse(&role).map(|r| (id, r))))
}
