// src/auth/sessions.rs
//
// Session context for every request. The original system kept two flat
// keys (`isLoggedIn`, `userRole`) in shared browser storage; here the
// session is an explicit tagged value populated from the sessions table.

use crate::auth::token::hash_token;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Resident,
    Chairperson,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Chairperson => "chairperson",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "resident" => Some(Role::Resident),
            "chairperson" => Some(Role::Chairperson),
            _ => None,
        }
    }
}

/// Who is making the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated {
        user_id: i64,
        username: String,
        role: Role,
    },
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { role, .. } => Some(*role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

pub fn create_session(conn: &Connection, user_id: i64, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(())
}

/// Resolve a cookie token to a session. Expired, revoked or unknown
/// tokens resolve to `Anonymous`, never to an error.
pub fn load_session(conn: &Connection, raw_token: &str, now: i64) -> Result<Session, ServerError> {
    let hash = hash_token(raw_token);

    let row: Option<(i64, String, String)> = conn
        .query_row(
            r#"
            select u.id, u.username, u.role
            from sessions s
            join users u on u.id = s.user_id
            where s.token_hash = ?
              and s.expires_at > ?
              and s.revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    Ok(match row {
        Some((user_id, username, role_str)) => match Role::parse(&role_str) {
            Some(role) => Session::Authenticated {
                user_id,
                username,
                role,
            },
            None => Session::Anonymous,
        },
        None => Session::Anonymous,
    })
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ?",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips() {
        assert_eq!(Role::parse("resident"), Some(Role::Resident));
        assert_eq!(Role::parse("chairperson"), Some(Role::Chairperson));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn anonymous_has_no_role() {
        assert_eq!(Session::Anonymous.role(), None);
        assert!(!Session::Anonymous.is_authenticated());
    }
}
