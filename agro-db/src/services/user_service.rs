//! Advisor account service

use std::sync::Arc;

use agro_core::{Advisor, UserRole};
use rusqlite::{params, OptionalExtension};

use crate::db::Database;
use crate::error::{DbError, DbResult};

#[derive(Clone)]
pub struct UserService {
    db: Arc<Database>,
}

impl UserService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create an advisor account. The password must already be hashed;
    /// a duplicate email is a conflict, not a new row.
    pub fn create(
        &self,
        email: &str,
        password_hash: &str,
        full_name: Option<&str>,
        role: UserRole,
    ) -> DbResult<Advisor> {
        let conn = self.db.conn();
        let inserted = conn.execute(
            "INSERT INTO users (email, password_hash, full_name, role, is_active) \
             VALUES (?1, ?2, ?3, ?4, 1)",
            params![email, password_hash, full_name, role.as_str()],
        );
        if let Err(err) = inserted {
            let err = DbError::from(err);
            if err.is_constraint_violation() {
                return Err(DbError::conflict(format!(
                    "account with email {email} already exists"
                )));
            }
            return Err(err);
        }
        Ok(Advisor {
            id: conn.last_insert_rowid(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            full_name: full_name.map(str::to_string),
            role,
            is_active: true,
        })
    }

    pub fn find_by_email(&self, email: &str) -> DbResult<Option<Advisor>> {
        let conn = self.db.conn();
        conn.query_row(
            "SELECT id, email, password_hash, full_name, role, is_active \
             FROM users WHERE email = ?1",
            params![email],
            |row| {
                let role_raw: String = row.get(4)?;
                Ok(Advisor {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    full_name: row.get(3)?,
                    role: UserRole::parse(&role_raw).unwrap_or(UserRole::Advisor),
                    is_active: row.get(5)?,
                })
            },
        )
        .optional()
        .map_err(DbError::from)
    }

    pub fn count(&self) -> DbResult<i64> {
        let conn = self.db.conn();
        Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
    }
}
