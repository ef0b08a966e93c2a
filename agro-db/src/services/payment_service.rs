//! Payment records service
//!
//! Payments are written by the seed bootstrap and by future calculation
//! flows; the API surface only reads them per client and relies on the
//! cascade to remove them with their farmer.

use std::sync::Arc;

use agro_core::Payment;
use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::db::Database;
use crate::error::{DbError, DbResult};

#[derive(Clone)]
pub struct PaymentService {
    db: Arc<Database>,
}

impl PaymentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn list_for_client(&self, producer_id: &str) -> DbResult<Vec<Payment>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, year, amount, status, calculation, created_at \
             FROM payments WHERE farmer_id = ?1 ORDER BY year DESC, id",
        )?;
        let mut rows = stmt.query(params![producer_id])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let calculation_raw: String = row.get(4)?;
            let created_at: DateTime<Utc> = row.get(5)?;
            out.push(Payment {
                id: row.get(0)?,
                year: row.get(1)?,
                amount: row.get(2)?,
                status: row.get(3)?,
                calculation: serde_json::from_str(&calculation_raw)?,
                created_at,
            });
        }
        Ok(out)
    }

    /// Record a payment for an existing client.
    pub fn record(
        &self,
        producer_id: &str,
        year: i32,
        amount: f64,
        status: &str,
        calculation: &serde_json::Value,
    ) -> DbResult<i64> {
        let conn = self.db.conn();
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM farmers WHERE producer_id = ?1)",
            params![producer_id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(DbError::not_found(format!(
                "farmer {producer_id} not found"
            )));
        }
        conn.execute(
            "INSERT INTO payments (farmer_id, year, amount, status, calculation, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                producer_id,
                year,
                amount,
                status,
                serde_json::to_string(calculation)?,
                Utc::now(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}
