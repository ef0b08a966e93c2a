//! Subsidy rate service

use std::sync::Arc;

use agro_core::SubsidyRate;
use rusqlite::params;

use crate::db::Database;
use crate::error::DbResult;

#[derive(Clone)]
pub struct RateService {
    db: Arc<Database>,
}

impl RateService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> DbResult<Vec<SubsidyRate>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, rate, unit, category, year, short_name, points, \
                    compatible_with, description \
             FROM subsidy_rates ORDER BY year DESC, id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let compatible_raw: Option<String> = row.get(8)?;
            out.push(SubsidyRate {
                id: row.get(0)?,
                name: row.get(1)?,
                rate: row.get(2)?,
                unit: row.get(3)?,
                category: row.get(4)?,
                year: row.get(5)?,
                short_name: row.get(6)?,
                points: row.get(7)?,
                compatible_with: split_codes(compatible_raw.as_deref()),
                description: row.get(9)?,
            });
        }
        Ok(out)
    }

    pub fn upsert(&self, rate: &SubsidyRate) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO subsidy_rates (id, name, rate, unit, category, year, \
                                        short_name, points, compatible_with, description) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10) \
             ON CONFLICT(id) DO UPDATE SET \
                name = excluded.name, \
                rate = excluded.rate, \
                unit = excluded.unit, \
                category = excluded.category, \
                year = excluded.year, \
                short_name = excluded.short_name, \
                points = excluded.points, \
                compatible_with = excluded.compatible_with, \
                description = excluded.description",
            params![
                rate.id,
                rate.name,
                rate.rate,
                rate.unit,
                rate.category,
                rate.year,
                rate.short_name,
                rate.points,
                join_codes(&rate.compatible_with),
                rate.description,
            ],
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute("DELETE FROM subsidy_rates WHERE id = ?1", params![id])?;
        Ok(())
    }
}

/// Scheme-code lists are stored comma-joined in a single column.
fn join_codes(codes: &[String]) -> Option<String> {
    if codes.is_empty() {
        None
    } else {
        Some(codes.join(","))
    }
}

fn split_codes(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
