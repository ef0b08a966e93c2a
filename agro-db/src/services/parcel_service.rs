//! Parcel service: read projection and replace-on-write
//!
//! The parcel-save operation for a farmer is a full replacement: delete
//! every existing parcel (history rows cascade with them), then insert
//! the submitted set, all inside one transaction. There is no diff or
//! merge, and a failure anywhere leaves the previous parcel set intact.

use std::sync::Arc;

use agro_core::{ExtendedData, HistoryEntry, Parcel};
use rusqlite::{params, Connection};

use crate::db::Database;
use crate::error::{DbError, DbResult};

#[derive(Clone)]
pub struct ParcelService {
    db: Arc<Database>,
}

impl ParcelService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All parcels for a farmer with history re-expanded from storage.
    ///
    /// An unknown farmer yields an empty list, not an error: after a
    /// cascade delete the child query is legitimately empty.
    pub fn list_for_client(&self, producer_id: &str) -> DbResult<Vec<Parcel>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, registration_number, area, eligible_area, crop, \
                    voivodeship, district, commune, precinct_name, precinct_number, map_sheet \
             FROM fields WHERE farmer_id = ?1 ORDER BY rowid",
        )?;
        let mut rows = stmt.query(params![producer_id])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let history = history_for(&conn, &id)?;
            out.push(Parcel {
                id,
                name: row.get(1)?,
                registration_number: row.get(2)?,
                area: row.get(3)?,
                eligible_area: row.get(4)?,
                crop: row.get(5)?,
                voivodeship: row.get(6)?,
                district: row.get(7)?,
                commune: row.get(8)?,
                precinct_name: row.get(9)?,
                precinct_number: row.get(10)?,
                map_sheet: row.get(11)?,
                history,
            });
        }
        Ok(out)
    }

    /// Replace the farmer's entire parcel set with the submitted one.
    ///
    /// Fails with `NotFound` (and performs no writes) when the farmer
    /// does not exist. A constraint violation mid-batch (e.g. a
    /// duplicate parcel id within the submission) drops the
    /// transaction without commit, so the previously stored parcels
    /// survive untouched.
    ///
    /// The farmer's `total_area` aggregate is intentionally NOT
    /// recomputed from the submitted parcels; it is advisor-maintained.
    pub fn replace_for_client(&self, producer_id: &str, parcels: &[Parcel]) -> DbResult<()> {
        let mut conn = self.db.conn();
        let tx = conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM farmers WHERE producer_id = ?1)",
            params![producer_id],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(DbError::not_found(format!(
                "farmer {producer_id} not found"
            )));
        }

        // History rows cascade with their parcels; a plain SQL delete
        // needs no reconciliation with anything held in memory.
        tx.execute(
            "DELETE FROM fields WHERE farmer_id = ?1",
            params![producer_id],
        )?;

        for parcel in parcels {
            tx.execute(
                "INSERT INTO fields (id, farmer_id, name, registration_number, area, \
                                     eligible_area, crop, voivodeship, district, commune, \
                                     precinct_name, precinct_number, map_sheet) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    parcel.id,
                    producer_id,
                    parcel.name,
                    parcel.registration_number,
                    parcel.area,
                    parcel.eligible_area,
                    parcel.crop,
                    parcel.voivodeship,
                    parcel.district,
                    parcel.commune,
                    parcel.precinct_name,
                    parcel.precinct_number,
                    parcel.map_sheet,
                ],
            )?;

            for entry in &parcel.history {
                let schemes = serde_json::to_string(&entry.applied_eco_schemes)?;
                let bag = entry.extended.pack()?;
                tx.execute(
                    "INSERT INTO field_history (field_id, year, crop, applied_eco_schemes, \
                                                liming_date, soil_ph, extended_data) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        parcel.id,
                        entry.year,
                        entry.crop,
                        schemes,
                        entry.liming_date,
                        entry.soil_ph,
                        bag,
                    ],
                )?;
            }
        }

        tx.commit()?;
        tracing::debug!(producer_id, count = parcels.len(), "parcel set replaced");
        Ok(())
    }
}

fn history_for(conn: &Connection, field_id: &str) -> DbResult<Vec<HistoryEntry>> {
    let mut stmt = conn.prepare(
        "SELECT year, crop, applied_eco_schemes, liming_date, soil_ph, extended_data \
         FROM field_history WHERE field_id = ?1 ORDER BY id",
    )?;
    let mut rows = stmt.query(params![field_id])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let schemes_raw: String = row.get(2)?;
        let bag_raw: String = row.get(5)?;
        out.push(HistoryEntry {
            year: row.get(0)?,
            crop: row.get(1)?,
            applied_eco_schemes: serde_json::from_str(&schemes_raw)?,
            liming_date: row.get(3)?,
            soil_ph: row.get(4)?,
            extended: ExtendedData::unpack(&bag_raw)?,
        });
    }
    Ok(out)
}
