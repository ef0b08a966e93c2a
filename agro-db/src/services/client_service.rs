//! Farmer client service

use std::sync::Arc;

use agro_core::FarmerClient;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::Database;
use crate::error::DbResult;
use crate::services::document_service::documents_for;

#[derive(Clone)]
pub struct ClientService {
    db: Arc<Database>,
}

impl ClientService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List all clients with their documents embedded.
    pub fn list(&self) -> DbResult<Vec<FarmerClient>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT producer_id, advisor_id, first_name, last_name, farm_name, \
                    total_area, status, last_contact \
             FROM farmers ORDER BY last_name, first_name, producer_id",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(client_from_row(&conn, row)?);
        }
        Ok(out)
    }

    pub fn get(&self, producer_id: &str) -> DbResult<Option<FarmerClient>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT producer_id, advisor_id, first_name, last_name, farm_name, \
                    total_area, status, last_contact \
             FROM farmers WHERE producer_id = ?1",
        )?;
        let mut rows = stmt.query(params![producer_id])?;
        match rows.next()? {
            Some(row) => Ok(Some(client_from_row(&conn, row)?)),
            None => Ok(None),
        }
    }

    /// Create-or-update by producer id. The embedded document list is
    /// not written here; documents are managed through their own
    /// sub-collection operations.
    pub fn upsert(&self, client: &FarmerClient) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO farmers (producer_id, advisor_id, first_name, last_name, \
                                  farm_name, total_area, status, last_contact) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             ON CONFLICT(producer_id) DO UPDATE SET \
                advisor_id = excluded.advisor_id, \
                first_name = excluded.first_name, \
                last_name = excluded.last_name, \
                farm_name = excluded.farm_name, \
                total_area = excluded.total_area, \
                status = excluded.status, \
                last_contact = excluded.last_contact",
            params![
                client.producer_id,
                client.advisor_id,
                client.first_name,
                client.last_name,
                client.farm_name,
                client.total_area,
                client.status,
                client.last_contact,
            ],
        )?;
        Ok(())
    }

    /// Delete by producer id; documents, parcels, history and payments
    /// go with it via cascade. Deleting an unknown id is a no-op.
    pub fn delete(&self, producer_id: &str) -> DbResult<()> {
        let conn = self.db.conn();
        let deleted = conn.execute(
            "DELETE FROM farmers WHERE producer_id = ?1",
            params![producer_id],
        )?;
        if deleted > 0 {
            tracing::info!(producer_id, "client deleted");
        }
        Ok(())
    }

    pub fn exists(&self, producer_id: &str) -> DbResult<bool> {
        let conn = self.db.conn();
        Ok(conn
            .query_row(
                "SELECT 1 FROM farmers WHERE producer_id = ?1",
                params![producer_id],
                |_| Ok(()),
            )
            .optional()?
            .is_some())
    }
}

fn client_from_row(conn: &Connection, row: &rusqlite::Row<'_>) -> DbResult<FarmerClient> {
    let producer_id: String = row.get(0)?;
    let documents = documents_for(conn, &producer_id)?;
    Ok(FarmerClient {
        producer_id,
        advisor_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        farm_name: row.get(4)?,
        total_area: row.get(5)?,
        status: row.get(6)?,
        last_contact: row.get(7)?,
        documents,
    })
}
