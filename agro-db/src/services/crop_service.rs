//! Crop dictionary service

use std::sync::Arc;

use agro_core::CropDefinition;
use rusqlite::params;

use crate::db::Database;
use crate::error::DbResult;

#[derive(Clone)]
pub struct CropService {
    db: Arc<Database>,
}

impl CropService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> DbResult<Vec<CropDefinition>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, crop_type, is_legume, is_catch_crop \
             FROM crop_definitions ORDER BY name",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(CropDefinition {
                id: row.get(0)?,
                name: row.get(1)?,
                crop_type: row.get(2)?,
                is_legume: row.get(3)?,
                is_catch_crop: row.get(4)?,
            });
        }
        Ok(out)
    }

    pub fn upsert(&self, crop: &CropDefinition) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT INTO crop_definitions (id, name, crop_type, is_legume, is_catch_crop) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             ON CONFLICT(id) DO UPDATE SET \
                name = excluded.name, \
                crop_type = excluded.crop_type, \
                is_legume = excluded.is_legume, \
                is_catch_crop = excluded.is_catch_crop",
            params![
                crop.id,
                crop.name,
                crop.crop_type,
                crop.is_legume,
                crop.is_catch_crop,
            ],
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute("DELETE FROM crop_definitions WHERE id = ?1", params![id])?;
        Ok(())
    }
}
