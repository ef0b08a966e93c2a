//! CSV import-template service

use std::collections::BTreeMap;
use std::sync::Arc;

use agro_core::CsvTemplate;
use rusqlite::params;

use crate::db::Database;
use crate::error::DbResult;

#[derive(Clone)]
pub struct TemplateService {
    db: Arc<Database>,
}

impl TemplateService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> DbResult<Vec<CsvTemplate>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(
            "SELECT id, name, template_type, year, separator, mappings \
             FROM csv_templates ORDER BY name",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mappings_raw: String = row.get(5)?;
            let mappings: BTreeMap<String, String> = serde_json::from_str(&mappings_raw)?;
            out.push(CsvTemplate {
                id: row.get(0)?,
                name: row.get(1)?,
                template_type: row.get(2)?,
                year: row.get(3)?,
                separator: row.get(4)?,
                mappings,
            });
        }
        Ok(out)
    }

    pub fn upsert(&self, template: &CsvTemplate) -> DbResult<()> {
        let conn = self.db.conn();
        let mappings = serde_json::to_string(&template.mappings)?;
        conn.execute(
            "INSERT INTO csv_templates (id, name, template_type, year, separator, mappings) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             ON CONFLICT(id) DO UPDATE SET \
                name = excluded.name, \
                template_type = excluded.template_type, \
                year = excluded.year, \
                separator = excluded.separator, \
                mappings = excluded.mappings",
            params![
                template.id,
                template.name,
                template.template_type,
                template.year,
                template.separator,
                mappings,
            ],
        )?;
        Ok(())
    }

    pub fn delete(&self, id: &str) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute("DELETE FROM csv_templates WHERE id = ?1", params![id])?;
        Ok(())
    }
}
