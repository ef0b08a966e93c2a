//! Document sub-collection service

use std::sync::Arc;

use agro_core::Document;
use rusqlite::{params, Connection};

use crate::db::Database;
use crate::error::{DbError, DbResult};

#[derive(Clone)]
pub struct DocumentService {
    db: Arc<Database>,
}

impl DocumentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Attach a document to a client. The client must exist; the write
    /// is an upsert so re-submitting the same document id overwrites
    /// its metadata.
    pub fn add(&self, producer_id: &str, doc: &Document) -> DbResult<()> {
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
            "INSERT INTO documents (id, farmer_id, name, doc_type, category, \
                                    campaign_year, size, upload_date, content) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             ON CONFLICT(id) DO UPDATE SET \
                name = excluded.name, \
                doc_type = excluded.doc_type, \
                category = excluded.category, \
                campaign_year = excluded.campaign_year, \
                size = excluded.size, \
                upload_date = excluded.upload_date, \
                content = excluded.content",
            params![
                doc.id,
                producer_id,
                doc.name,
                doc.doc_type,
                doc.category,
                doc.campaign_year,
                doc.size,
                doc.upload_date,
                doc.content,
            ],
        )?;
        Ok(())
    }

    /// Remove a document from a client. Unknown ids are a no-op.
    pub fn remove(&self, producer_id: &str, doc_id: &str) -> DbResult<()> {
        let conn = self.db.conn();
        conn.execute(
            "DELETE FROM documents WHERE id = ?1 AND farmer_id = ?2",
            params![doc_id, producer_id],
        )?;
        Ok(())
    }
}

/// Documents for one client, in upload order.
pub(crate) fn documents_for(conn: &Connection, producer_id: &str) -> DbResult<Vec<Document>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, doc_type, category, campaign_year, size, upload_date, content \
         FROM documents WHERE farmer_id = ?1 ORDER BY rowid",
    )?;
    let mut rows = stmt.query(params![producer_id])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(Document {
            id: row.get(0)?,
            name: row.get(1)?,
            doc_type: row.get(2)?,
            category: row.get(3)?,
            campaign_year: row.get(4)?,
            size: row.get(5)?,
            upload_date: row.get(6)?,
            content: row.get(7)?,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ClientService;

    fn sample_doc(id: &str) -> Document {
        Document {
            id: id.to_string(),
            name: "Wniosek 2026.pdf".to_string(),
            doc_type: "PDF".to_string(),
            category: "WNIOSEK".to_string(),
            campaign_year: Some("2026".to_string()),
            size: Some("1.2 MB".to_string()),
            upload_date: Some("2026-03-02".to_string()),
            content: None,
        }
    }

    fn setup() -> (ClientService, DocumentService) {
        let db = Arc::new(Database::open_in_memory().unwrap());
        let clients = ClientService::new(db.clone());
        let documents = DocumentService::new(db);
        clients
            .upsert(&agro_core::FarmerClient {
                producer_id: "065432109".to_string(),
                advisor_id: None,
                first_name: "Jan".to_string(),
                last_name: "Kowalski".to_string(),
                farm_name: None,
                total_area: 11.0,
                status: "ACTIVE".to_string(),
                last_contact: None,
                documents: Vec::new(),
            })
            .unwrap();
        (clients, documents)
    }

    #[test]
    fn test_add_and_list_through_client() {
        let (clients, documents) = setup();
        documents.add("065432109", &sample_doc("d1")).unwrap();

        let client = clients.get("065432109").unwrap().unwrap();
        assert_eq!(client.documents.len(), 1);
        assert_eq!(client.documents[0].id, "d1");
        assert_eq!(client.documents[0].category, "WNIOSEK");
    }

    #[test]
    fn test_add_for_unknown_farmer_is_not_found() {
        let (_clients, documents) = setup();
        let err = documents.add("999999999", &sample_doc("d1")).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn test_remove_is_scoped_to_client_and_noop_on_miss() {
        let (clients, documents) = setup();
        documents.add("065432109", &sample_doc("d1")).unwrap();

        // Wrong client / unknown id: no-op, no error.
        documents.remove("111111111", "d1").unwrap();
        documents.remove("065432109", "missing").unwrap();
        assert_eq!(clients.get("065432109").unwrap().unwrap().documents.len(), 1);

        documents.remove("065432109", "d1").unwrap();
        assert!(clients.get("065432109").unwrap().unwrap().documents.is_empty());
    }
}
