//! Demo-data bootstrap
//!
//! One-shot seeding gated on an empty `users` table: a fresh database
//! gets two advisor accounts, two farmer clients with parcels and
//! history, a document, a payment, the current rate tables and the crop
//! dictionary. A database that already has users is left untouched -
//! this is a bootstrap, not a migration system.

use agro_core::credentials::hash_password;
use agro_core::ExtendedData;
use chrono::Utc;
use rusqlite::{params, Transaction};

use crate::db::Database;
use crate::error::{DbError, DbResult};

/// Seed demo data if the user table is empty. Returns whether anything
/// was written.
pub fn seed_demo_data(db: &Database) -> DbResult<bool> {
    let mut conn = db.conn();
    let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if users > 0 {
        return Ok(false);
    }

    let admin_hash = hash_password("admin123").map_err(|e| DbError::Credential(e.to_string()))?;
    let advisor_hash =
        hash_password("doradca123").map_err(|e| DbError::Credential(e.to_string()))?;

    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO users (email, password_hash, full_name, role) \
         VALUES (?1, ?2, ?3, 'ADMIN')",
        params!["admin@agrooptima.pl", admin_hash, "Anna Zielińska"],
    )?;
    tx.execute(
        "INSERT INTO users (email, password_hash, full_name, role) \
         VALUES (?1, ?2, ?3, 'ADVISOR')",
        params!["doradca@agrooptima.pl", advisor_hash, "Piotr Nowak"],
    )?;
    let advisor_id = tx.last_insert_rowid();

    seed_farmers(&tx, advisor_id)?;
    seed_rates(&tx)?;
    seed_crops(&tx)?;
    seed_templates(&tx)?;

    tx.commit()?;
    tracing::info!("demo data seeded");
    Ok(true)
}

fn seed_farmers(tx: &Transaction<'_>, advisor_id: i64) -> DbResult<()> {
    tx.execute(
        "INSERT INTO farmers (producer_id, advisor_id, first_name, last_name, farm_name, \
                              total_area, status, last_contact) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            "582901443",
            advisor_id,
            "Jan",
            "Kowalski",
            "Gospodarstwo Kowalski",
            11.0,
            "ACTIVE",
            "2026-07-12",
        ],
    )?;
    tx.execute(
        "INSERT INTO farmers (producer_id, advisor_id, first_name, last_name, farm_name, \
                              total_area, status, last_contact) \
         VALUES (?1, ?2, ?3, ?4, NULL, ?5, ?6, ?7)",
        params![
            "771204558",
            advisor_id,
            "Maria",
            "Wiśniewska",
            24.3,
            "PENDING",
            "2026-06-30",
        ],
    )?;

    // Parcels and history for the first demo farm.
    let fields: [(&str, &str, Option<&str>, f64, f64, &str); 2] = [
        ("dz-145-2", "Działka za lasem", Some("145/2"), 5.4, 5.4, "Pszenica"),
        ("dz-88-1", "Przy drodze", Some("88/1"), 2.1, 2.05, "Rzepak"),
    ];
    for (id, name, reg, area, eligible, crop) in fields {
        tx.execute(
            "INSERT INTO fields (id, farmer_id, name, registration_number, area, \
                                 eligible_area, crop) \
             VALUES (?1, '582901443', ?2, ?3, ?4, ?5, ?6)",
            params![id, name, reg, area, eligible, crop],
        )?;
    }

    let history: [(&str, i32, &str, &str, Option<&str>, Option<f64>, ExtendedData); 5] = [
        (
            "dz-145-2",
            2025,
            "Rzepak",
            r#"["E_IPR"]"#,
            None,
            Some(5.5),
            ExtendedData {
                eligible_area: Some(5.35),
                ..Default::default()
            },
        ),
        (
            "dz-145-2",
            2024,
            "Pszenica",
            "[]",
            Some("2024-09-10"),
            None,
            ExtendedData::default(),
        ),
        (
            "dz-145-2",
            2023,
            "Kukurydza",
            r#"["E_OPN"]"#,
            None,
            None,
            ExtendedData::default(),
        ),
        (
            "dz-88-1",
            2025,
            "Jęczmień",
            "[]",
            None,
            Some(6.2),
            ExtendedData {
                notes: Some("Stanowisko po mieszance poplonowej".to_string()),
                ..Default::default()
            },
        ),
        (
            "dz-88-1",
            2024,
            "Mieszanka",
            r#"["E_USU"]"#,
            None,
            None,
            ExtendedData {
                plant_mix: Some("gorczyca + rzodkiew oleista".to_string()),
                seed_quantity: Some(25.0),
                ..Default::default()
            },
        ),
    ];
    for (field_id, year, crop, schemes, liming, ph, bag) in history {
        tx.execute(
            "INSERT INTO field_history (field_id, year, crop, applied_eco_schemes, \
                                        liming_date, soil_ph, extended_data) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![field_id, year, crop, schemes, liming, ph, bag.pack()?],
        )?;
    }

    tx.execute(
        "INSERT INTO documents (id, farmer_id, name, doc_type, category, campaign_year, \
                                size, upload_date) \
         VALUES ('doc-w2026', '582901443', 'Wniosek o dopłaty 2026.pdf', 'PDF', \
                 'WNIOSEK', '2026', '1.2 MB', '2026-03-02')",
        [],
    )?;

    let calculation = serde_json::json!({
        "basePayment": 488.55,
        "areaHa": 11.0,
        "ecoSchemes": ["E_IPR"],
    });
    tx.execute(
        "INSERT INTO payments (farmer_id, year, amount, status, calculation, created_at) \
         VALUES ('582901443', 2025, 14350.75, 'APPROVED', ?1, ?2)",
        params![serde_json::to_string(&calculation)?, Utc::now()],
    )?;

    Ok(())
}

#[allow(clippy::type_complexity)]
fn seed_rates(tx: &Transaction<'_>) -> DbResult<()> {
    // 2026 forecast table plus the official 2025 rates the advisors use
    // day to day. Short names are the scheme codes referenced from
    // parcel history.
    let rates: &[(&str, &str, f64, &str, &str, i32, Option<&str>, Option<&str>)] = &[
        ("S01", "Rośliny bobowate", 700.0, "PLN/ha", "EKOSCHEMAT", 2026, None, None),
        ("S02", "Międzyplony ozime", 700.0, "PLN/ha", "EKOSCHEMAT", 2026, Some("E_MPW"), None),
        ("S03", "Integrowana Produkcja", 650.0, "PLN/ha", "EKOSCHEMAT", 2026, Some("E_IPR"), None),
        ("S04", "Wymieszanie obornika", 200.0, "PLN/ha", "EKOSCHEMAT", 2026, None, None),
        ("S05", "Dobrostan (Bydło)", 380.0, "PLN/DJP", "DOBROSTAN", 2026, None, None),
        ("S06", "Wartość punktu", 100.0, "PLN/pkt", "EKOSCHEMAT", 2026, None, None),
        ("P25_01", "Podstawowe wsparcie dochodów", 488.55, "PLN/ha", "DOPLATA", 2025, None, None),
        ("P25_02", "Płatność redystrybucyjna", 176.84, "PLN/ha", "DOPLATA", 2025, None, None),
        ("P25_03", "Płatność dla młodych rolników", 248.16, "PLN/ha", "DOPLATA", 2025, None, None),
        ("E25_03", "Plan nawożenia - wariant podstawowy", 87.52, "PLN/ha", "EKOSCHEMAT", 2025, Some("E_OPN"), Some("E_IPR,E_WOD")),
        ("E25_05", "Zróżnicowana struktura upraw", 233.13, "PLN/ha", "EKOSCHEMAT", 2025, Some("E_USU"), None),
        ("E25_13", "Integrowana Produkcja Roślin (Rolnicze)", 505.18, "PLN/ha", "EKOSCHEMAT", 2025, Some("E_IPR"), Some("E_OPN")),
        ("E25_17", "Retencjonowanie wody na TUZ", 245.98, "PLN/ha", "EKOSCHEMAT", 2025, Some("E_WOD"), None),
    ];
    for (id, name, rate, unit, category, year, short_name, compatible) in rates {
        tx.execute(
            "INSERT INTO subsidy_rates (id, name, rate, unit, category, year, \
                                        short_name, compatible_with) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![id, name, rate, unit, category, year, short_name, compatible],
        )?;
    }
    Ok(())
}

fn seed_crops(tx: &Transaction<'_>) -> DbResult<()> {
    let crops: &[(&str, &str, &str, bool, bool)] = &[
        ("c-pszenica", "Pszenica", "ZBOZE", false, false),
        ("c-rzepak", "Rzepak", "OLEISTE", false, false),
        ("c-kukurydza", "Kukurydza", "ZBOZE", false, false),
        ("c-burak", "Burak Cukrowy", "OKOPOWE", false, false),
        ("c-jeczmien", "Jęczmień", "ZBOZE", false, false),
        ("c-zyto", "Żyto", "ZBOZE", false, false),
        ("c-ziemniaki", "Ziemniaki", "OKOPOWE", false, false),
        ("c-trawy", "Trawy", "TRAWY", false, false),
        ("c-bobowate", "Rośliny Bobowate", "BOBOWATE", true, false),
        ("c-mieszanka", "Mieszanka", "MIESZANKA", false, true),
    ];
    for (id, name, crop_type, legume, catch_crop) in crops {
        tx.execute(
            "INSERT INTO crop_definitions (id, name, crop_type, is_legume, is_catch_crop) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, crop_type, legume, catch_crop],
        )?;
    }
    Ok(())
}

fn seed_templates(tx: &Transaction<'_>) -> DbResult<()> {
    let templates: &[(&str, &str, &str, serde_json::Value)] = &[
        (
            "tpl_default_parcels",
            "Domyślny - Ewidencja ARiMR",
            "PARCELS",
            serde_json::json!({
                "name": "Identyfikator działki ewidencyjnej",
                "registrationNumber": "Nr działki ewidencyjnej",
                "area": "Pow. gruntów ornych ogółem na działce [ha]",
                "eligibleArea": "Hektar kwalifikujący się ogółem na działce [ha]",
            }),
        ),
        (
            "tpl_simple",
            "Prosty Import (Excel)",
            "PARCELS",
            serde_json::json!({
                "name": "Nazwa",
                "registrationNumber": "Numer",
                "area": "Powierzchnia",
                "eligibleArea": "PEG",
            }),
        ),
        (
            "tpl_default_crops",
            "Domyślny - Struktura Zasiewów ARiMR",
            "CROPS",
            serde_json::json!({
                "registrationNumber": "Nr działki ewidencyjnej",
                "crop": "Roślina uprawna",
                "ecoSchemes": "Lista ekoschematów",
            }),
        ),
    ];
    for (id, name, template_type, mappings) in templates {
        tx.execute(
            "INSERT INTO csv_templates (id, name, template_type, year, separator, mappings) \
             VALUES (?1, ?2, ?3, 2026, ';', ?4)",
            params![id, name, template_type, serde_json::to_string(mappings)?],
        )?;
    }
    Ok(())
}
