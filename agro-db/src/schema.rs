//! SQLite schema definitions
//!
//! Children of `farmers` and of `fields` cascade on delete; everything
//! else is a flat dictionary table keyed by a caller-supplied id.

/// Complete schema for the advisor record store
pub const SCHEMA: &str = r#"
-- ============================================
-- Advisor accounts
-- ============================================
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    full_name TEXT,
    role TEXT NOT NULL DEFAULT 'ADVISOR',
    is_active INTEGER NOT NULL DEFAULT 1
);

-- ============================================
-- Farmer clients (producer id is the EP number)
-- ============================================
CREATE TABLE IF NOT EXISTS farmers (
    producer_id TEXT PRIMARY KEY,
    advisor_id INTEGER REFERENCES users(id),
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    farm_name TEXT,
    total_area REAL NOT NULL DEFAULT 0.0,
    status TEXT NOT NULL DEFAULT 'ACTIVE',
    last_contact TEXT
);
CREATE INDEX IF NOT EXISTS idx_farmers_advisor ON farmers(advisor_id);

-- ============================================
-- Uploaded documents
-- ============================================
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    farmer_id TEXT NOT NULL REFERENCES farmers(producer_id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    doc_type TEXT NOT NULL,
    category TEXT NOT NULL,
    campaign_year TEXT,
    size TEXT,
    upload_date TEXT,
    content TEXT
);
CREATE INDEX IF NOT EXISTS idx_documents_farmer ON documents(farmer_id);

-- ============================================
-- Land parcels (ids chosen by the caller)
-- ============================================
CREATE TABLE IF NOT EXISTS fields (
    id TEXT PRIMARY KEY,
    farmer_id TEXT NOT NULL REFERENCES farmers(producer_id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    registration_number TEXT,
    area REAL NOT NULL,
    eligible_area REAL NOT NULL,
    crop TEXT NOT NULL,
    voivodeship TEXT,
    district TEXT,
    commune TEXT,
    precinct_name TEXT,
    precinct_number TEXT,
    map_sheet TEXT
);
CREATE INDEX IF NOT EXISTS idx_fields_farmer ON fields(farmer_id);

-- ============================================
-- Parcel-year history with the extension bag
-- ============================================
CREATE TABLE IF NOT EXISTS field_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    field_id TEXT NOT NULL REFERENCES fields(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    crop TEXT NOT NULL,
    applied_eco_schemes TEXT NOT NULL DEFAULT '[]',
    liming_date TEXT,
    soil_ph REAL,
    extended_data TEXT NOT NULL DEFAULT '{}'
);
CREATE INDEX IF NOT EXISTS idx_history_field ON field_history(field_id, year);

-- ============================================
-- Subsidy rate tables
-- ============================================
CREATE TABLE IF NOT EXISTS subsidy_rates (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    rate REAL NOT NULL,
    unit TEXT NOT NULL,
    category TEXT NOT NULL,
    year INTEGER NOT NULL,
    short_name TEXT,
    points REAL,
    compatible_with TEXT,
    description TEXT
);
CREATE INDEX IF NOT EXISTS idx_rates_year ON subsidy_rates(year);

-- ============================================
-- Crop dictionary
-- ============================================
CREATE TABLE IF NOT EXISTS crop_definitions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    crop_type TEXT NOT NULL,
    is_legume INTEGER NOT NULL DEFAULT 0,
    is_catch_crop INTEGER NOT NULL DEFAULT 0
);

-- ============================================
-- CSV import mapping templates
-- ============================================
CREATE TABLE IF NOT EXISTS csv_templates (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    template_type TEXT NOT NULL,
    year INTEGER NOT NULL,
    separator TEXT NOT NULL DEFAULT ';',
    mappings TEXT NOT NULL DEFAULT '{}'
);

-- ============================================
-- Recorded payments
-- ============================================
CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    farmer_id TEXT NOT NULL REFERENCES farmers(producer_id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    amount REAL NOT NULL,
    status TEXT NOT NULL DEFAULT 'PLANNED',
    calculation TEXT NOT NULL DEFAULT '{}',
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_payments_farmer ON payments(farmer_id);
"#;

/// Drop statements for the destructive admin reset, children first so
/// foreign keys never dangle mid-batch.
pub const DROP_ALL: &str = r#"
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS field_history;
DROP TABLE IF EXISTS fields;
DROP TABLE IF EXISTS documents;
DROP TABLE IF EXISTS csv_templates;
DROP TABLE IF EXISTS crop_definitions;
DROP TABLE IF EXISTS subsidy_rates;
DROP TABLE IF EXISTS farmers;
DROP TABLE IF EXISTS users;
"#;
