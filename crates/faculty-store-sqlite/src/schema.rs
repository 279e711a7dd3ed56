//! SQL schema for the Faculty SQLite store.
//!
//! Executed once when the store is constructed. There is no migration
//! machinery; `PRAGMA user_version` records the layout this DDL produces.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Owned by account management; present so lecturer rows can reference it.
CREATE TABLE IF NOT EXISTS accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT UNIQUE
);

-- Configuration lookups.
CREATE TABLE IF NOT EXISTS academic_ranks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS academic_titles (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL
);

-- Rows are soft-deleted through is_deleted; no DELETE is ever issued.
CREATE TABLE IF NOT EXISTS lecturer_information (
    id                       INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id               INTEGER NOT NULL REFERENCES accounts(id),
    name                     TEXT    NOT NULL,
    gender                   TEXT    NOT NULL,   -- 'male' | 'female' | 'other'
    avatar                   TEXT,
    date_of_birth            TEXT    NOT NULL,   -- YYYY-MM-DD
    academic_rank_id         INTEGER REFERENCES academic_ranks(id),
    academic_rank_gain_year  INTEGER,
    academic_title_id        INTEGER REFERENCES academic_titles(id),
    academic_title_gain_year INTEGER,
    created_at               TEXT    NOT NULL,   -- YYYY/MM/DD HH:MM:SS UTC
    updated_at               TEXT    NOT NULL,
    is_deleted               INTEGER NOT NULL DEFAULT 0,
    expand_column            TEXT                -- JSON or NULL
);

CREATE INDEX IF NOT EXISTS lecturer_account_idx ON lecturer_information(account_id);
CREATE INDEX IF NOT EXISTS lecturer_deleted_idx ON lecturer_information(is_deleted);

PRAGMA user_version = 1;
";
