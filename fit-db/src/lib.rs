//! In-memory SQLite tables for the Freedom In Tibet datasets.
//!
//! CSV text (embedded at compile time by the dashboard, or read from disk by
//! the CLI) is loaded once into two tables and only read afterwards. Every
//! chart is a filtered, sorted or grouped view produced by a query; the
//! loaded rows are never updated.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper, cheap to clone across Dioxus components
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - Typed query methods returning serializable structs for JSON export to D3.js
//!
//! # Usage
//!
//! ```rust
//! use fit_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_freedom("Country/Territory,Year,Total,Status\nTibet,2022,1,NF\n").unwrap();
//! db.load_self_immolation(
//!     "Incident,Year,age_groups,Gender,Monk_Status,current_status\nNgaba,2013,18-25,Male,Monk,Deceased\n",
//! ).unwrap();
//!
//! let lowest = db.query_lowest_scores(2022, 10).unwrap();
//! assert_eq!(lowest[0].country, "Tibet");
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`].
//! - `freedom` - one row per country per year
//! - `self_immolation` - one row per incident, Year >= 2013 only

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding both datasets.
///
/// Cloning shares the same connection.
///
/// # Example
///
/// ```rust
/// use fit_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_freedom("Country/Territory,Year,Total,Status\nNepal,2021,56,PF\n").unwrap();
/// assert_eq!(db.query_freedom_years().unwrap(), vec![2021]);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new, empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load both datasets.
    pub fn from_csv(freedom_csv: &str, self_immolation_csv: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_freedom(freedom_csv)?;
        db.load_self_immolation(self_immolation_csv)?;
        Ok(db)
    }
}
