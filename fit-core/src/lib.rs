//! Core types for the Freedom In Tibet dashboard.
//!
//! - `freedom`: per-country, per-year freedom scores
//! - `immolation`: self-immolation incident records
//! - `border`: the fixed list of border-issue countries
//! - `tab`: dashboard tab identifiers
//! - `years`: dropdown year options

pub mod border;
pub mod freedom;
pub mod immolation;
pub mod tab;
pub mod years;

pub use border::BORDER_ISSUE_COUNTRIES;
pub use freedom::FreedomRecord;
pub use immolation::{ImmolationRecord, FIRST_INCIDENT_YEAR};
pub use tab::Tab;
pub use years::YearOptions;
