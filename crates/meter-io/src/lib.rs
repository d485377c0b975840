//! Meter table loading and report writing.
//!
//! The external-collaborator surface around the detection core: reading the
//! `Name, ConsumptionTime, ConsumptionDiffNormalized` table from CSV with an
//! explicit checked column schema, and rendering detection reports as
//! tab-separated text. No algorithmic content lives here.

pub mod reader;
pub mod schema;
pub mod writer;

pub use reader::{read_meter_csv, read_meter_records};
pub use schema::{ColumnSchema, TIME_COLUMN, VALUE_COLUMN};
pub use writer::{render_report, save_report_tsv, write_report_tsv};
