//! Roster export adapters.

mod csv_exporter;

pub use csv_exporter::{CsvRosterExporter, CSV_HEADERS};
