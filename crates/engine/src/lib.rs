mod ctl;
mod error;
mod rank;
mod record;
mod scan;

pub use ctl::{CTL_FIELD_COUNT, DIRTY_FIELD, FieldCountMismatch, parse_bool, parse_dirty};
pub use error::ScanError;
pub use rank::{compare, rank};
pub use record::WindowRecord;
pub use scan::{ScanOptions, list_ranked, scan};
