//! Result records.

use serde::{Deserialize, Serialize};

use std::io::{self, Write};

/// The closest distance found in one input file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceRecord {
    /// The input file name.
    pub file: String,
    /// The smallest pairwise distance in that file.
    pub closest_distance: f64,
}

impl DistanceRecord {
    /// Create a record.
    pub fn new(file: impl Into<String>, closest_distance: f64) -> Self {
        Self {
            file: file.into(),
            closest_distance,
        }
    }
}

/// Write records as a pretty-printed JSON array.
pub fn write_records<W: Write>(mut writer: W, records: &[DistanceRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()
}
