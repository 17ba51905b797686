use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// One extracted listing item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Book title, if the item carried one
    pub title: Option<String>,

    /// Review-rating text
    pub review: Option<String>,

    /// Price text as displayed on the listing
    pub price: Option<String>,

    /// Wall-clock capture time, shared by every record of one page
    pub captured_at: String,
}

/// Ordered accumulation of Records for one crawl run
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResultTable {
    records: Vec<Record>,
}

impl ResultTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single record
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Move all records from `records` onto the end of the table
    pub fn append(&mut self, records: &mut Vec<Record>) {
        self.records.append(records);
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All accumulated records, in page-visit then in-page order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Serialize the table as one JSON array
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        write_json(&self.records, path)
    }
}

/// One row collected from the volumes search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub title: Option<String>,

    /// Author names joined with ", "
    pub authors: Option<String>,

    pub average_rating: Option<f64>,

    pub ratings_count: Option<u64>,

    pub published_date: Option<String>,

    pub description: Option<String>,

    /// List-price amount, in `currency`
    pub price: Option<f64>,

    pub currency: Option<String>,
}

/// Serialize any row collection as one JSON array
pub fn write_json<T: Serialize, P: AsRef<Path>>(rows: &[T], path: P) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows)?;
    Ok(())
}
