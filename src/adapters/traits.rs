use crate::adapters::types::{load_records, RawRecord, RecordContext};
use crate::error::Result;
use crate::models::Listing;
use std::path::Path;

/// Lazily mapped listings from one raw source
pub type ListingIter<'a> = Box<dyn Iterator<Item = Result<Listing>> + 'a>;

/// Common trait for all raw source adapters.
/// Adapters differ only in how they read a raw record; all produce `Listing`.
pub trait SourceAdapter {
    /// Short name of the raw source, used in logs and errors
    fn source_name(&self) -> &'static str;

    /// Location of the raw document this adapter reads
    fn raw_path(&self) -> &Path;

    /// Map one raw record into the unified schema
    fn to_listing(&self, record: &RawRecord<'_>) -> Result<Listing>;

    /// Read the raw document and yield its listings in file order.
    ///
    /// The document is read up front; records are mapped as the iterator advances.
    fn listings(&self) -> Result<ListingIter<'_>> {
        let adapter = self.source_name();
        let path = self.raw_path();
        let records = load_records(adapter, path)?;

        Ok(Box::new(records.into_iter().enumerate().map(
            move |(index, value)| {
                let ctx = RecordContext {
                    adapter,
                    path,
                    index,
                };
                let record = RawRecord::new(&value, ctx)?;
                self.to_listing(&record)
            },
        )))
    }
}
