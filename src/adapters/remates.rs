use crate::adapters::traits::SourceAdapter;
use crate::adapters::types::RawRecord;
use crate::error::Result;
use crate::models::{Listing, Origin};
use serde_json::Map;
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "remates.json";

/// Public auction notices. Auction ids are used verbatim, they are unique upstream.
pub struct RematesAdapter {
    path: PathBuf,
}

impl RematesAdapter {
    pub fn new(raw_dir: &Path) -> Self {
        Self {
            path: raw_dir.join(FILE_NAME),
        }
    }
}

impl SourceAdapter for RematesAdapter {
    fn source_name(&self) -> &'static str {
        "remates"
    }

    fn raw_path(&self) -> &Path {
        &self.path
    }

    fn to_listing(&self, record: &RawRecord<'_>) -> Result<Listing> {
        let mut extra = Map::new();
        extra.insert("auction_date".to_string(), record.optional_raw("auction_date"));
        extra.insert("entity".to_string(), record.optional_raw("entity"));

        let listing = Listing::new(
            record.required_code("id")?,
            record.required_str("asset_name")?,
            record.required_str("terrain_type")?,
            record.required_str("region")?,
            record.required_str("commune")?,
            record.required_i64("minimum_bid")?,
            record.required_f64("surface")?,
            Origin::Remate,
            record.required_str("entity")?,
            record.required_str("docs")?,
        )
        .with_valuations(
            record.optional_i64("avaluo_fiscal")?,
            record.optional_i64("avaluo_comercial")?,
        )
        .with_extra(extra);

        Ok(listing)
    }
}
