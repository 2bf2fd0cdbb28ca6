use crate::adapters::traits::SourceAdapter;
use crate::adapters::types::RawRecord;
use crate::error::Result;
use crate::models::{Listing, Origin};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "portal_a.json";

/// Portal A publishes flat records keyed by `listing_id`
pub struct PortalAAdapter {
    path: PathBuf,
}

impl PortalAAdapter {
    pub fn new(raw_dir: &Path) -> Self {
        Self {
            path: raw_dir.join(FILE_NAME),
        }
    }
}

impl SourceAdapter for PortalAAdapter {
    fn source_name(&self) -> &'static str {
        "portal_a"
    }

    fn raw_path(&self) -> &Path {
        &self.path
    }

    fn to_listing(&self, record: &RawRecord<'_>) -> Result<Listing> {
        let listing = Listing::new(
            format!("PORTALA-{}", record.required_code("listing_id")?),
            record.required_str("title")?,
            record.required_str("type")?,
            record.required_str("region")?,
            record.required_str("commune")?,
            record.required_i64("price_clp")?,
            record.required_f64("surface_m2")?,
            Origin::Portal,
            record.required_str("portal")?,
            record.required_str("url")?,
        )
        .with_valuations(
            record.optional_i64("fiscal_value")?,
            record.optional_i64("commercial_value")?,
        );

        Ok(listing)
    }
}
