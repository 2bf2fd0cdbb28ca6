use crate::adapters::traits::SourceAdapter;
use crate::adapters::types::RawRecord;
use crate::error::Result;
use crate::models::{Listing, Origin};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "portal_b.json";

/// Portal B nests location under `location` and valuations under `avaluos`
pub struct PortalBAdapter {
    path: PathBuf,
}

impl PortalBAdapter {
    pub fn new(raw_dir: &Path) -> Self {
        Self {
            path: raw_dir.join(FILE_NAME),
        }
    }
}

impl SourceAdapter for PortalBAdapter {
    fn source_name(&self) -> &'static str {
        "portal_b"
    }

    fn raw_path(&self) -> &Path {
        &self.path
    }

    fn to_listing(&self, record: &RawRecord<'_>) -> Result<Listing> {
        let location = record.required_object("location")?;
        let avaluos = record.required_object("avaluos")?;

        let listing = Listing::new(
            format!("PORTALB-{}", record.required_code("code")?),
            record.required_str("name")?,
            record.required_str("category")?,
            location.required_str("region")?,
            location.required_str("commune")?,
            record.required_i64("amount")?,
            record.required_f64("size")?,
            Origin::Portal,
            record.required_str("source")?,
            record.required_str("link")?,
        )
        .with_valuations(
            avaluos.optional_i64("fiscal")?,
            avaluos.optional_i64("commercial")?,
        );

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn write_raw(records: Value) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FILE_NAME), records.to_string()).unwrap();
        dir
    }

    fn lote_costero() -> Value {
        json!({
            "code": "B-12",
            "name": "Lote costero",
            "category": "urbano",
            "location": { "region": "Valparaíso", "commune": "Zapallar" },
            "avaluos": { "fiscal": 18000000, "commercial": 52000000 },
            "amount": 60000000,
            "size": 800,
            "source": "PropiedadesB",
            "link": "https://b.example/12"
        })
    }

    fn single(records: Value) -> Result<Listing> {
        let dir = write_raw(records);
        let adapter = PortalBAdapter::new(dir.path());
        let mut listings = adapter.listings().unwrap();
        listings.next().unwrap()
    }

    #[test]
    fn test_maps_nested_fields() {
        let listing = single(json!([lote_costero()])).unwrap();

        assert_eq!(listing.id, "PORTALB-B-12");
        assert_eq!(listing.title, "Lote costero");
        assert_eq!(listing.terrain_type, "urbano");
        assert_eq!(listing.region, "Valparaíso");
        assert_eq!(listing.commune, "Zapallar");
        assert_eq!(listing.price_clp, 60_000_000);
        assert_eq!(listing.surface_m2, 800.0);
        assert_eq!(listing.origin, Origin::Portal);
        assert_eq!(listing.source_name, "PropiedadesB");
        assert_eq!(listing.url, "https://b.example/12");
        assert_eq!(listing.fiscal_value, Some(18_000_000));
        assert_eq!(listing.commercial_value, Some(52_000_000));
        assert!(listing.extra.is_empty());
    }

    #[test]
    fn test_missing_avaluos_keys_yield_absent_valuations() {
        let mut raw = lote_costero();
        raw["avaluos"] = json!({ "fiscal": 18000000 });
        let listing = single(json!([raw])).unwrap();
        assert_eq!(listing.fiscal_value, Some(18_000_000));
        assert_eq!(listing.commercial_value, None);

        let mut raw = lote_costero();
        raw["avaluos"] = json!({});
        let listing = single(json!([raw])).unwrap();
        assert_eq!(listing.fiscal_value, None);
        assert_eq!(listing.commercial_value, None);
    }

    #[test]
    fn test_missing_avaluos_mapping_fails() {
        let mut raw = lote_costero();
        raw.as_object_mut().unwrap().remove("avaluos");

        match single(json!([raw])).unwrap_err() {
            PipelineError::MissingField { adapter, field, index, .. } => {
                assert_eq!(adapter, "portal_b");
                assert_eq!(field, "avaluos");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_location_field_is_reported_with_path() {
        let mut raw = lote_costero();
        raw["location"] = json!({ "region": "Valparaíso" });

        match single(json!([raw])).unwrap_err() {
            PipelineError::MissingField { adapter, field, .. } => {
                assert_eq!(adapter, "portal_b");
                assert_eq!(field, "location.commune");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_field_fails() {
        for field in [
            "code", "name", "category", "location", "avaluos", "amount", "size", "source", "link",
        ] {
            let mut raw = lote_costero();
            raw.as_object_mut().unwrap().remove(field);

            assert!(
                matches!(single(json!([raw])), Err(PipelineError::MissingField { .. })),
                "expected missing-field error for {field}"
            );
        }
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let dir = write_raw(json!([]));
        let adapter = PortalBAdapter::new(dir.path());
        assert_eq!(adapter.listings().unwrap().count(), 0);
    }
}
