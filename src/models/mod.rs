use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether a listing comes from a sale portal or a public auction notice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Portal,
    Remate,
}

/// Unified land listing, one per raw source item.
///
/// Field order here is the field order of the output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub terrain_type: String,
    pub region: String,
    pub commune: String,
    pub price_clp: i64,
    pub surface_m2: f64,
    pub origin: Origin,
    pub source_name: String,
    pub url: String,
    pub fiscal_value: Option<i64>,
    pub commercial_value: Option<i64>,
    pub extra: Map<String, Value>,
}

impl Listing {
    /// Build a listing from its required fields; valuations start absent and `extra` empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        terrain_type: impl Into<String>,
        region: impl Into<String>,
        commune: impl Into<String>,
        price_clp: i64,
        surface_m2: f64,
        origin: Origin,
        source_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            terrain_type: terrain_type.into(),
            region: region.into(),
            commune: commune.into(),
            price_clp,
            surface_m2,
            origin,
            source_name: source_name.into(),
            url: url.into(),
            fiscal_value: None,
            commercial_value: None,
            extra: Map::new(),
        }
    }

    pub fn with_valuations(
        mut self,
        fiscal_value: Option<i64>,
        commercial_value: Option<i64>,
    ) -> Self {
        self.fiscal_value = fiscal_value;
        self.commercial_value = commercial_value;
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Plain mapping form with all 13 keys in schema order, `null` for absent valuations
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Top-level output document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub generated_from: String,
    pub listings: Vec<Value>,
}

impl Envelope {
    pub fn new(generated_from: impl Into<String>) -> Self {
        Self {
            generated_from: generated_from.into(),
            listings: Vec::new(),
        }
    }

    pub fn push(&mut self, listing: &Listing) -> serde_json::Result<()> {
        self.listings.push(listing.to_value()?);
        Ok(())
    }
}
