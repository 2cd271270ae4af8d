use serde::{Deserialize, Deserializer, Serialize};

use bistro_core::{Entity, ItemId, ValueObject};

/// Category of a stock item. Drives every threshold and rounding decision.
///
/// `Unknown` catches categories this crate does not know about yet (e.g. a new
/// kind added in the back office before the engine is updated). Every consumer
/// matches on it explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Sold or used by weight/volume (flour, oil).
    Measurable,
    /// Counted in units, optionally bought in packages (bottles, cans).
    Countable,
    /// Prepared in-house (sauces, doughs), tracked in portions.
    Elaborated,
    #[serde(other)]
    Unknown,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Measurable => "measurable",
            ItemKind::Countable => "countable",
            ItemKind::Elaborated => "elaborated",
            ItemKind::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How individual units of a countable item group into purchasable packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packaging {
    pub package_size: f64,
    pub package_unit: String,
}

impl ValueObject for Packaging {}

impl Packaging {
    pub fn new(package_size: f64, package_unit: impl Into<String>) -> Self {
        Self {
            package_size,
            package_unit: package_unit.into(),
        }
    }
}

/// A stock record as supplied by the inventory data layer.
///
/// The engine only reads these. Numeric fields are kept as raw `f64` because
/// upstream may hand over zero, negative or non-finite values; conversion to
/// decimal happens inside each calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub unit: Option<String>,
    /// Missing and `null` both read as `0`.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stock: f64,
    #[serde(default)]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub packaging: Option<Packaging>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl MaterialItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            unit: None,
            stock: 0.0,
            unit_cost: None,
            packaging: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_stock(mut self, stock: f64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    pub fn with_packaging(mut self, packaging: Packaging) -> Self {
        self.packaging = Some(packaging);
        self
    }

    /// Base unit, ignoring blank strings.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Packaging only counts for countable items.
    pub fn effective_packaging(&self) -> Option<&Packaging> {
        match self.kind {
            ItemKind::Countable => self.packaging.as_ref(),
            ItemKind::Measurable | ItemKind::Elaborated | ItemKind::Unknown => None,
        }
    }
}

impl Entity for MaterialItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
