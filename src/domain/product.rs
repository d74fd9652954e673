//! Product - e-commerce catalogue entry (events sold as products)

use crate::table::{FieldValue, SortColumn, TableRow};
use serde::{Deserialize, Serialize};

/// A product row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Display name (`eventName` in older exports)
    #[serde(alias = "eventName")]
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Price with tax included
    #[serde(default)]
    pub price_tax_incl: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub active: bool,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_tax_incl: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_tax_incl,
            ..Self::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Sortable product columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductColumn {
    Id,
    Name,
    /// First category
    Category,
    Price,
    Quantity,
    Active,
}

impl SortColumn for ProductColumn {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            "id" => Some(Self::Id),
            "name" | "eventName" => Some(Self::Name),
            "categories" | "category" => Some(Self::Category),
            "price" | "priceTaxIncl" => Some(Self::Price),
            "quantity" => Some(Self::Quantity),
            "active" => Some(Self::Active),
            _ => None,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "categories",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Active => "active",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::Name,
            Self::Category,
            Self::Price,
            Self::Quantity,
            Self::Active,
        ]
    }
}

impl TableRow for Product {
    type Column = ProductColumn;

    fn id(&self) -> &str {
        &self.id
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::from(&self.id),
            FieldValue::from(&self.name),
            FieldValue::from(&self.handle),
            FieldValue::from(&self.description),
            FieldValue::list(&self.categories),
            FieldValue::list(&self.tags),
            FieldValue::from(self.price_tax_incl),
            FieldValue::from(self.quantity),
            FieldValue::from(self.active),
        ]
    }

    fn sort_key(&self, column: ProductColumn) -> FieldValue {
        match column {
            ProductColumn::Id => FieldValue::from(&self.id),
            ProductColumn::Name => FieldValue::from(&self.name),
            ProductColumn::Category => self
                .categories
                .first()
                .map_or(FieldValue::Empty, FieldValue::from),
            ProductColumn::Price => FieldValue::from(self.price_tax_incl),
            ProductColumn::Quantity => FieldValue::from(self.quantity),
            ProductColumn::Active => FieldValue::from(self.active),
        }
    }
}
