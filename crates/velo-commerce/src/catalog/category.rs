//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category shown in the listing sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Product count shown in the sidebar.
    ///
    /// Static display metadata, not recomputed from the catalog.
    pub product_count: u32,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon: impl Into<String>,
        product_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            product_count,
        }
    }

    /// Name with the icon in front, as the sidebar renders it.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}
