use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned to items the catalog does not know about
pub const DEFAULT_CATEGORY: &str = "uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub category: String,
    pub unit_price: f64,
}

impl ListItem {
    /// Price contribution of this line (unit price times quantity)
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Items sharing a category, in list order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<ListItem>,
}

impl CategoryGroup {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(ListItem::line_total).sum()
    }
}
