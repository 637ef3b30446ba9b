use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical lowercase key
    pub name: String,
    pub category: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(default)]
    pub alternatives: Vec<String>,
    #[serde(default)]
    pub seasonal: bool,
}

impl CatalogEntry {
    pub fn new(name: &str, category: &str, unit_price: f64) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            unit_price,
            alternatives: Vec::new(),
            seasonal: false,
        }
    }

    pub fn with_alternatives(mut self, alternatives: &[&str]) -> Self {
        self.alternatives = alternatives.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn seasonal(mut self) -> Self {
        self.seasonal = true;
        self
    }

    /// First listed alternative, used for the "you might also like" advisory
    pub fn first_alternative(&self) -> Option<&str> {
        self.alternatives.first().map(String::as_str)
    }
}
