use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Diesel,   // D
    Gasoline, // G
    Tolls,    // T
    Meals,    // M
    Other,    // O
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Diesel => "diesel",
            Category::Gasoline => "gasoline",
            Category::Tolls => "tolls",
            Category::Meals => "meals",
            Category::Other => "other",
        }
    }

    /// Helper: convert input code from CLI (one-letter code or full name,
    /// case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "d" | "diesel" => Some(Category::Diesel),
            "g" | "gasoline" => Some(Category::Gasoline),
            "t" | "tolls" => Some(Category::Tolls),
            "m" | "meals" => Some(Category::Meals),
            "o" | "other" => Some(Category::Other),
            _ => None,
        }
    }
}
