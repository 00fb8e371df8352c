use serde::{Deserialize, Serialize};

/// Crops covered by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Tomato,
    Maize,
}

impl Crop {
    pub const ALL: [Crop; 3] = [Crop::Rice, Crop::Tomato, Crop::Maize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Tomato => "Tomato",
            Crop::Maize => "Corn/Maize",
        }
    }

    /// Case-insensitive lookup. Only exact identifiers match; surrounding
    /// whitespace is not stripped.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rice" => Some(Crop::Rice),
            "tomato" => Some(Crop::Tomato),
            "corn" | "maize" => Some(Crop::Maize),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
