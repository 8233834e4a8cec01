//! # Furniture Template Catalog
//!
//! Built-in furniture presets offered in the "add furniture" panel. A
//! template is not stored anywhere; picking one creates a fresh
//! [`FurnitureDefinition`] in the inventory with the template's defaults.

use floorplanner_core::FurnitureDefinition;
use serde::{Deserialize, Serialize};

/// Catalog categories for grouping templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureCategory {
    Seating,
    Tables,
    Storage,
    Bedroom,
    Other,
}

impl FurnitureCategory {
    /// All categories in display order
    pub const ALL: [FurnitureCategory; 5] = [
        FurnitureCategory::Seating,
        FurnitureCategory::Tables,
        FurnitureCategory::Storage,
        FurnitureCategory::Bedroom,
        FurnitureCategory::Other,
    ];

    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureCategory::Seating => "seating",
            FurnitureCategory::Tables => "tables",
            FurnitureCategory::Storage => "storage",
            FurnitureCategory::Bedroom => "bedroom",
            FurnitureCategory::Other => "other",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == s)
    }
}

/// A furniture preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnitureTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub furniture_type: &'static str,
    pub default_width: f64,
    pub default_height: f64,
    pub default_color: &'static str,
    pub category: FurnitureCategory,
}

impl FurnitureTemplate {
    /// A new inventory definition with this template's defaults.
    pub fn definition(&self) -> FurnitureDefinition {
        FurnitureDefinition::new(
            self.name,
            self.furniture_type,
            self.default_width,
            self.default_height,
            self.default_color,
        )
    }
}

const SADDLE_BROWN: &str = "#8B4513";
const SIENNA: &str = "#A0522D";
const DARK_BROWN: &str = "#654321";
const CHOCOLATE: &str = "#D2691E";

const fn template(
    id: &'static str,
    name: &'static str,
    furniture_type: &'static str,
    (default_width, default_height): (f64, f64),
    default_color: &'static str,
    category: FurnitureCategory,
) -> FurnitureTemplate {
    FurnitureTemplate {
        id,
        name,
        furniture_type,
        default_width,
        default_height,
        default_color,
        category,
    }
}

/// Every built-in template. Sizes are in inches.
pub const FURNITURE_TEMPLATES: [FurnitureTemplate; 14] = [
    template("sofa", "Sofa", "Sofa", (84.0, 36.0), SADDLE_BROWN, FurnitureCategory::Seating),
    template("chair", "Chair", "Chair", (24.0, 24.0), SIENNA, FurnitureCategory::Seating),
    template("loveseat", "Loveseat", "Sofa", (60.0, 36.0), SADDLE_BROWN, FurnitureCategory::Seating),
    template("dining-table", "Dining Table", "Table", (60.0, 36.0), DARK_BROWN, FurnitureCategory::Tables),
    template("coffee-table", "Coffee Table", "Table", (48.0, 24.0), DARK_BROWN, FurnitureCategory::Tables),
    template("side-table", "Side Table", "Table", (18.0, 18.0), DARK_BROWN, FurnitureCategory::Tables),
    template("bookshelf", "Bookshelf", "Bookshelf", (36.0, 12.0), SADDLE_BROWN, FurnitureCategory::Storage),
    template("dresser", "Dresser", "Dresser", (60.0, 18.0), SADDLE_BROWN, FurnitureCategory::Storage),
    template("cabinet", "Cabinet", "Cabinet", (36.0, 24.0), SADDLE_BROWN, FurnitureCategory::Storage),
    template("queen-bed", "Queen Bed", "Bed", (60.0, 80.0), CHOCOLATE, FurnitureCategory::Bedroom),
    template("king-bed", "King Bed", "Bed", (76.0, 80.0), CHOCOLATE, FurnitureCategory::Bedroom),
    template("nightstand", "Nightstand", "Table", (18.0, 16.0), DARK_BROWN, FurnitureCategory::Bedroom),
    template("desk", "Desk", "Desk", (48.0, 24.0), DARK_BROWN, FurnitureCategory::Other),
    template("tv-stand", "TV Stand", "TV Stand", (48.0, 16.0), SADDLE_BROWN, FurnitureCategory::Other),
];

/// Look up a template by id.
pub fn find_template(id: &str) -> Option<&'static FurnitureTemplate> {
    FURNITURE_TEMPLATES.iter().find(|template| template.id == id)
}

/// Templates in one category, in catalog order.
pub fn templates_in(category: FurnitureCategory) -> impl Iterator<Item = &'static FurnitureTemplate> {
    FURNITURE_TEMPLATES
        .iter()
        .filter(move |template| template.category == category)
}

/// Sorted, de-duplicated furniture type names.
pub fn furniture_types() -> Vec<&'static str> {
    let mut types: Vec<_> = FURNITURE_TEMPLATES
        .iter()
        .map(|template| template.furniture_type)
        .collect();
    types.sort_unstable();
    types.dedup();
    types
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<_> = FURNITURE_TEMPLATES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FURNITURE_TEMPLATES.len());
    }

    #[test]
    fn test_find_template() {
        let bed = find_template("king-bed").unwrap();
        assert_eq!(bed.name, "King Bed");
        assert_eq!((bed.default_width, bed.default_height), (76.0, 80.0));
        assert_eq!(bed.category, FurnitureCategory::Bedroom);
        assert!(find_template("hammock").is_none());
    }

    #[test]
    fn test_templates_in_category() {
        let seating: Vec<_> = templates_in(FurnitureCategory::Seating).map(|t| t.id).collect();
        assert_eq!(seating, vec!["sofa", "chair", "loveseat"]);
        assert_eq!(templates_in(FurnitureCategory::Other).count(), 2);
    }

    #[test]
    fn test_furniture_types() {
        assert_eq!(
            furniture_types(),
            vec!["Bed", "Bookshelf", "Cabinet", "Chair", "Desk", "Dresser", "Sofa", "TV Stand", "Table"]
        );
    }

    #[test]
    fn test_definition_from_template() {
        let sofa = find_template("sofa").unwrap().definition();
        assert_eq!(sofa.name, "Sofa");
        assert_eq!(sofa.furniture_type, "Sofa");
        assert_eq!((sofa.width, sofa.height), (84.0, 36.0));
        assert_eq!(sofa.color, "#8B4513");
        assert!(!sofa.id.is_empty());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(FurnitureCategory::parse("tables"), Some(FurnitureCategory::Tables));
        assert_eq!(FurnitureCategory::parse("garden"), None);
    }
}
