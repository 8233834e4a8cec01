use serde::{Deserialize, Serialize};
use std::fmt;

use super::{check_dimension, new_item_id, Point};
use crate::constants::{COPY_SUFFIX, DUPLICATE_OFFSET};
use crate::error::DocumentError;
use crate::units::square_footage;

/// How a room counts towards the livable area of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Livability {
    #[default]
    Livable,
    NonLivable,
    Outdoor,
}

impl fmt::Display for Livability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Livable => write!(f, "Livable"),
            Self::NonLivable => write!(f, "Non-livable"),
            Self::Outdoor => write!(f, "Outdoor"),
        }
    }
}

/// A rectangular room. Rooms own their geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Whole square feet, kept in step with `width` and `height`.
    #[serde(default, alias = "sqFootage")]
    pub square_footage: f64,
    #[serde(default, rename = "roomType")]
    pub livability: Livability,
    /// Polygon outline. Reserved for non-rectangular rooms; never edited.
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Room {
    /// Creates a room at the origin with a fresh id.
    pub fn new(name: impl Into<String>, width: f64, height: f64, livability: Livability) -> Self {
        Self {
            id: new_item_id(),
            name: name.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
            square_footage: square_footage(width, height),
            livability,
            points: Vec::new(),
        }
    }

    /// Places the room at `(x, y)`.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Resizes the room and refreshes its square footage.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.recompute_square_footage();
    }

    pub fn recompute_square_footage(&mut self) {
        self.square_footage = square_footage(self.width, self.height);
    }

    /// A copy with a fresh id, a "(Copy)" name and a diagonal offset.
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_item_id(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            x: self.x + DUPLICATE_OFFSET,
            y: self.y + DUPLICATE_OFFSET,
            points: Vec::new(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)
    }
}
