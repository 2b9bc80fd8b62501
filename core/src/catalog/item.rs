// sakura/src/catalog/item.rs

//! Static menu entries and their categories.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a menu item. Unique within a `Catalog`.
pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Sushi,
  Rolls,
  Pizza,
}

impl Category {
  /// Every category, in the order the storefront shows its filter buttons.
  pub const ALL: [Category; 3] = [Category::Sushi, Category::Rolls, Category::Pizza];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Sushi => "sushi",
      Category::Rolls => "rolls",
      Category::Pizza => "pizza",
    }
  }

  /// Label shown on the filter button and the item badge.
  pub fn display_name(&self) -> &'static str {
    match self {
      Category::Sushi => "Суши",
      Category::Rolls => "Роллы",
      Category::Pizza => "Пицца",
    }
  }

  pub fn emoji(&self) -> &'static str {
    match self {
      Category::Sushi => "🍣",
      Category::Rolls => "🍱",
      Category::Pizza => "🍕",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "sushi" => Ok(Category::Sushi),
      "rolls" => Ok(Category::Rolls),
      "pizza" => Ok(Category::Pizza),
      _ => Err(OrderError::UnknownCategory(s.to_string())),
    }
  }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
  pub id: ItemId,
  pub name: String,
  pub description: String,
  /// Whole currency units.
  pub price: u32,
  pub category: Category,
  pub image: String,
  pub calories: u32,
  #[serde(default)]
  pub ingredients: Vec<String>,
  /// Display string, e.g. "180г".
  pub weight: String,
}

impl MenuItem {
  /// Case-insensitive substring match against name or description.
  /// `needle` must already be lowercased.
  pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
    self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
  }
}
