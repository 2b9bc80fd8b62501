// sakura/src/catalog/filter.rs

//! The catalog filter: a pure projection of the menu by category and search text.

use super::item::{Category, MenuItem};
use crate::error::OrderError;
use std::fmt;
use std::str::FromStr;

/// Category selector for the menu browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
  /// Passes every item.
  #[default]
  All,
  Only(Category),
}

impl CategoryFilter {
  pub fn accepts(&self, category: Category) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Only(selected) => *selected == category,
    }
  }

  pub fn display_name(&self) -> &'static str {
    match self {
      CategoryFilter::All => "Все",
      CategoryFilter::Only(category) => category.display_name(),
    }
  }

  pub fn emoji(&self) -> &'static str {
    match self {
      CategoryFilter::All => "🍽️",
      CategoryFilter::Only(category) => category.emoji(),
    }
  }
}

impl From<Category> for CategoryFilter {
  fn from(category: Category) -> Self {
    CategoryFilter::Only(category)
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CategoryFilter::All => f.write_str("all"),
      CategoryFilter::Only(category) => category.fmt(f),
    }
  }
}

impl FromStr for CategoryFilter {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("all") {
      return Ok(CategoryFilter::All);
    }
    s.parse::<Category>().map(CategoryFilter::Only)
  }
}

/// Returns the items that pass both the category selector and the search query,
/// in catalog order.
///
/// An empty `query` matches everything. A non-empty one is matched
/// case-insensitively as a substring of the name OR the description.
pub fn filter<'a, I>(items: I, category: CategoryFilter, query: &str) -> Vec<&'a MenuItem>
where
  I: IntoIterator<Item = &'a MenuItem>,
{
  let needle = query.to_lowercase();
  items
    .into_iter()
    .filter(|item| category.accepts(item.category))
    .filter(|item| needle.is_empty() || item.matches_lowercase(&needle))
    .collect()
}
