// sakura/src/catalog/mod.rs

//! The static menu and the read-only projections over it.

pub mod filter;
pub mod item;
pub mod view;

pub use filter::{filter, CategoryFilter};
pub use item::{Category, ItemId, MenuItem};
pub use view::CatalogView;

use crate::error::{OrderError, OrderResult};
use std::collections::HashSet;
use std::io::Read;
use tracing::{event, Level};

/// The immutable list of orderable menu items.
///
/// Construction checks the static data once (unique ids, positive prices);
/// afterwards the catalog is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  items: Vec<MenuItem>,
}

impl Catalog {
  pub fn new(items: Vec<MenuItem>) -> OrderResult<Self> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
      if !seen.insert(item.id) {
        return Err(OrderError::DuplicateItem { id: item.id });
      }
      if item.price == 0 {
        return Err(OrderError::InvalidPrice { id: item.id });
      }
    }
    event!(Level::DEBUG, item_count = items.len(), "Catalog loaded.");
    Ok(Self { items })
  }

  /// Parses a JSON array of menu items.
  pub fn from_json_str(json: &str) -> OrderResult<Self> {
    let items: Vec<MenuItem> = serde_json::from_str(json)?;
    Self::new(items)
  }

  pub fn from_json_reader<R: Read>(reader: R) -> OrderResult<Self> {
    let items: Vec<MenuItem> = serde_json::from_reader(reader)?;
    Self::new(items)
  }

  pub fn items(&self) -> &[MenuItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
    self.items.iter().find(|item| item.id == id)
  }

  /// Like `get`, but an absent id is an error.
  pub fn require(&self, id: ItemId) -> OrderResult<&MenuItem> {
    self.get(id).ok_or(OrderError::UnknownItem { id })
  }

  pub fn filter(&self, category: CategoryFilter, query: &str) -> Vec<&MenuItem> {
    filter::filter(&self.items, category, query)
  }

  /// Categories that have at least one item, in `Category::ALL` order.
  pub fn categories_present(&self) -> Vec<Category> {
    Category::ALL
      .into_iter()
      .filter(|category| self.items.iter().any(|item| item.category == *category))
      .collect()
  }
}
