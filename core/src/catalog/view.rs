// sakura/src/catalog/view.rs

//! Menu browser selection: which category is active, what the search box holds,
//! and which item (if any) is open in the detail view.

use super::{Catalog, CategoryFilter, ItemId, MenuItem};
use crate::error::OrderResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
  pub category: CategoryFilter,
  pub query: String,
  selected_item: Option<ItemId>,
}

impl CatalogView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
    catalog.filter(self.category, &self.query)
  }

  /// Opens the detail view for `id`. The id must exist in `catalog`.
  pub fn open_item<'a>(&mut self, catalog: &'a Catalog, id: ItemId) -> OrderResult<&'a MenuItem> {
    let item = catalog.require(id)?;
    self.selected_item = Some(id);
    Ok(item)
  }

  pub fn close_item(&mut self) {
    self.selected_item = None;
  }

  pub fn selected_item_id(&self) -> Option<ItemId> {
    self.selected_item
  }

  pub fn selected_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a MenuItem> {
    self.selected_item.and_then(|id| catalog.get(id))
  }
}
