// sakura/src/cart/mod.rs

//! The shopping cart: an insertion-ordered collection of lines, one per item id.

pub mod favorites;
pub mod line;
pub mod terms;

pub use favorites::Favorites;
pub use line::CartLine;
pub use terms::DeliveryTerms;

use crate::catalog::{ItemId, MenuItem};
use tracing::{event, Level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one unit of `item`. An existing line is incremented in place (capped
  /// at `u32::MAX`); a new line is appended at the end.
  pub fn add(&mut self, item: &MenuItem) {
    match self.line_mut(item.id) {
      Some(line) => {
        line.quantity = line.quantity.saturating_add(1);
        event!(Level::DEBUG, item_id = item.id, quantity = line.quantity, "Cart line incremented.");
      }
      None => {
        self.lines.push(CartLine::new(item));
        event!(Level::DEBUG, item_id = item.id, "Cart line added.");
      }
    }
  }

  /// Deletes the line for `id`. Absent ids are ignored.
  pub fn remove(&mut self, id: ItemId) {
    let before = self.lines.len();
    self.lines.retain(|line| line.item_id != id);
    if self.lines.len() != before {
      event!(Level::DEBUG, item_id = id, "Cart line removed.");
    }
  }

  /// Sets the quantity of an existing line. Zero removes the line. Never
  /// creates a line for an id that is not already in the cart.
  pub fn update_quantity(&mut self, id: ItemId, quantity: u32) {
    if quantity == 0 {
      self.remove(id);
      return;
    }
    if let Some(line) = self.line_mut(id) {
      line.quantity = quantity;
      event!(Level::DEBUG, item_id = id, quantity, "Cart line quantity updated.");
    }
  }

  /// The cart sheet's "+" button.
  pub fn increment(&mut self, id: ItemId) {
    if let Some(quantity) = self.quantity_of(id) {
      self.update_quantity(id, quantity.saturating_add(1));
    }
  }

  /// The cart sheet's "−" button; a line at quantity 1 is removed.
  pub fn decrement(&mut self, id: ItemId) {
    if let Some(quantity) = self.quantity_of(id) {
      self.update_quantity(id, quantity - 1);
    }
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, id: ItemId) -> Option<&CartLine> {
    self.lines.iter().find(|line| line.item_id == id)
  }

  fn line_mut(&mut self, id: ItemId) -> Option<&mut CartLine> {
    self.lines.iter_mut().find(|line| line.item_id == id)
  }

  pub fn quantity_of(&self, id: ItemId) -> Option<u32> {
    self.line(id).map(|line| line.quantity)
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Sum of quantities across all lines.
  pub fn total_items(&self) -> u64 {
    self.lines.iter().map(|line| u64::from(line.quantity)).sum()
  }

  /// Sum of price × quantity across all lines.
  pub fn total_price(&self) -> u64 {
    self.lines.iter().map(CartLine::subtotal).sum()
  }
}
