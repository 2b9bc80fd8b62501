// sakura/src/cart/line.rs

use crate::catalog::{ItemId, MenuItem};
use serde::Serialize;

/// One (item, quantity) pairing in the cart.
///
/// Name and unit price are captured when the item is first added so totals
/// never need a catalog lookup. `quantity` is always at least 1 while the line
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
  pub item_id: ItemId,
  pub name: String,
  pub unit_price: u32,
  pub quantity: u32,
}

impl CartLine {
  pub(crate) fn new(item: &MenuItem) -> Self {
    Self {
      item_id: item.id,
      name: item.name.clone(),
      unit_price: item.price,
      quantity: 1,
    }
  }

  pub fn subtotal(&self) -> u64 {
    u64::from(self.unit_price) * u64::from(self.quantity)
  }
}
