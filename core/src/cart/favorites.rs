// sakura/src/cart/favorites.rs

use crate::catalog::ItemId;

/// Favorited item ids, in the order they were favorited.
/// Presentation bookkeeping only; never touches the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
  ids: Vec<ItemId>,
}

impl Favorites {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `id` if absent, removes it if present. Returns whether `id` is a
  /// favorite afterwards.
  pub fn toggle(&mut self, id: ItemId) -> bool {
    if let Some(pos) = self.ids.iter().position(|fav| *fav == id) {
      self.ids.remove(pos);
      false
    } else {
      self.ids.push(id);
      true
    }
  }

  pub fn contains(&self, id: ItemId) -> bool {
    self.ids.contains(&id)
  }

  pub fn ids(&self) -> &[ItemId] {
    &self.ids
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }
}
