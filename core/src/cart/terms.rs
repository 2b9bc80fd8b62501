// sakura/src/cart/terms.rs

//! Published delivery terms. Informational: checkout does not enforce them.

/// Minimum order and free-delivery threshold, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryTerms {
  pub minimum_order_total: u64,
  pub free_delivery_threshold: u64,
}

impl Default for DeliveryTerms {
  fn default() -> Self {
    Self {
      minimum_order_total: 500,
      free_delivery_threshold: 1000,
    }
  }
}

impl DeliveryTerms {
  pub fn meets_minimum(&self, total: u64) -> bool {
    total >= self.minimum_order_total
  }

  pub fn delivery_is_free(&self, total: u64) -> bool {
    total >= self.free_delivery_threshold
  }

  /// How much more must be ordered for free delivery; zero once reached.
  pub fn remaining_for_free_delivery(&self, total: u64) -> u64 {
    self.free_delivery_threshold.saturating_sub(total)
  }
}
