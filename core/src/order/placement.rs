// sakura/src/order/placement.rs

//! The seam through which a validated order leaves the core.

use super::form::OrderForm;
use crate::cart::{Cart, CartLine};
use serde::Serialize;
use tracing::{info, instrument};

/// Everything the placement effect gets to see: the validated draft and a
/// snapshot of the cart at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
  pub form: OrderForm,
  pub lines: Vec<CartLine>,
  pub total_items: u64,
  pub total_price: u64,
}

impl OrderSummary {
  pub(crate) fn new(form: &OrderForm, cart: &Cart) -> Self {
    Self {
      form: form.clone(),
      lines: cart.lines().to_vec(),
      total_items: cart.total_items(),
      total_price: cart.total_price(),
    }
  }
}

/// Performs the actual order submission.
///
/// Called exactly once per successful `submit`. The session resets its cart
/// and draft only after this returns `Ok`; on `Err` nothing is reset.
pub trait OrderPlacement {
  fn place_order(&mut self, order: &OrderSummary) -> anyhow::Result<()>;
}

impl<F> OrderPlacement for F
where
  F: FnMut(&OrderSummary) -> anyhow::Result<()>,
{
  fn place_order(&mut self, order: &OrderSummary) -> anyhow::Result<()> {
    self(order)
  }
}

/// Placeholder effect: acknowledges the order in the log and counts it.
#[derive(Debug, Clone)]
pub struct AcknowledgePlacement {
  acknowledgement: String,
  placed: usize,
}

impl Default for AcknowledgePlacement {
  fn default() -> Self {
    Self::new("Заказ оформлен! Мы свяжемся с вами в ближайшее время.")
  }
}

impl AcknowledgePlacement {
  pub fn new(acknowledgement: impl Into<String>) -> Self {
    Self {
      acknowledgement: acknowledgement.into(),
      placed: 0,
    }
  }

  pub fn acknowledgement(&self) -> &str {
    &self.acknowledgement
  }

  /// Number of orders acknowledged so far.
  pub fn placed(&self) -> usize {
    self.placed
  }
}

impl OrderPlacement for AcknowledgePlacement {
  #[instrument(name = "AcknowledgePlacement::place_order", skip_all, fields(total_price = order.total_price))]
  fn place_order(&mut self, order: &OrderSummary) -> anyhow::Result<()> {
    self.placed += 1;
    info!(
      customer = %order.form.name,
      lines = order.lines.len(),
      "{}",
      self.acknowledgement
    );
    Ok(())
  }
}
