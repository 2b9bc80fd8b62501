// storefront/src/placement.rs

//! Order placement for the terminal storefront: acknowledge like the website
//! does, and hand back a receipt with a reference number.

use chrono::{DateTime, Utc};
use sakura::{AcknowledgePlacement, OrderPlacement, OrderSummary};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
  pub reference: Uuid,
  pub placed_at: DateTime<Utc>,
  pub customer: String,
  pub total_items: u64,
  pub total_price: u64,
}

#[derive(Debug, Default)]
pub struct TerminalPlacement {
  acknowledge: AcknowledgePlacement,
  last_receipt: Option<Receipt>,
}

impl TerminalPlacement {
  pub fn acknowledgement(&self) -> &str {
    self.acknowledge.acknowledgement()
  }

  /// Receipt of the most recent order, taken by the caller after a submit.
  pub fn take_receipt(&mut self) -> Option<Receipt> {
    self.last_receipt.take()
  }
}

impl OrderPlacement for TerminalPlacement {
  #[instrument(name = "TerminalPlacement::place_order", skip_all, err)]
  fn place_order(&mut self, order: &OrderSummary) -> anyhow::Result<()> {
    self.acknowledge.place_order(order)?;
    let receipt = Receipt {
      reference: Uuid::new_v4(),
      placed_at: Utc::now(),
      customer: order.form.name.trim().to_string(),
      total_items: order.total_items,
      total_price: order.total_price,
    };
    info!(
      reference = %receipt.reference,
      receipt = %serde_json::to_string(&receipt)?,
      "Receipt issued."
    );
    self.last_receipt = Some(receipt);
    Ok(())
  }
}
