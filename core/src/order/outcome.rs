// sakura/src/order/outcome.rs

//! Result of a checkout attempt that did not fail outright.

use super::placement::OrderSummary;
use super::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// The placement effect accepted the order; cart and draft have been reset.
  Placed(OrderSummary),
  /// The draft failed validation. Nothing was submitted and nothing was reset;
  /// the same errors are now recorded on the session for display.
  Rejected(ValidationErrors),
}

impl SubmitOutcome {
  pub fn is_placed(&self) -> bool {
    matches!(self, SubmitOutcome::Placed(_))
  }
}
