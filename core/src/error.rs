// sakura/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::catalog::ItemId;

/// Failures of the ordering core.
///
/// Form validation problems are NOT represented here: they are ordinary data
/// (`ValidationErrors`) carried by `SubmitOutcome::Rejected`, because the user
/// fixes them by editing the draft.
#[derive(Debug, Error)]
pub enum OrderError {
  #[error("Menu item not found: {id}")]
  UnknownItem { id: ItemId },

  #[error("Duplicate menu item id {id} in catalog")]
  DuplicateItem { id: ItemId },

  #[error("Menu item {id} has a non-positive price")]
  InvalidPrice { id: ItemId },

  #[error("Catalog data is malformed. Source: {source}")]
  CatalogFormat {
    #[source]
    source: serde_json::Error,
  },

  #[error("Unknown category: '{0}'")]
  UnknownCategory(String),

  #[error("Unknown payment method: '{0}'")]
  UnknownPaymentMethod(String),

  #[error("Unknown delivery time option: '{0}'")]
  UnknownDeliveryTime(String),

  #[error("Unknown order form field: '{0}'")]
  UnknownField(String),

  #[error("Order placement failed. Source: {source}")]
  Placement {
    #[source]
    source: AnyhowError,
  },
}

// Errors coming out of placement effects are plain anyhow errors.
impl From<AnyhowError> for OrderError {
  fn from(err: AnyhowError) -> Self {
    OrderError::Placement { source: err }
  }
}

impl From<serde_json::Error> for OrderError {
  fn from(err: serde_json::Error) -> Self {
    OrderError::CatalogFormat { source: err }
  }
}

pub type OrderResult<T, E = OrderError> = std::result::Result<T, E>;
