// storefront/src/errors.rs

use thiserror::Error;

use sakura::OrderError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Menu file could not be read: {0}")]
  MenuFile(#[source] std::io::Error),

  #[error("Terminal I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Ordering Error: {source}")]
  Order {
    #[from] // Allows conversion from sakura::OrderError
    source: OrderError,
  },

  #[error("Invalid command: {0}")]
  Command(String),
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
