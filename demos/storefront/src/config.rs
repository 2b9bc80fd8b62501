// storefront/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use sakura::{DeliveryTerms, Locale};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// JSON menu to load instead of the embedded one.
  pub menu_path: Option<PathBuf>,
  pub delivery_terms: DeliveryTerms,
  pub currency_symbol: String,
  pub message_locale: Locale,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| env::var(var_name).ok().filter(|value| !value.trim().is_empty());

    let menu_path = get_env("MENU_PATH").map(PathBuf::from);

    let defaults = DeliveryTerms::default();
    let minimum_order_total = match get_env("MIN_ORDER_TOTAL") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid MIN_ORDER_TOTAL: {}", e)))?,
      None => defaults.minimum_order_total,
    };
    let free_delivery_threshold = match get_env("FREE_DELIVERY_THRESHOLD") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::Config(format!("Invalid FREE_DELIVERY_THRESHOLD: {}", e)))?,
      None => defaults.free_delivery_threshold,
    };

    let currency_symbol = get_env("CURRENCY_SYMBOL").unwrap_or_else(|| "₽".to_string());
    let message_locale = match get_env("MESSAGE_LOCALE") {
      Some(raw) => parse_locale(&raw)?,
      None => Locale::default(),
    };

    tracing::info!("Application configuration loaded successfully.");
    tracing::debug!(
      menu_path = ?menu_path,
      minimum_order_total,
      free_delivery_threshold,
      "Loaded config details"
    );

    Ok(Self {
      menu_path,
      delivery_terms: DeliveryTerms {
        minimum_order_total,
        free_delivery_threshold,
      },
      currency_symbol,
      message_locale,
    })
  }
}

fn parse_locale(raw: &str) -> Result<Locale> {
  match raw.trim().to_lowercase().as_str() {
    "ru" => Ok(Locale::Ru),
    "en" => Ok(Locale::En),
    other => Err(AppError::Config(format!("Invalid MESSAGE_LOCALE: '{}' (expected ru or en)", other))),
  }
}
