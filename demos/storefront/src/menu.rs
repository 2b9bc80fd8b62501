// storefront/src/menu.rs

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use sakura::Catalog;
use std::fs::File;
use std::io::BufReader;

/// The Sakura Sushi menu shipped with the binary.
pub const EMBEDDED_MENU: &str = include_str!("../data/menu.json");

/// Loads the menu from `MENU_PATH` if configured, otherwise the embedded one.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
  let catalog = match &config.menu_path {
    Some(path) => {
      tracing::info!(path = %path.display(), "Loading menu from file.");
      let file = File::open(path).map_err(AppError::MenuFile)?;
      Catalog::from_json_reader(BufReader::new(file))?
    }
    None => Catalog::from_json_str(EMBEDDED_MENU)?,
  };
  tracing::info!(items = catalog.len(), "Menu ready.");
  Ok(catalog)
}
