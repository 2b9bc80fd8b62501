// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use sakura::{Catalog, Category, ItemId, MenuItem, OrderSession, OrderSummary};
use tracing::Level;

// --- Fixture menu ---
fn item(id: ItemId, name: &str, description: &str, price: u32, category: Category) -> MenuItem {
  MenuItem {
    id,
    name: name.to_string(),
    description: description.to_string(),
    price,
    category,
    image: format!("/img/{}.jpg", id),
    calories: 100,
    ingredients: vec!["Рис".to_string()],
    weight: "100г".to_string(),
  }
}

pub const SALMON_NIGIRI: ItemId = 1;
pub const PHILADELPHIA: ItemId = 2;
pub const JAPANESE_PIZZA: ItemId = 3;
pub const CALIFORNIA: ItemId = 4;
pub const TUNA_SASHIMI: ItemId = 5;
pub const TOKYO_PIZZA: ItemId = 6;

pub fn menu_items() -> Vec<MenuItem> {
  vec![
    item(SALMON_NIGIRI, "Лосось нигири", "Свежий лосось на рисовой подушке", 120, Category::Sushi),
    item(PHILADELPHIA, "Филадельфия ролл", "Лосось, сливочный сыр, огурец", 350, Category::Rolls),
    item(JAPANESE_PIZZA, "Японская пицца", "Лосось, нори, кунжут, соус унаги", 480, Category::Pizza),
    item(CALIFORNIA, "Калифорния ролл", "Краб, авокадо, огурец, икра тобико", 320, Category::Rolls),
    item(TUNA_SASHIMI, "Тунец сашими", "Свежайший тунец, васаби, имбирь", 280, Category::Sushi),
    item(TOKYO_PIZZA, "Пицца Токио", "Угорь, авокадо, кунжут, соус терияки", 520, Category::Pizza),
  ]
}

pub fn catalog() -> Catalog {
  Catalog::new(menu_items()).expect("fixture menu is valid")
}

/// A session whose draft passes validation.
pub fn session_with_valid_draft() -> OrderSession {
  let mut session = OrderSession::new();
  session.set_name("Анна");
  session.set_phone("+7 (999) 123-45-67");
  session.set_address("ул. Ленина, 1");
  session
}

/// Placement effect that records every order it receives.
#[derive(Debug, Default)]
pub struct RecordingPlacement {
  pub orders: Vec<OrderSummary>,
}

impl sakura::OrderPlacement for RecordingPlacement {
  fn place_order(&mut self, order: &OrderSummary) -> anyhow::Result<()> {
    self.orders.push(order.clone());
    Ok(())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
