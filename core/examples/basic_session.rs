// sakura/examples/basic_session.rs

use sakura::{
  AcknowledgePlacement, Catalog, Category, CategoryFilter, MenuItem, OrderResult, OrderSession, SubmitOutcome,
};
use tracing::info;

fn menu() -> Vec<MenuItem> {
  vec![
    MenuItem {
      id: 1,
      name: "Лосось нигири".to_string(),
      description: "Свежий лосось на рисовой подушке".to_string(),
      price: 120,
      category: Category::Sushi,
      image: "/img/nigiri.jpg".to_string(),
      calories: 45,
      ingredients: vec!["Лосось".to_string(), "Рис".to_string()],
      weight: "30г".to_string(),
    },
    MenuItem {
      id: 2,
      name: "Филадельфия ролл".to_string(),
      description: "Лосось, сливочный сыр, огурец".to_string(),
      price: 350,
      category: Category::Rolls,
      image: "/img/philadelphia.jpg".to_string(),
      calories: 255,
      ingredients: vec!["Лосось".to_string(), "Сливочный сыр".to_string(), "Огурец".to_string()],
      weight: "180г".to_string(),
    },
  ]
}

fn main() -> OrderResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Session Example ---");

  // 1. Static menu, loaded once
  let catalog = Catalog::new(menu())?;

  // 2. One session per visitor
  let mut session = OrderSession::new();

  // 3. Browse
  session.select_category(CategoryFilter::Only(Category::Rolls));
  for item in session.visible_items(&catalog) {
    info!("Visible: {} — {}₽", item.name, item.price);
  }

  // 4. Fill the cart
  let nigiri = catalog.require(1)?;
  let roll = catalog.require(2)?;
  session.add_to_cart(nigiri);
  session.add_to_cart(nigiri);
  session.add_to_cart(roll);
  info!(
    "Cart: {} items, {}₽",
    session.cart().total_items(),
    session.cart().total_price()
  );

  // 5. First attempt: the draft is still empty
  let mut placement = AcknowledgePlacement::default();
  if let SubmitOutcome::Rejected(errors) = session.submit(&mut placement)? {
    for (field, message) in errors.messages(sakura::Locale::En) {
      info!("  {}: {}", field, message);
    }
  }

  // 6. Fix the draft and try again
  session.set_name("Анна");
  session.set_phone("+7 (999) 123-45-67");
  session.set_address("ул. Ленина, 1");
  match session.submit(&mut placement)? {
    SubmitOutcome::Placed(summary) => info!("Placed order for {}₽", summary.total_price),
    SubmitOutcome::Rejected(errors) => info!("Still invalid: {:?}", errors),
  }

  info!("Cart empty after placement: {}", session.cart().is_empty());
  Ok(())
}
