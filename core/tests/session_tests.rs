// tests/session_tests.rs
mod common;

use common::*;
use sakura::{
  AcknowledgePlacement, Category, CategoryFilter, DeliveryTime, FieldError, FieldUpdate, FormField, OrderError,
  OrderForm, OrderSession, OrderSummary, PaymentMethod, SubmitOutcome,
};

#[test]
fn test_submit_valid_order_clears_cart_and_resets_draft() {
  setup_tracing();
  let catalog = catalog();
  let mut session = session_with_valid_draft();
  session.set_payment_method(PaymentMethod::Card);
  session.add_to_cart(catalog.get(SALMON_NIGIRI).unwrap());
  session.add_to_cart(catalog.get(SALMON_NIGIRI).unwrap());
  session.add_to_cart(catalog.get(PHILADELPHIA).unwrap());

  let mut placement = RecordingPlacement::default();
  let outcome = session.submit(&mut placement).unwrap();

  let summary = match outcome {
    SubmitOutcome::Placed(summary) => summary,
    other => panic!("Expected SubmitOutcome::Placed, got {:?}", other),
  };
  assert_eq!(summary.total_items, 3);
  assert_eq!(summary.total_price, 590);
  assert_eq!(summary.form.payment_method, PaymentMethod::Card);
  assert_eq!(placement.orders, vec![summary]);

  assert!(session.cart().is_empty());
  assert_eq!(session.form(), &OrderForm::default());
  assert!(session.errors().is_empty());
}

#[test]
fn test_submit_invalid_order_is_rejected_without_side_effects() {
  setup_tracing();
  let catalog = catalog();
  let mut session = OrderSession::new();
  session.set_name("Елена");
  session.set_phone("123");
  session.add_to_cart(catalog.get(CALIFORNIA).unwrap());
  let cart_before = session.cart().clone();
  let form_before = session.form().clone();

  let mut calls = 0;
  let mut placement = |_: &OrderSummary| -> anyhow::Result<()> {
    calls += 1;
    Ok(())
  };
  let outcome = session.submit(&mut placement).unwrap();

  match outcome {
    SubmitOutcome::Rejected(errors) => {
      assert_eq!(errors.get(FormField::Phone), Some(FieldError::InvalidFormat));
      assert_eq!(errors.get(FormField::Address), Some(FieldError::Required));
      assert_eq!(errors.len(), 2);
      assert_eq!(&errors, session.errors()); // kept for display
    }
    other => panic!("Expected SubmitOutcome::Rejected, got {:?}", other),
  }
  assert_eq!(calls, 0);
  assert_eq!(session.cart(), &cart_before);
  assert_eq!(session.form(), &form_before);
}

#[test]
fn test_placement_failure_leaves_session_untouched() {
  setup_tracing();
  let catalog = catalog();
  let mut session = session_with_valid_draft();
  session.add_to_cart(catalog.get(TOKYO_PIZZA).unwrap());
  let cart_before = session.cart().clone();
  let form_before = session.form().clone();

  let mut failing = |_: &OrderSummary| -> anyhow::Result<()> { Err(anyhow::anyhow!("kitchen closed")) };
  let result = session.submit(&mut failing);

  match result {
    Err(OrderError::Placement { source }) => assert_eq!(source.to_string(), "kitchen closed"),
    other => panic!("Expected OrderError::Placement, got {:?}", other),
  }
  assert_eq!(session.cart(), &cart_before);
  assert_eq!(session.form(), &form_before);
}

#[test]
fn test_placement_is_invoked_once_per_successful_submit() {
  setup_tracing();
  let catalog = catalog();
  let mut placement = AcknowledgePlacement::default();
  let mut session = session_with_valid_draft();
  session.add_to_cart(catalog.get(TUNA_SASHIMI).unwrap());
  assert!(session.submit(&mut placement).unwrap().is_placed());
  assert_eq!(placement.placed(), 1);

  // Draft was reset, so a second submit is rejected and not placed.
  assert!(!session.submit(&mut placement).unwrap().is_placed());
  assert_eq!(placement.placed(), 1);
}

#[test]
fn test_field_change_clears_only_that_fields_error() {
  setup_tracing();
  let mut session = OrderSession::new();
  assert!(!session.validate());
  assert_eq!(session.errors().len(), 3);

  session.set_phone("not yet valid");
  assert!(session.error_for(FormField::Phone).is_none());
  assert_eq!(session.error_for(FormField::Name), Some(FieldError::Required));
  assert_eq!(session.error_for(FormField::Address), Some(FieldError::Required));

  // Editing a field without an error leaves the others alone.
  session.on_field_change(FieldUpdate::Comment("позвоните заранее".to_string()));
  assert_eq!(session.errors().len(), 2);

  // The phone error comes back only with the next full validation.
  assert!(!session.validate());
  assert_eq!(session.error_for(FormField::Phone), Some(FieldError::InvalidFormat));
}

#[test]
fn test_typed_setters_cover_every_field() {
  let mut session = OrderSession::new();
  session.set_name("Максим");
  session.set_phone("89991234567");
  session.set_email("max@sakura.ru");
  session.set_address("пр. Мира, 5");
  session.set_apartment("12");
  session.set_entrance("2");
  session.set_floor("3");
  session.set_intercom("12К");
  session.set_comment("без имбиря");
  session.set_payment_method(PaymentMethod::Online);
  session.set_delivery_time(DeliveryTime::Scheduled);
  session.set_scheduled_time("2024-02-01T18:00");

  let form = session.form();
  assert_eq!(form.apartment, "12");
  assert_eq!(form.entrance, "2");
  assert_eq!(form.floor, "3");
  assert_eq!(form.intercom, "12К");
  assert_eq!(form.delivery_time, DeliveryTime::Scheduled);
  assert_eq!(form.scheduled_time, "2024-02-01T18:00");
  assert!(session.validate());
}

#[test]
fn test_clear_cart_resets_draft() {
  let catalog = catalog();
  let mut session = session_with_valid_draft();
  session.add_to_cart(catalog.get(CALIFORNIA).unwrap());
  session.clear_cart();
  assert!(session.cart().is_empty());
  assert_eq!(session.form(), &OrderForm::default());
}

#[test]
fn test_add_then_zero_quantity_through_session() {
  let catalog = catalog();
  let mut session = OrderSession::new();
  session.add_to_cart(catalog.get(JAPANESE_PIZZA).unwrap());
  session.increment(JAPANESE_PIZZA);
  assert_eq!(session.cart().quantity_of(JAPANESE_PIZZA), Some(2));
  session.update_quantity(JAPANESE_PIZZA, 0);
  assert!(session.cart().line(JAPANESE_PIZZA).is_none());
  session.remove_from_cart(JAPANESE_PIZZA);
  assert!(session.cart().is_empty());
}

#[test]
fn test_browsing_and_item_detail() {
  setup_tracing();
  let catalog = catalog();
  let mut session = OrderSession::new();
  assert_eq!(session.visible_items(&catalog).len(), catalog.len());

  session.select_category(CategoryFilter::Only(Category::Sushi));
  session.set_search_query("ТУНЕЦ");
  let visible: Vec<_> = session.visible_items(&catalog).iter().map(|item| item.id).collect();
  assert_eq!(visible, vec![TUNA_SASHIMI]);

  let opened = session.open_item(&catalog, TUNA_SASHIMI).unwrap();
  assert_eq!(opened.weight, "100г");
  assert_eq!(session.selected_item(&catalog).map(|item| item.id), Some(TUNA_SASHIMI));
  session.close_item();
  assert!(session.selected_item(&catalog).is_none());

  assert!(matches!(session.open_item(&catalog, 42), Err(OrderError::UnknownItem { id: 42 })));
  assert!(session.view().selected_item_id().is_none());
}

#[test]
fn test_favorites_do_not_touch_cart() {
  let mut session = OrderSession::new();
  assert!(session.toggle_favorite(PHILADELPHIA));
  assert!(session.favorites().contains(PHILADELPHIA));
  assert!(session.cart().is_empty());
  assert!(!session.toggle_favorite(PHILADELPHIA));
  assert!(session.favorites().is_empty());
}
