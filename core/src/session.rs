// sakura/src/session.rs

//! Defines `OrderSession`, the single owner of a visitor's mutable state.
//!
//! Cart, checkout draft, validation errors, favorites and the menu browser
//! selection all live here, and the methods below are the only way to change
//! them. Every operation is synchronous and runs to completion.

use crate::cart::{Cart, Favorites};
use crate::catalog::{Catalog, CatalogView, CategoryFilter, ItemId, MenuItem};
use crate::error::{OrderError, OrderResult};
use crate::order::{
  validate, DeliveryTime, FieldError, FieldUpdate, FormField, OrderForm, OrderPlacement, OrderSummary, PaymentMethod,
  SubmitOutcome, ValidationErrors,
};
use tracing::{event, instrument, Level};

#[derive(Debug, Clone, Default)]
pub struct OrderSession {
  cart: Cart,
  form: OrderForm,
  errors: ValidationErrors,
  favorites: Favorites,
  view: CatalogView,
}

impl OrderSession {
  pub fn new() -> Self {
    Self::default()
  }

  // --- Read access ---

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn form(&self) -> &OrderForm {
    &self.form
  }

  /// Errors from the last validation pass, minus fields edited since.
  pub fn errors(&self) -> &ValidationErrors {
    &self.errors
  }

  pub fn favorites(&self) -> &Favorites {
    &self.favorites
  }

  pub fn view(&self) -> &CatalogView {
    &self.view
  }

  // --- Menu browser ---

  pub fn select_category(&mut self, category: CategoryFilter) {
    self.view.category = category;
  }

  pub fn set_search_query(&mut self, query: impl Into<String>) {
    self.view.query = query.into();
  }

  pub fn visible_items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MenuItem> {
    self.view.visible_items(catalog)
  }

  pub fn open_item<'a>(&mut self, catalog: &'a Catalog, id: ItemId) -> OrderResult<&'a MenuItem> {
    self.view.open_item(catalog, id)
  }

  pub fn close_item(&mut self) {
    self.view.close_item();
  }

  pub fn selected_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a MenuItem> {
    self.view.selected_item(catalog)
  }

  pub fn toggle_favorite(&mut self, id: ItemId) -> bool {
    self.favorites.toggle(id)
  }

  // --- Cart ---

  pub fn add_to_cart(&mut self, item: &MenuItem) {
    self.cart.add(item);
  }

  pub fn remove_from_cart(&mut self, id: ItemId) {
    self.cart.remove(id);
  }

  pub fn update_quantity(&mut self, id: ItemId, quantity: u32) {
    self.cart.update_quantity(id, quantity);
  }

  pub fn increment(&mut self, id: ItemId) {
    self.cart.increment(id);
  }

  pub fn decrement(&mut self, id: ItemId) {
    self.cart.decrement(id);
  }

  /// Empties the cart. The draft and its errors go with it.
  pub fn clear_cart(&mut self) {
    self.cart.clear();
    self.reset_draft();
    event!(Level::DEBUG, "Cart cleared; draft reset.");
  }

  // --- Checkout draft ---

  /// Applies one field edit and clears that field's recorded error, if any.
  /// Errors on other fields stay until the next full validation.
  pub fn on_field_change(&mut self, update: FieldUpdate) {
    let field = self.form.apply(update);
    if self.errors.clear_field(field) {
      event!(Level::TRACE, field = %field, "Field edited; its validation error cleared.");
    }
  }

  pub fn set_name(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Name(value.into()));
  }

  pub fn set_phone(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Phone(value.into()));
  }

  pub fn set_email(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Email(value.into()));
  }

  pub fn set_address(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Address(value.into()));
  }

  pub fn set_apartment(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Apartment(value.into()));
  }

  pub fn set_entrance(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Entrance(value.into()));
  }

  pub fn set_floor(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Floor(value.into()));
  }

  pub fn set_intercom(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Intercom(value.into()));
  }

  pub fn set_comment(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::Comment(value.into()));
  }

  pub fn set_payment_method(&mut self, value: PaymentMethod) {
    self.on_field_change(FieldUpdate::PaymentMethod(value));
  }

  pub fn set_delivery_time(&mut self, value: DeliveryTime) {
    self.on_field_change(FieldUpdate::DeliveryTime(value));
  }

  pub fn set_scheduled_time(&mut self, value: impl Into<String>) {
    self.on_field_change(FieldUpdate::ScheduledTime(value.into()));
  }

  /// Runs a full validation pass, replacing all recorded errors.
  /// Returns whether the draft is valid.
  pub fn validate(&mut self) -> bool {
    self.errors = validate(&self.form);
    self.errors.is_empty()
  }

  pub fn error_for(&self, field: FormField) -> Option<FieldError> {
    self.errors.get(field)
  }

  /// Validates the draft and, if it is valid, hands the order to `placement`.
  ///
  /// - Invalid draft: errors are recorded, nothing else changes, the effect is
  ///   not called. Returns `Ok(SubmitOutcome::Rejected)`.
  /// - Effect fails: nothing changes. Returns `Err(OrderError::Placement)`.
  /// - Effect succeeds: cart cleared, draft and errors reset. Returns
  ///   `Ok(SubmitOutcome::Placed)` with the submitted snapshot.
  #[instrument(
    name = "OrderSession::submit",
    skip_all,
    fields(total_items = self.cart.total_items(), total_price = self.cart.total_price()),
    err(Display)
  )]
  pub fn submit<P>(&mut self, placement: &mut P) -> OrderResult<SubmitOutcome>
  where
    P: OrderPlacement + ?Sized,
  {
    if !self.validate() {
      event!(Level::WARN, invalid_fields = self.errors.len(), "Submission blocked by validation errors.");
      return Ok(SubmitOutcome::Rejected(self.errors.clone()));
    }

    let summary = OrderSummary::new(&self.form, &self.cart);
    if let Err(source) = placement.place_order(&summary) {
      event!(Level::ERROR, error = %source, "Order placement effect failed; session left untouched.");
      return Err(OrderError::Placement { source });
    }

    self.cart.clear();
    self.reset_draft();
    event!(Level::INFO, "Order placed; cart and draft reset.");
    Ok(SubmitOutcome::Placed(summary))
  }

  fn reset_draft(&mut self) {
    self.form = OrderForm::default();
    self.errors.clear();
  }
}
