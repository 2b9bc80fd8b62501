// sakura/src/lib.rs

//! Sakura: the client-side ordering core of the Sakura Sushi storefront.
//!
//! The crate provides:
//!  - A static, validated menu `Catalog` and a pure category/search filter over it.
//!  - A `Cart` with one line per menu item, kept in the order items were first added.
//!  - The checkout draft (`OrderForm`) with field-level validation.
//!  - An `OrderSession` that owns all of the above and is the only way to mutate it.
//!  - The `OrderPlacement` seam through which a validated order leaves the core.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod order;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLine, DeliveryTerms, Favorites};
pub use crate::catalog::{filter, Catalog, CatalogView, Category, CategoryFilter, ItemId, MenuItem};
pub use crate::order::{
  validate, AcknowledgePlacement, DeliveryTime, FieldError, FieldUpdate, FormField, Locale, OrderForm,
  OrderPlacement, OrderSummary, PaymentMethod, SubmitOutcome, ValidationErrors,
};

pub use crate::error::{OrderError, OrderResult};

pub use crate::session::OrderSession;

/*
    Typical flow:
    1. Load a `Catalog` once (`Catalog::from_json_str`, or `Catalog::new` with items).
    2. Create an `OrderSession` per visitor.
    3. Browse with `select_category` / `set_search_query` / `visible_items`.
    4. Fill the cart with `add_to_cart`, adjust with `update_quantity`, `increment`, `decrement`.
    5. Edit the draft through the typed setters (`set_name`, `set_phone`, ...).
    6. Call `session.submit(&mut placement)` and render either the placed order
       or `session.errors()`.
*/
