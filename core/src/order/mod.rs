pub mod form;
pub mod outcome;
pub mod placement;
pub mod validation;

pub use form::{DeliveryTime, FieldUpdate, FormField, OrderForm, PaymentMethod};
pub use outcome::SubmitOutcome;
pub use placement::{AcknowledgePlacement, OrderPlacement, OrderSummary};
pub use validation::{validate, FieldError, Locale, ValidationErrors};
