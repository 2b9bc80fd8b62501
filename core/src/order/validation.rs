// sakura/src/order/validation.rs

//! Checkout form validation.
//!
//! `validate` is recomputed from scratch on every call and reports only the
//! fields that failed. An empty `ValidationErrors` means the draft can be
//! submitted.

use super::form::{DeliveryTime, FormField, OrderForm};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Russian-style phone: optional `+`, optional `7`/`8`, then 3+3+2+2 digits
/// with optional space/hyphen separators and optional parentheses around the
/// area code.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\+?[78]?[\s-]?\(?[0-9]{3}\)?[\s-]?[0-9]{3}[\s-]?[0-9]{2}[\s-]?[0-9]{2}$")
    .expect("phone pattern is a valid regex")
});

/// Minimal email shape, searched anywhere in the value.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Shape produced by a datetime-local input.
const SCHEDULED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
  Required,
  InvalidFormat,
  InvalidEmail,
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FieldError::Required => f.write_str("required"),
      FieldError::InvalidFormat => f.write_str("invalid format"),
      FieldError::InvalidEmail => f.write_str("invalid email"),
    }
  }
}

/// Language of user-facing validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
  #[default]
  Ru,
  En,
}

impl FieldError {
  /// Human-readable message for `field` failing with this error.
  pub fn message(&self, field: FormField, locale: Locale) -> String {
    match locale {
      Locale::En => match self {
        FieldError::Required => format!("{} is required", english_label(field)),
        FieldError::InvalidFormat => format!("{} has an invalid format", english_label(field)),
        FieldError::InvalidEmail => "Invalid email".to_string(),
      },
      Locale::Ru => match (self, field) {
        (FieldError::Required, FormField::Name) => "Имя обязательно".to_string(),
        (FieldError::Required, FormField::Phone) => "Телефон обязателен".to_string(),
        (FieldError::Required, FormField::Address) => "Адрес обязателен".to_string(),
        (FieldError::Required, FormField::ScheduledTime) => "Укажите время доставки".to_string(),
        (FieldError::Required, _) => "Поле обязательно".to_string(),
        (FieldError::InvalidFormat, FormField::Phone) => "Некорректный формат телефона".to_string(),
        (FieldError::InvalidFormat, FormField::ScheduledTime) => "Некорректное время доставки".to_string(),
        (FieldError::InvalidFormat, _) => "Некорректный формат".to_string(),
        (FieldError::InvalidEmail, _) => "Некорректный email".to_string(),
      },
    }
  }
}

fn english_label(field: FormField) -> &'static str {
  match field {
    FormField::Name => "Name",
    FormField::Phone => "Phone",
    FormField::Email => "Email",
    FormField::Address => "Address",
    FormField::Apartment => "Apartment",
    FormField::Entrance => "Entrance",
    FormField::Floor => "Floor",
    FormField::Intercom => "Intercom",
    FormField::DeliveryTime => "Delivery time",
    FormField::ScheduledTime => "Scheduled time",
    FormField::PaymentMethod => "Payment method",
    FormField::Comment => "Comment",
  }
}

/// Per-field validation failures, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<FormField, FieldError>);

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn get(&self, field: FormField) -> Option<FieldError> {
    self.0.get(&field).copied()
  }

  pub fn contains(&self, field: FormField) -> bool {
    self.0.contains_key(&field)
  }

  /// Records `error` for `field`, replacing any earlier error for it.
  pub fn insert(&mut self, field: FormField, error: FieldError) {
    self.0.insert(field, error);
  }

  /// Drops the error for `field`; returns whether one was recorded.
  pub fn clear_field(&mut self, field: FormField) -> bool {
    self.0.remove(&field).is_some()
  }

  pub fn clear(&mut self) {
    self.0.clear();
  }

  pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
    self.0.keys().copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
    self.0.iter().map(|(field, error)| (*field, *error))
  }

  pub fn messages(&self, locale: Locale) -> Vec<(FormField, String)> {
    self.iter().map(|(field, error)| (field, error.message(field, locale))).collect()
  }
}

pub fn is_valid_phone(phone: &str) -> bool {
  PHONE_PATTERN.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
  EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_scheduled_time(value: &str) -> bool {
  NaiveDateTime::parse_from_str(value, SCHEDULED_TIME_FORMAT).is_ok()
}

/// Validates the whole draft.
///
/// Blank means empty after trimming. A blank phone is `Required`; a non-blank
/// one is checked (trimmed) against the phone pattern. A blank email is
/// simply absent. Scheduled time is only checked for scheduled delivery.
pub fn validate(form: &OrderForm) -> ValidationErrors {
  let mut errors = ValidationErrors::new();

  if form.name.trim().is_empty() {
    errors.insert(FormField::Name, FieldError::Required);
  }

  let phone = form.phone.trim();
  if phone.is_empty() {
    errors.insert(FormField::Phone, FieldError::Required);
  } else if !is_valid_phone(phone) {
    errors.insert(FormField::Phone, FieldError::InvalidFormat);
  }

  // Surrounding whitespace is not part of the value: "   " counts as no email.
  let email = form.email.trim();
  if !email.is_empty() && !is_valid_email(email) {
    errors.insert(FormField::Email, FieldError::InvalidEmail);
  }

  if form.address.trim().is_empty() {
    errors.insert(FormField::Address, FieldError::Required);
  }

  if form.delivery_time == DeliveryTime::Scheduled {
    let scheduled = form.scheduled_time.trim();
    if scheduled.is_empty() {
      errors.insert(FormField::ScheduledTime, FieldError::Required);
    } else if !is_valid_scheduled_time(scheduled) {
      errors.insert(FormField::ScheduledTime, FieldError::InvalidFormat);
    }
  }

  errors
}
