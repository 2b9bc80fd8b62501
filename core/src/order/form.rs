// sakura/src/order/form.rs

//! The checkout draft and the closed set of updates that can be applied to it.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
  #[default]
  Cash,
  Card,
  Online,
}

impl PaymentMethod {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaymentMethod::Cash => "cash",
      PaymentMethod::Card => "card",
      PaymentMethod::Online => "online",
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PaymentMethod {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "cash" => Ok(PaymentMethod::Cash),
      "card" => Ok(PaymentMethod::Card),
      "online" => Ok(PaymentMethod::Online),
      _ => Err(OrderError::UnknownPaymentMethod(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTime {
  #[default]
  Asap,
  Scheduled,
}

impl DeliveryTime {
  pub fn as_str(&self) -> &'static str {
    match self {
      DeliveryTime::Asap => "asap",
      DeliveryTime::Scheduled => "scheduled",
    }
  }
}

impl fmt::Display for DeliveryTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for DeliveryTime {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "asap" => Ok(DeliveryTime::Asap),
      "scheduled" => Ok(DeliveryTime::Scheduled),
      _ => Err(OrderError::UnknownDeliveryTime(s.to_string())),
    }
  }
}

/// The in-progress order form. `Default` is the blank draft the storefront
/// starts with and returns to after a successful order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderForm {
  pub name: String,
  pub phone: String,
  /// Optional.
  pub email: String,
  pub address: String,
  pub apartment: String,
  pub entrance: String,
  pub floor: String,
  pub intercom: String,
  pub comment: String,
  pub payment_method: PaymentMethod,
  pub delivery_time: DeliveryTime,
  /// `YYYY-MM-DDTHH:MM`; only meaningful for scheduled delivery.
  pub scheduled_time: String,
}

impl OrderForm {
  pub fn new() -> Self {
    Self::default()
  }

  /// Applies `update` and returns the field it touched.
  pub fn apply(&mut self, update: FieldUpdate) -> FormField {
    let field = update.field();
    match update {
      FieldUpdate::Name(v) => self.name = v,
      FieldUpdate::Phone(v) => self.phone = v,
      FieldUpdate::Email(v) => self.email = v,
      FieldUpdate::Address(v) => self.address = v,
      FieldUpdate::Apartment(v) => self.apartment = v,
      FieldUpdate::Entrance(v) => self.entrance = v,
      FieldUpdate::Floor(v) => self.floor = v,
      FieldUpdate::Intercom(v) => self.intercom = v,
      FieldUpdate::Comment(v) => self.comment = v,
      FieldUpdate::PaymentMethod(v) => self.payment_method = v,
      FieldUpdate::DeliveryTime(v) => self.delivery_time = v,
      FieldUpdate::ScheduledTime(v) => self.scheduled_time = v,
    }
    field
  }
}

/// Names of the order form fields. Ordering follows the form's layout, which is
/// also the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
  Name,
  Phone,
  Email,
  Address,
  Apartment,
  Entrance,
  Floor,
  Intercom,
  DeliveryTime,
  ScheduledTime,
  PaymentMethod,
  Comment,
}

impl FormField {
  pub const ALL: [FormField; 12] = [
    FormField::Name,
    FormField::Phone,
    FormField::Email,
    FormField::Address,
    FormField::Apartment,
    FormField::Entrance,
    FormField::Floor,
    FormField::Intercom,
    FormField::DeliveryTime,
    FormField::ScheduledTime,
    FormField::PaymentMethod,
    FormField::Comment,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      FormField::Name => "name",
      FormField::Phone => "phone",
      FormField::Email => "email",
      FormField::Address => "address",
      FormField::Apartment => "apartment",
      FormField::Entrance => "entrance",
      FormField::Floor => "floor",
      FormField::Intercom => "intercom",
      FormField::DeliveryTime => "delivery_time",
      FormField::ScheduledTime => "scheduled_time",
      FormField::PaymentMethod => "payment_method",
      FormField::Comment => "comment",
    }
  }
}

impl fmt::Display for FormField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FormField {
  type Err = OrderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_lowercase().replace('-', "_");
    FormField::ALL
      .into_iter()
      .find(|field| field.as_str() == wanted)
      .ok_or_else(|| OrderError::UnknownField(s.to_string()))
  }
}

/// A typed edit of exactly one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
  Name(String),
  Phone(String),
  Email(String),
  Address(String),
  Apartment(String),
  Entrance(String),
  Floor(String),
  Intercom(String),
  Comment(String),
  PaymentMethod(PaymentMethod),
  DeliveryTime(DeliveryTime),
  ScheduledTime(String),
}

impl FieldUpdate {
  /// Builds an update from text input, e.g. a `field value` pair typed into a
  /// terminal. Enumerated fields are parsed; free-text fields take `value` as is.
  pub fn parse(field: FormField, value: &str) -> Result<Self, OrderError> {
    let text = value.to_string();
    Ok(match field {
      FormField::Name => FieldUpdate::Name(text),
      FormField::Phone => FieldUpdate::Phone(text),
      FormField::Email => FieldUpdate::Email(text),
      FormField::Address => FieldUpdate::Address(text),
      FormField::Apartment => FieldUpdate::Apartment(text),
      FormField::Entrance => FieldUpdate::Entrance(text),
      FormField::Floor => FieldUpdate::Floor(text),
      FormField::Intercom => FieldUpdate::Intercom(text),
      FormField::Comment => FieldUpdate::Comment(text),
      FormField::PaymentMethod => FieldUpdate::PaymentMethod(value.parse()?),
      FormField::DeliveryTime => FieldUpdate::DeliveryTime(value.parse()?),
      FormField::ScheduledTime => FieldUpdate::ScheduledTime(text),
    })
  }

  pub fn field(&self) -> FormField {
    match self {
      FieldUpdate::Name(_) => FormField::Name,
      FieldUpdate::Phone(_) => FormField::Phone,
      FieldUpdate::Email(_) => FormField::Email,
      FieldUpdate::Address(_) => FormField::Address,
      FieldUpdate::Apartment(_) => FormField::Apartment,
      FieldUpdate::Entrance(_) => FormField::Entrance,
      FieldUpdate::Floor(_) => FormField::Floor,
      FieldUpdate::Intercom(_) => FormField::Intercom,
      FieldUpdate::Comment(_) => FormField::Comment,
      FieldUpdate::PaymentMethod(_) => FormField::PaymentMethod,
      FieldUpdate::DeliveryTime(_) => FormField::DeliveryTime,
      FieldUpdate::ScheduledTime(_) => FormField::ScheduledTime,
    }
  }
}
