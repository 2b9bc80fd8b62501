// tests/validation_tests.rs
mod common;

use common::*;
use sakura::{validate, DeliveryTime, FieldError, FieldUpdate, FormField, OrderForm, PaymentMethod};

fn valid_form() -> OrderForm {
  OrderForm {
    name: "Анна".to_string(),
    phone: "+7 (999) 123-45-67".to_string(),
    address: "ул. Ленина, 1".to_string(),
    ..Default::default()
  }
}

#[test]
fn test_empty_form_requires_name_phone_address() {
  setup_tracing();
  let errors = validate(&OrderForm::default());
  let fields: Vec<FormField> = errors.fields().collect();
  assert_eq!(fields, vec![FormField::Name, FormField::Phone, FormField::Address]);
  assert!(errors.iter().all(|(_, error)| error == FieldError::Required));
}

#[test]
fn test_valid_form_has_no_errors() {
  setup_tracing();
  assert!(validate(&valid_form()).is_empty());
}

#[test]
fn test_phone_format() {
  setup_tracing();
  let mut form = valid_form();
  form.phone = "123".to_string();
  assert_eq!(validate(&form).get(FormField::Phone), Some(FieldError::InvalidFormat));

  form.phone = "+7 (999) 123-45-67".to_string();
  assert_eq!(validate(&form).get(FormField::Phone), None);

  form.phone = "8 999 123 45 67".to_string();
  assert_eq!(validate(&form).get(FormField::Phone), None);
}

#[test]
fn test_whitespace_only_phone_is_required_not_invalid() {
  setup_tracing();
  let mut form = valid_form();
  form.phone = "   ".to_string();
  assert_eq!(validate(&form).get(FormField::Phone), Some(FieldError::Required));
}

#[test]
fn test_phone_is_checked_after_trimming() {
  let mut form = valid_form();
  form.phone = "  89991234567 ".to_string();
  assert!(validate(&form).is_empty());
}

#[test]
fn test_whitespace_only_email_counts_as_absent() {
  setup_tracing();
  let mut form = valid_form();
  form.email = "   ".to_string();
  assert!(!validate(&form).contains(FormField::Email));

  form.email = " anna@sakura.ru\t".to_string();
  assert!(validate(&form).is_empty());
}

#[test]
fn test_whitespace_only_name_and_address_are_required() {
  let mut form = valid_form();
  form.name = " \t".to_string();
  form.address = "  ".to_string();
  let errors = validate(&form);
  assert_eq!(errors.get(FormField::Name), Some(FieldError::Required));
  assert_eq!(errors.get(FormField::Address), Some(FieldError::Required));
  assert_eq!(errors.len(), 2);
}

#[test]
fn test_email_is_optional_but_checked_when_present() {
  setup_tracing();
  let mut form = valid_form();
  assert!(!validate(&form).contains(FormField::Email));

  form.email = "anna@sakura.ru".to_string();
  assert!(!validate(&form).contains(FormField::Email));

  form.email = "anna@sakura".to_string();
  assert_eq!(validate(&form).get(FormField::Email), Some(FieldError::InvalidEmail));

  form.email = "not an email".to_string();
  assert_eq!(validate(&form).get(FormField::Email), Some(FieldError::InvalidEmail));
}

#[test]
fn test_scheduled_time_only_checked_for_scheduled_delivery() {
  setup_tracing();
  let mut form = valid_form();
  form.scheduled_time = "whenever".to_string();
  assert!(validate(&form).is_empty(), "asap delivery ignores scheduled_time");

  form.delivery_time = DeliveryTime::Scheduled;
  assert_eq!(validate(&form).get(FormField::ScheduledTime), Some(FieldError::InvalidFormat));

  form.scheduled_time = String::new();
  assert_eq!(validate(&form).get(FormField::ScheduledTime), Some(FieldError::Required));

  form.scheduled_time = "2024-01-15T19:30".to_string();
  assert!(validate(&form).is_empty());
}

#[test]
fn test_unconstrained_fields_never_error() {
  let mut form = valid_form();
  form.apartment = "!!!".to_string();
  form.entrance = String::new();
  form.floor = "минус первый".to_string();
  form.intercom = "#".to_string();
  form.comment = "x".repeat(2000);
  form.payment_method = PaymentMethod::Online;
  assert!(validate(&form).is_empty());
}

#[test]
fn test_validation_is_recomputed_from_scratch() {
  let mut form = OrderForm::default();
  assert_eq!(validate(&form).len(), 3);
  form.name = "Максим".to_string();
  let errors = validate(&form);
  assert!(!errors.contains(FormField::Name));
  assert_eq!(errors.len(), 2);
}

#[test]
fn test_field_update_parsing() {
  let field: FormField = "payment_method".parse().unwrap();
  assert_eq!(
    FieldUpdate::parse(field, "card").unwrap(),
    FieldUpdate::PaymentMethod(PaymentMethod::Card)
  );
  assert_eq!(
    FieldUpdate::parse("delivery-time".parse().unwrap(), "scheduled").unwrap(),
    FieldUpdate::DeliveryTime(DeliveryTime::Scheduled)
  );
  assert!(FieldUpdate::parse(FormField::PaymentMethod, "crypto").is_err());
  assert!("favourite_colour".parse::<FormField>().is_err());

  let mut form = OrderForm::new();
  let touched = form.apply(FieldUpdate::parse(FormField::Comment, "без васаби").unwrap());
  assert_eq!(touched, FormField::Comment);
  assert_eq!(form.comment, "без васаби");
}
