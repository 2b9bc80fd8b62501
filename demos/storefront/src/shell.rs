// storefront/src/shell.rs

//! Applies commands to the session and renders the result as text.

use crate::commands::{Command, HELP};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::placement::TerminalPlacement;
use sakura::{Catalog, MenuItem, OrderSession, SubmitOutcome};
use std::io::Write;
use tracing::instrument;

pub struct Storefront {
  config: AppConfig,
  catalog: Catalog,
  session: OrderSession,
  placement: TerminalPlacement,
}

/// Whether the prompt loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

impl Storefront {
  pub fn new(config: AppConfig, catalog: Catalog) -> Self {
    Self {
      config,
      catalog,
      session: OrderSession::new(),
      placement: TerminalPlacement::default(),
    }
  }

  pub fn session(&self) -> &OrderSession {
    &self.session
  }

  fn money(&self, amount: u64) -> String {
    format!("{}{}", amount, self.config.currency_symbol)
  }

  #[instrument(name = "Storefront::execute", skip(self, out), err)]
  pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
    match command {
      Command::Help => writeln!(out, "{}", HELP)?,
      Command::Quit => return Ok(Flow::Quit),
      Command::Menu => self.render_menu(out)?,
      Command::Category(category) => {
        self.session.select_category(category);
        self.render_menu(out)?;
      }
      Command::Search(query) => {
        self.session.set_search_query(query);
        self.render_menu(out)?;
      }
      Command::Show(id) => {
        let item = self.session.open_item(&self.catalog, id)?;
        render_item_details(item, &self.money(u64::from(item.price)), out)?;
      }
      Command::Close => self.session.close_item(),
      Command::Favorite(id) => {
        let item = self.catalog.require(id)?;
        if self.session.toggle_favorite(id) {
          writeln!(out, "♥ {} added to favorites", item.name)?;
        } else {
          writeln!(out, "♡ {} removed from favorites", item.name)?;
        }
      }
      Command::Add(id) => {
        let item = self.catalog.require(id)?;
        self.session.add_to_cart(item);
        writeln!(out, "Added {} ({} in cart)", item.name, self.session.cart().total_items())?;
      }
      Command::Remove(id) => {
        self.session.remove_from_cart(id);
        self.render_cart(out)?;
      }
      Command::Quantity(id, quantity) => {
        self.session.update_quantity(id, quantity);
        self.render_cart(out)?;
      }
      Command::Increment(id) => {
        self.session.increment(id);
        self.render_cart(out)?;
      }
      Command::Decrement(id) => {
        self.session.decrement(id);
        self.render_cart(out)?;
      }
      Command::Clear => {
        self.session.clear_cart();
        writeln!(out, "Корзина пуста")?;
      }
      Command::Cart => self.render_cart(out)?,
      Command::Set(update) => {
        let field = update.field();
        self.session.on_field_change(update);
        writeln!(out, "{} updated", field)?;
      }
      Command::Form => self.render_form(out)?,
      Command::Validate => {
        if self.session.validate() {
          writeln!(out, "Form is valid")?;
        } else {
          self.render_errors(out)?;
        }
      }
      Command::Submit => self.submit(out)?,
    }
    Ok(Flow::Continue)
  }

  fn submit<W: Write>(&mut self, out: &mut W) -> Result<()> {
    let total = self.session.cart().total_price();
    let terms = self.config.delivery_terms;
    if !terms.meets_minimum(total) {
      // Informational; the order still goes through.
      writeln!(
        out,
        "Note: minimum order is {}, cart total is {}",
        self.money(terms.minimum_order_total),
        self.money(total)
      )?;
    }

    match self.session.submit(&mut self.placement)? {
      SubmitOutcome::Placed(summary) => {
        writeln!(out, "{}", self.placement.acknowledgement())?;
        if let Some(receipt) = self.placement.take_receipt() {
          writeln!(out, "Order #{} — {}", receipt.reference, self.money(summary.total_price))?;
        }
      }
      SubmitOutcome::Rejected(_) => self.render_errors(out)?,
    }
    Ok(())
  }

  fn render_menu<W: Write>(&self, out: &mut W) -> Result<()> {
    let view = self.session.view();
    writeln!(out, "{} {}", view.category.emoji(), view.category.display_name())?;
    let items = self.session.visible_items(&self.catalog);
    if items.is_empty() {
      writeln!(out, "  (nothing matches)")?;
    }
    for item in items {
      let heart = if self.session.favorites().contains(item.id) { "♥" } else { " " };
      writeln!(
        out,
        "{} [{}] {} — {} ({})",
        heart,
        item.id,
        item.name,
        self.money(u64::from(item.price)),
        item.category.display_name()
      )?;
      writeln!(out, "      {}", item.description)?;
    }
    Ok(())
  }

  fn render_cart<W: Write>(&self, out: &mut W) -> Result<()> {
    let cart = self.session.cart();
    if cart.is_empty() {
      writeln!(out, "Корзина пуста")?;
      return Ok(());
    }
    for line in cart.lines() {
      writeln!(
        out,
        "  [{}] {} x{} = {}",
        line.item_id,
        line.name,
        line.quantity,
        self.money(line.subtotal())
      )?;
    }
    let total = cart.total_price();
    writeln!(out, "Итого: {} ({} items)", self.money(total), cart.total_items())?;
    let terms = self.config.delivery_terms;
    if terms.delivery_is_free(total) {
      writeln!(out, "Free delivery")?;
    } else {
      writeln!(
        out,
        "{} more for free delivery",
        self.money(terms.remaining_for_free_delivery(total))
      )?;
    }
    Ok(())
  }

  fn render_form<W: Write>(&self, out: &mut W) -> Result<()> {
    let form = self.session.form();
    let rows = [
      ("name", form.name.as_str()),
      ("phone", form.phone.as_str()),
      ("email", form.email.as_str()),
      ("address", form.address.as_str()),
      ("apartment", form.apartment.as_str()),
      ("entrance", form.entrance.as_str()),
      ("floor", form.floor.as_str()),
      ("intercom", form.intercom.as_str()),
      ("delivery_time", form.delivery_time.as_str()),
      ("scheduled_time", form.scheduled_time.as_str()),
      ("payment_method", form.payment_method.as_str()),
      ("comment", form.comment.as_str()),
    ];
    for (label, value) in rows {
      writeln!(out, "  {:<15} {}", label, value)?;
    }
    if !self.session.errors().is_empty() {
      self.render_errors(out)?;
    }
    Ok(())
  }

  fn render_errors<W: Write>(&self, out: &mut W) -> Result<()> {
    for (field, message) in self.session.errors().messages(self.config.message_locale) {
      writeln!(out, "  ✗ {}: {}", field, message)?;
    }
    Ok(())
  }
}

fn render_item_details<W: Write>(item: &MenuItem, price: &str, out: &mut W) -> Result<()> {
  writeln!(out, "{} {}", item.category.emoji(), item.name)?;
  writeln!(out, "  {}", item.description)?;
  writeln!(out, "  {} · {} ккал · {}", item.weight, item.calories, price)?;
  if !item.ingredients.is_empty() {
    writeln!(out, "  Состав: {}", item.ingredients.join(", "))?;
  }
  Ok(())
}
