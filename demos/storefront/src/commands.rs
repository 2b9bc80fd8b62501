// storefront/src/commands.rs

//! Text commands typed at the storefront prompt.

use crate::errors::{AppError, Result};
use sakura::{CategoryFilter, FieldUpdate, FormField, ItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Help,
  Quit,
  Menu,
  Category(CategoryFilter),
  Search(String),
  Show(ItemId),
  Close,
  Favorite(ItemId),
  Add(ItemId),
  Remove(ItemId),
  Quantity(ItemId, u32),
  Increment(ItemId),
  Decrement(ItemId),
  Clear,
  Cart,
  Set(FieldUpdate),
  Form,
  Validate,
  Submit,
}

pub const HELP: &str = "\
commands:
  menu                      list visible items
  category <all|sushi|rolls|pizza>
  search [text]             filter by name/description (empty clears)
  show <id> | close         item details
  fav <id>                  toggle favorite
  add <id> | remove <id>    cart
  qty <id> <n>              set quantity (0 removes)
  inc <id> | dec <id>       +1 / -1
  clear                     empty the cart
  cart                      show the cart
  set <field> <value>       edit the order form (e.g. set phone +7 999 123 45 67)
  form | validate | submit  checkout
  help | quit";

fn parse_id(raw: Option<&str>) -> Result<ItemId> {
  let raw = raw.ok_or_else(|| AppError::Command("missing item id".to_string()))?;
  raw
    .parse::<ItemId>()
    .map_err(|_| AppError::Command(format!("'{}' is not an item id", raw)))
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
  let line = line.trim();
  if line.is_empty() {
    return Ok(None);
  }
  let (verb, rest) = match line.split_once(char::is_whitespace) {
    Some((verb, rest)) => (verb, rest.trim()),
    None => (line, ""),
  };
  let mut args = rest.split_whitespace();

  let command = match verb.to_lowercase().as_str() {
    "help" | "?" => Command::Help,
    "quit" | "exit" => Command::Quit,
    "menu" => Command::Menu,
    "category" | "cat" => Command::Category(rest.parse()?),
    "search" => Command::Search(rest.to_string()),
    "show" => Command::Show(parse_id(args.next())?),
    "close" => Command::Close,
    "fav" => Command::Favorite(parse_id(args.next())?),
    "add" => Command::Add(parse_id(args.next())?),
    "remove" | "rm" => Command::Remove(parse_id(args.next())?),
    "qty" => {
      let id = parse_id(args.next())?;
      let raw = args
        .next()
        .ok_or_else(|| AppError::Command("missing quantity".to_string()))?;
      let quantity = raw
        .parse::<u32>()
        .map_err(|_| AppError::Command(format!("'{}' is not a quantity", raw)))?;
      Command::Quantity(id, quantity)
    }
    "inc" | "+" => Command::Increment(parse_id(args.next())?),
    "dec" | "-" => Command::Decrement(parse_id(args.next())?),
    "clear" => Command::Clear,
    "cart" => Command::Cart,
    "set" => {
      let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
      };
      if field.is_empty() {
        return Err(AppError::Command("missing field name".to_string()));
      }
      let field: FormField = field.parse()?;
      Command::Set(FieldUpdate::parse(field, value)?)
    }
    "form" => Command::Form,
    "validate" => Command::Validate,
    "submit" | "order" => Command::Submit,
    other => return Err(AppError::Command(format!("unknown command '{}'; try 'help'", other))),
  };
  Ok(Some(command))
}
