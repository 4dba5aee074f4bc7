use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::{FundSource, LineItem};

/// Maximum number of line items on one invoice.
pub const MAX_ITEMS: usize = 1_000;

/// Largest accepted line amount in Rupiah (one quadrillion). Arithmetic past
/// this point saturates, so larger amounts are rejected here.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000_000_000);

/// Validate a single line item before it reaches the calculation engine.
///
/// The entered price is checked per fund: `unit_price` for BOS,
/// `total_price` for BOP. Returns all errors found (not just the first).
pub fn validate_line_item(item: &LineItem, index: usize, fund: FundSource) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let prefix = format!("items[{index}]");

    if item.id.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.id"),
            "item id must not be empty",
        ));
    }

    if item.name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "item name must not be empty",
        ));
    }

    if item.quantity <= 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must be positive, got {}", item.quantity),
        ));
    }

    if item.unit.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit"),
            "unit must not be empty",
        ));
    }

    let (field, price) = match fund {
        FundSource::Bos => ("unitPrice", item.unit_price),
        FundSource::Bop => ("totalPrice", item.total_price),
    };
    if price <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.{field}"),
            format!("{fund} price must be greater than zero, got {price}"),
        ));
    }

    for (field, amount) in [("unitPrice", item.unit_price), ("totalPrice", item.total_price)] {
        if amount > MAX_AMOUNT {
            errors.push(ValidationError::new(
                format!("{prefix}.{field}"),
                format!("amount {amount} exceeds the maximum of {MAX_AMOUNT}"),
            ));
        }
    }

    if item.pph && item.pph_percentage.is_none() {
        errors.push(ValidationError::new(
            format!("{prefix}.pphPercentage"),
            "PPh is enabled but no rate (0.5%, 1.5% or 2%) is selected",
        ));
    }

    errors
}

/// Validate a list of line items. An invoice needs at least one item.
pub fn validate_items(items: &[LineItem], fund: FundSource) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "invoice must have at least one line item",
        ));
    }
    if items.len() > MAX_ITEMS {
        errors.push(ValidationError::new(
            "items",
            format!("invoice cannot have more than {MAX_ITEMS} line items"),
        ));
    }

    for (i, item) in items.iter().enumerate() {
        errors.extend(validate_line_item(item, i, fund));
    }

    for (i, item) in items.iter().enumerate() {
        if items[..i].iter().any(|other| other.id == item.id) {
            errors.push(ValidationError::new(
                format!("items[{i}].id"),
                format!("duplicate item id '{}'", item.id),
            ));
        }
    }

    errors
}
