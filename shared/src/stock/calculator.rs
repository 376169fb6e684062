//! Stock money calculations using rust_decimal for precision
//!
//! Form inputs arrive as free text. Anything blank or non-numeric counts as
//! zero, negative amounts clamp to zero, and derived values are rounded to
//! 2 decimal places (half away from zero).

use rust_decimal::prelude::*;

/// Decimal places kept for monetary values
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `round(quantity * buying_price, 2)`
pub fn total_amount(quantity: u32, buying_price: Decimal) -> Decimal {
    let total = Decimal::from(quantity)
        .checked_mul(buying_price)
        .unwrap_or_else(|| {
            tracing::warn!(quantity, %buying_price, "Stock total overflowed, saturating");
            Decimal::MAX
        });
    round_money(total)
}

/// `round(max(total_amount - paid_amount, 0), 2)`
pub fn due_amount(total_amount: Decimal, paid_amount: Decimal) -> Decimal {
    let due = total_amount
        .checked_sub(paid_amount)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);
    round_money(due)
}

/// Parse a money input; blank, non-numeric and negative input yield zero
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(|d| d.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a quantity input; fractional input is truncated
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| parse_amount(trimmed).trunc().to_u32())
        .unwrap_or(0)
}

/// Derived money fields of a stock entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockTotals {
    pub total_amount: Decimal,
    pub due_amount: Decimal,
}

impl StockTotals {
    pub fn compute(quantity: u32, buying_price: Decimal, paid_amount: Decimal) -> Self {
        let total_amount = total_amount(quantity, buying_price);
        Self {
            total_amount,
            due_amount: due_amount(total_amount, paid_amount),
        }
    }
}
