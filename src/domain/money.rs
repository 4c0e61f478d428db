//! Monetary types for volume and profit representation.

use rust_decimal::Decimal;

/// Traded volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Signed profit and loss.
pub type Pnl = Decimal;
