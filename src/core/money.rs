//! Monetary derivation and exact-decimal amount encoding.
//!
//! Derived charges on an invoice follow a fixed formula: a 4% fee on the
//! payment amount, a 10% surcharge on that fee (the tax is 110% of the fee,
//! not 10% of the payment), and a grand total of all three. Amounts are
//! stored as exact decimals so that re-reading a row reproduces the value
//! that was written.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};

/// Fee charged on the payment amount (4%)
pub const FEE_RATE: f64 = 0.04;

/// Tax multiplier applied to the fee (fee plus a 10% surcharge)
pub const TAX_MULTIPLIER: f64 = 1.10;

/// Amounts derived from a payment amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedAmounts {
    pub fee_amount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
}

/// Compute fee, tax, and total for a payment amount.
///
/// The order is significant: the tax is computed on the fee, not on the
/// payment amount.
pub fn derive_amounts(payment_amount: f64) -> DerivedAmounts {
    let fee_amount = payment_amount * FEE_RATE;
    let tax_amount = fee_amount * TAX_MULTIPLIER;
    let total_amount = payment_amount + fee_amount + tax_amount;

    DerivedAmounts {
        fee_amount,
        tax_amount,
        total_amount,
    }
}

/// Convert a floating amount into an exact decimal for storage.
///
/// Fails for values with no decimal representation (NaN, infinities).
/// Decoding the result reproduces the input bit-for-bit.
pub fn encode_amount(amount: f64) -> Result<Decimal> {
    if !amount.is_finite() {
        return Err(AppError::encoding(format!(
            "amount {} cannot be represented as a decimal",
            amount
        )));
    }

    // Go through the float's shortest round-trip decimal form so values
    // carrying binary representation artifacts (400.0 * 1.10 ends in
    // ...0006) keep every digit. Decimal::from_f64 rounds to ~16
    // significant digits and would drop the last one.
    amount.to_string().parse::<Decimal>().map_err(|_| {
        AppError::encoding(format!(
            "amount {} cannot be represented as a decimal",
            amount
        ))
    })
}

/// Convert a stored decimal amount back into a floating amount.
pub fn decode_amount(amount: Decimal) -> Result<f64> {
    amount.to_f64().ok_or_else(|| {
        AppError::encoding(format!("amount {} cannot be represented as a float", amount))
    })
}
