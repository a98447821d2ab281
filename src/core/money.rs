use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places the Pix API expects in `valor.original`
pub const BRL_SCALE: u32 = 2;

/// Largest amount the Pix API accepts (`\d{1,10}\.\d{2}`)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Formats a BRL amount with exactly two fraction digits.
///
/// Extra precision is rounded half away from zero; shorter values are
/// zero-padded (`19.9` becomes `"19.90"`, `100` becomes `"100.00"`).
pub fn format_brl(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(BRL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(BRL_SCALE);
    rounded.to_string()
}

/// Validates that an amount can be charged
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount <= Decimal::ZERO {
        return Err(format!("amount must be greater than zero, got {}", amount));
    }

    let rounded =
        amount.round_dp_with_strategy(BRL_SCALE, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        return Err(format!("amount {} rounds to zero", amount));
    }

    if rounded > MAX_AMOUNT {
        return Err(format!(
            "amount {} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        ));
    }

    Ok(())
}
