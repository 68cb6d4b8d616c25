use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal with exactly two fractional digits, rounding half away
/// from zero: 1234.5 -> "1234.50". Never renders "-0.00".
pub fn amount(val: Decimal) -> String {
    let mut rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    // rescale cannot add places once the mantissa is too wide; pad by hand then
    rounded.rescale(2);
    let text = rounded.to_string();
    match rounded.scale() {
        0 => format!("{text}.00"),
        1 => format!("{text}0"),
        _ => text,
    }
}

/// "1 row" / "3 rows"
pub fn rows(n: usize) -> String {
    if n == 1 {
        "1 row".to_string()
    } else {
        format!("{n} rows")
    }
}
