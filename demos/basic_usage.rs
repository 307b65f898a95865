// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_kit::prelude::*;

fn main() -> Result<(), NumericError> {
    println!("=== Decimal Kit Example ===\n");

    // Exact arithmetic on strings
    let subtotal = mul("19.99", "3")?;
    let tax = subtotal.times(&"0.0825".parse()?);
    let total = subtotal.plus(&tax);
    println!("subtotal: {}", subtotal);
    println!("tax:      {}", tax.to_fixed(2));
    println!("total:    {}", total.to_fixed(2));

    // Comparison is exact, trailing zeros do not matter
    println!("1.50 >= 1.5: {}", gte("1.50", "1.5")?);

    // Division keeps 20 fractional digits, half-up
    let third = div("1", "3")?;
    println!("1/3 = {} (~{})", third, third.to_fixed(2));

    // Errors are values
    match div("1", "0") {
        Ok(q) => println!("unexpected quotient {}", q),
        Err(e) => println!("1/0: {}", e),
    }
    match gte("abc", "1") {
        Ok(b) => println!("unexpected comparison {}", b),
        Err(e) => println!("abc >= 1: {}", e),
    }

    // Helpers
    println!("sha256(total) = {}", sha256(&total.to_string()));
    println!("minute bucket = {}", minute_ms(utc_time_ms()));

    Ok(())
}
