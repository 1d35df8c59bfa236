/// Size and share formatting utilities.
///
/// Sizes are measured as `u64` bytes and converted to floating-point
/// megabytes once, when a file is recorded. Truncation to whole MB only
/// happens at the display boundary.

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Convert a byte count to (binary) megabytes.
#[inline]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Truncate a megabyte value to whole MB for display.
#[inline]
pub fn whole_mb(mb: f64) -> u64 {
    mb.trunc() as u64
}

/// Format the percentage of large files for the `LShare` column.
///
/// Exact percentages print as an integer (`"50 %"`). Everything else is
/// rounded to two decimals and marked approximate (`"~ 33.33 %"`).
/// Exactness is decided with integer arithmetic so values such as 1/3
/// can never be mistaken for whole numbers through float rounding.
pub fn format_share(count_large: u64, count_all: u64) -> String {
    if count_all == 0 {
        return "0 %".to_string();
    }
    let scaled = count_large * 100;
    if scaled % count_all == 0 {
        return format!("{} %", scaled / count_all);
    }
    // `{:.2}` rounds the exact binary value, ties to even, then trailing
    // zeros are dropped to keep the shortest form ("12.5", not "12.50").
    let share = scaled as f64 / count_all as f64;
    let fixed = format!("{share:.2}");
    let rounded = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("~ {rounded} %")
}
