const METRIC_PREFIXES: [&str; 8] = ["k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Abbreviate a count with metric prefixes, e.g. `1000 -> "1k"`, `1500 -> "1.5k"`.
///
/// Values below 1000 are printed as-is. Scaled values under 10 keep one
/// decimal unless it is zero, and a value that rounds up to 1000 is promoted
/// to the next prefix (`999_999 -> "1M"`).
pub fn metric(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let abs = n.unsigned_abs() as f64;

    for (index, prefix) in METRIC_PREFIXES.iter().enumerate().rev() {
        let limit = 1000f64.powi(index as i32 + 1);
        if abs < limit {
            continue;
        }

        let scaled = abs / limit;
        if scaled < 10.0 {
            let tenths = tenths_half_up(scaled);
            if tenths % 10 != 0 {
                return format!("{}{}.{}{}", sign, tenths / 10, tenths % 10, prefix);
            }
        }

        let rounded = scaled.round();
        return match METRIC_PREFIXES.get(index + 1) {
            Some(next) if rounded >= 1000.0 => format!("{}1{}", sign, next),
            _ => format!("{}{}{}", sign, rounded as u64, prefix),
        };
    }

    n.to_string()
}

/// `value` rounded to one decimal, half-up on its exact binary value, in tenths.
///
/// `{:.1}` breaks exact ties (`1.25`) to even; badge counts round them up.
/// Values that only look like ties (`1.15` is stored as `1.1499...`) still
/// round down.
fn tenths_half_up(value: f64) -> u64 {
    // 52 fraction digits print any f64 >= 1 exactly
    let exact = format!("{:.52}", value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let whole = whole
        .bytes()
        .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));

    let mut fraction = fraction.bytes().map(|digit| u64::from(digit - b'0'));
    let first = fraction.next().unwrap_or(0);
    let round_up = fraction.next().is_some_and(|digit| digit >= 5);

    whole * 10 + first + u64::from(round_up)
}
