//! Magnitude-prefixed number formatting for axis labels and annotations

/// SI prefixes for successive powers of 1000.
const BASE10_PREFIXES: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// Binary prefixes for successive powers of 1024.
const BASE2_PREFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];

fn with_prefix(value: f64, decimal_places: usize, step: f64, prefixes: &[&str]) -> String {
    if !value.is_finite() || value == 0.0 {
        return format!("{value:.decimal_places$}");
    }

    let mut scaled = value;
    let mut index = 0;
    while scaled.abs() >= step && index + 1 < prefixes.len() {
        scaled /= step;
        index += 1;
    }

    format!("{scaled:.decimal_places$}{}", prefixes[index])
}

/// Format with an SI magnitude prefix, e.g. `6.4e9` to `"6.4G"`.
pub fn with_base10_prefix(value: f64, decimal_places: usize) -> String {
    with_prefix(value, decimal_places, 1000.0, &BASE10_PREFIXES)
}

/// Format with a binary magnitude prefix, e.g. `65536.0` to `"64Ki"`.
pub fn with_base2_prefix(value: f64, decimal_places: usize) -> String {
    with_prefix(value, decimal_places, 1024.0, &BASE2_PREFIXES)
}
