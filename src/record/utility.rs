/// Computes the arithmetic mean of a slice of marks. Returns 0.0 for empty input.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    sum as f64 / values.len() as f64
}

/// Rounds to 2 decimal places for display. Storage keeps full precision.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid rendering "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a rounded average in its shortest form, always keeping one
/// fractional digit (`90.0`, `51.67`, `85.5`).
pub fn format_average(value: f64) -> String {
    let s = round2(value).to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

/// Joins marks with a comma and a space: `85, 90, 95`.
pub fn join_marks(marks: &[i64]) -> String {
    marks
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
