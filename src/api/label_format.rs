/// Rounds a value and renders it with `,` digit grouping ("82,314").
///
/// Plain western three-digit grouping, no currency symbol and no fraction
/// digits; anything locale-specific stays with the host application.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::format_grouped;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(82314.0), "82,314");
        assert_eq!(format_grouped(1834.0), "1,834");
        assert_eq!(format_grouped(997.4), "997");
        assert_eq!(format_grouped(1_000_000.0), "1,000,000");
    }

    #[test]
    fn rounds_before_grouping() {
        assert_eq!(format_grouped(999.6), "1,000");
        assert_eq!(format_grouped(-1250.5), "-1,251");
    }

    #[test]
    fn non_finite_renders_empty() {
        assert_eq!(format_grouped(f64::NAN), "");
        assert_eq!(format_grouped(f64::INFINITY), "");
    }
}
