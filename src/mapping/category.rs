/// Normalizes a raw category string: trim plus lowercase. Missing categories
/// normalize to the empty string, which no filter accepts.
pub fn normalize_category(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_lowercase()
}

/// The library keeps strength and cardio exercises only; stretching,
/// plyometrics, olympic weightlifting and the rest are filtered out.
pub fn is_included_category(category: &str) -> bool {
    matches!(category, "strength" | "cardio")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("strength", true)]
    #[case("cardio", true)]
    #[case("olympic weightlifting", false)]
    #[case("stretching", false)]
    #[case("", false)]
    fn filters_by_category(#[case] category: &str, #[case] included: bool) {
        assert_eq!(is_included_category(category), included);
    }

    #[rstest]
    #[case(Some("  Strength "), "strength")]
    #[case(Some("CARDIO"), "cardio")]
    #[case(None, "")]
    fn normalizes_before_filtering(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize_category(raw), expected);
    }
}
