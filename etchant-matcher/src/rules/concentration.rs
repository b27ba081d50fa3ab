//! Nital concentration patterns read from lowercased etchant names.

use std::sync::LazyLock;

use regex::Regex;

#[expect(clippy::expect_used, reason = "pattern is a literal exercised by tests")]
static STRONG_FOR_HARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nital.*[5-9]|nital.*8|nital.*10|[5-9]% nital|8% nital|10% nital")
        .expect("valid strong nital regex")
});

#[expect(clippy::expect_used, reason = "pattern is a literal exercised by tests")]
static DILUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nital.*[2-3]|2% nital|3% nital").expect("valid dilute nital regex")
});

#[expect(clippy::expect_used, reason = "pattern is a literal exercised by tests")]
static AGGRESSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nital.*[8-9]|nital.*10|8% nital|10% nital").expect("valid aggressive nital regex")
});

/// Nital at 5% or more, suited to hard material.
pub(super) fn is_strong(name: &str) -> bool {
    STRONG_FOR_HARD.is_match(name)
}

/// Nital at 2-3%.
pub(super) fn is_dilute(name: &str) -> bool {
    DILUTE.is_match(name)
}

/// Nital at 8% or more, too aggressive for soft material.
pub(super) fn is_aggressive(name: &str) -> bool {
    AGGRESSIVE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nital 5%", true, false, false)]
    #[case("nital 2%", false, true, false)]
    #[case("3% nital", false, true, false)]
    #[case("nital 10%", true, false, true)]
    #[case("8% nital", true, false, true)]
    #[case("picral 4%", false, false, false)]
    #[case("nital", false, false, false)]
    fn classifies_concentration(
        #[case] name: &str,
        #[case] strong: bool,
        #[case] dilute: bool,
        #[case] aggressive: bool,
    ) {
        assert_eq!(is_strong(name), strong);
        assert_eq!(is_dilute(name), dilute);
        assert_eq!(is_aggressive(name), aggressive);
    }
}
