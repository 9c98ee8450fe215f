use proptest::prelude::ProptestConfig;

/// Shared proptest configuration for domain property tests.
///
/// `PROPTEST_CASES` overrides the case count (CI runs more).
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(128);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
