//! Property tests for URL extraction.

use proptest::prelude::*;

use deployurl::{extract_after_marker, extract_tail, DeployError, MARKER};

fn noise_line() -> impl Strategy<Value = String> {
    // Printable lines that are never the marker itself.
    proptest::string::string_regex("[A-Za-z0-9 _:.✔]{0,40}")
        .unwrap()
        .prop_filter("not the marker", |s| s != MARKER)
}

fn url() -> impl Strategy<Value = String> {
    proptest::string::string_regex("https://[a-z0-9-]{1,20}\\.deno\\.dev").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the line after the marker, minus " - ", is always recovered.
    #[test]
    fn property_marker_recovers_url(
        before in proptest::collection::vec(noise_line(), 0..=6),
        after in proptest::collection::vec(noise_line(), 0..=6),
        url in url(),
    ) {
        let mut lines = before;
        lines.push(MARKER.to_string());
        lines.push(format!(" - {}", url));
        lines.extend(after);

        let extracted = extract_after_marker(&lines.join("\n")).unwrap();
        prop_assert_eq!(extracted, url);
    }

    /// PROPERTY: without a marker line the extractor errors instead of panicking.
    #[test]
    fn property_marker_absent_is_error(
        lines in proptest::collection::vec(noise_line(), 0..=10),
    ) {
        let result = extract_after_marker(&lines.join("\n"));
        let is_marker_not_found = matches!(result, Err(DeployError::MarkerNotFound { .. }));
        prop_assert!(is_marker_not_found);
    }

    /// PROPERTY: the tail extractor keeps the prefix verbatim and glues on "url=".
    #[test]
    fn property_tail_keeps_prefix(
        before in proptest::collection::vec(noise_line(), 0..=6),
        prefix in "[A-Za-z ]{0,20}",
        url in url(),
    ) {
        prop_assume!(!prefix.contains(" - ") && !prefix.ends_with(' '));

        let mut lines = before;
        lines.push(format!("{} - {}", prefix, url));

        let extracted = extract_tail(&lines.join("\n"));
        prop_assert_eq!(extracted, format!("{}url={}", prefix, url));
    }

    /// PROPERTY: the tail extractor only ever looks at the last line.
    #[test]
    fn property_tail_ignores_earlier_lines(
        before in proptest::collection::vec(noise_line(), 0..=6),
        last in noise_line(),
    ) {
        prop_assume!(!last.contains(" - "));

        let mut lines = before;
        lines.push(last.clone());

        prop_assert_eq!(extract_tail(&lines.join("\n")), last);
    }
}
