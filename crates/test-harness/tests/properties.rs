//! Property-based tests for list navigation
//!
//! These tests verify navigation invariants across arbitrary row sets and
//! starting selections.

use std::collections::BTreeSet;
use std::time::Instant;

use proptest::prelude::*;
use test_harness::fixtures::{driver, fast_config, list_context};
use test_harness::HeadlessGui;
use tui_driver::{DriverConfig, Matcher};

fn rows() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{3,8}", 1..12)
        .prop_map(|set: BTreeSet<String>| set.into_iter().collect())
}

fn quick_failure_config() -> DriverConfig {
    DriverConfig {
        timeout_ms: 15,
        ..fast_config()
    }
}

proptest! {
    /// A unique match always ends selected, reached by |target - start|
    /// presses all in one direction
    #[test]
    fn unique_match_is_reached_in_one_direction(
        lines in rows(),
        start_seed in any::<prop::sample::Index>(),
        target_seed in any::<prop::sample::Index>(),
    ) {
        let start = start_seed.index(lines.len());
        let target = target_seed.index(lines.len());
        let gui = HeadlessGui::new(list_context("files", lines.clone(), start));
        let t = driver(&gui, &fast_config());

        t.navigate_to_list_item(&Matcher::equals(lines[target].clone())).unwrap();

        let pressed = gui.pressed_keys();
        prop_assert_eq!(gui.selected_line_idx(), Some(target));
        prop_assert_eq!(pressed.len(), start.abs_diff(target));
        let expected_key = if target > start { "<down>" } else { "<up>" };
        prop_assert!(pressed.iter().all(|k| k == expected_key), "mixed directions: {:?}", pressed);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// No match: fails after the timeout, naming the matcher and dumping
    /// every visible row
    #[test]
    fn missing_match_dumps_every_row(lines in rows()) {
        let gui = HeadlessGui::new(list_context("files", lines.clone(), 0));
        let config = quick_failure_config();
        let t = driver(&gui, &config);
        let matcher = Matcher::contains("0");

        let started = Instant::now();
        let err = t.navigate_to_list_item(&matcher).unwrap_err();

        prop_assert!(started.elapsed() >= config.timeout());
        let message = err.message();
        prop_assert!(message.contains(&matcher.name()));
        prop_assert!(message.ends_with(&lines.join("\n")), "{}", message);
        prop_assert!(gui.pressed_keys().is_empty());
    }

    /// Several matches: the count and the matching rows verbatim
    #[test]
    fn ambiguous_match_reports_count_and_rows(
        lines in rows(),
        tagged in prop::collection::btree_set(0usize..12, 2..5),
    ) {
        let tagged: Vec<usize> = tagged.into_iter().filter(|i| *i < lines.len()).collect();
        prop_assume!(tagged.len() >= 2);
        let lines: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| if tagged.contains(&i) { format!("{l} #") } else { l.clone() })
            .collect();

        let gui = HeadlessGui::new(list_context("files", lines.clone(), 0));
        let t = driver(&gui, &quick_failure_config());

        let err = t.navigate_to_list_item(&Matcher::contains("#")).unwrap_err();

        let message = err.message();
        let header = format!("Found {} matches for `contains '#'`", tagged.len());
        prop_assert!(message.starts_with(&header), "{}", message);
        let matching: Vec<&str> = tagged.iter().map(|i| lines[*i].as_str()).collect();
        prop_assert!(message.ends_with(&matching.join("\n")), "{}", message);
    }
}
