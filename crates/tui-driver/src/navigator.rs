//! List navigation
//!
//! Finds the single visible row matching a matcher and moves the selection
//! onto it with next/previous key presses.
//!
//! Only the rows rendered in the viewport are scanned. A target scrolled
//! out of view is reported as not found rather than searched for.

use crate::driver::TestDriver;
use crate::error::DriverError;
use crate::matcher::Matcher;
use crate::modes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Key presses needed to move the selection from one row to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moves {
    pub direction: Direction,
    pub count: usize,
}

/// Plan the moves from `selected` to `target`; `None` if already there
pub fn plan_moves(selected: usize, target: usize) -> Option<Moves> {
    if target > selected {
        Some(Moves {
            direction: Direction::Next,
            count: target - selected,
        })
    } else if target < selected {
        Some(Moves {
            direction: Direction::Previous,
            count: selected - target,
        })
    } else {
        None
    }
}

/// Index of the only line matching `matcher`.
///
/// Zero or several matches produce the diagnostic for that attempt.
pub fn find_unique_match<S: AsRef<str>>(
    lines: &[S],
    matcher: &Matcher,
) -> Result<usize, String> {
    let lines: Vec<&str> = lines.iter().map(S::as_ref).collect();
    let matches: Vec<(usize, &str)> = lines
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, line)| matcher.test(line))
        .collect();

    match matches.as_slice() {
        [(index, _)] => Ok(*index),
        [] => Err(format!(
            "Could not find item matching: {}. Lines:\n{}",
            matcher.name(),
            lines.join("\n")
        )),
        many => Err(format!(
            "Found {} matches for `{}`, expected only a single match. Matching lines:\n{}",
            many.len(),
            matcher.name(),
            many.iter().map(|(_, line)| *line).collect::<Vec<_>>().join("\n")
        )),
    }
}

impl TestDriver {
    /// Move the selection of the focused list onto the row matching
    /// `matcher`.
    ///
    /// Fails if the focused context never becomes a list, if no single
    /// visible row matches before the timeout (ambiguous matches keep
    /// retrying like missing ones), or if the selection does not land on
    /// the row after moving.
    pub fn navigate_to_list_item(&self, matcher: &Matcher) -> Result<(), DriverError> {
        self.in_list_context()?;

        let selected = self.poll(|| {
            let context = self.gui().current_context();
            context
                .as_list()
                .map(|list| list.selected_line_idx)
                .ok_or_else(|| modes::is_list(&context).1)
        })?;

        let target = self.poll(|| {
            let context = self.gui().current_context();
            match context.as_list() {
                Some(list) => find_unique_match(&list.lines, matcher),
                None => Err(modes::is_list(&context).1),
            }
        })?;

        let view = self.views().current();
        if let Some(moves) = plan_moves(selected, target) {
            tracing::debug!(
                selected,
                target,
                ?moves,
                matcher = %matcher,
                "navigating to list item"
            );
            for _ in 0..moves.count {
                match moves.direction {
                    Direction::Next => view.select_next_item(),
                    Direction::Previous => view.select_previous_item(),
                }
            }
        }
        view.selected_line(matcher)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRUIT: [&str; 3] = ["apple", "banana", "cherry"];

    #[test]
    fn plan_moves_forward_and_back() {
        assert_eq!(
            plan_moves(0, 2),
            Some(Moves {
                direction: Direction::Next,
                count: 2,
            })
        );
        assert_eq!(
            plan_moves(5, 1),
            Some(Moves {
                direction: Direction::Previous,
                count: 4,
            })
        );
        assert_eq!(plan_moves(3, 3), None);
    }

    #[test]
    fn unique_match_returns_index() {
        assert_eq!(
            find_unique_match(&FRUIT, &Matcher::contains("cherry")),
            Ok(2)
        );
        assert_eq!(find_unique_match(&FRUIT, &Matcher::equals("apple")), Ok(0));
    }

    #[test]
    fn no_match_dumps_all_lines() {
        let err = find_unique_match(&FRUIT, &Matcher::contains("kiwi")).unwrap_err();
        assert_eq!(
            err,
            "Could not find item matching: contains 'kiwi'. Lines:\napple\nbanana\ncherry"
        );
    }

    #[test]
    fn ambiguous_match_lists_only_matching_lines() {
        let err = find_unique_match(&FRUIT, &Matcher::contains("a")).unwrap_err();
        assert!(err.starts_with("Found 2 matches for `contains 'a'`"));
        assert!(err.ends_with("Matching lines:\napple\nbanana"), "{err}");

        let err = find_unique_match(&FRUIT, &Matcher::contains("e")).unwrap_err();
        assert!(err.starts_with("Found 2 matches"));
        assert!(err.ends_with("Matching lines:\napple\ncherry"), "{err}");
    }

    #[test]
    fn empty_list_is_not_found() {
        let lines: [&str; 0] = [];
        let err = find_unique_match(&lines, &Matcher::anything()).unwrap_err();
        assert_eq!(err, "Could not find item matching: anything. Lines:\n");
    }
}
