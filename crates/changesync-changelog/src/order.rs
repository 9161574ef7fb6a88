//! Version ordering
//!
//! Versions are compared naturally: runs of digits compare as numbers, so
//! `2024.11.10` sorts above `2024.11.2`. Non-digit runs and remaining ties
//! compare bytewise.

use std::cmp::Ordering;

use changesync_core::VersionTable;

/// Compare two version identifiers in natural (ascending) order
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let runs_a = split_runs(a);
    let runs_b = split_runs(b);

    for (run_a, run_b) in runs_a.iter().zip(runs_b.iter()) {
        let ord = if is_numeric(run_a) && is_numeric(run_b) {
            compare_numeric(run_a, run_b)
        } else {
            run_a.cmp(run_b)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    runs_a.len().cmp(&runs_b.len()).then_with(|| a.cmp(b))
}

/// Sort a table's entries descending, most recent version first
pub fn sorted_desc(table: &VersionTable) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = table.iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_versions(b, a));
    entries
}

/// Split a string into alternating digit and non-digit runs
fn split_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev_digit = None;

    for (index, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        if prev_digit.is_some_and(|prev| prev != digit) {
            runs.push(&s[start..index]);
            start = index;
        }
        prev_digit = Some(digit);
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }
    runs
}

fn is_numeric(run: &str) -> bool {
    run.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit runs by value without parsing them.
///
/// After stripping leading zeros the longer run is larger; equal-length runs
/// compare lexically, which for digits equals numeric order.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
