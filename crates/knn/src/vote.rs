//! Majority-vote tally over candidate labels.

use std::collections::BTreeMap;

/// Inserts every distinct label in `labels` into `tally` with count zero.
///
/// Existing keys are dropped first. The full label domain must be present —
/// zero-count labels participate in tie resolution during the winner scan.
pub(crate) fn build_tally<L: Ord + Copy>(tally: &mut BTreeMap<L, usize>, labels: &[L]) {
    tally.clear();
    for &label in labels {
        tally.insert(label, 0);
    }
}

/// Resets every count in `tally` to zero, keeping the key domain.
pub(crate) fn reset_tally<L: Ord + Copy>(tally: &mut BTreeMap<L, usize>) {
    for count in tally.values_mut() {
        *count = 0;
    }
}

/// Returns the label with the strictly highest vote count.
///
/// Scans labels in ascending order (`BTreeMap` iteration order) and replaces
/// the incumbent only on a strictly greater count, so a vote tie resolves to
/// the lowest-valued label.
///
/// Returns `None` for an empty tally; callers guarantee a non-empty label
/// domain.
pub(crate) fn winner<L: Ord + Copy>(tally: &BTreeMap<L, usize>) -> Option<L> {
    let mut best: Option<(L, usize)> = None;
    for (&label, &count) in tally {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}
