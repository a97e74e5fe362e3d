//! Bounded candidate set for the k best training rows seen so far.

/// Resets `candidates` to exactly `k` sentinel slots.
///
/// Each slot holds `(f64::INFINITY, placeholder)`. The placeholder label is
/// never voted on: callers guarantee `k <= n_train`, so every sentinel is
/// displaced by a real training row before the tally runs.
pub(crate) fn reset_candidates<L: Copy>(
    candidates: &mut Vec<(f64, L)>,
    k: usize,
    placeholder: L,
) {
    candidates.clear();
    candidates.resize(k, (f64::INFINITY, placeholder));
}

/// Offers a `(distance, label)` pair to the candidate set.
///
/// The set stays sorted ascending by distance. A candidate is accepted only
/// when it is strictly closer than the current worst slot; an equal distance
/// never displaces it. Among accepted equal-distance candidates the stable
/// sort keeps insertion order, so the earlier training row keeps the better
/// slot — callers scan training rows in index order, making ties resolve to
/// the lower training index.
pub(crate) fn offer<L: Copy>(candidates: &mut [(f64, L)], distance: f64, label: L) {
    let worst = candidates.len() - 1;
    if distance < candidates[worst].0 {
        candidates[worst] = (distance, label);
        // Stable sort; comparator orders by distance only.
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    }
}
