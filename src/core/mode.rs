//! Frequency helpers shared by the aggregators.

use std::collections::BTreeMap;

/// Most frequent value, ties broken toward the smallest candidate under
/// `T`'s ordering (numeric for numbers, lexicographic for strings). The
/// BTreeMap walk is ascending, and only a strictly greater count replaces
/// the current pick, so the smallest tied value wins. Returns `None` for
/// an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, u64)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, n)) if count <= *n => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value)
}

/// Per-value occurrence counts in descending frequency order; equally
/// frequent values stay in ascending value order (the sort is stable over
/// the BTreeMap's ordering).
pub fn value_counts<T, I>(values: I) -> Vec<(T, u64)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, u64> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(T, u64)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
