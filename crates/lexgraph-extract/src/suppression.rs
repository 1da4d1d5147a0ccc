//! Cross-tier deduplication of citation candidates.

use std::collections::HashSet;

use crate::citation::Citation;

/// Reduce raw candidates from all tiers to the final citation list.
///
/// Candidates are visited by tier, then by text position. A moment-level
/// candidate is kept unless its `(section, moment)` pair was already kept.
/// A section-level candidate is kept unless its section was already kept at
/// any level. The result is in visiting order.
pub fn suppress(mut candidates: Vec<Citation>) -> Vec<Citation> {
    candidates.sort_by_key(|c| (c.tier, c.start));

    let mut sections: HashSet<u32> = HashSet::new();
    let mut pairs: HashSet<(u32, u32)> = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());

    for citation in candidates {
        let keep = match citation.moment {
            Some(moment) => {
                let fresh = pairs.insert((citation.section, moment));
                sections.insert(citation.section);
                fresh
            }
            None => sections.insert(citation.section),
        };
        if keep {
            kept.push(citation);
        }
    }
    kept
}
