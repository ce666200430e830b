use std::cmp::Reverse;

use volara_core::criteria::SortKey;
use volara_core::duration::duration_minutes;
use volara_core::offer::FlightOffer;

/// Reorders an already-fetched result list without touching the input.
///
/// price: ascending. duration: ascending by total minutes parsed from the
/// formatted string, unparseable values last. score: descending. Stable
/// for equal keys, total, and a pure reordering: the multiset of offers
/// is preserved.
pub fn resort(offers: &[FlightOffer], key: SortKey) -> Vec<FlightOffer> {
    let mut sorted = offers.to_vec();
    match key {
        SortKey::Price => sorted.sort_by_key(|o| o.price),
        SortKey::Duration => {
            sorted.sort_by_key(|o| duration_minutes(&o.duration).unwrap_or(u32::MAX))
        }
        SortKey::Score => sorted.sort_by_key(|o| Reverse(o.score)),
    }
    sorted
}
