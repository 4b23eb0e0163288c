//! Station pairing.
//!
//! Mirror pairing matches the lowest operational station with the highest,
//! the second lowest with the second highest, and so on inward. An odd
//! station out in the middle works alone. On a line that supports
//! accommodation, accommodated stations are self-paired first and the rest
//! are mirror paired.

use std::collections::BTreeSet;

use crate::domain::{Line, LineConfiguration, Pair, Station, StationSet};

/// Stations in `universe` that are not down, ascending.
///
/// Down stations outside the universe are ignored.
pub fn operational_stations(
    universe: &StationSet,
    non_operational: &BTreeSet<Station>,
) -> Vec<Station> {
    universe
        .iter()
        .filter(|station| !non_operational.contains(station))
        .collect()
}

/// Pair stations outside-in.
///
/// The input is sorted and deduplicated first, so the result depends only on
/// the set of stations given. Pairs come out in generation order, ascending
/// by their lower endpoint, with the self-paired middle station (if any) last.
pub fn mirror_pair(stations: impl IntoIterator<Item = Station>) -> Vec<Pair> {
    let sorted: Vec<Station> = stations
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let n = sorted.len();

    let mut pairs: Vec<Pair> = sorted
        .iter()
        .zip(sorted.iter().rev())
        .take(n / 2)
        .map(|(&low, &high)| Pair::new(low, high))
        .collect();

    if n % 2 == 1 {
        pairs.push(Pair::solo(sorted[n / 2]));
    }

    pairs
}

/// Pair the operational stations of one line.
///
/// For a line that supports accommodation, every accommodated station that is
/// also operational becomes a self-pair, listed first in ascending order. An
/// accommodated station that is down is not paired at all. Remaining stations
/// are mirror paired. Other lines ignore `fixed`.
///
/// Every operational station appears in exactly one pair.
pub fn generate_pairs(
    line: Line,
    universe: &StationSet,
    non_operational: &BTreeSet<Station>,
    fixed: &BTreeSet<Station>,
) -> Vec<Pair> {
    let operational = operational_stations(universe, non_operational);
    if operational.is_empty() {
        return Vec::new();
    }

    if !line.supports_accommodation() {
        return mirror_pair(operational);
    }

    let (accommodated, remaining): (Vec<Station>, Vec<Station>) = operational
        .into_iter()
        .partition(|station| fixed.contains(station));

    let mut pairs: Vec<Pair> = accommodated.into_iter().map(Pair::solo).collect();
    pairs.extend(mirror_pair(remaining));
    pairs
}

/// Pair a line according to its configuration.
pub fn pairs_for(universe: &StationSet, config: &LineConfiguration) -> Vec<Pair> {
    generate_pairs(config.line(), universe, config.non_operational(), config.fixed())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn station_vec() -> impl Strategy<Value = Vec<Station>> {
        prop::collection::vec(1u8..=40, 0..30)
            .prop_map(|ns| ns.into_iter().filter_map(|n| Station::new(n).ok()).collect())
    }

    fn station_set() -> impl Strategy<Value = BTreeSet<Station>> {
        station_vec().prop_map(|v| v.into_iter().collect())
    }

    /// Count how many times each station appears across all pairs.
    fn appearances(pairs: &[Pair]) -> std::collections::BTreeMap<Station, usize> {
        let mut counts = std::collections::BTreeMap::new();
        for pair in pairs {
            for station in pair.stations() {
                *counts.entry(station).or_insert(0) += 1;
            }
        }
        counts
    }

    proptest! {
        /// ceil(n/2) pairs, each station exactly once, nothing invented
        #[test]
        fn mirror_is_total(stations in station_set()) {
            let pairs = mirror_pair(stations.iter().copied());
            prop_assert_eq!(pairs.len(), stations.len().div_ceil(2));

            let counts = appearances(&pairs);
            prop_assert_eq!(counts.len(), stations.len());
            prop_assert!(counts.values().all(|&c| c == 1));
            prop_assert!(counts.keys().all(|s| stations.contains(s)));
        }

        /// Permuting or repeating the input does not change the output
        #[test]
        fn mirror_is_order_independent(mut input in station_vec()) {
            let forward = mirror_pair(input.clone());
            input.reverse();
            let mut doubled = input.clone();
            doubled.extend(input.iter().copied());
            prop_assert_eq!(&forward, &mirror_pair(input));
            prop_assert_eq!(&forward, &mirror_pair(doubled));
        }

        /// Endpoints are low-high and lower endpoints ascend
        #[test]
        fn mirror_ordering(stations in station_set()) {
            let pairs = mirror_pair(stations);
            prop_assert!(pairs.iter().all(|p| p.low() <= p.high()));
            prop_assert!(pairs.windows(2).all(|w| w[0].low() < w[1].low()));
            prop_assert!(pairs.iter().rev().skip(1).all(|p| !p.is_solo()));
        }

        /// Every operational station appears exactly once on every line
        #[test]
        fn generate_is_total(
            line in prop::sample::select(Line::ALL.to_vec()),
            down in station_set(),
            fixed in station_set(),
        ) {
            let universe = StationSet::default();
            let pairs = generate_pairs(line, &universe, &down, &fixed);
            let operational = operational_stations(&universe, &down);

            let counts = appearances(&pairs);
            prop_assert_eq!(counts.len(), operational.len());
            prop_assert!(counts.values().all(|&c| c == 1));
            prop_assert!(operational.iter().all(|s| counts.contains_key(s)));
        }

        /// Accommodated operational stations are self-paired up front
        #[test]
        fn accommodated_self_pairs(down in station_set(), fixed in station_set()) {
            let universe = StationSet::default();
            let pairs = generate_pairs(Line::C, &universe, &down, &fixed);

            let valid: Vec<Station> = fixed
                .iter()
                .copied()
                .filter(|s| universe.contains(*s) && !down.contains(s))
                .collect();

            let leading: Vec<Pair> = valid.iter().map(|&s| Pair::solo(s)).collect();
            prop_assert_eq!(&pairs[..valid.len()], &leading[..]);

            for pair in &pairs[valid.len()..] {
                prop_assert!(!valid.contains(&pair.low()));
                prop_assert!(!valid.contains(&pair.high()));
            }

            let remaining = operational_stations(&universe, &down).len() - valid.len();
            prop_assert_eq!(pairs.len(), valid.len() + remaining.div_ceil(2));
        }
    }
}
