//! Page and column distribution.
//!
//! `paginate` cuts a problem list into fixed-capacity pages. A page rendered on the
//! triple-column template is further divided into three regions, either balanced
//! (`split_into_three_groups`, contiguous runs) or interleaved (`split_round_robin`).
//! Both are order-preserving partitions: nothing is dropped or duplicated.

use serde::Serialize;

use crate::errors::ConfigError;

/// Number of stacked regions on the triple-column template.
pub const REGION_COUNT: usize = 3;

/// One worksheet page. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub index: usize,
    pub items: Vec<T>,
}

/// Splits `items` into consecutive pages of `capacity`; the last page holds the rest.
/// An empty input yields no pages.
pub fn paginate<T: Clone>(items: &[T], capacity: usize) -> Result<Vec<Page<T>>, ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }

    Ok(items
        .chunks(capacity)
        .enumerate()
        .map(|(i, chunk)| Page {
            index: i + 1,
            items: chunk.to_vec(),
        })
        .collect())
}

/// Three contiguous groups with sizes `per, per, n - 2·per` (clamped), `per = ceil(n / 3)`.
///
/// Sizes are non-increasing and sum to `n`. The last group may be short or empty,
/// e.g. 10 items → 4, 4, 2 and 4 items → 2, 2, 0.
pub fn split_into_three_groups<T>(items: &[T]) -> [&[T]; REGION_COUNT] {
    let n = items.len();
    let per = n.div_ceil(REGION_COUNT);
    let first_end = per.min(n);
    let second_end = (2 * per).min(n);
    [
        &items[..first_end],
        &items[first_end..second_end],
        &items[second_end..],
    ]
}

/// Interleaved regions: region `r` holds the items whose page position is `r` mod 3.
pub fn split_round_robin<T: Clone>(items: &[T]) -> [Vec<T>; REGION_COUNT] {
    let mut regions: [Vec<T>; REGION_COUNT] = Default::default();
    for (i, item) in items.iter().enumerate() {
        regions[i % REGION_COUNT].push(item.clone());
    }
    regions
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sizes<T>(groups: &[&[T]; REGION_COUNT]) -> [usize; REGION_COUNT] {
        [groups[0].len(), groups[1].len(), groups[2].len()]
    }

    #[test]
    fn test_65_items_at_24_per_page() {
        let items: Vec<u32> = (1..=65).collect();
        let pages = paginate(&items, 24).unwrap();
        let page_sizes: Vec<usize> = pages.iter().map(|p| p.items.len()).collect();
        assert_eq!(page_sizes, vec![24, 24, 17]);
        assert_eq!(pages[0].index, 1);
        assert_eq!(pages[2].index, 3);
        assert_eq!(pages[2].items[0], 49);
    }

    #[test]
    fn test_exact_multiple_has_no_short_page() {
        let items: Vec<u32> = (0..48).collect();
        let pages = paginate(&items, 24).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.items.len() == 24));
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        let pages = paginate::<u32>(&[], 10).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(paginate(&[1, 2, 3], 0), Err(ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_ten_items_split_4_4_2() {
        let items: Vec<u32> = (1..=10).collect();
        let groups = split_into_three_groups(&items);
        assert_eq!(sizes(&groups), [4, 4, 2]);
        assert_eq!(groups[1], &[5, 6, 7, 8]);
        assert_eq!(groups[2], &[9, 10]);
    }

    #[test]
    fn test_small_splits() {
        assert_eq!(sizes(&split_into_three_groups::<u8>(&[])), [0, 0, 0]);
        assert_eq!(sizes(&split_into_three_groups(&[1])), [1, 0, 0]);
        assert_eq!(sizes(&split_into_three_groups(&[1, 2])), [1, 1, 0]);
        assert_eq!(sizes(&split_into_three_groups(&[1, 2, 3, 4])), [2, 2, 0]);
    }

    #[test]
    fn test_round_robin_interleaves() {
        let items: Vec<u32> = (0..7).collect();
        let regions = split_round_robin(&items);
        assert_eq!(regions[0], vec![0, 3, 6]);
        assert_eq!(regions[1], vec![1, 4]);
        assert_eq!(regions[2], vec![2, 5]);
    }

    proptest! {
        #[test]
        fn prop_pages_concatenate_to_input(
            items in proptest::collection::vec(any::<u16>(), 0..300),
            capacity in 1usize..50,
        ) {
            let pages = paginate(&items, capacity).unwrap();
            let rebuilt: Vec<u16> = pages.iter().flat_map(|p| p.items.clone()).collect();
            prop_assert_eq!(&rebuilt, &items);
            if let Some((last, full)) = pages.split_last() {
                prop_assert!(full.iter().all(|p| p.items.len() == capacity));
                prop_assert!(!last.items.is_empty() && last.items.len() <= capacity);
            }
            for (i, page) in pages.iter().enumerate() {
                prop_assert_eq!(page.index, i + 1);
            }
        }

        #[test]
        fn prop_three_groups_are_non_increasing_partition(
            items in proptest::collection::vec(any::<u16>(), 0..300),
        ) {
            let groups = split_into_three_groups(&items);
            let [g1, g2, g3] = sizes(&groups);
            prop_assert!(g1 >= g2 && g2 >= g3);
            prop_assert_eq!(g1 + g2 + g3, items.len());
            prop_assert_eq!(groups.concat(), items);
        }
    }
}
