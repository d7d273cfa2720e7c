//! Rules module - the coin merge table and the line merge primitive
//!
//! Coins fuse by value, not by doubling:
//! - Two nickels (5 + 5) make a dime (10)
//! - Two quarters (25 + 25) make a half dollar (50)
//! - Two half dollars (50 + 50) make a dollar (100)
//! - Five dimes in a row (10 x 5) make a half dollar (50)
//!
//! Dimes never fuse pairwise. The five-dime run needs a line of at least five
//! cells, so it never fires on the standard 4-wide board; it is kept for wider
//! grids (`Grid<5>` and up) where it applies as written.

use arrayvec::ArrayVec;

use crate::types::{Tile, EMPTY};

/// Pair rules: `(left, right) -> merged`
pub const PAIR_RULES: [(Tile, Tile, Tile); 3] = [(5, 5, 10), (25, 25, 50), (50, 50, 100)];

/// A run of `length` identical tiles that fuses into one `result` tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRule {
    pub tile: Tile,
    pub length: usize,
    pub result: Tile,
}

/// Five dimes make a half dollar
pub const FIVE_DIMES: RunRule = RunRule {
    tile: 10,
    length: 5,
    result: 50,
};

/// Look up the merge result for two adjacent tiles
///
/// # Examples
///
/// ```
/// use coin_fusion_core::rules::pair_merge;
///
/// assert_eq!(pair_merge(5, 5), Some(10));
/// assert_eq!(pair_merge(10, 10), None);
/// assert_eq!(pair_merge(5, 10), None);
/// ```
pub fn pair_merge(left: Tile, right: Tile) -> Option<Tile> {
    PAIR_RULES
        .iter()
        .find(|&&(a, b, _)| a == left && b == right)
        .map(|&(_, _, merged)| merged)
}

impl RunRule {
    /// Check if the run starts at the front of `tiles`
    pub fn matches(&self, tiles: &[Tile]) -> bool {
        tiles.len() >= self.length && tiles[..self.length].iter().all(|&t| t == self.tile)
    }
}

/// Slide one line toward index 0 and fuse coins in a single pass
///
/// Zeros are squeezed out, then the packed tiles are scanned left to right.
/// At each position the five-dime run is tried before the pair table. Tiles
/// consumed by a merge are never scanned again in the same pass, so a freshly
/// fused coin cannot fuse with its neighbour until the next move. The result
/// is padded with zeros on the right.
///
/// # Examples
///
/// ```
/// use coin_fusion_core::rules::merge_line;
///
/// assert_eq!(merge_line([5, 5, 0, 0]), [10, 0, 0, 0]);
/// assert_eq!(merge_line([25, 0, 25, 0]), [50, 0, 0, 0]);
/// assert_eq!(merge_line([5, 5, 5, 5]), [10, 10, 0, 0]);
/// assert_eq!(merge_line([10, 10, 10, 10, 10]), [50, 0, 0, 0, 0]);
/// ```
pub fn merge_line<const N: usize>(line: [Tile; N]) -> [Tile; N] {
    let packed: ArrayVec<Tile, N> = line.into_iter().filter(|&t| t != EMPTY).collect();

    let mut out = [EMPTY; N];
    let mut write = 0;
    let mut i = 0;
    while i < packed.len() {
        let rest = &packed[i..];
        let (tile, consumed) = if FIVE_DIMES.matches(rest) {
            (FIVE_DIMES.result, FIVE_DIMES.length)
        } else if let Some(merged) = rest.get(1).and_then(|&next| pair_merge(rest[0], next)) {
            (merged, 2)
        } else {
            (rest[0], 1)
        };
        out[write] = tile;
        write += 1;
        i += consumed;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table_lookup() {
        for (a, b, merged) in PAIR_RULES {
            assert_eq!(pair_merge(a, b), Some(merged));
        }
        assert_eq!(pair_merge(100, 100), None);
        assert_eq!(pair_merge(0, 0), None);
    }

    #[test]
    fn test_merge_compacts_without_merging() {
        assert_eq!(merge_line([0, 5, 0, 10]), [5, 10, 0, 0]);
        assert_eq!(merge_line([0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(merge_line([10, 10, 10, 10]), [10, 10, 10, 10]);
    }

    #[test]
    fn test_merge_basic_pairs() {
        assert_eq!(merge_line([5, 5, 0, 0]), [10, 0, 0, 0]);
        assert_eq!(merge_line([0, 50, 0, 50]), [100, 0, 0, 0]);
        assert_eq!(merge_line([25, 0, 25, 0]), [50, 0, 0, 0]);
    }

    #[test]
    fn test_merge_is_single_pass() {
        // 5+5 -> 10 must not then pick up another tile
        assert_eq!(merge_line([5, 5, 10, 0]), [10, 10, 0, 0]);
        // 25+25 -> 50 sits next to an existing 50 but does not fuse again
        assert_eq!(merge_line([25, 25, 50, 0]), [50, 50, 0, 0]);
        assert_eq!(merge_line([50, 50, 50, 50]), [100, 100, 0, 0]);
    }

    #[test]
    fn test_merge_leftmost_pair_wins() {
        assert_eq!(merge_line([5, 5, 5, 0]), [10, 5, 0, 0]);
        assert_eq!(merge_line([10, 5, 5, 5]), [10, 10, 5, 0]);
    }

    #[test]
    fn test_five_dimes_only_on_wide_lines() {
        assert_eq!(merge_line([10, 10, 10, 10, 10]), [50, 0, 0, 0, 0]);
        assert_eq!(merge_line([10, 0, 10, 10, 10, 10, 10]), [50, 10, 0, 0, 0, 0, 0]);
        assert_eq!(merge_line([5, 10, 10, 10, 10, 10]), [5, 50, 0, 0, 0, 0]);
        // A short run of dimes is left alone
        assert_eq!(merge_line([10, 10, 10, 10, 0]), [10, 10, 10, 10, 0]);
    }

    #[test]
    fn test_run_rule_matches() {
        assert!(FIVE_DIMES.matches(&[10, 10, 10, 10, 10, 5]));
        assert!(!FIVE_DIMES.matches(&[10, 10, 10, 10]));
        assert!(!FIVE_DIMES.matches(&[10, 10, 5, 10, 10]));
    }
}
