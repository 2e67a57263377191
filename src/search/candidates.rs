//! Candidate enumeration order
//!
//! Iterative rendition of the order in which the finder evaluates
//! candidates. For `[0, 1, 2, 3, 4]`:
//!
//! ```text
//! [0, 1, 2, 3, 4]
//! [1, 2, 3, 4]   [0, 2, 3, 4]   [0, 1, 3, 4]   [0, 1, 2, 4]   [0, 1, 2, 3]
//! [2, 3, 4]      [1, 3, 4]      [1, 2, 4]      [1, 2, 3]      [0, 3, 4] ...
//! ...
//! [4]            [3]            [2]            [1]            [0]
//! ```
//!
//! The empty subsequence is never produced.

use crate::search::types::DeletionCombination;

/// Total number of candidates for a sequence of `len` items (`2^len - 1`)
///
/// Saturates at `u64::MAX` for very long sequences.
pub fn candidate_count(len: usize) -> u64 {
    if len >= 64 {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// Iterator over deletion combinations in evaluation order
#[derive(Debug, Clone)]
pub struct Candidates {
    len: usize,
    current: Option<Vec<usize>>,
    done: bool,
}

impl Candidates {
    /// Enumerate candidates for a sequence of `len` items
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            done: len == 0,
        }
    }

    /// Step `positions` to the next combination of the same size, if any
    fn advance_within_level(&self, positions: &mut [usize]) -> bool {
        let k = positions.len();
        for i in (0..k).rev() {
            if positions[i] < self.len - k + i {
                positions[i] += 1;
                for j in i + 1..k {
                    positions[j] = positions[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Candidates {
    type Item = DeletionCombination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(mut positions) = self.current.take() else {
            self.current = Some(Vec::new());
            return Some(DeletionCombination::none());
        };

        if !self.advance_within_level(&mut positions) {
            let deletions = positions.len() + 1;
            // Never delete every item
            if deletions >= self.len {
                self.done = true;
                return None;
            }
            positions = (0..deletions).collect();
        }

        let combination = DeletionCombination::new(positions.clone());
        self.current = Some(positions);
        Some(combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(len: usize) -> Vec<Vec<usize>> {
        let items: Vec<usize> = (0..len).collect();
        Candidates::new(len).map(|c| c.apply(&items)).collect()
    }

    #[test]
    fn test_empty_sequence_has_no_candidates() {
        assert_eq!(Candidates::new(0).count(), 0);
        assert_eq!(candidate_count(0), 0);
    }

    #[test]
    fn test_single_item_only_whole_sequence() {
        assert_eq!(render(1), vec![vec![0]]);
    }

    #[test]
    fn test_three_item_order() {
        assert_eq!(
            render(3),
            vec![
                vec![0, 1, 2],
                vec![1, 2],
                vec![0, 2],
                vec![0, 1],
                vec![2],
                vec![1],
                vec![0],
            ]
        );
    }

    #[test]
    fn test_five_item_order_second_level() {
        let rendered = render(5);
        assert_eq!(rendered.len(), 31);
        assert_eq!(rendered[6], vec![2, 3, 4]);
        assert_eq!(rendered[7], vec![1, 3, 4]);
        assert_eq!(rendered[10], vec![0, 3, 4]);
        assert_eq!(rendered[15], vec![0, 1, 2]);
        assert_eq!(rendered[30], vec![0]);
    }

    #[test]
    fn test_count_matches_formula() {
        for len in 0..12 {
            assert_eq!(Candidates::new(len).count() as u64, candidate_count(len));
        }
        assert_eq!(candidate_count(10), 1023);
        assert_eq!(candidate_count(64), u64::MAX);
        assert_eq!(candidate_count(500), u64::MAX);
    }

    #[test]
    fn test_levels_are_non_decreasing() {
        let levels: Vec<usize> = Candidates::new(6).map(|c| c.len()).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(levels.first(), Some(&0));
        assert_eq!(levels.last(), Some(&5));
    }
}
