//! In-place edge-soup filtering.
//!
//! All filters are stable: kept edges preserve their relative order and
//! their original direction. The first occurrence of an undirected edge is
//! the one kept. Each function returns how many edges it removed.

use std::collections::BTreeSet;

use crate::graphs::{Edge, Index};

/// Drop every edge whose undirected form was already seen.
pub fn filter_out_duplicates<I: Index>(soup: &mut Vec<Edge<I>>) -> usize {
    let before = soup.len();
    let mut seen = BTreeSet::new();
    soup.retain(|e| seen.insert(e.ordered()));
    before - soup.len()
}

/// Drop loop edges (`orig == dest`).
pub fn filter_out_loops<I: Index>(soup: &mut Vec<Edge<I>>) -> usize {
    let before = soup.len();
    soup.retain(|e| !e.is_loop());
    before - soup.len()
}

/// Drop loops and repeated undirected edges in a single pass.
pub fn filter_out_duplicates_and_loops<I: Index>(soup: &mut Vec<Edge<I>>) -> usize {
    let before = soup.len();
    let mut seen = BTreeSet::new();
    soup.retain(|e| !e.is_loop() && seen.insert(e.ordered()));
    before - soup.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::validity::Validity;

    fn soup(pairs: &[(u32, u32)]) -> Vec<Edge<u32>> {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let mut s = soup(&[(2, 1), (0, 1), (1, 2), (1, 0), (3, 4)]);
        assert_eq!(filter_out_duplicates(&mut s), 2);
        assert_eq!(s, soup(&[(2, 1), (0, 1), (3, 4)]));
    }

    #[test]
    fn loops_removed() {
        let mut s = soup(&[(0, 0), (0, 1), (5, 5)]);
        assert_eq!(filter_out_loops(&mut s), 2);
        assert_eq!(s, soup(&[(0, 1)]));
    }

    #[test]
    fn combined_filter_is_idempotent_and_valid() {
        let mut s = soup(&[(0, 1), (1, 1), (1, 0), (2, 3), (3, 2), (4, 4), (2, 3)]);
        let removed = filter_out_duplicates_and_loops(&mut s);
        assert_eq!(removed, 5);
        assert!(s.is_valid());
        let once = s.clone();
        assert_eq!(filter_out_duplicates_and_loops(&mut s), 0);
        assert_eq!(s, once);
    }
}
