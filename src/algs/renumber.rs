//! Index compaction for edge soups, paths and triangle soups.

use crate::algs::container::{IndexContainer, minmax_indices};
use crate::graphs::Index;

/// Rewrite the indices of `container` onto `[0, n)`, where `n` is the number
/// of distinct indices referenced, and return `n`.
///
/// The new numbering follows the *index value* order of the old one (the
/// smallest old index becomes 0, and so on), not the order in which indices
/// first appear in storage. Built from a presence bitmap over `[min, max]`
/// and its prefix sum.
pub fn remap_indices<C>(container: &mut C) -> usize
where
    C: IndexContainer + ?Sized,
{
    let Some((lo, hi)) = minmax_indices(container) else {
        return 0;
    };
    let window = (hi - lo).as_usize() + 1;

    let mut present = vec![false; window];
    for i in container.indices() {
        present[(i - lo).as_usize()] = true;
    }

    let mut new_index = vec![0usize; window];
    let mut n = 0usize;
    for (slot, &p) in present.iter().enumerate() {
        if p {
            new_index[slot] = n;
            n += 1;
        }
    }

    for i in container.indices_mut() {
        *i = from_slot(new_index[(*i - lo).as_usize()]);
    }
    n
}

#[inline]
fn from_slot<I: Index>(slot: usize) -> I {
    // slots come from a window whose bounds are valid indices
    I::try_from_usize(slot).unwrap_or_else(I::undef)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::{Edge, Path, Triangle};

    #[test]
    fn remap_orders_by_index_value() {
        let mut soup = vec![Edge::new(30u32, 10), Edge::new(10, 20)];
        assert_eq!(remap_indices(soup.as_mut_slice()), 3);
        assert_eq!(soup, vec![Edge::new(2, 0), Edge::new(0, 1)]);
    }

    #[test]
    fn remap_path_and_triangles() {
        let mut path = Path::new_closed(vec![9u32, 4, 7]);
        assert_eq!(remap_indices(&mut path), 3);
        assert_eq!(path.vertices, vec![2, 0, 1]);

        let mut tris = vec![Triangle::new(5u32, 8, 11), Triangle::new(11, 8, 20)];
        assert_eq!(remap_indices(tris.as_mut_slice()), 4);
        assert_eq!(tris[0].vertices, [0, 1, 2]);
        assert_eq!(tris[1].vertices, [2, 1, 3]);
        assert_eq!(minmax_indices(tris.as_slice()), Some((0, 3)));
    }

    #[test]
    fn remap_empty_is_noop() {
        let mut soup: Vec<Edge<u32>> = Vec::new();
        assert_eq!(remap_indices(soup.as_mut_slice()), 0);
    }
}
