//! Valid discocube orders.
//!
//! Stage expansion from the origin for `n` stages covers the cube centres with
//! lattice L1 radius `< n`; the union of their cubes has
//! `uon(n) = 4·n·(n+1)·(n+2)/3` vertices (8, 32, 80, 160, 280, ...). Only those
//! vertex counts are achievable, and the position of an order in this sequence
//! fixes the number of expansion stages.

/// Order reached after `stages` expansion stages, `None` on overflow or for 0.
#[inline]
pub fn order_at(stages: usize) -> Option<usize> {
    if stages == 0 {
        return None;
    }
    let n = stages;
    4usize
        .checked_mul(n)?
        .checked_mul(n.checked_add(1)?)?
        .checked_mul(n.checked_add(2)?)
        .map(|p| p / 3)
}

/// Number of undirected edges of the discocube graph after `stages` stages.
#[inline]
pub fn edge_count_at(stages: usize) -> Option<usize> {
    if stages == 0 {
        return None;
    }
    let n = stages;
    2usize
        .checked_mul(n)?
        .checked_mul(n.checked_add(1)?)?
        .checked_mul(n.checked_mul(2)?.checked_add(1)?)
}

/// Valid orders in `[lo, hi]`, ascending.
pub fn uon(lo: usize, hi: usize) -> impl Iterator<Item = usize> {
    (1usize..)
        .map_while(order_at)
        .skip_while(move |&o| o < lo)
        .take_while(move |&o| o <= hi)
}

/// Number of expansion stages for `order`, or `None` if `order` is not valid.
pub fn stage_count(order: usize) -> Option<usize> {
    (1usize..)
        .map_while(|n| order_at(n).map(|o| (n, o)))
        .take_while(|&(_, o)| o <= order)
        .find(|&(_, o)| o == order)
        .map(|(n, _)| n)
}

#[inline]
pub fn is_valid_order(order: usize) -> bool {
    stage_count(order).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_orders() {
        let got: Vec<usize> = uon(8, 1000).collect();
        assert_eq!(got, vec![8, 32, 80, 160, 280, 448, 672, 960]);
        assert_eq!(uon(9, 31).count(), 0);
        assert_eq!(uon(0, 8).collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn stage_count_is_position_in_sequence() {
        for (k, order) in uon(1, 3_000_000).enumerate() {
            assert_eq!(stage_count(order), Some(k + 1));
        }
        assert_eq!(stage_count(0), None);
        assert_eq!(stage_count(9), None);
        assert_eq!(stage_count(33), None);
        assert!(is_valid_order(2_997_280));
        assert!(!is_valid_order(2_997_281));
    }

    #[test]
    fn edge_counts() {
        let got: Vec<usize> = (1..=4).filter_map(edge_count_at).collect();
        assert_eq!(got, vec![12, 60, 168, 360]);
        assert_eq!(edge_count_at(0), None);
    }

    #[test]
    fn huge_inputs_do_not_overflow() {
        assert_eq!(order_at(usize::MAX), None);
        assert_eq!(stage_count(usize::MAX), None);
    }
}
