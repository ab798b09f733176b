use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly shuffled `1..=count`.
pub fn shuffled_order<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u32> {
    let mut order: Vec<u32> = (1..=count as u32).collect();
    order.shuffle(rng);
    order
}

pub fn is_permutation(order: &[u32]) -> bool {
    let mut seen = vec![false; order.len()];
    for &value in order {
        let idx = value as usize;
        if idx == 0 || idx > seen.len() || seen[idx - 1] {
            return false;
        }
        seen[idx - 1] = true;
    }
    true
}

/// Columns and rows of the board. Two rows, filled row-major; with an odd
/// count the last cell of the second row stays empty.
pub fn grid_shape(count: usize) -> (usize, usize) {
    match count {
        0 => (0, 0),
        1 => (1, 1),
        _ => (count.div_ceil(2), 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_level_deals_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            for _ in 0..50 {
                let order = shuffled_order(difficulty.card_count(), &mut rng);
                assert_eq!(order.len(), difficulty.card_count());
                assert!(is_permutation(&order), "{order:?}");
            }
        }
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled_order(12, &mut StdRng::seed_from_u64(42));
        let b = shuffled_order(12, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn permutation_check_rejects_gaps_and_repeats() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 1, 3]));
        assert!(!is_permutation(&[1, 1, 3]));
        assert!(!is_permutation(&[0, 1, 2]));
        assert!(!is_permutation(&[1, 2, 4]));
    }

    #[test]
    fn grid_keeps_two_rows() {
        assert_eq!(grid_shape(5), (3, 2));
        assert_eq!(grid_shape(8), (4, 2));
        assert_eq!(grid_shape(12), (6, 2));
        assert_eq!(grid_shape(7), (4, 2));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(0), (0, 0));
    }
}
