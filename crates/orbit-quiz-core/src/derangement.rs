//! Fixed-point-free shuffles used to scatter labels across the bodies.

use crate::constants::DERANGEMENT_ATTEMPTS;
use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a permutation of `items` where no element keeps its index.
///
/// With fewer than two items no such permutation exists and the input order is
/// returned unchanged.
pub fn derange<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    derange_with_attempts(items, rng, DERANGEMENT_ATTEMPTS)
}

/// Like [`derange`] with an explicit bound on shuffle attempts before falling
/// back to a rotation by one position.
pub fn derange_with_attempts<T, R>(items: &[T], rng: &mut R, attempts: usize) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return items.to_vec();
    }

    let mut candidate = items.to_vec();
    for _ in 0..attempts {
        candidate.shuffle(rng);
        if !has_fixed_point(items, &candidate) {
            return candidate;
        }
    }

    log::debug!(
        "[derangement] no derangement after {} attempts, rotating",
        attempts
    );
    rotate_by_one(items)
}

/// Cyclic shift: element `i` takes the value at `i + 1`.
pub fn rotate_by_one<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rotated = items.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(1);
    }
    rotated
}

pub fn has_fixed_point<T: PartialEq>(original: &[T], permuted: &[T]) -> bool {
    original.iter().zip(permuted).any(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_moves_every_element() {
        let ids = [1, 2, 3, 4];
        let rotated = rotate_by_one(&ids);
        assert_eq!(rotated, vec![2, 3, 4, 1]);
        assert!(!has_fixed_point(&ids, &rotated));
    }

    #[test]
    fn rotation_of_empty_is_empty() {
        let ids: [u8; 0] = [];
        assert!(rotate_by_one(&ids).is_empty());
    }
}
