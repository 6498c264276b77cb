// Random generation, sortedness check and in-place shuffle.

use rand::Rng;

/// A sequence of length `len` with every element drawn uniformly from
/// `1..=max`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u16) -> Vec<u16> {
    let max = max.max(1);
    (0..len).map(|_| rng.random_range(1..=max)).collect()
}

/// True when no element is smaller than the one before it.
pub fn is_sorted(values: &[u16]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Fisher-Yates shuffle in a single forward pass.
///
/// Position `i` swaps with a random index in `0..=i`, which reaches each of
/// the `n!` orderings with equal probability.
pub fn shuffle<R: Rng + ?Sized>(rng: &mut R, values: &mut [u16]) {
    for i in 0..values.len() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}
