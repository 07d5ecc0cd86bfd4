//! Uniform pick from a slice

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a uniformly random element, `None` when `items` is empty
pub fn get_random_element<T>(items: &[T]) -> Option<&T> {
    get_random_element_with(items, &mut rand::thread_rng())
}

/// Pick with a caller-supplied RNG
pub fn get_random_element_with<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
