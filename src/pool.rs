//! Uniform random selection from the fixed message pools.

use derive_more::Display;
use rand::{Rng, seq::IndexedRandom};

/// Raised when a selection is requested from a pool with no entries.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("no entries available in the {_0} pool")]
pub struct EmptyCollection(pub &'static str);

impl std::error::Error for EmptyCollection {}

/// Picks one entry of `pool` uniformly at random.
///
/// Parameters:
///   - `pool`: candidates to choose from
///   - `name`: pool name reported if it is empty
///   - `rng`: random source, seeded in tests for exact selections
///
/// Returns: a reference into `pool`, or `EmptyCollection` if it has no entries
pub fn pick<'a, T, R>(pool: &'a [T], name: &'static str, rng: &mut R) -> Result<&'a T, EmptyCollection>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).ok_or(EmptyCollection(name))
}
