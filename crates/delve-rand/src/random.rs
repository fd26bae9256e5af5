//! The [`Random`] façade: derived draws over any `RngCore` backend.

use crate::error::RandomError;
use crate::splitmix::SplitMix64;
use rand::seq::SliceRandom;
use rand::{Error, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Number of rejection-sampling draws [`Random::filtered_choice`] makes
/// before falling back to a full scan.
///
/// With an acceptance rate of 1% the fallback triggers about a third of
/// the time; above 5% it practically never does.
pub const REJECTION_ATTEMPTS: usize = 100;

/// `2^-53`: scales the top 53 bits of a draw into `[0, 1)`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// A [`Random`] backed by ChaCha8 instead of SplitMix64.
pub type ChaChaRandom = Random<ChaCha8Rng>;

/// A seedable, deterministic random stream.
///
/// `Random` owns its backend generator; there is no shared or global
/// state. Pass it by `&mut` to whatever needs randomness, or
/// [`fork`](Random::fork) independent child streams per subsystem.
///
/// # Examples
///
/// ```
/// use delve_rand::Random;
///
/// let mut a = Random::seeded(42);
/// let mut b = Random::seeded(42);
/// let xs = [10, 20, 30];
/// assert_eq!(a.choice(&xs).unwrap(), b.choice(&xs).unwrap());
/// assert!(a.uniform_int(0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Random<R = SplitMix64> {
    rng: R,
}

impl Random {
    /// Create a SplitMix64 stream from a 64-bit seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_seed(seed)
    }
}

impl<R: SeedableRng> Random<R> {
    /// Create a stream on any seedable backend from a 64-bit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
        }
    }

    /// Reset this stream to the state produced by `seed`.
    pub fn seed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

impl<R: SeedableRng + RngCore> Random<R> {
    /// Derive an independent child stream.
    ///
    /// The child is seeded from one draw of this stream, so forking is
    /// itself deterministic: the same parent state always yields the
    /// same child.
    pub fn fork(&mut self) -> Self {
        let seed = self.uniform_u64();
        Self::with_seed(seed)
    }
}

impl<R: RngCore> Random<R> {
    /// Wrap an already-constructed backend.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// The backend generator.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Uniform `u64` straight from the backend.
    pub fn uniform_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform `f64` in `[0, 1)`.
    ///
    /// Uses only the top 53 bits of a draw (the f64 mantissa width), so
    /// every representable output is equally likely.
    pub fn uniform_f64(&mut self) -> f64 {
        (self.uniform_u64() >> 11) as f64 * F64_UNIT
    }

    /// Uniform integer in `[0, n)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::EmptyRange`] if `n == 0`.
    pub fn uniform_int(&mut self, n: usize) -> Result<usize, RandomError> {
        if n == 0 {
            return Err(RandomError::EmptyRange);
        }
        Ok(self.rng.gen_range(0..n))
    }

    /// Uniform integer in the inclusive range `[lo, hi]`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvertedRange`] if `hi < lo`.
    pub fn range(&mut self, lo: i64, hi: i64) -> Result<i64, RandomError> {
        if hi < lo {
            return Err(RandomError::InvertedRange { lo, hi });
        }
        Ok(self.rng.gen_range(lo..=hi))
    }

    /// `true` with probability `p`.
    ///
    /// # Errors
    ///
    /// [`RandomError::ProbabilityOutOfRange`] if `p` is outside `[0, 1]`
    /// or NaN.
    pub fn chance(&mut self, p: f64) -> Result<bool, RandomError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RandomError::ProbabilityOutOfRange {
                value: p.to_string(),
            });
        }
        Ok(self.uniform_f64() < p)
    }

    /// Uniformly chosen element of `xs`.
    ///
    /// # Errors
    ///
    /// [`RandomError::EmptySequence`] if `xs` is empty.
    pub fn choice<'a, T>(&mut self, xs: &'a [T]) -> Result<&'a T, RandomError> {
        xs.choose(&mut self.rng).ok_or(RandomError::EmptySequence)
    }

    /// Index into `xs` chosen with probability proportional to `weight`.
    ///
    /// Weights are evaluated once per element, summed, and compared
    /// against a single uniform draw over the total with a running
    /// linear scan. Zero-weight elements are never chosen.
    ///
    /// # Errors
    ///
    /// - [`RandomError::EmptySequence`] if `xs` is empty.
    /// - [`RandomError::NegativeWeight`] if any weight is negative.
    /// - [`RandomError::NoPositiveWeight`] if every weight is zero.
    /// - [`RandomError::WeightOverflow`] if the total exceeds `u64::MAX`.
    pub fn weighted_index<T, F>(&mut self, xs: &[T], mut weight: F) -> Result<usize, RandomError>
    where
        F: FnMut(&T) -> i64,
    {
        if xs.is_empty() {
            return Err(RandomError::EmptySequence);
        }
        let mut weights = Vec::with_capacity(xs.len());
        let mut total: u64 = 0;
        for (index, x) in xs.iter().enumerate() {
            let w = weight(x);
            if w < 0 {
                return Err(RandomError::NegativeWeight { index, weight: w });
            }
            let w = w as u64;
            total = total.checked_add(w).ok_or(RandomError::WeightOverflow)?;
            weights.push(w);
        }
        if total == 0 {
            return Err(RandomError::NoPositiveWeight);
        }

        let mut sample = self.rng.gen_range(0..total);
        for (i, w) in weights.into_iter().enumerate() {
            if sample < w {
                return Ok(i);
            }
            sample -= w;
        }
        unreachable!("sample drawn below total weight must land in some bucket")
    }

    /// Element of `xs` chosen with probability proportional to `weight`.
    ///
    /// See [`weighted_index`](Random::weighted_index) for the error cases.
    pub fn weighted_choice<'a, T, F>(&mut self, xs: &'a [T], weight: F) -> Result<&'a T, RandomError>
    where
        F: FnMut(&T) -> i64,
    {
        let i = self.weighted_index(xs, weight)?;
        Ok(&xs[i])
    }

    /// Element of `xs` satisfying `accept`.
    ///
    /// Tries [`REJECTION_ATTEMPTS`] uniform draws first, which is O(1)
    /// expected when the acceptance rate is not tiny. If none is
    /// accepted, scans the whole slice, collects every accepted element,
    /// and picks uniformly among them.
    ///
    /// # Errors
    ///
    /// - [`RandomError::EmptySequence`] if `xs` is empty.
    /// - [`RandomError::NoCandidates`] if no element is accepted.
    pub fn filtered_choice<'a, T, F>(
        &mut self,
        xs: &'a [T],
        mut accept: F,
    ) -> Result<&'a T, RandomError>
    where
        F: FnMut(&T) -> bool,
    {
        if xs.is_empty() {
            return Err(RandomError::EmptySequence);
        }
        for _ in 0..REJECTION_ATTEMPTS {
            let x = &xs[self.rng.gen_range(0..xs.len())];
            if accept(x) {
                return Ok(x);
            }
        }

        trace!(
            len = xs.len(),
            attempts = REJECTION_ATTEMPTS,
            "rejection sampling exhausted, scanning"
        );
        let candidates: Vec<&'a T> = xs.iter().filter(|x| accept(*x)).collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(RandomError::NoCandidates)
    }

    /// Shuffle `xs` in place (Fisher-Yates via [`SliceRandom`]).
    pub fn shuffle<T>(&mut self, xs: &mut [T]) {
        xs.shuffle(&mut self.rng);
    }
}

impl<R: RngCore> RngCore for Random<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}
