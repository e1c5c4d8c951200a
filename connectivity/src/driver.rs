//! Batch drivers: replay a pair sequence, or merge random pairs until a
//! single component remains.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::config::SaturationConfig;
use crate::engine::Engine;
use crate::error::DomainError;
use crate::observer::Observer;
use crate::variant::Variant;

/// Totals after [`Engine::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub steps: usize,
    pub merges: usize,
    pub total_accesses: u64,
}

/// Result of one random saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaturationReport {
    pub variant: Variant,
    /// Universe size `N`.
    pub len: usize,
    pub seed: u64,
    /// Pairs drawn, self-pairs and redundant pairs included.
    pub edges: u64,
    /// Pairs that merged two components; always `N - 1`.
    pub unions: u64,
    pub total_accesses: u64,
}

impl SaturationReport {
    /// `edges` relative to `0.5 * N * ln N`, the expected growth rate.
    pub fn edge_ratio(&self) -> f64 {
        let n = self.len as f64;
        if self.len < 2 {
            return 0.0;
        }
        self.edges as f64 / (0.5 * n * n.ln())
    }
}

impl<O: Observer> Engine<O> {
    /// Connect every pair in order and report the totals.
    ///
    /// Stops at the first out-of-range pair; pairs before it stay applied.
    pub fn run<I>(&mut self, pairs: I) -> Result<RunReport, DomainError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut steps = 0;
        let mut merges = 0;
        for (p, q) in pairs {
            if self.connect(p, q)?.is_merged() {
                merges += 1;
            }
            steps += 1;
        }
        Ok(RunReport {
            steps,
            merges,
            total_accesses: self.total_accesses(),
        })
    }

    /// Reset to `n` singletons, then connect uniformly random pairs from
    /// `[0, n) x [0, n)` until one component remains.
    ///
    /// Pairs come from [`StdRng`] seeded with `seed_from_u64(seed)` and are
    /// drawn with `gen_range(0..n)`, first `a` then `b`.
    pub fn random_saturate(&mut self, n: usize, seed: u64) -> Result<SaturationReport, DomainError> {
        if n == 0 {
            return Err(DomainError::EmptyUniverse);
        }
        self.reset(n);

        let mut rng = StdRng::seed_from_u64(seed);
        let target = (n - 1) as u64;
        let mut edges = 0u64;
        let mut unions = 0u64;
        while unions < target {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            edges += 1;
            if self.connect(a, b)?.is_merged() {
                unions += 1;
            }
        }

        Ok(SaturationReport {
            variant: self.variant(),
            len: n,
            seed,
            edges,
            unions,
            total_accesses: self.total_accesses(),
        })
    }
}

/// Saturate one fresh engine per configured size.
///
/// Every size uses the same resolved seed, so the sequential and
/// `parallel` builds produce identical reports in the same order.
pub fn saturate_sizes(config: &SaturationConfig) -> Result<Vec<SaturationReport>, DomainError> {
    let seed = config.resolve_seed();
    let variant = config.variant;
    let saturate_one = |&n: &usize| -> Result<SaturationReport, DomainError> {
        let mut engine = Engine::new(variant, n)?;
        engine.random_saturate(n, seed)
    };

    #[cfg(feature = "parallel")]
    let reports = config.sizes.par_iter().map(saturate_one).collect();
    #[cfg(not(feature = "parallel"))]
    let reports = config.sizes.iter().map(saturate_one).collect();

    reports
}
