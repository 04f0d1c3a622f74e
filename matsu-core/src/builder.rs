//! Builder utilities for configuring forest construction.
//!
//! Exposes the scan strategy selection surface and builder validation used
//! before constructing [`Boruvka`] instances.

use crate::{Result, boruvka::Boruvka, error::BoruvkaError};

/// Indicates which backend [`Boruvka`] uses for the per-round candidate scan
/// when [`Boruvka::run`] is invoked.
///
/// `Auto` resolves backends deterministically: it selects the parallel scan
/// when the `parallel` feature is compiled in and falls back to the
/// sequential scan otherwise, so behaviour stays stable across builds. Both
/// backends produce bit-identical forests for identical inputs; only the
/// candidate scan parallelises, merges always commit sequentially.
///
/// # Examples
/// ```
/// use matsu_core::ScanStrategy;
///
/// let strategy = ScanStrategy::Auto;
/// assert!(matches!(strategy, ScanStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Allow the library to select an appropriate scan backend automatically.
    Auto,
    /// Restrict the candidate scan to the sequential implementation.
    Sequential,
    /// Require the rayon-parallel candidate scan.
    Parallel,
}

impl Default for ScanStrategy {
    fn default() -> Self {
        Self::Auto
    }
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use matsu_core::{BoruvkaBuilder, ScanStrategy};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_scan_strategy(ScanStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.scan_strategy(), ScanStrategy::Sequential);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoruvkaBuilder {
    scan_strategy: ScanStrategy,
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use matsu_core::{BoruvkaBuilder, ScanStrategy};
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.scan_strategy(), ScanStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scan strategy to use when running the algorithm.
    ///
    /// # Examples
    /// ```
    /// use matsu_core::{BoruvkaBuilder, ScanStrategy};
    ///
    /// let builder = BoruvkaBuilder::new().with_scan_strategy(ScanStrategy::Sequential);
    /// assert_eq!(builder.scan_strategy(), ScanStrategy::Sequential);
    /// ```
    #[must_use]
    pub const fn with_scan_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.scan_strategy = strategy;
        self
    }

    /// Returns the currently configured scan strategy.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.scan_strategy
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::ScanUnavailable`] when
    /// [`ScanStrategy::Parallel`] is requested but the `parallel` feature is
    /// not compiled into this build.
    ///
    /// # Examples
    /// ```
    /// use matsu_core::{BoruvkaBuilder, ScanStrategy};
    ///
    /// let boruvka = BoruvkaBuilder::new().build().expect("defaults are valid");
    /// assert_eq!(boruvka.scan_strategy(), ScanStrategy::Auto);
    /// ```
    pub fn build(self) -> Result<Boruvka> {
        if matches!(self.scan_strategy, ScanStrategy::Parallel) && !cfg!(feature = "parallel") {
            return Err(BoruvkaError::ScanUnavailable {
                requested: self.scan_strategy,
            });
        }

        Ok(Boruvka::new(self.scan_strategy))
    }
}
