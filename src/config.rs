use std::fmt::Debug;

use num_traits::Float;

use crate::{Error, Result};

/// Tolerance used when none is configured explicitly.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Configuration of a [`ShortestPathEngine`](crate::ShortestPathEngine).
///
/// The tolerance decides when two accumulated path lengths are considered equal.
/// It is fixed for the lifetime of the engine so every comparison made during
/// one run uses the same threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<W>
where
    W: Float + Debug + Copy,
{
    tolerance: W,
}

impl<W> EngineConfig<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a configuration with the given tie tolerance.
    ///
    /// Fails with [`Error::InvalidTolerance`] if the tolerance is negative, NaN
    /// or infinite.
    pub fn new(tolerance: W) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < W::zero() {
            return Err(Error::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(EngineConfig { tolerance })
    }

    /// The tie tolerance
    pub fn tolerance(&self) -> W {
        self.tolerance
    }
}

impl<W> Default for EngineConfig<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        EngineConfig {
            tolerance: W::from(DEFAULT_TOLERANCE).unwrap_or_else(W::epsilon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn default_tolerance_is_one_nano() {
        let config = EngineConfig::<f64>::default();
        assert_eq!(config.tolerance(), 1e-9);

        let config = EngineConfig::<OrderedFloat<f64>>::default();
        assert_eq!(config.tolerance(), OrderedFloat(1e-9));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        let config = EngineConfig::new(0.0_f64).unwrap();
        assert_eq!(config.tolerance(), 0.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_tolerance() {
        assert_eq!(
            EngineConfig::new(-1e-3_f64),
            Err(Error::InvalidTolerance(-1e-3))
        );
        assert!(matches!(
            EngineConfig::new(f64::INFINITY),
            Err(Error::InvalidTolerance(_))
        ));
        assert!(matches!(
            EngineConfig::new(f64::NAN),
            Err(Error::InvalidTolerance(_))
        ));
    }
}
