#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a distribution axis has a zero or negative mean.
    ///
    /// The log-space transform is undefined for non-positive means; this
    /// indicates a construction bug in the generator parameters upstream,
    /// not a runtime condition to recover from.
    #[error("non-positive {axis} mean ({mean}): the log-space transform requires a strictly positive mean")]
    NonPositiveMean {
        /// The axis the offending parameter describes.
        axis: &'static str,
        /// The offending mean value.
        mean: f64,
    },

    /// Returned when the effective per-chunk trial count is not positive.
    #[error("non-positive trial count ({0})")]
    NonPositiveTries(f64),

    /// Returned when a sampled-area radius of zero is supplied.
    #[error("sampled-area radius must be positive")]
    ZeroSampledRadius,

    /// Returned when the log-space spread collapses to zero outside the
    /// point-mass branch.
    #[error("zero log-space spread: zero-variance axes must use point-mass distributions")]
    DegenerateSpread,
}

pub type Result<T> = core::result::Result<T, Error>;
