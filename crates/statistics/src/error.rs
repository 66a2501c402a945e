use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute {0} over an empty return series")]
    EmptyInput(&'static str),

    #[error("Return series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// The statistic is mathematically undefined for this input, typically
    /// because a variance in the denominator is zero.
    #[error("{statistic} is undefined for this input: {reason}")]
    DegenerateInput {
        statistic: &'static str,
        reason: &'static str,
    },

    #[error("Annualization needs a positive calendar span, got {0} days")]
    NonPositiveSpan(i64),

    #[error("Numeric overflow or domain error while computing {0}")]
    Numeric(&'static str),
}

impl StatsError {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, StatsError::DegenerateInput { .. })
    }

    pub(crate) fn degenerate(statistic: &'static str, reason: &'static str) -> Self {
        StatsError::DegenerateInput { statistic, reason }
    }
}
