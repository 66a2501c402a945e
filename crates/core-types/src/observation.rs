use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One periodic sample of a portfolio and its benchmark.
///
/// Returns are simple ratios (`0.01` is one percent). Points are owned by the
/// `ObservationSeries` they are placed into and only ever handed out by
/// shared reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub portfolio_id: i64,
    pub date: NaiveDate,
    /// Gain or loss amount for the period.
    pub gain_loss: Decimal,
    /// Portfolio value at the start of the period.
    pub denominator: Decimal,
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
    /// Risk-free rate for the period (not annualized).
    pub risk_free_rate: Decimal,
}

impl ObservationPoint {
    /// Creates a point with the two return figures; amounts and the
    /// risk-free rate start at zero.
    pub fn new(
        portfolio_id: i64,
        date: NaiveDate,
        portfolio_return: Decimal,
        benchmark_return: Decimal,
    ) -> Self {
        Self {
            portfolio_id,
            date,
            gain_loss: Decimal::ZERO,
            denominator: Decimal::ZERO,
            portfolio_return,
            benchmark_return,
            risk_free_rate: Decimal::ZERO,
        }
    }

    pub fn with_gain_loss(mut self, gain_loss: Decimal, denominator: Decimal) -> Self {
        self.gain_loss = gain_loss;
        self.denominator = denominator;
        self
    }

    pub fn with_risk_free_rate(mut self, risk_free_rate: Decimal) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }
}
