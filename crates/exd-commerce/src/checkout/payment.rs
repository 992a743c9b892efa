//! Payment processor capability.
//!
//! The storefront has no real gateway; submission resolves through an
//! injected processor so the state machine's transitions are testable
//! deterministically. Production wiring uses [`RandomWithRate`] as the
//! gateway stand-in.

use rand::Rng;

use crate::money::Money;

/// Result of a payment attempt. A decline is an expected outcome, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Charge accepted.
    Approved,
    /// Charge declined; the customer may retry.
    Declined,
}

/// A payment gateway seam.
pub trait PaymentProcessor {
    /// Attempt to charge `amount`.
    fn process(&self, amount: Money) -> PaymentOutcome;
}

/// Processor that approves every charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceeds;

impl PaymentProcessor for AlwaysSucceeds {
    fn process(&self, _amount: Money) -> PaymentOutcome {
        PaymentOutcome::Approved
    }
}

/// Processor that declines every charge.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFails;

impl PaymentProcessor for AlwaysFails {
    fn process(&self, _amount: Money) -> PaymentOutcome {
        PaymentOutcome::Declined
    }
}

/// Processor that approves with a fixed probability.
///
/// The storefront's simulated gateway runs at rate 0.5.
#[derive(Debug, Clone, Copy)]
pub struct RandomWithRate {
    rate: f64,
}

impl RandomWithRate {
    /// Create a processor approving with probability `rate`, clamped
    /// to `[0.0, 1.0]`.
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }

    /// The coin-flip gateway the storefront simulates.
    pub fn coin_flip() -> Self {
        Self::new(0.5)
    }

    /// The configured approval rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PaymentProcessor for RandomWithRate {
    fn process(&self, _amount: Money) -> PaymentOutcome {
        if rand::thread_rng().gen_bool(self.rate) {
            PaymentOutcome::Approved
        } else {
            PaymentOutcome::Declined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_processors() {
        let amount = Money::new(30000);
        assert_eq!(AlwaysSucceeds.process(amount), PaymentOutcome::Approved);
        assert_eq!(AlwaysFails.process(amount), PaymentOutcome::Declined);
    }

    #[test]
    fn test_rate_clamped() {
        assert_eq!(RandomWithRate::new(7.0).rate(), 1.0);
        assert_eq!(RandomWithRate::new(-1.0).rate(), 0.0);
        assert_eq!(RandomWithRate::coin_flip().rate(), 0.5);
    }

    #[test]
    fn test_extreme_rates_are_deterministic() {
        let amount = Money::new(30000);
        assert_eq!(
            RandomWithRate::new(1.0).process(amount),
            PaymentOutcome::Approved
        );
        assert_eq!(
            RandomWithRate::new(0.0).process(amount),
            PaymentOutcome::Declined
        );
    }
}
