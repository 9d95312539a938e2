/*!
# Utilities

Small helper traits shared by the generators.
*/

use num::{One, Zero};

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0f64.is_valid_probility());
        assert!(0.25f64.is_valid_probility());
        assert!(1.0f64.is_valid_probility());
        assert!(!(-0.5f64).is_valid_probility());
        assert!(!1.01f64.is_valid_probility());
        assert!(!f64::NAN.is_valid_probility());
        assert!(1u8.is_valid_probility());
        assert!(!2u8.is_valid_probility());
    }
}
