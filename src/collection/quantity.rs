//! Bounded Quantities
//!
//! Client-side clamp for numeric steppers. Advisory only; the server
//! enforces the bound again.

/// Inclusive `[min, max]`; no max when the row has no available count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityBound {
    pub min: i64,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clamped {
    pub value: i64,
    /// Set when the input was above max; carries the max for the warning
    pub exceeded: Option<i64>,
}

impl QuantityBound {
    pub fn new(min: i64, max: Option<i64>) -> Self {
        // An empty range (nothing available) collapses onto min
        Self { min, max: max.map(|m| m.max(min)) }
    }

    pub fn clamp(&self, value: i64) -> Clamped {
        match self.max {
            Some(max) if value > max => Clamped { value: max, exceeded: Some(max) },
            _ => Clamped { value: value.max(self.min), exceeded: None },
        }
    }

    /// Parse raw input; anything that is not an integer counts as below min
    pub fn clamp_input(&self, raw: &str) -> Clamped {
        match raw.trim().parse::<i64>() {
            Ok(value) => self.clamp(value),
            Err(_) => Clamped { value: self.min, exceeded: None },
        }
    }

    /// +/- buttons never leave the range and never warn
    pub fn step(&self, current: i64, delta: i64) -> i64 {
        let next = current.saturating_add(delta).max(self.min);
        match self.max {
            Some(max) => next.min(max),
            None => next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_above_max_warns() {
        let bound = QuantityBound::new(1, Some(3));
        assert_eq!(bound.clamp_input("10"), Clamped { value: 3, exceeded: Some(3) });
        assert_eq!(bound.clamp_input("2"), Clamped { value: 2, exceeded: None });
    }

    #[test]
    fn test_clamp_below_min_and_garbage() {
        let bound = QuantityBound::new(1, None);
        assert_eq!(bound.clamp_input("0").value, 1);
        assert_eq!(bound.clamp_input("-4").value, 1);
        assert_eq!(bound.clamp_input("abc"), Clamped { value: 1, exceeded: None });
        assert_eq!(bound.clamp_input(" 250 ").value, 250);
    }

    #[test]
    fn test_empty_range_collapses_to_min() {
        let bound = QuantityBound::new(1, Some(0));
        assert_eq!(bound.max, Some(1));
        assert_eq!(bound.clamp_input("5").value, 1);
    }

    #[test]
    fn test_step_stays_in_range() {
        let bound = QuantityBound::new(1, Some(4));
        assert_eq!(bound.step(1, -1), 1);
        assert_eq!(bound.step(2, 1), 3);
        assert_eq!(bound.step(4, 1), 4);
    }
}
