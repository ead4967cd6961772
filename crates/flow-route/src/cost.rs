//! Total-order wrapper for floating-point path costs.
//!
//! Edge weights in this domain are kilometre-scale floats, so frontier keys
//! need a total order that `f64` alone does not provide.  `Cost` compares
//! via `f64::total_cmp`; NaN never arises from the weight formula, but the
//! ordering is well-defined even if it did.

use std::cmp::Ordering;
use std::ops::Add;

/// A path cost usable as a `BinaryHeap` key.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cost(pub f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Eq for Cost {}

impl Ord for Cost {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Cost {
    type Output = Cost;
    #[inline]
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
