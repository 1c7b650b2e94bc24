//! Fixed-width lane values with per-lane compare and select.
//!
//! Each operation is applied to every lane with no data-dependent branching,
//! so the optimiser is free to lower a group onto vector registers.

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct F32Lanes<const N: usize>(pub [f32; N]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U32Lanes<const N: usize>(pub [u32; N]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMask<const N: usize>(pub [bool; N]);

impl<const N: usize> F32Lanes<N> {
    #[inline(always)]
    pub fn splat(value: f32) -> Self {
        Self([value; N])
    }

    /// Loads `N` lanes from the front of `values`.
    #[inline(always)]
    pub fn load(values: &[f32]) -> Self {
        let mut lanes = [0.0; N];
        lanes.copy_from_slice(&values[..N]);
        Self(lanes)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> LaneMask<N> {
        LaneMask(std::array::from_fn(|i| self.0[i] < rhs.0[i]))
    }

    /// Per lane: `if_true` where `mask` is set, `if_false` elsewhere.
    #[inline(always)]
    pub fn select(mask: LaneMask<N>, if_true: Self, if_false: Self) -> Self {
        Self(std::array::from_fn(|i| {
            if mask.0[i] { if_true.0[i] } else { if_false.0[i] }
        }))
    }
}

impl<const N: usize> Add for F32Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<const N: usize> Sub for F32Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<const N: usize> Mul for F32Lanes<N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] * rhs.0[i]))
    }
}

impl<const N: usize> U32Lanes<N> {
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0; N])
    }

    /// Adds one to every lane whose mask bit is set.
    #[inline(always)]
    pub fn increment_masked(self, mask: LaneMask<N>) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + u32::from(mask.0[i])))
    }

    #[inline(always)]
    pub fn store(self, out: &mut [u32]) {
        out[..N].copy_from_slice(&self.0);
    }
}

impl<const N: usize> LaneMask<N> {
    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.iter().all(|&lane| lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_is_lane_wise() {
        let a = F32Lanes([1.0, 2.0, 3.0, 4.0]);
        let b = F32Lanes([0.5, 0.5, 2.0, -1.0]);

        assert_eq!(a + b, F32Lanes([1.5, 2.5, 5.0, 3.0]));
        assert_eq!(a - b, F32Lanes([0.5, 1.5, 1.0, 5.0]));
        assert_eq!(a * b, F32Lanes([0.5, 1.0, 6.0, -4.0]));
    }

    #[test]
    fn test_lt_builds_per_lane_mask() {
        let values = F32Lanes([1.0, 4.0, 3.9, 5.0]);

        let mask = values.lt(F32Lanes::splat(4.0));

        assert_eq!(mask, LaneMask([true, false, true, false]));
        assert!(mask.any());
        assert!(!mask.all());
    }

    #[test]
    fn test_select_blends_by_mask() {
        let mask = LaneMask([true, false, false, true]);

        let blended = F32Lanes::select(mask, F32Lanes::splat(1.0), F32Lanes::splat(-1.0));

        assert_eq!(blended, F32Lanes([1.0, -1.0, -1.0, 1.0]));
    }

    #[test]
    fn test_increment_masked_leaves_clear_lanes_frozen() {
        let counts = U32Lanes([3, 3, 3, 3]).increment_masked(LaneMask([false, true, false, true]));

        assert_eq!(counts, U32Lanes([3, 4, 3, 4]));
    }

    #[test]
    fn test_empty_mask_has_no_lanes_set() {
        assert!(!LaneMask([false; 8]).any());
    }

    #[test]
    fn test_load_and_store_round_trip_lane_order() {
        let loaded = F32Lanes::<4>::load(&[0.0, 1.0, 2.0, 3.0, 99.0]);
        let mut out = [0_u32; 4];

        U32Lanes([0, 1, 2, 3]).store(&mut out);

        assert_eq!(loaded, F32Lanes([0.0, 1.0, 2.0, 3.0]));
        assert_eq!(out, [0, 1, 2, 3]);
    }
}
