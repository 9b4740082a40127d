//! fractional cycle sizes and the user-selectable subset mask

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;
use tracing::warn;

/// The five screen fractions a window can cycle through on repeated
/// invocations of the same action. Declaration order is the bitmask bit
/// index; the cycle order is [`CycleSize::CANONICAL_ORDER`], which starts at
/// the common case, ascends, then wraps to the smaller sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CycleSize {
    OneHalf,
    OneThird,
    TwoThirds,
    OneQuarter,
    ThreeQuarters,
}

impl CycleSize {
    pub const CANONICAL_ORDER: [CycleSize; 5] = [
        CycleSize::OneHalf,
        CycleSize::TwoThirds,
        CycleSize::ThreeQuarters,
        CycleSize::OneQuarter,
        CycleSize::OneThird,
    ];

    pub fn fraction(self) -> f64 {
        match self {
            CycleSize::OneHalf => 1.0 / 2.0,
            CycleSize::OneThird => 1.0 / 3.0,
            CycleSize::TwoThirds => 2.0 / 3.0,
            CycleSize::OneQuarter => 1.0 / 4.0,
            CycleSize::ThreeQuarters => 3.0 / 4.0,
        }
    }

    fn bit(self) -> CycleSizes {
        match self {
            CycleSize::OneHalf => CycleSizes::ONE_HALF,
            CycleSize::OneThird => CycleSizes::ONE_THIRD,
            CycleSize::TwoThirds => CycleSizes::TWO_THIRDS,
            CycleSize::OneQuarter => CycleSizes::ONE_QUARTER,
            CycleSize::ThreeQuarters => CycleSizes::THREE_QUARTERS,
        }
    }
}

bitflags! {
    /// Persisted form of the enabled cycle-size subset. Bit index = enum
    /// ordinal of [`CycleSize`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CycleSizes: u32 {
        const ONE_HALF = 1 << 0;
        const ONE_THIRD = 1 << 1;
        const TWO_THIRDS = 1 << 2;
        const ONE_QUARTER = 1 << 3;
        const THREE_QUARTERS = 1 << 4;
    }
}

impl Default for CycleSizes {
    fn default() -> Self {
        CycleSizes::all()
    }
}

impl CycleSizes {
    /// Decode a persisted mask, dropping unknown bits. A mask that enables
    /// nothing falls back to the full set rather than producing an engine
    /// that cannot cycle.
    pub fn sanitized(mask: u32) -> CycleSizes {
        let sizes = CycleSizes::from_bits_truncate(mask);
        if sizes.is_empty() {
            if mask != 0 {
                warn!("cycle size mask {mask:#x} has no known bits, using all sizes");
            }
            return CycleSizes::all();
        }
        sizes
    }

    /// The enabled sizes in canonical cycle order. User insertion order never
    /// matters; cycling always walks this sequence.
    pub fn sizes(&self) -> Vec<CycleSize> {
        let enabled: Vec<CycleSize> = CycleSize::CANONICAL_ORDER
            .into_iter()
            .filter(|s| self.contains(s.bit()))
            .collect();
        if enabled.is_empty() {
            return CycleSize::CANONICAL_ORDER.to_vec();
        }
        enabled
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn canonical_order_starts_at_one_half() {
        let all = CycleSizes::default().sizes();
        assert_eq!(
            all,
            vec![
                CycleSize::OneHalf,
                CycleSize::TwoThirds,
                CycleSize::ThreeQuarters,
                CycleSize::OneQuarter,
                CycleSize::OneThird,
            ]
        );
    }

    #[test]
    fn subset_preserves_canonical_order() {
        // Quarter enabled "before" two-thirds in the mask; order must not care.
        let sizes = CycleSizes::sanitized(
            (CycleSizes::ONE_QUARTER | CycleSizes::TWO_THIRDS | CycleSizes::ONE_HALF).bits(),
        );
        assert_eq!(
            sizes.sizes(),
            vec![CycleSize::OneHalf, CycleSize::TwoThirds, CycleSize::OneQuarter]
        );
    }

    #[test]
    fn zero_mask_falls_back_to_all() {
        assert_eq!(CycleSizes::sanitized(0), CycleSizes::all());
    }

    #[test]
    fn garbage_bits_fall_back_to_all() {
        assert_eq!(CycleSizes::sanitized(0xffe0), CycleSizes::all());
    }

    #[test]
    fn garbage_bits_alongside_known_bits_are_dropped() {
        let sizes = CycleSizes::sanitized(0xffe0 | CycleSizes::ONE_THIRD.bits());
        assert_eq!(sizes, CycleSizes::ONE_THIRD);
        assert_eq!(sizes.sizes(), vec![CycleSize::OneThird]);
    }

    #[test]
    fn fractions() {
        assert_eq!(CycleSize::OneHalf.fraction(), 0.5);
        assert_eq!(CycleSize::OneQuarter.fraction(), 0.25);
        assert_eq!(CycleSize::ThreeQuarters.fraction(), 0.75);
        assert!((CycleSize::OneThird.fraction() - 1.0 / 3.0).abs() < 1e-12);
        assert!((CycleSize::TwoThirds.fraction() - 2.0 / 3.0).abs() < 1e-12);
    }
}
