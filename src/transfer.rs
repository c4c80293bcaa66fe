//! The active transfer curve and its tuning constants.

/// Indices below this emit zero.
pub const LOWPASS: u32 = 345;

/// Offset for the low-band boost window. Unused by the active curve;
/// kept so the boosted variant below can be brought back without
/// re-deriving the tuning.
pub const BOOST_AMOUNT: u32 = 400;

/// Upper bound of the low-band boost window.
pub const BOOST_END: u32 = 1100;

/// Indices above this emit zero, except the full-scale marker.
pub const HIGHCUT: u32 = 16000;

/// Single index forced to full scale, above the band limit.
pub const FULL_SCALE_INDEX: u32 = 20000;

/// Largest emitted value (16-bit full scale).
pub const FULL_SCALE: u16 = 65535;

const AMPLITUDE: f64 = 65535.0;
const SHARPNESS: f64 = 2048.0;

/// Saturating curve: rises steeply near zero and approaches `AMPLITUDE`
/// asymptotically as `x` grows. Truncates toward zero, matching floor
/// for this non-negative domain.
pub fn calc(x: u32) -> u16 {
    (AMPLITUDE * (1.0 - 1.0 / (1.0 + x as f64 / SHARPNESS))) as u16
}

// Earlier curve candidates, kept for reference only:
//
//   * doubling, zeroed above half range:   if num > 32768 { 0 } else { 2 * num }
//   * identity with a 10_000 highcut and marker passthrough
//   * linear rescale to full range:        num * 65536 / 10_000
//   * clamped linear rescale, with +BOOST_AMOUNT applied below BOOST_END
//   * boosted saturating curve:            calc(num + BOOST_AMOUNT) below BOOST_END
//
// None of these are selectable at runtime.

/// Transfer function for one table index.
pub fn transfer(num: u32) -> u16 {
    if num > HIGHCUT {
        if num == FULL_SCALE_INDEX {
            FULL_SCALE
        } else {
            0
        }
    } else if num < LOWPASS {
        0
    } else {
        // The boost window [LOWPASS, BOOST_END) currently applies no
        // offset, so both sides of it reduce to the plain curve.
        calc(num)
    }
}
