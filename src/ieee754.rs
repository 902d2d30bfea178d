/*
    Rounding engine
*/

// Field layout of a packed binary64.
const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
const MAN_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

const EXP_BIAS: i32 = 1023;
const EXP_SPECIAL: u64 = 0x7FF;
const MAN_BITS: u32 = 52;

/// A rounding mode over binary64 values.
///
/// The first two modes are round-to-nearest and differ only in how they
/// break ties; the rest are directed and always move toward a fixed
/// side regardless of distance. `AwayZero` has no hardware equivalent
/// on most platforms; here it falls out of the same increment decision
/// as every other mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even integral value.
    NearestEven,
    /// Round to nearest, ties away from zero.
    NearestAway,
    /// Round toward zero (truncate).
    ToZero,
    /// Round away from zero.
    AwayZero,
    /// Round toward positive infinity (ceiling).
    ToPositive,
    /// Round toward negative infinity (floor).
    ToNegative,
}

/// A rounding direction relative to the sign of the value being rounded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
}

impl RoundingMode {
    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies
    /// tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::NearestAway, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
            (RoundingMode::AwayZero, _) => (false, RoundingDirection::AwayZero),
        }
    }

    /// Rounds `x` to an integral value under this mode.
    ///
    /// Special cases are:
    ///  - `rm.round(±0) = ±0`
    ///  - `rm.round(±Inf) = ±Inf`
    ///  - `rm.round(NaN) = NaN` (payload preserved)
    pub fn round(&self, x: f64) -> f64 {
        round_integral(x, *self)
    }
}

// Returns true if the rounding information implies the truncated
// result, viewed as an integer, should be incremented by 1.
// `half_bit` is the most significant dropped bit; `sticky_bit` is the
// OR of every dropped bit below it; `lsb` is the low bit of the
// truncated integer.
fn round_requires_increment(
    sign: bool,
    lsb: bool,
    half_bit: bool,
    sticky_bit: bool,
    rm: RoundingMode,
) -> bool {
    match rm.direction(sign) {
        (true, RoundingDirection::ToEven) => {
            // no half bit => truncate
            // half bit and sticky bit => increment
            // tie => increment if lsb since we want it to be 0
            half_bit && (sticky_bit || lsb)
        }
        (true, RoundingDirection::AwayZero) => {
            // no half bit => truncate
            // half bit => increment (tie requires increment)
            half_bit
        }
        (true, RoundingDirection::ToZero) => {
            // (unused)
            // tie => truncate
            half_bit && sticky_bit
        }
        (false, RoundingDirection::AwayZero) => {
            // increment if not exact
            half_bit || sticky_bit
        }
        (false, RoundingDirection::ToZero) => {
            // always truncate
            false
        }
        (false, RoundingDirection::ToEven) => {
            // (unused)
            // LSB of the truncated integer needs to be 0
            lsb
        }
    }
}

// Rounds a binary64 to an integral value under `rm`.
//
// Splits the packed encoding into sign, exponent, and mantissa,
// truncates the fractional field, and folds the dropped bits into a
// half bit and a sticky bit. A single increment decision then covers
// every mode.
pub(crate) fn round_integral(x: f64, rm: RoundingMode) -> f64 {
    let bits = x.to_bits();
    let sign = bits & SIGN_MASK != 0;
    let biased = (bits & EXP_MASK) >> MAN_BITS;
    let mantissa = bits & MAN_MASK;

    // infinities and NaNs pass through untouched
    if biased == EXP_SPECIAL {
        return x;
    }

    // unbiased exponent; zeros and subnormals land far below -1 and
    // take the |x| < 1 path
    let exp = biased as i32 - EXP_BIAS;
    if exp >= MAN_BITS as i32 {
        // every significand bit is integral at this magnitude
        return x;
    }

    let (truncated, lsb, half_bit, sticky_bit) = if exp < 0 {
        // |x| < 1: the integral part is a zero carrying the sign of x;
        // the half bit is set exactly when |x| >= 1/2
        let half_bit = exp == -1;
        let sticky_bit = if half_bit {
            mantissa != 0
        } else {
            bits & !SIGN_MASK != 0
        };
        (f64::from_bits(bits & SIGN_MASK), false, half_bit, sticky_bit)
    } else {
        let frac_bits = MAN_BITS - exp as u32;
        let half_mask = 1u64 << (frac_bits - 1);
        let frac_mask = (half_mask << 1) - 1;
        // low bit of the integral significand, hidden bit included
        let lsb = (((1u64 << MAN_BITS) | mantissa) >> frac_bits) & 1 != 0;
        let half_bit = mantissa & half_mask != 0;
        let sticky_bit = mantissa & (half_mask - 1) != 0;
        (f64::from_bits(bits & !frac_mask), lsb, half_bit, sticky_bit)
    };

    if round_requires_increment(sign, lsb, half_bit, sticky_bit, rm) {
        // exact: the truncated magnitude is below 2^52
        truncated + if sign { -1.0 } else { 1.0 }
    } else {
        truncated
    }
}
