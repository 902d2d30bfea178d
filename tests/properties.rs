use float_round::*;
use quickcheck::quickcheck;

const MODES: [RoundingMode; 6] = [
    RoundingMode::NearestEven,
    RoundingMode::NearestAway,
    RoundingMode::ToZero,
    RoundingMode::AwayZero,
    RoundingMode::ToPositive,
    RoundingMode::ToNegative,
];

quickcheck! {
    fn results_are_integral(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        MODES.iter().all(|rm| rm.round(x).fract() == 0.0)
    }

    fn floor_and_ceiling_bracket_the_input(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        let lo = to_negative_inf(x);
        let hi = to_positive_inf(x);
        lo <= x && x <= hi && x - lo <= 1.0 && hi - x <= 1.0
    }

    fn truncation_never_grows_magnitude(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        to_zero(x).abs() <= x.abs() && RoundingMode::AwayZero.round(x).abs() >= x.abs()
    }

    fn nearest_modes_stay_within_half(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        (to_nearest_even(x) - x).abs() <= 0.5 && (to_nearest_away(x) - x).abs() <= 0.5
    }

    fn round_is_bit_identical_to_nearest_even(x: f64) -> bool {
        round(x).to_bits() == to_nearest_even(x).to_bits()
    }

    fn round_to_zero_places_matches_round(x: f64) -> bool {
        let a = round_to(x, 0.0);
        let b = round(x);
        if x.is_nan() {
            a.is_nan() && b.is_nan()
        } else {
            a.to_bits() == b.to_bits()
        }
    }

    fn rounding_is_idempotent(x: f64) -> bool {
        MODES.iter().all(|rm| {
            let r = rm.round(x);
            rm.round(r).to_bits() == r.to_bits()
        })
    }

    fn zero_keeps_its_sign(x: f64) -> bool {
        if !x.is_finite() {
            return true;
        }
        MODES.iter().all(|rm| {
            let r = rm.round(x);
            // a zero result on a nonzero input only comes from rounding
            // toward zero; it takes the input's sign either way
            r != 0.0 || r.is_sign_negative() == x.is_sign_negative()
        })
    }

    fn non_finite_values_pass_through(x: f64) -> bool {
        if x.is_finite() {
            return true;
        }
        MODES.iter().all(|rm| rm.round(x).to_bits() == x.to_bits())
    }
}
