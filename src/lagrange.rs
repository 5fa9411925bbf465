//! Exact Lagrange interpolation at the origin.
//!
//! For points `(x_i, y_i)` the value of the interpolating polynomial at zero is
//!
//! ```text
//! S = Σ_i y_i · L_i(0),    L_i(0) = Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Each `L_i(0)` is carried as an exact fraction of big integers and the sum is
//! accumulated over a common denominator, so no precision is lost before the
//! single rounding step at the end.

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::select::Selection;
use crate::ShareIndex;

/// A rational number `numer / denom` kept in lowest terms with `denom > 0`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Panics if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        assert!(!denom.is_zero(), "fraction with zero denominator");
        let (numer, denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let gcd = numer.gcd(&denom);
        if gcd.is_one() {
            Fraction { numer, denom }
        } else {
            Fraction {
                numer: numer / &gcd,
                denom: denom / &gcd,
            }
        }
    }

    pub fn zero() -> Self {
        Fraction {
            numer: BigInt::zero(),
            denom: BigInt::one(),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Nearest integer, with halves rounded away from zero (`2.5 -> 3`,
    /// `-2.5 -> -3`).
    pub fn round_half_up(&self) -> BigInt {
        let twice = &self.numer.abs() * 2u32 + &self.denom;
        let magnitude = twice.div_floor(&(&self.denom * 2u32));
        if self.numer.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        if self.denom == other.denom {
            return Fraction::new(self.numer + other.numer, self.denom);
        }
        let numer = self.numer * &other.denom + other.numer * &self.denom;
        Fraction::new(numer, self.denom * other.denom)
    }
}

impl Mul<&BigInt> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &BigInt) -> Fraction {
        Fraction::new(self.numer * rhs, self.denom)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

/// Lagrange basis value `L_i(0)` for the point at position `i` of `xs`.
///
/// `xs` must be pairwise distinct.
pub(crate) fn lagrange_coefficient_at_zero(i: usize, xs: &[ShareIndex]) -> Fraction {
    let xi = BigInt::from(xs[i]);
    let mut num = BigInt::one();
    let mut den = BigInt::one();

    for (j, &x) in xs.iter().enumerate() {
        if i != j {
            let xj = BigInt::from(x);
            num *= -&xj;
            den *= &xi - xj;
        }
    }
    Fraction::new(num, den)
}

/// The exact value at zero of the polynomial through `selection`, before
/// rounding.
pub fn value_at_zero(selection: &Selection) -> Fraction {
    let xs: Vec<ShareIndex> = selection.iter().map(|p| p.x()).collect();

    selection
        .iter()
        .enumerate()
        .fold(Fraction::zero(), |acc, (i, point)| {
            acc + lagrange_coefficient_at_zero(i, &xs) * point.y()
        })
}

/// Recovers the secret, the constant term of the polynomial through
/// `selection`, rounded to the nearest integer once at the end.
pub fn interpolate_at_zero(selection: &Selection) -> BigInt {
    value_at_zero(selection).round_half_up()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::Point;
    use crate::select::select_points;
    use num_bigint::RandBigInt;

    fn frac(numer: i64, denom: i64) -> Fraction {
        Fraction::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn eval(coefficients: &[BigInt], x: u32) -> BigInt {
        let x = BigInt::from(x);
        coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * &x + c)
    }

    fn sample(coefficients: &[BigInt], xs: &[u32]) -> Vec<Point> {
        xs.iter()
            .map(|&x| Point::new(x, eval(coefficients, x)))
            .collect()
    }

    fn recover(points: &[Point]) -> BigInt {
        let selection = select_points(points, points.len()).unwrap();
        interpolate_at_zero(&selection)
    }

    #[test]
    fn test_fraction_normalizes() {
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_eq!(frac(3, -6), frac(-1, 2));
        assert_eq!(frac(-3, -6), frac(1, 2));
        assert_eq!(frac(0, -5), Fraction::zero());
        assert_eq!(frac(-1, 2).denom(), &BigInt::from(2));
        assert_eq!(frac(6, 3).to_string(), "2");
        assert_eq!(frac(-6, 4).to_string(), "-3/2");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(frac(3, 2).round_half_up(), BigInt::from(2));
        assert_eq!(frac(-3, 2).round_half_up(), BigInt::from(-2));
        assert_eq!(frac(1, 2).round_half_up(), BigInt::from(1));
        assert_eq!(frac(-1, 2).round_half_up(), BigInt::from(-1));
        assert_eq!(frac(7, 3).round_half_up(), BigInt::from(2));
        assert_eq!(frac(-7, 3).round_half_up(), BigInt::from(-2));
        assert_eq!(frac(8, 3).round_half_up(), BigInt::from(3));
        assert_eq!(frac(-8, 3).round_half_up(), BigInt::from(-3));
        assert_eq!(frac(5, 1).round_half_up(), BigInt::from(5));
        assert_eq!(Fraction::zero().round_half_up(), BigInt::zero());
    }

    #[test]
    fn test_lagrange_coefficients_sum_to_one() {
        let xs = [1, 2, 4, 7, 11];
        let sum = (0..xs.len())
            .map(|i| lagrange_coefficient_at_zero(i, &xs))
            .fold(Fraction::zero(), Add::add);
        assert_eq!(sum, frac(1, 1));
    }

    #[test]
    fn test_lagrange_coefficients_known_values() {
        // xs = {1, 2, 3}: L_1(0) = 3, L_2(0) = -3, L_3(0) = 1
        let xs = [1, 2, 3];
        assert_eq!(lagrange_coefficient_at_zero(0, &xs), frac(3, 1));
        assert_eq!(lagrange_coefficient_at_zero(1, &xs), frac(-3, 1));
        assert_eq!(lagrange_coefficient_at_zero(2, &xs), frac(1, 1));

        // xs = {1, 3}: L_1(0) = 3/2, L_3(0) = -1/2
        let xs = [1, 3];
        assert_eq!(lagrange_coefficient_at_zero(0, &xs), frac(3, 2));
        assert_eq!(lagrange_coefficient_at_zero(1, &xs), frac(-1, 2));
    }

    #[test]
    fn test_recover_quadratic() {
        // f(x) = x^2 + 3
        let points = vec![
            Point::new(1, BigInt::from(4)),
            Point::new(2, BigInt::from(7)),
            Point::new(3, BigInt::from(12)),
        ];
        assert_eq!(recover(&points), BigInt::from(3));
    }

    #[test]
    fn test_single_point_is_constant() {
        let points = vec![Point::new(5, BigInt::from(-42))];
        assert_eq!(recover(&points), BigInt::from(-42));
    }

    #[test]
    fn test_non_integer_value_rounds_once() {
        // line through (1, 1) and (3, 0) hits 3/2 at zero
        let points = vec![Point::new(1, BigInt::from(1)), Point::new(3, BigInt::from(0))];
        let selection = select_points(&points, 2).unwrap();
        assert_eq!(value_at_zero(&selection), frac(3, 2));
        assert_eq!(interpolate_at_zero(&selection), BigInt::from(2));

        // line through (1, 0) and (3, 1) hits -1/2 at zero
        let points = vec![Point::new(1, BigInt::from(0)), Point::new(3, BigInt::from(1))];
        assert_eq!(recover(&points), BigInt::from(-1));

        // weights 8/3, -2 and 1/3; only the sum is rounded
        let points = vec![
            Point::new(1, BigInt::from(1)),
            Point::new(2, BigInt::from(1)),
            Point::new(4, BigInt::from(2)),
        ];
        let selection = select_points(&points, 3).unwrap();
        assert_eq!(value_at_zero(&selection), frac(4, 3));
        assert_eq!(interpolate_at_zero(&selection), BigInt::from(1));
    }

    #[test]
    fn test_recover_random_polynomials() {
        let mut rng = rand::thread_rng();
        let bound: BigInt = BigInt::from(1) << 256;
        for degree in 0..8usize {
            let coefficients: Vec<BigInt> = (0..=degree)
                .map(|_| rng.gen_bigint_range(&-bound.clone(), &bound))
                .collect();
            let xs: Vec<u32> = (1..=degree as u32 + 1).map(|i| i * 3 + 1).collect();
            let points = sample(&coefficients, &xs);
            assert_eq!(recover(&points), coefficients[0], "degree {}", degree);
        }
    }

    #[test]
    fn test_order_invariance() {
        let coefficients: Vec<BigInt> = [17, -4, 9, 123_456_789]
            .iter()
            .map(|&c| BigInt::from(c))
            .collect();
        let points = sample(&coefficients, &[2, 5, 6, 10]);
        let expected = recover(&points);

        let mut permuted = points.clone();
        permuted.reverse();
        assert_eq!(recover(&permuted), expected);

        permuted.swap(0, 2);
        assert_eq!(recover(&permuted), expected);
        assert_eq!(expected, BigInt::from(17));
    }
}
