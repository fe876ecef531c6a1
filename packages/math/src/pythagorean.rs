//! Pythagorean triple enumeration and the singular-perimeter count.
//!
//! A length of wire can be bent into an integer sided right triangle only for
//! certain perimeters, and some perimeters admit more than one triangle.
//! Primitive triples are generated with Euclid's formula and expanded by
//! integer multiples to reach every triangle exactly once; a tally per
//! perimeter then tells which wire lengths admit exactly one triangle.

use num_integer::Integer;
use rayon::prelude::*;
use thiserror::Error;

/// Errors from the counting entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriangleError {
    /// The perimeter bound must be a positive integer.
    #[error("max perimeter must be positive, got {0}")]
    InvalidArgument(u64),
}

/// An integer sided right triangle (a, b, c) with a² + b² = c².
///
/// Sides are not sorted; `from_generators` puts the odd leg first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triple {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Triple {
    /// Build a triple from Euclid's formula: (m² − n², 2mn, m² + n²).
    ///
    /// The result is primitive exactly when m > n ≥ 1, gcd(m, n) = 1 and
    /// m, n have opposite parity.
    ///
    /// # Example
    ///
    /// ```
    /// use math::pythagorean::Triple;
    ///
    /// assert_eq!(Triple::from_generators(2, 1), Triple { a: 3, b: 4, c: 5 });
    /// assert_eq!(Triple::from_generators(3, 2), Triple { a: 5, b: 12, c: 13 });
    /// ```
    pub fn from_generators(m: u64, n: u64) -> Self {
        debug_assert!(m > n && n >= 1);
        let m2 = m * m;
        let n2 = n * n;
        Triple {
            a: m2 - n2,
            b: 2 * m * n,
            c: m2 + n2,
        }
    }

    /// Sum of the three sides, i.e. the wire length bent into this triangle.
    pub fn perimeter(&self) -> u64 {
        self.a + self.b + self.c
    }

    /// Whether gcd(a, b, c) = 1.
    pub fn is_primitive(&self) -> bool {
        self.a.gcd(&self.b).gcd(&self.c) == 1
    }

    /// The similar triangle with every side multiplied by k.
    pub fn scale(&self, k: u64) -> Self {
        Triple {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
        }
    }
}

/// Iterator over primitive Pythagorean triples with perimeter at most a bound.
///
/// Walks generator pairs (m, n) with m > n ≥ 1, keeping only pairs with
/// gcd(m, n) = 1 and opposite parity; every primitive triple arises from
/// exactly one such pair, so each is yielded exactly once. The m range is cut
/// off at floor(sqrt(bound / 2)) + 1, a deliberately loose limit; the
/// perimeter check on each candidate is what bounds the output.
///
/// # Example
///
/// ```
/// use math::pythagorean::{PrimitiveTriples, Triple};
///
/// let triples: Vec<Triple> = PrimitiveTriples::with_max_perimeter(30).collect();
/// assert_eq!(triples, vec![
///     Triple { a: 3, b: 4, c: 5 },
///     Triple { a: 5, b: 12, c: 13 },
/// ]);
/// ```
pub struct PrimitiveTriples {
    max_perimeter: u64,
    m_end: u64,
    m: u64,
    n: u64,
}

impl PrimitiveTriples {
    pub fn with_max_perimeter(max_perimeter: u64) -> Self {
        // Perimeter is 2m² + 2mn ≥ 2m², so m stays below sqrt(bound / 2)
        // plus one unit of slack.
        let m_end = (max_perimeter as f64 / 2.0).sqrt() as u64 + 1;
        PrimitiveTriples {
            max_perimeter,
            m_end,
            m: 2,
            n: 1,
        }
    }
}

impl Iterator for PrimitiveTriples {
    type Item = Triple;

    fn next(&mut self) -> Option<Self::Item> {
        while self.m < self.m_end {
            while self.n < self.m {
                let (m, n) = (self.m, self.n);
                self.n += 1;
                if (m + n) % 2 == 1 && m.gcd(&n) == 1 {
                    let triple = Triple::from_generators(m, n);
                    if triple.perimeter() <= self.max_perimeter {
                        return Some(triple);
                    }
                }
            }
            self.m += 1;
            self.n = 1;
        }
        None
    }
}

/// Count how many integer right triangles exist per perimeter.
///
/// Returns a vector indexed by perimeter (index 0 unused) where entry p is
/// the number of distinct integer right triangles, primitive or scaled, with
/// perimeter exactly p. Perimeters with no triangle stay at zero.
///
/// # Example
///
/// ```
/// use math::pythagorean::perimeter_tally;
///
/// let tally = perimeter_tally(120).unwrap();
/// assert_eq!(tally[12], 1);  // (3, 4, 5)
/// assert_eq!(tally[20], 0);  // no integer right triangle uses 20 cm
/// assert_eq!(tally[120], 3); // (30,40,50), (20,48,52), (24,45,51)
/// ```
pub fn perimeter_tally(max_perimeter: u64) -> Result<Vec<u32>, TriangleError> {
    if max_perimeter == 0 {
        return Err(TriangleError::InvalidArgument(max_perimeter));
    }

    let mut tally = vec![0u32; max_perimeter as usize + 1];
    for triple in PrimitiveTriples::with_max_perimeter(max_perimeter) {
        let p_primitive = triple.perimeter();
        let mut p = p_primitive;
        while p <= max_perimeter {
            tally[p as usize] += 1;
            p += p_primitive;
        }
    }
    Ok(tally)
}

/// Count the perimeters p ≤ max_perimeter formed by exactly one integer
/// right triangle.
///
/// The singular count is kept up to date while tallying: a perimeter joins
/// the count when its tally reaches 1 and leaves it when the tally reaches 2,
/// so no second pass over the tally is needed.
///
/// # Example
///
/// ```
/// use math::pythagorean::count_singular_perimeters;
///
/// // 12, 24, 30, 36, 40 and 48 are the only such wire lengths up to 48.
/// assert_eq!(count_singular_perimeters(48), Ok(6));
/// assert_eq!(count_singular_perimeters(11), Ok(0));
/// ```
pub fn count_singular_perimeters(max_perimeter: u64) -> Result<u64, TriangleError> {
    if max_perimeter == 0 {
        return Err(TriangleError::InvalidArgument(max_perimeter));
    }

    let mut tally = vec![0u32; max_perimeter as usize + 1];
    let mut singular = 0u64;

    for triple in PrimitiveTriples::with_max_perimeter(max_perimeter) {
        let p_primitive = triple.perimeter();
        let mut p = p_primitive;
        while p <= max_perimeter {
            let slot = &mut tally[p as usize];
            *slot += 1;
            match *slot {
                1 => singular += 1,
                2 => singular -= 1,
                _ => {}
            }
            p += p_primitive;
        }
    }

    Ok(singular)
}

/// Like `count_singular_perimeters`, but partitions the generator m-range
/// across rayon workers with an independent local tally each, merged
/// afterward.
pub fn count_singular_perimeters_parallel(max_perimeter: u64) -> Result<u64, TriangleError> {
    if max_perimeter == 0 {
        return Err(TriangleError::InvalidArgument(max_perimeter));
    }

    let len = max_perimeter as usize + 1;
    let m_end = (max_perimeter as f64 / 2.0).sqrt() as u64 + 1;

    let tally = (2..m_end)
        .into_par_iter()
        .fold(
            || vec![0u32; len],
            |mut tally, m| {
                for n in 1..m {
                    if (m + n) % 2 == 1 && m.gcd(&n) == 1 {
                        let p_primitive = Triple::from_generators(m, n).perimeter();
                        let mut p = p_primitive;
                        while p <= max_perimeter {
                            tally[p as usize] += 1;
                            p += p_primitive;
                        }
                    }
                }
                tally
            },
        )
        .reduce(
            || vec![0u32; len],
            |mut left, right| {
                for (l, r) in left.iter_mut().zip(right) {
                    *l += r;
                }
                left
            },
        );

    Ok(tally.iter().filter(|&&count| count == 1).count() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_generators() {
        assert_eq!(Triple::from_generators(2, 1), Triple { a: 3, b: 4, c: 5 });
        assert_eq!(Triple::from_generators(3, 2), Triple { a: 5, b: 12, c: 13 });
        assert_eq!(Triple::from_generators(4, 1), Triple { a: 15, b: 8, c: 17 });
    }

    #[test]
    fn test_scale() {
        let scaled = Triple::from_generators(2, 1).scale(3);
        assert_eq!(scaled, Triple { a: 9, b: 12, c: 15 });
        assert_eq!(scaled.perimeter(), 36);
        assert!(!scaled.is_primitive());
    }

    #[test]
    fn test_primitive_triples_are_valid() {
        let mut seen = 0;
        for t in PrimitiveTriples::with_max_perimeter(1000) {
            assert_eq!(t.a * t.a + t.b * t.b, t.c * t.c, "{:?} not right-angled", t);
            assert!(t.is_primitive(), "{:?} not primitive", t);
            assert!(t.perimeter() <= 1000);
            seen += 1;
        }
        assert!(seen > 0);
    }

    #[test]
    fn test_primitive_triples_tiny_bound() {
        assert_eq!(PrimitiveTriples::with_max_perimeter(11).count(), 0);
        assert_eq!(PrimitiveTriples::with_max_perimeter(12).count(), 1);
    }

    #[test]
    fn test_no_singular_perimeter_below_12() {
        assert_eq!(count_singular_perimeters(1), Ok(0));
        assert_eq!(count_singular_perimeters(11), Ok(0));
    }

    #[test]
    fn test_smallest_singular_perimeter() {
        assert_eq!(count_singular_perimeters(12), Ok(1));
    }

    #[test]
    fn test_singular_perimeters_up_to_48() {
        assert_eq!(count_singular_perimeters(48), Ok(6));

        let tally = perimeter_tally(48).unwrap();
        let singular: Vec<usize> = (1..=48).filter(|&p| tally[p] == 1).collect();
        assert_eq!(singular, vec![12, 24, 30, 36, 40, 48]);
    }

    #[test]
    fn test_perimeter_120_has_three_solutions() {
        // (30, 40, 50), (20, 48, 52) and (24, 45, 51) all use 120 cm.
        let tally = perimeter_tally(120).unwrap();
        assert_eq!(tally[120], 3);
        assert_eq!(
            count_singular_perimeters(120),
            count_singular_perimeters(119)
        );
    }

    #[test]
    fn test_invalid_argument() {
        assert_eq!(
            count_singular_perimeters(0),
            Err(TriangleError::InvalidArgument(0))
        );
        assert_eq!(perimeter_tally(0), Err(TriangleError::InvalidArgument(0)));
        assert_eq!(
            count_singular_perimeters_parallel(0),
            Err(TriangleError::InvalidArgument(0))
        );
    }

    #[test]
    fn test_matches_brute_force() {
        let max = 5000;
        let tally = perimeter_tally(max).unwrap();
        assert_eq!(tally, brute_force_tally(max));

        let singular = tally.iter().filter(|&&c| c == 1).count() as u64;
        assert_eq!(count_singular_perimeters(max), Ok(singular));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for max in [1, 11, 12, 120, 10_000] {
            assert_eq!(
                count_singular_perimeters_parallel(max),
                count_singular_perimeters(max),
                "mismatch at max = {}",
                max
            );
        }
    }

    #[test]
    fn test_reference_answer() {
        assert_eq!(count_singular_perimeters(1_500_000), Ok(161_667));
    }

    /// Direct O(L²) search over leg pairs (a, b) with a ≤ b, independent of
    /// Euclid's formula.
    fn brute_force_tally(max_perimeter: u64) -> Vec<u32> {
        let mut tally = vec![0u32; max_perimeter as usize + 1];
        for a in 1..=max_perimeter / 3 {
            for b in a..=max_perimeter {
                let c2 = a * a + b * b;
                let c = (c2 as f64).sqrt() as u64;
                if a + b + c > max_perimeter {
                    break;
                }
                if c * c == c2 {
                    tally[(a + b + c) as usize] += 1;
                }
            }
        }
        tally
    }
}
