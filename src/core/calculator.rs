//! Digit-Triangle Calculator
//!
//! Node dependencies (every step is `reduce(sum)`):
//! - I = A+B, J = C+D, K = E+F, L = G+H
//! - M = I+J, N = K+L, O = M+N
//! - S = I+M, T = J+M, U = S+T
//! - V = K+N, W = L+N, X = V+W
//! - P = M+O, Q = N+O, R = P+Q

use log::debug;

use crate::core::reduce::reduce_to_single_digit as reduce;
use crate::types::{
    BirthDate, CoreCodes, DateDigits, InnerTriangle, OuterTriangle, Readings, TriangleResult,
};

/// Split a date into its eight digits.
///
/// Preconditions: `year <= 9999`, `month <= 99`, `day <= 99`.
pub fn decompose_date(year: u32, month: u32, day: u32) -> DateDigits {
    debug_assert!(year <= 9999, "year {} does not fit four digits", year);
    DateDigits {
        a: day / 10,
        b: day % 10,
        c: month / 10,
        d: month % 10,
        e: year / 1000 % 10,
        f: year / 100 % 10,
        g: year / 10 % 10,
        h: year % 10,
    }
}

/// Fixed permutation of the apex: 1→2, 2→4, 3→6, 4→8, 5→1, 6→3, 7→5, 8→7, 9→9.
/// Values outside 1..=9 pass through.
pub fn inner_code(o: u32) -> u32 {
    match o {
        1 => 2,
        2 => 4,
        3 => 6,
        4 => 8,
        5 => 1,
        6 => 3,
        7 => 5,
        8 => 7,
        9 => 9,
        other => other,
    }
}

/// reduce(S + R + T)
pub fn outer_code(s: u32, r: u32, t: u32) -> u32 {
    reduce(s + r + t)
}

/// reduce(L + I + O)
pub fn subconscious_code(l: u32, i: u32, o: u32) -> u32 {
    reduce(l + i + o)
}

/// Inner triangle from date digits
pub fn inner_triangle(digits: &DateDigits) -> InnerTriangle {
    let i = reduce(digits.a + digits.b);
    let j = reduce(digits.c + digits.d);
    let k = reduce(digits.e + digits.f);
    let l = reduce(digits.g + digits.h);
    let m = reduce(i + j);
    let n = reduce(k + l);
    let o = reduce(m + n);
    InnerTriangle { i, j, k, l, m, n, o }
}

/// Outer triangle from the inner one
pub fn outer_triangle(inner: &InnerTriangle) -> OuterTriangle {
    let s = reduce(inner.i + inner.m);
    let t = reduce(inner.j + inner.m);
    let u = reduce(s + t);

    let v = reduce(inner.k + inner.n);
    let w = reduce(inner.l + inner.n);
    let x = reduce(v + w);

    let p = reduce(inner.m + inner.o);
    let q = reduce(inner.n + inner.o);
    let r = reduce(p + q);

    OuterTriangle { p, q, r, s, t, u, v, w, x }
}

/// Compute the full triangle for a raw date.
///
/// Total over `year` 1..=9999, `month` 1..=12, `day` 1..=31; callers are
/// expected to have validated the fields (see `BirthDate`).
pub fn compute_triangle(year: u32, month: u32, day: u32) -> TriangleResult {
    let digits = decompose_date(year, month, day);
    let inner = inner_triangle(&digits);
    let outer = outer_triangle(&inner);

    let core = CoreCodes {
        inner_code: inner_code(inner.o),
        outer_code: outer_code(outer.s, outer.r, outer.t),
        subconscious_code: subconscious_code(inner.l, inner.i, inner.o),
    };
    let readings = Readings::from_nodes(&inner, &outer);

    debug!(
        "event=triangle_computed date={:04}-{:02}-{:02} apex={} inner_code={} outer_code={} subconscious_code={}",
        year, month, day, inner.o, core.inner_code, core.outer_code, core.subconscious_code
    );

    TriangleResult {
        original_date: digits,
        birth_date: BirthDate::unchecked(year as i32, month, day),
        inner,
        outer,
        core,
        readings,
    }
}

/// Stateless calculator handle, passed to collaborators explicitly
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleCalculator;

impl TriangleCalculator {
    /// Create new calculator
    pub fn new() -> Self {
        Self
    }

    /// Compute the triangle for a validated date
    pub fn compute(&self, date: BirthDate) -> TriangleResult {
        compute_triangle(date.year() as u32, date.month(), date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decompose_1990_05_15() {
        let d = decompose_date(1990, 5, 15);
        assert_eq!(
            d,
            DateDigits { a: 1, b: 5, c: 0, d: 5, e: 1, f: 9, g: 9, h: 0 }
        );
    }

    #[test]
    fn test_decompose_pads_short_years() {
        let d = decompose_date(7, 12, 3);
        assert_eq!((d.e, d.f, d.g, d.h), (0, 0, 0, 7));
        assert_eq!((d.c, d.d), (1, 2));
        assert_eq!((d.a, d.b), (0, 3));
    }

    #[test]
    fn test_inner_code_permutation() {
        let mapped: Vec<u32> = (1..=9).map(inner_code).collect();
        assert_eq!(mapped, vec![2, 4, 6, 8, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_inner_code_passthrough() {
        assert_eq!(inner_code(0), 0);
        assert_eq!(inner_code(12), 12);
    }

    #[test]
    fn test_1990_05_15_inner() {
        let result = compute_triangle(1990, 5, 15);
        assert_eq!(
            result.inner,
            InnerTriangle { i: 6, j: 5, k: 1, l: 9, m: 2, n: 1, o: 3 }
        );
    }

    #[test]
    fn test_1990_05_15_outer_and_codes() {
        let result = compute_triangle(1990, 5, 15);
        assert_eq!(
            result.outer,
            OuterTriangle { p: 5, q: 4, r: 9, s: 8, t: 7, u: 6, v: 2, w: 1, x: 3 }
        );
        assert_eq!(
            result.core,
            CoreCodes { inner_code: 6, outer_code: 6, subconscious_code: 9 }
        );
    }

    #[test]
    fn test_zero_node_preserved() {
        let result = compute_triangle(2000, 1, 1);
        assert_eq!(result.inner.i, 1);
        assert_eq!(result.inner.j, 1);
        assert_eq!(result.inner.k, 2);
        assert_eq!(result.inner.l, 0);
        assert_eq!(result.inner.n, 2);
        // W = reduce(L + N) sees the zero directly
        assert_eq!(result.outer.w, 2);
    }

    #[test]
    fn test_calculator_matches_free_function() {
        let calc = TriangleCalculator::new();
        let date = BirthDate::new(1985, 11, 3).unwrap();
        assert_eq!(calc.compute(date), compute_triangle(1985, 11, 3));
    }

    #[test]
    fn test_readings() {
        let result = compute_triangle(1990, 5, 15);
        assert_eq!(result.readings.father, "652");
        assert_eq!(result.readings.mother, "191");
        assert_eq!(result.readings.work, "786");
        assert_eq!(result.readings.family, "459");
        assert_eq!(result.readings.elder, "213");
    }
}
