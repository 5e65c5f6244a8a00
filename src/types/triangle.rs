//! Triangle node sets and the bundled computation result

use serde::Serialize;

use crate::types::{BirthDate, DateDigits};

/// Inner triangle: bottom row I,J,K,L, middle row M,N, apex O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct InnerTriangle {
    pub i: u32,
    pub j: u32,
    pub k: u32,
    pub l: u32,
    pub m: u32,
    pub n: u32,
    /// Apex, the main personality value
    pub o: u32,
}

impl InnerTriangle {
    /// Nodes in I..O order
    pub fn nodes(&self) -> [u32; 7] {
        [self.i, self.j, self.k, self.l, self.m, self.n, self.o]
    }
}

/// Outer triangle: top wing P,Q,R, left wing S,T,U, right wing V,W,X
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct OuterTriangle {
    pub p: u32,
    pub q: u32,
    pub r: u32,
    pub s: u32,
    pub t: u32,
    pub u: u32,
    pub v: u32,
    pub w: u32,
    pub x: u32,
}

impl OuterTriangle {
    /// Nodes in P..X order
    pub fn nodes(&self) -> [u32; 9] {
        [
            self.p, self.q, self.r, self.s, self.t, self.u, self.v, self.w, self.x,
        ]
    }
}

/// The three derived codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoreCodes {
    /// Permutation of O
    pub inner_code: u32,
    /// reduce(S + R + T)
    pub outer_code: u32,
    /// reduce(L + I + O)
    pub subconscious_code: u32,
}

/// Three-digit readings formed by concatenating node values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readings {
    /// I J M
    pub father: String,
    /// K L N
    pub mother: String,
    /// T S U
    pub work: String,
    /// Q P R
    pub family: String,
    /// V W X
    pub elder: String,
}

impl Readings {
    pub fn from_nodes(inner: &InnerTriangle, outer: &OuterTriangle) -> Self {
        let join = |a: u32, b: u32, c: u32| format!("{}{}{}", a, b, c);
        Self {
            father: join(inner.i, inner.j, inner.m),
            mother: join(inner.k, inner.l, inner.n),
            work: join(outer.t, outer.s, outer.u),
            family: join(outer.q, outer.p, outer.r),
            elder: join(outer.v, outer.w, outer.x),
        }
    }
}

/// Everything one computation produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriangleResult {
    pub original_date: DateDigits,
    pub birth_date: BirthDate,
    pub inner: InnerTriangle,
    pub outer: OuterTriangle,
    pub core: CoreCodes,
    pub readings: Readings,
}

impl TriangleResult {
    /// Apex value O
    pub fn main_code(&self) -> u32 {
        self.inner.o
    }

    /// All sixteen node values, inner then outer
    pub fn all_nodes(&self) -> Vec<u32> {
        let mut nodes = self.inner.nodes().to_vec();
        nodes.extend_from_slice(&self.outer.nodes());
        nodes
    }
}
