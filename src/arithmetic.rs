use log::{debug, trace};

use crate::error::{Error, Result};

/// Extended Euclidean algorithm over the raw remainder sequence.
///
/// Returns `(d, s, t)` with `s·a + t·b = d`. The sign of `d` is whatever the
/// last non-zero remainder carries, it is not normalized. `(0, 0)` yields
/// `(0, 1, 0)`.
pub fn extended_euclidean(a: i64, b: i64) -> Result<(i64, i64, i64)> {
    let (mut r1, mut r2) = (a, b);
    let (mut s1, mut s2) = (1i64, 0i64);
    let (mut t1, mut t2) = (0i64, 1i64);

    while r2 != 0 {
        let q = r1
            .checked_div(r2)
            .ok_or(Error::Overflow("euclid quotient"))?;
        (r1, r2) = (r2, recur(r1, q, r2, "euclid remainder")?);
        (s1, s2) = (s2, recur(s1, q, s2, "bezout coefficient s")?);
        (t1, t2) = (t2, recur(t1, q, t2, "bezout coefficient t")?);
        trace!("q = {}, r = ({}, {}), s = ({}, {}), t = ({}, {})", q, r1, r2, s1, s2, t1, t2);
    }

    debug!("extended_euclidean({}, {}) = ({}, {}, {})", a, b, r1, s1, t1);
    Ok((r1, s1, t1))
}

// prev - q * cur
fn recur(prev: i64, q: i64, cur: i64, what: &'static str) -> Result<i64> {
    q.checked_mul(cur)
        .and_then(|qc| prev.checked_sub(qc))
        .ok_or(Error::Overflow(what))
}

/// `floor(p / q)` for any signs. `q` must be non-zero.
pub fn floor_div(p: i64, q: i64) -> Result<i64> {
    let quot = p.checked_div(q).ok_or(Error::Overflow("floor division"))?;
    if p % q != 0 && (p < 0) != (q < 0) {
        Ok(quot - 1)
    } else {
        Ok(quot)
    }
}

/// `ceil(p / q)` for any signs. `q` must be non-zero.
pub fn ceil_div(p: i64, q: i64) -> Result<i64> {
    let quot = p.checked_div(q).ok_or(Error::Overflow("ceiling division"))?;
    if p % q != 0 && (p < 0) == (q < 0) {
        Ok(quot + 1)
    } else {
        Ok(quot)
    }
}
