use log::debug;
use serde::Serialize;

use crate::arithmetic::extended_euclidean;
use crate::error::{Error, Result};
use crate::range::{self, Admissible, RangePolicy};

/// `a·x + b·y = c` over signed 64-bit integers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Equation {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

/// `s·a + t·b = gcd`, as produced by [`extended_euclidean`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Bezout {
    pub gcd: i64,
    pub s:   i64,
    pub t:   i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Point {
    pub n: i64,
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn is_non_negative(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

/// The solution family `x = x0 + step_x·n`, `y = y0 − step_y·n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub equation: Equation,
    pub bezout:   Bezout,
    pub x0:       i64,
    pub y0:       i64,
    pub step_x:   i64,
    pub step_y:   i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    /// `c` is not a multiple of the gcd.
    Unsolvable { equation: Equation, bezout: Bezout },
    Solvable(Solution),
}

impl Equation {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    pub fn bezout(&self) -> Result<Bezout> {
        let (gcd, s, t) = extended_euclidean(self.a, self.b)?;
        Ok(Bezout { gcd, s, t })
    }

    /// Runs the gcd, divisibility and particular-solution steps. Fails on
    /// `a = b = 0` before anything divides by the gcd.
    pub fn analyze(&self) -> Result<Analysis> {
        let bezout = self.bezout()?;
        let d = bezout.gcd;
        if d == 0 {
            debug!("{}x + {}y = {} has gcd 0", self.a, self.b, self.c);
            return Err(Error::DegenerateEquation);
        }

        let rem = self.c.checked_rem(d).ok_or(Error::Overflow("c mod d"))?;
        if rem != 0 {
            debug!("{} mod {} = {}, no integer solutions", self.c, d, rem);
            return Ok(Analysis::Unsolvable {
                equation: *self,
                bezout,
            });
        }

        let k = self.c.checked_div(d).ok_or(Error::Overflow("c/d"))?;
        let x0 = bezout.s.checked_mul(k).ok_or(Error::Overflow("x0 = s*(c/d)"))?;
        let y0 = bezout.t.checked_mul(k).ok_or(Error::Overflow("y0 = t*(c/d)"))?;
        let step_x = self.b.checked_div(d).ok_or(Error::Overflow("b/d"))?;
        let step_y = self.a.checked_div(d).ok_or(Error::Overflow("a/d"))?;
        debug!(
            "particular solution ({}, {}), steps ({}, {})",
            x0, y0, step_x, step_y
        );

        Ok(Analysis::Solvable(Solution {
            equation: *self,
            bezout,
            x0,
            y0,
            step_x,
            step_y,
        }))
    }
}

impl Solution {
    /// `(x(n), y(n))`.
    pub fn at(&self, n: i64) -> Result<Point> {
        let x = self
            .step_x
            .checked_mul(n)
            .and_then(|dx| self.x0.checked_add(dx))
            .ok_or(Error::Overflow("x(n) = x0 + (b/d)n"))?;
        let y = self
            .step_y
            .checked_mul(n)
            .and_then(|dy| self.y0.checked_sub(dy))
            .ok_or(Error::Overflow("y(n) = y0 - (a/d)n"))?;
        Ok(Point { n, x, y })
    }

    pub fn admissible(&self, policy: RangePolicy) -> Result<Admissible> {
        match policy {
            RangePolicy::Classic => range::classic(self.x0, self.y0, self.step_x, self.step_y),
            RangePolicy::Exact => range::exact(self.x0, self.y0, self.step_x, self.step_y),
        }
    }

    /// The points reported for `admissible`: every non-negative point of an
    /// interval, or each finite boundary as is. Lazy, so an interval is never
    /// held in memory.
    pub fn reported<'a>(
        &'a self,
        admissible: &Admissible,
    ) -> impl Iterator<Item = Result<Point>> + 'a {
        let interval = admissible.is_interval();
        admissible
            .candidates()
            .map(move |n| self.at(n))
            .filter(move |point| match point {
                Ok(point) => !interval || point.is_non_negative(),
                Err(_) => true,
            })
    }
}
