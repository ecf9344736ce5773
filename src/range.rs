use std::fmt;

use log::debug;
use serde::Serialize;

use crate::arithmetic::{ceil_div, floor_div};
use crate::error::{Error, Result};

/// How the range of the parameter `n` is derived from `x(n) >= 0` and
/// `y(n) >= 0`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RangePolicy {
    /// Upper bound only from a positive `a/d` (truncating division), lower
    /// bound only from a positive `b/d`.
    Classic,
    /// Both step signs contribute, with floor/ceiling division throughout.
    Exact,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Admissible values of `n`. A `None` bound is unbounded on that side.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Admissible {
    /// Both bounds finite and `min <= max`.
    Interval { min: i64, max: i64 },
    /// Bounds that do not form an interval; each finite one is reported on
    /// its own.
    Boundaries {
        upper: Option<i64>,
        lower: Option<i64>,
    },
    /// Every integer `n` works.
    Unbounded,
    /// A zero step with a negative base value: no `n` works.
    Infeasible { axis: Axis },
}

impl Admissible {
    fn from_bounds(lower: Option<i64>, upper: Option<i64>) -> Self {
        match (lower, upper) {
            (Some(min), Some(max)) if min <= max => Admissible::Interval { min, max },
            _ => Admissible::Boundaries { upper, lower },
        }
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, Admissible::Interval { .. })
    }

    /// The values of `n` listed in a report, in report order: the whole
    /// interval, or the upper boundary followed by the lower one.
    pub fn candidates(&self) -> Box<dyn Iterator<Item = i64>> {
        match *self {
            Admissible::Interval { min, max } => Box::new(min..=max),
            Admissible::Boundaries { upper, lower } => {
                Box::new(upper.into_iter().chain(lower))
            }
            Admissible::Unbounded | Admissible::Infeasible { .. } => Box::new(std::iter::empty()),
        }
    }
}

fn negate(v: i64, what: &'static str) -> Result<i64> {
    v.checked_neg().ok_or(Error::Overflow(what))
}

/// `y(n) >= 0` bounds `n` from above only when `step_y > 0`, via truncating
/// division (so a negative `y0` rounds toward zero). `x(n) >= 0` bounds `n`
/// from below only when `step_x > 0`, via exact ceiling division.
pub fn classic(x0: i64, y0: i64, step_x: i64, step_y: i64) -> Result<Admissible> {
    let upper = if step_y > 0 { Some(y0 / step_y) } else { None };
    let lower = if step_x > 0 {
        Some(ceil_div(negate(x0, "-x0")?, step_x)?)
    } else {
        None
    };
    debug!("classic bounds: lower = {:?}, upper = {:?}", lower, upper);
    Ok(Admissible::from_bounds(lower, upper))
}

/// The exact set `{n : x(n) >= 0 and y(n) >= 0}`.
pub fn exact(x0: i64, y0: i64, step_x: i64, step_y: i64) -> Result<Admissible> {
    let mut lower: Option<i64> = None;
    let mut upper: Option<i64> = None;

    if step_x > 0 {
        lower = Some(ceil_div(negate(x0, "-x0")?, step_x)?);
    } else if step_x < 0 {
        upper = Some(floor_div(negate(x0, "-x0")?, step_x)?);
    } else if x0 < 0 {
        return Ok(Admissible::Infeasible { axis: Axis::X });
    }

    if step_y > 0 {
        let bound = floor_div(y0, step_y)?;
        upper = Some(upper.map_or(bound, |u| u.min(bound)));
    } else if step_y < 0 {
        let bound = ceil_div(y0, step_y)?;
        lower = Some(lower.map_or(bound, |l| l.max(bound)));
    } else if y0 < 0 {
        return Ok(Admissible::Infeasible { axis: Axis::Y });
    }

    debug!("exact bounds: lower = {:?}, upper = {:?}", lower, upper);
    if lower.is_none() && upper.is_none() {
        return Ok(Admissible::Unbounded);
    }
    Ok(Admissible::from_bounds(lower, upper))
}
