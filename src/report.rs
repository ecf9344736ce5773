use std::io::Write;

use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::equation::{Analysis, Equation, Solution};
use crate::error::Result;
use crate::range::{Admissible, RangePolicy};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub equation:   Equation,
    pub gcd:        i64,
    pub s:          i64,
    pub t:          i64,
    pub solvable:   bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particular: Option<Particular>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step:       Option<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy:     Option<RangePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admissible: Option<Admissible>,
    pub solutions:  Solutions<'a>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Particular {
    pub x0: i64,
    pub y0: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub x: i64,
    pub y: i64,
}

/// The reported points, computed while they are serialized.
#[derive(Debug, Clone, Copy)]
pub struct Solutions<'a> {
    family: Option<(&'a Solution, Admissible)>,
}

impl<'a> Serialize for Solutions<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        if let Some((solution, admissible)) = &self.family {
            for point in solution.reported(admissible) {
                let point = point.map_err(S::Error::custom)?;
                seq.serialize_element(&point)?;
            }
        }
        seq.end()
    }
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis, policy: RangePolicy) -> Result<Report<'a>> {
        match analysis {
            Analysis::Unsolvable { equation, bezout } => Ok(Report {
                equation:   *equation,
                gcd:        bezout.gcd,
                s:          bezout.s,
                t:          bezout.t,
                solvable:   false,
                particular: None,
                step:       None,
                policy:     None,
                admissible: None,
                solutions:  Solutions { family: None },
            }),
            Analysis::Solvable(solution) => {
                let admissible = solution.admissible(policy)?;
                Ok(Report {
                    equation:   solution.equation,
                    gcd:        solution.bezout.gcd,
                    s:          solution.bezout.s,
                    t:          solution.bezout.t,
                    solvable:   true,
                    particular: Some(Particular {
                        x0: solution.x0,
                        y0: solution.y0,
                    }),
                    step:       Some(Step {
                        x: solution.step_x,
                        y: solution.step_y,
                    }),
                    policy:     Some(policy),
                    admissible: Some(admissible),
                    solutions:  Solutions {
                        family: Some((solution, admissible)),
                    },
                })
            }
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, analysis: &Analysis, policy: RangePolicy) -> Result<()> {
    let report = Report::new(analysis, policy)?;
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the numbered step-by-step report. Interval values are streamed,
/// never collected.
pub fn write_text<W: Write>(out: &mut W, analysis: &Analysis, policy: RangePolicy) -> Result<()> {
    let (equation, bezout) = match analysis {
        Analysis::Unsolvable { equation, bezout } => (equation, bezout),
        Analysis::Solvable(solution) => (&solution.equation, &solution.bezout),
    };
    let d = bezout.gcd;

    writeln!(out, "Problem: {}x + {}y = {}", equation.a, equation.b, equation.c)?;
    writeln!(out, "1. gcd(a, b) = d = {}", d)?;
    writeln!(out, "2. sa + tb = s = {}, t = {}", bezout.s, bezout.t)?;

    let solution = match analysis {
        Analysis::Unsolvable { .. } => {
            writeln!(
                out,
                "3) {} is not divisible by {} -> No integer solutions",
                equation.c, d
            )?;
            return Ok(());
        }
        Analysis::Solvable(solution) => solution,
    };

    writeln!(
        out,
        "3. x0 = s⋅c/d (x0 = {}), y0 = t⋅c/d (y0 = {})",
        solution.x0, solution.y0
    )?;
    writeln!(
        out,
        "4. x = x0 + (b/d)n, y = y0 − (a/d)n = (x = {} + ({}/{})n, y = {} − ({}/{})n)",
        solution.x0, equation.b, d, solution.y0, equation.a, d
    )?;
    writeln!(out, "5. All N values:")?;

    let admissible = solution.admissible(policy)?;
    write_admissible(out, solution, &admissible, policy)
}

fn write_admissible<W: Write>(
    out: &mut W,
    solution: &Solution,
    admissible: &Admissible,
    policy: RangePolicy,
) -> Result<()> {
    let label = match admissible {
        Admissible::Interval { .. } => "All N",
        Admissible::Boundaries { .. } => match policy {
            RangePolicy::Classic => "All N",
            RangePolicy::Exact => "Candidate n",
        },
        Admissible::Unbounded => {
            writeln!(out, "All integers n are valid")?;
            return Ok(());
        }
        Admissible::Infeasible { axis } => {
            writeln!(out, "No solution with {} >= 0", axis)?;
            return Ok(());
        }
    };

    write!(out, "{}: ", label)?;
    for (i, n) in admissible.candidates().enumerate() {
        if i > 0 {
            write!(out, ", ")?;
        }
        write!(out, "{}", n)?;
    }
    writeln!(out)?;

    for point in solution.reported(admissible) {
        let point = point?;
        writeln!(out, "n = {} -> x = {}, y = {}", point.n, point.x, point.y)?;
    }
    Ok(())
}
