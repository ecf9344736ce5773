use diophantine::equation::{Analysis, Equation, Point, Solution};
use diophantine::range::{Admissible, RangePolicy};
use diophantine::report::{write_json, write_text};
use rand::{thread_rng, Rng};

fn render(a: i64, b: i64, c: i64, policy: RangePolicy) -> String {
    let analysis = Equation::new(a, b, c).analyze().unwrap();
    let mut out = Vec::new();
    write_text(&mut out, &analysis, policy).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn interval_report_test() {
    let expected = "\
Problem: 2x + 3y = 12
1. gcd(a, b) = d = 1
2. sa + tb = s = -1, t = 1
3. x0 = s⋅c/d (x0 = -12), y0 = t⋅c/d (y0 = 12)
4. x = x0 + (b/d)n, y = y0 − (a/d)n = (x = -12 + (3/1)n, y = 12 − (2/1)n)
5. All N values:
All N: 4, 5, 6
n = 4 -> x = 0, y = 4
n = 5 -> x = 3, y = 2
n = 6 -> x = 6, y = 0
";
    assert_eq!(render(2, 3, 12, RangePolicy::Classic), expected);
    assert_eq!(render(2, 3, 12, RangePolicy::Exact), expected);
}

#[test]
fn disjoint_bounds_report_test() {
    let text = render(3, 4, 5, RangePolicy::Classic);
    assert_eq!(
        text,
        "\
Problem: 3x + 4y = 5
1. gcd(a, b) = d = 1
2. sa + tb = s = -1, t = 1
3. x0 = s⋅c/d (x0 = -5), y0 = t⋅c/d (y0 = 5)
4. x = x0 + (b/d)n, y = y0 − (a/d)n = (x = -5 + (4/1)n, y = 5 − (3/1)n)
5. All N values:
All N: 1, 2
n = 1 -> x = -1, y = 2
n = 2 -> x = 3, y = -1
"
    );

    let text = render(3, 4, 5, RangePolicy::Exact);
    assert!(text.ends_with("Candidate n: 1, 2\nn = 1 -> x = -1, y = 2\nn = 2 -> x = 3, y = -1\n"));
}

#[test]
fn zero_coefficient_report_test() {
    let text = render(0, 5, 10, RangePolicy::Classic);
    assert_eq!(
        text,
        "\
Problem: 0x + 5y = 10
1. gcd(a, b) = d = 5
2. sa + tb = s = 0, t = 1
3. x0 = s⋅c/d (x0 = 0), y0 = t⋅c/d (y0 = 2)
4. x = x0 + (b/d)n, y = y0 − (a/d)n = (x = 0 + (5/5)n, y = 2 − (0/5)n)
5. All N values:
All N: 0
n = 0 -> x = 0, y = 2
"
    );
}

#[test]
fn truncated_upper_bound_report_test() {
    // y0 = -1 truncates to an upper bound of 0, and the re-check drops n = 0
    let text = render(3, 4, -1, RangePolicy::Classic);
    assert!(text.ends_with("5. All N values:\nAll N: 0\n"));

    let text = render(3, 4, -1, RangePolicy::Exact);
    assert!(text.ends_with("Candidate n: -1, 0\nn = -1 -> x = -3, y = 2\nn = 0 -> x = 1, y = -1\n"));
}

#[test]
fn negative_gcd_report_test() {
    let text = render(3, -4, 5, RangePolicy::Classic);
    assert_eq!(
        text,
        "\
Problem: 3x + -4y = 5
1. gcd(a, b) = d = -1
2. sa + tb = s = 1, t = 1
3. x0 = s⋅c/d (x0 = -5), y0 = t⋅c/d (y0 = -5)
4. x = x0 + (b/d)n, y = y0 − (a/d)n = (x = -5 + (-4/-1)n, y = -5 − (3/-1)n)
5. All N values:
All N: 2
n = 2 -> x = 3, y = 1
"
    );
}

#[test]
fn json_report_test() {
    let analysis = Equation::new(2, 3, 12).analyze().unwrap();
    let mut out = Vec::new();
    write_json(&mut out, &analysis, RangePolicy::Classic).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["equation"]["c"], 12);
    assert_eq!(value["solvable"], true);
    assert_eq!(value["particular"]["x0"], -12);
    assert_eq!(value["step"]["y"], 2);
    assert_eq!(value["policy"], "classic");
    assert_eq!(value["admissible"]["kind"], "interval");
    assert_eq!(value["admissible"]["max"], 6);
    let solutions = value["solutions"].as_array().unwrap();
    assert_eq!(solutions.len(), 3);
    assert_eq!(solutions[1]["x"], 3);
    assert_eq!(solutions[1]["y"], 2);
}

// Reference scan over a window wide enough to contain every non-negative
// solution of the small equations generated below.
fn scan(solution: &Solution, window: i64) -> Vec<i64> {
    (-window..=window)
        .filter(|&n| solution.at(n).unwrap().is_non_negative())
        .collect()
}

#[test]
fn exact_policy_matches_scan_test() {
    let mut rng = thread_rng();
    let window = 3000;
    for _ in 0..300 {
        let a: i64 = rng.gen_range(-30..=30);
        let b: i64 = rng.gen_range(-30..=30);
        let c: i64 = rng.gen_range(-60..=60);
        if a == 0 && b == 0 {
            continue;
        }
        let solution = match Equation::new(a, b, c).analyze().unwrap() {
            Analysis::Solvable(s) => s,
            Analysis::Unsolvable { .. } => continue,
        };
        let found = scan(&solution, window);
        let admissible = solution.admissible(RangePolicy::Exact).unwrap();
        let context = format!("{}x + {}y = {}: {:?}", a, b, c, admissible);

        match admissible {
            Admissible::Interval { min, max } => {
                assert_eq!(found, (min..=max).collect::<Vec<_>>(), "{}", context);
            }
            Admissible::Boundaries {
                upper: Some(_),
                lower: Some(_),
            } => assert!(found.is_empty(), "{}", context),
            Admissible::Boundaries {
                upper: None,
                lower: Some(lower),
            } => assert_eq!(found, (lower..=window).collect::<Vec<_>>(), "{}", context),
            Admissible::Boundaries {
                upper: Some(upper),
                lower: None,
            } => assert_eq!(found, (-window..=upper).collect::<Vec<_>>(), "{}", context),
            Admissible::Boundaries {
                upper: None,
                lower: None,
            } => panic!("exact policy never leaves both bounds open: {}", context),
            Admissible::Unbounded => assert_eq!(found.len() as i64, 2 * window + 1, "{}", context),
            Admissible::Infeasible { .. } => assert!(found.is_empty(), "{}", context),
        }
    }
}

#[test]
fn classic_policy_with_positive_steps_test() {
    let mut rng = thread_rng();
    for _ in 0..300 {
        let a: i64 = rng.gen_range(1..=30);
        let b: i64 = rng.gen_range(1..=30);
        let c: i64 = rng.gen_range(-60..=60);
        let solution = match Equation::new(a, b, c).analyze().unwrap() {
            Analysis::Solvable(s) => s,
            Analysis::Unsolvable { .. } => continue,
        };
        let expected = scan(&solution, 3000);
        let admissible = solution.admissible(RangePolicy::Classic).unwrap();
        let points: Vec<Point> = solution
            .reported(&admissible)
            .collect::<Result<_, _>>()
            .unwrap();

        if !admissible.is_interval() {
            assert!(expected.is_empty(), "{}x + {}y = {}", a, b, c);
            continue;
        }
        let printed: Vec<i64> = points.iter().map(|p| p.n).collect();
        assert_eq!(printed, expected, "{}x + {}y = {}", a, b, c);
        for p in &points {
            assert!(p.is_non_negative());
            assert_eq!(a * p.x + b * p.y, c);
        }
    }
}
