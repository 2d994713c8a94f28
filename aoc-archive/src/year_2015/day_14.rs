use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["simulation"])]
pub struct Solver;

const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, Copy)]
pub struct Reindeer {
    speed: u32,
    fly: u32,
    rest: u32,
}

impl Reindeer {
    fn distance_after(&self, seconds: u32) -> u32 {
        let cycle = self.fly + self.rest;
        let full = seconds / cycle;
        let partial = (seconds % cycle).min(self.fly);
        (full * self.fly + partial) * self.speed
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let tokens: Vec<&str> = line.split_whitespace().collect();
                let num = |i: usize| -> Result<u32, ParseError> {
                    tokens.get(i).and_then(|t| t.parse().ok()).ok_or_else(bad)
                };
                let reindeer = Reindeer {
                    speed: num(3)?,
                    fly: num(6)?,
                    rest: num(13)?,
                };
                if reindeer.fly + reindeer.rest == 0 {
                    return Err(bad());
                }
                Ok(reindeer)
            })
            .collect()
    }
}

pub fn furthest(herd: &[Reindeer], seconds: u32) -> u32 {
    herd.iter().map(|r| r.distance_after(seconds)).max().unwrap_or(0)
}

/// Each second every reindeer in the lead scores a point; returns the winning score
pub fn most_points(herd: &[Reindeer], seconds: u32) -> u32 {
    let mut points = vec![0; herd.len()];
    for t in 1..=seconds {
        let lead = furthest(herd, t);
        for (score, reindeer) in points.iter_mut().zip(herd) {
            if reindeer.distance_after(t) == lead {
                *score += 1;
            }
        }
    }
    points.into_iter().max().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(furthest(shared, RACE_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(most_points(shared, RACE_SECONDS).to_string())
    }
}
