use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["graph", "memoization"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source<'a> {
    Wire(&'a str),
    Signal(u16),
}

impl<'a> Source<'a> {
    fn parse(token: &'a str) -> Result<Self, ParseError> {
        if let Ok(value) = token.parse() {
            Ok(Source::Signal(value))
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(Source::Wire(token))
        } else {
            Err(ParseError::InvalidFormat(format!("bad signal source '{}'", token)))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Gate<'a> {
    Direct(Source<'a>),
    Not(Source<'a>),
    And(Source<'a>, Source<'a>),
    Or(Source<'a>, Source<'a>),
    LShift(Source<'a>, Source<'a>),
    RShift(Source<'a>, Source<'a>),
}

impl<'a> Gate<'a> {
    fn sources(&self) -> Vec<Source<'a>> {
        match *self {
            Gate::Direct(a) | Gate::Not(a) => vec![a],
            Gate::And(a, b) | Gate::Or(a, b) | Gate::LShift(a, b) | Gate::RShift(a, b) => {
                vec![a, b]
            }
        }
    }
}

/// Wire signals as a memoized DAG: each wire depends on the wires feeding its gate
struct Circuit<'a, 'g> {
    gates: &'g HashMap<&'a str, Gate<'a>>,
    overrides: HashMap<&'a str, u16>,
}

impl<'a> DpProblem<&'a str, Option<u16>> for Circuit<'a, '_> {
    fn deps(&self, wire: &&'a str) -> Vec<&'a str> {
        if self.overrides.contains_key(wire) {
            return vec![];
        }
        self.gates
            .get(wire)
            .map(|gate| {
                gate.sources()
                    .into_iter()
                    .filter_map(|s| match s {
                        Source::Wire(w) => Some(w),
                        Source::Signal(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn compute(&self, wire: &&'a str, deps: Vec<Option<u16>>) -> Option<u16> {
        if let Some(&value) = self.overrides.get(wire) {
            return Some(value);
        }
        let gate = self.gates.get(wire)?;
        let mut wires = deps.into_iter();
        let mut resolve = |source: Source| match source {
            Source::Signal(v) => Some(v),
            Source::Wire(_) => wires.next().flatten(),
        };
        let value = match *gate {
            Gate::Direct(a) => resolve(a)?,
            Gate::Not(a) => !resolve(a)?,
            Gate::And(a, b) => resolve(a)? & resolve(b)?,
            Gate::Or(a, b) => resolve(a)? | resolve(b)?,
            Gate::LShift(a, b) => resolve(a)?.checked_shl(resolve(b)? as u32).unwrap_or(0),
            Gate::RShift(a, b) => resolve(a)?.checked_shr(resolve(b)? as u32).unwrap_or(0),
        };
        Some(value)
    }
}

pub struct SharedData<'a> {
    gates: HashMap<&'a str, Gate<'a>>,
    signal_a: Option<u16>,
}

fn signal<'a>(
    gates: &HashMap<&'a str, Gate<'a>>,
    overrides: HashMap<&'a str, u16>,
    wire: &'a str,
) -> Result<u16, SolveError> {
    let circuit = Circuit { gates, overrides };
    DpCache::with_problem(HashMapBackend::new(), circuit)
        .get(&wire)
        .ok_or_else(|| SolveError::SolveFailed(format!("wire '{}' has no signal", wire).into()))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut gates = HashMap::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (expr, output) = line
                .split_once(" -> ")
                .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
            let tokens: Vec<&str> = expr.split_whitespace().collect();
            let gate = match tokens[..] {
                [a] => Gate::Direct(Source::parse(a)?),
                ["NOT", a] => Gate::Not(Source::parse(a)?),
                [a, "AND", b] => Gate::And(Source::parse(a)?, Source::parse(b)?),
                [a, "OR", b] => Gate::Or(Source::parse(a)?, Source::parse(b)?),
                [a, "LSHIFT", b] => Gate::LShift(Source::parse(a)?, Source::parse(b)?),
                [a, "RSHIFT", b] => Gate::RShift(Source::parse(a)?, Source::parse(b)?),
                _ => return Err(ParseError::InvalidFormat(format!("unknown gate '{}'", expr))),
            };
            if gates.insert(output.trim(), gate).is_some() {
                return Err(ParseError::InvalidFormat(format!(
                    "wire '{}' has two drivers",
                    output
                )));
            }
        }
        Ok(SharedData {
            gates,
            signal_a: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = signal(&shared.gates, HashMap::new(), "a")?;
        shared.signal_a = Some(a);
        Ok(a.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = match shared.signal_a {
            Some(a) => a,
            None => signal(&shared.gates, HashMap::new(), "a")?,
        };
        Ok(signal(&shared.gates, HashMap::from([("b", a)]), "a")?.to_string())
    }
}
