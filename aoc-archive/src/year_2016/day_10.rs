use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{BTreeMap, HashMap, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 10, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Bot(u32),
    Output(u32),
}

/// Outcome of running the factory until no bot holds two chips
#[derive(Debug, Default)]
pub struct Factory {
    /// `(bot, low, high)` for every comparison made
    comparisons: Vec<(u32, u32, u32)>,
    outputs: BTreeMap<u32, u32>,
}

fn parse_target(kind: &str, id: &str) -> anyhow::Result<Target> {
    let id = id.parse().with_context(|| format!("bad id '{}'", id))?;
    match kind {
        "bot" => Ok(Target::Bot(id)),
        "output" => Ok(Target::Output(id)),
        _ => bail!("unknown target '{}'", kind),
    }
}

fn run_factory(input: &str) -> anyhow::Result<Factory> {
    let mut rules: HashMap<u32, (Target, Target)> = HashMap::new();
    let mut holding: HashMap<u32, Vec<u32>> = HashMap::new();

    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[..] {
            ["value", value, "goes", "to", "bot", bot] => {
                let value = value.parse().with_context(|| format!("in '{}'", line))?;
                let bot = bot.parse().with_context(|| format!("in '{}'", line))?;
                holding.entry(bot).or_default().push(value);
            }
            ["bot", bot, "gives", "low", "to", low_kind, low, "and", "high", "to", high_kind, high] => {
                let bot = bot.parse().with_context(|| format!("in '{}'", line))?;
                let targets = (parse_target(low_kind, low)?, parse_target(high_kind, high)?);
                if rules.insert(bot, targets).is_some() {
                    bail!("bot {} has two rules", bot);
                }
            }
            _ => bail!("unrecognised instruction '{}'", line),
        }
    }

    let mut factory = Factory::default();
    let mut ready: VecDeque<u32> = holding
        .iter()
        .filter(|(_, chips)| chips.len() >= 2)
        .map(|(&bot, _)| bot)
        .collect();

    while let Some(bot) = ready.pop_front() {
        let chips = holding.remove(&bot).unwrap_or_default();
        let [a, b] = chips[..] else {
            bail!("bot {} holds {} chips", bot, chips.len());
        };
        let (low, high) = (a.min(b), a.max(b));
        factory.comparisons.push((bot, low, high));
        let &(low_target, high_target) = rules.get(&bot).ok_or_else(|| anyhow!("bot {} has no rule", bot))?;

        for (target, chip) in [(low_target, low), (high_target, high)] {
            match target {
                Target::Output(id) => {
                    factory.outputs.insert(id, chip);
                }
                Target::Bot(next) => {
                    let chips = holding.entry(next).or_default();
                    chips.push(chip);
                    if chips.len() == 2 {
                        ready.push_back(next);
                    }
                }
            }
        }
    }
    Ok(factory)
}

impl Factory {
    pub fn bot_comparing(&self, a: u32, b: u32) -> Option<u32> {
        let (low, high) = (a.min(b), a.max(b));
        self.comparisons
            .iter()
            .find(|&&(_, l, h)| (l, h) == (low, high))
            .map(|&(bot, _, _)| bot)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Factory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        run_factory(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .bot_comparing(61, 17)
            .map(|bot| bot.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no bot compares 61 and 17".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        (0..3)
            .map(|id| {
                shared.outputs.get(&id).map(|&v| v as u64).ok_or_else(|| {
                    SolveError::SolveFailed(format!("output {} is empty", id).into())
                })
            })
            .product::<Result<u64, _>>()
            .map(|p| p.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
value 5 goes to bot 2
bot 2 gives low to bot 1 and high to bot 0
value 3 goes to bot 1
bot 1 gives low to output 1 and high to bot 0
bot 0 gives low to output 2 and high to output 0
value 2 goes to bot 2";

    #[test]
    fn test_example() {
        let factory = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(factory.bot_comparing(5, 2), Some(2));
        assert_eq!(factory.outputs.get(&0), Some(&5));
        assert_eq!(solve_part::<Solver>(EXAMPLE, 2), "30");
    }

    #[test]
    fn test_missing_rule() {
        assert!(Solver::parse("value 1 goes to bot 0\nvalue 2 goes to bot 0").is_err());
    }
}
