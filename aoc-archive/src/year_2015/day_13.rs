use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["permutations"])]
pub struct Solver;

/// `happiness[a][b]` is what guest `a` gains sitting next to `b`
pub struct SharedData {
    happiness: Vec<Vec<i32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut guests: HashMap<&str, usize> = HashMap::new();
        let mut rules = Vec::new();

        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let bad = || ParseError::InvalidFormat(line.to_string());
            let tokens: Vec<&str> = line.trim_end_matches('.').split_whitespace().collect();
            let [guest, "would", sign, amount, "happiness", "units", "by", "sitting", "next", "to", neighbour] =
                tokens[..]
            else {
                return Err(bad());
            };
            let amount: i32 = amount.parse().map_err(|_| bad())?;
            let amount = match sign {
                "gain" => amount,
                "lose" => -amount,
                _ => return Err(bad()),
            };
            let next = guests.len();
            let guest = *guests.entry(guest).or_insert(next);
            let next = guests.len();
            let neighbour = *guests.entry(neighbour).or_insert(next);
            rules.push((guest, neighbour, amount));
        }

        if guests.is_empty() {
            return Err(ParseError::MissingData("no guests".to_string()));
        }

        let mut happiness = vec![vec![0; guests.len()]; guests.len()];
        for (guest, neighbour, amount) in rules {
            happiness[guest][neighbour] = amount;
        }
        Ok(SharedData { happiness })
    }
}

/// Best total change over every circular seating; guest 0 is pinned to remove rotations
fn best_seating(happiness: &[Vec<i32>]) -> i32 {
    let n = happiness.len();
    let pair = |a: usize, b: usize| happiness[a][b] + happiness[b][a];
    if n < 2 {
        return 0;
    }
    (1..n)
        .permutations(n - 1)
        .map(|rest| {
            let table: Vec<usize> = std::iter::once(0).chain(rest).collect();
            table
                .iter()
                .circular_tuple_windows()
                .map(|(&a, &b)| pair(a, b))
                .sum::<i32>()
        })
        .max()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_seating(&shared.happiness).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Seat ourselves: zero happiness either way
        let mut with_me = shared.happiness.clone();
        for row in &mut with_me {
            row.push(0);
        }
        with_me.push(vec![0; with_me.len() + 1]);
        Ok(best_seating(&with_me).to_string())
    }
}
