use crate::utils::math::{rotate_left, rotate_right};
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 21, tags = ["strings", "permutations"])]
pub struct Solver;

const PASSWORD: &str = "abcdefgh";
const SCRAMBLED: &str = "fbgdceah";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SwapPosition(usize, usize),
    SwapLetter(u8, u8),
    RotateLeft(usize),
    RotateRight(usize),
    RotateOnLetter(u8),
    Reverse(usize, usize),
    Move(usize, usize),
}

fn parse_op(line: &str) -> anyhow::Result<Op> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let num = |s: &str| s.parse::<usize>().with_context(|| format!("bad position '{}'", s));
    let letter = |s: &str| match s.as_bytes() {
        [b] => Ok(*b),
        _ => Err(anyhow!("expected a single letter, got '{}'", s)),
    };
    let op = match tokens[..] {
        ["swap", "position", x, "with", "position", y] => Op::SwapPosition(num(x)?, num(y)?),
        ["swap", "letter", x, "with", "letter", y] => Op::SwapLetter(letter(x)?, letter(y)?),
        ["rotate", "left", n, _] => Op::RotateLeft(num(n)?),
        ["rotate", "right", n, _] => Op::RotateRight(num(n)?),
        ["rotate", "based", "on", "position", "of", "letter", x] => Op::RotateOnLetter(letter(x)?),
        ["reverse", "positions", x, "through", y] => Op::Reverse(num(x)?, num(y)?),
        ["move", "position", x, "to", "position", y] => Op::Move(num(x)?, num(y)?),
        _ => bail!("unknown operation"),
    };
    Ok(op)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Op>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| parse_op(line).with_context(|| format!("in '{}'", line)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn position(password: &[u8], letter: u8) -> anyhow::Result<usize> {
    password
        .iter()
        .position(|&b| b == letter)
        .ok_or_else(|| anyhow!("letter '{}' is not in the password", letter as char))
}

fn apply(password: &mut [u8], op: Op) -> anyhow::Result<()> {
    let len = password.len();
    let check = |i: usize| {
        if i < len {
            Ok(i)
        } else {
            Err(anyhow!("position {} is outside a {}-letter password", i, len))
        }
    };
    match op {
        Op::SwapPosition(x, y) => password.swap(check(x)?, check(y)?),
        Op::SwapLetter(x, y) => {
            let (x, y) = (position(password, x)?, position(password, y)?);
            password.swap(x, y);
        }
        Op::RotateLeft(n) => rotate_left(password, n),
        Op::RotateRight(n) => rotate_right(password, n),
        Op::RotateOnLetter(x) => {
            let idx = position(password, x)?;
            rotate_right(password, 1 + idx + usize::from(idx >= 4));
        }
        Op::Reverse(x, y) => {
            let (x, y) = (check(x)?, check(y)?);
            password[x.min(y)..=x.max(y)].reverse();
        }
        Op::Move(x, y) => {
            let (x, y) = (check(x)?, check(y)?);
            if x < y {
                rotate_left(&mut password[x..=y], 1);
            } else {
                rotate_right(&mut password[y..=x], 1);
            }
        }
    }
    Ok(())
}

/// Undo one operation; rotation by letter position is inverted by trying every rotation
fn unapply(password: &mut [u8], op: Op) -> anyhow::Result<()> {
    match op {
        Op::SwapPosition(..) | Op::SwapLetter(..) | Op::Reverse(..) => apply(password, op),
        Op::RotateLeft(n) => apply(password, Op::RotateRight(n)),
        Op::RotateRight(n) => apply(password, Op::RotateLeft(n)),
        Op::Move(x, y) => apply(password, Op::Move(y, x)),
        Op::RotateOnLetter(_) => {
            for n in 0..password.len() {
                let mut candidate = password.to_vec();
                rotate_left(&mut candidate, n);
                let before = candidate.clone();
                apply(&mut candidate, op)?;
                if candidate == password {
                    password.copy_from_slice(&before);
                    return Ok(());
                }
            }
            bail!("no rotation undoes {:?}", op)
        }
    }
}

pub fn scramble(ops: &[Op], password: &str) -> anyhow::Result<String> {
    let mut bytes = password.as_bytes().to_vec();
    for &op in ops {
        apply(&mut bytes, op)?;
    }
    Ok(String::from_utf8(bytes)?)
}

pub fn unscramble(ops: &[Op], scrambled: &str) -> anyhow::Result<String> {
    let mut bytes = scrambled.as_bytes().to_vec();
    for &op in ops.iter().rev() {
        unapply(&mut bytes, op)?;
    }
    Ok(String::from_utf8(bytes)?)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        scramble(shared, PASSWORD).map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        unscramble(shared, SCRAMBLED).map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
swap position 4 with position 0
swap letter d with letter b
reverse positions 0 through 4
rotate left 1 step
move position 1 to position 4
move position 3 to position 0
rotate based on position of letter b
rotate based on position of letter d";

    #[test]
    fn test_example() {
        let ops = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(scramble(&ops, "abcde").unwrap(), "decab");
    }

    #[test]
    fn test_unscramble_inverts_eight_letter_passwords() {
        let ops = Solver::parse(EXAMPLE).unwrap();
        let scrambled = scramble(&ops, PASSWORD).unwrap();
        assert_eq!(unscramble(&ops, &scrambled).unwrap(), PASSWORD);
    }

    #[test]
    fn test_reverse_accepts_descending_positions() {
        let ops = Solver::parse("reverse positions 4 through 1").unwrap();
        assert_eq!(scramble(&ops, "abcdef").unwrap(), "aedcbf");
        assert_eq!(unscramble(&ops, "aedcbf").unwrap(), "abcdef");
    }

    #[test]
    fn test_missing_letter() {
        let ops = Solver::parse("swap letter z with letter a").unwrap();
        assert!(scramble(&ops, "abc").is_err());
    }
}
