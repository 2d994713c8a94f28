use aoc_solver::Solver;

/// Parse `input` and solve every part in order
pub fn solve_all<S: Solver>(input: &str) -> Vec<String> {
    let mut shared = S::parse(input).expect("input should parse");
    (1..=S::PARTS)
        .map(|part| S::solve_part(&mut shared, part).expect("part should solve"))
        .collect()
}

/// Parse `input` and solve a single part
pub fn solve_part<S: Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("input should parse");
    S::solve_part(&mut shared, part).expect("part should solve")
}
