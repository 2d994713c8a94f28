use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 9, tags = ["strings", "recursion"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let data: Vec<u8> = input.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        decompressed_len(&data, false)?;
        Ok(data)
    }
}

/// Parse a `(AxB)` marker at the start of `data`; returns (marker length, A, B)
fn marker(data: &[u8]) -> Result<Option<(usize, usize, usize)>, ParseError> {
    if data.first() != Some(&b'(') {
        return Ok(None);
    }
    let close = data
        .iter()
        .position(|&b| b == b')')
        .ok_or_else(|| ParseError::InvalidFormat("unterminated marker".to_string()))?;
    let body = std::str::from_utf8(&data[1..close]).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    let bad = || ParseError::InvalidFormat(format!("bad marker '({})'", body));
    let (len, times) = body.split_once('x').ok_or_else(bad)?;
    Ok(Some((
        close + 1,
        len.parse().map_err(|_| bad())?,
        times.parse().map_err(|_| bad())?,
    )))
}

/// Length after decompression; with `recursive`, markers inside repeated data expand too
pub fn decompressed_len(data: &[u8], recursive: bool) -> Result<u64, ParseError> {
    let mut total = 0;
    let mut i = 0;
    while i < data.len() {
        match marker(&data[i..])? {
            Some((marker_len, len, times)) => {
                let start = i + marker_len;
                let section = data
                    .get(start..start + len)
                    .ok_or_else(|| ParseError::InvalidFormat("marker runs past the end".to_string()))?;
                let section_len = if recursive {
                    decompressed_len(section, true)?
                } else {
                    len as u64
                };
                total += section_len * times as u64;
                i = start + len;
            }
            None => {
                total += 1;
                i += 1;
            }
        }
    }
    Ok(total)
}

fn solve(data: &[u8], recursive: bool) -> Result<String, SolveError> {
    decompressed_len(data, recursive)
        .map(|n| n.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve(shared, true)
    }
}
