//! Property tests for the `AocSolver` derive

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("not a number: {}", l)))
        })
        .collect()
}

fn join(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Part 1 sums, part 2 multiplies
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

mod dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// `solve_part(k)` gives the same answer as `PartSolver<k>::solve`
        #[test]
        fn solve_part_dispatches_to_part_solver(
            numbers in prop::collection::vec(1i64..10, 1..5),
            part in 1u8..=2
        ) {
            let input = join(&numbers);
            let mut via_trait = SumProduct::parse(&input).unwrap();
            let mut direct = SumProduct::parse(&input).unwrap();

            let dispatched = <SumProduct as Solver>::solve_part(&mut via_trait, part).unwrap();
            let expected = match part {
                1 => <SumProduct as PartSolver<1>>::solve(&mut direct),
                _ => <SumProduct as PartSolver<2>>::solve(&mut direct),
            }.unwrap();

            prop_assert_eq!(dispatched, expected);
        }

        /// Parts with no `PartSolver` impl report `PartNotImplemented`
        #[test]
        fn unknown_part_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
            let mut shared = SumProduct::parse("1\n2\n3").unwrap();

            match <SumProduct as Solver>::solve_part(&mut shared, part) {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
            }
        }
    }

    #[test]
    fn parts_constant_matches_attribute() {
        assert_eq!(<SumProduct as Solver>::PARTS, 2);
    }
}

/// Part 2 reads what part 1 left in the shared data
mod shared_state {
    use super::*;

    struct Running {
        numbers: Vec<i64>,
        total: Option<i64>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct TotalThenDouble;

    impl AocParser for TotalThenDouble {
        type SharedData<'a> = Running;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(Running {
                numbers: parse_numbers(input)?,
                total: None,
            })
        }
    }

    impl PartSolver<1> for TotalThenDouble {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared.numbers.iter().sum();
            shared.total = Some(total);
            Ok(total.to_string())
        }
    }

    impl PartSolver<2> for TotalThenDouble {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let total = shared
                .total
                .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
            Ok((total * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn part_two_sees_part_one_state(numbers in prop::collection::vec(1i64..100, 1..5)) {
            let input = join(&numbers);
            let total: i64 = numbers.iter().sum();
            let mut shared = TotalThenDouble::parse(&input).unwrap();

            let first = <TotalThenDouble as Solver>::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(first, total.to_string());
            prop_assert_eq!(shared.total, Some(total));

            let second = <TotalThenDouble as Solver>::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(second, (total * 2).to_string());
        }
    }

    #[test]
    fn part_two_alone_fails() {
        let mut shared = TotalThenDouble::parse("4").unwrap();
        let result = <TotalThenDouble as Solver>::solve_part(&mut shared, 2);
        assert!(matches!(result, Err(SolveError::SolveFailed(_))));
    }
}

/// A puzzle with a single part
mod single_part {
    use super::*;

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 1)]
    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl PartSolver<1> for LineCount {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(shared.lines().count().to_string())
        }
    }

    #[test]
    fn borrowed_shared_data() {
        let mut shared = LineCount::parse("a\nb\nc").unwrap();
        assert_eq!(<LineCount as Solver>::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(<LineCount as Solver>::PARTS, 1);
    }
}
