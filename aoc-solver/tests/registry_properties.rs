//! Registry behaviour: ordering, duplicates, bounds and embedded inputs

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistrationError,
    SolveError, SolverError, SolverRegistryBuilder,
};
use proptest::prelude::*;

/// Counts characters; registered through the plugin inventory
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2033, day = 7, tags = ["registry-test", "chars"], input = "embedded")]
struct CharCount;

impl AocParser for CharCount {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        Ok(input)
    }
}

impl PartSolver<1> for CharCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().count().to_string())
    }
}

impl PartSolver<2> for CharCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn plugin_carries_tags_and_embedded_input() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"registry-test"))
        .unwrap()
        .build();

    let info = registry.storage().get_info(2033, 7).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.input, Some("embedded"));
    assert_eq!(registry.storage().len(), 1);

    let mut solver = registry.create_solver(2033, 7, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "cba");
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}

#[test]
fn parse_failure_surfaces_as_solver_error() {
    let registry = SolverRegistryBuilder::new()
        .register_solver(&CharCount, 2020, 1)
        .unwrap()
        .build();

    let result = registry.create_solver(2020, 1, "");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver(&CharCount, 2016, 3)
        .unwrap()
        .register_solver(&CharCount, 2016, 3);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2016, 3))
    ));
}

#[test]
fn lookup_errors() {
    let registry = SolverRegistryBuilder::new().build();
    assert!(registry.storage().is_empty());
    assert!(matches!(
        registry.create_solver(2015, 1, "x"),
        Err(SolverError::NotFound(2015, 1))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, "x"),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
}

#[test]
fn part_out_of_range_through_dyn_solver() {
    let registry = SolverRegistryBuilder::new()
        .register_solver(&CharCount, 2015, 25)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2015, 25, "abc").unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2015, 25, 2));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Whatever order puzzles are registered in, iteration is by year then day
    #[test]
    fn iter_info_sorted(
        keys in prop::collection::btree_set((2015u16..2035, 1u8..=25), 1..20)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    ) {
        let mut builder = SolverRegistryBuilder::new();
        for &(year, day) in &keys {
            builder = builder.register_solver(&CharCount, year, day).unwrap();
        }
        let registry = builder.build();

        let listed: Vec<(u16, u8)> = registry
            .storage()
            .iter_info()
            .map(|info| (info.year, info.day))
            .collect();
        let mut expected = keys.clone();
        expected.sort();
        prop_assert_eq!(listed, expected);
    }

    /// Year/day pairs outside 2015-2034 and 1-25 never register
    #[test]
    fn out_of_bounds_rejected(year in prop_oneof![0u16..2015, 2035u16..=u16::MAX], day in 0u8..=30) {
        let result = SolverRegistryBuilder::new().register_solver(&CharCount, year, day);
        prop_assert!(matches!(result, Err(RegistrationError::InvalidYearDay(_, _))));
    }
}
