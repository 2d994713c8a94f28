use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 21, tags = ["simulation", "brute-force"])]
pub struct Solver;

const PLAYER_HP: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    cost: i32,
    damage: i32,
    armor: i32,
}

const fn item(cost: i32, damage: i32, armor: i32) -> Item {
    Item { cost, damage, armor }
}

const WEAPONS: [Item; 5] = [item(8, 4, 0), item(10, 5, 0), item(25, 6, 0), item(40, 7, 0), item(74, 8, 0)];
const ARMOR: [Item; 5] = [item(13, 0, 1), item(31, 0, 2), item(53, 0, 3), item(75, 0, 4), item(102, 0, 5)];
const RINGS: [Item; 6] = [
    item(25, 1, 0),
    item(50, 2, 0),
    item(100, 3, 0),
    item(20, 0, 1),
    item(40, 0, 2),
    item(80, 0, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    hp: i32,
    damage: i32,
    armor: i32,
}

impl Fighter {
    /// Rounds this fighter needs to bring `other` to zero
    fn rounds_to_beat(&self, other: &Fighter) -> i32 {
        let per_hit = (self.damage - other.armor).max(1);
        (other.hp + per_hit - 1) / per_hit
    }

    /// The player swings first, so ties go to the player
    fn beats(&self, boss: &Fighter) -> bool {
        self.rounds_to_beat(boss) <= boss.rounds_to_beat(self)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Fighter;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut hp, mut damage, mut armor) = (None, None, None);
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (key, value) = line
                .split_once(": ")
                .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
            let value: i32 = value
                .parse()
                .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
            match key {
                "Hit Points" => hp = Some(value),
                "Damage" => damage = Some(value),
                "Armor" => armor = Some(value),
                _ => return Err(ParseError::InvalidFormat(format!("unknown stat '{}'", key))),
            }
        }
        let missing = |stat: &str| ParseError::MissingData(format!("boss has no {}", stat));
        Ok(Fighter {
            hp: hp.ok_or_else(|| missing("hit points"))?,
            damage: damage.ok_or_else(|| missing("damage"))?,
            armor: armor.ok_or_else(|| missing("armor"))?,
        })
    }
}

/// Every legal loadout as (cost, did the player win)
fn outcomes(boss: &Fighter) -> impl Iterator<Item = (i32, bool)> + '_ {
    let armor_choices = std::iter::once(None).chain(ARMOR.iter().map(Some));
    let ring_choices = (0..=2).flat_map(|n| RINGS.iter().combinations(n));
    WEAPONS
        .iter()
        .cartesian_product(armor_choices.collect_vec())
        .cartesian_product(ring_choices.collect_vec())
        .map(move |((weapon, armor), rings)| {
            let gear = std::iter::once(weapon).chain(armor).chain(rings);
            let (cost, damage, armor) = gear.fold((0, 0, 0), |(c, d, a), it| {
                (c + it.cost, d + it.damage, a + it.armor)
            });
            let player = Fighter {
                hp: PLAYER_HP,
                damage,
                armor,
            };
            (cost, player.beats(boss))
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        outcomes(shared)
            .filter(|&(_, won)| won)
            .map(|(cost, _)| cost)
            .min()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no loadout beats the boss".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        outcomes(shared)
            .filter(|&(_, won)| !won)
            .map(|(cost, _)| cost)
            .max()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::SolveFailed("every loadout beats the boss".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_fight() {
        let player = Fighter { hp: 8, damage: 5, armor: 5 };
        let boss = Fighter { hp: 12, damage: 7, armor: 2 };
        assert!(player.beats(&boss));
    }

    #[test]
    fn test_loadout_count() {
        let boss = Solver::parse("Hit Points: 100\nDamage: 8\nArmor: 2").unwrap();
        // 5 weapons * 6 armor options * (1 + 6 + 15) ring sets
        assert_eq!(outcomes(&boss).count(), 660);
    }

    #[test]
    fn test_missing_stat() {
        assert!(matches!(Solver::parse("Hit Points: 10\nDamage: 2"), Err(ParseError::MissingData(_))));
    }
}
