use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 22, tags = ["search", "dijkstra"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boss {
    hp: i32,
    damage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Battle {
    hp: i32,
    mana: i32,
    boss_hp: i32,
    shield: u8,
    poison: u8,
    recharge: u8,
}

impl Battle {
    fn apply_effects(&mut self) {
        if self.shield > 0 {
            self.shield -= 1;
        }
        if self.poison > 0 {
            self.boss_hp -= 3;
            self.poison -= 1;
        }
        if self.recharge > 0 {
            self.mana += 101;
            self.recharge -= 1;
        }
    }

    /// Casting is only allowed with enough mana and when the effect is not still running
    fn cast(mut self, spell: Spell) -> Option<Battle> {
        if spell.cost() > self.mana {
            return None;
        }
        self.mana -= spell.cost();
        match spell {
            Spell::MagicMissile => self.boss_hp -= 4,
            Spell::Drain => {
                self.boss_hp -= 2;
                self.hp += 2;
            }
            Spell::Shield if self.shield == 0 => self.shield = 6,
            Spell::Poison if self.poison == 0 => self.poison = 6,
            Spell::Recharge if self.recharge == 0 => self.recharge = 5,
            _ => return None,
        }
        Some(self)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Boss;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stat = |name: &str| -> Result<i32, ParseError> {
            input
                .lines()
                .find_map(|l| l.trim().strip_prefix(name)?.strip_prefix(": "))
                .ok_or_else(|| ParseError::MissingData(format!("boss has no {}", name)))?
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad {} value", name)))
        };
        Ok(Boss {
            hp: stat("Hit Points")?,
            damage: stat("Damage")?,
        })
    }
}

/// Least mana that wins the fight, searching battles in order of mana spent
pub fn least_mana(boss: Boss, hp: i32, mana: i32, hard: bool) -> Option<i32> {
    let start = Battle {
        hp,
        mana,
        boss_hp: boss.hp,
        shield: 0,
        poison: 0,
        recharge: 0,
    };
    let mut queue = BinaryHeap::from([Reverse((0, start))]);
    let mut seen = HashSet::new();

    while let Some(Reverse((spent, mut battle))) = queue.pop() {
        if !seen.insert(battle) {
            continue;
        }
        if battle.boss_hp <= 0 {
            return Some(spent);
        }

        // Player turn
        if hard {
            battle.hp -= 1;
            if battle.hp <= 0 {
                continue;
            }
        }
        battle.apply_effects();
        if battle.boss_hp <= 0 {
            return Some(spent);
        }

        for spell in Spell::ALL {
            let Some(mut next) = battle.cast(spell) else {
                continue;
            };
            let spent = spent + spell.cost();
            if next.boss_hp <= 0 {
                queue.push(Reverse((spent, next)));
                continue;
            }

            // Boss turn
            let armor = if next.shield > 0 { 7 } else { 0 };
            next.apply_effects();
            if next.boss_hp <= 0 {
                queue.push(Reverse((spent, next)));
                continue;
            }
            next.hp -= (boss.damage - armor).max(1);
            if next.hp > 0 {
                queue.push(Reverse((spent, next)));
            }
        }
    }
    None
}

fn answer(found: Option<i32>) -> Result<String, SolveError> {
    found
        .map(|m| m.to_string())
        .ok_or_else(|| SolveError::SolveFailed("the wizard cannot win".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(least_mana(*shared, 50, 500, false))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(least_mana(*shared, 50, 500, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        // Poison then Magic Missile
        assert_eq!(least_mana(Boss { hp: 13, damage: 8 }, 10, 250, false), Some(226));
        // Recharge, Shield, Drain, Poison, Magic Missile
        assert_eq!(least_mana(Boss { hp: 14, damage: 8 }, 10, 250, false), Some(641));
    }

    #[test]
    fn test_parse() {
        let boss = Solver::parse("Hit Points: 58\nDamage: 9").unwrap();
        assert_eq!(boss, Boss { hp: 58, damage: 9 });
    }
}
