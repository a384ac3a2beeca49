// src/data.rs
//! Typed chart model and the external JSON contract.
//!
//! Serialized field names are part of the public API (`previousPosition`,
//! `numWeeks`, lowercase `direction` strings); internal code uses plain
//! Rust naming and lets serde do the renaming.

use serde::Serialize;

use crate::config::consts::DEBUT_SLOT;

/// Movement direction since last week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    None,
}

/// Movement since last week. The sign lives in `actual`, the magnitude
/// in `amount`, the label in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Change {
    pub direction: Direction,
    pub amount: u32,
    pub actual: i32,
}

impl Change {
    /// Movement from `previous` to `position`. A `previous` of 0 means
    /// the entry did not chart last week and is scored from the slot
    /// just below the chart, so straight in at #1 reads as a 40-place
    /// climb.
    pub fn between(position: u32, previous: u32) -> Change {
        let effective = if previous == 0 { DEBUT_SLOT } else { previous };
        let actual = effective as i32 - position as i32;
        let direction = if actual > 0 {
            Direction::Up
        } else if actual < 0 {
            Direction::Down
        } else {
            Direction::None
        };
        Change {
            direction,
            amount: actual.unsigned_abs(),
            actual,
        }
    }
}

/// One ranked release. `status` is the raw status cell ("new", "up 3");
/// nothing downstream consumes it and it stays out of the serialized
/// form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub position: u32,
    #[serde(skip_serializing)]
    pub status: String,
    pub previous_position: u32,
    pub num_weeks: u32,
    pub artist: String,
    pub title: String,
    pub change: Change,
}

/// A full chart snapshot: chart date and retrieval time as epoch
/// seconds, entries in rank order. Built fresh per request, never
/// cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSnapshot {
    pub date: i64,
    pub retrieved: i64,
    pub entries: Vec<ChartEntry>,
}

impl ChartSnapshot {
    /// Fallback for a page with no table rows at all.
    pub fn empty() -> ChartSnapshot {
        ChartSnapshot {
            date: 0,
            retrieved: 0,
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debut_at_number_one_is_a_full_climb() {
        let c = Change::between(1, 0);
        assert_eq!(
            c,
            Change {
                direction: Direction::Up,
                amount: 40,
                actual: 40
            }
        );
    }

    #[test]
    fn climber_faller_and_non_mover() {
        assert_eq!(
            Change::between(11, 16),
            Change {
                direction: Direction::Up,
                amount: 5,
                actual: 5
            }
        );
        assert_eq!(
            Change::between(16, 11),
            Change {
                direction: Direction::Down,
                amount: 5,
                actual: -5
            }
        );
        assert_eq!(
            Change::between(11, 11),
            Change {
                direction: Direction::None,
                amount: 0,
                actual: 0
            }
        );
    }

    #[test]
    fn amount_matches_actual_for_every_pair() {
        for position in 1..=40u32 {
            for previous in 0..=40u32 {
                let c = Change::between(position, previous);
                assert_eq!(c.amount, c.actual.unsigned_abs());
                match c.direction {
                    Direction::Up => assert!(c.actual > 0),
                    Direction::Down => assert!(c.actual < 0),
                    Direction::None => assert_eq!(c.actual, 0),
                }
            }
        }
    }

    #[test]
    fn serialized_names_follow_the_contract() {
        let entry = ChartEntry {
            position: 2,
            status: s!("new"),
            previous_position: 0,
            num_weeks: 1,
            artist: s!("Union J"),
            title: s!("You Got It All"),
            change: Change::between(2, 0),
        };
        let v = serde_json::to_value(&entry).unwrap();
        assert!(v.get("previousPosition").is_some());
        assert!(v.get("numWeeks").is_some());
        assert!(v.get("status").is_none());
        assert_eq!(v["change"]["direction"], "up");
        assert_eq!(v["change"]["actual"], 39);
    }
}
