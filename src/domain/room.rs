use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::listing::SortKey;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub building: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewRoom {
    pub name: String,
    pub building: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
}

impl NewRoom {
    #[must_use]
    pub fn new(name: String, building: Option<String>, capacity: i32) -> Self {
        Self {
            name: name.trim().to_string(),
            building: building
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            capacity,
            is_active: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateRoom {
    pub name: String,
    pub building: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
}

impl UpdateRoom {
    #[must_use]
    pub fn new(name: String, building: Option<String>, capacity: i32, is_active: bool) -> Self {
        Self {
            name: name.trim().to_string(),
            building: building
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            capacity,
            is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSortField {
    Name,
    Capacity,
    CreatedAt,
}

impl SortKey for RoomSortField {
    const ALL: &'static [Self] = &[
        RoomSortField::Name,
        RoomSortField::Capacity,
        RoomSortField::CreatedAt,
    ];

    fn key(self) -> &'static str {
        match self {
            RoomSortField::Name => "name",
            RoomSortField::Capacity => "capacity",
            RoomSortField::CreatedAt => "created_at",
        }
    }
}

/// A weekly booking of a room: a weekday (0 = Monday), a half-open time
/// span `[starts_at, ends_at)` and a label saying what occupies it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSlot {
    pub id: i32,
    pub room_id: i32,
    pub weekday: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub label: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewScheduleSlot {
    pub room_id: i32,
    pub weekday: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub label: String,
}

impl NewScheduleSlot {
    #[must_use]
    pub fn new(
        room_id: i32,
        weekday: i32,
        starts_at: NaiveTime,
        ends_at: NaiveTime,
        label: String,
    ) -> Self {
        Self {
            room_id,
            weekday,
            starts_at,
            ends_at,
            label: label.trim().to_string(),
        }
    }

    /// Whether this slot collides with an existing one. Spans are
    /// half-open, so a slot starting exactly when another ends does not
    /// conflict.
    pub fn conflicts_with(&self, other: &ScheduleSlot) -> bool {
        self.weekday == other.weekday
            && self.starts_at < other.ends_at
            && other.starts_at < self.ends_at
    }
}

pub fn weekday_name(weekday: i32) -> &'static str {
    match weekday {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(weekday: i32, start: (u32, u32), end: (u32, u32)) -> ScheduleSlot {
        ScheduleSlot {
            id: 1,
            room_id: 1,
            weekday,
            starts_at: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            label: "Algebra".to_string(),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn new_slot(weekday: i32, start: (u32, u32), end: (u32, u32)) -> NewScheduleSlot {
        NewScheduleSlot::new(
            1,
            weekday,
            NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            "Biology".to_string(),
        )
    }

    #[test]
    fn overlapping_spans_conflict() {
        let existing = slot(0, (9, 0), (10, 0));
        assert!(new_slot(0, (9, 30), (10, 30)).conflicts_with(&existing));
        assert!(new_slot(0, (8, 30), (9, 30)).conflicts_with(&existing));
        assert!(new_slot(0, (8, 0), (11, 0)).conflicts_with(&existing));
        assert!(new_slot(0, (9, 15), (9, 45)).conflicts_with(&existing));
    }

    #[test]
    fn touching_spans_do_not_conflict() {
        let existing = slot(0, (9, 0), (10, 0));
        assert!(!new_slot(0, (10, 0), (11, 0)).conflicts_with(&existing));
        assert!(!new_slot(0, (8, 0), (9, 0)).conflicts_with(&existing));
    }

    #[test]
    fn other_weekdays_do_not_conflict() {
        let existing = slot(0, (9, 0), (10, 0));
        assert!(!new_slot(1, (9, 0), (10, 0)).conflicts_with(&existing));
    }
}
