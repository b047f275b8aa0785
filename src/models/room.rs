use chrono::{NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::room::{
    Room as DomainRoom, NewRoom as DomainNewRoom, NewScheduleSlot as DomainNewScheduleSlot,
    ScheduleSlot as DomainScheduleSlot, UpdateRoom as DomainUpdateRoom,
};

/// Diesel model for [`crate::domain::room::Room`].
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub building: Option<String>,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Room`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::rooms)]
pub struct NewRoom<'a> {
    pub name: &'a str,
    pub building: Option<&'a str>,
    pub capacity: i32,
    pub is_active: bool,
}

/// Data used when updating a [`Room`] record. `None` clears the
/// corresponding column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::rooms)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateRoom<'a> {
    pub name: &'a str,
    pub building: Option<&'a str>,
    pub capacity: i32,
    pub is_active: bool,
}

/// Diesel model for [`crate::domain::room::ScheduleSlot`].
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::room_schedule)]
#[diesel(belongs_to(Room, foreign_key = room_id))]
pub struct ScheduleSlot {
    pub id: i32,
    pub room_id: i32,
    pub weekday: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub label: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ScheduleSlot`].
#[derive(Insertable)]
#[diesel(table_name = crate::schema::room_schedule)]
pub struct NewScheduleSlot<'a> {
    pub room_id: i32,
    pub weekday: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub label: &'a str,
}

impl From<Room> for DomainRoom {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            building: room.building,
            capacity: room.capacity,
            is_active: room.is_active,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRoom> for NewRoom<'a> {
    fn from(room: &'a DomainNewRoom) -> Self {
        Self {
            name: room.name.as_str(),
            building: room.building.as_deref(),
            capacity: room.capacity,
            is_active: room.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdateRoom> for UpdateRoom<'a> {
    fn from(room: &'a DomainUpdateRoom) -> Self {
        Self {
            name: room.name.as_str(),
            building: room.building.as_deref(),
            capacity: room.capacity,
            is_active: room.is_active,
        }
    }
}

impl From<ScheduleSlot> for DomainScheduleSlot {
    fn from(slot: ScheduleSlot) -> Self {
        Self {
            id: slot.id,
            room_id: slot.room_id,
            weekday: slot.weekday,
            starts_at: slot.starts_at,
            ends_at: slot.ends_at,
            label: slot.label,
            created_at: slot.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewScheduleSlot> for NewScheduleSlot<'a> {
    fn from(slot: &'a DomainNewScheduleSlot) -> Self {
        Self {
            room_id: slot.room_id,
            weekday: slot.weekday,
            starts_at: slot.starts_at,
            ends_at: slot.ends_at,
            label: slot.label.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_room_trims_building() {
        let domain = DomainNewRoom::new("B-204".to_string(), Some("  ".to_string()), 28);
        let new: NewRoom = (&domain).into();
        assert_eq!(new.name, "B-204");
        assert_eq!(new.building, None);
        assert_eq!(new.capacity, 28);
    }

    #[test]
    fn schedule_slot_into_domain() {
        let slot = ScheduleSlot {
            id: 3,
            room_id: 1,
            weekday: 2,
            starts_at: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            label: "Chemistry".to_string(),
            created_at: NaiveDateTime::default(),
        };
        let domain: DomainScheduleSlot = slot.into();
        assert_eq!(domain.room_id, 1);
        assert_eq!(domain.weekday, 2);
        assert_eq!(domain.label, "Chemistry");
    }
}
