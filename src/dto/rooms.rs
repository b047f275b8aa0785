//! DTOs used on the room detail page.

use serde::Serialize;

use crate::domain::room::{self, Room, ScheduleSlot};

/// A schedule slot formatted for display.
#[derive(Debug, Serialize)]
pub struct ScheduleSlotView {
    pub id: i32,
    pub weekday: &'static str,
    pub starts_at: String,
    pub ends_at: String,
    pub label: String,
}

impl From<&ScheduleSlot> for ScheduleSlotView {
    fn from(slot: &ScheduleSlot) -> Self {
        Self {
            id: slot.id,
            weekday: room::weekday_name(slot.weekday),
            starts_at: slot.starts_at.format("%H:%M").to_string(),
            ends_at: slot.ends_at.format("%H:%M").to_string(),
            label: slot.label.clone(),
        }
    }
}

/// Data displayed on a single room's page.
pub struct RoomPageData {
    pub room: Room,
    pub schedule: Vec<ScheduleSlotView>,
}
