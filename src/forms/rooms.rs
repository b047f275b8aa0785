use serde::Deserialize;
use validator::Validate;

use crate::domain::room::{NewRoom, NewScheduleSlot, UpdateRoom};
use crate::forms::{FormError, de_opt_trimmed, parse_time};

#[derive(Deserialize, Validate)]
/// Form data for creating a room.
pub struct AddRoomForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub building: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: i32,
}

impl TryFrom<AddRoomForm> for NewRoom {
    type Error = FormError;

    fn try_from(form: AddRoomForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewRoom::new(form.name, form.building, form.capacity))
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing room.
pub struct SaveRoomForm {
    /// Room identifier.
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub building: Option<String>,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub is_active: bool,
}

impl TryFrom<&SaveRoomForm> for UpdateRoom {
    type Error = FormError;

    fn try_from(form: &SaveRoomForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(UpdateRoom::new(
            form.name.clone(),
            form.building.clone(),
            form.capacity,
            form.is_active,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for removing a room.
pub struct DeleteRoomForm {
    pub id: i32,
}

#[derive(Deserialize, Validate)]
/// Form data for booking a weekly schedule slot in a room.
pub struct AddScheduleSlotForm {
    pub room_id: i32,
    /// Weekday index, 0 = Monday through 6 = Sunday.
    #[validate(range(min = 0, max = 6))]
    pub weekday: i32,
    /// Start time in `HH:MM` format.
    pub starts_at: String,
    /// End time in `HH:MM` format.
    pub ends_at: String,
    #[validate(length(min = 1))]
    pub label: String,
}

impl TryFrom<AddScheduleSlotForm> for NewScheduleSlot {
    type Error = FormError;

    fn try_from(form: AddScheduleSlotForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let starts_at = parse_time(&form.starts_at)?;
        let ends_at = parse_time(&form.ends_at)?;
        if starts_at >= ends_at {
            return Err(FormError::EmptyTimeSpan);
        }
        Ok(NewScheduleSlot::new(
            form.room_id,
            form.weekday,
            starts_at,
            ends_at,
            form.label,
        ))
    }
}

#[derive(Deserialize)]
/// Form data for removing a schedule slot.
pub struct DeleteScheduleSlotForm {
    pub id: i32,
    pub room_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_form_rejects_inverted_span() {
        let form = AddScheduleSlotForm {
            room_id: 1,
            weekday: 0,
            starts_at: "10:00".to_string(),
            ends_at: "09:00".to_string(),
            label: "Algebra".to_string(),
        };
        assert!(matches!(
            NewScheduleSlot::try_from(form),
            Err(FormError::EmptyTimeSpan)
        ));
    }

    #[test]
    fn slot_form_parses_times() {
        let form = AddScheduleSlotForm {
            room_id: 1,
            weekday: 4,
            starts_at: "09:00".to_string(),
            ends_at: "10:30".to_string(),
            label: "Chemistry".to_string(),
        };
        let slot = NewScheduleSlot::try_from(form).unwrap();
        assert_eq!(slot.weekday, 4);
        assert_eq!(slot.starts_at.format("%H:%M").to_string(), "09:00");
        assert_eq!(slot.ends_at.format("%H:%M").to_string(), "10:30");
    }
}
