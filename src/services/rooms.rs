//! Services handling room administration and schedule workflows.

use crate::domain::room::{NewRoom, NewScheduleSlot, Room, RoomSortField, UpdateRoom, weekday_name};
use crate::dto::listing::ListingPage;
use crate::dto::rooms::{RoomPageData, ScheduleSlotView};
use crate::forms::rooms::{
    AddRoomForm, AddScheduleSlotForm, DeleteRoomForm, DeleteScheduleSlotForm, SaveRoomForm,
};
use crate::listing::ListQuery;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{RoomReader, RoomWriter};
use crate::services::{ServiceError, ServiceResult, load_listing};

/// Loads one page of the room register.
pub fn load_rooms_page<R>(
    repo: &R,
    query: ListQuery<RoomSortField>,
) -> ServiceResult<ListingPage<Room, RoomSortField>>
where
    R: RoomReader + ?Sized,
{
    load_listing(DEFAULT_ITEMS_PER_PAGE, query, |filter| {
        repo.list_rooms(filter)
    })
}

/// Loads one room with its weekly schedule.
pub fn load_room_page<R>(repo: &R, room_id: i32) -> ServiceResult<RoomPageData>
where
    R: RoomReader + ?Sized,
{
    let room = repo.get_room_by_id(room_id)?.ok_or(ServiceError::NotFound)?;

    let schedule = repo
        .list_room_schedule(room_id)?
        .iter()
        .map(ScheduleSlotView::from)
        .collect();

    Ok(RoomPageData { room, schedule })
}

/// Validates the form and persists a new room.
pub fn add_room<R>(repo: &R, form: AddRoomForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    let new_room = NewRoom::try_from(form)?;

    repo.create_room(&new_room)?;

    Ok(())
}

/// Validates the form and updates the room record.
pub fn save_room<R>(repo: &R, form: &SaveRoomForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    let updates = UpdateRoom::try_from(form)?;

    repo.update_room(form.id, &updates)?;

    Ok(())
}

/// Removes a room. Fails with a conflict while schedule slots still
/// reference it.
pub fn delete_room<R>(repo: &R, form: &DeleteRoomForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    repo.delete_room(form.id)?;

    Ok(())
}

/// Books a weekly slot in a room after checking the span against every
/// existing booking on the same weekday.
pub fn add_schedule_slot<R>(repo: &R, form: AddScheduleSlotForm) -> ServiceResult<()>
where
    R: RoomReader + RoomWriter + ?Sized,
{
    let new_slot = NewScheduleSlot::try_from(form)?;

    repo.get_room_by_id(new_slot.room_id)?
        .ok_or(ServiceError::NotFound)?;

    let existing = repo.list_room_schedule(new_slot.room_id)?;
    if let Some(conflict) = existing.iter().find(|slot| new_slot.conflicts_with(slot)) {
        return Err(ServiceError::Form(format!(
            "The slot overlaps \"{}\" on {} {}-{}",
            conflict.label,
            weekday_name(conflict.weekday),
            conflict.starts_at.format("%H:%M"),
            conflict.ends_at.format("%H:%M"),
        )));
    }

    repo.add_schedule_slot(&new_slot)?;

    Ok(())
}

/// Removes a schedule slot from a room.
pub fn delete_schedule_slot<R>(repo: &R, form: &DeleteScheduleSlotForm) -> ServiceResult<()>
where
    R: RoomWriter + ?Sized,
{
    repo.delete_schedule_slot(form.id)?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::room::ScheduleSlot;
    use crate::repository::mock::MockRepository;
    use chrono::{NaiveDateTime, NaiveTime};

    fn room(id: i32) -> Room {
        Room {
            id,
            name: format!("Room {id}"),
            building: None,
            capacity: 30,
            is_active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn slot_form(starts_at: &str, ends_at: &str) -> AddScheduleSlotForm {
        AddScheduleSlotForm {
            room_id: 1,
            weekday: 0,
            starts_at: starts_at.to_string(),
            ends_at: ends_at.to_string(),
            label: "Biology".to_string(),
        }
    }

    fn existing_slot() -> ScheduleSlot {
        ScheduleSlot {
            id: 1,
            room_id: 1,
            weekday: 0,
            starts_at: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            ends_at: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            label: "Algebra".to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn overlapping_slot_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_get_room_by_id()
            .returning(|id| Ok(Some(room(id))));
        repo.expect_list_room_schedule()
            .returning(|_| Ok(vec![existing_slot()]));
        repo.expect_add_schedule_slot().times(0);

        let result = add_schedule_slot(&repo, slot_form("09:30", "10:30"));
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn touching_slot_is_accepted() {
        let mut repo = MockRepository::new();
        repo.expect_get_room_by_id()
            .returning(|id| Ok(Some(room(id))));
        repo.expect_list_room_schedule()
            .returning(|_| Ok(vec![existing_slot()]));
        repo.expect_add_schedule_slot().times(1).returning(|slot| {
            Ok(ScheduleSlot {
                id: 2,
                room_id: slot.room_id,
                weekday: slot.weekday,
                starts_at: slot.starts_at,
                ends_at: slot.ends_at,
                label: slot.label.clone(),
                created_at: NaiveDateTime::default(),
            })
        });

        let result = add_schedule_slot(&repo, slot_form("10:00", "11:00"));
        assert!(result.is_ok());
    }

    #[test]
    fn slot_for_missing_room_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_room_by_id().returning(|_| Ok(None));

        let result = add_schedule_slot(&repo, slot_form("09:00", "10:00"));
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
