//! Repository implementation for rooms and their weekly schedule.

use chrono::Utc;
use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::room::{
    NewRoom, NewScheduleSlot, Room, RoomSortField, ScheduleSlot, UpdateRoom,
};
use crate::listing::{ListFilter, ListResult, SortDirection};
use crate::models::room::{
    NewRoom as DbNewRoom, NewScheduleSlot as DbNewScheduleSlot, Room as DbRoom,
    ScheduleSlot as DbScheduleSlot, UpdateRoom as DbUpdateRoom,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, RoomReader, RoomWriter};

impl RoomReader for DieselRepository {
    fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;
        let db_room = rooms::table
            .filter(rooms::id.eq(id))
            .first::<DbRoom>(&mut conn)
            .optional()?;

        Ok(db_room.map(Into::into))
    }

    fn list_rooms(&self, filter: &ListFilter<RoomSortField>) -> RepositoryResult<ListResult<Room>> {
        use crate::schema::rooms;

        filter.validate()?;
        let mut conn = self.conn()?;

        let pattern = filter.search.as_ref().map(|needle| format!("%{needle}%"));

        let mut rows = rooms::table.into_boxed();
        let mut total = rooms::table.select(count_star()).into_boxed();

        if let Some(pattern) = &pattern {
            rows = rows.filter(
                rooms::name
                    .like(pattern.clone())
                    .or(rooms::building.like(pattern.clone())),
            );
            total = total.filter(
                rooms::name
                    .like(pattern.clone())
                    .or(rooms::building.like(pattern.clone())),
            );
        }

        if let Some(flag) = filter.status.as_flag() {
            rows = rows.filter(rooms::is_active.eq(flag));
            total = total.filter(rooms::is_active.eq(flag));
        }

        rows = match filter.sort {
            None => rows.order(rooms::id.asc()),
            Some(sort) => match (sort.field, sort.direction) {
                (RoomSortField::Name, SortDirection::Asc) => rows.order(rooms::name.asc()),
                (RoomSortField::Name, SortDirection::Desc) => rows.order(rooms::name.desc()),
                (RoomSortField::Capacity, SortDirection::Asc) => rows.order(rooms::capacity.asc()),
                (RoomSortField::Capacity, SortDirection::Desc) => {
                    rows.order(rooms::capacity.desc())
                }
                (RoomSortField::CreatedAt, SortDirection::Asc) => {
                    rows.order(rooms::created_at.asc())
                }
                (RoomSortField::CreatedAt, SortDirection::Desc) => {
                    rows.order(rooms::created_at.desc())
                }
            },
        };

        let items = rows
            .limit(filter.limit())
            .offset(filter.offset())
            .load::<DbRoom>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        let total: i64 = total.get_result(&mut conn)?;

        Ok(ListResult::new(items, total as usize))
    }

    fn list_room_schedule(&self, room_id: i32) -> RepositoryResult<Vec<ScheduleSlot>> {
        use crate::schema::room_schedule;

        let mut conn = self.conn()?;
        let db_slots = room_schedule::table
            .filter(room_schedule::room_id.eq(room_id))
            .order((room_schedule::weekday.asc(), room_schedule::starts_at.asc()))
            .load::<DbScheduleSlot>(&mut conn)?;

        Ok(db_slots.into_iter().map(Into::into).collect())
    }

    fn count_rooms(&self) -> RepositoryResult<usize> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;
        let total: i64 = rooms::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl RoomWriter for DieselRepository {
    fn create_room(&self, new_room: &NewRoom) -> RepositoryResult<Room> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let db_new_room: DbNewRoom = new_room.into();
        let db_room = diesel::insert_into(rooms::table)
            .values(&db_new_room)
            .get_result::<DbRoom>(&mut conn)?;

        Ok(db_room.into())
    }

    fn update_room(&self, room_id: i32, updates: &UpdateRoom) -> RepositoryResult<Room> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let db_updates: DbUpdateRoom = updates.into();
        let db_room = diesel::update(rooms::table.filter(rooms::id.eq(room_id)))
            .set((db_updates, rooms::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbRoom>(&mut conn)?;

        Ok(db_room.into())
    }

    /// Deleting a room with schedule slots still attached fails with a
    /// foreign key violation, surfaced as a constraint error.
    fn delete_room(&self, room_id: i32) -> RepositoryResult<()> {
        use crate::schema::rooms;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(rooms::table.filter(rooms::id.eq(room_id))).execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn add_schedule_slot(&self, new_slot: &NewScheduleSlot) -> RepositoryResult<ScheduleSlot> {
        use crate::schema::room_schedule;

        let mut conn = self.conn()?;

        let db_new_slot: DbNewScheduleSlot = new_slot.into();
        let db_slot = diesel::insert_into(room_schedule::table)
            .values(&db_new_slot)
            .get_result::<DbScheduleSlot>(&mut conn)?;

        Ok(db_slot.into())
    }

    fn delete_schedule_slot(&self, slot_id: i32) -> RepositoryResult<()> {
        use crate::schema::room_schedule;

        let mut conn = self.conn()?;

        let affected = diesel::delete(room_schedule::table.filter(room_schedule::id.eq(slot_id)))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
