//! Storage traits for school records, plus the Diesel/SQLite implementation.
//!
//! Services depend on the reader/writer traits only, so tests can swap in
//! the generated mocks (`test-mocks` feature) without touching a database.
//! List operations all take a [`ListFilter`] and return a [`ListResult`],
//! keeping search, status filtering, sorting and pagination uniform across
//! entities.

use crate::db::DbPool;
use crate::domain::course::{Course, CourseSortField, NewCourse, UpdateCourse};
use crate::domain::parent::{NewParent, Parent, ParentSortField, UpdateParent};
use crate::domain::room::{NewRoom, NewScheduleSlot, Room, RoomSortField, ScheduleSlot, UpdateRoom};
use crate::domain::student::{NewStudent, Student, StudentSortField, UpdateStudent};
use crate::listing::{ListFilter, ListResult};
use crate::repository::errors::RepositoryResult;

pub mod course;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod parent;
pub mod room;
pub mod student;

/// Repository backed by a Diesel SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait StudentReader {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
    fn list_students(
        &self,
        filter: &ListFilter<StudentSortField>,
    ) -> RepositoryResult<ListResult<Student>>;
    fn list_parents_of_student(&self, student_id: i32) -> RepositoryResult<Vec<Parent>>;
    fn count_students(&self) -> RepositoryResult<usize>;
}

pub trait StudentWriter {
    fn create_students(&self, new_students: &[NewStudent]) -> RepositoryResult<usize>;
    fn update_student(&self, student_id: i32, updates: &UpdateStudent)
    -> RepositoryResult<Student>;
    fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
    fn assign_parents_to_student(
        &self,
        student_id: i32,
        parent_ids: &[i32],
    ) -> RepositoryResult<usize>;
}

pub trait CourseReader {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
    fn list_courses(
        &self,
        filter: &ListFilter<CourseSortField>,
    ) -> RepositoryResult<ListResult<Course>>;
    fn count_courses(&self) -> RepositoryResult<usize>;
}

pub trait CourseWriter {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
    fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
    fn delete_course(&self, course_id: i32) -> RepositoryResult<()>;
}

pub trait RoomReader {
    fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>>;
    fn list_rooms(&self, filter: &ListFilter<RoomSortField>) -> RepositoryResult<ListResult<Room>>;
    fn list_room_schedule(&self, room_id: i32) -> RepositoryResult<Vec<ScheduleSlot>>;
    fn count_rooms(&self) -> RepositoryResult<usize>;
}

pub trait RoomWriter {
    fn create_room(&self, new_room: &NewRoom) -> RepositoryResult<Room>;
    fn update_room(&self, room_id: i32, updates: &UpdateRoom) -> RepositoryResult<Room>;
    fn delete_room(&self, room_id: i32) -> RepositoryResult<()>;
    fn add_schedule_slot(&self, new_slot: &NewScheduleSlot) -> RepositoryResult<ScheduleSlot>;
    fn delete_schedule_slot(&self, slot_id: i32) -> RepositoryResult<()>;
}

pub trait ParentReader {
    fn get_parent_by_id(&self, id: i32) -> RepositoryResult<Option<Parent>>;
    fn list_parents(
        &self,
        filter: &ListFilter<ParentSortField>,
    ) -> RepositoryResult<ListResult<Parent>>;
    /// Every active parent, ordered by name. Used by assignment pickers.
    fn list_all_parents(&self) -> RepositoryResult<Vec<Parent>>;
    fn list_students_of_parent(&self, parent_id: i32) -> RepositoryResult<Vec<Student>>;
    fn count_parents(&self) -> RepositoryResult<usize>;
}

pub trait ParentWriter {
    fn create_parent(&self, new_parent: &NewParent) -> RepositoryResult<Parent>;
    fn update_parent(&self, parent_id: i32, updates: &UpdateParent) -> RepositoryResult<Parent>;
    fn delete_parent(&self, parent_id: i32) -> RepositoryResult<()>;
}
