//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::course::{Course, CourseSortField, NewCourse, UpdateCourse};
use crate::domain::parent::{NewParent, Parent, ParentSortField, UpdateParent};
use crate::domain::room::{NewRoom, NewScheduleSlot, Room, RoomSortField, ScheduleSlot, UpdateRoom};
use crate::domain::student::{NewStudent, Student, StudentSortField, UpdateStudent};
use crate::listing::{ListFilter, ListResult};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CourseReader, CourseWriter, ParentReader, ParentWriter, RoomReader, RoomWriter, StudentReader,
    StudentWriter,
};

mock! {
    pub Repository {}

    impl StudentReader for Repository {
        fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>>;
        fn list_students(
            &self,
            filter: &ListFilter<StudentSortField>,
        ) -> RepositoryResult<ListResult<Student>>;
        fn list_parents_of_student(&self, student_id: i32) -> RepositoryResult<Vec<Parent>>;
        fn count_students(&self) -> RepositoryResult<usize>;
    }

    impl StudentWriter for Repository {
        fn create_students(&self, new_students: &[NewStudent]) -> RepositoryResult<usize>;
        fn update_student(
            &self,
            student_id: i32,
            updates: &UpdateStudent,
        ) -> RepositoryResult<Student>;
        fn delete_student(&self, student_id: i32) -> RepositoryResult<()>;
        fn assign_parents_to_student(
            &self,
            student_id: i32,
            parent_ids: &[i32],
        ) -> RepositoryResult<usize>;
    }

    impl CourseReader for Repository {
        fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>>;
        fn list_courses(
            &self,
            filter: &ListFilter<CourseSortField>,
        ) -> RepositoryResult<ListResult<Course>>;
        fn count_courses(&self) -> RepositoryResult<usize>;
    }

    impl CourseWriter for Repository {
        fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course>;
        fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course>;
        fn delete_course(&self, course_id: i32) -> RepositoryResult<()>;
    }

    impl RoomReader for Repository {
        fn get_room_by_id(&self, id: i32) -> RepositoryResult<Option<Room>>;
        fn list_rooms(&self, filter: &ListFilter<RoomSortField>) -> RepositoryResult<ListResult<Room>>;
        fn list_room_schedule(&self, room_id: i32) -> RepositoryResult<Vec<ScheduleSlot>>;
        fn count_rooms(&self) -> RepositoryResult<usize>;
    }

    impl RoomWriter for Repository {
        fn create_room(&self, new_room: &NewRoom) -> RepositoryResult<Room>;
        fn update_room(&self, room_id: i32, updates: &UpdateRoom) -> RepositoryResult<Room>;
        fn delete_room(&self, room_id: i32) -> RepositoryResult<()>;
        fn add_schedule_slot(&self, new_slot: &NewScheduleSlot) -> RepositoryResult<ScheduleSlot>;
        fn delete_schedule_slot(&self, slot_id: i32) -> RepositoryResult<()>;
    }

    impl ParentReader for Repository {
        fn get_parent_by_id(&self, id: i32) -> RepositoryResult<Option<Parent>>;
        fn list_parents(
            &self,
            filter: &ListFilter<ParentSortField>,
        ) -> RepositoryResult<ListResult<Parent>>;
        fn list_all_parents(&self) -> RepositoryResult<Vec<Parent>>;
        fn list_students_of_parent(&self, parent_id: i32) -> RepositoryResult<Vec<Student>>;
        fn count_parents(&self) -> RepositoryResult<usize>;
    }

    impl ParentWriter for Repository {
        fn create_parent(&self, new_parent: &NewParent) -> RepositoryResult<Parent>;
        fn update_parent(&self, parent_id: i32, updates: &UpdateParent) -> RepositoryResult<Parent>;
        fn delete_parent(&self, parent_id: i32) -> RepositoryResult<()>;
    }
}
