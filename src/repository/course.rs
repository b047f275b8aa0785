//! Repository implementation for courses.

use chrono::Utc;
use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::course::{Course, CourseSortField, NewCourse, UpdateCourse};
use crate::listing::{ListFilter, ListResult, SortDirection};
use crate::models::course::{
    Course as DbCourse, NewCourse as DbNewCourse, UpdateCourse as DbUpdateCourse,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CourseReader, CourseWriter, DieselRepository};

impl CourseReader for DieselRepository {
    fn get_course_by_id(&self, id: i32) -> RepositoryResult<Option<Course>> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let db_course = courses::table
            .filter(courses::id.eq(id))
            .first::<DbCourse>(&mut conn)
            .optional()?;

        Ok(db_course.map(Into::into))
    }

    fn list_courses(
        &self,
        filter: &ListFilter<CourseSortField>,
    ) -> RepositoryResult<ListResult<Course>> {
        use crate::schema::courses;

        filter.validate()?;
        let mut conn = self.conn()?;

        let pattern = filter.search.as_ref().map(|needle| format!("%{needle}%"));

        let mut rows = courses::table.into_boxed();
        let mut total = courses::table.select(count_star()).into_boxed();

        if let Some(pattern) = &pattern {
            rows = rows.filter(
                courses::name
                    .like(pattern.clone())
                    .or(courses::code.like(pattern.clone()))
                    .or(courses::department.like(pattern.clone())),
            );
            total = total.filter(
                courses::name
                    .like(pattern.clone())
                    .or(courses::code.like(pattern.clone()))
                    .or(courses::department.like(pattern.clone())),
            );
        }

        if let Some(flag) = filter.status.as_flag() {
            rows = rows.filter(courses::is_active.eq(flag));
            total = total.filter(courses::is_active.eq(flag));
        }

        rows = match filter.sort {
            None => rows.order(courses::id.asc()),
            Some(sort) => match (sort.field, sort.direction) {
                (CourseSortField::Name, SortDirection::Asc) => rows.order(courses::name.asc()),
                (CourseSortField::Name, SortDirection::Desc) => rows.order(courses::name.desc()),
                (CourseSortField::Code, SortDirection::Asc) => rows.order(courses::code.asc()),
                (CourseSortField::Code, SortDirection::Desc) => rows.order(courses::code.desc()),
                (CourseSortField::CreatedAt, SortDirection::Asc) => {
                    rows.order(courses::created_at.asc())
                }
                (CourseSortField::CreatedAt, SortDirection::Desc) => {
                    rows.order(courses::created_at.desc())
                }
            },
        };

        let items = rows
            .limit(filter.limit())
            .offset(filter.offset())
            .load::<DbCourse>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        let total: i64 = total.get_result(&mut conn)?;

        Ok(ListResult::new(items, total as usize))
    }

    fn count_courses(&self) -> RepositoryResult<usize> {
        use crate::schema::courses;

        let mut conn = self.conn()?;
        let total: i64 = courses::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl CourseWriter for DieselRepository {
    fn create_course(&self, new_course: &NewCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let db_new_course: DbNewCourse = new_course.into();
        let db_course = diesel::insert_into(courses::table)
            .values(&db_new_course)
            .get_result::<DbCourse>(&mut conn)?;

        Ok(db_course.into())
    }

    fn update_course(&self, course_id: i32, updates: &UpdateCourse) -> RepositoryResult<Course> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let db_updates: DbUpdateCourse = updates.into();
        let db_course = diesel::update(courses::table.filter(courses::id.eq(course_id)))
            .set((db_updates, courses::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbCourse>(&mut conn)?;

        Ok(db_course.into())
    }

    fn delete_course(&self, course_id: i32) -> RepositoryResult<()> {
        use crate::schema::courses;

        let mut conn = self.conn()?;

        let affected = diesel::delete(courses::table.filter(courses::id.eq(course_id)))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
