//! Repository implementation for students.

use chrono::Utc;
use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::parent::Parent;
use crate::domain::student::{NewStudent, Student, StudentSortField, UpdateStudent};
use crate::listing::{ListFilter, ListResult, SortDirection};
use crate::models::parent::Parent as DbParent;
use crate::models::student::{
    NewStudent as DbNewStudent, Student as DbStudent, UpdateStudent as DbUpdateStudent,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, StudentReader, StudentWriter};

impl StudentReader for DieselRepository {
    fn get_student_by_id(&self, id: i32) -> RepositoryResult<Option<Student>> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let db_student = students::table
            .filter(students::id.eq(id))
            .first::<DbStudent>(&mut conn)
            .optional()?;

        Ok(db_student.map(Into::into))
    }

    fn list_students(
        &self,
        filter: &ListFilter<StudentSortField>,
    ) -> RepositoryResult<ListResult<Student>> {
        use crate::schema::students;

        filter.validate()?;
        let mut conn = self.conn()?;

        let pattern = filter.search.as_ref().map(|needle| format!("%{needle}%"));

        let mut rows = students::table.into_boxed();
        let mut total = students::table.select(count_star()).into_boxed();

        if let Some(pattern) = &pattern {
            rows = rows.filter(
                students::first_name
                    .like(pattern.clone())
                    .or(students::last_name.like(pattern.clone()))
                    .or(students::email.like(pattern.clone())),
            );
            total = total.filter(
                students::first_name
                    .like(pattern.clone())
                    .or(students::last_name.like(pattern.clone()))
                    .or(students::email.like(pattern.clone())),
            );
        }

        if let Some(flag) = filter.status.as_flag() {
            rows = rows.filter(students::is_active.eq(flag));
            total = total.filter(students::is_active.eq(flag));
        }

        rows = match filter.sort {
            None => rows.order(students::id.asc()),
            Some(sort) => match (sort.field, sort.direction) {
                (StudentSortField::Name, SortDirection::Asc) => {
                    rows.order((students::last_name.asc(), students::first_name.asc()))
                }
                (StudentSortField::Name, SortDirection::Desc) => {
                    rows.order((students::last_name.desc(), students::first_name.desc()))
                }
                (StudentSortField::Email, SortDirection::Asc) => rows.order(students::email.asc()),
                (StudentSortField::Email, SortDirection::Desc) => {
                    rows.order(students::email.desc())
                }
                (StudentSortField::EnrolledOn, SortDirection::Asc) => {
                    rows.order(students::enrolled_on.asc())
                }
                (StudentSortField::EnrolledOn, SortDirection::Desc) => {
                    rows.order(students::enrolled_on.desc())
                }
            },
        };

        let items = rows
            .limit(filter.limit())
            .offset(filter.offset())
            .load::<DbStudent>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        let total: i64 = total.get_result(&mut conn)?;

        Ok(ListResult::new(items, total as usize))
    }

    fn list_parents_of_student(&self, student_id: i32) -> RepositoryResult<Vec<Parent>> {
        use crate::schema::parents;
        use crate::schema::student_parent;

        let mut conn = self.conn()?;
        let db_parents = parents::table
            .inner_join(student_parent::table)
            .filter(student_parent::student_id.eq(student_id))
            .select(parents::all_columns)
            .order(parents::name.asc())
            .load::<DbParent>(&mut conn)?;

        Ok(db_parents.into_iter().map(Into::into).collect())
    }

    fn count_students(&self) -> RepositoryResult<usize> {
        use crate::schema::students;

        let mut conn = self.conn()?;
        let total: i64 = students::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl StudentWriter for DieselRepository {
    fn create_students(&self, new_students: &[NewStudent]) -> RepositoryResult<usize> {
        use crate::schema::students;

        let mut conn = self.conn()?;

        let db_new_students = new_students
            .iter()
            .map(DbNewStudent::from)
            .collect::<Vec<_>>();

        let inserted = diesel::insert_into(students::table)
            .values(db_new_students)
            .execute(&mut conn)?;

        Ok(inserted)
    }

    fn update_student(
        &self,
        student_id: i32,
        updates: &UpdateStudent,
    ) -> RepositoryResult<Student> {
        use crate::schema::students;

        let mut conn = self.conn()?;

        let db_updates: DbUpdateStudent = updates.into();
        let db_student = diesel::update(students::table.filter(students::id.eq(student_id)))
            .set((db_updates, students::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbStudent>(&mut conn)?;

        Ok(db_student.into())
    }

    fn delete_student(&self, student_id: i32) -> RepositoryResult<()> {
        use crate::schema::student_parent;
        use crate::schema::students;

        let mut conn = self.conn()?;

        let affected = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(
                student_parent::table.filter(student_parent::student_id.eq(student_id)),
            )
            .execute(conn)?;

            diesel::delete(students::table.filter(students::id.eq(student_id))).execute(conn)
        })?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn assign_parents_to_student(
        &self,
        student_id: i32,
        parent_ids: &[i32],
    ) -> RepositoryResult<usize> {
        use crate::schema::student_parent;

        let mut conn = self.conn()?;

        let db_links = parent_ids
            .iter()
            .map(|&parent_id| crate::models::parent::NewStudentParent {
                student_id,
                parent_id,
            })
            .collect::<Vec<_>>();

        conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(
                student_parent::table.filter(student_parent::student_id.eq(student_id)),
            )
            .execute(conn)?;

            diesel::insert_into(student_parent::table)
                .values(db_links)
                .execute(conn)
        })
        .map_err(RepositoryError::from)
    }
}
