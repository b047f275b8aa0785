//! Repository implementation for parents and guardians.

use chrono::Utc;
use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::parent::{NewParent, Parent, ParentSortField, UpdateParent};
use crate::domain::student::Student;
use crate::listing::{ListFilter, ListResult, SortDirection};
use crate::models::parent::{
    NewParent as DbNewParent, Parent as DbParent, UpdateParent as DbUpdateParent,
};
use crate::models::student::Student as DbStudent;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ParentReader, ParentWriter};

impl ParentReader for DieselRepository {
    fn get_parent_by_id(&self, id: i32) -> RepositoryResult<Option<Parent>> {
        use crate::schema::parents;

        let mut conn = self.conn()?;
        let db_parent = parents::table
            .filter(parents::id.eq(id))
            .first::<DbParent>(&mut conn)
            .optional()?;

        Ok(db_parent.map(Into::into))
    }

    fn list_parents(
        &self,
        filter: &ListFilter<ParentSortField>,
    ) -> RepositoryResult<ListResult<Parent>> {
        use crate::schema::parents;

        filter.validate()?;
        let mut conn = self.conn()?;

        let pattern = filter.search.as_ref().map(|needle| format!("%{needle}%"));

        let mut rows = parents::table.into_boxed();
        let mut total = parents::table.select(count_star()).into_boxed();

        if let Some(pattern) = &pattern {
            rows = rows.filter(
                parents::name
                    .like(pattern.clone())
                    .or(parents::email.like(pattern.clone())),
            );
            total = total.filter(
                parents::name
                    .like(pattern.clone())
                    .or(parents::email.like(pattern.clone())),
            );
        }

        if let Some(flag) = filter.status.as_flag() {
            rows = rows.filter(parents::is_active.eq(flag));
            total = total.filter(parents::is_active.eq(flag));
        }

        rows = match filter.sort {
            None => rows.order(parents::id.asc()),
            Some(sort) => match (sort.field, sort.direction) {
                (ParentSortField::Name, SortDirection::Asc) => rows.order(parents::name.asc()),
                (ParentSortField::Name, SortDirection::Desc) => rows.order(parents::name.desc()),
                (ParentSortField::Email, SortDirection::Asc) => rows.order(parents::email.asc()),
                (ParentSortField::Email, SortDirection::Desc) => rows.order(parents::email.desc()),
                (ParentSortField::CreatedAt, SortDirection::Asc) => {
                    rows.order(parents::created_at.asc())
                }
                (ParentSortField::CreatedAt, SortDirection::Desc) => {
                    rows.order(parents::created_at.desc())
                }
            },
        };

        let items = rows
            .limit(filter.limit())
            .offset(filter.offset())
            .load::<DbParent>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        let total: i64 = total.get_result(&mut conn)?;

        Ok(ListResult::new(items, total as usize))
    }

    fn list_all_parents(&self) -> RepositoryResult<Vec<Parent>> {
        use crate::schema::parents;

        let mut conn = self.conn()?;
        let db_parents = parents::table
            .filter(parents::is_active.eq(true))
            .order(parents::name.asc())
            .load::<DbParent>(&mut conn)?;

        Ok(db_parents.into_iter().map(Into::into).collect())
    }

    fn list_students_of_parent(&self, parent_id: i32) -> RepositoryResult<Vec<Student>> {
        use crate::schema::student_parent;
        use crate::schema::students;

        let mut conn = self.conn()?;
        let db_students = students::table
            .inner_join(student_parent::table)
            .filter(student_parent::parent_id.eq(parent_id))
            .select(students::all_columns)
            .order((students::last_name.asc(), students::first_name.asc()))
            .load::<DbStudent>(&mut conn)?;

        Ok(db_students.into_iter().map(Into::into).collect())
    }

    fn count_parents(&self) -> RepositoryResult<usize> {
        use crate::schema::parents;

        let mut conn = self.conn()?;
        let total: i64 = parents::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }
}

impl ParentWriter for DieselRepository {
    fn create_parent(&self, new_parent: &NewParent) -> RepositoryResult<Parent> {
        use crate::schema::parents;

        let mut conn = self.conn()?;

        let db_new_parent: DbNewParent = new_parent.into();
        let db_parent = diesel::insert_into(parents::table)
            .values(&db_new_parent)
            .get_result::<DbParent>(&mut conn)?;

        Ok(db_parent.into())
    }

    fn update_parent(&self, parent_id: i32, updates: &UpdateParent) -> RepositoryResult<Parent> {
        use crate::schema::parents;

        let mut conn = self.conn()?;

        let db_updates: DbUpdateParent = updates.into();
        let db_parent = diesel::update(parents::table.filter(parents::id.eq(parent_id)))
            .set((db_updates, parents::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbParent>(&mut conn)?;

        Ok(db_parent.into())
    }

    fn delete_parent(&self, parent_id: i32) -> RepositoryResult<()> {
        use crate::schema::parents;
        use crate::schema::student_parent;

        let mut conn = self.conn()?;

        let affected = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(student_parent::table.filter(student_parent::parent_id.eq(parent_id)))
                .execute(conn)?;

            diesel::delete(parents::table.filter(parents::id.eq(parent_id))).execute(conn)
        })?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
