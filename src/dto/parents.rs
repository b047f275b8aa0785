//! DTOs used on the parent detail page.

use crate::domain::parent::Parent;
use crate::domain::student::Student;

/// Data displayed on a single parent's page.
pub struct ParentPageData {
    pub parent: Parent,
    /// Students this parent is linked to.
    pub students: Vec<Student>,
}
