//! DTOs used on the student detail page.

use crate::domain::parent::Parent;
use crate::domain::student::Student;

/// Data displayed on a single student's page.
pub struct StudentPageData {
    pub student: Student,
    /// Parents currently linked to the student.
    pub parents: Vec<Parent>,
    /// Active parents offered by the assignment picker.
    pub available_parents: Vec<Parent>,
}
