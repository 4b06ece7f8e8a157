//! Grade book ordering for the enrollments screen.
//!
//! Students are sorted by current score (ascending) and split at
//! [`PASSING_SCORE`]: everyone failing comes first, then everyone passing.
//! Rows are addressed by a single index across both groups.

use crate::api::Enrollment;

pub const PASSING_SCORE: f64 = 70.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeBook {
    failing: Vec<Enrollment>,
    passing: Vec<Enrollment>,
}

impl GradeBook {
    /// Keeps only student enrollments, sorts them and partitions them.
    pub fn from_enrollments(enrollments: Vec<Enrollment>) -> Self {
        let mut students: Vec<Enrollment> =
            enrollments.into_iter().filter(Enrollment::is_student).collect();
        students.sort_by(|a, b| a.score().total_cmp(&b.score()));

        let (failing, passing) = students
            .into_iter()
            .partition(|e| e.score() < PASSING_SCORE);
        Self { failing, passing }
    }

    pub fn failing(&self) -> &[Enrollment] {
        &self.failing
    }

    pub fn passing(&self) -> &[Enrollment] {
        &self.passing
    }

    pub fn len(&self) -> usize {
        self.failing.len() + self.passing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row `index` in render order (failing rows, then passing rows).
    pub fn get(&self, index: usize) -> Option<&Enrollment> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enrollment> {
        self.failing.iter().chain(self.passing.iter())
    }
}
