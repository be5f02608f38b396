use proffy_core::Teacher;

/// One rendered teacher entry
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherRow {
    pub teacher: Teacher,
    pub is_favorite: bool,
}
