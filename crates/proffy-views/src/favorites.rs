use proffy_core::Teacher;

use crate::row::TeacherRow;

/// Header title of the screen
pub const TITLE: &str = "Meus Proffys favoritos";

/// View-model of the favorites screen.
///
/// Holds the full records of the favorite teachers and shows all of them.
/// Where the records come from is up to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesViewModel {
    teachers: Vec<Teacher>,
}

impl FavoritesViewModel {
    pub const fn new(teachers: Vec<Teacher>) -> Self {
        Self { teachers }
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    /// Every row on this screen is a favorite.
    pub fn rows(&self) -> Vec<TeacherRow> {
        self.teachers
            .iter()
            .map(|teacher| TeacherRow {
                teacher: teacher.clone(),
                is_favorite: true,
            })
            .collect()
    }
}

impl From<Vec<Teacher>> for FavoritesViewModel {
    fn from(teachers: Vec<Teacher>) -> Self {
        Self::new(teachers)
    }
}
