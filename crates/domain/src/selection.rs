use crate::{Exercise, MuscleGroup, filter_exercises};

/// The muscle groups currently selected for filtering the exercise catalog.
///
/// Membership is decided by structural equality.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MuscleGroupSelection {
    groups: Vec<MuscleGroup>,
}

impl MuscleGroupSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, group: &MuscleGroup) -> bool {
        self.groups.contains(group)
    }

    pub fn toggle(&mut self, group: MuscleGroup) {
        if self.is_selected(&group) {
            self.groups.retain(|g| *g != group);
        } else {
            self.groups.push(group);
        }
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn groups(&self) -> &[MuscleGroup] {
        &self.groups
    }

    #[must_use]
    pub fn apply(&self, exercises: &[Exercise]) -> Vec<Exercise> {
        filter_exercises(exercises, &self.groups)
    }
}
