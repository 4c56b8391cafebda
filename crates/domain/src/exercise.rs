use derive_more::{AsRef, Deref, Display};

use crate::{MuscleGroup, MuscleID, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn fetch_exercises(&self) -> Result<Vec<Exercise>, ReadError>;

    async fn fetch_exercise(&self, id: &ExerciseID) -> Result<Option<Exercise>, ReadError> {
        Ok(self
            .fetch_exercises()
            .await?
            .into_iter()
            .find(|e| e.id == *id))
    }

    async fn fetch_exercises_by_muscle_groups(
        &self,
        muscle_groups: &[MuscleGroup],
    ) -> Result<Vec<Exercise>, ReadError> {
        Ok(filter_exercises(
            &self.fetch_exercises().await?,
            muscle_groups,
        ))
    }

    /// Resolve the variations of an exercise in the order they are listed.
    ///
    /// Variation identifiers without a catalog entry are skipped.
    async fn fetch_variations(&self, exercise: &Exercise) -> Result<Vec<Exercise>, ReadError> {
        let exercises = self.fetch_exercises().await?;
        Ok(exercise
            .variation_ids
            .iter()
            .filter_map(|id| exercises.iter().find(|e| e.id == *id))
            .cloned()
            .collect())
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub breathing_technique: Option<String>,
    pub general_instructions: String,
    pub steps: Option<Vec<String>>,
    pub primary_muscles: Option<Vec<MuscleID>>,
    pub secondary_muscles: Option<Vec<MuscleID>>,
    pub accessory_muscles: Option<Vec<MuscleID>>,
    pub video_url: Option<String>,
    pub image_urls: Vec<String>,
    pub variation_ids: Vec<ExerciseID>,
}

impl Exercise {
    /// Primary, secondary and accessory muscles in this order, duplicates included.
    #[must_use]
    pub fn targeted_muscles(&self) -> Vec<MuscleID> {
        [
            &self.primary_muscles,
            &self.secondary_muscles,
            &self.accessory_muscles,
        ]
        .into_iter()
        .flatten()
        .flatten()
        .cloned()
        .collect()
    }

    #[must_use]
    pub fn has_targeted_muscles(&self) -> bool {
        [
            &self.primary_muscles,
            &self.secondary_muscles,
            &self.accessory_muscles,
        ]
        .into_iter()
        .flatten()
        .any(|muscles| !muscles.is_empty())
    }

    #[must_use]
    pub fn targets_primarily(&self, muscle_id: &MuscleID) -> bool {
        self.primary_muscles
            .as_deref()
            .unwrap_or_default()
            .contains(muscle_id)
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Select the exercises whose primary muscles intersect any of the selected muscle groups.
///
/// Secondary and accessory muscles are not taken into account. The catalog order is kept and an
/// empty selection yields all exercises.
#[must_use]
pub fn filter_exercises(exercises: &[Exercise], muscle_groups: &[MuscleGroup]) -> Vec<Exercise> {
    if muscle_groups.is_empty() {
        return exercises.to_vec();
    }

    let muscles = muscle_groups
        .iter()
        .flat_map(|g| g.muscles.iter())
        .collect::<Vec<_>>();

    exercises
        .iter()
        .filter(|e| muscles.iter().any(|m| e.targets_primarily(m)))
        .cloned()
        .collect()
}
