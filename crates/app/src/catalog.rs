//! State of the exercise catalog screens
//!
//! The views render from these types and forward user interactions to them. Catalog data is
//! only read, never modified.

use futures_util::join;
use rpgym_domain::{
    Exercise, ExerciseID, ExerciseService, MuscleGroup, MuscleGroupSelection, MuscleService,
    ReadError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile,
    FitnessPlan,
    Exercises,
    Settings,
    Exercise { id: ExerciseID },
}

impl Route {
    pub const MENU: [Route; 4] = [
        Route::Profile,
        Route::Exercises,
        Route::FitnessPlan,
        Route::Settings,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Loading,
    Error(String),
    NoExercises,
    Exercises(Vec<Exercise>),
}

pub struct ExercisesPage<'a, S> {
    service: &'a S,
    loading_exercises: bool,
    loading_muscle_groups: bool,
    error_message: Option<String>,
    exercises: Vec<Exercise>,
    muscle_groups: Vec<MuscleGroup>,
    selection: MuscleGroupSelection,
}

impl<'a, S: ExerciseService + MuscleService> ExercisesPage<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            loading_exercises: true,
            loading_muscle_groups: true,
            error_message: None,
            exercises: vec![],
            muscle_groups: vec![],
            selection: MuscleGroupSelection::new(),
        }
    }

    /// Fetch the exercises and the muscle groups concurrently.
    ///
    /// If both fetches fail, the error of the exercises is reported.
    pub async fn load(&mut self) {
        let service = self.service;

        self.loading_exercises = true;
        self.loading_muscle_groups = true;
        self.error_message = None;

        let (exercises, muscle_groups) =
            join!(service.fetch_exercises(), service.fetch_muscle_groups());

        if let Err(ref err) = muscle_groups {
            self.error_message = Some(err.to_string());
        }
        if let Err(ref err) = exercises {
            self.error_message = Some(err.to_string());
        }

        self.exercises = exercises.unwrap_or_default();
        self.loading_exercises = false;
        self.muscle_groups = muscle_groups.unwrap_or_default();
        self.loading_muscle_groups = false;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading_exercises || self.loading_muscle_groups
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn muscle_groups(&self) -> &[MuscleGroup] {
        &self.muscle_groups
    }

    #[must_use]
    pub fn is_selected(&self, muscle_group: &MuscleGroup) -> bool {
        self.selection.is_selected(muscle_group)
    }

    pub fn toggle(&mut self, muscle_group: MuscleGroup) {
        self.selection.toggle(muscle_group);
    }

    #[must_use]
    pub fn selection(&self) -> &MuscleGroupSelection {
        &self.selection
    }

    #[must_use]
    pub fn exercises(&self) -> Vec<Exercise> {
        self.selection.apply(&self.exercises)
    }

    #[must_use]
    pub fn content(&self) -> Content {
        if self.loading_exercises {
            Content::Loading
        } else if let Some(ref message) = self.error_message {
            Content::Error(message.clone())
        } else if self.exercises.is_empty() {
            Content::NoExercises
        } else {
            Content::Exercises(self.exercises())
        }
    }

    #[must_use]
    pub fn open(&self, exercise: &Exercise) -> Route {
        Route::Exercise {
            id: exercise.id.clone(),
        }
    }
}

/// Content of the exercise detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDetail {
    pub exercise: Exercise,
    pub steps: Vec<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub accessory_muscles: Vec<String>,
    pub variations: Vec<Exercise>,
}

impl ExerciseDetail {
    pub async fn load<S: ExerciseService + MuscleService>(
        service: &S,
        id: &ExerciseID,
    ) -> Result<Option<Self>, ReadError> {
        let Some(exercise) = service.fetch_exercise(id).await? else {
            return Ok(None);
        };

        let steps = exercise
            .steps
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, step)| format!("{}. {step}", i + 1))
            .collect();
        let primary_muscles = service
            .fetch_muscle_names(exercise.primary_muscles.as_deref().unwrap_or_default())
            .await?;
        let secondary_muscles = service
            .fetch_muscle_names(exercise.secondary_muscles.as_deref().unwrap_or_default())
            .await?;
        let accessory_muscles = service
            .fetch_muscle_names(exercise.accessory_muscles.as_deref().unwrap_or_default())
            .await?;
        let variations = service.fetch_variations(&exercise).await?;

        Ok(Some(Self {
            exercise,
            steps,
            primary_muscles,
            secondary_muscles,
            accessory_muscles,
            variations,
        }))
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.exercise.name
    }

    /// The breathing section is only shown for a non-empty technique.
    #[must_use]
    pub fn breathing_technique(&self) -> Option<&str> {
        self.exercise
            .breathing_technique
            .as_deref()
            .filter(|b| !b.is_empty())
    }
}
