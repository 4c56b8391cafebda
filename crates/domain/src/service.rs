use log::{debug, error};

use crate::{
    Cache, Exercise, ExerciseRepository, ExerciseService, Muscle, MuscleGroup, MuscleRepository,
    MuscleService, ReadError,
};

/// Catalog access backed by a repository.
///
/// Each catalog is read from the repository on first access and served from memory afterwards.
/// A failed read leaves the catalog uncached, so the next fetch reads again.
pub struct Service<R> {
    repository: R,
    exercises: Cache<Exercise>,
    muscles: Cache<Muscle>,
    muscle_groups: Cache<MuscleGroup>,
}

impl<R> Service<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            exercises: Cache::new(),
            muscles: Cache::new(),
            muscle_groups: Cache::new(),
        }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

macro_rules! fetch_once {
    ($self: ident, $cache: ident, $read: ident, $entity: literal) => {{
        match $self.$cache.get() {
            Some(entries) => Ok(entries),
            None => {
                let entries = log_on_error!($self.repository.$read(), "read", $entity)?;
                debug!("read {} {}", entries.len(), $entity);
                Ok($self.$cache.fill(entries))
            }
        }
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn fetch_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        fetch_once!(self, exercises, read_exercises, "exercises")
    }
}

impl<R: MuscleRepository> MuscleService for Service<R> {
    async fn fetch_muscles(&self) -> Result<Vec<Muscle>, ReadError> {
        fetch_once!(self, muscles, read_muscles, "muscles")
    }

    async fn fetch_muscle_groups(&self) -> Result<Vec<MuscleGroup>, ReadError> {
        fetch_once!(self, muscle_groups, read_muscle_groups, "muscle groups")
    }
}
