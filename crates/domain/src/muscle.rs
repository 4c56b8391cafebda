use derive_more::{AsRef, Deref, Display};

use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait MuscleService {
    async fn fetch_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
    async fn fetch_muscle_groups(&self) -> Result<Vec<MuscleGroup>, ReadError>;

    async fn fetch_muscle(&self, id: &MuscleID) -> Result<Option<Muscle>, ReadError> {
        Ok(self
            .fetch_muscles()
            .await?
            .into_iter()
            .find(|m| m.id == *id))
    }

    /// Resolve muscle identifiers to display names.
    ///
    /// Unknown identifiers are kept as they are.
    async fn fetch_muscle_names(&self, ids: &[MuscleID]) -> Result<Vec<String>, ReadError> {
        let muscles = self.fetch_muscles().await?;
        Ok(ids
            .iter()
            .map(|id| {
                muscles
                    .iter()
                    .find(|m| m.id == *id)
                    .map_or_else(|| id.to_string(), |m| m.name.clone())
            })
            .collect())
    }
}

#[allow(async_fn_in_trait)]
pub trait MuscleRepository {
    async fn read_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
    async fn read_muscle_groups(&self) -> Result<Vec<MuscleGroup>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: MuscleID,
    pub name: String,
    pub common_name: String,
    pub group: MuscleGroupID,
    pub image_url: String,
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleID(String);

impl From<String> for MuscleID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MuscleID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleGroup {
    pub id: MuscleGroupID,
    pub name: String,
    pub image_url: String,
    pub muscles: Vec<MuscleID>,
}

impl MuscleGroup {
    #[must_use]
    pub fn contains(&self, muscle_id: &MuscleID) -> bool {
        self.muscles.contains(muscle_id)
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleGroupID(String);

impl From<String> for MuscleGroupID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MuscleGroupID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
