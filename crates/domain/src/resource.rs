use strum::{AsRefStr, Display, EnumIter};

/// The read-only catalogs packaged with the application.
#[derive(AsRefStr, Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    #[strum(serialize = "exercises")]
    Exercises,
    #[strum(serialize = "muscles")]
    Muscles,
    #[strum(serialize = "muscle_groups")]
    MuscleGroups,
}

impl Resource {
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_ref())
    }
}
