//! JSON representation of the bundled catalogs

use rpgym_domain as domain;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub breathing_technique: Option<String>,
    pub general_instructions: String,
    pub steps: Option<Vec<String>>,
    pub primary_muscles: Option<Vec<String>>,
    pub secondary_muscles: Option<Vec<String>>,
    pub accessory_muscles: Option<Vec<String>>,
    pub video_url: Option<String>,
    pub image_urls: Vec<String>,
    pub variation_ids: Vec<String>,
}

impl From<Exercise> for domain::Exercise {
    fn from(value: Exercise) -> Self {
        domain::Exercise {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            breathing_technique: value.breathing_technique,
            general_instructions: value.general_instructions,
            steps: value.steps,
            primary_muscles: value.primary_muscles.map(muscle_ids),
            secondary_muscles: value.secondary_muscles.map(muscle_ids),
            accessory_muscles: value.accessory_muscles.map(muscle_ids),
            video_url: value.video_url,
            image_urls: value.image_urls,
            variation_ids: value.variation_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Muscle {
    pub id: String,
    pub name: String,
    pub common_name: String,
    pub group: String,
    pub image_url: String,
}

impl From<Muscle> for domain::Muscle {
    fn from(value: Muscle) -> Self {
        domain::Muscle {
            id: value.id.into(),
            name: value.name,
            common_name: value.common_name,
            group: value.group.into(),
            image_url: value.image_url,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MuscleGroup {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub muscles: Vec<String>,
}

impl From<MuscleGroup> for domain::MuscleGroup {
    fn from(value: MuscleGroup) -> Self {
        domain::MuscleGroup {
            id: value.id.into(),
            name: value.name,
            image_url: value.image_url,
            muscles: muscle_ids(value.muscles),
        }
    }
}

fn muscle_ids(ids: Vec<String>) -> Vec<domain::MuscleID> {
    ids.into_iter().map(Into::into).collect()
}
