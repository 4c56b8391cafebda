//! Bundled catalogs
//!
//! The catalogs are packaged with the application as JSON documents, one per [`Resource`]. Each
//! document is a sequence of records. Documents wrapping the sequence in a `data` object are
//! accepted as well.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::error;
use rpgym_domain::{self as domain, ReadError, Resource};
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;

use crate::model;

#[allow(async_fn_in_trait)]
pub trait ReadResource {
    async fn read_resource(&self, resource: Resource) -> Result<Vec<u8>, ReadError>;
}

/// Resources located in a directory on the file system.
#[derive(Debug, Clone)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The file is read synchronously. Catalogs are small, so the read completes without yielding.
impl ReadResource for Directory {
    async fn read_resource(&self, resource: Resource) -> Result<Vec<u8>, ReadError> {
        std::fs::read(self.path.join(resource.file_name())).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ReadError::NotFound(resource)
            } else {
                ReadError::Read {
                    resource,
                    source: err.into(),
                }
            }
        })
    }
}

/// Resources compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Embedded;

const EXERCISES: &[u8] = include_bytes!("../resources/exercises.json");
const MUSCLES: &[u8] = include_bytes!("../resources/muscles.json");
const MUSCLE_GROUPS: &[u8] = include_bytes!("../resources/muscle_groups.json");

impl ReadResource for Embedded {
    async fn read_resource(&self, resource: Resource) -> Result<Vec<u8>, ReadError> {
        Ok(match resource {
            Resource::Exercises => EXERCISES,
            Resource::Muscles => MUSCLES,
            Resource::MuscleGroups => MUSCLE_GROUPS,
        }
        .to_vec())
    }
}

#[derive(Debug, Clone)]
pub struct Bundle<R: ReadResource> {
    pub reader: R,
}

impl Bundle<Embedded> {
    #[must_use]
    pub const fn new() -> Self {
        Self { reader: Embedded }
    }
}

impl Default for Bundle<Embedded> {
    fn default() -> Self {
        Self::new()
    }
}

impl Bundle<Directory> {
    pub fn with_directory(path: impl Into<PathBuf>) -> Self {
        Self {
            reader: Directory::new(path),
        }
    }
}

impl<R: ReadResource> Bundle<R> {
    async fn read<T, U>(&self, resource: Resource) -> Result<Vec<U>, ReadError>
    where
        T: DeserializeOwned,
        U: From<T>,
    {
        let bytes = self.reader.read_resource(resource).await?;
        Ok(decode::<T>(resource, &bytes)?
            .into_iter()
            .map(U::from)
            .collect())
    }
}

impl<R: ReadResource> domain::ExerciseRepository for Bundle<R> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, ReadError> {
        self.read::<model::Exercise, _>(Resource::Exercises).await
    }
}

impl<R: ReadResource> domain::MuscleRepository for Bundle<R> {
    async fn read_muscles(&self) -> Result<Vec<domain::Muscle>, ReadError> {
        self.read::<model::Muscle, _>(Resource::Muscles).await
    }

    async fn read_muscle_groups(&self) -> Result<Vec<domain::MuscleGroup>, ReadError> {
        self.read::<model::MuscleGroup, _>(Resource::MuscleGroups)
            .await
    }
}

/// A document that does not match the expected shape.
///
/// The path points to the offending value in the first offending record, e.g.
/// `exercises[3].steps[1]`. Missing fields are reported at the enclosing record.
#[derive(thiserror::Error, Debug)]
#[error("{path}: {source}")]
pub struct DecodeError {
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

fn decode<T: DeserializeOwned>(resource: Resource, bytes: &[u8]) -> Result<Vec<T>, ReadError> {
    let fail = |path: String, source: serde_json::Error| {
        error!(
            "failed to decode {} at {path}: {source}",
            resource.file_name()
        );
        ReadError::Decode {
            resource,
            source: Box::new(DecodeError { path, source }),
        }
    };

    let document = serde_json::from_slice::<serde_json::Value>(bytes)
        .map_err(|err| fail(resource.to_string(), err))?;

    let (path, records) = match document {
        serde_json::Value::Object(mut object) if object.contains_key("data") => (
            format!("{resource}.data"),
            object.remove("data").unwrap_or_default(),
        ),
        document => (resource.to_string(), document),
    };

    let records = serde_json::from_value::<Vec<serde_json::Value>>(records)
        .map_err(|err| fail(path.clone(), err))?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_path_to_error::deserialize::<_, T>(record).map_err(|err| {
                let mut path = format!("{path}[{i}]");
                for segment in err.path() {
                    match segment {
                        Segment::Seq { index } => path.push_str(&format!("[{index}]")),
                        segment => path.push_str(&format!(".{segment}")),
                    }
                }
                fail(path, err.into_inner())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rpgym_domain::{ExerciseRepository, ExerciseService, MuscleRepository, Service};
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    const EXERCISE: &str = r#"{
        "id": "plank",
        "name": "Plank",
        "description": "An isometric hold",
        "general_instructions": "Keep your hips level",
        "primary_muscles": ["rectus-abdominis"],
        "image_urls": [],
        "variation_ids": []
    }"#;

    const EXERCISE_WITHOUT_ID: &str = r#"{
        "name": "Crunch",
        "description": "A core exercise",
        "general_instructions": "Do not pull on your neck",
        "image_urls": [],
        "variation_ids": []
    }"#;

    fn directory_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn decode_path(err: &ReadError) -> String {
        match err {
            ReadError::Decode { source, .. } => source
                .downcast_ref::<DecodeError>()
                .map(|e| e.path.clone())
                .unwrap(),
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[tokio::test]
    async fn test_embedded_exercises() {
        let exercises = Bundle::new().read_exercises().await.unwrap();

        assert_eq!(exercises[0].id.as_str(), "crunch");
        assert_eq!(
            exercises.iter().map(|e| &e.id).collect::<HashSet<_>>().len(),
            exercises.len()
        );
    }

    #[tokio::test]
    async fn test_embedded_muscles() {
        let muscles = Bundle::new().read_muscles().await.unwrap();

        assert_eq!(muscles[0].id.as_str(), "pectoralis-major");
    }

    #[tokio::test]
    async fn test_embedded_muscle_groups() {
        let muscle_groups = Bundle::new().read_muscle_groups().await.unwrap();

        assert_eq!(muscle_groups[0].id.as_str(), "chest");
    }

    #[tokio::test]
    async fn test_embedded_references() {
        let bundle = Bundle::new();
        let exercises = bundle.read_exercises().await.unwrap();
        let muscles = bundle.read_muscles().await.unwrap();
        let muscle_groups = bundle.read_muscle_groups().await.unwrap();

        let muscle_ids = muscles.iter().map(|m| &m.id).collect::<HashSet<_>>();
        let group_ids = muscle_groups.iter().map(|g| &g.id).collect::<HashSet<_>>();

        for exercise in &exercises {
            for muscle in exercise.targeted_muscles() {
                assert!(muscle_ids.contains(&muscle), "{}: {muscle}", exercise.id);
            }
        }
        for group in &muscle_groups {
            for muscle in &group.muscles {
                assert!(muscle_ids.contains(muscle), "{}: {muscle}", group.id);
            }
        }
        for muscle in &muscles {
            assert!(group_ids.contains(&muscle.group), "{}", muscle.id);
            assert!(
                muscle_groups
                    .iter()
                    .any(|g| g.id == muscle.group && g.contains(&muscle.id)),
                "{}",
                muscle.id
            );
        }
    }

    #[tokio::test]
    async fn test_embedded_resources_exist() {
        for resource in Resource::iter() {
            assert!(!Embedded.read_resource(resource).await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_directory_exercises() {
        let dir = directory_with(&[("exercises.json", &format!("[{EXERCISE}]"))]);

        let exercises = Bundle::with_directory(dir.path())
            .read_exercises()
            .await
            .unwrap();

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].id.as_str(), "plank");
        assert_eq!(exercises[0].steps, None);
        assert_eq!(
            exercises[0].targeted_muscles(),
            vec![domain::MuscleID::from("rectus-abdominis")]
        );
    }

    #[tokio::test]
    async fn test_directory_exercises_envelope() {
        let dir = directory_with(&[("exercises.json", &format!(r#"{{"data": [{EXERCISE}]}}"#))]);

        let exercises = Bundle::with_directory(dir.path())
            .read_exercises()
            .await
            .unwrap();

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].id.as_str(), "plank");
    }

    #[rstest]
    #[case::exercises(Resource::Exercises)]
    #[case::muscles(Resource::Muscles)]
    #[case::muscle_groups(Resource::MuscleGroups)]
    #[tokio::test]
    async fn test_directory_not_found(#[case] resource: Resource) {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Directory::new(dir.path()).read_resource(resource).await,
            Err(ReadError::NotFound(r)) if r == resource
        ));
    }

    #[tokio::test]
    async fn test_directory_not_found_message() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            Bundle::with_directory(dir.path())
                .read_muscle_groups()
                .await
                .unwrap_err()
                .to_string(),
            "muscle_groups.json not found"
        );
    }

    #[tokio::test]
    async fn test_directory_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("muscles.json")).unwrap();

        assert!(matches!(
            Bundle::with_directory(dir.path()).read_muscles().await,
            Err(ReadError::Read {
                resource: Resource::Muscles,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_directory_decode_error_missing_field() {
        let dir = directory_with(&[(
            "exercises.json",
            &format!("[{EXERCISE}, {EXERCISE_WITHOUT_ID}]"),
        )]);

        let err = Bundle::with_directory(dir.path())
            .read_exercises()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReadError::Decode {
                resource: Resource::Exercises,
                ..
            }
        ));
        assert_eq!(decode_path(&err), "exercises[1]");
        assert_eq!(
            err.to_string(),
            "failed to decode exercises.json: exercises[1]: missing field `id`"
        );
    }

    #[rstest]
    #[case::malformed("[{", "muscles")]
    #[case::not_a_sequence(r#"{"id": "trapezius"}"#, "muscles")]
    #[case::envelope_not_a_sequence(r#"{"data": {}}"#, "muscles.data")]
    #[case::wrong_type(
        r#"[{"id": "trapezius", "name": 1, "common_name": "Traps", "group": "back", "image_url": ""}]"#,
        "muscles[0].name"
    )]
    #[case::missing_field(
        r#"[{"id": "trapezius", "common_name": "Traps", "group": "back", "image_url": ""}]"#,
        "muscles[0]"
    )]
    #[tokio::test]
    async fn test_directory_decode_error(#[case] content: &str, #[case] path: &str) {
        let dir = directory_with(&[("muscles.json", content)]);

        let err = Bundle::with_directory(dir.path())
            .read_muscles()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReadError::Decode {
                resource: Resource::Muscles,
                ..
            }
        ));
        assert_eq!(decode_path(&err), path);
    }

    #[rstest]
    #[case::step(r#"{"steps": ["Lie on your back", 1]}"#, "exercises[1].steps[1]")]
    #[case::muscle(r#"{"primary_muscles": [null]}"#, "exercises[1].primary_muscles[0]")]
    #[case::image_urls(r#"{"image_urls": "plank.png"}"#, "exercises[1].image_urls")]
    #[tokio::test]
    async fn test_directory_decode_error_nested(#[case] fields: &str, #[case] path: &str) {
        let mut record = serde_json::from_str::<serde_json::Value>(EXERCISE).unwrap();
        let fields = serde_json::from_str::<serde_json::Value>(fields).unwrap();
        for (key, value) in fields.as_object().unwrap() {
            record[key] = value.clone();
        }
        let dir = directory_with(&[("exercises.json", &format!("[{EXERCISE}, {record}]"))]);

        let err = Bundle::with_directory(dir.path())
            .read_exercises()
            .await
            .unwrap_err();

        assert_eq!(decode_path(&err), path);
        assert!(
            err.to_string()
                .starts_with(&format!("failed to decode exercises.json: {path}: invalid type")),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_directory_empty_catalog() {
        let dir = directory_with(&[("muscle_groups.json", "[]")]);

        assert!(
            Bundle::with_directory(dir.path())
                .read_muscle_groups()
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_service_reads_directory_once() {
        let dir = directory_with(&[("exercises.json", &format!("[{EXERCISE}]"))]);
        let service = Service::new(Bundle::with_directory(dir.path()));

        let exercises = service.fetch_exercises().await.unwrap();
        std::fs::remove_file(dir.path().join("exercises.json")).unwrap();

        assert_eq!(service.fetch_exercises().await.unwrap(), exercises);
    }

    #[tokio::test]
    async fn test_service_retries_after_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = Service::new(Bundle::with_directory(dir.path()));

        assert!(matches!(
            service.fetch_exercises().await,
            Err(ReadError::NotFound(Resource::Exercises))
        ));

        std::fs::write(dir.path().join("exercises.json"), format!("[{EXERCISE}]")).unwrap();

        assert_eq!(service.fetch_exercises().await.unwrap().len(), 1);
    }
}
