use crate::Resource;

type Source = Box<dyn std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("{} not found", .0.file_name())]
    NotFound(Resource),
    #[error("could not load data from {}: {source}", .resource.file_name())]
    Read {
        resource: Resource,
        #[source]
        source: Source,
    },
    #[error("failed to decode {}: {source}", .resource.file_name())]
    Decode {
        resource: Resource,
        #[source]
        source: Source,
    },
}

impl ReadError {
    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            ReadError::NotFound(resource)
            | ReadError::Read { resource, .. }
            | ReadError::Decode { resource, .. } => *resource,
        }
    }
}
