#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cache;
mod error;
mod exercise;
mod muscle;
mod resource;
mod selection;
mod service;

pub use cache::*;
pub use error::*;
pub use exercise::*;
pub use muscle::*;
pub use resource::*;
pub use selection::*;
pub use service::*;
