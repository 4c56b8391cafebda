#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod bundle;
pub mod model;

pub use bundle::{Bundle, DecodeError, Directory, Embedded, ReadResource};
