#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use rpgym_domain::Service;
use rpgym_storage::Bundle;

pub mod catalog;
pub mod log;
pub mod settings;

pub use settings::{ResourceLocation, Settings};

/// Catalog access as configured by the settings.
pub type Catalog = Service<Bundle<ResourceLocation>>;

#[must_use]
pub fn catalog(settings: &Settings) -> Catalog {
    Service::new(Bundle {
        reader: settings.resources.clone(),
    })
}
