// Hospital reference data: dataset model, alias index and facility resolution.
// The index is read-only once built; resolution never fails.

pub mod directory;
pub mod index;
pub mod models;
pub mod resolver;

pub use directory::HospitalDirectory;
pub use resolver::{FacilityResolver, HospitalData};
