//! Neighborhood points of interest surfaced on the map screen.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Audience a point of interest is relevant to.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiCategory {
    #[display("Mascotas")]
    Pets,
    #[display("Niños")]
    Children,
    #[display("Mayores")]
    Elderly,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoiKind {
    #[display("Veterinario")]
    Vet,
    #[display("Tienda de mascotas")]
    PetStore,
    #[display("Parque canino")]
    DogPark,
    #[display("Parque infantil")]
    Playground,
    #[display("Colegio")]
    School,
    #[display("Biblioteca")]
    Library,
    #[display("Centro de salud")]
    HealthCenter,
    #[display("Farmacia")]
    Pharmacy,
    #[display("Centro de día")]
    DayCenter,
}

/// A fixed landmark near the providers' service area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Poi {
    pub id: u32,
    pub name: &'static str,
    pub category: PoiCategory,
    pub kind: PoiKind,
    pub coordinates: Coordinates,
}
