//! The signed-in demo user shown on the profile screens.

use cuidamet_core::provider::CareCategory;

pub struct DemoUser {
    pub name: &'static str,
    pub photo_url: &'static str,
    pub location: &'static str,
    pub categories: &'static [CareCategory],
    pub hourly_rate: f64,
    pub services: &'static [&'static str],
    pub description: &'static str,
    pub experience: &'static str,
    pub rating: f32,
    pub reviews_count: u32,
}

pub const DEMO_USER: DemoUser = DemoUser {
    name: "Sofia Lopez",
    photo_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=400&auto=format&fit=crop",
    location: "Arganzuela, Madrid",
    categories: &[CareCategory::Children],
    hourly_rate: 11.0,
    services: &["Canguro", "Ayuda con los Deberes", "Juego Creativo"],
    description: "Estudiante de pedagogía con amplia experiencia en el cuidado \
                  de niños de todas las edades. Certificada en RCP y primeros \
                  auxilios. Creativa y muy paciente.",
    experience: "Intermedio (2-5 años)",
    rating: 4.8,
    reviews_count: 12,
};
