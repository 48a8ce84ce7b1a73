//! Seeded in-memory data. This is the whole data set the app runs on;
//! nothing is fetched or persisted.

use crate::chat::{ChatThread, Message, Sender};
use crate::geo::Coordinates;
use crate::poi::{Poi, PoiCategory, PoiKind};
use crate::provider::{CareCategory, Provider, Review, ServiceDescription};

fn review(id: u32, author_name: &str, photo: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id,
        author_name: author_name.to_string(),
        author_photo_url: photo.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

fn description(category: CareCategory, text: &str) -> ServiceDescription {
    ServiceDescription {
        category,
        text: text.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The provider catalog the directory is seeded with.
pub fn mock_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: 1,
            name: "Lucía Fernández".to_string(),
            photo_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Elderly],
            rating: 4.9,
            reviews_count: 124,
            descriptions: vec![description(
                CareCategory::Elderly,
                "Auxiliar de geriatría con más de diez años de experiencia. \
                 Especializada en acompañamiento diario, control de medicación \
                 y movilidad reducida. Cariñosa, puntual y muy organizada.",
            )],
            services: strings(&[
                "Compañía y conversación",
                "Administración de medicamentos",
                "Paseos diarios",
                "Tareas ligeras del hogar",
            ]),
            hourly_rate: 14.0,
            location: "Chamberí, Madrid".to_string(),
            verifications: strings(&["DNI verificado", "Certificado de antecedentes"]),
            coordinates: Coordinates::new(40.4340, -3.7033),
            reviews: vec![
                review(
                    1,
                    "Carmen D.",
                    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=200&auto=format&fit=crop",
                    5,
                    "Lucía cuida de mi madre tres tardes por semana y no podríamos estar más tranquilos.",
                    "Hace 2 semanas",
                ),
                review(
                    2,
                    "Andrés P.",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200&auto=format&fit=crop",
                    5,
                    "Seria y profesional. Avisa de todo y siempre llega puntual.",
                    "Hace 1 mes",
                ),
            ],
            badges: strings(&["Mejor valorado"]),
            is_premium: true,
            distance_km: None,
        },
        Provider {
            id: 2,
            name: "Carlos Jiménez".to_string(),
            photo_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Pets],
            rating: 4.7,
            reviews_count: 86,
            descriptions: vec![description(
                CareCategory::Pets,
                "Amante de los animales desde siempre. Paseo perros de todos \
                 los tamaños por el centro y ofrezco visitas a domicilio para \
                 gatos. Envío fotos en cada paseo.",
            )],
            services: strings(&[
                "Paseo de perros",
                "Visitas a domicilio",
                "Cuidado nocturno",
            ]),
            hourly_rate: 9.0,
            location: "Lavapiés, Madrid".to_string(),
            verifications: strings(&["DNI verificado"]),
            coordinates: Coordinates::new(40.4086, -3.7005),
            reviews: vec![review(
                3,
                "Marta S.",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200&auto=format&fit=crop",
                5,
                "Mi galga lo adora. Flexible con los horarios y de total confianza.",
                "Hace 3 días",
            )],
            badges: vec![],
            is_premium: false,
            distance_km: None,
        },
        Provider {
            id: 3,
            name: "María García".to_string(),
            photo_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Children, CareCategory::Elderly],
            rating: 4.8,
            reviews_count: 97,
            descriptions: vec![
                description(
                    CareCategory::Children,
                    "Maestra de educación infantil. Canguro entre semana y fines \
                     de semana, con actividades adaptadas a cada edad.",
                ),
                description(
                    CareCategory::Elderly,
                    "Acompaño a personas mayores en paseos, citas médicas y \
                     gestiones del día a día con mucha paciencia y cariño.",
                ),
            ],
            services: strings(&[
                "Canguro",
                "Ayuda con los deberes",
                "Acompañamiento a mayores",
            ]),
            hourly_rate: 12.0,
            location: "Salamanca, Madrid".to_string(),
            verifications: strings(&[
                "DNI verificado",
                "Certificado de antecedentes",
                "Título de magisterio",
            ]),
            coordinates: Coordinates::new(40.4270, -3.6830),
            reviews: vec![
                review(
                    4,
                    "Laura V.",
                    "https://images.unsplash.com/photo-1489424731084-a5d8b219a5bb?q=80&w=200&auto=format&fit=crop",
                    5,
                    "Los niños la esperan con ganas cada viernes. Creativa y muy responsable.",
                    "Hace 1 semana",
                ),
                review(
                    5,
                    "Pedro L.",
                    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=200&auto=format&fit=crop",
                    4,
                    "Buena comunicación y mucha flexibilidad. Repetiremos.",
                    "Hace 2 meses",
                ),
            ],
            badges: strings(&["Experto verificado", "Respuesta rápida"]),
            is_premium: true,
            distance_km: None,
        },
        Provider {
            id: 4,
            name: "Sofia Lopez".to_string(),
            photo_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Children],
            rating: 4.8,
            reviews_count: 12,
            descriptions: vec![description(
                CareCategory::Children,
                "Estudiante de pedagogía con amplia experiencia en el cuidado \
                 de niños de todas las edades. Certificada en RCP y primeros \
                 auxilios. Creativa y muy paciente.",
            )],
            services: strings(&["Canguro", "Ayuda con los Deberes", "Juego Creativo"]),
            hourly_rate: 11.0,
            location: "Arganzuela, Madrid".to_string(),
            verifications: strings(&["DNI verificado"]),
            coordinates: Coordinates::new(40.3980, -3.6995),
            reviews: vec![review(
                6,
                "Isabel M.",
                "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?q=80&w=200&auto=format&fit=crop",
                5,
                "Cercana y puntual. A mi hija le encanta quedarse con ella.",
                "Hace 5 días",
            )],
            badges: vec![],
            is_premium: false,
            distance_km: None,
        },
        Provider {
            id: 5,
            name: "Javier Moreno".to_string(),
            photo_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Pets],
            rating: 4.5,
            reviews_count: 41,
            descriptions: vec![description(
                CareCategory::Pets,
                "Adiestrador canino en formación. Paseos largos por la Casa de \
                 Campo y guardería de día en un piso con terraza.",
            )],
            services: strings(&[
                "Paseo de perros",
                "Adiestramiento básico",
                "Guardería de día",
            ]),
            hourly_rate: 10.0,
            location: "La Latina, Madrid".to_string(),
            verifications: strings(&["DNI verificado"]),
            coordinates: Coordinates::new(40.4120, -3.7110),
            reviews: vec![],
            badges: vec![],
            is_premium: false,
            distance_km: None,
        },
        Provider {
            id: 6,
            name: "Ana Martín".to_string(),
            photo_url: "https://images.unsplash.com/photo-1554151228-14d9def656e4?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Elderly],
            rating: 4.6,
            reviews_count: 58,
            descriptions: vec![description(
                CareCategory::Elderly,
                "Enfermera jubilada. Ofrezco compañía, control de citas médicas \
                 y apoyo emocional a personas mayores que viven solas.",
            )],
            services: strings(&[
                "Compañía emocional",
                "Control de citas médicas",
                "Apoyo con movilidad reducida",
            ]),
            hourly_rate: 13.0,
            location: "Retiro, Madrid".to_string(),
            verifications: strings(&["DNI verificado", "Certificado de antecedentes"]),
            coordinates: Coordinates::new(40.4110, -3.6760),
            reviews: vec![review(
                7,
                "Jorge R.",
                "https://images.unsplash.com/photo-1500048993953-d23a436266cf?q=80&w=200&auto=format&fit=crop",
                5,
                "Mi padre está encantado con sus visitas. Una profesional de verdad.",
                "Hace 3 semanas",
            )],
            badges: vec![],
            is_premium: false,
            distance_km: None,
        },
        Provider {
            id: 7,
            name: "Elena Ruiz".to_string(),
            photo_url: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Children, CareCategory::Pets],
            rating: 4.4,
            reviews_count: 23,
            descriptions: vec![
                description(
                    CareCategory::Children,
                    "Canguro por horas y recogidas del colegio en Malasaña y \
                     alrededores. Meriendas y deberes incluidos.",
                ),
                description(
                    CareCategory::Pets,
                    "Si hay mascota en casa, también la cuido: paseos cortos y \
                     juegos mientras los niños hacen los deberes.",
                ),
            ],
            services: strings(&["Canguro", "Paseo de perros", "Recogida del colegio"]),
            hourly_rate: 10.0,
            location: "Malasaña, Madrid".to_string(),
            verifications: strings(&["DNI verificado"]),
            coordinates: Coordinates::new(40.4255, -3.7040),
            reviews: vec![],
            badges: strings(&["Respuesta rápida"]),
            is_premium: false,
            distance_km: None,
        },
        Provider {
            id: 8,
            name: "Miguel Torres".to_string(),
            photo_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=400&auto=format&fit=crop".to_string(),
            categories: vec![CareCategory::Elderly],
            rating: 4.9,
            reviews_count: 210,
            descriptions: vec![description(
                CareCategory::Elderly,
                "Auxiliar sociosanitario especializado en Alzheimer y demencias. \
                 Formación continua en primeros auxilios y mucha experiencia en \
                 acompañamiento diario de larga duración.",
            )],
            services: strings(&[
                "Cuidados con Alzheimer",
                "Primeros auxilios",
                "Acompañamiento diario",
            ]),
            hourly_rate: 15.0,
            location: "Moncloa, Madrid".to_string(),
            verifications: strings(&[
                "DNI verificado",
                "Certificado de antecedentes",
                "Título sociosanitario",
            ]),
            coordinates: Coordinates::new(40.4350, -3.7190),
            reviews: vec![review(
                8,
                "Rosa T.",
                "https://images.unsplash.com/photo-1551836022-d5d88e9218df?q=80&w=200&auto=format&fit=crop",
                5,
                "Miguel lleva un año con nosotros. No se puede pedir más.",
                "Hace 1 semana",
            )],
            badges: strings(&["Mejor valorado", "Experto verificado"]),
            is_premium: true,
            distance_km: None,
        },
    ]
}

fn seeded(id: u32, text: &str, sender: Sender, timestamp: &str, read: bool) -> Message {
    Message {
        id,
        text: text.to_string(),
        sender,
        timestamp: timestamp.to_string(),
        read,
    }
}

/// Conversations the inbox starts with. Two threads carry unread
/// messages so the navigation badge has something to count.
pub fn mock_chats(providers: &[Provider]) -> Vec<ChatThread> {
    let maria = providers.iter().find(|p| p.id == 3);
    let carlos = providers.iter().find(|p| p.id == 2);
    let mut threads = Vec::new();

    if let Some(maria) = maria {
        threads.push(ChatThread {
            id: 1,
            provider: maria.clone(),
            messages: vec![
                seeded(
                    1,
                    "Hola María, ¿estarías disponible el sábado por la tarde?",
                    Sender::Me,
                    "18:02",
                    true,
                ),
                seeded(
                    2,
                    "¡Hola! Sí, a partir de las 16:00. ¿Cuántas horas necesitas?",
                    Sender::Other,
                    "18:10",
                    true,
                ),
                seeded(
                    3,
                    "También puedo quedarme hasta la noche si lo necesitas.",
                    Sender::Other,
                    "18:11",
                    false,
                ),
            ],
        });
    }

    if let Some(carlos) = carlos {
        threads.push(ChatThread {
            id: 2,
            provider: carlos.clone(),
            messages: vec![seeded(
                1,
                "¡Gracias por contar conmigo para pasear a Lola! ¿Empezamos el lunes?",
                Sender::Other,
                "09:45",
                false,
            )],
        });
    }

    threads
}

/// Points of interest plotted around the providers' service area.
pub const MOCK_POIS: &[Poi] = &[
    Poi { id: 101, name: "Clínica Veterinaria Retiro", category: PoiCategory::Pets, kind: PoiKind::Vet, coordinates: Coordinates::new(40.4120, -3.6820) },
    Poi { id: 102, name: "Tiendanimal Mundo Pet", category: PoiCategory::Pets, kind: PoiKind::PetStore, coordinates: Coordinates::new(40.4255, -3.6930) },
    Poi { id: 103, name: "Parque Canino El Retiro", category: PoiCategory::Pets, kind: PoiKind::DogPark, coordinates: Coordinates::new(40.4148, -3.6805) },
    Poi { id: 104, name: "Kiwoko", category: PoiCategory::Pets, kind: PoiKind::PetStore, coordinates: Coordinates::new(40.4021, -3.7015) },
    Poi { id: 105, name: "Hospital Veterinario Chamberí", category: PoiCategory::Pets, kind: PoiKind::Vet, coordinates: Coordinates::new(40.4350, -3.7050) },
    Poi { id: 201, name: "Parque Infantil Madrid Río", category: PoiCategory::Children, kind: PoiKind::Playground, coordinates: Coordinates::new(40.4038, -3.7120) },
    Poi { id: 202, name: "Colegio Público San Isidoro", category: PoiCategory::Children, kind: PoiKind::School, coordinates: Coordinates::new(40.4185, -3.7080) },
    Poi { id: 203, name: "Biblioteca Pública Eugenio Trías", category: PoiCategory::Children, kind: PoiKind::Library, coordinates: Coordinates::new(40.4105, -3.6760) },
    Poi { id: 204, name: "CEIP Cervantes", category: PoiCategory::Children, kind: PoiKind::School, coordinates: Coordinates::new(40.4111, -3.7001) },
    Poi { id: 205, name: "Parque del Oeste", category: PoiCategory::Children, kind: PoiKind::Playground, coordinates: Coordinates::new(40.4290, -3.7200) },
    Poi { id: 301, name: "Centro de Salud Cortes", category: PoiCategory::Elderly, kind: PoiKind::HealthCenter, coordinates: Coordinates::new(40.4130, -3.6980) },
    Poi { id: 302, name: "Farmacia del Paseo", category: PoiCategory::Elderly, kind: PoiKind::Pharmacy, coordinates: Coordinates::new(40.4210, -3.6890) },
    Poi { id: 303, name: "Centro de Día Municipal Salamanca", category: PoiCategory::Elderly, kind: PoiKind::DayCenter, coordinates: Coordinates::new(40.4295, -3.6750) },
    Poi { id: 304, name: "Farmacia 24h Atocha", category: PoiCategory::Elderly, kind: PoiKind::Pharmacy, coordinates: Coordinates::new(40.4075, -3.6920) },
    Poi { id: 305, name: "Centro de Salud Argüelles", category: PoiCategory::Elderly, kind: PoiKind::HealthCenter, coordinates: Coordinates::new(40.4300, -3.7140) },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat;

    #[test]
    fn test_provider_ids_are_unique() {
        let providers = mock_providers();
        for (i, a) in providers.iter().enumerate() {
            for b in &providers[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_category_has_at_least_one_description() {
        for provider in mock_providers() {
            for category in &provider.categories {
                assert!(
                    provider.description_for(*category).is_some(),
                    "{} lacks a description for {category}",
                    provider.name
                );
            }
        }
    }

    #[test]
    fn test_seeded_inbox_has_unread_messages() {
        let providers = mock_providers();
        let chats = mock_chats(&providers);
        assert_eq!(chats.len(), 2);
        assert_eq!(chat::total_unread(&chats), 2);
    }
}
