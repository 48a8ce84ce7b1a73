//! Informational pages reachable from the footer.

use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn PricesPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Precios", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                div { class: "page-intro",
                    h2 { "Precios Transparentes" }
                    p { "Sin sorpresas. Sabes lo que pagas desde el primer momento." }
                }
                section { class: "card",
                    h3 { "Para Familias" }
                    p { class: "muted", "Encuentra al cuidador perfecto con total libertad." }
                    p { class: "price-tag", "Gratis" }
                    p { class: "muted", "para buscar y contactar" }
                    ul { class: "feature-list",
                        li { "✓ Búsqueda ilimitada de perfiles." }
                        li { "✓ Contacto directo por chat seguro." }
                        li { "✓ Acceso a valoraciones y verificaciones." }
                    }
                    p { class: "fine-print",
                        "Solo pagas la tarifa del cuidador más una pequeña tasa de \
                         servicio al confirmar una reserva. Esta tasa nos ayuda a \
                         mantener la plataforma segura y operativa."
                    }
                }
                section { class: "card",
                    h3 { "Para Cuidadores" }
                    p { class: "muted", "Ofrece tus servicios y encuentra trabajo." }
                    p { class: "price-tag", "Gratis" }
                    p { class: "muted", "publicar tu perfil" }
                    ul { class: "feature-list",
                        li { "✓ Crea tu perfil profesional completo." }
                        li { "✓ Define tus propias tarifas y horarios." }
                        li { "✓ Recibe solicitudes de familias interesadas." }
                    }
                    p { class: "fine-print",
                        "Aplicamos una comisión de servicio transparente sobre tus \
                         ganancias por cada trabajo completado. Esto cubre la gestión \
                         de pagos, soporte y promoción de tu perfil."
                    }
                }
            }
        }
    }
}

#[component]
pub fn SecurityPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Seguridad", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                div { class: "page-intro",
                    h2 { "Tu tranquilidad, lo primero" }
                    p { "Así protegemos a las familias y a los cuidadores." }
                }
                section { class: "card",
                    ul { class: "feature-list",
                        li { "🛡 Verificación de identidad de todos los cuidadores." }
                        li { "📄 Certificados de antecedentes visibles en el perfil." }
                        li { "💬 Chat y pagos siempre dentro de la plataforma." }
                        li { "⭐ Valoraciones reales de otras familias." }
                    }
                }
            }
        }
    }
}

#[component]
pub fn VerificationPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Proceso de Verificación", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    h3 { "1. Identidad" }
                    p { "Comprobamos el DNI o NIE de cada cuidador." }
                    h3 { "2. Antecedentes" }
                    p {
                        "Los cuidadores pueden aportar su certificado de \
                         antecedentes penales, que mostramos como insignia."
                    }
                    h3 { "3. Títulos y cursos" }
                    p {
                        "Revisamos títulos sociosanitarios, de magisterio o de \
                         primeros auxilios antes de destacarlos en el perfil."
                    }
                }
            }
        }
    }
}

#[component]
pub fn HelpCenterPage(on_back: EventHandler<()>) -> Element {
    let faqs: [(&str, &str); 4] = [
        (
            "¿Cómo reservo un cuidador?",
            "Abre su perfil, pulsa «Reservar», elige fecha y horario o un pack \
             de horas y confirma el pago.",
        ),
        (
            "¿Puedo cancelar una reserva?",
            "Sí, desde el chat con tu cuidador hasta 24 horas antes sin coste.",
        ),
        (
            "¿Cómo me convierto en cuidador?",
            "Publica tu perfil desde la pestaña central «Ofrecer» y completa la \
             verificación de identidad.",
        ),
        (
            "¿Qué hago si tengo un problema?",
            "Escríbenos desde Ayuda y soporte: el chat responde al momento y el \
             correo en menos de 24 horas.",
        ),
    ];

    rsx! {
        div { class: "page",
            PageHeader { title: "Centro de Ayuda", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                for (question, answer) in faqs {
                    section { key: "{question}", class: "card",
                        h3 { "{question}" }
                        p { "{answer}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutUsPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Sobre Nosotros", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    p {
                        "Cuidamet nació en Madrid con una idea sencilla: encontrar \
                         a alguien de confianza para cuidar de los tuyos no debería \
                         ser difícil."
                    }
                    p {
                        "Hoy conectamos a miles de familias con cuidadores \
                         verificados de mayores, niños y mascotas en toda España, \
                         con el chat, la reserva y el pago en un mismo sitio."
                    }
                }
            }
        }
    }
}

#[component]
pub fn BlogPage(on_back: EventHandler<()>) -> Element {
    let posts: [(&str, &str); 3] = [
        (
            "Cómo elegir canguro por primera vez",
            "Las cinco preguntas que toda familia debería hacer antes de la \
             primera reserva.",
        ),
        (
            "Cuidado de mayores en casa: guía rápida",
            "Rutinas, medicación y compañía: qué puede hacer un cuidador por \
             horas.",
        ),
        (
            "¿Tu perro se queda solo? Esto ayuda",
            "Paseos de mediodía y visitas a domicilio para perros que pasan \
             muchas horas en casa.",
        ),
    ];

    rsx! {
        div { class: "page",
            PageHeader { title: "Blog", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                for (title, summary) in posts {
                    section { key: "{title}", class: "card",
                        h3 { "{title}" }
                        p { class: "muted", "{summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactPage(on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Contacto", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    p { "✉ hola@cuidamet.es" }
                    p { "📞 +34 910 000 000 (L-V, 9:00–18:00)" }
                    p { "📍 Calle de la Princesa 1, 28008 Madrid" }
                }
            }
        }
    }
}
