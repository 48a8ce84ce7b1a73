//! Settings stack: the hub, security settings, and notification
//! preferences.

use dioxus::prelude::*;

use super::page_header::PageHeader;

#[component]
pub fn SettingsPage(
    on_back: EventHandler<()>,
    on_navigate_edit_profile: EventHandler<()>,
    on_navigate_security: EventHandler<()>,
    on_navigate_notifications: EventHandler<()>,
    on_navigate_legal: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page",
            PageHeader { title: "Configuración", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                div { class: "card menu",
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_edit_profile.call(()),
                        span { "👤 Editar el perfil" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_security.call(()),
                        span { "🛡 Verificaciones y seguridad" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_notifications.call(()),
                        span { "🔔 Notificaciones" }
                        span { class: "chevron", "›" }
                    }
                    button {
                        class: "menu-item",
                        onclick: move |_| on_navigate_legal.call(()),
                        span { "📄 Tu información legal" }
                        span { class: "chevron", "›" }
                    }
                }
                button {
                    class: "button secondary wide",
                    onclick: move |_| on_logout.call(()),
                    "Cerrar sesión"
                }
            }
        }
    }
}

#[component]
pub fn SecuritySettingsPage(
    on_back: EventHandler<()>,
    on_delete_account: EventHandler<()>,
) -> Element {
    let mut two_factor = use_signal(|| false);

    rsx! {
        div { class: "page",
            PageHeader { title: "Verificaciones y Seguridad", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    h3 { "Verificaciones" }
                    ul { class: "verification-list",
                        li { "✓ DNI verificado" }
                        li { "✓ Correo electrónico confirmado" }
                        li { "✓ Teléfono confirmado" }
                    }
                }
                section { class: "card",
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: *two_factor.read(),
                            oninput: move |evt| two_factor.set(evt.checked()),
                        }
                        span { "Verificación en dos pasos al iniciar sesión" }
                    }
                }
                section { class: "card danger-zone",
                    h3 { "Zona de peligro" }
                    p { class: "muted",
                        "Eliminar tu cuenta borra tu perfil, tus conversaciones y \
                         tus reservas. Esta acción no se puede deshacer."
                    }
                    button {
                        class: "button danger wide",
                        onclick: move |_| on_delete_account.call(()),
                        "Eliminar mi cuenta"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationsPage(on_back: EventHandler<()>) -> Element {
    let mut messages = use_signal(|| true);
    let mut bookings = use_signal(|| true);
    let mut news = use_signal(|| false);

    rsx! {
        div { class: "page",
            PageHeader { title: "Notificaciones", on_back: move |_| on_back.call(()) }
            main { class: "page-body",
                section { class: "card",
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: *messages.read(),
                            oninput: move |evt| messages.set(evt.checked()),
                        }
                        span { "Nuevos mensajes de cuidadores" }
                    }
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: *bookings.read(),
                            oninput: move |evt| bookings.set(evt.checked()),
                        }
                        span { "Cambios en mis reservas" }
                    }
                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: *news.read(),
                            oninput: move |evt| news.set(evt.checked()),
                        }
                        span { "Novedades y consejos de Cuidamet" }
                    }
                }
            }
        }
    }
}
