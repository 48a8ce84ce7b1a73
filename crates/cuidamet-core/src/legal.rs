//! Legal documents shown in the settings stack.

/// A legal text: summary card plus full body. Bodies are plain text;
/// blank lines separate paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDocument {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

/// Registry of the app's legal texts.
pub const LEGAL_DOCUMENTS: &[LegalDocument] = &[
    LegalDocument {
        id: "terms",
        title: "Términos y Condiciones",
        description: "Las reglas de uso de la plataforma Cuidamet.",
        body: "Bienvenido a Cuidamet. Al utilizar la aplicación aceptas estos \
términos en su totalidad.\n\nCuidamet es una plataforma de intermediación: \
ponemos en contacto a familias con cuidadores independientes, pero no somos \
parte del acuerdo de cuidado. Cada cuidador es responsable de los servicios \
que ofrece.\n\nLas reservas se pagan a través de la plataforma. La tarifa del \
cuidador y, en su caso, la tasa de servicio se muestran siempre antes de \
confirmar el pago.\n\nNos reservamos el derecho de suspender cuentas que \
incumplan las normas de convivencia o publiquen información falsa.",
    },
    LegalDocument {
        id: "privacy",
        title: "Política de Privacidad",
        description: "Qué datos tratamos y con qué finalidad.",
        body: "Tratamos los datos imprescindibles para prestar el servicio: \
datos de perfil, mensajes intercambiados con cuidadores y detalles de las \
reservas.\n\nTu ubicación solo se utiliza, previa autorización, para ordenar \
los resultados por cercanía y para centrar el mapa. Nunca se almacena ni se \
comparte con terceros.\n\nPuedes ejercer tus derechos de acceso, \
rectificación y supresión desde la sección de Configuración o escribiendo a \
privacidad@cuidamet.es.",
    },
    LegalDocument {
        id: "cookies",
        title: "Política de Cookies",
        description: "Uso de cookies y tecnologías similares.",
        body: "Cuidamet utiliza únicamente cookies técnicas necesarias para \
el funcionamiento de la sesión.\n\nNo empleamos cookies publicitarias ni de \
seguimiento de terceros. Las preferencias de la aplicación se guardan en tu \
dispositivo y puedes borrarlas en cualquier momento desde los ajustes del \
sistema.",
    },
];

/// Look up a document by id.
pub fn legal_document(id: &str) -> Option<&'static LegalDocument> {
    LEGAL_DOCUMENTS.iter().find(|document| document.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(legal_document("terms").unwrap().title, "Términos y Condiciones");
        assert!(legal_document("missing").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in LEGAL_DOCUMENTS.iter().enumerate() {
            for b in &LEGAL_DOCUMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
