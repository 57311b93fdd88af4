use std::fmt::Write as _;

use chrono::NaiveDate;

use super::layout::{document, escape_html, PageHead};

pub const CONTACT_EMAIL: &str = "contacto@licenciafacil.cl";

struct PolicySection {
    heading: &'static str,
    intro: &'static str,
    items: &'static [&'static str],
}

const SECTIONS: [PolicySection; 5] = [
    PolicySection {
        heading: "1. Información que recopilamos",
        intro: "Recopilamos únicamente la información que proporcionas voluntariamente en nuestro formulario de registro:",
        items: &[
            "Nombre completo",
            "Dirección de correo electrónico",
            "Fecha programada para tu examen",
        ],
    },
    PolicySection {
        heading: "2. Cómo utilizamos tu información",
        intro: "Utilizamos tu información exclusivamente para:",
        items: &[
            "Proporcionarte acceso al simulador",
            "Enviar recordatorios sobre tu fecha de examen",
            "Mejorar nuestros servicios",
        ],
    },
    PolicySection {
        heading: "3. Protección de datos",
        intro: "Implementamos medidas de seguridad técnicas y organizativas para proteger tu información personal contra acceso no autorizado, alteración, divulgación o destrucción.",
        items: &[],
    },
    PolicySection {
        heading: "4. Compartir información",
        intro: "No vendemos, intercambiamos ni transferimos tu información personal a terceros sin tu consentimiento, excepto cuando sea requerido por ley.",
        items: &[],
    },
    PolicySection {
        heading: "5. Tus derechos",
        intro: "Tienes derecho a:",
        items: &[
            "Acceder a tu información personal",
            "Rectificar datos incorrectos",
            "Solicitar la eliminación de tus datos",
            "Retirar tu consentimiento",
        ],
    },
];

/// Renders the static privacy policy; `today` is shown as the revision date.
pub fn render(today: NaiveDate) -> String {
    let head = PageHead {
        title: "Política de Privacidad - Simulador Licencia Clase B Chile",
        description: "Política de privacidad del simulador de licencia clase B Chile",
        robots: Some("noindex, nofollow"),
        extra: String::new(),
    };

    let mut body = String::new();
    body.push_str("<main class=\"policy\">\n<h1>Política de Privacidad</h1>\n");
    writeln!(
        body,
        "<p class=\"muted\">Última actualización: {}</p>",
        today.format("%d-%m-%Y")
    )
    .expect("write revision date");

    for section in &SECTIONS {
        writeln!(body, "<section><h2>{}</h2>", escape_html(section.heading))
            .expect("write heading");
        writeln!(body, "<p>{}</p>", escape_html(section.intro)).expect("write intro");
        if !section.items.is_empty() {
            body.push_str("<ul>\n");
            for item in section.items {
                writeln!(body, "<li>{}</li>", escape_html(item)).expect("write item");
            }
            body.push_str("</ul>\n");
        }
        body.push_str("</section>\n");
    }

    writeln!(
        body,
        "<section><h2>6. Contacto</h2><p>Para ejercer tus derechos o realizar consultas sobre esta política, \
         contáctanos en: <a href=\"mailto:{CONTACT_EMAIL}\">{CONTACT_EMAIL}</a></p></section>"
    )
    .expect("write contact");
    body.push_str("<footer><a href=\"/\">← Volver al simulador</a></footer>\n</main>\n");

    document(&head, &body)
}
