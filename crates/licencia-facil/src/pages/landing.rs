use std::fmt::Write as _;

use chrono::NaiveDate;
use serde_json::json;

use super::layout::{document, escape_html, PageHead};
use super::PRIVACY_PATH;
use crate::leads::{InputKind, LeadForm, SubmissionState, FORM_FIELDS, GPT_SIMULATOR_URL};

pub const SUBMIT_PATH: &str = "/registro";

const TITLE: &str = "Simulador Licencia Clase B Chile 2025 - Examen Teórico CONASET Gratis";
const DESCRIPTION: &str = "Simulador oficial licencia clase B Chile 2025. Practica gratis con preguntas reales del examen teórico CONASET. ¡Aprueba tu licencia B al primer intento!";
const KEYWORDS: &str = "simulador licencia clase b chile, examen teorico conaset, test licencia clase b, preguntas examen conducir chile";
const CANONICAL_URL: &str = "https://licenciafacil.cl/";

pub const FEATURES: [&str; 5] = [
    "✅ Preguntas oficiales CONASET actualizadas 2025",
    "✅ Test gratuito sin límites de tiempo",
    "✅ Simulador realista igual al examen real",
    "✅ Resultados instantáneos con explicaciones",
    "✅ Acceso directo al GPT oficial de CONASET",
];

pub const STEPS: [&str; 5] = [
    "Completa el formulario de registro",
    "Serás redirigido al simulador oficial GPT",
    "Practica con preguntas reales de CONASET",
    "Recibe retroalimentación inmediata",
    "¡Aprueba tu examen con confianza!",
];

// Clears a field's error as soon as it changes and locks the button while posting.
const FORM_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('lead-form');
  if (!form) { return; }
  form.querySelectorAll('input[data-lead-field]').forEach(function (input) {
    input.addEventListener('input', function () {
      var error = document.getElementById(input.name + '-error');
      if (error) { error.remove(); }
      input.removeAttribute('aria-invalid');
    });
  });
  form.addEventListener('submit', function () {
    var button = form.querySelector('button[type=submit]');
    button.disabled = true;
    button.textContent = 'Registrando...';
  });
  var toast = document.getElementById('toast');
  if (toast) { setTimeout(function () { toast.remove(); }, 4000); }
})();
"#;

/// schema.org description embedded as JSON-LD.
pub fn structured_data() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebApplication",
        "name": "Simulador Licencia Clase B Chile",
        "description": "Simulador gratuito para el examen teórico de licencia clase B en Chile",
        "applicationCategory": "EducationalApplication",
        "operatingSystem": "Web",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "CLP"
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.9",
            "ratingCount": "1287"
        }
    })
}

fn seo_tags() -> String {
    let mut tags = String::new();
    let meta = [
        ("name", "keywords", KEYWORDS),
        ("name", "author", "Licencia Fácil Chile"),
        (
            "property",
            "og:title",
            "Simulador Licencia Clase B Chile 2025 - Test CONASET Gratis",
        ),
        (
            "property",
            "og:description",
            "Practica gratis para tu examen de licencia clase B con nuestro simulador oficial. Preguntas reales del CONASET actualizadas 2025.",
        ),
        ("property", "og:image", "https://licenciafacil.cl/og-image.jpg"),
        ("property", "og:url", CANONICAL_URL),
        ("property", "og:type", "website"),
        ("name", "twitter:card", "summary_large_image"),
        ("name", "twitter:title", "Simulador Licencia Clase B Chile 2025"),
        (
            "name",
            "twitter:description",
            "Practica con preguntas reales del examen teórico de conducir",
        ),
        ("name", "twitter:image", "https://licenciafacil.cl/twitter-image.jpg"),
    ];
    for (attr, key, content) in meta {
        writeln!(
            tags,
            "<meta {attr}=\"{key}\" content=\"{}\">",
            escape_html(content)
        )
        .expect("write meta tag");
    }
    writeln!(tags, "<link rel=\"canonical\" href=\"{CANONICAL_URL}\">").expect("write canonical");
    writeln!(
        tags,
        "<script type=\"application/ld+json\">{}</script>",
        structured_data()
    )
    .expect("write structured data");
    tags
}

/// Renders the landing page for the given form state.
pub fn render(form: &LeadForm, today: NaiveDate) -> String {
    let head = PageHead {
        title: TITLE,
        description: DESCRIPTION,
        robots: None,
        extra: seo_tags(),
    };

    let mut body = String::new();
    if let Some(notification) = form.notification() {
        writeln!(
            body,
            "<div id=\"toast\" class=\"toast\" role=\"alert\"><strong>{}</strong><p>{}</p></div>",
            escape_html(notification.title),
            escape_html(&notification.description)
        )
        .expect("write toast");
    }

    body.push_str("<main>\n<div class=\"card\">\n");
    body.push_str(
        "<header class=\"hero\"><h1>Simulador Licencia Clase B Chile 2025</h1>\
         <p>Practica con preguntas reales del examen teórico de conducir</p></header>\n",
    );
    body.push_str("<div class=\"content\">\n");
    body.push_str(
        "<p><strong>Prepara tu examen teórico</strong> con el simulador oficial basado en el \
         libro del nuevo conductor y <strong>accede al GPT especializado</strong> de CONASET</p>\n",
    );
    body.push_str("<section class=\"panel\"><h2>¿Por qué nuestro simulador es el mejor?</h2>\n");
    for feature in FEATURES {
        writeln!(body, "<p>{}</p>", escape_html(feature)).expect("write feature");
    }
    body.push_str("</section>\n");

    render_form(&mut body, form, today);

    body.push_str("</div>\n</div>\n");
    body.push_str("<section class=\"panel\"><h2>¿Cómo funciona?</h2>\n");
    for (idx, step) in STEPS.iter().enumerate() {
        writeln!(body, "<p>{}. {}</p>", idx + 1, escape_html(step)).expect("write step");
    }
    body.push_str("</section>\n</main>\n");

    if form.state() == SubmissionState::Success {
        render_success_dialog(&mut body);
    }

    writeln!(body, "<script>{FORM_SCRIPT}</script>").expect("write script");
    document(&head, &body)
}

fn render_form(body: &mut String, form: &LeadForm, today: NaiveDate) {
    body.push_str("<section class=\"form-box\"><h3>Comienza ahora tu preparación</h3>\n");
    writeln!(
        body,
        "<form id=\"lead-form\" method=\"post\" action=\"{SUBMIT_PATH}\">"
    )
    .expect("write form open");

    for spec in FORM_FIELDS {
        let name = spec.field.name();
        let error = form.error(spec.field);
        body.push_str("<div class=\"field\">");
        writeln!(
            body,
            "<label for=\"{name}\">{} *</label>",
            escape_html(spec.label)
        )
        .expect("write label");

        write!(
            body,
            "<input id=\"{name}\" name=\"{name}\" type=\"{}\" value=\"{}\" data-lead-field required",
            spec.input_kind.as_str(),
            escape_html(form.value(spec.field))
        )
        .expect("write input");
        if let Some(placeholder) = spec.placeholder {
            write!(body, " placeholder=\"{}\"", escape_html(placeholder)).expect("placeholder");
        }
        if spec.input_kind == InputKind::Date {
            write!(body, " min=\"{}\"", today.format("%Y-%m-%d")).expect("date min");
        }
        if error.is_some() {
            write!(body, " aria-invalid=\"true\" aria-describedby=\"{name}-error\"")
                .expect("aria attributes");
        }
        body.push_str(">\n");

        if let Some(message) = error {
            writeln!(
                body,
                "<p id=\"{name}-error\" class=\"field-error\">{}</p>",
                escape_html(message)
            )
            .expect("write field error");
        }
        body.push_str("</div>\n");
    }

    let disabled = if form.state().is_busy() { " disabled" } else { "" };
    writeln!(
        body,
        "<button class=\"button\" type=\"submit\"{disabled}>Acceder al Simulador GPT</button>"
    )
    .expect("write submit");
    body.push_str("</form>\n");
    writeln!(
        body,
        "<p class=\"muted\">Al registrarte aceptas nuestra \
         <a href=\"{PRIVACY_PATH}\" target=\"_blank\" rel=\"noopener\"><strong>Política de Privacidad</strong></a></p>"
    )
    .expect("write privacy link");
    body.push_str("</section>\n");
}

fn render_success_dialog(body: &mut String) {
    let url = escape_html(GPT_SIMULATOR_URL);
    body.push_str(
        "<div class=\"overlay\"><div class=\"modal\" role=\"dialog\" aria-modal=\"true\" \
         aria-labelledby=\"success-title\">\n",
    );
    body.push_str("<h2 id=\"success-title\">¡Registro Exitoso!</h2>\n");
    body.push_str(
        "<p>Estás a punto de ser redirigido al Simulador Oficial de Licencia Clase B</p>\n",
    );
    writeln!(
        body,
        "<div class=\"notice\"><strong>Simulador GPT de CONASET</strong>\
         <p class=\"muted\"><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a></p></div>"
    )
    .expect("write simulator link");
    body.push_str(
        "<p class=\"muted\">Si la redirección no funciona, haz clic en el enlace superior</p>\n",
    );
    writeln!(
        body,
        "<a class=\"button success\" href=\"{url}\" autofocus>Ir al Simulador GPT</a>"
    )
    .expect("write continue button");
    body.push_str("</div></div>\n");
}
