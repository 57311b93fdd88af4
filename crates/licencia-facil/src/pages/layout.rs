use std::fmt::Write as _;

const STYLES: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Roboto,sans-serif;color:#2d3748;background:linear-gradient(#ebf8ff,#edf2f7);min-height:100vh}
main{max-width:42rem;margin:0 auto;padding:2.5rem 1rem;text-align:center}
.card{background:#fff;border-radius:1rem;box-shadow:0 20px 25px -5px rgba(0,0,0,.1);overflow:hidden}
.hero{background:#2b6cb0;color:#fff;padding:1.5rem}
.hero h1{margin:0 0 .5rem}
.content{padding:2rem}
.panel{background:#ebf8ff;border:1px solid #bee3f8;border-radius:.75rem;padding:1.5rem;margin-bottom:2rem;text-align:left}
.form-box{border:1px solid #bee3f8;border-radius:.75rem;padding:2rem;box-shadow:0 4px 6px rgba(0,0,0,.1)}
.field{margin-bottom:1rem;text-align:left}
.field label{display:block;font-weight:600;margin-bottom:.25rem}
.field input{width:100%;padding:.75rem;font-size:1.1rem;border:1px solid #cbd5e0;border-radius:.375rem}
.field input[aria-invalid=true]{border-color:#e53e3e}
.field-error{color:#e53e3e;font-size:.875rem;margin:.25rem 0 0}
.button{display:inline-block;width:100%;height:60px;font-size:1.25rem;color:#fff;background:#3182ce;border:0;border-radius:.375rem;cursor:pointer;text-decoration:none;line-height:60px;margin-top:1.5rem}
.button:disabled{opacity:.6;cursor:progress}
.button.success{background:#38a169;width:auto;padding:0 2rem}
.toast{position:fixed;top:1rem;left:50%;transform:translateX(-50%);background:#e53e3e;color:#fff;padding:1rem 1.5rem;border-radius:.5rem;box-shadow:0 10px 15px rgba(0,0,0,.2)}
.toast p{margin:.25rem 0 0}
.overlay{position:fixed;inset:0;background:rgba(0,0,0,.6);display:flex;align-items:center;justify-content:center;padding:1rem}
.modal{background:#fff;border-radius:1rem;padding:1.5rem;max-width:28rem;text-align:center}
.modal h2{color:#2f855a}
.notice{background:#f0fff4;border:1px solid #c6f6d5;border-radius:.5rem;padding:1rem;word-break:break-all}
.muted{color:#718096;font-size:.875rem}
.policy{text-align:left;max-width:56rem}
.policy h1{color:#2b6cb0}
a{color:#3182ce}
"#;

/// Document-level metadata for a rendered page.
pub(crate) struct PageHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) robots: Option<&'a str>,
    /// Pre-rendered tags appended to `<head>`.
    pub(crate) extra: String,
}

pub(crate) fn document(head: &PageHead<'_>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLES.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    writeln!(html, "<title>{}</title>", escape_html(head.title)).expect("write title");
    writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(head.description)
    )
    .expect("write description");
    if let Some(robots) = head.robots {
        writeln!(html, "<meta name=\"robots\" content=\"{}\">", escape_html(robots))
            .expect("write robots");
    }
    html.push_str(&head.extra);
    writeln!(html, "<style>{STYLES}</style>").expect("write styles");
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
