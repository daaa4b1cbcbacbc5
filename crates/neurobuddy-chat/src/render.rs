//! Pure renderers from conversation turns to displayable content.
//!
//! Rendering performs no markdown parsing beyond a best-effort bold
//! substitution (`**x**` becomes emphasized `x`), applied before
//! line-splitting. Renderers hold no state and are idempotent.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::conversation::{ConversationTurn, Role};

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

fn escape_html_text(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}

fn escape_html_attr(text: &str) -> String {
    text.chars()
        .fold(String::with_capacity(text.len()), |mut escaped, ch| {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(ch),
            }
            escaped
        })
}

/// Render one turn as an HTML fragment: each line followed by a line
/// break, then a numbered list of source links when present.
pub fn render_turn_html(turn: &ConversationTurn) -> String {
    let escaped = escape_html_text(&turn.text);
    let formatted = BOLD_RE.replace_all(&escaped, "<strong>$1</strong>");

    let mut html = String::new();
    for line in formatted.split('\n') {
        html.push_str(line);
        html.push_str("<br />");
    }

    if !turn.sources.is_empty() {
        html.push_str("<ol>");
        for source in &turn.sources {
            let _ = write!(
                html,
                "<li><a href=\"{}\">{}</a></li>",
                escape_html_attr(&source.uri),
                escape_html_text(&source.title)
            );
        }
        html.push_str("</ol>");
    }

    html
}

/// Render one turn as plain terminal text, with a numbered source list.
pub fn render_turn_text(turn: &ConversationTurn) -> String {
    let mut out = String::new();
    for line in turn.text.split('\n') {
        out.push_str(line);
        out.push('\n');
    }

    if !turn.sources.is_empty() {
        out.push_str("Fuentes:\n");
        for (index, source) in turn.sources.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {} <{}>", index + 1, source.title, source.uri);
        }
    }

    out
}

/// Render the whole conversation as a standalone HTML document.
///
/// `generated_at` is caller-supplied so the function stays pure.
pub fn render_transcript_html(turns: &[ConversationTurn], generated_at: &str) -> String {
    let mut html = String::from(
        "<!doctype html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>NeuroBuddy</title>\n</head>\n<body>\n\
         <h1>NeuroBuddy: Asistente de Pares Craneales</h1>\n",
    );
    let _ = writeln!(html, "<p>Generado: {}</p>", escape_html_text(generated_at));

    for turn in turns {
        let speaker = match turn.role {
            Role::User => "Tú",
            Role::Model => "NeuroBuddy",
        };
        let class = match turn.role {
            Role::User => "user",
            Role::Model => "model",
        };
        let _ = writeln!(
            html,
            "<section class=\"{class}\">\n<h2>{speaker}</h2>\n<p>{}</p>\n</section>",
            render_turn_html(turn)
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use crate::conversation::Source;

    use super::*;

    fn source(uri: &str, title: &str) -> Source {
        Source {
            uri: uri.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn lines_are_joined_with_breaks() {
        let turn = ConversationTurn::model("uno\ndos", Vec::new());
        assert_eq!(render_turn_html(&turn), "uno<br />dos<br />");
    }

    #[test]
    fn bold_markers_become_strong() {
        let turn = ConversationTurn::model("el **nervio vago** es mixto", Vec::new());
        assert_eq!(
            render_turn_html(&turn),
            "el <strong>nervio vago</strong> es mixto<br />"
        );
    }

    #[test]
    fn unbalanced_bold_markers_are_left_alone() {
        let turn = ConversationTurn::model("**sin cierre", Vec::new());
        assert_eq!(render_turn_html(&turn), "**sin cierre<br />");
    }

    #[test]
    fn text_is_html_escaped() {
        let turn = ConversationTurn::model("1 < 2 & <script>alert()</script>", Vec::new());
        let html = render_turn_html(&turn);
        assert!(html.contains("1 &lt; 2 &amp; &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn sources_render_as_numbered_links_in_stored_order() {
        let turn = ConversationTurn::model(
            "respuesta",
            vec![
                source("https://a.example", "Primera"),
                source("https://b.example", "Segunda"),
            ],
        );
        let html = render_turn_html(&turn);
        assert!(html.contains(
            "<ol><li><a href=\"https://a.example\">Primera</a></li>\
             <li><a href=\"https://b.example\">Segunda</a></li></ol>"
        ));
    }

    #[test]
    fn source_attributes_are_escaped() {
        let turn = ConversationTurn::model(
            "x",
            vec![source("https://a.example/?q=\"1\"&r=2", "A & B")],
        );
        let html = render_turn_html(&turn);
        assert!(html.contains("href=\"https://a.example/?q=&quot;1&quot;&amp;r=2\""));
        assert!(html.contains(">A &amp; B</a>"));
    }

    #[test]
    fn turn_without_sources_has_no_list() {
        let turn = ConversationTurn::user("hola");
        assert!(!render_turn_html(&turn).contains("<ol>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let turn = ConversationTurn::model(
            "**a**\nb",
            vec![source("https://a.example", "T")],
        );
        assert_eq!(render_turn_html(&turn), render_turn_html(&turn));
        assert_eq!(render_turn_text(&turn), render_turn_text(&turn));
    }

    #[test]
    fn terminal_rendering_numbers_sources() {
        let turn = ConversationTurn::model(
            "respuesta",
            vec![
                source("https://a.example", "Primera"),
                source("https://b.example", "Segunda"),
            ],
        );
        let text = render_turn_text(&turn);
        assert!(text.contains("Fuentes:"));
        assert!(text.contains("[1] Primera <https://a.example>"));
        assert!(text.contains("[2] Segunda <https://b.example>"));
    }

    #[test]
    fn transcript_wraps_turns_with_speakers() {
        let turns = vec![
            ConversationTurn::user("¿Qué es el vago?"),
            ConversationTurn::model("El décimo par craneal.", Vec::new()),
        ];
        let html = render_transcript_html(&turns, "2026-08-05 12:00:00");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("Generado: 2026-08-05 12:00:00"));
        assert!(html.contains("<h2>Tú</h2>"));
        assert!(html.contains("<h2>NeuroBuddy</h2>"));
        assert!(html.contains("¿Qué es el vago?"));
        assert!(html.ends_with("</body>\n</html>\n"));

        assert_eq!(html, render_transcript_html(&turns, "2026-08-05 12:00:00"));
    }
}
