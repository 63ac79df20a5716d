//! Document renderer: contact block and record in, one self-contained HTML page out.
//!
//! Pure and deterministic: no clock, no randomness, no I/O. Sections always come
//! out in the same order (heading, summary, skills, education, employment,
//! references) and entries keep their input order.
//!
//! Blank bullets and blank skills are dropped rather than rendered as empty
//! `<li>`s. The achievements block only appears when something survives that
//! filter, and the references section only when `compact_references` is
//! non-empty.

use std::fmt::Write;

use crate::models::resume::{
    is_blank, ContactInfo, EducationEntry, ExperienceEntry, ReferenceEntry, ResumeRecord,
};
use crate::render::page::RESUME_PAGE;

const STYLESHEET: &str = "\
body { font-family: Arial, Helvetica, sans-serif; font-size: 10.5pt; color: #222; margin: 0; line-height: 1.35; }
h1 { font-size: 20pt; margin: 0 0 2pt 0; color: #111; }
h2 { font-size: 12pt; text-transform: uppercase; letter-spacing: 0.5pt; border-bottom: 1px solid #999; margin: 12pt 0 4pt 0; padding-bottom: 1pt; }
.contact { margin: 0; color: #444; }
.contact span + span:before { content: \" | \"; }
.section p { margin: 0; }
.skills { columns: 3; margin: 0; padding-left: 14pt; }
.entry { margin-bottom: 6pt; page-break-inside: avoid; }
.entry-head { overflow: hidden; }
.entry-head .dates { float: right; color: #555; }
.entry-sub { font-style: italic; color: #444; }
.entry ul { margin: 2pt 0 0 0; padding-left: 14pt; }
.achievements-title { font-weight: bold; margin: 3pt 0 0 0; }
";

/// Renders the full document.
pub fn render_document(contact: &ContactInfo, record: &ResumeRecord) -> String {
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&contact.name));
    let _ = writeln!(out, "<style>\n{}\n{}</style>", RESUME_PAGE.css_rule(), STYLESHEET);
    out.push_str("</head>\n<body>\n");

    push_heading(&mut out, contact);
    push_summary(&mut out, &record.profile_summary);
    push_skills(&mut out, &record.key_skills);
    push_education(&mut out, &record.education);
    push_experience(&mut out, &record.work_experience);
    push_references(&mut out, &record.compact_references());

    out.push_str("</body>\n</html>\n");
    out
}

fn push_heading(out: &mut String, contact: &ContactInfo) {
    out.push_str("<header class=\"heading\">\n");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&contact.name));
    let _ = writeln!(
        out,
        "<p class=\"contact\"><span class=\"phone\">{}</span><span class=\"email\">{}</span></p>",
        escape_html(&contact.phone),
        escape_html(&contact.email)
    );
    let _ = writeln!(
        out,
        "<p class=\"contact address\">{}</p>",
        escape_multiline(&contact.address)
    );
    out.push_str("</header>\n");
}

fn push_summary(out: &mut String, summary: &str) {
    out.push_str("<section class=\"section summary\">\n<h2>Profile Summary</h2>\n");
    let _ = writeln!(out, "<p>{}</p>", escape_multiline(summary));
    out.push_str("</section>\n");
}

fn push_skills(out: &mut String, skills: &[String]) {
    out.push_str("<section class=\"section key-skills\">\n<h2>Key Skills</h2>\n");
    push_list(out, "skills", skills);
    out.push_str("</section>\n");
}

fn push_education(out: &mut String, education: &[EducationEntry]) {
    out.push_str("<section class=\"section education\">\n<h2>Education</h2>\n");
    for entry in education {
        out.push_str("<div class=\"entry\">\n");
        push_entry_head(out, &entry.course, &entry.from_date, &entry.to_date);
        let mut sub = escape_html(&entry.institute);
        if let Some(location) = entry.location.as_deref().filter(|l| !is_blank(l)) {
            let _ = write!(sub, ", {}", escape_html(location));
        }
        let _ = writeln!(out, "<div class=\"entry-sub\">{sub}</div>");
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn push_experience(out: &mut String, experience: &[ExperienceEntry]) {
    out.push_str("<section class=\"section experience\">\n<h2>Employment History</h2>\n");
    for entry in experience {
        out.push_str("<div class=\"entry\">\n");
        push_entry_head(out, &entry.position, &entry.from_date, &entry.to_date);
        let _ = writeln!(
            out,
            "<div class=\"entry-sub\">{}</div>",
            join_non_blank(&[entry.workplace.as_str(), entry.location.as_str()], ", ")
        );
        push_list(out, "duties", &entry.description);
        if entry.achievements.iter().any(|a| !is_blank(a)) {
            out.push_str("<div class=\"achievements\">\n");
            out.push_str("<p class=\"achievements-title\">Achievements</p>\n");
            push_list(out, "achievement-list", &entry.achievements);
            out.push_str("</div>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn push_references(out: &mut String, references: &[ReferenceEntry]) {
    if references.is_empty() {
        return;
    }
    out.push_str("<section class=\"section references\">\n<h2>References</h2>\n");
    for reference in references {
        out.push_str("<div class=\"entry\">\n");
        let _ = writeln!(out, "<strong>{}</strong>", escape_html(&reference.name));
        let _ = writeln!(
            out,
            "<div class=\"entry-sub\">{}</div>",
            escape_html(&reference.position)
        );
        let _ = writeln!(out, "<div>{}</div>", escape_html(&reference.contact));
        out.push_str("</div>\n");
    }
    out.push_str("</section>\n");
}

fn push_entry_head(out: &mut String, title: &str, from: &str, to: &str) {
    let _ = writeln!(
        out,
        "<div class=\"entry-head\"><strong>{}</strong><span class=\"dates\">{}</span></div>",
        escape_html(title),
        join_non_blank(&[from, to], " &ndash; ")
    );
}

/// One `<li>` per non-blank item; no list at all if nothing survives.
fn push_list(out: &mut String, class: &str, items: &[String]) {
    let mut kept = items.iter().filter(|item| !is_blank(item)).peekable();
    if kept.peek().is_none() {
        return;
    }
    let _ = writeln!(out, "<ul class=\"{class}\">");
    for item in kept {
        let _ = writeln!(out, "<li>{}</li>", escape_html(item.trim()));
    }
    out.push_str("</ul>\n");
}

/// Escapes each non-blank part and joins them with `sep` (which is emitted raw).
fn join_non_blank(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !is_blank(p))
        .map(|p| escape_html(p.trim()))
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes and turns line breaks into `<br>`.
fn escape_multiline(s: &str) -> String {
    s.trim()
        .lines()
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}
