//! Section builders shared by every theme.
//!
//! Each builder returns `None` when its backing data is absent, so callers
//! never emit an empty heading.

use crate::models::resume::{Certification, Education, Experience, Resume};
use crate::render::dom::{Element, Node};
use crate::render::theme::Theme;
use crate::render::RenderError;

pub const NAME_PLACEHOLDER: &str = "Your Name";

const CONTACT_SEP: &str = " | ";
const TITLE_SEP: &str = " — ";
const META_SEP: &str = " · ";
const RANGE_SEP: &str = " – ";
const SKILL_SEP: &str = ", ";

/// URL schemes that would run script when clicked.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// Joins the present, non-empty parts with `sep`. `None` when nothing is left.
pub fn join_present<'a>(
    parts: impl IntoIterator<Item = Option<&'a str>>,
    sep: &str,
) -> Option<String> {
    let parts: Vec<&str> = parts.into_iter().flatten().filter(|s| !s.is_empty()).collect();
    (!parts.is_empty()).then(|| parts.join(sep))
}

fn section(class: &str, heading: &str) -> Element {
    Element::new("section")
        .class(format!("section {class}"))
        .child(Element::new("h2").text(heading))
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

pub fn header(resume: &Resume) -> Result<Element, RenderError> {
    let name = resume.name.as_deref().unwrap_or(NAME_PLACEHOLDER);
    let mut header = Element::new("header")
        .class("header")
        .child(Element::new("h1").class("name").text(name));

    if let Some(title) = &resume.title {
        header = header.child(Element::new("p").class("title").text(title.clone()));
    }
    if let Some(contact) = contact_line(resume)? {
        header = header.child(contact);
    }
    Ok(header)
}

/// Location, phone, email, then extra links, with a separator between
/// present items only.
pub fn contact_line(resume: &Resume) -> Result<Option<Element>, RenderError> {
    let mut items: Vec<Node> = Vec::new();

    if let Some(location) = &resume.location {
        items.push(
            Element::new("span")
                .class("location")
                .text(location.clone())
                .into(),
        );
    }
    if let Some(phone) = &resume.phone {
        let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        items.push(
            Element::new("a")
                .class("phone")
                .attr("href", format!("tel:{digits}"))
                .text(phone.clone())
                .into(),
        );
    }
    if let Some(email) = &resume.email {
        items.push(
            Element::new("a")
                .class("email")
                .attr("href", format!("mailto:{email}"))
                .text(email.clone())
                .into(),
        );
    }
    for link in &resume.links {
        items.push(
            Element::new("a")
                .class("link")
                .attr("href", checked_href(&link.url)?)
                .attr("rel", "noopener")
                .text(link.text())
                .into(),
        );
    }

    if items.is_empty() {
        return Ok(None);
    }

    let mut line = Element::new("p").class("contact");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            line = line.child(Element::new("span").class("sep").text(CONTACT_SEP));
        }
        line = line.child(item);
    }
    Ok(Some(line))
}

fn checked_href(url: &str) -> Result<&str, RenderError> {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    if let Some((scheme, _)) = cleaned.split_once(':') {
        let scheme = scheme.to_ascii_lowercase();
        if !scheme.contains(['/', '?', '#']) && BLOCKED_SCHEMES.contains(&scheme.as_str()) {
            return Err(RenderError::UnsafeUrl(url.to_string()));
        }
    }
    Ok(url)
}

// ────────────────────────────────────────────────────────────────────────────
// Body sections
// ────────────────────────────────────────────────────────────────────────────

pub fn summary(resume: &Resume) -> Option<Element> {
    let text = resume.summary.as_deref()?;
    Some(section("summary", "Summary").child(Element::new("p").text(text)))
}

/// Comma-joined list for single-column themes, one tag per item for the
/// two-column theme. Both use the deduplicated flattened list.
pub fn skills(resume: &Resume, theme: Theme) -> Option<Element> {
    let items = resume.flattened_skills();
    if items.is_empty() {
        return None;
    }

    let body = if theme.is_two_column() {
        Element::new("ul").class("tags").children(
            items
                .iter()
                .map(|item| Node::from(Element::new("li").class("tag").text(*item))),
        )
    } else {
        Element::new("p")
            .class("skills-list")
            .text(items.join(SKILL_SEP))
    };
    Some(section("skills", "Skills").child(body))
}

pub fn experience(resume: &Resume, theme: Theme) -> Option<Element> {
    if resume.experience.is_empty() {
        return None;
    }
    Some(
        section("experience", "Experience")
            .children(resume.experience.iter().map(|job| Node::from(job_entry(job, theme)))),
    )
}

fn job_entry(job: &Experience, theme: Theme) -> Element {
    let head = join_present([job.role.as_deref(), job.company.as_deref()], TITLE_SEP);
    let dates = join_present([job.start.as_deref(), job.end.as_deref()], RANGE_SEP);
    let meta = join_present([dates.as_deref(), job.location.as_deref()], META_SEP);

    let mut entry = entry_lines(Element::new("div").class("job"), "job", head, meta, theme);

    if !job.highlights.is_empty() {
        entry = entry.child(
            Element::new("ul").class("highlights").children(
                job.highlights
                    .iter()
                    .map(|h| Node::from(Element::new("li").text(h.clone()))),
            ),
        );
    }
    entry
}

pub fn education(resume: &Resume, theme: Theme) -> Option<Element> {
    if resume.education.is_empty() {
        return None;
    }
    Some(
        section("education", "Education")
            .children(resume.education.iter().map(|e| Node::from(school_entry(e, theme)))),
    )
}

fn school_entry(school: &Education, theme: Theme) -> Element {
    let head = join_present([school.degree.as_deref(), school.school.as_deref()], TITLE_SEP);
    let meta = join_present([school.year.as_deref(), school.location.as_deref()], META_SEP);

    let mut entry = entry_lines(Element::new("div").class("school"), "school", head, meta, theme);
    if let Some(note) = &school.note {
        entry = entry.child(Element::new("p").class("note").text(note.clone()));
    }
    entry
}

/// Heading and meta lines for a job or school. Inline themes fold both onto
/// one `<prefix>-line`.
fn entry_lines(
    entry: Element,
    prefix: &str,
    head: Option<String>,
    meta: Option<String>,
    theme: Theme,
) -> Element {
    if theme.inline_entries() {
        return match join_present([head.as_deref(), meta.as_deref()], META_SEP) {
            Some(line) => entry.child(
                Element::new("div")
                    .class(format!("{prefix}-line"))
                    .text(line),
            ),
            None => entry,
        };
    }

    let mut entry = entry;
    if let Some(head) = head {
        entry = entry.child(Element::new("div").class(format!("{prefix}-head")).text(head));
    }
    if let Some(meta) = meta {
        entry = entry.child(Element::new("div").class(format!("{prefix}-meta")).text(meta));
    }
    entry
}

pub fn certifications(resume: &Resume) -> Option<Element> {
    if resume.certifications.is_empty() {
        return None;
    }
    Some(
        section("certifications", "Certifications").child(
            Element::new("ul")
                .class("certs")
                .children(resume.certifications.iter().filter_map(cert_entry)),
        ),
    )
}

fn cert_entry(cert: &Certification) -> Option<Node> {
    let detail = join_present([cert.issuer.as_deref(), cert.year.as_deref()], META_SEP);
    let line = join_present([cert.name.as_deref(), detail.as_deref()], TITLE_SEP)?;
    Some(Element::new("li").class("cert").text(line).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Link, SkillGroup};

    fn job(role: Option<&str>, company: Option<&str>) -> Experience {
        Experience {
            role: role.map(String::from),
            company: company.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_join_present_skips_missing_and_empty() {
        assert_eq!(
            join_present([Some("a"), None, Some(""), Some("b")], ", ").as_deref(),
            Some("a, b")
        );
        assert_eq!(join_present([None, None], ", "), None);
    }

    #[test]
    fn test_header_placeholder_name() {
        let h = header(&Resume::default()).unwrap();
        assert_eq!(h.find_by_class("name").unwrap().text_content(), NAME_PLACEHOLDER);
        assert!(h.find_by_class("title").is_none());
        assert!(h.find_by_class("contact").is_none());
    }

    #[test]
    fn test_contact_line_separators_between_present_items_only() {
        let resume = Resume {
            location: Some("Berlin".into()),
            email: Some("a@x.com".into()),
            ..Default::default()
        };
        let line = contact_line(&resume).unwrap().unwrap();
        assert_eq!(line.text_content(), "Berlin | a@x.com");

        let mut seps = Vec::new();
        line.find_all(&|e| e.has_class("sep"), &mut seps);
        assert_eq!(seps.len(), 1);
    }

    #[test]
    fn test_phone_uri_strips_whitespace() {
        let resume = Resume {
            phone: Some("+1 555 010 9999".into()),
            ..Default::default()
        };
        let line = contact_line(&resume).unwrap().unwrap();
        let a = line.find_by_class("phone").unwrap();
        assert_eq!(a.get_attr("href"), Some("tel:+15550109999"));
        assert_eq!(a.text_content(), "+1 555 010 9999");
    }

    #[test]
    fn test_links_follow_email_and_use_label() {
        let resume = Resume {
            email: Some("a@x.com".into()),
            links: vec![
                Link {
                    url: "https://github.com/a".into(),
                    label: Some("GitHub".into()),
                },
                Link {
                    url: "https://a.dev".into(),
                    label: None,
                },
            ],
            ..Default::default()
        };
        let line = contact_line(&resume).unwrap().unwrap();
        assert_eq!(line.text_content(), "a@x.com | GitHub | https://a.dev");
        let link = line.find_by_class("link").unwrap();
        assert_eq!(link.get_attr("href"), Some("https://github.com/a"));
    }

    #[test]
    fn test_script_links_are_rejected() {
        let urls = [
            "javascript:alert(1)",
            " JavaScript:alert(1)",
            "java\tscript:x",
            "data:text/html,x",
        ];
        for url in urls {
            let resume = Resume {
                links: vec![Link {
                    url: url.into(),
                    label: None,
                }],
                ..Default::default()
            };
            assert!(
                matches!(contact_line(&resume), Err(RenderError::UnsafeUrl(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn test_relative_and_mailto_links_allowed() {
        for url in ["/cv.pdf", "mailto:a@x.com", "https://x.dev/a:b", "?q=data:x"] {
            assert!(checked_href(url).is_ok(), "{url}");
        }
    }

    #[test]
    fn test_skills_single_column_joined() {
        let resume = Resume {
            skills: vec![
                SkillGroup {
                    category: Some("Lang".into()),
                    items: vec!["Go".into(), "Go".into(), "Rust".into()],
                },
                SkillGroup {
                    category: None,
                    items: vec!["Rust".into()],
                },
            ],
            ..Default::default()
        };
        let s = skills(&resume, Theme::Classic).unwrap();
        assert_eq!(s.find_by_class("skills-list").unwrap().text_content(), "Go, Rust");
        assert!(s.find_by_class("tags").is_none());
    }

    #[test]
    fn test_skills_two_column_tags() {
        let resume = Resume {
            skills: vec![SkillGroup {
                category: None,
                items: vec!["Go".into(), "Rust".into(), "Go".into()],
            }],
            ..Default::default()
        };
        let s = skills(&resume, Theme::Sidebar).unwrap();
        let mut tags = Vec::new();
        s.find_all(&|e| e.has_class("tag"), &mut tags);
        let texts: Vec<String> = tags.iter().map(|t| t.text_content()).collect();
        assert_eq!(texts, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_skills_without_items_omitted() {
        let resume = Resume {
            skills: vec![SkillGroup {
                category: Some("Empty".into()),
                items: vec![],
            }],
            ..Default::default()
        };
        assert!(skills(&resume, Theme::Classic).is_none());
    }

    #[test]
    fn test_job_lines_classic() {
        let mut j = job(Some("Engineer"), Some("Acme"));
        j.start = Some("2020".into());
        j.end = Some("2023".into());
        j.location = Some("Remote".into());
        j.highlights = vec!["Shipped 3 services".into()];

        let e = job_entry(&j, Theme::Classic);
        assert_eq!(e.find_by_class("job-head").unwrap().text_content(), "Engineer — Acme");
        assert_eq!(
            e.find_by_class("job-meta").unwrap().text_content(),
            "2020 – 2023 · Remote"
        );
        assert_eq!(e.find_by_class("highlights").unwrap().children.len(), 1);
    }

    #[test]
    fn test_job_line_compact() {
        let mut j = job(Some("Engineer"), None);
        j.start = Some("2020".into());
        let e = job_entry(&j, Theme::Compact);
        assert_eq!(e.find_by_class("job-line").unwrap().text_content(), "Engineer · 2020");
        assert!(e.find_by_class("job-head").is_none());
    }

    #[test]
    fn test_job_without_head_still_renders() {
        let mut j = job(None, None);
        j.location = Some("Lisbon".into());
        let e = job_entry(&j, Theme::Classic);
        assert!(e.find_by_class("job-head").is_none());
        assert_eq!(e.find_by_class("job-meta").unwrap().text_content(), "Lisbon");
        assert!(e.find_by_class("highlights").is_none());
    }

    #[test]
    fn test_school_with_note() {
        let school = Education {
            degree: Some("BSc".into()),
            school: Some("MIT".into()),
            year: Some("2019".into()),
            note: Some("Magna cum laude".into()),
            ..Default::default()
        };
        let e = school_entry(&school, Theme::Classic);
        assert_eq!(e.find_by_class("school-head").unwrap().text_content(), "BSc — MIT");
        assert_eq!(e.find_by_class("school-meta").unwrap().text_content(), "2019");
        assert_eq!(e.find_by_class("note").unwrap().text_content(), "Magna cum laude");
    }

    #[test]
    fn test_school_line_compact() {
        let school = Education {
            degree: Some("BSc".into()),
            school: Some("MIT".into()),
            year: Some("2019".into()),
            note: Some("Magna cum laude".into()),
            ..Default::default()
        };
        let e = school_entry(&school, Theme::Compact);
        assert_eq!(e.elements().count(), 2);
        assert_eq!(
            e.find_by_class("school-line").unwrap().text_content(),
            "BSc — MIT · 2019"
        );
        assert!(e.find_by_class("school-head").is_none());
        assert!(e.find_by_class("school-meta").is_none());
        assert_eq!(e.find_by_class("note").unwrap().text_content(), "Magna cum laude");
    }

    #[test]
    fn test_certification_line() {
        let resume = Resume {
            certifications: vec![
                Certification {
                    name: Some("CKA".into()),
                    issuer: Some("CNCF".into()),
                    year: Some("2022".into()),
                },
                Certification {
                    name: None,
                    issuer: Some("AWS".into()),
                    year: None,
                },
            ],
            ..Default::default()
        };
        let s = certifications(&resume).unwrap();
        let mut items = Vec::new();
        s.find_all(&|e| e.has_class("cert"), &mut items);
        let texts: Vec<String> = items.iter().map(|t| t.text_content()).collect();
        assert_eq!(texts, vec!["CKA — CNCF · 2022", "AWS"]);
    }

    #[test]
    fn test_empty_sections_omitted() {
        let resume = Resume::default();
        assert!(summary(&resume).is_none());
        assert!(skills(&resume, Theme::Classic).is_none());
        assert!(experience(&resume, Theme::Classic).is_none());
        assert!(education(&resume, Theme::Classic).is_none());
        assert!(certifications(&resume).is_none());
    }
}
