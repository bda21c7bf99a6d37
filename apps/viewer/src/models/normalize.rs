//! Normalization pass from an untyped parsed document into a [`Resume`].
//!
//! Runs once per load. Wrong-shaped values are dropped here so that the
//! renderer only ever sees `Option`s and lists.

use serde_json::{Map, Value};

use crate::models::resume::{Certification, Education, Experience, Link, Resume, SkillGroup};

/// Converts a parsed document into a [`Resume`].
///
/// Returns `None` when the top-level value is not a mapping.
pub fn normalize_resume(doc: &Value) -> Option<Resume> {
    let obj = doc.as_object()?;

    Some(Resume {
        name: text(obj, "name"),
        title: text(obj, "title"),
        location: text(obj, "location"),
        phone: text(obj, "phone"),
        email: text(obj, "email"),
        links: objects(obj, "links").filter_map(link).collect(),
        summary: text(obj, "summary"),
        skills: objects(obj, "skills").filter_map(skill_group).collect(),
        experience: objects(obj, "experience").filter_map(experience).collect(),
        education: objects(obj, "education").filter_map(education).collect(),
        certifications: objects(obj, "certifications")
            .filter_map(certification)
            .collect(),
        theme: text(obj, "theme"),
    })
}

/// Reads a scalar slot as trimmed, non-empty text.
fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn objects<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .into_iter()
        .flatten()
        .filter_map(|v| v.as_object())
}

fn strings(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

fn link(obj: &Map<String, Value>) -> Option<Link> {
    Some(Link {
        url: text(obj, "url")?,
        label: text(obj, "label"),
    })
}

fn skill_group(obj: &Map<String, Value>) -> Option<SkillGroup> {
    let group = SkillGroup {
        category: text(obj, "category"),
        items: strings(obj, "items"),
    };
    (group != SkillGroup::default()).then_some(group)
}

fn experience(obj: &Map<String, Value>) -> Option<Experience> {
    let job = Experience {
        role: text(obj, "role"),
        company: text(obj, "company"),
        start: text(obj, "start"),
        end: text(obj, "end"),
        location: text(obj, "location"),
        highlights: strings(obj, "highlights"),
    };
    (job != Experience::default()).then_some(job)
}

fn education(obj: &Map<String, Value>) -> Option<Education> {
    let entry = Education {
        degree: text(obj, "degree"),
        school: text(obj, "school"),
        year: text(obj, "year"),
        location: text(obj, "location"),
        note: text(obj, "note"),
    };
    (entry != Education::default()).then_some(entry)
}

fn certification(obj: &Map<String, Value>) -> Option<Certification> {
    let cert = Certification {
        name: text(obj, "name"),
        issuer: text(obj, "issuer"),
        year: text(obj, "year"),
    };
    (cert != Certification::default()).then_some(cert)
}
