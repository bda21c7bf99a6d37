use serde::{Deserialize, Serialize};

/// A normalized résumé. Every field is optional; empty lists mean "absent".
///
/// Built once by [`crate::models::normalize::normalize_resume`]. Renderers read
/// it as-is and never re-validate field shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub links: Vec<Link>,
    pub summary: Option<String>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub label: Option<String>,
}

impl Link {
    /// Visible text: the label when given, otherwise the URL itself.
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub year: Option<String>,
    pub location: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub year: Option<String>,
}

impl Resume {
    /// Skill items across all groups, deduplicated by value in first-seen order.
    pub fn flattened_skills(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in self.skills.iter().flat_map(|g| g.items.iter()) {
            if !seen.contains(&item.as_str()) {
                seen.push(item);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(items: &[&str]) -> SkillGroup {
        SkillGroup {
            category: None,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_flattened_skills_dedups_across_groups() {
        let resume = Resume {
            skills: vec![group(&["Go", "Go", "Rust"]), group(&["Rust"])],
            ..Default::default()
        };
        assert_eq!(resume.flattened_skills(), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_flattened_skills_keeps_first_seen_order() {
        let resume = Resume {
            skills: vec![group(&["SQL", "Python"]), group(&["Docker", "SQL"])],
            ..Default::default()
        };
        assert_eq!(resume.flattened_skills(), vec!["SQL", "Python", "Docker"]);
    }

    #[test]
    fn test_flattened_skills_is_case_sensitive() {
        let resume = Resume {
            skills: vec![group(&["go", "Go"])],
            ..Default::default()
        };
        assert_eq!(resume.flattened_skills().len(), 2);
    }

    #[test]
    fn test_link_text_falls_back_to_url() {
        let link = Link {
            url: "https://example.com".to_string(),
            label: None,
        };
        assert_eq!(link.text(), "https://example.com");
    }
}
