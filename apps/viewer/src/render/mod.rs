//! Renderer: projects a normalized résumé into one of three layouts.
//! All themes share the section builders; they differ only in arrangement
//! and in how job/school entries are laid out.

pub mod dom;
pub mod sections;
pub mod theme;

use thiserror::Error;

use crate::models::resume::Resume;
use dom::{Document, Element, Node};
pub use theme::{resolve_theme_id, Theme, DEFAULT_THEME_ID};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("refusing to render link with unsafe URL '{0}'")]
    UnsafeUrl(String),
}

/// Builds the full résumé tree for `theme`.
pub fn render_resume(resume: &Resume, theme: Theme) -> Result<Element, RenderError> {
    let class = if theme.is_two_column() {
        format!("resume theme-{} two-column", theme.id())
    } else {
        format!("resume theme-{}", theme.id())
    };
    let wrapper = Element::new("div")
        .class(class)
        .child(sections::header(resume)?);

    if theme.is_two_column() {
        let aside = sections::skills(resume, theme)
            .map(|skills| Element::new("aside").class("sidebar").child(skills));
        let main = Element::new("main").class("content").children(
            [
                sections::summary(resume),
                sections::experience(resume, theme),
                sections::education(resume, theme),
                sections::certifications(resume),
            ]
            .into_iter()
            .flatten()
            .map(Node::from),
        );
        let columns = Element::new("div")
            .class("columns")
            .children(aside.into_iter().map(Node::from))
            .child(main);
        return Ok(wrapper.child(columns));
    }

    Ok(wrapper.children(
        [
            sections::summary(resume),
            sections::skills(resume, theme),
            sections::experience(resume, theme),
            sections::education(resume, theme),
            sections::certifications(resume),
        ]
        .into_iter()
        .flatten()
        .map(Node::from),
    ))
}

/// Renders into the document's root, replacing whatever was there.
///
/// On error the document is left untouched.
pub fn render_into(
    document: &mut Document,
    resume: &Resume,
    theme: Theme,
) -> Result<(), RenderError> {
    let tree = render_resume(resume, theme)?;
    document.replace_root_children(vec![tree.into()]);
    Ok(())
}
