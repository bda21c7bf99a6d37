//! Minimal owned DOM: element/text nodes, the page document with its fixed
//! `#resume` container and `#no-data` notice, and HTML serialization.
#![allow(dead_code)]

use std::fmt::Write;

pub const ROOT_ID: &str = "resume";
pub const NOTICE_ID: &str = "no-data";
pub const NOTICE_TEXT: &str =
    "No résumé data found. Add resume.json or resume.yaml next to this page.";

const VOID_TAGS: &[&str] = &["br", "hr", "img", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(e) => e.text_content(),
            Node::Text(t) => t.clone(),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(e) => e.write_html(out),
            Node::Text(t) => out.push_str(&escape(t)),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::text(s))
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(n, _)| *n != name);
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search over this element and its descendants.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.elements().find_map(|e| e.find(pred))
    }

    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for e in self.elements() {
            e.find_all(pred, out);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|e| e.tag == tag)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// The rendered page: a fixed résumé container plus the "no data" notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    title: String,
    root: Element,
    notice: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            title: "Résumé".to_string(),
            root: Element::new("div").attr("id", ROOT_ID),
            notice: Element::new("div")
                .attr("id", NOTICE_ID)
                .class("notice")
                .attr("hidden", "")
                .text(NOTICE_TEXT),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Drops everything under the root and installs `nodes` in its place.
    pub fn replace_root_children(&mut self, nodes: Vec<Node>) {
        self.root.children = nodes;
    }

    pub fn clear_root(&mut self) {
        self.root.children.clear();
    }

    pub fn show_notice(&mut self) {
        self.notice.remove_attr("hidden");
    }

    pub fn hide_notice(&mut self) {
        self.notice.set_attr("hidden", "");
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.get_attr("hidden").is_none()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html>");
        let html = Element::new("html")
            .attr("lang", "en")
            .child(
                Element::new("head")
                    .child(Element::new("meta").attr("charset", "utf-8"))
                    .child(
                        Element::new("meta")
                            .attr("name", "viewport")
                            .attr("content", "width=device-width, initial-scale=1"),
                    )
                    .child(Element::new("title").text(self.title.clone()))
                    .child(
                        Element::new("link")
                            .attr("rel", "stylesheet")
                            .attr("href", "styles.css"),
                    ),
            )
            .child(
                Element::new("body")
                    .child(self.notice.clone())
                    .child(self.root.clone()),
            );
        html.write_html(&mut out);
        out
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
