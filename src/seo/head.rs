//! Head descriptor: the ordered set of tags a page puts in `<head>`.
//!
//! The descriptor is plain data. It serializes to JSON for consumers that
//! manage the document head themselves, and to an HTML fragment for static
//! output.

use crate::utils::html::{escape, escape_attr, escape_script, is_void_element};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Write as _;

/// MIME type of the structured data script.
pub const JSON_LD_MIME: &str = "application/ld+json";

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">` (description, keywords, twitter:*)
    Name(String),
    /// `<meta property="...">` (og:*)
    Property(String),
}

/// One tag in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title { text: String },
    Meta { key: MetaKey, content: String },
    Link { rel: String, href: String },
    Script { mime: String, body: String },
}

impl HeadTag {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            key: MetaKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            key: MetaKey::Property(property.into()),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn json_ld(body: impl Into<String>) -> Self {
        Self::Script {
            mime: JSON_LD_MIME.into(),
            body: body.into(),
        }
    }

    /// HTML element name.
    pub const fn tag_name(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Meta { .. } => "meta",
            Self::Link { .. } => "link",
            Self::Script { .. } => "script",
        }
    }

    /// Attributes in output order.
    pub fn attrs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Title { .. } => Vec::new(),
            Self::Meta { key, content } => {
                let key = match key {
                    MetaKey::Name(name) => ("name", name.as_str()),
                    MetaKey::Property(property) => ("property", property.as_str()),
                };
                vec![key, ("content", content.as_str())]
            }
            Self::Link { rel, href } => vec![("rel", rel.as_str()), ("href", href.as_str())],
            Self::Script { mime, .. } => vec![("type", mime.as_str())],
        }
    }

    /// Element text content, if the element has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Title { text } => Some(text.as_str()),
            Self::Script { body, .. } => Some(body.as_str()),
            Self::Meta { .. } | Self::Link { .. } => None,
        }
    }

    /// Write this tag as HTML.
    pub fn write_html(&self, out: &mut String) {
        let tag = self.tag_name();
        let attrs: String = self
            .attrs()
            .into_iter()
            .map(|(k, v)| format!(" {k}=\"{}\"", escape_attr(v)))
            .collect();

        if is_void_element(tag) {
            let _ = write!(out, "<{tag}{attrs}/>");
            return;
        }

        let body = match self {
            Self::Script { body, .. } => escape_script(body),
            _ => escape(self.text().unwrap_or_default()),
        };
        let _ = write!(out, "<{tag}{attrs}>{body}</{tag}>");
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attrs = self.attrs();
        let text = self.text();
        let len = 1 + attrs.len() + usize::from(text.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("tag", self.tag_name())?;
        for (key, value) in attrs {
            map.serialize_entry(key, value)?;
        }
        if let Some(text) = text {
            map.serialize_entry("text", text)?;
        }
        map.end()
    }
}

/// Ordered head tags of one rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct HeadDescriptor {
    pub tags: Vec<HeadTag>,
}

impl HeadDescriptor {
    pub fn new(tags: Vec<HeadTag>) -> Self {
        Self { tags }
    }

    pub fn title(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Title { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Content of `<meta name="{name}">`.
    pub fn meta_name(&self, name: &str) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Meta {
                key: MetaKey::Name(n),
                content,
            } if n == name => Some(content.as_str()),
            _ => None,
        })
    }

    /// Content of `<meta property="{property}">`.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Meta {
                key: MetaKey::Property(p),
                content,
            } if p == property => Some(content.as_str()),
            _ => None,
        })
    }

    /// Href of `<link rel="canonical">`.
    pub fn canonical(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Link { rel, href } if rel == "canonical" => Some(href.as_str()),
            _ => None,
        })
    }

    /// Raw JSON text of the structured data script.
    pub fn structured_data(&self) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Script { mime, body } if mime == JSON_LD_MIME => Some(body.as_str()),
            _ => None,
        })
    }

    /// HTML fragment, one tag per line.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for tag in &self.tags {
            tag.write_html(&mut out);
            out.push('\n');
        }
        out
    }

    /// JSON form of the descriptor.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn html(tag: HeadTag) -> String {
        let mut out = String::new();
        tag.write_html(&mut out);
        out
    }

    mod markup {
        use super::*;

        #[test]
        fn title_escapes_text() {
            assert_eq!(
                html(HeadTag::title("Paint & Plaster | Energy Pool")),
                "<title>Paint &amp; Plaster | Energy Pool</title>"
            );
        }

        #[test]
        fn meta_name() {
            assert_eq!(
                html(HeadTag::name("description", r#"We "fix" roofs."#)),
                r#"<meta name="description" content="We &quot;fix&quot; roofs."/>"#
            );
        }

        #[test]
        fn meta_property() {
            assert_eq!(
                html(HeadTag::property("og:type", "website")),
                r#"<meta property="og:type" content="website"/>"#
            );
        }

        #[test]
        fn link() {
            assert_eq!(
                html(HeadTag::link("canonical", "https://energypool.co.zw")),
                r#"<link rel="canonical" href="https://energypool.co.zw"/>"#
            );
        }

        #[test]
        fn script_body_is_raw_json() {
            assert_eq!(
                html(HeadTag::json_ld(r#"{"name":"A & B"}"#)),
                r#"<script type="application/ld+json">{"name":"A & B"}</script>"#
            );
        }

        #[test]
        fn script_body_cannot_close_element() {
            let out = html(HeadTag::json_ld(r#"{"x":"</script><script>alert(1)"}"#));
            assert_eq!(out.matches("</script>").count(), 1);
            assert!(out.ends_with("</script>"));
        }

        #[test]
        fn script_body_keeps_json_meaning() {
            let body = serde_json::to_string(&json!({"x": "<!-- </script> -->"})).unwrap();
            let out = html(HeadTag::json_ld(body));
            assert!(!out.contains("<!--"));

            let inner = out
                .strip_prefix(r#"<script type="application/ld+json">"#)
                .and_then(|rest| rest.strip_suffix("</script>"))
                .unwrap();
            let parsed: serde_json::Value = serde_json::from_str(inner).unwrap();
            assert_eq!(parsed, json!({"x": "<!-- </script> -->"}));
        }
    }

    mod descriptor {
        use super::*;

        fn sample() -> HeadDescriptor {
            HeadDescriptor::new(vec![
                HeadTag::title("Roofing | Energy Pool"),
                HeadTag::name("description", "We fix roofs."),
                HeadTag::link("canonical", "https://energypool.co.zw"),
                HeadTag::property("og:url", "https://energypool.co.zw"),
                HeadTag::json_ld(r#"{"a":1}"#),
            ])
        }

        #[test]
        fn lookups() {
            let head = sample();
            assert_eq!(head.title(), Some("Roofing | Energy Pool"));
            assert_eq!(head.meta_name("description"), Some("We fix roofs."));
            assert_eq!(head.meta_name("og:url"), None);
            assert_eq!(head.meta_property("og:url"), Some("https://energypool.co.zw"));
            assert_eq!(head.canonical(), Some("https://energypool.co.zw"));
            assert_eq!(head.structured_data(), Some(r#"{"a":1}"#));
        }

        #[test]
        fn html_one_tag_per_line() {
            let out = sample().to_html();
            assert_eq!(out.lines().count(), 5);
            assert!(out.starts_with("<title>Roofing | Energy Pool</title>\n"));
        }

        #[test]
        fn json_shape() {
            let value: serde_json::Value =
                serde_json::from_str(&sample().to_json(false).unwrap()).unwrap();
            assert_eq!(
                value["tags"][0],
                json!({"tag": "title", "text": "Roofing | Energy Pool"})
            );
            assert_eq!(
                value["tags"][1],
                json!({"tag": "meta", "name": "description", "content": "We fix roofs."})
            );
            assert_eq!(
                value["tags"][3],
                json!({"tag": "meta", "property": "og:url", "content": "https://energypool.co.zw"})
            );
            assert_eq!(
                value["tags"][4],
                json!({"tag": "script", "type": "application/ld+json", "text": "{\"a\":1}"})
            );
        }

        #[test]
        fn empty_descriptor() {
            let head = HeadDescriptor::default();
            assert_eq!(head.title(), None);
            assert_eq!(head.to_html(), "");
        }
    }
}
