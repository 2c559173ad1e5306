use sr_core::{FlatLocaleResource, LocaleResourceNode};

use crate::resource::{LANGUAGE_ELEMENT, NAME_ATTR, RESOURCE_ELEMENT, VALUE_ELEMENT};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { indent: true }
    }
}

/// Pre-order walk emitting one entry per persistable node.
///
/// Structural nodes emit nothing but their children are still visited.
pub fn flatten_resources(resources: &[LocaleResourceNode]) -> Vec<FlatLocaleResource> {
    let mut flat = Vec::new();
    for resource in resources {
        flatten_into(resource, &mut flat);
    }
    flat
}

fn flatten_into(node: &LocaleResourceNode, out: &mut Vec<FlatLocaleResource>) {
    if let Some(value) = &node.value {
        out.push(FlatLocaleResource {
            name: node.qualified_name(),
            value: value.clone(),
        });
    }
    for child in &node.children {
        flatten_into(child, out);
    }
}

pub fn write_flat_resources(
    language_name: Option<&str>,
    resources: &[FlatLocaleResource],
    options: &WriteOptions,
) -> String {
    let newline = if options.indent { "\n" } else { "" };
    let indent = |depth: usize| {
        if options.indent {
            "  ".repeat(depth)
        } else {
            String::new()
        }
    };

    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push_str(newline);

    xml.push('<');
    xml.push_str(LANGUAGE_ELEMENT);
    if let Some(name) = language_name {
        xml.push_str(&format!(" {}=\"{}\"", NAME_ATTR, escape_xml_attr(name)));
    }
    xml.push('>');
    xml.push_str(newline);

    for resource in resources {
        xml.push_str(&format!(
            "{}<{} {}=\"{}\">{}",
            indent(1),
            RESOURCE_ELEMENT,
            NAME_ATTR,
            escape_xml_attr(&resource.name),
            newline
        ));
        xml.push_str(&format!(
            "{}<{}>{}</{}>{}",
            indent(2),
            VALUE_ELEMENT,
            escape_xml_text(&resource.value),
            VALUE_ELEMENT,
            newline
        ));
        xml.push_str(&format!("{}</{}>{}", indent(1), RESOURCE_ELEMENT, newline));
    }

    xml.push_str(&format!("</{}>{}", LANGUAGE_ELEMENT, newline));
    xml
}

fn escape_xml_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            // Literal whitespace in attributes is normalized to spaces on read.
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_xml_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
