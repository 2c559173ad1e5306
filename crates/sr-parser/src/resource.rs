use sr_core::{qualify_name, LocaleResourceNode, LocaleResourceSet, SeedError};

use crate::xml::{parse_xml_document, XmlElementNode};

pub const LANGUAGE_ELEMENT: &str = "Language";
pub const RESOURCE_ELEMENT: &str = "LocaleResource";
pub const CHILDREN_ELEMENT: &str = "Children";
pub const VALUE_ELEMENT: &str = "Value";
pub const NAME_ATTR: &str = "Name";

/// Parses a `Language/LocaleResource[/Children/LocaleResource]*` document into
/// resource trees, in source order.
pub fn parse_locale_resources(source: &str) -> Result<LocaleResourceSet, SeedError> {
    let document = parse_xml_document(source)?;
    let root = &document.root;

    if root.name != LANGUAGE_ELEMENT {
        return Err(SeedError::with_span(
            "RESOURCE_ROOT_INVALID",
            format!(
                "Resource document root must be <{}>, found <{}>.",
                LANGUAGE_ELEMENT, root.name
            ),
            root.location.clone(),
        ));
    }

    let language_name = root
        .attributes
        .get(NAME_ATTR)
        .map(|name| name.trim().to_string());

    let resources = root
        .child_elements_named(RESOURCE_ELEMENT)
        .map(|element| parse_resource(element, ""))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LocaleResourceSet {
        language_name,
        resources,
    })
}

fn parse_resource(
    node: &XmlElementNode,
    namespace_prefix: &str,
) -> Result<LocaleResourceNode, SeedError> {
    let name = required_resource_name(node)?;
    let value = node
        .child_elements_named(VALUE_ELEMENT)
        .next()
        .map(|value| value.inner_text().trim().to_string())
        .filter(|value| !value.is_empty());

    let qualified_name = qualify_name(namespace_prefix, &name);
    let mut children = Vec::new();
    for wrapper in node.child_elements_named(CHILDREN_ELEMENT) {
        for child in wrapper.child_elements_named(RESOURCE_ELEMENT) {
            children.push(parse_resource(child, &qualified_name)?);
        }
    }

    Ok(LocaleResourceNode {
        name,
        value,
        namespace_prefix: namespace_prefix.to_string(),
        children,
        location: node.location.clone(),
    })
}

fn required_resource_name(node: &XmlElementNode) -> Result<String, SeedError> {
    let Some(raw) = node.attributes.get(NAME_ATTR) else {
        return Err(SeedError::with_span(
            "RESOURCE_NAME_MISSING",
            format!(
                "Missing required attribute \"{}\" on <{}>.",
                NAME_ATTR, node.name
            ),
            node.location.clone(),
        ));
    };

    let name = raw.trim();
    if name.is_empty() {
        return Err(SeedError::with_span(
            "RESOURCE_NAME_EMPTY",
            format!("Attribute \"{}\" on <{}> cannot be empty.", NAME_ATTR, node.name),
            node.location.clone(),
        ));
    }

    Ok(name.to_string())
}
