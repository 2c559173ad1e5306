mod resource;
mod sort;
mod writer;
mod xml;

pub use resource::{
    parse_locale_resources, CHILDREN_ELEMENT, LANGUAGE_ELEMENT, NAME_ATTR, RESOURCE_ELEMENT,
    VALUE_ELEMENT,
};
pub use sort::sort_resources;
pub use writer::{flatten_resources, write_flat_resources, WriteOptions};
pub use xml::{parse_xml_document, XmlDocument, XmlElementNode, XmlNode, XmlTextNode};

use sr_core::{FlatLocaleResource, SeedError};
use tracing::debug;

/// Parses, sorts and flattens a resource document into the flat import format.
///
/// Names are ordered per tree level, so feeding the output back in reproduces
/// it only when no source name contains `.` or a character below `.`.
pub fn normalize_locale_resources(
    source: &str,
    options: &WriteOptions,
) -> Result<String, SeedError> {
    let mut set = parse_locale_resources(source)?;
    sort_resources(&mut set.resources);
    let flat = flatten_resources(&set.resources);
    debug!(
        language = set.language_name.as_deref().unwrap_or_default(),
        roots = set.resources.len(),
        emitted = flat.len(),
        "normalized locale resources"
    );
    Ok(write_flat_resources(
        set.language_name.as_deref(),
        &flat,
        options,
    ))
}

/// Reads a document that is already flat (no `Children`) into name/value pairs.
pub fn read_flat_resources(
    source: &str,
) -> Result<(Option<String>, Vec<FlatLocaleResource>), SeedError> {
    let set = parse_locale_resources(source)?;
    let flat = flatten_resources(&set.resources);
    Ok((set.language_name, flat))
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    fn count_nodes_with_value(source: &str) -> usize {
        fn walk(nodes: &[sr_core::LocaleResourceNode]) -> usize {
            nodes
                .iter()
                .map(|node| usize::from(node.value.is_some()) + walk(&node.children))
                .sum()
        }
        let set = parse_locale_resources(source).expect("resources should parse");
        walk(&set.resources)
    }

    const NESTED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Language Name="English">
  <LocaleResource Name="Common">
    <Children>
      <LocaleResource Name="Ok"><Value>OK</Value></LocaleResource>
      <LocaleResource Name="Cancel"><Value>Cancel</Value></LocaleResource>
    </Children>
  </LocaleResource>
  <LocaleResource Name="Admin">
    <Value>Administration</Value>
    <Children>
      <LocaleResource Name="Orders">
        <Children>
          <LocaleResource Name="Title"><Value>Orders &amp; returns</Value></LocaleResource>
          <LocaleResource Name="Empty"><Value>  </Value></LocaleResource>
        </Children>
      </LocaleResource>
    </Children>
  </LocaleResource>
</Language>"#;

    #[test]
    fn common_group_flattens_to_sorted_qualified_names() {
        let source = r#"<Language Name="English">
  <LocaleResource Name="Common">
    <Children>
      <LocaleResource Name="Ok"><Value>OK</Value></LocaleResource>
      <LocaleResource Name="Cancel"><Value>Cancel</Value></LocaleResource>
    </Children>
  </LocaleResource>
</Language>"#;

        let normalized =
            normalize_locale_resources(source, &WriteOptions::default()).expect("normalize");
        let (language, flat) = read_flat_resources(&normalized).expect("flat output parses");

        assert_eq!(language.as_deref(), Some("English"));
        assert_eq!(
            flat,
            vec![
                FlatLocaleResource {
                    name: "Common.Cancel".to_string(),
                    value: "Cancel".to_string(),
                },
                FlatLocaleResource {
                    name: "Common.Ok".to_string(),
                    value: "OK".to_string(),
                },
            ]
        );
    }

    #[test]
    fn emits_exactly_one_element_per_persistable_node() {
        let normalized =
            normalize_locale_resources(NESTED, &WriteOptions::default()).expect("normalize");
        let emitted = normalized.matches("<LocaleResource ").count();
        assert_eq!(emitted, count_nodes_with_value(NESTED));
        assert_eq!(emitted, 4);
        assert!(!normalized.contains("Admin.Orders.Empty"));
        assert!(!normalized.contains("Name=\"Common\""));
    }

    #[test]
    fn qualified_names_have_no_stray_separators() {
        let normalized =
            normalize_locale_resources(NESTED, &WriteOptions::default()).expect("normalize");
        let (_, flat) = read_flat_resources(&normalized).expect("flat output parses");
        let names = flat
            .iter()
            .map(|resource| resource.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Admin", "Admin.Orders.Title", "Common.Cancel", "Common.Ok"]
        );
        assert!(names
            .iter()
            .all(|name| !name.starts_with('.') && !name.ends_with('.') && !name.contains("..")));
    }

    #[test]
    fn renormalizing_flat_output_is_byte_identical() {
        for options in [WriteOptions::default(), WriteOptions { indent: false }] {
            let first = normalize_locale_resources(NESTED, &options).expect("first pass");
            let second = normalize_locale_resources(&first, &options).expect("second pass");
            assert_eq!(first, second);
        }
    }

    #[test]
    fn rewriting_flat_output_without_resorting_is_byte_identical() {
        let source = r#"<Language Name="English">
  <LocaleResource Name="Common.Cancel"><Value>Cancel</Value></LocaleResource>
  <LocaleResource Name="Common"><Children>
    <LocaleResource Name="Ok"><Value>OK</Value></LocaleResource>
  </Children></LocaleResource>
</Language>"#;
        for options in [WriteOptions::default(), WriteOptions { indent: false }] {
            for input in [NESTED, source] {
                let first = normalize_locale_resources(input, &options).expect("first pass");
                let (language, flat) = read_flat_resources(&first).expect("flat output parses");
                let rewritten = write_flat_resources(language.as_deref(), &flat, &options);
                assert_eq!(rewritten, first);
            }
        }
    }

    #[test]
    fn dotted_sibling_names_sort_per_level_not_by_qualified_name() {
        let source = r#"<Language Name="English">
  <LocaleResource Name="Common.Cancel"><Value>Cancel</Value></LocaleResource>
  <LocaleResource Name="Common"><Children>
    <LocaleResource Name="Ok"><Value>OK</Value></LocaleResource>
  </Children></LocaleResource>
</Language>"#;
        let options = WriteOptions { indent: false };

        let first = normalize_locale_resources(source, &options).expect("first pass");
        let (_, flat) = read_flat_resources(&first).expect("flat output parses");
        let names = flat
            .iter()
            .map(|resource| resource.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Common.Ok", "Common.Cancel"]);

        let second = normalize_locale_resources(&first, &options).expect("second pass");
        let (_, resorted) = read_flat_resources(&second).expect("flat output parses");
        let resorted_names = resorted
            .iter()
            .map(|resource| resource.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(resorted_names, vec!["Common.Cancel", "Common.Ok"]);
        assert_ne!(first, second);
    }

    #[test]
    fn round_trip_preserves_escaped_content() {
        let source = r#"<Language Name="Deutsch &quot;DE&quot;">
  <LocaleResource Name="Cart"><Value><![CDATA[<b>Warenkorb</b> & mehr]]></Value></LocaleResource>
</Language>"#;
        let first = normalize_locale_resources(source, &WriteOptions::default()).expect("first");
        let (language, flat) = read_flat_resources(&first).expect("flat output parses");
        assert_eq!(language.as_deref(), Some("Deutsch \"DE\""));
        assert_eq!(flat[0].value, "<b>Warenkorb</b> & mehr");

        let second = normalize_locale_resources(&first, &WriteOptions::default()).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_name_halts_normalization() {
        let source = r#"<Language Name="English">
  <LocaleResource Name="Ok"><Value>OK</Value></LocaleResource>
  <LocaleResource Name=""><Value>lost</Value></LocaleResource>
</Language>"#;
        let error = normalize_locale_resources(source, &WriteOptions::default())
            .expect_err("empty name should fail");
        assert_eq!(error.code, "RESOURCE_NAME_EMPTY");
    }

    #[test]
    fn output_is_deterministic() {
        let first = normalize_locale_resources(NESTED, &WriteOptions::default()).expect("first");
        let again = normalize_locale_resources(NESTED, &WriteOptions::default()).expect("again");
        assert_eq!(first, again);
    }
}
