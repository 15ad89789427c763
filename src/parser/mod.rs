//! Catalog parser (verb module)
//!
//! Transforms YAML documents into template types.

use std::path::Path;
use crate::error::ParseError;
use crate::template::TemplateCatalog;

/// Parse a template catalog from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<TemplateCatalog, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;
    parse_str(&contents)
}

/// Parse a template catalog from a YAML string
pub fn parse_str(yaml: &str) -> Result<TemplateCatalog, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_performance_catalog() {
        let catalog = parse_file("test_data/performance.yaml").unwrap();

        assert_eq!(catalog.templates.len(), 8);
        assert_eq!(catalog.tables(), vec!["analytics.events".to_string()]);

        // Ungrouped aggregate template
        let metrics = catalog.get_template("performance_metrics").unwrap();
        assert_eq!(metrics.table, "analytics.events");
        assert!(metrics.group_by.is_empty());
        assert!(metrics.order_by.is_none());
        assert!(metrics.limit.is_none());
        assert_eq!(metrics.time_field, "time");
        assert!(metrics.customizable);
        assert!(metrics.allows_filter("country"));
        assert!(!metrics.allows_filter("os_name"));

        // Grouped, ordered, limited template
        let slow = catalog.get_template("slow_pages").unwrap();
        assert_eq!(slow.group_by, vec!["path(path)".to_string()]);
        assert_eq!(slow.order_by.as_deref(), Some("avg_load_time DESC"));
        assert_eq!(slow.limit, Some(100));
        assert_eq!(slow.base_predicates.len(), 3);

        // Plugin flags
        let country = catalog.get_template("performance_by_country").unwrap();
        assert!(country.plugin_enabled("normalize_geo"));
        assert!(country.plugin_enabled("dedup_geo"));
        let enabled: Vec<&str> = country.enabled_plugins().collect();
        assert_eq!(enabled.len(), 2);

        // Templates without plugin flags enable nothing
        assert!(!slow.plugin_enabled("normalize_geo"));
    }

    #[test]
    fn test_parse_minimal_template() {
        let yaml = r#"
templates:
  - name: bare
    table: analytics.events
    fields: ["COUNT(*) as total"]
    timeField: time
"#;
        let catalog = parse_str(yaml).unwrap();
        let bare = catalog.get_template("bare").unwrap();
        assert!(bare.base_predicates.is_empty());
        assert!(bare.allowed_filters.is_empty());
        assert!(!bare.customizable);
        assert!(!bare.allow_custom_filters);
        assert!(bare.plugins.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_str("not: [valid: yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_time_field() {
        let yaml = r#"
templates:
  - name: broken
    table: analytics.events
    fields: ["COUNT(*) as total"]
"#;
        assert!(parse_str(yaml).is_err());
    }
}
