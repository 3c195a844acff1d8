use serde::{Deserialize, Serialize};

/// A named library/object/member/type pattern scoping a remote listing.
///
/// Records are keyed by `name` within the configuration's ordered filter
/// list. `protected` marks everything matched through the filter read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRecord {
    pub name: String,
    pub library: String,
    pub object: String,
    pub types: Vec<String>,
    pub member: String,
    // Older configuration files predate this field
    #[serde(default = "default_member_type")]
    pub member_type: String,
    #[serde(default)]
    pub protected: bool,
}

fn default_member_type() -> String {
    "*".to_string()
}

impl FilterRecord {
    /// Template for a brand-new filter, numbered after the current list length.
    pub fn template(existing_count: usize) -> Self {
        Self {
            name: format!("Filter {}", existing_count + 1),
            library: "QGPL".to_string(),
            object: "*".to_string(),
            types: vec!["*SRCPF".to_string()],
            member: "*".to_string(),
            member_type: "*".to_string(),
            protected: false,
        }
    }

    /// Working copy of an existing filter, renamed so it lands as a new record.
    pub fn copy_of(source: &Self) -> Self {
        Self {
            name: format!("{} - copy", source.name),
            ..source.clone()
        }
    }
}

/// Raw field values as returned by the form host, prior to normalization.
#[derive(Debug, Clone, Default)]
pub struct FilterSubmission {
    pub name: String,
    pub library: String,
    pub object: String,
    pub types: String,
    pub member: String,
    pub member_type: String,
    pub protected: bool,
}

impl FilterSubmission {
    /// Applies one pure normalization rule per field, yielding a persistable
    /// record. Blank input is coerced here rather than rejected; there is no
    /// separate validation failure path.
    pub fn normalize(self) -> FilterRecord {
        FilterRecord {
            name: self.name.trim().to_string(),
            library: self.library.to_uppercase(),
            object: normalize_pattern(self.object),
            types: normalize_types(&self.types),
            member: normalize_pattern(self.member),
            member_type: normalize_pattern(self.member_type),
            protected: self.protected,
        }
    }
}

/// Generic-name patterns are trimmed; blank collapses to match-all.
fn normalize_pattern(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "*".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Comma-delimited type tokens: trimmed, uppercased, blanks dropped.
fn normalize_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_uppercase())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> FilterSubmission {
        FilterSubmission {
            name: "Sources".to_string(),
            library: "qgpl".to_string(),
            object: "*".to_string(),
            types: "*SRCPF".to_string(),
            member: "*".to_string(),
            member_type: "*".to_string(),
            protected: false,
        }
    }

    #[test]
    fn template_is_numbered_after_list_length() {
        let filter = FilterRecord::template(2);
        assert_eq!(filter.name, "Filter 3");
        assert_eq!(filter.library, "QGPL");
        assert_eq!(filter.object, "*");
        assert_eq!(filter.types, vec!["*SRCPF"]);
        assert_eq!(filter.member, "*");
        assert_eq!(filter.member_type, "*");
        assert!(!filter.protected);
    }

    #[test]
    fn copy_renames_and_detaches_types() {
        let original = FilterRecord::template(0);
        let mut copy = FilterRecord::copy_of(&original);
        assert_eq!(copy.name, "Filter 1 - copy");

        copy.types.push("*PGM".to_string());
        assert_eq!(original.types, vec!["*SRCPF"]);
    }

    #[test]
    fn name_is_trimmed_only() {
        let mut sub = submission();
        sub.name = "  Dev sources  ".to_string();
        assert_eq!(sub.normalize().name, "Dev sources");
    }

    #[test]
    fn library_is_uppercased_without_trimming() {
        let mut sub = submission();
        sub.library = " qgpl ".to_string();
        assert_eq!(sub.normalize().library, " QGPL ");
    }

    #[test]
    fn types_are_split_trimmed_uppercased() {
        let mut sub = submission();
        sub.types = " *pgm, *srvpgm ,,".to_string();
        assert_eq!(sub.normalize().types, vec!["*PGM", "*SRVPGM"]);
    }

    #[test]
    fn types_may_normalize_to_empty() {
        let mut sub = submission();
        sub.types = " , ,".to_string();
        assert!(sub.normalize().types.is_empty());
    }

    #[test]
    fn blank_patterns_collapse_to_match_all() {
        let mut sub = submission();
        sub.object = "  ".to_string();
        sub.member = "".to_string();
        sub.member_type = " ".to_string();

        let record = sub.normalize();
        assert_eq!(record.object, "*");
        assert_eq!(record.member, "*");
        assert_eq!(record.member_type, "*");
    }

    #[test]
    fn patterns_keep_their_case() {
        let mut sub = submission();
        sub.object = " q* ".to_string();
        sub.member = "CL*abc*".to_string();
        let record = sub.normalize();
        assert_eq!(record.object, "q*");
        assert_eq!(record.member, "CL*abc*");
    }

    #[test]
    fn protected_passes_through() {
        let mut sub = submission();
        sub.protected = true;
        assert!(sub.normalize().protected);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let filter = FilterRecord::template(0);
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"memberType\""));
        assert!(!json.contains("member_type"));
    }

    #[test]
    fn missing_member_type_loads_as_match_all() {
        let json = r#"{
            "name": "Legacy",
            "library": "QGPL",
            "object": "*",
            "types": ["*SRCPF"],
            "member": "*"
        }"#;
        let filter: FilterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(filter.member_type, "*");
        assert!(!filter.protected);
    }
}
