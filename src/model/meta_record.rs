use crate::model::path_selection::Role;
use serde::{Deserialize, Serialize};

/// An empty string means the role has never been chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaRecord {
    pub source_directory: String,
    pub destination_directory: String,
}

impl MetaRecord {
    pub fn directory(&self, role: Role) -> &str {
        match role {
            Role::Source => &self.source_directory,
            Role::Destination => &self.destination_directory,
        }
    }

    pub fn with_directory(&self, role: Role, directory: String) -> Self {
        let mut record = self.clone();
        match role {
            Role::Source => record.source_directory = directory,
            Role::Destination => record.destination_directory = directory,
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = MetaRecord {
            source_directory: "/home/user/data".to_string(),
            destination_directory: "/home/user/proj/data".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["sourceDirectory"], "/home/user/data");
        assert_eq!(json["destinationDirectory"], "/home/user/proj/data");
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let record: MetaRecord = serde_json::from_str(r#"{"sourceDirectory": "/a/data"}"#).unwrap();

        assert_eq!(record.directory(Role::Source), "/a/data");
        assert_eq!(record.directory(Role::Destination), "");
    }

    #[test]
    fn with_directory_leaves_source_record_untouched() {
        let base = MetaRecord::default();

        let updated = base.with_directory(Role::Destination, "/x/data".to_string());

        assert_eq!(base, MetaRecord::default());
        assert_eq!(updated.destination_directory, "/x/data");
        assert_eq!(updated.source_directory, "");
    }
}
