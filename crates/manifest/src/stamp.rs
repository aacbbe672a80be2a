use std::collections::BTreeMap;

/// Everything the packaging/templating steps consume, as opaque strings.
///
/// `server_version` holds the manifest-formatted dependency constraint and
/// is absent when dependency resolution is disabled or produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    pub plugin_version: String,
    pub server_version: Option<String>,
    pub build_id: String,
    pub git_revision: String,
    pub build_timestamp: String,
    pub implementation_version: String,
}

impl BuildStamp {
    /// Key→value map handed to the templating collaborator.
    pub fn substitution_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("plugin_version".to_string(), self.plugin_version.clone());
        if let Some(server_version) = &self.server_version {
            map.insert("server_version".to_string(), server_version.clone());
        }
        map.insert("build_id".to_string(), self.build_id.clone());
        map.insert("git_revision".to_string(), self.git_revision.clone());
        map.insert("build_timestamp".to_string(), self.build_timestamp.clone());
        map.insert(
            "implementation_version".to_string(),
            self.implementation_version.clone(),
        );
        map
    }
}
