//! Catalog data model
//!
//! Both catalogs are built once by their builder and handed out read-only.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};
use serde_json::{Map, Value};

/// A loaded definition document: the root mapping of the file.
pub type Definition = Map<String, Value>;

/// Identity of a cataloged tool: its file stem within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StepId {
    pub name: String,
    pub namespace: String,
}

impl StepId {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// A discovered tool definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    /// Absolute path of the definition file
    pub path: PathBuf,
    /// Document with `stdout`/`stderr` set from the file stem
    pub definition: Definition,
}

/// All discovered tools keyed by [`StepId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolCatalog {
    tools: BTreeMap<StepId, Tool>,
}

impl ToolCatalog {
    /// Insert a tool, returning the entry it replaced.
    pub(crate) fn insert(&mut self, id: StepId, tool: Tool) -> Option<Tool> {
        self.tools.insert(id, tool)
    }

    pub fn get(&self, id: &StepId) -> Option<&Tool> {
        self.tools.get(id)
    }

    /// Look up a tool by namespace and stem.
    pub fn lookup(&self, namespace: &str, name: &str) -> Option<&Tool> {
        self.tools.get(&StepId::new(name, namespace))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate in `(name, namespace)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &Tool)> {
        self.tools.iter()
    }

    /// Namespaces that contributed at least one tool.
    pub fn namespaces(&self) -> BTreeSet<&str> {
        self.tools.keys().map(|id| id.namespace.as_str()).collect()
    }
}

impl Serialize for ToolCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            namespace: &'a str,
            name: &'a str,
            path: &'a Path,
            definition: &'a Definition,
        }

        let mut seq = serializer.serialize_seq(Some(self.tools.len()))?;
        for (id, tool) in &self.tools {
            seq.serialize_element(&Entry {
                namespace: &id.namespace,
                name: &id.name,
                path: &tool.path,
                definition: &tool.definition,
            })?;
        }
        seq.end()
    }
}

/// Workflow files by namespace, then by stem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkflowCatalog {
    namespaces: BTreeMap<String, BTreeMap<String, PathBuf>>,
}

impl WorkflowCatalog {
    /// The (possibly new) map for `namespace`.
    pub(crate) fn namespace_mut(&mut self, namespace: &str) -> &mut BTreeMap<String, PathBuf> {
        self.namespaces.entry(namespace.to_string()).or_default()
    }

    /// Path of workflow `stem` in `namespace`.
    pub fn get(&self, namespace: &str, stem: &str) -> Option<&Path> {
        self.namespaces
            .get(namespace)
            .and_then(|entries| entries.get(stem))
            .map(PathBuf::as_path)
    }

    pub fn namespace(&self, namespace: &str) -> Option<&BTreeMap<String, PathBuf>> {
        self.namespaces.get(namespace)
    }

    /// Total number of workflows across all namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, PathBuf>)> {
        self.namespaces.iter().map(|(ns, entries)| (ns.as_str(), entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_step_id_identity_is_structural() {
        let a = StepId::new("align", "global");
        let b = StepId::new("align", "global");
        let c = StepId::new("align", "biobb");

        let set: HashSet<StepId> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
        assert_eq!(a.to_string(), "global/align");
    }

    #[test]
    fn test_tool_catalog_serializes_as_entries() {
        let mut catalog = ToolCatalog::default();
        let mut definition = Definition::new();
        definition.insert("class".into(), json!("CommandLineTool"));
        catalog.insert(
            StepId::new("align", "global"),
            Tool {
                path: PathBuf::from("/defs/align.cwl"),
                definition,
            },
        );

        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            value,
            json!([{
                "namespace": "global",
                "name": "align",
                "path": "/defs/align.cwl",
                "definition": {"class": "CommandLineTool"}
            }])
        );
    }

    #[test]
    fn test_workflow_catalog_counts_across_namespaces() {
        let mut catalog = WorkflowCatalog::default();
        catalog.namespace_mut("global").insert("a".into(), PathBuf::from("/w/a.yml"));
        catalog.namespace_mut("global").insert("b".into(), PathBuf::from("/w/b.yml"));
        catalog.namespace_mut("mm").insert("a".into(), PathBuf::from("/mm/a.yml"));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("mm", "a"), Some(Path::new("/mm/a.yml")));
        assert_eq!(catalog.get("mm", "b"), None);
        assert_eq!(
            serde_json::to_value(&catalog).unwrap(),
            json!({"global": {"a": "/w/a.yml", "b": "/w/b.yml"}, "mm": {"a": "/mm/a.yml"}})
        );
    }
}
