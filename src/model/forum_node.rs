//! Static map of the monitored C&C subforums.
//!
//! Each monitored forum node lists the tiers its threads can belong to and, for
//! subforums dedicated to a single generation, that generation. The built-in map can
//! be replaced by a JSON file so that forum reorganisations don't need a release.

use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

use crate::error::AppError;

/// One monitored subforum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForumNode {
    /// Forum node id.
    pub id: i64,
    /// Tiers a thread in this node can belong to.
    pub tiers: Vec<String>,
    /// Generation id when the node only hosts one generation.
    #[serde(default)]
    pub gen: Option<String>,
}

/// Lookup table of monitored subforums keyed by node id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForumNodeMap {
    nodes: BTreeMap<i64, ForumNode>,
}

impl ForumNodeMap {
    /// Builds a map from a list of nodes; later duplicates replace earlier ones.
    pub fn new(nodes: impl IntoIterator<Item = ForumNode>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|node| (node.id, node)).collect(),
        }
    }

    /// Built-in layout of the C&C subforums.
    pub fn default_map() -> Self {
        fn node(id: i64, tiers: &[&str], gen: Option<&str>) -> ForumNode {
            ForumNode {
                id,
                tiers: tiers.iter().map(|t| t.to_string()).collect(),
                gen: gen.map(str::to_string),
            }
        }

        Self::new([
            node(758, &["OU"], Some("sv")),
            node(759, &["Ubers"], Some("sv")),
            node(760, &["UU"], Some("sv")),
            node(761, &["RU"], Some("sv")),
            node(762, &["NU"], Some("sv")),
            node(763, &["PU"], Some("sv")),
            node(764, &["LC"], Some("sv")),
            node(765, &["Monotype"], Some("sv")),
            node(766, &["Doubles"], Some("sv")),
            node(767, &["National Dex", "National Dex UU", "National Dex Monotype"], Some("sv")),
            node(768, &["ZU", "1v1", "CAP", "AG", "BSS", "VGC"], Some("sv")),
            node(770, &["OU", "Ubers", "UU", "RU", "NU", "PU", "LC", "Doubles"], None),
        ])
    }

    /// Loads a node map from a JSON array of nodes.
    ///
    /// # Arguments
    /// - `path` - Path of a file containing `[{"id": 1, "tiers": ["OU"], "gen": "sv"}]`
    ///
    /// # Returns
    /// - `Ok(ForumNodeMap)` - Parsed map
    /// - `Err(AppError::NodeMapIo)` - The file could not be read
    /// - `Err(AppError::NodeMapJson)` - The file is not a valid node list
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses a node map from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let nodes: Vec<ForumNode> = serde_json::from_str(raw)?;
        Ok(Self::new(nodes))
    }

    /// Ids of every monitored node, ascending.
    pub fn monitored_ids(&self) -> Vec<i64> {
        self.nodes.keys().copied().collect()
    }

    /// Candidate tiers for a node; empty when the node is unknown.
    pub fn tiers_for(&self, node_id: i64) -> &[String] {
        self.nodes
            .get(&node_id)
            .map(|node| node.tiers.as_slice())
            .unwrap_or(&[])
    }

    /// Generation of a single-generation node.
    pub fn gen_for(&self, node_id: i64) -> Option<&str> {
        self.nodes.get(&node_id).and_then(|node| node.gen.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
