//! Envelopes of the Figma REST endpoints used by the reporter.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::node::Node;

/// `GET /v1/files/:key`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub name: Option<String>,
    pub last_modified: Option<String>,
    pub version: Option<String>,
    pub document: Option<Node>,
}

/// `GET /v1/files/:key/styles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesResponse {
    #[serde(default)]
    pub meta: StylesMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StylesMeta {
    #[serde(default)]
    pub styles: StyleCollection,
}

/// Published style metadata. The API has served both a list and a map keyed
/// by style ID; both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StyleCollection {
    List(Vec<PublishedStyle>),
    Map(BTreeMap<String, PublishedStyle>),
}

impl Default for StyleCollection {
    fn default() -> Self {
        StyleCollection::List(Vec::new())
    }
}

impl StyleCollection {
    pub fn is_empty(&self) -> bool {
        match self {
            StyleCollection::List(list) => list.is_empty(),
            StyleCollection::Map(map) => map.is_empty(),
        }
    }

    /// Entries in document order for the list shape, key order for the map.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &PublishedStyle> + '_> {
        match self {
            StyleCollection::List(list) => Box::new(list.iter()),
            StyleCollection::Map(map) => Box::new(map.values()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishedStyle {
    pub name: Option<String>,
    pub style_type: Option<String>,
    pub description: Option<String>,
}

/// `GET /v1/files/:key/components`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsResponse {
    #[serde(default)]
    pub meta: ComponentsMeta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentsMeta {
    #[serde(default)]
    pub components: ComponentCollection,
}

/// Components come back as a list; older payloads used a map keyed by
/// component key. Both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ComponentCollection {
    List(Vec<Component>),
    Map(BTreeMap<String, Component>),
}

impl Default for ComponentCollection {
    fn default() -> Self {
        ComponentCollection::List(Vec::new())
    }
}

impl ComponentCollection {
    pub fn len(&self) -> usize {
        match self {
            ComponentCollection::List(list) => list.len(),
            ComponentCollection::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &Component> + '_> {
        match self {
            ComponentCollection::List(list) => Box::new(list.iter()),
            ComponentCollection::Map(map) => Box::new(map.values()),
        }
    }
}

/// A published reusable component.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub node_id: Option<String>,
    pub containing_frame: Option<ContainingFrame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainingFrame {
    pub name: Option<String>,
    #[serde(rename = "pageName")]
    pub page_name: Option<String>,
}

/// `GET /v1/images/:key`
///
/// `images` maps each requested node ID to an asset URL; nodes that cannot be
/// exported map to null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}
