use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Domain gene (business view). Fields other than name and NM number are
/// carried in `attributes` and flattened on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "nm_Number", alias = "NmNumber")]
    pub nm_number: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Request body for every gene operation (get / create / update).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneRequest {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "nm_Number", alias = "NmNumber")]
    pub nm_number: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// How a `GeneRequest` selects a gene when used as lookup criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criteria<'a> {
    Name(&'a str),
    NmNumber(&'a str),
    Nothing,
}

impl GeneRequest {
    pub fn new(name: impl Into<String>, nm_number: impl Into<String>) -> Self {
        Self { name: name.into(), nm_number: nm_number.into(), attributes: Map::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Name wins over NM number; blank fields are ignored.
    pub fn criteria(&self) -> Criteria<'_> {
        if !self.name.trim().is_empty() {
            Criteria::Name(&self.name)
        } else if !self.nm_number.trim().is_empty() {
            Criteria::NmNumber(&self.nm_number)
        } else {
            Criteria::Nothing
        }
    }

    pub fn into_gene(self) -> Gene {
        Gene { name: self.name, nm_number: self.nm_number, attributes: self.attributes }
    }
}

impl Gene {
    pub fn matches(&self, criteria: Criteria<'_>) -> bool {
        match criteria {
            Criteria::Name(name) => self.name == name,
            Criteria::NmNumber(nm) => self.nm_number == nm,
            Criteria::Nothing => false,
        }
    }
}

/// Domain transcript, keyed by NM number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub nm_number: String,
    #[serde(default)]
    pub gene_name: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Transcript {
    /// A transcript with no owning gene (e.g. imported reference data).
    pub fn unassigned(nm_number: impl Into<String>) -> Self {
        Self { nm_number: nm_number.into(), gene_name: None, attributes: Map::new() }
    }

    /// The transcript a newly created gene claims for its NM number.
    pub fn claimed_by(gene: &Gene) -> Self {
        let mut attributes = Map::new();
        attributes.insert("isSelect".into(), Value::Bool(true));
        Self { nm_number: gene.nm_number.clone(), gene_name: Some(gene.name.clone()), attributes }
    }
}

pub(crate) fn attributes_from_json(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => Map::new(),
    }
}
