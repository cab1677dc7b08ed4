use super::Ancestors;
use crate::model::props;
use crate::model::{Identifier, NodeTree};
use serde_json::Value;
use std::collections::BTreeMap;

/// A property a field walk looks for
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldSpec {
    /// `id`: the item's identifier
    Id,
    /// `type`: the item's type tag
    Type,
    /// `containerId`: the container the item lives in
    ContainerId,
    /// `componentType`: the type of the component owning a container
    ComponentType,
    Custom(String),
}

impl FieldSpec {
    pub fn key(&self) -> &str {
        match self {
            FieldSpec::Id => "id",
            FieldSpec::Type => "type",
            FieldSpec::ContainerId => "containerId",
            FieldSpec::ComponentType => "componentType",
            FieldSpec::Custom(key) => key,
        }
    }
}

/// A value is "seen" when it is neither null, false nor the empty string
pub(crate) fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false)) && value.as_str() != Some("")
}

/// Fields collected by [`extract_fields`], each with the depth it was found at
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    found: BTreeMap<FieldSpec, (usize, Value)>,
}

impl FieldSet {
    pub fn get(&self, spec: &FieldSpec) -> Option<&Value> {
        self.found.get(spec).map(|(_, v)| v)
    }

    pub fn depth_of(&self, spec: &FieldSpec) -> Option<usize> {
        self.found.get(spec).map(|(d, _)| *d)
    }

    /// The field read as an identifier
    pub fn identifier(&self, spec: &FieldSpec) -> Option<Identifier> {
        self.get(spec).and_then(Identifier::from_value)
    }

    /// The field read as text (strings as-is, other scalars rendered)
    pub fn text(&self, spec: &FieldSpec) -> Option<String> {
        scalar_text(self.get(spec)?)
    }

    pub fn contains(&self, spec: &FieldSpec) -> bool {
        self.found.contains_key(spec)
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Strings as-is, other scalars rendered, containers not at all
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract the nearest identifier on the ancestor path
///
/// Returns the `id` of the first node (starting at `start` itself) whose
/// property bag carries one, without looking further up.
pub fn extract_identifier<T: NodeTree>(
    tree: &T,
    start: T::Handle,
    max_depth: usize,
) -> Option<Identifier> {
    Ancestors::new(tree, start, max_depth).find_map(|(_, node)| {
        props::field(tree.props(node), FieldSpec::Id.key()).and_then(Identifier::from_value)
    })
}

/// Collect several fields in a single upward walk
///
/// Each field is taken from the first node where it is seen, independently
/// of the others: a node contributing `type` does not stop the walk from
/// picking up `containerId` further up. The walk ends as soon as every
/// requested field is collected or the depth bound is reached.
pub fn extract_fields<T: NodeTree>(
    tree: &T,
    start: T::Handle,
    fields: &[FieldSpec],
    max_depth: usize,
) -> FieldSet {
    let mut set = FieldSet::default();
    if fields.is_empty() {
        return set;
    }

    for (depth, node) in Ancestors::new(tree, start, max_depth) {
        let bag = tree.props(node);
        for spec in fields {
            if set.found.contains_key(spec) {
                continue;
            }
            if let Some(value) = bag.get(spec.key()).filter(|v| is_present(v)) {
                set.found.insert(spec.clone(), (depth, value.clone()));
            }
        }
        if fields.iter().all(|spec| set.found.contains_key(spec)) {
            break;
        }
    }
    set
}
