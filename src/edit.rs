//! Path-addressed edits: the "emit a value on change" half of the form
//! protocol, made concrete.
//!
//! A [`FieldPath`] is a slash path into the tree; numeric segments index
//! lists and tuples, the rest name fields. Nested nodes are entered
//! implicitly, so `/geometry/scanner/base/name` reads through the chosen
//! scanner without extra syntax.
//!
//! [`apply`] performs one [`EditOp`] at a path. This outer layer reports
//! structured errors for the CLI; the model layer underneath keeps its
//! silent-degrade contract: an unknown *variant* still just clears the
//! slot, and only unknown locations and type mismatches are errors.

use std::fmt;

use thiserror::Error;

use crate::meta::FieldType;
use crate::node::{FieldValue, Node};

// --------------------------------- Paths ---------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Field(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    steps: Vec<Step>,
}

impl FieldPath {
    /// Parse a slash path. Empty segments are tolerated; an empty path (or
    /// `/`) addresses the root.
    pub fn parse(src: &str) -> FieldPath {
        let steps = src
            .trim()
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(|seg| match seg.parse::<usize>() {
                Ok(i) => Step::Index(i),
                Err(_) => Step::Field(seg.to_string()),
            })
            .collect();
        FieldPath { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve to a location in the tree.
    pub fn resolve<'a>(&self, root: &'a Node) -> Option<Place<'a>> {
        let mut cur = Place::Node(root);
        for step in &self.steps {
            cur = match step {
                Step::Field(name) => Place::Value(cur.as_node()?.get(name)?),
                Step::Index(i) => match cur {
                    Place::Value(FieldValue::List(items)) => Place::Node(items.get(*i)?),
                    Place::Value(FieldValue::Tuple(xs)) => Place::Value(xs.get(*i)?),
                    _ => return None,
                },
            };
        }
        Some(cur)
    }
}

fn walk_mut<'a>(root: &'a mut Node, steps: &[Step]) -> Option<PlaceMut<'a>> {
    let mut cur = PlaceMut::Node(root);
    for step in steps {
        cur = match step {
            Step::Field(name) => PlaceMut::Value(cur.into_node()?.get_mut(name)?),
            Step::Index(i) => match cur {
                PlaceMut::Value(FieldValue::List(items)) => PlaceMut::Node(items.get_mut(*i)?),
                PlaceMut::Value(FieldValue::Tuple(xs)) => PlaceMut::Value(xs.get_mut(*i)?),
                _ => return None,
            },
        };
    }
    Some(cur)
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "/");
        }
        for step in &self.steps {
            match step {
                Step::Field(name) => write!(f, "/{name}")?,
                Step::Index(i) => write!(f, "/{i}")?,
            }
        }
        Ok(())
    }
}

/// A resolved location: either a node (the root, a list element, or read
/// through a node-valued field) or a field value.
#[derive(Debug, Clone, Copy)]
pub enum Place<'a> {
    Node(&'a Node),
    Value(&'a FieldValue),
}

impl<'a> Place<'a> {
    /// The node at this place, reading through node-valued fields.
    pub fn as_node(self) -> Option<&'a Node> {
        match self {
            Place::Node(n) => Some(n),
            Place::Value(FieldValue::Node(n)) => Some(n),
            Place::Value(_) => None,
        }
    }

    pub fn as_value(self) -> Option<&'a FieldValue> {
        match self {
            Place::Node(_) => None,
            Place::Value(v) => Some(v),
        }
    }
}

enum PlaceMut<'a> {
    Node(&'a mut Node),
    Value(&'a mut FieldValue),
}

impl<'a> PlaceMut<'a> {
    fn into_node(self) -> Option<&'a mut Node> {
        match self {
            PlaceMut::Node(n) => Some(n),
            PlaceMut::Value(FieldValue::Node(n)) => Some(n),
            PlaceMut::Value(_) => None,
        }
    }
}

// --------------------------------- Edits ---------------------------------- //

#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    SetStr(String),
    /// `None` clears the number back to unset.
    SetNum(Option<f64>),
    SetBool(bool),
    /// Choose a union variant by discriminator at the addressed field.
    Choose(String),
    /// Append a default element to the addressed list field.
    Push,
    /// Remove the addressed list element (path ends in its index).
    Remove,
}

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("no such location: {0}")]
    BadPath(String),
    #[error("{0} is not {1}")]
    TypeMismatch(String, &'static str),
    #[error("{0} is full")]
    ListFull(String),
    #[error("no variant chosen at {0}")]
    NothingChosen(String),
}

/// Apply one edit at a path.
pub fn apply(root: &mut Node, path: &FieldPath, op: EditOp) -> Result<(), EditError> {
    match op {
        EditOp::Choose(variant) => {
            let (owner, field) = owner_and_field(root, path)?;
            owner
                .choose_variant(field, &variant)
                .map(|_| ())
                .ok_or_else(|| EditError::TypeMismatch(path.to_string(), "a union field"))
        }
        EditOp::Push => {
            let (owner, field) = owner_and_field(root, path)?;
            match owner.descriptor(field).map(|d| d.ty) {
                Some(FieldType::List { .. }) => owner
                    .push_item(field)
                    .map(|_| ())
                    .ok_or_else(|| EditError::ListFull(path.to_string())),
                _ => Err(EditError::TypeMismatch(path.to_string(), "a list field")),
            }
        }
        EditOp::Remove => {
            let steps = path.steps();
            let (index, field, prefix) = match steps {
                [prefix @ .., Step::Field(field), Step::Index(i)] => (*i, field.as_str(), prefix),
                _ => return Err(EditError::TypeMismatch(path.to_string(), "a list element")),
            };
            let owner = walk_mut(root, prefix)
                .and_then(PlaceMut::into_node)
                .ok_or_else(|| EditError::BadPath(path.to_string()))?;
            owner
                .remove_item(field, index)
                .map(|_| ())
                .ok_or_else(|| EditError::BadPath(path.to_string()))
        }
        EditOp::SetStr(s) => set_leaf(root, path, FieldValue::Str(s), "a string field"),
        EditOp::SetNum(n) => set_leaf(root, path, FieldValue::Num(n), "a number field"),
        EditOp::SetBool(b) => set_leaf(root, path, FieldValue::Bool(b), "a boolean field"),
    }
}

fn owner_and_field<'a, 'p>(
    root: &'a mut Node,
    path: &'p FieldPath,
) -> Result<(&'a mut Node, &'p str), EditError> {
    let (field, prefix) = match path.steps() {
        [prefix @ .., Step::Field(field)] => (field.as_str(), prefix),
        _ => return Err(EditError::BadPath(path.to_string())),
    };
    let owner = walk_mut(root, prefix)
        .and_then(PlaceMut::into_node)
        .ok_or_else(|| EditError::BadPath(path.to_string()))?;
    Ok((owner, field))
}

fn set_leaf(
    root: &mut Node,
    path: &FieldPath,
    value: FieldValue,
    expected: &'static str,
) -> Result<(), EditError> {
    let place =
        walk_mut(root, path.steps()).ok_or_else(|| EditError::BadPath(path.to_string()))?;
    let slot = match place {
        PlaceMut::Value(v) => v,
        PlaceMut::Node(_) => {
            return Err(EditError::TypeMismatch(path.to_string(), expected));
        }
    };
    let compatible = matches!(
        (&*slot, &value),
        (FieldValue::Str(_), FieldValue::Str(_))
            | (FieldValue::Num(_), FieldValue::Num(_))
            | (FieldValue::Bool(_), FieldValue::Bool(_))
    );
    if !compatible {
        return Err(if slot.is_absent() {
            EditError::NothingChosen(path.to_string())
        } else {
            EditError::TypeMismatch(path.to_string(), expected)
        });
    }
    *slot = value;
    Ok(())
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::NodeKind;

    fn setup() -> Node {
        Node::new(NodeKind::Setup)
    }

    #[test]
    fn parse_and_display_round_trip() {
        let path = FieldPath::parse("/physics/process/0/model");
        assert_eq!(path.to_string(), "/physics/process/0/model");
        assert!(FieldPath::parse("/").is_root());
        assert!(FieldPath::parse("").is_root());
    }

    #[test]
    fn set_primitive_through_nested_nodes() {
        let mut root = setup();
        let path = FieldPath::parse("/geometry/world/name");
        apply(&mut root, &path, EditOp::SetStr("world_box".into())).unwrap();
        let got = path.resolve(&root).unwrap();
        assert_eq!(got.as_value(), Some(&FieldValue::Str("world_box".into())));
    }

    #[test]
    fn set_tuple_component_by_index() {
        let mut root = setup();
        let path = FieldPath::parse("/physics/mag_field/value/1");
        apply(&mut root, &path, EditOp::SetNum(Some(0.5))).unwrap();
        let got = path.resolve(&root).unwrap();
        assert_eq!(got.as_value(), Some(&FieldValue::Num(Some(0.5))));
    }

    #[test]
    fn choose_then_edit_through_the_chosen_variant() {
        let mut root = setup();
        apply(
            &mut root,
            &FieldPath::parse("/geometry/scanner"),
            EditOp::Choose("ECAT".into()),
        )
        .unwrap();
        let base = FieldPath::parse("/geometry/scanner/base/material");
        apply(&mut root, &base, EditOp::SetStr("BGO".into())).unwrap();

        let scanner = FieldPath::parse("/geometry/scanner").resolve(&root).unwrap();
        assert_eq!(scanner.as_node().unwrap().kind(), NodeKind::ECAT);
    }

    #[test]
    fn push_and_remove_list_elements() {
        let mut root = setup();
        let windows = FieldPath::parse("/digitizer/window");
        apply(&mut root, &windows, EditOp::Push).unwrap();
        apply(&mut root, &FieldPath::parse("/digitizer/window/1"), EditOp::Remove).unwrap();

        match windows.resolve(&root).unwrap().as_value() {
            Some(FieldValue::List(items)) => assert_eq!(items.len(), 1),
            other => panic!("unexpected window field: {other:?}"),
        }
    }

    #[test]
    fn push_past_the_declared_bound_errors() {
        let mut root = setup();
        apply(
            &mut root,
            &FieldPath::parse("/geometry/scanner"),
            EditOp::Choose("CTscanner".into()),
        )
        .unwrap();
        let cluster = FieldPath::parse("/geometry/scanner/cluster");
        apply(&mut root, &cluster, EditOp::Push).unwrap();
        apply(&mut root, &cluster, EditOp::Push).unwrap();
        assert_eq!(
            apply(&mut root, &cluster, EditOp::Push),
            Err(EditError::ListFull("/geometry/scanner/cluster".into()))
        );
    }

    #[test]
    fn errors_name_the_offending_path() {
        let mut root = setup();
        assert_eq!(
            apply(&mut root, &FieldPath::parse("/warp/core"), EditOp::SetBool(true)),
            Err(EditError::BadPath("/warp/core".into()))
        );
        assert_eq!(
            apply(
                &mut root,
                &FieldPath::parse("/geometry/world/name"),
                EditOp::SetBool(true)
            ),
            Err(EditError::TypeMismatch(
                "/geometry/world/name".into(),
                "a boolean field"
            ))
        );
        assert_eq!(
            apply(
                &mut root,
                &FieldPath::parse("/acquisition/engine_seed"),
                EditOp::SetNum(Some(7.0))
            ),
            Err(EditError::NothingChosen("/acquisition/engine_seed".into()))
        );
    }

    #[test]
    fn unknown_variant_still_applies_and_clears() {
        let mut root = setup();
        let path = FieldPath::parse("/geometry/phantom");
        apply(&mut root, &path, EditOp::Choose("Volume".into())).unwrap();
        apply(&mut root, &path, EditOp::Choose("Warp".into())).unwrap();
        assert!(path.resolve(&root).unwrap().as_value().unwrap().is_absent());
    }
}
