//! The dynamic configuration tree.
//!
//! A [`Node`] is an instance of a registered kind: an ordered map from the
//! kind's declared field names to owned values. Nothing outside the declared
//! set ever appears in the map, and every field owns its value exclusively;
//! replacing a value drops the old subtree.
//!
//! Union fields hold whatever variant was last chosen (last-writer-wins);
//! choosing constructs a fresh default instance every time, so re-selecting
//! the same variant never aliases the previous contents.

use indexmap::IndexMap;

use crate::meta::{Elem, FieldDecl, FieldType, NodeKind, UnionKind, Variant};

// ------------------------------ Field values ------------------------------ //

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A union slot with no chosen variant.
    Absent,
    Str(String),
    /// Numbers start unset (`None`), matching an empty form input.
    Num(Option<f64>),
    Bool(bool),
    /// Fixed-arity tuple; element shape comes from the declaration.
    Tuple(Vec<FieldValue>),
    Node(Box<Node>),
    List(Vec<Node>),
}

impl FieldValue {
    /// Default value for a declaration: empty strings, unset numbers, off
    /// booleans (unless the declaration switches them on), filled tuples,
    /// default-constructed nested nodes, single-element lists, absent unions.
    pub fn default_for(decl: &FieldDecl) -> FieldValue {
        match decl.ty {
            FieldType::Str => FieldValue::Str(String::new()),
            FieldType::Num => FieldValue::Num(None),
            FieldType::Bool => FieldValue::Bool(decl.on_by_default),
            FieldType::Tuple(elem, arity) => {
                FieldValue::Tuple((0..arity).map(|_| Self::elem_default(elem)).collect())
            }
            FieldType::Node(kind) => FieldValue::Node(Box::new(Node::new(kind))),
            FieldType::List { kind, .. } => FieldValue::List(vec![Node::new(kind)]),
            FieldType::Union(_) => FieldValue::Absent,
        }
    }

    pub fn elem_default(elem: Elem) -> FieldValue {
        match elem {
            Elem::Num => FieldValue::Num(None),
            Elem::Bool => FieldValue::Bool(false),
            Elem::Node(kind) => FieldValue::Node(Box::new(Node::new(kind))),
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            FieldValue::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            FieldValue::Node(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

// --------------------------------- Nodes ---------------------------------- //

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    fields: IndexMap<String, FieldValue>,
}

impl Node {
    /// Default-construct an instance; the field set is exactly the kind's
    /// declared set, in declaration order.
    pub fn new(kind: NodeKind) -> Node {
        let mut fields = IndexMap::with_capacity(kind.fields().len());
        for decl in kind.fields() {
            fields.insert(decl.name.to_string(), FieldValue::default_for(decl));
        }
        Node { kind, fields }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Descriptor for one of this node's fields. Unknown names yield `None`.
    pub fn descriptor(&self, name: &str) -> Option<&'static FieldDecl> {
        self.kind.field_named(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Construct the default value for a named variant of a union. Unknown
    /// names and the explicit unset choice both produce the absent state.
    pub fn construct_variant(union: UnionKind, variant: &str) -> FieldValue {
        match union.variant_named(variant) {
            Some(Variant::Node(kind)) => FieldValue::Node(Box::new(Node::new(kind))),
            Some(Variant::Num) => FieldValue::Num(None),
            Some(Variant::Str) => FieldValue::Str(String::new()),
            Some(Variant::Unset) | None => FieldValue::Absent,
        }
    }

    /// Replace a union field with a freshly constructed instance of the named
    /// variant, discarding the prior contents. Sibling fields are untouched.
    /// Yields `None` when `field` is unknown or not a union.
    pub fn choose_variant(&mut self, field: &str, variant: &str) -> Option<&mut FieldValue> {
        let union = match self.descriptor(field)?.ty {
            FieldType::Union(u) => u,
            _ => return None,
        };
        let slot = self.fields.get_mut(field)?;
        *slot = Self::construct_variant(union, variant);
        Some(slot)
    }

    /// Append a default element to a list field, respecting its declared
    /// bound. Yields the new element, or `None` when the field is not a list
    /// or the list is full.
    pub fn push_item(&mut self, field: &str) -> Option<&mut Node> {
        let (kind, max) = match self.descriptor(field)?.ty {
            FieldType::List { kind, max } => (kind, max),
            _ => return None,
        };
        let FieldValue::List(items) = self.fields.get_mut(field)? else {
            return None;
        };
        if max.is_some_and(|m| items.len() >= m) {
            return None;
        }
        items.push(Node::new(kind));
        items.last_mut()
    }

    /// Remove and return a list element. Yields `None` when the field is not
    /// a list or the index is out of range.
    pub fn remove_item(&mut self, field: &str, index: usize) -> Option<Node> {
        let FieldValue::List(items) = self.fields.get_mut(field)? else {
            return None;
        };
        if index >= items.len() {
            return None;
        }
        Some(items.remove(index))
    }
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_instance_matches_declarations() {
        for &kind in NodeKind::ALL {
            let node = Node::new(kind);
            let declared: Vec<&str> = kind.fields().iter().map(|d| d.name).collect();
            let actual: Vec<&str> = node.field_names().collect();
            assert_eq!(declared, actual, "field set mismatch for {}", kind.name());
        }
    }

    #[test]
    fn adder_and_readout_start_inserted() {
        let adder = Node::new(NodeKind::Adder);
        assert_eq!(adder.get("insert"), Some(&FieldValue::Bool(true)));
        assert_eq!(adder.get("adder_compton"), Some(&FieldValue::Bool(false)));
        let readout = Node::new(NodeKind::Readout);
        assert_eq!(readout.get("insert"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn vec3_defaults_to_three_unset_components() {
        let v = Node::new(NodeKind::Vec3);
        match v.get("value") {
            Some(FieldValue::Tuple(xs)) => {
                assert_eq!(xs.len(), 3);
                assert!(xs.iter().all(|x| *x == FieldValue::Num(None)));
            }
            other => panic!("unexpected value field: {other:?}"),
        }
    }

    #[test]
    fn list_fields_seed_one_default_element() {
        let physics = Node::new(NodeKind::Physics);
        match physics.get("process") {
            Some(FieldValue::List(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].kind(), NodeKind::Process);
            }
            other => panic!("unexpected process field: {other:?}"),
        }
    }

    #[test]
    fn choose_variant_preserves_siblings() {
        let mut geo = Node::new(NodeKind::Geometry);
        if let Some(world) = geo.get_mut("world").and_then(FieldValue::as_node_mut) {
            *world.get_mut("name").unwrap() = FieldValue::Str("world_box".into());
        }
        let chosen = geo.choose_variant("scanner", "CylindricalPET").unwrap();
        assert_eq!(chosen.as_node().unwrap().kind(), NodeKind::CylindricalPET);

        // siblings untouched
        assert!(geo.get("phantom").unwrap().is_absent());
        let world = geo.get("world").unwrap().as_node().unwrap();
        assert_eq!(world.get("name"), Some(&FieldValue::Str("world_box".into())));
    }

    #[test]
    fn rechoosing_yields_a_fresh_instance() {
        let mut geo = Node::new(NodeKind::Geometry);
        geo.choose_variant("scanner", "Scanner");
        {
            let scanner = geo.get_mut("scanner").and_then(FieldValue::as_node_mut).unwrap();
            let base = scanner.get_mut("base").and_then(FieldValue::as_node_mut).unwrap();
            *base.get_mut("name").unwrap() = FieldValue::Str("ring".into());
        }
        geo.choose_variant("scanner", "Scanner");
        let scanner = geo.get("scanner").unwrap().as_node().unwrap();
        let base = scanner.get("base").unwrap().as_node().unwrap();
        assert_eq!(base.get("name"), Some(&FieldValue::Str(String::new())));
    }

    #[test]
    fn unknown_variant_degrades_to_absent() {
        let mut geo = Node::new(NodeKind::Geometry);
        geo.choose_variant("scanner", "Scanner");
        let slot = geo.choose_variant("scanner", "Warp").unwrap();
        assert!(slot.is_absent());
    }

    #[test]
    fn explicit_unset_choice_clears_the_slot() {
        let mut eff = Node::new(NodeKind::LocalEfficiency);
        eff.choose_variant("Level1", "Gaussian");
        assert!(!eff.get("Level1").unwrap().is_absent());
        eff.choose_variant("Level1", "undefined");
        assert!(eff.get("Level1").unwrap().is_absent());
    }

    #[test]
    fn scalar_union_variants_construct_primitive_defaults() {
        let mut acq = Node::new(NodeKind::Acquisition);
        assert_eq!(
            acq.choose_variant("engine_seed", "number").cloned(),
            Some(FieldValue::Num(None))
        );
        assert_eq!(
            acq.choose_variant("engine_seed", "string").cloned(),
            Some(FieldValue::Str(String::new()))
        );
        let slice = acq.choose_variant("time_slice", "Value").unwrap();
        assert_eq!(slice.as_node().unwrap().kind(), NodeKind::Value);
    }

    #[test]
    fn choose_variant_rejects_non_union_fields() {
        let mut vol = Node::new(NodeKind::Volume);
        assert!(vol.choose_variant("material", "Box").is_none());
        assert!(vol.choose_variant("warp_core", "Box").is_none());
    }

    #[test]
    fn bounded_list_refuses_past_its_limit() {
        let mut ct = Node::new(NodeKind::CTscanner);
        assert!(ct.push_item("cluster").is_some());
        assert!(ct.push_item("cluster").is_some());
        assert!(ct.push_item("cluster").is_none(), "cluster is bounded at 3");
        match ct.get("cluster") {
            Some(FieldValue::List(items)) => assert_eq!(items.len(), 3),
            other => panic!("unexpected cluster field: {other:?}"),
        }
    }

    #[test]
    fn remove_item_checks_bounds() {
        let mut dig = Node::new(NodeKind::Digitizer);
        assert!(dig.remove_item("window", 3).is_none());
        assert!(dig.remove_item("window", 0).is_some());
        assert!(dig.remove_item("adder", 0).is_none(), "adder is not a list");
    }
}
