//! Document codec: configuration trees to and from JSON.
//!
//! Encoding walks the declared field set in order; union slots tag their node
//! values with a `"kind"` discriminator so a reader can resolve the variant.
//! Decoding is descriptor-driven and lenient: missing keys take defaults,
//! unknown keys are ignored, malformed values fall back to defaults, and an
//! unknown discriminator leaves the slot absent. Only the outer JSON parse
//! can fail, and that failure carries the offending JSON path.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::meta::{Elem, FieldDecl, FieldType, NodeKind, UnionKind, Variant};
use crate::node::{FieldValue, Node};

// -------------------------------- Encoding -------------------------------- //

/// Encode a tree as a JSON value, fields in declaration order.
pub fn encode(node: &Node) -> Value {
    encode_node(node, false)
}

fn encode_node(node: &Node, tagged: bool) -> Value {
    let mut map = Map::new();
    if tagged {
        map.insert("kind".into(), Value::from(node.kind().name()));
    }
    for decl in node.kind().fields() {
        let value = match node.get(decl.name) {
            Some(v) => encode_value(v, matches!(decl.ty, FieldType::Union(_))),
            None => Value::Null,
        };
        map.insert(decl.name.to_string(), value);
    }
    Value::Object(map)
}

fn encode_value(value: &FieldValue, tagged: bool) -> Value {
    match value {
        FieldValue::Absent => Value::Null,
        FieldValue::Str(s) => Value::from(s.as_str()),
        FieldValue::Num(n) => match n {
            Some(x) => Value::from(*x),
            None => Value::Null,
        },
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Tuple(xs) => {
            Value::Array(xs.iter().map(|x| encode_value(x, false)).collect())
        }
        FieldValue::Node(n) => encode_node(n, tagged),
        FieldValue::List(items) => {
            Value::Array(items.iter().map(|n| encode_node(n, false)).collect())
        }
    }
}

impl serde::Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

// -------------------------------- Decoding -------------------------------- //

/// Decode a tree of the given kind from a JSON value. Never fails; anything
/// unusable degrades to the default.
pub fn decode(kind: NodeKind, value: &Value) -> Node {
    let mut node = Node::new(kind);
    let Some(map) = value.as_object() else {
        return node;
    };
    for decl in kind.fields() {
        let Some(raw) = map.get(decl.name) else {
            continue;
        };
        let decoded = decode_value(decl, raw);
        if let Some(slot) = node.get_mut(decl.name) {
            *slot = decoded;
        }
    }
    node
}

fn decode_value(decl: &FieldDecl, raw: &Value) -> FieldValue {
    match decl.ty {
        FieldType::Str => FieldValue::Str(raw.as_str().unwrap_or_default().to_string()),
        FieldType::Num => FieldValue::Num(raw.as_f64()),
        FieldType::Bool => FieldValue::Bool(raw.as_bool().unwrap_or(decl.on_by_default)),
        FieldType::Tuple(elem, arity) => {
            let items = raw.as_array().map(Vec::as_slice).unwrap_or_default();
            // pad or truncate to the declared arity
            let xs = (0..arity)
                .map(|i| match items.get(i) {
                    Some(x) => decode_elem(elem, x),
                    None => FieldValue::elem_default(elem),
                })
                .collect();
            FieldValue::Tuple(xs)
        }
        FieldType::Node(kind) => FieldValue::Node(Box::new(decode(kind, raw))),
        FieldType::List { kind, max } => {
            let mut items: Vec<Node> = raw
                .as_array()
                .map(|xs| xs.iter().map(|x| decode(kind, x)).collect())
                .unwrap_or_default();
            if let Some(max) = max {
                items.truncate(max);
            }
            FieldValue::List(items)
        }
        FieldType::Union(union) => decode_union(union, raw),
    }
}

fn decode_elem(elem: Elem, raw: &Value) -> FieldValue {
    match elem {
        Elem::Num => FieldValue::Num(raw.as_f64()),
        Elem::Bool => FieldValue::Bool(raw.as_bool().unwrap_or(false)),
        Elem::Node(kind) => FieldValue::Node(Box::new(decode(kind, raw))),
    }
}

fn decode_union(union: UnionKind, raw: &Value) -> FieldValue {
    let allows = |variant: Variant| union.variants().contains(&variant);
    match raw {
        Value::String(s) if allows(Variant::Str) => FieldValue::Str(s.clone()),
        Value::Number(n) if allows(Variant::Num) => FieldValue::Num(n.as_f64()),
        Value::Object(map) => {
            let name = map.get("kind").and_then(Value::as_str).unwrap_or_default();
            match union.variant_named(name) {
                Some(Variant::Node(kind)) => FieldValue::Node(Box::new(decode(kind, raw))),
                _ => FieldValue::Absent,
            }
        }
        _ => FieldValue::Absent,
    }
}

// ------------------------------- Documents -------------------------------- //

#[derive(Debug, Error)]
pub enum DocError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed document at JSON path {path}: {message}")]
    Parse { path: String, message: String },
}

/// Parse a full setup document from JSON text.
pub fn parse_doc(src: &str) -> Result<Node, DocError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    let value: Value =
        serde_path_to_error::deserialize(de).map_err(|err| DocError::Parse {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        })?;
    Ok(decode(NodeKind::Setup, &value))
}

pub fn load_doc(path: &Path) -> Result<Node, DocError> {
    let src = std::fs::read_to_string(path).map_err(|source| DocError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_doc(&src)
}

pub fn save_doc(path: &Path, node: &Node) -> Result<(), DocError> {
    std::fs::write(path, to_string_pretty(node)).map_err(|source| DocError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_string_pretty(node: &Node) -> String {
    let mut out = serde_json::to_string_pretty(&encode(node)).unwrap_or_default();
    out.push('\n');
    out
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_setup_round_trips() {
        let setup = Node::new(NodeKind::Setup);
        let encoded = encode(&setup);
        let decoded = decode(NodeKind::Setup, &encoded);
        assert_eq!(decoded, setup);
        assert_eq!(encode(&decoded), encoded);
    }

    #[test]
    fn edited_tree_round_trips() {
        let mut setup = Node::new(NodeKind::Setup);
        let geo = setup.get_mut("geometry").and_then(FieldValue::as_node_mut).unwrap();
        geo.choose_variant("scanner", "ECAT");
        geo.choose_variant("phantom", "VoxelizedPhantom");
        let world = geo.get_mut("world").and_then(FieldValue::as_node_mut).unwrap();
        world.choose_variant("shape", "Box");
        *world.get_mut("material").unwrap() = FieldValue::Str("Air".into());

        let encoded = encode(&setup);
        let decoded = decode(NodeKind::Setup, &encoded);
        assert_eq!(decoded, setup);
    }

    #[test]
    fn union_slots_carry_their_discriminator() {
        let mut vol = Node::new(NodeKind::Volume);
        vol.choose_variant("shape", "Box");
        let encoded = encode(&vol);
        assert_eq!(encoded["shape"]["kind"], json!("Box"));
        // plain nested nodes stay untagged
        assert!(encoded["appearance"].get("kind").is_none());
    }

    #[test]
    fn scalar_union_values_encode_bare() {
        let mut acq = Node::new(NodeKind::Acquisition);
        acq.choose_variant("engine_seed", "string");
        *acq.get_mut("engine_seed").unwrap() = FieldValue::Str("auto".into());
        let encoded = encode(&acq);
        assert_eq!(encoded["engine_seed"], json!("auto"));
        assert_eq!(encoded["time_slice"], Value::Null);

        let decoded = decode(NodeKind::Acquisition, &encoded);
        assert_eq!(decoded.get("engine_seed"), Some(&FieldValue::Str("auto".into())));
    }

    #[test]
    fn unknown_discriminator_degrades_to_absent() {
        let raw = json!({ "shape": { "kind": "Dodecahedron", "edge": 4 } });
        let vol = decode(NodeKind::Volume, &raw);
        assert!(vol.get("shape").unwrap().is_absent());
    }

    #[test]
    fn unknown_keys_ignored_and_missing_keys_default() {
        let raw = json!({ "material": "Water", "warp_core": true });
        let vol = decode(NodeKind::Volume, &raw);
        assert_eq!(vol.get("material"), Some(&FieldValue::Str("Water".into())));
        assert!(vol.get("warp_core").is_none());
        assert_eq!(vol.get("name"), Some(&FieldValue::Str(String::new())));
    }

    #[test]
    fn malformed_tuple_is_padded_to_arity() {
        let raw = json!({ "value": [1.5], "unit": "mm" });
        let vec3 = decode(NodeKind::Vec3, &raw);
        match vec3.get("value") {
            Some(FieldValue::Tuple(xs)) => {
                assert_eq!(xs.len(), 3);
                assert_eq!(xs[0], FieldValue::Num(Some(1.5)));
                assert_eq!(xs[1], FieldValue::Num(None));
            }
            other => panic!("unexpected value field: {other:?}"),
        }
    }

    #[test]
    fn bounded_list_truncates_on_decode() {
        let raw = json!({ "cluster": [{}, {}, {}, {}, {}] });
        let ct = decode(NodeKind::CTscanner, &raw);
        match ct.get("cluster") {
            Some(FieldValue::List(items)) => assert_eq!(items.len(), 3),
            other => panic!("unexpected cluster field: {other:?}"),
        }
    }

    #[test]
    fn parse_doc_reports_malformed_json() {
        let err = parse_doc("{ \"geometry\": [ ").unwrap_err();
        assert!(matches!(err, DocError::Parse { .. }));
    }

    #[test]
    fn interfile_pixel_size_holds_value_nodes() {
        let interfile = Node::new(NodeKind::Interfile);
        let encoded = encode(&interfile);
        assert_eq!(encoded["pixel_size"][0]["num"], Value::Null);
        assert_eq!(encoded["pixel_size"][1]["unit"], json!(""));
        let decoded = decode(NodeKind::Interfile, &encoded);
        assert_eq!(decoded, interfile);
    }
}
