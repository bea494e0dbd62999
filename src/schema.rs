//! JSON-Schema-ish description of the model.
//!
//! Walks the same descriptor tables the editor walks: every kind becomes an
//! object schema under `$defs`, unions become `oneOf` over variant
//! references plus a null arm for the unchosen state, tuples become
//! exact-arity `prefixItems`. Output is deterministic (declaration order).

use serde_json::{json, Map, Value};

use crate::meta::{Elem, FieldType, NodeKind, Variant};

/// Schema for the whole model, rooted at the setup document.
pub fn model_schema() -> Value {
    let mut defs = Map::new();
    for &kind in NodeKind::ALL {
        defs.insert(kind.name().to_string(), kind_schema(kind));
    }
    json!({
        "$ref": "#/$defs/Setup",
        "$defs": defs,
    })
}

/// Object schema for a single kind.
pub fn kind_schema(kind: NodeKind) -> Value {
    let mut props = Map::new();
    for decl in kind.fields() {
        props.insert(decl.name.to_string(), field_schema(&decl.ty));
    }
    json!({
        "title": kind.name(),
        "type": "object",
        "properties": props,
    })
}

fn field_schema(ty: &FieldType) -> Value {
    match *ty {
        FieldType::Str => json!({ "type": "string" }),
        // numbers start unset, so null is always admissible
        FieldType::Num => json!({ "type": ["number", "null"] }),
        FieldType::Bool => json!({ "type": "boolean" }),
        FieldType::Tuple(elem, arity) => json!({
            "type": "array",
            "prefixItems": (0..arity).map(|_| elem_schema(elem)).collect::<Vec<_>>(),
            "minItems": arity,
            "maxItems": arity,
        }),
        FieldType::Node(kind) => kind_ref(kind),
        FieldType::List { kind, max } => {
            let mut schema = json!({
                "type": "array",
                "items": kind_ref(kind),
            });
            if let Some(max) = max {
                schema["maxItems"] = Value::from(max);
            }
            schema
        }
        FieldType::Union(union) => {
            let mut arms = Vec::new();
            for &variant in union.variants() {
                match variant {
                    Variant::Node(kind) => arms.push(kind_ref(kind)),
                    Variant::Num => arms.push(json!({ "type": ["number", "null"] })),
                    Variant::Str => arms.push(json!({ "type": "string" })),
                    // folded into the null arm below
                    Variant::Unset => {}
                }
            }
            // the unchosen state is always representable
            arms.push(json!({ "type": "null" }));
            json!({ "oneOf": arms })
        }
    }
}

fn elem_schema(elem: Elem) -> Value {
    match elem {
        Elem::Num => json!({ "type": ["number", "null"] }),
        Elem::Bool => json!({ "type": "boolean" }),
        Elem::Node(kind) => kind_ref(kind),
    }
}

fn kind_ref(kind: NodeKind) -> Value {
    json!({ "$ref": format!("#/$defs/{}", kind.name()) })
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_schema_defines_every_kind() {
        let schema = model_schema();
        let defs = schema["$defs"].as_object().unwrap();
        assert_eq!(defs.len(), NodeKind::ALL.len());
        assert_eq!(schema["$ref"], "#/$defs/Setup");
        assert!(defs.contains_key("CylindricalPET"));
        assert!(defs.contains_key("Root"));
    }

    #[test]
    fn tuples_carry_exact_arity() {
        let vec3 = kind_schema(NodeKind::Vec3);
        assert_eq!(vec3["properties"]["value"]["minItems"], 3);
        assert_eq!(vec3["properties"]["value"]["maxItems"], 3);
        let ascii = kind_schema(NodeKind::Ascii);
        assert_eq!(ascii["properties"]["coincidence_mask"]["maxItems"], 6);
    }

    #[test]
    fn unions_enumerate_variants_plus_null() {
        let vol = kind_schema(NodeKind::Volume);
        let arms = vol["properties"]["shape"]["oneOf"].as_array().unwrap();
        // 11 solids plus the unchosen arm
        assert_eq!(arms.len(), 12);
        assert_eq!(arms[0]["$ref"], "#/$defs/Box");
        assert_eq!(arms[11], json!({ "type": "null" }));
    }

    #[test]
    fn bounded_lists_carry_max_items() {
        let ct = kind_schema(NodeKind::CTscanner);
        assert_eq!(ct["properties"]["cluster"]["maxItems"], 3);
        let physics = kind_schema(NodeKind::Physics);
        assert!(physics["properties"]["process"].get("maxItems").is_none());
    }

    #[test]
    fn properties_follow_declaration_order() {
        let vol = kind_schema(NodeKind::Volume);
        let names: Vec<&str> = vol["properties"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["name", "shape", "material", "attach", "appearance"]);
    }
}
