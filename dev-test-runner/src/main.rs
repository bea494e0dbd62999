//! Model conformance sweep.
//!
//! Exercises every registered kind against the invariants the editor relies
//! on: registry agreement, default construction, the full variant table, and
//! document round-trips. Exits non-zero on the first failing group.

use colored::Colorize;

use simset::doc;
use simset::edit::{apply, EditOp, FieldPath};
use simset::meta::{FieldType, NodeKind, Variant};
use simset::node::{FieldValue, Node};

fn main() {
    let groups: Vec<(&str, Vec<String>)> = vec![
        ("registry names", registry_names()),
        ("default construction", default_construction()),
        ("variant sweep", variant_sweep()),
        ("document round-trips", round_trips()),
    ];

    let mut failed = 0usize;
    for (label, problems) in groups {
        if problems.is_empty() {
            println!("{} {label}", "ok".green());
        } else {
            failed += problems.len();
            println!("{} {label}", "FAILED".red().bold());
            for problem in &problems {
                println!("  - {problem}");
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} problem(s)");
        std::process::exit(1);
    }
}

/// Names are unique and `from_name` inverts `name`.
fn registry_names() -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for &kind in NodeKind::ALL {
        if !seen.insert(kind.name()) {
            problems.push(format!("duplicate name {}", kind.name()));
        }
        if NodeKind::from_name(kind.name()) != Some(kind) {
            problems.push(format!("{} does not round-trip through from_name", kind.name()));
        }
    }
    problems
}

/// A default instance's field set equals its declarations, in order.
fn default_construction() -> Vec<String> {
    let mut problems = Vec::new();
    for &kind in NodeKind::ALL {
        let node = Node::new(kind);
        let declared: Vec<&str> = kind.fields().iter().map(|d| d.name).collect();
        let actual: Vec<&str> = node.field_names().collect();
        if declared != actual {
            problems.push(format!(
                "{}: declared {declared:?} but constructed {actual:?}",
                kind.name()
            ));
        }
    }
    problems
}

/// Every variant of every union field constructs a value of the right shape,
/// and choosing never disturbs sibling fields.
fn variant_sweep() -> Vec<String> {
    let mut problems = Vec::new();
    for &kind in NodeKind::ALL {
        for decl in kind.fields() {
            let FieldType::Union(union) = decl.ty else {
                continue;
            };
            for &variant in union.variants() {
                let mut host = Node::new(kind);
                let before = host.clone();
                let Some(chosen) = host.choose_variant(decl.name, variant.name()) else {
                    problems.push(format!("{}/{}: choose failed", kind.name(), decl.name));
                    continue;
                };
                let shape_ok = match variant {
                    Variant::Node(want) => {
                        matches!(chosen, FieldValue::Node(n) if n.kind() == want)
                    }
                    Variant::Num => matches!(chosen, FieldValue::Num(None)),
                    Variant::Str => matches!(chosen, FieldValue::Str(s) if s.is_empty()),
                    Variant::Unset => chosen.is_absent(),
                };
                if !shape_ok {
                    problems.push(format!(
                        "{}/{} = {}: wrong shape",
                        kind.name(),
                        decl.name,
                        variant.name()
                    ));
                }
                for (name, value) in before.iter() {
                    if name != decl.name && host.get(name) != Some(value) {
                        problems.push(format!(
                            "{}/{} = {}: sibling {name} changed",
                            kind.name(),
                            decl.name,
                            variant.name()
                        ));
                    }
                }
            }
            // a bogus discriminator clears the slot
            let mut host = Node::new(kind);
            match host.choose_variant(decl.name, "NoSuchVariant") {
                Some(v) if v.is_absent() => {}
                _ => problems.push(format!(
                    "{}/{}: bogus discriminator did not clear",
                    kind.name(),
                    decl.name
                )),
            }
        }
    }
    problems
}

/// encode → decode → encode is a fixpoint, for the default document and for
/// one edited through the path protocol.
fn round_trips() -> Vec<String> {
    let mut problems = Vec::new();

    let default_setup = Node::new(NodeKind::Setup);
    check_round_trip("default document", &default_setup, &mut problems);

    let mut edited = Node::new(NodeKind::Setup);
    let chooses = [
        ("/geometry/scanner", "CylindricalPET"),
        ("/geometry/phantom", "VoxelizedPhantom"),
        ("/geometry/world/shape", "Box"),
        ("/digitizer/blurring/law", "LinearLaw"),
        ("/digitizer/noise/deltaT_distribution", "Gaussian"),
        ("/source/choose_source", "Source"),
        ("/acquisition/engine_seed", "number"),
        ("/acquisition/time_slice", "Value"),
    ];
    for (path, variant) in chooses {
        let path = FieldPath::parse(path);
        if let Err(err) = apply(&mut edited, &path, EditOp::Choose(variant.into())) {
            problems.push(format!("choose {variant} at {path}: {err}"));
        }
    }
    let edits = [
        ("/geometry/world/name", EditOp::SetStr("world".into())),
        ("/geometry/world/shape/size/value/0", EditOp::SetNum(Some(400.0))),
        ("/acquisition/engine_seed", EditOp::SetNum(Some(123456.0))),
        ("/digitizer/window", EditOp::Push),
        ("/physics/process/0/add", EditOp::SetBool(true)),
    ];
    for (path, op) in edits {
        let path = FieldPath::parse(path);
        if let Err(err) = apply(&mut edited, &path, op.clone()) {
            problems.push(format!("apply {op:?} at {path}: {err}"));
        }
    }
    check_round_trip("edited document", &edited, &mut problems);

    problems
}

fn check_round_trip(label: &str, setup: &Node, problems: &mut Vec<String>) {
    let text = doc::to_string_pretty(setup);
    match doc::parse_doc(&text) {
        Ok(reread) => {
            if &reread != setup {
                problems.push(format!("{label}: decoded tree differs"));
            }
            let reencoded: serde_json::Value = doc::encode(&reread);
            if reencoded != doc::encode(setup) {
                problems.push(format!("{label}: re-encoded JSON differs"));
            }
        }
        Err(err) => problems.push(format!("{label}: {err}")),
    }
}
