//! Reflective form renderer.
//!
//! Walks an instance with nothing but its declared metadata: primitives
//! print their current value, nested nodes indent and recurse, lists render
//! indexed entries, and union slots either show the chosen variant's form or
//! enumerate the permissible choices. Rendering never mutates the tree and
//! handles arbitrary nesting depth.

use colored::Colorize;

use crate::meta::{FieldDecl, FieldType, NodeKind, UnionKind};
use crate::node::{FieldValue, Node};

const INDENT: &str = "  ";

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer { color: true }
    }

    /// Uncolored output, for piping and for tests.
    pub fn plain() -> Renderer {
        Renderer { color: false }
    }

    /// Render a whole form: kind header plus every declared field.
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        out.push_str(&self.kind(node.kind()));
        out.push('\n');
        self.node(&mut out, node, 1);
        out
    }

    /// Render a bare value, as resolved by a path (list elements, tuple
    /// components, union slots).
    pub fn render_value(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Node(n) => self.render(n),
            FieldValue::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("[{i}] {}\n", self.kind(item.kind())));
                    self.node(&mut out, item, 1);
                }
                out
            }
            other => format!("{}\n", scalar(other)),
        }
    }

    fn node(&self, out: &mut String, node: &Node, depth: usize) {
        for decl in node.kind().fields() {
            let Some(value) = node.get(decl.name) else {
                continue;
            };
            self.field(out, decl, value, depth);
        }
    }

    fn field(&self, out: &mut String, decl: &FieldDecl, value: &FieldValue, depth: usize) {
        let pad = INDENT.repeat(depth);
        let name = self.field_name(decl.name);
        match value {
            FieldValue::Node(n) => {
                out.push_str(&format!("{pad}{name}: {}\n", self.kind(n.kind())));
                self.node(out, n, depth + 1);
            }
            FieldValue::List(items) => {
                let bound = match decl.ty {
                    FieldType::List { max: Some(max), .. } => format!(" (max {max})"),
                    _ => String::new(),
                };
                out.push_str(&format!("{pad}{name}{bound}:\n"));
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!(
                        "{pad}{INDENT}[{i}] {}\n",
                        self.kind(item.kind())
                    ));
                    self.node(out, item, depth + 2);
                }
            }
            FieldValue::Tuple(xs) => {
                if xs.iter().any(|x| matches!(x, FieldValue::Node(_))) {
                    out.push_str(&format!("{pad}{name}:\n"));
                    for (i, x) in xs.iter().enumerate() {
                        match x {
                            FieldValue::Node(n) => {
                                out.push_str(&format!(
                                    "{pad}{INDENT}[{i}] {}\n",
                                    self.kind(n.kind())
                                ));
                                self.node(out, n, depth + 2);
                            }
                            other => out.push_str(&format!(
                                "{pad}{INDENT}[{i}] {}\n",
                                scalar(other)
                            )),
                        }
                    }
                } else {
                    let parts: Vec<String> = xs.iter().map(scalar).collect();
                    out.push_str(&format!("{pad}{name}: [{}]\n", parts.join(", ")));
                }
            }
            FieldValue::Absent => match decl.ty {
                FieldType::Union(union) => {
                    out.push_str(&format!(
                        "{pad}{name}: ({}) {}\n",
                        union.name(),
                        self.choices(union)
                    ));
                }
                _ => out.push_str(&format!("{pad}{name}: null\n")),
            },
            scalar_value => {
                out.push_str(&format!("{pad}{name}: {}\n", scalar(scalar_value)));
            }
        }
    }

    fn choices(&self, union: UnionKind) -> String {
        let names: Vec<&str> = union.variants().iter().map(|v| v.name()).collect();
        let listing = format!("choose one of: {}", names.join(" | "));
        if self.color {
            listing.yellow().to_string()
        } else {
            listing
        }
    }

    fn kind(&self, kind: NodeKind) -> String {
        if self.color {
            kind.name().green().bold().to_string()
        } else {
            kind.name().to_string()
        }
    }

    fn field_name(&self, name: &str) -> String {
        if self.color {
            name.cyan().to_string()
        } else {
            name.to_string()
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

/// Scalar display: quoted strings, `null` for unset numbers, bare booleans.
fn scalar(value: &FieldValue) -> String {
    match value {
        FieldValue::Str(s) => format!("{s:?}"),
        FieldValue::Num(Some(x)) => format!("{x}"),
        FieldValue::Num(None) => "null".to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Absent => "null".to_string(),
        other => format!("{other:?}"),
    }
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_union_lists_its_choices() {
        let vol = Node::new(NodeKind::Volume);
        let view = Renderer::plain().render(&vol);
        assert!(view.contains("shape: (Shape) choose one of: Box | Sphere"));
        assert!(view.contains("Wedge"));
    }

    #[test]
    fn chosen_variant_renders_its_own_form() {
        let mut vol = Node::new(NodeKind::Volume);
        vol.choose_variant("shape", "Box");
        let view = Renderer::plain().render(&vol);
        assert!(view.contains("shape: Box"));
        assert!(view.contains("size: Vec3"));
        assert!(view.contains("value: [null, null, null]"));
    }

    #[test]
    fn nesting_indents_one_level_per_depth() {
        let geo = Node::new(NodeKind::Geometry);
        let view = Renderer::plain().render(&geo);
        assert!(view.contains("\n  world: Volume\n"));
        assert!(view.contains("\n    name: \"\"\n"));
        assert!(view.contains("\n    appearance: Appearance\n"));
        assert!(view.contains("\n      visible: false\n"));
    }

    #[test]
    fn lists_render_indexed_entries_with_bounds() {
        let ct = Node::new(NodeKind::CTscanner);
        let view = Renderer::plain().render(&ct);
        assert!(view.contains("cluster (max 3):"));
        assert!(view.contains("[0] Volume"));
    }

    #[test]
    fn rendering_does_not_mutate() {
        let mut acq = Node::new(NodeKind::Acquisition);
        acq.choose_variant("time_slice", "Value");
        let before = acq.clone();
        let _ = Renderer::plain().render(&acq);
        assert_eq!(acq, before);
    }
}
