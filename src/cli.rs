//! Minimal CLI: new | schema | render | edit
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::doc;
use crate::edit::{apply, EditOp, FieldPath, Place};
use crate::meta::NodeKind;
use crate::node::{FieldValue, Node};
use crate::render::Renderer;
use crate::schema;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build, inspect, and edit simulation setup documents
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// write a default setup document
    New(NewDoc),
    /// print the JSON-schema-ish view of the model
    Schema(SchemaOut),
    /// print the reflective form view of a document
    Render(RenderView),
    /// apply edits to a document and write it back
    Edit(EditDoc),
}

#[derive(Args, Debug, Clone)]
struct DocInput {
    /// setup document to operate on; omitted → a fresh default document
    #[arg(long, short)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct NewDoc {
    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaOut {
    /// describe a single kind instead of the whole model
    #[arg(long)]
    kind: Option<String>,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderView {
    #[command(flatten)]
    input: DocInput,

    /// render only the subtree at this path (e.g. /geometry/scanner)
    #[arg(long)]
    at: Option<String>,

    /// plain text, no ANSI colors
    #[arg(long)]
    plain: bool,
}

#[derive(Args, Debug)]
struct EditDoc {
    #[command(flatten)]
    input: DocInput,

    /// choose a union variant: PATH=VARIANT (applied first)
    #[arg(long = "choose", value_name = "PATH=VARIANT")]
    choose: Vec<String>,

    /// append a default element to a list field
    #[arg(long = "push", value_name = "PATH")]
    push: Vec<String>,

    /// assign a primitive: PATH=VALUE
    #[arg(long = "set", value_name = "PATH=VALUE")]
    set: Vec<String>,

    /// remove a list element by path (e.g. /digitizer/window/1)
    #[arg(long = "remove", value_name = "PATH")]
    remove: Vec<String>,

    /// output .json file (defaults to --input, stdout if neither)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl DocInput {
    fn load(&self) -> Result<Node> {
        match &self.input {
            Some(path) => doc::load_doc(path)
                .with_context(|| format!("failed to load {}", path.display())),
            None => Ok(Node::new(NodeKind::Setup)),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::New(target) => {
                let setup = Node::new(NodeKind::Setup);
                write_or_print(target.out.as_ref(), &doc::to_string_pretty(&setup))
            }
            Command::Schema(target) => {
                let schema = match &target.kind {
                    Some(name) => match NodeKind::from_name(name) {
                        Some(kind) => schema::kind_schema(kind),
                        None => bail!("unknown kind: {name}"),
                    },
                    None => schema::model_schema(),
                };
                let mut text = serde_json::to_string_pretty(&schema)?;
                text.push('\n');
                write_or_print(target.out.as_ref(), &text)
            }
            Command::Render(target) => {
                let setup = target.input.load()?;
                let renderer = if target.plain {
                    Renderer::plain()
                } else {
                    Renderer::new()
                };
                let view = match &target.at {
                    Some(at) => {
                        let path = FieldPath::parse(at);
                        match path.resolve(&setup) {
                            Some(Place::Node(n)) => renderer.render(n),
                            Some(Place::Value(v)) => renderer.render_value(v),
                            None => bail!("no such location: {path}"),
                        }
                    }
                    None => renderer.render(&setup),
                };
                print!("{view}");
                Ok(())
            }
            Command::Edit(target) => {
                let mut setup = target.input.load()?;

                for entry in &target.choose {
                    let (path, variant) = split_assignment(entry)?;
                    apply(&mut setup, &path, EditOp::Choose(variant.to_string()))
                        .with_context(|| format!("--choose {entry}"))?;
                }
                for entry in &target.push {
                    let path = FieldPath::parse(entry);
                    apply(&mut setup, &path, EditOp::Push)
                        .with_context(|| format!("--push {entry}"))?;
                }
                for entry in &target.set {
                    let (path, raw) = split_assignment(entry)?;
                    let op = parse_set(&setup, &path, raw)?;
                    apply(&mut setup, &path, op).with_context(|| format!("--set {entry}"))?;
                }
                for entry in &target.remove {
                    let path = FieldPath::parse(entry);
                    apply(&mut setup, &path, EditOp::Remove)
                        .with_context(|| format!("--remove {entry}"))?;
                }

                match target.out.as_ref().or(target.input.input.as_ref()) {
                    Some(path) => doc::save_doc(path, &setup)
                        .with_context(|| format!("failed to save {}", path.display())),
                    None => {
                        print!("{}", doc::to_string_pretty(&setup));
                        Ok(())
                    }
                }
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn split_assignment(entry: &str) -> Result<(FieldPath, &str)> {
    let (path, value) = entry
        .split_once('=')
        .with_context(|| format!("expected PATH=VALUE, got {entry:?}"))?;
    Ok((FieldPath::parse(path), value))
}

/// Type-directed parse of a `--set` value: the addressed field decides
/// whether the text is a string, a number (`null` clears), or a boolean.
fn parse_set(setup: &Node, path: &FieldPath, raw: &str) -> Result<EditOp> {
    let current = path
        .resolve(setup)
        .and_then(Place::as_value)
        .with_context(|| format!("no such field: {path}"))?;
    Ok(match current {
        FieldValue::Str(_) => EditOp::SetStr(raw.to_string()),
        FieldValue::Num(_) if raw == "null" => EditOp::SetNum(None),
        FieldValue::Num(_) => EditOp::SetNum(Some(
            raw.parse()
                .with_context(|| format!("{path} expects a number, got {raw:?}"))?,
        )),
        FieldValue::Bool(_) => EditOp::SetBool(
            raw.parse()
                .with_context(|| format!("{path} expects true or false, got {raw:?}"))?,
        ),
        FieldValue::Absent => bail!("no variant chosen at {path}"),
        _ => bail!("{path} is not a primitive field"),
    })
}

fn write_or_print(out: Option<&PathBuf>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}
