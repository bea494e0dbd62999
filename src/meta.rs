//! Static metadata registry for the configuration model.
//!
//! Every node kind in the simulation setup (scanner geometry, physics,
//! digitizer chain, particle source, data output, acquisition) declares its
//! field set here as a static table: name plus type descriptor. The rest of
//! the crate is generic over these tables; construction, rendering, editing,
//! and the document codec all walk descriptors rather than concrete types.
//!
//! Design goals:
//! - One descriptor per field; a node's fields are exactly its declared set.
//! - Tagged unions carry their permissible variants as data, so a generic
//!   editor can offer the choices and construct the picked one.
//! - Unknown names degrade to `None`; nothing here panics.
pub mod geometry;
pub mod physics;
pub mod digitizer;
pub mod source;
pub mod output;
pub mod acquisition;

use std::collections::HashMap;
use once_cell::sync::Lazy;

// ------------------------------ Node kinds -------------------------------- //

/// Every configuration node type in the model. Names (`name()`) double as the
/// discriminator strings in saved documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // document root
    Setup,
    // geometry
    Geometry,
    Scanner,
    CTscanner,
    CylindricalPET,
    CPET,
    ECAT,
    ECATAccel,
    OPET,
    SPECThead,
    Volume,
    VoxelizedPhantom,
    Appearance,
    Box,
    Sphere,
    Cylinder,
    Cone,
    Ellipsoid,
    EllipticalTube,
    Tessellated,
    TetMeshBox,
    TRPD,
    Hexagone,
    Wedge,
    Vec3,
    Value,
    // physics
    Physics,
    CutInRegion,
    Process,
    Model,
    SetE,
    // energy/time distributions
    Flat,
    Gaussian,
    Exponential,
    Manual,
    File,
    // digitizer chain
    Digitizer,
    Adder,
    Readout,
    Blurring,
    InverseSquareLaw,
    LinearLaw,
    CrystalBlurring,
    LocalBlurring,
    TransferEfficiency,
    LightYield,
    IntrinsicResolutionBlurring,
    QuantumEfficiency,
    Spblurring,
    Calibration,
    Crosstalk,
    Thresholder,
    Upholder,
    Window,
    SigmoidalThresholder,
    TimeResolution,
    Noise,
    LocalEfficiency,
    Buffer,
    Pileup,
    DeadTime,
    Coincidences,
    CoincidenceSorter,
    // particle source
    ChooseSource,
    Source,
    VoxelizedSource,
    LinearTranslator,
    RangeTranslator,
    // data output
    DataOutput,
    Ascii,
    RootOutput,
    Interfile,
    Sinogram,
    Ecat7,
    Lmf,
    ImageCT,
    // run control
    Acquisition,
    MaterialDatabase,
}

impl NodeKind {
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::Setup,
        NodeKind::Geometry,
        NodeKind::Scanner,
        NodeKind::CTscanner,
        NodeKind::CylindricalPET,
        NodeKind::CPET,
        NodeKind::ECAT,
        NodeKind::ECATAccel,
        NodeKind::OPET,
        NodeKind::SPECThead,
        NodeKind::Volume,
        NodeKind::VoxelizedPhantom,
        NodeKind::Appearance,
        NodeKind::Box,
        NodeKind::Sphere,
        NodeKind::Cylinder,
        NodeKind::Cone,
        NodeKind::Ellipsoid,
        NodeKind::EllipticalTube,
        NodeKind::Tessellated,
        NodeKind::TetMeshBox,
        NodeKind::TRPD,
        NodeKind::Hexagone,
        NodeKind::Wedge,
        NodeKind::Vec3,
        NodeKind::Value,
        NodeKind::Physics,
        NodeKind::CutInRegion,
        NodeKind::Process,
        NodeKind::Model,
        NodeKind::SetE,
        NodeKind::Flat,
        NodeKind::Gaussian,
        NodeKind::Exponential,
        NodeKind::Manual,
        NodeKind::File,
        NodeKind::Digitizer,
        NodeKind::Adder,
        NodeKind::Readout,
        NodeKind::Blurring,
        NodeKind::InverseSquareLaw,
        NodeKind::LinearLaw,
        NodeKind::CrystalBlurring,
        NodeKind::LocalBlurring,
        NodeKind::TransferEfficiency,
        NodeKind::LightYield,
        NodeKind::IntrinsicResolutionBlurring,
        NodeKind::QuantumEfficiency,
        NodeKind::Spblurring,
        NodeKind::Calibration,
        NodeKind::Crosstalk,
        NodeKind::Thresholder,
        NodeKind::Upholder,
        NodeKind::Window,
        NodeKind::SigmoidalThresholder,
        NodeKind::TimeResolution,
        NodeKind::Noise,
        NodeKind::LocalEfficiency,
        NodeKind::Buffer,
        NodeKind::Pileup,
        NodeKind::DeadTime,
        NodeKind::Coincidences,
        NodeKind::CoincidenceSorter,
        NodeKind::ChooseSource,
        NodeKind::Source,
        NodeKind::VoxelizedSource,
        NodeKind::LinearTranslator,
        NodeKind::RangeTranslator,
        NodeKind::DataOutput,
        NodeKind::Ascii,
        NodeKind::RootOutput,
        NodeKind::Interfile,
        NodeKind::Sinogram,
        NodeKind::Ecat7,
        NodeKind::Lmf,
        NodeKind::ImageCT,
        NodeKind::Acquisition,
        NodeKind::MaterialDatabase,
    ];

    /// The discriminator string. These are the original type names verbatim;
    /// `RootOutput` keeps the spelling `Root` (the CERN-ROOT output block).
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Setup => "Setup",
            NodeKind::Geometry => "Geometry",
            NodeKind::Scanner => "Scanner",
            NodeKind::CTscanner => "CTscanner",
            NodeKind::CylindricalPET => "CylindricalPET",
            NodeKind::CPET => "CPET",
            NodeKind::ECAT => "ECAT",
            NodeKind::ECATAccel => "ECATAccel",
            NodeKind::OPET => "OPET",
            NodeKind::SPECThead => "SPECThead",
            NodeKind::Volume => "Volume",
            NodeKind::VoxelizedPhantom => "VoxelizedPhantom",
            NodeKind::Appearance => "Appearance",
            NodeKind::Box => "Box",
            NodeKind::Sphere => "Sphere",
            NodeKind::Cylinder => "Cylinder",
            NodeKind::Cone => "Cone",
            NodeKind::Ellipsoid => "Ellipsoid",
            NodeKind::EllipticalTube => "EllipticalTube",
            NodeKind::Tessellated => "Tessellated",
            NodeKind::TetMeshBox => "TetMeshBox",
            NodeKind::TRPD => "TRPD",
            NodeKind::Hexagone => "Hexagone",
            NodeKind::Wedge => "Wedge",
            NodeKind::Vec3 => "Vec3",
            NodeKind::Value => "Value",
            NodeKind::Physics => "Physics",
            NodeKind::CutInRegion => "CutInRegion",
            NodeKind::Process => "Process",
            NodeKind::Model => "Model",
            NodeKind::SetE => "SetE",
            NodeKind::Flat => "Flat",
            NodeKind::Gaussian => "Gaussian",
            NodeKind::Exponential => "Exponential",
            NodeKind::Manual => "Manual",
            NodeKind::File => "File",
            NodeKind::Digitizer => "Digitizer",
            NodeKind::Adder => "Adder",
            NodeKind::Readout => "Readout",
            NodeKind::Blurring => "Blurring",
            NodeKind::InverseSquareLaw => "InverseSquareLaw",
            NodeKind::LinearLaw => "LinearLaw",
            NodeKind::CrystalBlurring => "CrystalBlurring",
            NodeKind::LocalBlurring => "LocalBlurring",
            NodeKind::TransferEfficiency => "TransferEfficiency",
            NodeKind::LightYield => "LightYield",
            NodeKind::IntrinsicResolutionBlurring => "IntrinsicResolutionBlurring",
            NodeKind::QuantumEfficiency => "QuantumEfficiency",
            NodeKind::Spblurring => "Spblurring",
            NodeKind::Calibration => "Calibration",
            NodeKind::Crosstalk => "Crosstalk",
            NodeKind::Thresholder => "Thresholder",
            NodeKind::Upholder => "Upholder",
            NodeKind::Window => "Window",
            NodeKind::SigmoidalThresholder => "SigmoidalThresholder",
            NodeKind::TimeResolution => "TimeResolution",
            NodeKind::Noise => "Noise",
            NodeKind::LocalEfficiency => "LocalEfficiency",
            NodeKind::Buffer => "Buffer",
            NodeKind::Pileup => "Pileup",
            NodeKind::DeadTime => "DeadTime",
            NodeKind::Coincidences => "Coincidences",
            NodeKind::CoincidenceSorter => "CoincidenceSorter",
            NodeKind::ChooseSource => "ChooseSource",
            NodeKind::Source => "Source",
            NodeKind::VoxelizedSource => "VoxelizedSource",
            NodeKind::LinearTranslator => "LinearTranslator",
            NodeKind::RangeTranslator => "RangeTranslator",
            NodeKind::DataOutput => "DataOutput",
            NodeKind::Ascii => "Ascii",
            NodeKind::RootOutput => "Root",
            NodeKind::Interfile => "Interfile",
            NodeKind::Sinogram => "Sinogram",
            NodeKind::Ecat7 => "Ecat7",
            NodeKind::Lmf => "Lmf",
            NodeKind::ImageCT => "ImageCT",
            NodeKind::Acquisition => "Acquisition",
            NodeKind::MaterialDatabase => "MaterialDatabase",
        }
    }

    /// Inverse of `name()`. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        KIND_BY_NAME.get(name).copied()
    }

    /// The declared field set, in declaration order.
    pub fn fields(self) -> &'static [FieldDecl] {
        geometry::fields(self)
            .or_else(|| physics::fields(self))
            .or_else(|| digitizer::fields(self))
            .or_else(|| source::fields(self))
            .or_else(|| output::fields(self))
            .or_else(|| acquisition::fields(self))
            .unwrap_or(&[])
    }

    /// Descriptor lookup by field name. Unknown names yield `None`.
    pub fn field_named(self, name: &str) -> Option<&'static FieldDecl> {
        self.fields().iter().find(|d| d.name == name)
    }
}

static KIND_BY_NAME: Lazy<HashMap<&'static str, NodeKind>> =
    Lazy::new(|| NodeKind::ALL.iter().map(|&k| (k.name(), k)).collect());

// ---------------------------- Field descriptors --------------------------- //

/// Element type of a fixed-size tuple field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elem {
    Num,
    Bool,
    Node(NodeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Str,
    Num,
    Bool,
    /// Homogeneous fixed-arity tuple, e.g. `[number; 3]` or `[Value; 2]`.
    Tuple(Elem, usize),
    Node(NodeKind),
    /// Ordered list of nodes. `max` bounds the repeat count where the model
    /// declares one (detector clusters and crystal layers).
    List { kind: NodeKind, max: Option<usize> },
    Union(UnionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub ty: FieldType,
    /// Boolean switches that start on (the adder and readout are always
    /// inserted into the digitizer chain).
    pub on_by_default: bool,
}

pub const fn field(name: &'static str, ty: FieldType) -> FieldDecl {
    FieldDecl { name, ty, on_by_default: false }
}

pub const fn flag_on(name: &'static str) -> FieldDecl {
    FieldDecl { name, ty: FieldType::Bool, on_by_default: true }
}

pub const fn list(name: &'static str, kind: NodeKind) -> FieldDecl {
    FieldDecl { name, ty: FieldType::List { kind, max: None }, on_by_default: false }
}

pub const fn list_max(name: &'static str, kind: NodeKind, max: usize) -> FieldDecl {
    FieldDecl { name, ty: FieldType::List { kind, max: Some(max) }, on_by_default: false }
}

// ------------------------------ Tagged unions ----------------------------- //

/// A permissible concrete choice for a union field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Node(NodeKind),
    Num,
    Str,
    /// An explicit "leave unset" choice (the local-efficiency levels).
    Unset,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Node(k) => k.name(),
            Variant::Num => "number",
            Variant::Str => "string",
            Variant::Unset => "undefined",
        }
    }
}

/// The union families of the model. Each pairs a display name with the
/// enumerated set of variants a generic editor may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnionKind {
    /// Scanner system flavors.
    System,
    /// Plain or voxelized phantom.
    Phantom,
    /// Volume solid.
    Shape,
    /// Noise spectra.
    Distribution,
    /// Distribution with an explicit unset choice.
    OptionalDistribution,
    /// Energy-blurring law.
    BlurringLaw,
    /// Voxel-to-activity translator.
    Translator,
    /// Analytic or voxelized source.
    SourceChoice,
    /// Quantum efficiency: one coefficient or a lookup-table file.
    Efficiency,
    /// Acquisition slicing: a timed `Value` or a free-form spec.
    TimeSlice,
    /// RNG seed: a number or a named mode ("auto", "default").
    EngineSeed,
}

impl UnionKind {
    pub const ALL: &'static [UnionKind] = &[
        UnionKind::System,
        UnionKind::Phantom,
        UnionKind::Shape,
        UnionKind::Distribution,
        UnionKind::OptionalDistribution,
        UnionKind::BlurringLaw,
        UnionKind::Translator,
        UnionKind::SourceChoice,
        UnionKind::Efficiency,
        UnionKind::TimeSlice,
        UnionKind::EngineSeed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnionKind::System => "System",
            UnionKind::Phantom => "Phantom",
            UnionKind::Shape => "Shape",
            UnionKind::Distribution => "Distribution",
            UnionKind::OptionalDistribution => "Distribution",
            UnionKind::BlurringLaw => "BlurringLaw",
            UnionKind::Translator => "Translator",
            UnionKind::SourceChoice => "Source",
            UnionKind::Efficiency => "Efficiency",
            UnionKind::TimeSlice => "TimeSlice",
            UnionKind::EngineSeed => "EngineSeed",
        }
    }

    pub fn variants(self) -> &'static [Variant] {
        use NodeKind as K;
        use Variant::*;
        match self {
            UnionKind::System => &[
                Node(K::Scanner),
                Node(K::CTscanner),
                Node(K::CylindricalPET),
                Node(K::CPET),
                Node(K::ECAT),
                Node(K::ECATAccel),
                Node(K::OPET),
                Node(K::SPECThead),
            ],
            UnionKind::Phantom => &[Node(K::Volume), Node(K::VoxelizedPhantom)],
            UnionKind::Shape => &[
                Node(K::Box),
                Node(K::Sphere),
                Node(K::Cylinder),
                Node(K::Cone),
                Node(K::Ellipsoid),
                Node(K::EllipticalTube),
                Node(K::Tessellated),
                Node(K::TetMeshBox),
                Node(K::TRPD),
                Node(K::Hexagone),
                Node(K::Wedge),
            ],
            UnionKind::Distribution => &[
                Node(K::Flat),
                Node(K::Gaussian),
                Node(K::Exponential),
                Node(K::Manual),
                Node(K::File),
            ],
            UnionKind::OptionalDistribution => &[
                Unset,
                Node(K::Flat),
                Node(K::Gaussian),
                Node(K::Exponential),
                Node(K::Manual),
                Node(K::File),
            ],
            UnionKind::BlurringLaw => &[Node(K::InverseSquareLaw), Node(K::LinearLaw)],
            UnionKind::Translator => &[Node(K::LinearTranslator), Node(K::RangeTranslator)],
            UnionKind::SourceChoice => &[Node(K::Source), Node(K::VoxelizedSource)],
            UnionKind::Efficiency => &[Num, Str],
            UnionKind::TimeSlice => &[Node(K::Value), Str],
            UnionKind::EngineSeed => &[Num, Str],
        }
    }

    /// Variant lookup by discriminator. Unknown names yield `None`; the
    /// caller falls back to the unset state.
    pub fn variant_named(self, name: &str) -> Option<Variant> {
        self.variants().iter().copied().find(|v| v.name() == name)
    }
}

// --------------------------------- Tests ---------------------------------- //

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn kind_names_unique_and_reversible() {
        let mut seen = HashSet::new();
        for &kind in NodeKind::ALL {
            assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
            assert_eq!(NodeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(NodeKind::from_name("Phaser"), None);
    }

    #[test]
    fn every_kind_declares_fields() {
        for &kind in NodeKind::ALL {
            assert!(!kind.fields().is_empty(), "{} declares no fields", kind.name());
        }
    }

    #[test]
    fn declared_field_names_unique_per_kind() {
        for &kind in NodeKind::ALL {
            let mut seen = HashSet::new();
            for decl in kind.fields() {
                assert!(seen.insert(decl.name), "{} repeats {}", kind.name(), decl.name);
            }
        }
    }

    #[test]
    fn field_lookup_degrades_silently() {
        assert!(NodeKind::Volume.field_named("shape").is_some());
        assert!(NodeKind::Volume.field_named("warp_core").is_none());
    }

    #[test]
    fn union_variants_resolve_by_name() {
        for &u in UnionKind::ALL {
            for &v in u.variants() {
                assert_eq!(u.variant_named(v.name()), Some(v), "{} / {}", u.name(), v.name());
            }
            assert_eq!(u.variant_named("Phaser"), None);
        }
    }

    #[test]
    fn union_variant_kinds_are_registered() {
        for &u in UnionKind::ALL {
            for &v in u.variants() {
                if let Variant::Node(k) = v {
                    assert_eq!(NodeKind::from_name(k.name()), Some(k));
                }
            }
        }
    }

    #[test]
    fn on_by_default_only_marks_booleans() {
        for &kind in NodeKind::ALL {
            for decl in kind.fields() {
                if decl.on_by_default {
                    assert_eq!(decl.ty, FieldType::Bool, "{}/{}", kind.name(), decl.name);
                }
            }
        }
    }
}
