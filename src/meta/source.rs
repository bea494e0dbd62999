//! Particle-source tables: the source selector, the analytic GPS-style
//! source, the voxelized source, and its activity translators.

use super::{field, FieldDecl, FieldType::*, NodeKind as K, UnionKind as U};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        K::ChooseSource => const { &[field("choose_source", Union(U::SourceChoice))] },
        K::Source => const { &[
            field("name", Str),
            field("activity", Node(K::Value)),
            field("type", Str),
            field("centre", Node(K::Vec3)),
            field("particle", Str),
            field("energytype", Str),
            field("monoenergy", Node(K::Value)),
            field("gps_type", Str),
            field("shape", Str),
            field("radius", Node(K::Value)),
            field("halfz", Node(K::Value)),
            field("angtype", Str),
            field("mintheta", Node(K::Value)),
            field("maxtheta", Node(K::Value)),
            field("minphi", Node(K::Value)),
            field("maxphi", Node(K::Value)),
        ] },
        K::VoxelizedSource => const { &[
            field("name", Str),
            field("insert_reader", Str),
            field("insert_translator", Union(U::Translator)),
            field("read_file", Str),
            field("verbose", Bool),
            field("position", Node(K::Vec3)),
            field("dump", Bool),
            field("type", Str),
            field("particle", Str),
            field("energy_type", Str),
            field("monoenergy", Node(K::Value)),
            field("angtype", Str),
            field("mintheta", Node(K::Value)),
            field("maxtheta", Node(K::Value)),
            field("minphi", Node(K::Value)),
            field("maxphi", Node(K::Value)),
            field("confine", Str),
            field("forced_unstable_flag", Bool),
            field("forced_half_life", Node(K::Value)),
        ] },
        K::LinearTranslator => const { &[
            field("insert", Bool),
            field("scale", Bool),
        ] },
        K::RangeTranslator => const { &[
            field("insert", Bool),
            field("read_table", Str),
            field("describe", Bool),
        ] },
        _ => return None,
    })
}
