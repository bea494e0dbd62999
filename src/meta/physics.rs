//! Physics tables: physics list selection, production cuts per region,
//! process/model activation, and energy-range bounds.

use super::{field, list, FieldDecl, FieldType::*, NodeKind as K};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        K::Physics => const { &[
            field("physics_list", Str),
            field("cut_in_world", Node(K::CutInRegion)),
            field("cut_in_patient", Node(K::CutInRegion)),
            field("activate_step_limiter", Str),
            list("process", K::Process),
            field("mag_field", Node(K::Vec3)),
        ] },
        K::CutInRegion => const { &[
            field("gamma", Node(K::Value)),
            field("electron", Node(K::Value)),
            field("positron", Node(K::Value)),
            field("proton", Node(K::Value)),
            field("max_step", Node(K::Value)),
        ] },
        K::Process => const { &[
            field("add", Bool),
            field("process_name", Str),
            field("particle", Str),
            field("model", Node(K::Model)),
        ] },
        K::Model => const { &[
            field("set", Bool),
            field("model_name", Str),
            field("particle", Str),
            field("energy_range", Bool),
            field("e_max", Node(K::SetE)),
            field("e_min", Node(K::SetE)),
        ] },
        K::SetE => const { &[
            field("value", Node(K::Value)),
            field("particle", Str),
            field("option", Str),
        ] },
        _ => return None,
    })
}
