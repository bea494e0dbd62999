//! Run-control tables: the document root aggregating the seven top-level
//! sections, acquisition timing/seeding, and the material database pointer.

use super::{field, FieldDecl, FieldType::*, NodeKind as K, UnionKind as U};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        K::Setup => const { &[
            field("geometry", Node(K::Geometry)),
            field("physics", Node(K::Physics)),
            field("digitizer", Node(K::Digitizer)),
            field("source", Node(K::ChooseSource)),
            field("data_output", Node(K::DataOutput)),
            field("acquisition", Node(K::Acquisition)),
            field("material_database", Node(K::MaterialDatabase)),
        ] },
        K::Acquisition => const { &[
            field("total_number_of_primaries", Num),
            field("number_of_primaries_perrun", Num),
            field("time_slice", Union(U::TimeSlice)),
            field("time_start", Node(K::Value)),
            field("time_stop", Node(K::Value)),
            field("engine_seed", Union(U::EngineSeed)),
            field("engine_name", Str),
            field("verbose", Num),
        ] },
        K::MaterialDatabase => const { &[field("path", Str)] },
        _ => return None,
    })
}
