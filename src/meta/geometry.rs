//! Geometry tables: world/scanner/phantom, the scanner system family, the
//! volume solid family, and the shared `Vec3`/`Value` measure nodes.
//!
//! Every scanner system carries its `base` volume plus the detector levels
//! specific to its topology; repeatable levels (clusters, pixels, crystal
//! layers) are bounded lists.

use super::{field, list_max, Elem, FieldDecl, FieldType::*, NodeKind as K, UnionKind as U};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        K::Geometry => const { &[
            field("world", Node(K::Volume)),
            field("scanner", Union(U::System)),
            field("phantom", Union(U::Phantom)),
        ] },

        // ------------------------ scanner systems ------------------------- //
        K::Scanner => const { &[
            field("base", Node(K::Volume)),
            field("level1", Node(K::Volume)),
            field("level2", Node(K::Volume)),
            field("level3", Node(K::Volume)),
            field("level4", Node(K::Volume)),
            field("level5", Node(K::Volume)),
        ] },
        K::CTscanner => const { &[
            field("base", Node(K::Volume)),
            field("module", Node(K::Volume)),
            list_max("cluster", K::Volume, 3),
            list_max("pixel", K::Volume, 3),
        ] },
        K::CylindricalPET => const { &[
            field("base", Node(K::Volume)),
            field("rsector", Node(K::Volume)),
            field("module", Node(K::Volume)),
            field("submodule", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
            list_max("layer", K::Volume, 4),
        ] },
        K::CPET => const { &[
            field("base", Node(K::Volume)),
            field("sector", Node(K::Volume)),
            field("cassette", Node(K::Volume)),
            field("module", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
            list_max("layer", K::Volume, 4),
        ] },
        K::ECAT => const { &[
            field("base", Node(K::Volume)),
            field("block", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
        ] },
        K::ECATAccel => const { &[
            field("base", Node(K::Volume)),
            field("block", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
        ] },
        K::OPET => const { &[
            field("base", Node(K::Volume)),
            field("rsector", Node(K::Volume)),
            field("module", Node(K::Volume)),
            field("submodule", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
            list_max("layer", K::Volume, 8),
        ] },
        K::SPECThead => const { &[
            field("base", Node(K::Volume)),
            field("crystal", Node(K::Volume)),
            field("pixel", Node(K::Volume)),
        ] },

        // ---------------------------- volumes ----------------------------- //
        K::Volume => const { &[
            field("name", Str),
            field("shape", Union(U::Shape)),
            field("material", Str),
            field("attach", Str),
            field("appearance", Node(K::Appearance)),
        ] },
        K::VoxelizedPhantom => const { &[
            field("name", Str),
            field("insert", Str),
            field("image", Str),
            field("material_database", Str),
            field("range_to_material_file", Str),
            field("hu_to_material_file", Str),
            field("attach", Str),
            field("skip_equal_materials", Bool),
            field("material_table", Str),
            field("density_table", Str),
            field("density_tolerance", Node(K::Value)),
            field("output_material_database_filename", Str),
            field("output_hu_material_filename", Str),
            field("fictitious_energy", Node(K::Value)),
            field("gamma_discard_energy", Node(K::Value)),
        ] },
        K::Appearance => const { &[
            field("color", Str),
            field("visible", Bool),
            field("daughters_invisible", Bool),
            field("line_style", Str),
            field("line_width", Num),
            field("force_solid", Bool),
            field("force_wireframe", Bool),
        ] },

        // ----------------------------- solids ------------------------------ //
        K::Box => const { &[field("size", Node(K::Vec3))] },
        K::Sphere => const { &[
            field("rmin", Node(K::Value)),
            field("rmax", Node(K::Value)),
            field("phi_start", Node(K::Value)),
            field("delta_phi", Node(K::Value)),
            field("theta_start", Node(K::Value)),
            field("delta_theta", Node(K::Value)),
        ] },
        K::Cylinder => const { &[
            field("rmin", Node(K::Value)),
            field("rmax", Node(K::Value)),
            field("height", Node(K::Value)),
            field("phi_start", Node(K::Value)),
            field("delta_phi", Node(K::Value)),
        ] },
        K::Cone => const { &[
            field("rmin1", Node(K::Value)),
            field("rmax1", Node(K::Value)),
            field("rmin2", Node(K::Value)),
            field("rmax2", Node(K::Value)),
            field("height", Node(K::Value)),
            field("phi_start", Node(K::Value)),
            field("delta_phi", Node(K::Value)),
        ] },
        K::Ellipsoid => const { &[
            field("size", Node(K::Vec3)),
            field("z_bottom_cut", Node(K::Value)),
            field("z_top_cut", Node(K::Value)),
        ] },
        K::EllipticalTube => const { &[
            field("long", Node(K::Value)),
            field("short", Node(K::Value)),
            field("height", Node(K::Value)),
        ] },
        K::Tessellated => const { &[field("path_to_vertices_file", Str)] },
        K::TetMeshBox => const { &[
            field("path_to_ele_file", Str),
            field("unit_of_length", Str),
            field("path_to_attribute_map", Str),
        ] },
        K::TRPD => const { &[
            field("x1", Node(K::Value)),
            field("y1", Node(K::Value)),
            field("x2", Node(K::Value)),
            field("y2", Node(K::Value)),
            field("z", Node(K::Value)),
            field("box_size", Node(K::Vec3)),
            field("box_pos", Node(K::Vec3)),
        ] },
        K::Hexagone => const { &[
            field("radius", Node(K::Value)),
            field("height", Node(K::Value)),
        ] },
        K::Wedge => const { &[
            field("narrower_xlength", Node(K::Value)),
            field("size", Node(K::Vec3)),
        ] },

        // ---------------------------- measures ----------------------------- //
        K::Vec3 => const { &[
            field("value", Tuple(Elem::Num, 3)),
            field("unit", Str),
        ] },
        K::Value => const { &[
            field("num", Num),
            field("unit", Str),
        ] },

        _ => return None,
    })
}
