//! Data-output tables: one block per downstream sink format (ASCII, ROOT,
//! Interfile projections, sinograms, ECAT7, LMF, CT images).

use super::{field, Elem, FieldDecl, FieldType::*, NodeKind as K};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        K::DataOutput => const { &[
            field("ascii", Node(K::Ascii)),
            field("root", Node(K::RootOutput)),
            field("interfile", Node(K::Interfile)),
            field("sinogram", Node(K::Sinogram)),
            field("sinoaccel", Node(K::Sinogram)),
            field("ecat7", Node(K::Ecat7)),
            field("lmf", Node(K::Lmf)),
            field("imageCT", Node(K::ImageCT)),
        ] },
        K::Ascii => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("out_file_hits_flag", Bool),
            field("out_file_singles_flag", Bool),
            field("out_file_coincidences_flag", Bool),
            field("coincidence_mask", Tuple(Elem::Bool, 6)),
            field("single_mask", Tuple(Elem::Bool, 4)),
            field("out_file_size_limit", Num),
        ] },
        K::RootOutput => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("root_hit_flag", Bool),
            field("root_singles_flag", Bool),
            field("root_coincidences_flag", Bool),
            field("root_ntuple_flag", Bool),
            field("out_file_singles_adder_flag", Bool),
            field("out_file_singles_readout_flag", Bool),
            field("out_file_singles_spblurring_flag", Bool),
            field("out_file_singles_blurring_flag", Bool),
            field("out_file_singles_thresholder_flag", Bool),
            field("out_file_singles_upholder_flag", Bool),
        ] },
        K::Interfile => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("projection_plane", Str),
            field("pixel_size", Tuple(Elem::Node(K::Value), 2)),
            field("pixel_number", Tuple(Elem::Num, 2)),
        ] },
        K::Sinogram => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("radial_bins", Num),
            field("trues_only", Bool),
            field("raw_output_enable", Bool),
        ] },
        K::Ecat7 => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("maxringdiff", Num),
            field("span", Num),
            field("mashing", Num),
            field("system", Num),
        ] },
        K::Lmf => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("detector_id_bool", Bool),
            field("energy_bool", Bool),
            field("gantry_axial_pos_bool", Bool),
            field("gantry_angular_pos_bool", Bool),
            field("source_pos_bool", Bool),
            field("neighbour_bool", Bool),
            field("neighbourhood_order", Bool),
            field("coincidence_bool", Bool),
            field("gate_digi_bool", Bool),
            field("compton_bool", Bool),
            field("compton_detector_bool", Bool),
            field("source_id_bool", Bool),
            field("source_xyzpos_bool", Bool),
            field("global_xyzpos_bool", Bool),
            field("event_id_bool", Bool),
            field("run_id_bool", Bool),
        ] },
        K::ImageCT => const { &[
            field("enable", Bool),
            field("file_name", Str),
            field("num_pixel", Tuple(Elem::Num, 2)),
            field("vrt_factor", Num),
            field("start_seed", Num),
        ] },
        _ => return None,
    })
}
