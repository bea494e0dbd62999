//! Digitizer tables: the pulse-processing chain from hit adder through
//! coincidence sorting, plus the distribution family the noise and
//! efficiency modules draw from.
//!
//! Most chain modules carry an `insert` switch; only the adder and readout
//! start inserted.

use super::{field, flag_on, list, Elem, FieldDecl, FieldType::*, NodeKind as K, UnionKind as U};

pub(super) fn fields(kind: K) -> Option<&'static [FieldDecl]> {
    Some(match kind {
        // -------------------------- distributions -------------------------- //
        K::Flat => const { &[
            field("min", Node(K::Value)),
            field("max", Node(K::Value)),
            field("amplitude", Node(K::Value)),
        ] },
        K::Gaussian => const { &[
            field("mean", Node(K::Value)),
            field("sigma", Node(K::Value)),
            field("amplitude", Node(K::Value)),
        ] },
        K::Exponential => const { &[
            field("lambda", Num),
            field("amplitude", Node(K::Value)),
        ] },
        K::Manual => const { &[
            field("unit_x", Str),
            field("unit_y", Str),
            field("insert_point", Tuple(Elem::Num, 2)),
            field("add_point", Num),
            field("auto_x_start", Num),
        ] },
        K::File => const { &[
            field("unit_x", Str),
            field("unit_y", Str),
            field("auto_x", Bool),
            field("auto_x_start", Node(K::Value)),
            field("file_name", Str),
            field("column_x", Num),
            field("column_y", Num),
        ] },

        // ----------------------------- chain ------------------------------- //
        K::Digitizer => const { &[
            field("adder", Node(K::Adder)),
            field("readout", Node(K::Readout)),
            field("blurring", Node(K::Blurring)),
            field("calibration", Node(K::Calibration)),
            field("crosstalk", Node(K::Crosstalk)),
            field("thresholder", Node(K::Thresholder)),
            field("upholder", Node(K::Upholder)),
            list("window", K::Window),
            field("sigmoidal_thresholder", Node(K::SigmoidalThresholder)),
            field("time_resolution", Node(K::TimeResolution)),
            field("noise", Node(K::Noise)),
            field("local_efficiency", Node(K::LocalEfficiency)),
            field("buffer", Node(K::Buffer)),
            field("pileup", Node(K::Pileup)),
            field("deadtime", Node(K::DeadTime)),
            field("coincidences", Node(K::Coincidences)),
            field("coincidence_sorter", Node(K::CoincidenceSorter)),
        ] },
        K::Adder => const { &[
            flag_on("insert"),
            field("adder_compton", Bool),
        ] },
        K::Readout => const { &[
            flag_on("insert"),
            field("policy", Str),
            field("depth", Num),
        ] },
        K::Blurring => const { &[
            field("insert", Bool),
            field("law", Union(U::BlurringLaw)),
            field("crystal_blurring", Node(K::CrystalBlurring)),
            list("local_blurring", K::LocalBlurring),
            list("transfer_efficiency", K::TransferEfficiency),
            list("light_yield", K::LightYield),
            list("intrinsic_resolution_blurring", K::IntrinsicResolutionBlurring),
            list("quantum_efficiency", K::QuantumEfficiency),
            field("spblurring", Node(K::Spblurring)),
        ] },
        K::InverseSquareLaw => const { &[
            field("resolution", Num),
            field("energy_of_reference", Node(K::Value)),
        ] },
        K::LinearLaw => const { &[
            field("resolution", Num),
            field("energy_of_reference", Node(K::Value)),
            field("slope", Node(K::Value)),
        ] },
        K::CrystalBlurring => const { &[
            field("insert", Bool),
            field("crystal_resolution_min", Num),
            field("crystal_resolution_max", Num),
            field("crystal_qe", Num),
            field("crystal_energy_of_reference", Node(K::Value)),
        ] },
        K::LocalBlurring => const { &[
            field("insert", Bool),
            field("volume", Str),
            field("resolution", Num),
            field("energy_of_reference", Node(K::Value)),
        ] },
        K::TransferEfficiency => const { &[
            field("insert", Bool),
            field("volume", Str),
            field("tecoef", Num),
        ] },
        K::LightYield => const { &[
            field("insert", Bool),
            field("volume", Str),
            field("light_output", Num),
        ] },
        K::IntrinsicResolutionBlurring => const { &[
            field("insert", Bool),
            field("volume", Str),
            field("intrinsic_resolution", Num),
            field("energy_of_reference", Node(K::Value)),
        ] },
        K::QuantumEfficiency => const { &[
            field("insert", Bool),
            field("volume", Str),
            field("unique_qe", Union(U::Efficiency)),
        ] },
        K::Spblurring => const { &[
            field("insert", Bool),
            field("spresolution", Node(K::Value)),
            field("verbose", Num),
        ] },
        K::Calibration => const { &[
            field("insert", Bool),
            field("value", Num),
        ] },
        K::Crosstalk => const { &[
            field("insert", Bool),
            field("crosstalk_volume", Str),
            field("edges_fraction", Num),
            field("corners_fraction", Num),
        ] },
        K::Thresholder => const { &[
            field("insert", Bool),
            field("value", Node(K::Value)),
        ] },
        K::Upholder => const { &[
            field("insert", Bool),
            field("value", Node(K::Value)),
        ] },
        K::Window => const { &[
            field("insert", Bool),
            field("input_name", Str),
            field("thresholder", Node(K::Thresholder)),
            field("uphold", Node(K::Upholder)),
        ] },
        K::SigmoidalThresholder => const { &[
            field("insert", Bool),
            field("threshold", Node(K::Value)),
            field("threshold_alpha", Num),
            field("threshold_percent", Num),
        ] },
        K::TimeResolution => const { &[
            field("insert", Bool),
            field("value", Node(K::Value)),
        ] },
        K::Noise => const { &[
            field("insert", Bool),
            field("deltaT_distribution", Union(U::Distribution)),
            field("energy_distribution", Union(U::Distribution)),
        ] },
        K::LocalEfficiency => const { &[
            field("insert", Bool),
            field("Level1", Union(U::OptionalDistribution)),
            field("Level2", Union(U::OptionalDistribution)),
        ] },
        K::Buffer => const { &[
            field("insert", Bool),
            field("buffer_size", Node(K::Value)),
            field("read_frequency", Node(K::Value)),
            field("mode", Num),
        ] },
        K::Pileup => const { &[
            field("insert", Bool),
            field("depth", Num),
            field("value", Node(K::Value)),
        ] },
        K::DeadTime => const { &[
            field("insert", Bool),
            field("value", Node(K::Value)),
            field("mode", Str),
            field("dt_volume", Str),
            field("buffer_size", Node(K::Value)),
            field("buffer_mode", Num),
        ] },
        K::Coincidences => const { &[
            field("window", Node(K::Value)),
            field("min_sector_difference", Num),
            field("offset", Node(K::Value)),
            field("depth", Num),
            field("all_pulse_open_coinc_gate", Bool),
            field("multiple_policy", Str),
        ] },
        K::CoincidenceSorter => const { &[
            field("insert", Bool),
            field("name", Str),
            field("input_name", Str),
            field("window", Node(K::Value)),
        ] },
        _ => return None,
    })
}
