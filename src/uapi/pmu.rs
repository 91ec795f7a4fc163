//! PMU event-id encoding.
//!
//! Every non-engine counter carries the GT index in its top bits; the low
//! bits select the counter itself. Counter ids start just above the engine
//! sample space, and three offset blocks at +1000/+2000/+3000 partition
//! the hardware-error, per-GT driver-error and global driver-error
//! counters into non-overlapping ranges.

// Engine sample encoding, as fixed by the stable uapi.
pub const I915_PMU_SAMPLE_BITS: u32 = 4;
pub const I915_PMU_SAMPLE_MASK: u64 = 0xf;
pub const I915_PMU_SAMPLE_INSTANCE_BITS: u32 = 8;
pub const I915_PMU_CLASS_SHIFT: u32 = I915_PMU_SAMPLE_BITS + I915_PMU_SAMPLE_INSTANCE_BITS;

#[must_use]
pub const fn i915_pmu_engine(class: u64, instance: u64, sample: u64) -> u64 {
    (class << I915_PMU_CLASS_SHIFT) | (instance << I915_PMU_SAMPLE_BITS) | sample
}

/// Top bits of every non-engine counter are the GT id.
/// FIXME: will be changed to 56
pub const PRELIM_I915_PMU_GT_SHIFT: u32 = 60;
pub const I915_PMU_GT_SHIFT: u32 = 60;

/// First id above the engine sample space.
const PMU_OTHER_BASE: u64 = 0x10_0000; // i915_pmu_engine(0xff, 0xff, 0xf) + 1

#[must_use]
pub const fn prelim_i915_pmu_other(gt: u64, x: u64) -> u64 {
    (PMU_OTHER_BASE + x) | (gt << PRELIM_I915_PMU_GT_SHIFT)
}

#[must_use]
pub const fn prelim_i915_pmu_actual_frequency(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 0)
}

#[must_use]
pub const fn prelim_i915_pmu_requested_frequency(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 1)
}

#[must_use]
pub const fn prelim_i915_pmu_interrupts(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 2)
}

#[must_use]
pub const fn prelim_i915_pmu_rc6_residency(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 3)
}

#[must_use]
pub const fn prelim_i915_pmu_software_gt_awake_time(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 4)
}

#[must_use]
pub const fn prelim_i915_pmu_engine_reset_count(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 5)
}

#[must_use]
pub const fn prelim_i915_pmu_eu_attention_count(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 6)
}

#[must_use]
pub const fn prelim_i915_pmu_render_group_busy(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 7)
}

#[must_use]
pub const fn prelim_i915_pmu_copy_group_busy(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 8)
}

#[must_use]
pub const fn prelim_i915_pmu_media_group_busy(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 9)
}

#[must_use]
pub const fn prelim_i915_pmu_any_engine_group_busy(gt: u64) -> u64 {
    prelim_i915_pmu_other(gt, 10)
}

// GT 0 shorthands, matching the single-tile event ids.
pub const PRELIM_I915_PMU_ENGINE_RESET_COUNT: u64 = prelim_i915_pmu_engine_reset_count(0);
pub const PRELIM_I915_PMU_EU_ATTENTION_COUNT: u64 = prelim_i915_pmu_eu_attention_count(0);
pub const PRELIM_I915_PMU_RENDER_GROUP_BUSY: u64 = prelim_i915_pmu_render_group_busy(0);
pub const PRELIM_I915_PMU_COPY_GROUP_BUSY: u64 = prelim_i915_pmu_copy_group_busy(0);
pub const PRELIM_I915_PMU_MEDIA_GROUP_BUSY: u64 = prelim_i915_pmu_media_group_busy(0);
pub const PRELIM_I915_PMU_ANY_ENGINE_GROUP_BUSY: u64 = prelim_i915_pmu_any_engine_group_busy(0);

// Stable twins, back-merged at the same values.
pub const I915_PMU_ENGINE_RESET_COUNT: u64 = PRELIM_I915_PMU_ENGINE_RESET_COUNT;
pub const I915_PMU_EU_ATTENTION_COUNT: u64 = PRELIM_I915_PMU_EU_ATTENTION_COUNT;

// ===============================================================================================
// HW error counters
// ===============================================================================================

pub const PRELIM_I915_PMU_HW_ERROR_EVENT_ID_OFFSET: u64 = PMU_OTHER_BASE + 1000;

pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_L3_SNG: u64 = 0;
pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_GUC: u64 = 1;
pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_SAMPLER: u64 = 2;
pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_SLM: u64 = 3;
pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_EU_IC: u64 = 4;
pub const PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_EU_GRF: u64 = 5;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_ARR_BIST: u64 = 6;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_L3_DOUB: u64 = 7;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_L3_ECC_CHK: u64 = 8;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_GUC: u64 = 9;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_IDI_PAR: u64 = 10;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_SQIDI: u64 = 11;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_SAMPLER: u64 = 12;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_SLM: u64 = 13;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_EU_IC: u64 = 14;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_EU_GRF: u64 = 15;
pub const PRELIM_I915_PMU_SGUNIT_ERROR_CORRECTABLE: u64 = 16;
pub const PRELIM_I915_PMU_SGUNIT_ERROR_NONFATAL: u64 = 17;
pub const PRELIM_I915_PMU_SGUNIT_ERROR_FATAL: u64 = 18;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_PSF_CSC_0: u64 = 19;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_PSF_CSC_1: u64 = 20;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_0: u64 = 21;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_1: u64 = 22;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_2: u64 = 23;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_PSF_CSC_0: u64 = 24;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_PSF_CSC_1: u64 = 25;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_PSF_CSC_2: u64 = 26;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_PUNIT: u64 = 27;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_EAST: u64 = 28;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_WEST: u64 = 29;
pub const PRELIM_I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_SOUTH: u64 = 30;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_PUNIT: u64 = 31;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_MDFI_EAST: u64 = 32;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_MDFI_WEST: u64 = 33;
pub const PRELIM_I915_PMU_SOC_ERROR_NONFATAL_MDFI_SOUTH: u64 = 34;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_PUNIT: u64 = 35;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_MDFI_EAST: u64 = 36;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_MDFI_WEST: u64 = 37;
pub const PRELIM_I915_PMU_SOC_ERROR_FATAL_MDFI_SOUTH: u64 = 38;

#[must_use]
pub const fn prelim_i915_pmu_soc_error_correctable_fbr(ss: u64, n: u64) -> u64 {
    PRELIM_I915_PMU_SOC_ERROR_FATAL_MDFI_SOUTH + 0x1 + ss * 0x4 + n
}

#[must_use]
pub const fn prelim_i915_pmu_soc_error_nonfatal_fbr(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_correctable_fbr(1, 5) + ss * 0x4 + n
}

#[must_use]
pub const fn prelim_i915_pmu_soc_error_fatal_fbr(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_nonfatal_fbr(1, 5) + ss * 0x4 + n
}

#[must_use]
pub const fn prelim_i915_pmu_soc_error_correctable_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_fatal_fbr(1, 5) + ss * 0x10 + n
}

#[must_use]
pub const fn prelim_i915_pmu_soc_error_nonfatal_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_correctable_hbm(1, 16) + ss * 0x10 + n
}

#[must_use]
pub const fn prelim_i915_pmu_soc_error_fatal_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_nonfatal_hbm(1, 16) + ss * 0x10 + n
}

/* 161 is the last ID used by SOC errors */
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_FPU: u64 = 162;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_TLB: u64 = 163;
pub const PRELIM_I915_PMU_GT_ERROR_FATAL_L3_FABRIC: u64 = 164;

#[must_use]
pub const fn prelim_i915_pmu_hw_error(gt: u64, id: u64) -> u64 {
    (PRELIM_I915_PMU_HW_ERROR_EVENT_ID_OFFSET + id) | (gt << PRELIM_I915_PMU_GT_SHIFT)
}

// Stable HW-error twins; the fixed ids 162-164 have no stable names.
pub const I915_PMU_HW_ERROR_EVENT_ID_OFFSET: u64 = PRELIM_I915_PMU_HW_ERROR_EVENT_ID_OFFSET;
pub const I915_PMU_GT_ERROR_CORRECTABLE_L3_SNG: u64 = 0;
pub const I915_PMU_GT_ERROR_CORRECTABLE_GUC: u64 = 1;
pub const I915_PMU_GT_ERROR_CORRECTABLE_SAMPLER: u64 = 2;
pub const I915_PMU_GT_ERROR_CORRECTABLE_SLM: u64 = 3;
pub const I915_PMU_GT_ERROR_CORRECTABLE_EU_IC: u64 = 4;
pub const I915_PMU_GT_ERROR_CORRECTABLE_EU_GRF: u64 = 5;
pub const I915_PMU_GT_ERROR_FATAL_ARR_BIST: u64 = 6;
pub const I915_PMU_GT_ERROR_FATAL_L3_DOUB: u64 = 7;
pub const I915_PMU_GT_ERROR_FATAL_L3_ECC_CHK: u64 = 8;
pub const I915_PMU_GT_ERROR_FATAL_GUC: u64 = 9;
pub const I915_PMU_GT_ERROR_FATAL_IDI_PAR: u64 = 10;
pub const I915_PMU_GT_ERROR_FATAL_SQIDI: u64 = 11;
pub const I915_PMU_GT_ERROR_FATAL_SAMPLER: u64 = 12;
pub const I915_PMU_GT_ERROR_FATAL_SLM: u64 = 13;
pub const I915_PMU_GT_ERROR_FATAL_EU_IC: u64 = 14;
pub const I915_PMU_GT_ERROR_FATAL_EU_GRF: u64 = 15;
pub const I915_PMU_SGUNIT_ERROR_CORRECTABLE: u64 = 16;
pub const I915_PMU_SGUNIT_ERROR_NONFATAL: u64 = 17;
pub const I915_PMU_SGUNIT_ERROR_FATAL: u64 = 18;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_PSF_CSC_0: u64 = 19;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_PSF_CSC_1: u64 = 20;
pub const I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_0: u64 = 21;
pub const I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_1: u64 = 22;
pub const I915_PMU_SOC_ERROR_NONFATAL_PSF_CSC_2: u64 = 23;
pub const I915_PMU_SOC_ERROR_FATAL_PSF_CSC_0: u64 = 24;
pub const I915_PMU_SOC_ERROR_FATAL_PSF_CSC_1: u64 = 25;
pub const I915_PMU_SOC_ERROR_FATAL_PSF_CSC_2: u64 = 26;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_PUNIT: u64 = 27;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_EAST: u64 = 28;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_WEST: u64 = 29;
pub const I915_PMU_SOC_ERROR_CORRECTABLE_MDFI_SOUTH: u64 = 30;
pub const I915_PMU_SOC_ERROR_NONFATAL_PUNIT: u64 = 31;
pub const I915_PMU_SOC_ERROR_NONFATAL_MDFI_EAST: u64 = 32;
pub const I915_PMU_SOC_ERROR_NONFATAL_MDFI_WEST: u64 = 33;
pub const I915_PMU_SOC_ERROR_NONFATAL_MDFI_SOUTH: u64 = 34;
pub const I915_PMU_SOC_ERROR_FATAL_PUNIT: u64 = 35;
pub const I915_PMU_SOC_ERROR_FATAL_MDFI_EAST: u64 = 36;
pub const I915_PMU_SOC_ERROR_FATAL_MDFI_WEST: u64 = 37;
pub const I915_PMU_SOC_ERROR_FATAL_MDFI_SOUTH: u64 = 38;

#[must_use]
pub const fn i915_pmu_soc_error_correctable_fbr(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_correctable_fbr(ss, n)
}

#[must_use]
pub const fn i915_pmu_soc_error_nonfatal_fbr(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_nonfatal_fbr(ss, n)
}

#[must_use]
pub const fn i915_pmu_soc_error_fatal_fbr(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_fatal_fbr(ss, n)
}

#[must_use]
pub const fn i915_pmu_soc_error_correctable_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_correctable_hbm(ss, n)
}

#[must_use]
pub const fn i915_pmu_soc_error_nonfatal_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_nonfatal_hbm(ss, n)
}

#[must_use]
pub const fn i915_pmu_soc_error_fatal_hbm(ss: u64, n: u64) -> u64 {
    prelim_i915_pmu_soc_error_fatal_hbm(ss, n)
}

#[must_use]
pub const fn i915_pmu_hw_error(gt: u64, id: u64) -> u64 {
    prelim_i915_pmu_hw_error(gt, id)
}

// ===============================================================================================
// Driver error counters
// ===============================================================================================

pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_EVENT_ID_OFFSET: u64 = PMU_OTHER_BASE + 2000;

pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_GGTT: u64 = 0;
pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_ENGINE_OTHER: u64 = 1;
pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_GUC_COMMUNICATION: u64 = 2;
pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_RPS: u64 = 3;
pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_GT_OTHER: u64 = 4;
pub const PRELIM_I915_PMU_GT_DRIVER_ERROR_INTERRUPT: u64 = 5;

#[must_use]
pub const fn prelim_i915_pmu_gt_driver_error(gt: u64, id: u64) -> u64 {
    (PRELIM_I915_PMU_GT_DRIVER_ERROR_EVENT_ID_OFFSET + id) | (gt << PRELIM_I915_PMU_GT_SHIFT)
}

pub const I915_PMU_GT_DRIVER_ERROR_EVENT_ID_OFFSET: u64 =
    PRELIM_I915_PMU_GT_DRIVER_ERROR_EVENT_ID_OFFSET;
pub const I915_PMU_GT_DRIVER_ERROR_GGTT: u64 = 0;
pub const I915_PMU_GT_DRIVER_ERROR_ENGINE_OTHER: u64 = 1;
pub const I915_PMU_GT_DRIVER_ERROR_GUC_COMMUNICATION: u64 = 2;
pub const I915_PMU_GT_DRIVER_ERROR_RPS: u64 = 3;
pub const I915_PMU_GT_DRIVER_ERROR_GT_OTHER: u64 = 4;
pub const I915_PMU_GT_DRIVER_ERROR_INTERRUPT: u64 = 5;

#[must_use]
pub const fn i915_pmu_gt_driver_error(gt: u64, id: u64) -> u64 {
    prelim_i915_pmu_gt_driver_error(gt, id)
}

// Global driver errors carry no GT index.
pub const PRELIM_I915_PMU_DRIVER_ERROR_EVENT_ID_OFFSET: u64 = PMU_OTHER_BASE + 3000;

pub const PRELIM_I915_PMU_DRIVER_ERROR_OBJECT_MIGRATION: u64 = 0;

#[must_use]
pub const fn prelim_i915_pmu_driver_error(id: u64) -> u64 {
    PRELIM_I915_PMU_DRIVER_ERROR_EVENT_ID_OFFSET + id
}

pub const I915_PMU_DRIVER_ERROR_EVENT_ID_OFFSET: u64 =
    PRELIM_I915_PMU_DRIVER_ERROR_EVENT_ID_OFFSET;
pub const I915_PMU_DRIVER_ERROR_OBJECT_MIGRATION: u64 = 0;

#[must_use]
pub const fn i915_pmu_driver_error(id: u64) -> u64 {
    prelim_i915_pmu_driver_error(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_base_sits_above_engine_space() {
        assert_eq!(i915_pmu_engine(0xff, 0xff, 0xf) + 1, PMU_OTHER_BASE);
        assert_eq!(prelim_i915_pmu_actual_frequency(0), 0x10_0000);
        assert_eq!(prelim_i915_pmu_any_engine_group_busy(0), 0x10_000a);
    }

    #[test]
    fn gt_index_in_top_bits() {
        let ev = prelim_i915_pmu_interrupts(3);
        assert_eq!(ev >> PRELIM_I915_PMU_GT_SHIFT, 3);
        assert_eq!(ev & !(0xf << PRELIM_I915_PMU_GT_SHIFT), prelim_i915_pmu_interrupts(0));
    }

    #[test]
    fn error_blocks_disjoint() {
        // HW errors occupy +1000.., per-GT driver errors +2000.., global
        // driver errors +3000..; none of the defined ids may cross over.
        let hw_last = prelim_i915_pmu_hw_error(0, PRELIM_I915_PMU_GT_ERROR_FATAL_L3_FABRIC);
        let gt_first = prelim_i915_pmu_gt_driver_error(0, 0);
        let gt_last = prelim_i915_pmu_gt_driver_error(0, PRELIM_I915_PMU_GT_DRIVER_ERROR_INTERRUPT);
        let global_first = prelim_i915_pmu_driver_error(0);
        assert!(hw_last < gt_first);
        assert!(gt_last < global_first);
        assert!(prelim_i915_pmu_any_engine_group_busy(0) < prelim_i915_pmu_hw_error(0, 0));
    }

    #[test]
    fn soc_error_id_chain() {
        assert_eq!(prelim_i915_pmu_soc_error_correctable_fbr(0, 0), 39);
        assert_eq!(prelim_i915_pmu_soc_error_nonfatal_fbr(0, 0), 48);
        assert_eq!(prelim_i915_pmu_soc_error_fatal_fbr(0, 0), 57);
        assert_eq!(prelim_i915_pmu_soc_error_correctable_hbm(0, 0), 66);
        assert_eq!(prelim_i915_pmu_soc_error_nonfatal_hbm(0, 0), 98);
        assert_eq!(prelim_i915_pmu_soc_error_fatal_hbm(0, 0), 130);
        // The HBM chain tops out right below the fixed ids at 162.
        assert_eq!(prelim_i915_pmu_soc_error_fatal_hbm(1, 15), 161);
        assert!(prelim_i915_pmu_soc_error_fatal_hbm(1, 15) < PRELIM_I915_PMU_GT_ERROR_FATAL_FPU);
    }

    #[test]
    fn stable_twins_match_prelim_values() {
        assert_eq!(I915_PMU_ENGINE_RESET_COUNT, PRELIM_I915_PMU_ENGINE_RESET_COUNT);
        assert_eq!(I915_PMU_EU_ATTENTION_COUNT, PRELIM_I915_PMU_EU_ATTENTION_COUNT);
        assert_eq!(
            I915_PMU_HW_ERROR_EVENT_ID_OFFSET,
            PRELIM_I915_PMU_HW_ERROR_EVENT_ID_OFFSET
        );
        assert_eq!(
            I915_PMU_GT_ERROR_CORRECTABLE_L3_SNG,
            PRELIM_I915_PMU_GT_ERROR_CORRECTABLE_L3_SNG
        );
        assert_eq!(I915_PMU_GT_ERROR_FATAL_EU_GRF, PRELIM_I915_PMU_GT_ERROR_FATAL_EU_GRF);
        assert_eq!(I915_PMU_SGUNIT_ERROR_FATAL, PRELIM_I915_PMU_SGUNIT_ERROR_FATAL);
        assert_eq!(
            I915_PMU_SOC_ERROR_FATAL_MDFI_SOUTH,
            PRELIM_I915_PMU_SOC_ERROR_FATAL_MDFI_SOUTH
        );
        assert_eq!(
            i915_pmu_soc_error_correctable_fbr(0, 0),
            prelim_i915_pmu_soc_error_correctable_fbr(0, 0)
        );
        assert_eq!(
            i915_pmu_soc_error_fatal_hbm(1, 15),
            prelim_i915_pmu_soc_error_fatal_hbm(1, 15)
        );
        assert_eq!(i915_pmu_hw_error(2, 7), prelim_i915_pmu_hw_error(2, 7));
        assert_eq!(
            i915_pmu_gt_driver_error(1, I915_PMU_GT_DRIVER_ERROR_RPS),
            prelim_i915_pmu_gt_driver_error(1, PRELIM_I915_PMU_GT_DRIVER_ERROR_RPS)
        );
        assert_eq!(
            i915_pmu_driver_error(I915_PMU_DRIVER_ERROR_OBJECT_MIGRATION),
            prelim_i915_pmu_driver_error(PRELIM_I915_PMU_DRIVER_ERROR_OBJECT_MIGRATION)
        );
    }
}
