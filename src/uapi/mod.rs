//! Wire-level contract of the i915 preliminary (PRELIM) uapi.
//!
//! Everything in this module tree is a bit-exact transcription of the
//! downstream kernel ABI: field order, field widths, packing and numeric
//! values must not change. Reserved (`rsvd`/`mbz`/`pad`) fields are part
//! of the wire format; callers keep them zero and the kernel rejects
//! anything else.

pub mod debug;
pub mod ioctl;
pub mod perf;
pub mod pmu;
pub mod query;

pub(crate) const fn genmask_ull(h: u32, l: u32) -> u64 {
    (!0u64 << l) & (!0u64 >> (63 - h))
}

pub(crate) const fn genmask(h: u32, l: u32) -> u32 {
    (!0u32 << l) & (!0u32 >> (31 - h))
}

// ===============================================================================================
// Shared primitives
// ===============================================================================================

/// Chained extension header placed at the start of every uapi extension struct.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct UserExtension {
    pub next_extension: u64,
    pub name: u32,
    pub flags: u32,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct EngineClassInstance {
    pub engine_class: u16,
    pub engine_instance: u16,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MemoryClassInstance {
    pub memory_class: u16,
    pub memory_instance: u16,
}

// ===============================================================================================
// Namespaces
// ===============================================================================================

/// Extension names above this bit live in the experimental namespace.
pub const PRELIM_I915_USER_EXT: u32 = 1 << 16;

#[must_use]
pub const fn prelim_i915_user_ext_mask(x: u32) -> u32 {
    x & 0xffff
}

pub const PRELIM_I915_ENGINE_CLASS: u32 = 1 << 8;

#[must_use]
pub const fn prelim_i915_engine_class_mask(x: u32) -> u32 {
    x & 0xff
}

pub const PRELIM_I915_ENGINE_CLASS_COMPUTE: u16 = 4;

// ===============================================================================================
// Memory classes
// ===============================================================================================

pub const PRELIM_I915_MEMORY_CLASS_SYSTEM: i32 = 0;
pub const PRELIM_I915_MEMORY_CLASS_DEVICE: i32 = 1;
pub const PRELIM_I915_MEMORY_CLASS_NONE: i32 = -1;
pub const I915_MEMORY_CLASS_SYSTEM: i32 = 0;
pub const I915_MEMORY_CLASS_DEVICE: i32 = 1;
pub const I915_MEMORY_CLASS_NONE: i32 = -1;

// ===============================================================================================
// Tiling and uevents
// ===============================================================================================

pub const PRELIM_I915_TILING_F: u32 = 3;
pub const PRELIM_I915_TILING_LAST: u32 = PRELIM_I915_TILING_F;
pub const I915_TILING_F: u32 = PRELIM_I915_TILING_F;
pub const I915_TILING_LAST: u32 = PRELIM_I915_TILING_LAST;

/// Generated when an engine or GPU reset fails, or the GPU is declared wedged.
pub const PRELIM_I915_RESET_FAILED_UEVENT: &str = "RESET_FAILED";
pub const I915_RESET_FAILED_UEVENT: &str = PRELIM_I915_RESET_FAILED_UEVENT;
/// Generated on an uncorrectable memory degradation report from GPU firmware.
pub const PRELIM_I915_MEMORY_HEALTH_UEVENT: &str = "MEMORY_HEALTH";
pub const I915_MEMORY_HEALTH_UEVENT: &str = PRELIM_I915_MEMORY_HEALTH_UEVENT;

// ===============================================================================================
// Scheduler capabilities
// ===============================================================================================

/// The 2k user priority levels are statically mapped into low/normal/high buckets.
pub const PRELIM_I915_SCHEDULER_CAP_STATIC_PRIORITY_MAP: u32 = 1 << 31;
pub const I915_SCHEDULER_CAP_STATIC_PRIORITY_MAP: u32 = 1 << 5;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn primitive_layouts() {
        assert_eq!(size_of::<UserExtension>(), 16);
        assert_eq!(offset_of!(UserExtension, name), 8);
        assert_eq!(size_of::<EngineClassInstance>(), 4);
        assert_eq!(size_of::<MemoryClassInstance>(), 4);
    }

    #[test]
    fn genmask_bounds() {
        assert_eq!(genmask_ull(63, 62), 0xc000_0000_0000_0000);
        assert_eq!(genmask_ull(1, 0), 0x3);
        assert_eq!(genmask(31, 31), 0x8000_0000);
        assert_eq!(genmask(2, 0), 0x7);
    }

    #[test]
    fn tiling_and_uevent_twins() {
        assert_eq!(I915_TILING_F, PRELIM_I915_TILING_F);
        assert_eq!(I915_TILING_LAST, PRELIM_I915_TILING_LAST);
        assert_eq!(I915_RESET_FAILED_UEVENT, PRELIM_I915_RESET_FAILED_UEVENT);
        assert_eq!(I915_MEMORY_HEALTH_UEVENT, PRELIM_I915_MEMORY_HEALTH_UEVENT);
    }

    #[test]
    fn user_ext_namespace() {
        assert_eq!(prelim_i915_user_ext_mask(PRELIM_I915_USER_EXT | 2), 2);
        assert_eq!(
            prelim_i915_engine_class_mask(PRELIM_I915_ENGINE_CLASS | u32::from(PRELIM_I915_ENGINE_CLASS_COMPUTE)),
            4
        );
    }
}
