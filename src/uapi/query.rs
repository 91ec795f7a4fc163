use crate::uapi::{EngineClassInstance, MemoryClassInstance};
use crate::utils::drm_iowr;

// ===============================================================================================
// Query carrier
// ===============================================================================================

pub const DRM_I915_QUERY: u32 = 0x39;
pub const DRM_IOCTL_I915_QUERY: u32 = drm_iowr::<Query>(DRM_I915_QUERY);

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct Query {
    pub num_items: u32,
    /// MBZ
    pub flags: u32,
    /// User pointer to an array of [`QueryItem`].
    pub items_ptr: u64,
}

/// One query request. `length` is an in/out field: zero asks the kernel
/// for the required size, a positive value gives the size of the buffer
/// at `data_ptr`, and a negative return carries an errno for this item.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryItem {
    pub query_id: u64,
    pub length: i32,
    pub flags: u32,
    pub data_ptr: u64,
}

// ===============================================================================================
// Item ids
// ===============================================================================================

/// Experimental query-item namespace bit.
pub const PRELIM_DRM_I915_QUERY: u64 = 1 << 16;

#[must_use]
pub const fn prelim_drm_i915_query_mask(x: u64) -> u64 {
    x & 0xffff
}

// Lower 16 bits stay equal to the stable values.
pub const PRELIM_DRM_I915_QUERY_MEMORY_REGIONS: u64 = PRELIM_DRM_I915_QUERY | 4;
pub const DRM_I915_QUERY_MEMORY_REGIONS: u64 = 4;
pub const PRELIM_DRM_I915_QUERY_DISTANCE_INFO: u64 = PRELIM_DRM_I915_QUERY | 5;
pub const DRM_I915_QUERY_DISTANCE_INFO: u64 = 5;
/// Copies the device information table into the item's data_ptr if the
/// allocated length is big enough.
pub const PRELIM_DRM_I915_QUERY_HWCONFIG_TABLE: u64 = PRELIM_DRM_I915_QUERY | 6;
pub const DRM_I915_QUERY_HWCONFIG_TABLE: u64 = 6;
pub const PRELIM_DRM_I915_QUERY_GEOMETRY_SLICES: u64 = PRELIM_DRM_I915_QUERY | 7;
pub const PRELIM_DRM_I915_QUERY_COMPUTE_SLICES: u64 = PRELIM_DRM_I915_QUERY | 8;
/// Command streamer timestamp register.
pub const PRELIM_DRM_I915_QUERY_CS_CYCLES: u64 = PRELIM_DRM_I915_QUERY | 9;
pub const DRM_I915_QUERY_CS_CYCLES: u64 = 9;
pub const PRELIM_DRM_I915_QUERY_FABRIC_INFO: u64 = PRELIM_DRM_I915_QUERY | 11;
pub const DRM_I915_QUERY_FABRIC_INFO: u64 = 11;
pub const PRELIM_DRM_I915_QUERY_ENGINE_INFO: u64 = PRELIM_DRM_I915_QUERY | 13;
pub const PRELIM_DRM_I915_QUERY_L3_BANK_COUNT: u64 = PRELIM_DRM_I915_QUERY | 14;

// ===============================================================================================
// Memory regions
// ===============================================================================================

/// Describes one region as known to the driver.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct MemoryRegionInfo {
    /// class:instance pair encoding
    pub region: MemoryClassInstance,
    /// MBZ
    pub rsvd0: u32,
    /// MBZ
    pub caps: u64,
    /// MBZ
    pub flags: u64,
    /// Memory probed by the driver (-1 = unknown)
    pub probed_size: u64,
    /// Estimate of memory remaining (-1 = unknown)
    pub unallocated_size: u64,
    /// MBZ
    pub rsvd1: [u64; 8],
}

/// Fixed header of the memory-region enumeration; `num_regions` entries of
/// [`MemoryRegionInfo`] follow in the same buffer.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryMemoryRegions {
    pub num_regions: u32,
    /// MBZ
    pub rsvd: [u32; 3],
    pub regions: [MemoryRegionInfo; 0],
}

// ===============================================================================================
// Distance info
// ===============================================================================================

/// Distance of the given engine to a memory region; -1 means the region is
/// unreachable.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryDistanceInfo {
    /// Engine for which distance is queried
    pub engine: EngineClassInstance,
    /// Memory region to be used
    pub region: MemoryClassInstance,
    pub distance: i32,
    /// Must be zero
    pub rsvd: [u32; 3],
}

// ===============================================================================================
// Command streamer cycles
// ===============================================================================================

/// Command streamer cycle count, its frequency, and the CPU timestamp taken
/// when the cycle count was captured.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryCsCycles {
    pub engine: EngineClassInstance,
    /// Must be zero.
    pub flags: u32,
    /// Cycles as read from the command streamer register at offset 0x358.
    pub cs_cycles: u64,
    /// Frequency of the cs cycles in Hz.
    pub cs_frequency: u64,
    /// CPU timestamp in nanoseconds.
    pub cpu_timestamp: u64,
    /// Reference clock id for the CPU timestamp, see clock_gettime(2).
    /// Supported: CLOCK_MONOTONIC, CLOCK_MONOTONIC_RAW, CLOCK_REALTIME,
    /// CLOCK_BOOTTIME, CLOCK_TAI.
    pub clockid: i32,
    /// Must be zero.
    pub rsvd: u32,
}

// ===============================================================================================
// Fabric info
// ===============================================================================================

/// Fabric info for the given fabric id. Bandwidth is in gigabits per
/// second (max 8 ports * 4 lanes * 90 Gb/lane); zero means no fabric.
/// Latency is in tenths of path length: 10 == one fabric link between
/// source and destination.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryFabricInfo {
    pub fabric_id: u32,
    pub bandwidth: u16,
    pub latency: u16,
}

// ===============================================================================================
// Engine info
// ===============================================================================================

pub const PRELIM_I915_ENGINE_INFO_HAS_KNOWN_CAPABILITIES: u64 = 1 << 63;
pub const I915_ENGINE_INFO_HAS_KNOWN_CAPABILITIES: u64 = 1 << 0;
pub const PRELIM_I915_ENGINE_INFO_HAS_LOGICAL_INSTANCE: u64 = 1 << 62;
pub const I915_ENGINE_INFO_HAS_LOGICAL_INSTANCE: u64 = 1 << 1;
pub const PRELIM_I915_ENGINE_INFO_HAS_OA_UNIT_ID: u64 = 1 << 61;

pub const PRELIM_I915_RENDER_CLASS_CAPABILITY_3D: u64 = 1 << 63;
pub const I915_RENDER_CLASS_CAPABILITY_3D: u64 = 1 << 0;
pub const I915_VIDEO_CLASS_CAPABILITY_HEVC: u64 = 1 << 0;
pub const I915_VIDEO_AND_ENHANCE_CLASS_CAPABILITY_SFC: u64 = 1 << 1;
pub const PRELIM_I915_VIDEO_CLASS_CAPABILITY_VDENC: u64 = 1 << 63;
pub const I915_VIDEO_CLASS_CAPABILITY_VDENC: u64 = 1 << 2;
pub const PRELIM_I915_COPY_CLASS_CAP_BLOCK_COPY: u64 = 1 << 63;
pub const I915_COPY_CLASS_CAP_BLOCK_COPY: u64 = 1 << 0;
// Copy engines are functionally the same, but SATURATE_LINK engines can
// saturate pcie and scale-up links faster than SATURATE_PCIE engines, and
// SATURATE_LMEM engines can operate at HBM speeds.
pub const PRELIM_I915_COPY_CLASS_CAP_SATURATE_PCIE: u64 = 1 << 62;
pub const I915_COPY_CLASS_CAP_SATURATE_PCIE: u64 = 1 << 1;
pub const PRELIM_I915_COPY_CLASS_CAP_SATURATE_LINK: u64 = 1 << 61;
pub const I915_COPY_CLASS_CAP_SATURATE_LINK: u64 = 1 << 2;
pub const PRELIM_I915_COPY_CLASS_CAP_SATURATE_LMEM: u64 = 1 << 60;
pub const I915_COPY_CLASS_CAP_SATURATE_LMEM: u64 = 1 << 3;

/// Describes one engine and its capabilities as known to the driver.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct EngineInfo {
    /// Engine class and instance.
    pub engine: EngineClassInstance,
    /// SW defined id of the OA unit associated with this engine. U32_MAX
    /// means the engine is not supported by OA; all other values group
    /// engines into their OA unit.
    pub oa_unit_id: u32,
    /// Engine flags.
    pub flags: u64,
    /// Capabilities of this engine.
    pub capabilities: u64,
    /// All known capabilities for this engine class.
    pub known_capabilities: u64,
    /// Logical engine instance.
    pub logical_instance: u16,
    /// Reserved fields.
    pub rsvd1: [u16; 3],
    pub rsvd2: [u64; 2],
}

/// Fixed header of the engine enumeration; `num_engines` entries of
/// [`EngineInfo`] follow in the same buffer.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct QueryEngineInfo {
    pub num_engines: u32,
    /// MBZ
    pub rsvd: [u32; 3],
    pub engines: [EngineInfo; 0],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn carrier_layout() {
        assert_eq!(size_of::<Query>(), 16);
        assert_eq!(size_of::<QueryItem>(), 24);
        assert_eq!(offset_of!(QueryItem, length), 8);
        assert_eq!(offset_of!(QueryItem, data_ptr), 16);
        assert_eq!(DRM_IOCTL_I915_QUERY, 0xc010_6479);
    }

    #[test]
    fn result_layouts() {
        assert_eq!(size_of::<MemoryRegionInfo>(), 104);
        assert_eq!(offset_of!(MemoryRegionInfo, probed_size), 24);
        assert_eq!(offset_of!(MemoryRegionInfo, rsvd1), 40);
        assert_eq!(size_of::<QueryMemoryRegions>(), 16);
        assert_eq!(size_of::<QueryDistanceInfo>(), 24);
        assert_eq!(offset_of!(QueryDistanceInfo, distance), 8);
        assert_eq!(size_of::<QueryCsCycles>(), 40);
        assert_eq!(offset_of!(QueryCsCycles, clockid), 32);
        assert_eq!(size_of::<QueryFabricInfo>(), 8);
        assert_eq!(size_of::<EngineInfo>(), 56);
        assert_eq!(offset_of!(EngineInfo, logical_instance), 32);
        assert_eq!(size_of::<QueryEngineInfo>(), 16);
    }

    #[test]
    fn item_id_namespacing() {
        assert_eq!(
            prelim_drm_i915_query_mask(PRELIM_DRM_I915_QUERY_MEMORY_REGIONS),
            DRM_I915_QUERY_MEMORY_REGIONS
        );
        assert_eq!(
            prelim_drm_i915_query_mask(PRELIM_DRM_I915_QUERY_CS_CYCLES),
            DRM_I915_QUERY_CS_CYCLES
        );
        assert_eq!(
            prelim_drm_i915_query_mask(PRELIM_DRM_I915_QUERY_FABRIC_INFO),
            DRM_I915_QUERY_FABRIC_INFO
        );
        assert_eq!(prelim_drm_i915_query_mask(PRELIM_DRM_I915_QUERY_ENGINE_INFO), 13);
        assert_eq!(prelim_drm_i915_query_mask(PRELIM_DRM_I915_QUERY_L3_BANK_COUNT), 14);
    }
}
