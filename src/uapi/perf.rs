use crate::utils::iowr;

pub const PRELIM_PERF_VERSION: u32 = 1000;

// ===============================================================================================
// OA buffer mapping
// ===============================================================================================

/// Returns OA buffer properties to be used with mmap.
///
/// Available in perf revision 1000.
pub const PRELIM_I915_PERF_IOCTL_GET_OA_BUFFER_INFO: u32 =
    iowr::<PerfOaBufferInfo>(0x69, 0x80);
pub const I915_PERF_IOCTL_GET_OA_BUFFER_INFO: u32 = iowr::<PerfOaBufferInfo>(0x69, 0x3);

/// OA buffer size and offset.
///
/// After querying, pass (size, offset) to
/// `mmap(0, info.size, PROT_READ, MAP_PRIVATE, perf_fd, info.offset)`.
/// Only a private read-only mapping is allowed. Userspace must treat the
/// incoming data as tainted, but it conforms to the OA format of the user
/// config and carries the A, B and C counters.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct PerfOaBufferInfo {
    /// in; 0 for the OA output buffer
    pub r#type: u32,
    /// in; mbz
    pub flags: u32,
    /// out
    pub size: u64,
    /// out
    pub offset: u64,
    /// mbz
    pub rsvd: u64,
}

// ===============================================================================================
// EU stall sampling
// ===============================================================================================

/// Per-DSS memory buffer size; valid values are 128 KB, 256 KB and 512 KB.
pub const PRELIM_DRM_I915_EU_STALL_PROP_BUF_SZ: u32 = 1001;
/// Sampling rate per tile in multiples of 251 cycles, valid 1 to 7.
pub const PRELIM_DRM_I915_EU_STALL_PROP_SAMPLE_RATE: u32 = 1002;
/// EU stall data poll period in nanoseconds, minimum 100 ms.
pub const PRELIM_DRM_I915_EU_STALL_PROP_POLL_PERIOD: u32 = 1003;
pub const PRELIM_DRM_I915_EU_STALL_PROP_MAX: u32 = 1004;

/// EU stall data line dropped due to the memory buffer being full.
pub const PRELIM_I915_EUSTALL_FLAG_OVERFLOW_DROP: u16 = 1 << 8;

/// Info the driver adds to each entry in the EU stall counters data.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct StallCntrInfo {
    pub subslice: u16,
    pub flags: u16,
}

/// Perf-open flag selecting an EU stall sampling fd.
pub const PRELIM_I915_PERF_FLAG_FD_EU_STALL: u32 = 1 << 16;

// ===============================================================================================
// OA report formats
// ===============================================================================================

// Values continue from the stable format enum.
/* XEHPSDV */
pub const I915_OAR_FORMAT_A32U40_A4U32_B8_C8: u32 = 11;
pub const I915_OA_FORMAT_A24U40_A14U32_B8_C8: u32 = 12;
pub const I915_OAM_FORMAT_A2U64_B8_C8: u32 = 13;
/* DG2 */
pub const I915_OAR_FORMAT_A36U64_B8_C8: u32 = 14;
pub const I915_OAC_FORMAT_A24U64_B8_C8: u32 = 15;
pub const I915_OA_FORMAT_A38U64_R2U64_B8_C8: u32 = 16;
pub const I915_OAM_FORMAT_A2U64_R2U64_B8_C8: u32 = 17;
/// non-ABI
pub const I915_OA_FORMAT_MAX: u32 = 18;

pub const PRELIM_I915_OA_FORMAT_START: u32 = 128;

/* XEHPSDV */
pub const PRELIM_I915_OAR_FORMAT_A32U40_A4U32_B8_C8: u32 = PRELIM_I915_OA_FORMAT_START;
pub const PRELIM_I915_OA_FORMAT_A24U40_A14U32_B8_C8: u32 = 129;
pub const PRELIM_I915_OAM_FORMAT_A2U64_B8_C8: u32 = 130;
/* DG2 */
pub const PRELIM_I915_OAR_FORMAT_A36U64_B8_C8: u32 = 131;
pub const PRELIM_I915_OAC_FORMAT_A24U64_B8_C8: u32 = 132;
pub const PRELIM_I915_OA_FORMAT_A38U64_R2U64_B8_C8: u32 = 133;
pub const PRELIM_I915_OAM_FORMAT_A2U64_R2U64_B8_C8: u32 = 134;
/// non-ABI
pub const PRELIM_I915_OA_FORMAT_MAX: u32 = 135;

// ===============================================================================================
// Perf records and properties
// ===============================================================================================

pub const PRELIM_DRM_I915_PERF_RECORD: u32 = 1 << 16;
/// MMIO trigger queue is full. Available in perf revision 1003.
pub const PRELIM_DRM_I915_PERF_RECORD_OA_MMIO_TRG_Q_FULL: u32 = PRELIM_DRM_I915_PERF_RECORD | 1;

// Values continue from the stable property enum.
pub const DRM_I915_PERF_PROP_OA_BUFFER_SIZE: u32 = 9;
pub const DRM_I915_PERF_PROP_OA_ENGINE_CLASS: u32 = 10;
pub const DRM_I915_PERF_PROP_OA_ENGINE_INSTANCE: u32 = 11;
/// non-ABI
pub const DRM_I915_PERF_PROP_MAX: u32 = 12;

pub const PRELIM_DRM_I915_PERF_PROP: u32 = 1 << 16;

/// Global OA buffer size in bytes. Supported sizes are powers of two from
/// 128Kb to 16Mb; XEHPSDV raises the maximum to 128Mb. Available in perf
/// revision 1001.
pub const PRELIM_DRM_I915_PERF_PROP_OA_BUFFER_SIZE: u32 = PRELIM_DRM_I915_PERF_PROP | 1;

/// Engine class to sample; defaults to render or compute depending on the
/// platform. Available in perf revision 1002; 1004 adds the video and
/// video-enhance classes.
pub const PRELIM_DRM_I915_PERF_PROP_OA_ENGINE_CLASS: u32 = PRELIM_DRM_I915_PERF_PROP | 2;

/// Engine instance to sample, defaults to 0. Available in perf revision 1002.
pub const PRELIM_DRM_I915_PERF_PROP_OA_ENGINE_INSTANCE: u32 = PRELIM_DRM_I915_PERF_PROP | 3;

pub const PRELIM_DRM_I915_PERF_PROP_LAST: u32 = PRELIM_DRM_I915_PERF_PROP | 4;
pub const PRELIM_DRM_I915_PERF_PROP_MAX: u32 = DRM_I915_PERF_PROP_MAX;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn oa_buffer_info_layout() {
        assert_eq!(size_of::<PerfOaBufferInfo>(), 32);
        assert_eq!(size_of::<StallCntrInfo>(), 4);
    }

    #[test]
    fn perf_ioctl_numbers() {
        // _IOWR('i', nr, 32 bytes)
        assert_eq!(PRELIM_I915_PERF_IOCTL_GET_OA_BUFFER_INFO, 0xc020_6980);
        assert_eq!(I915_PERF_IOCTL_GET_OA_BUFFER_INFO, 0xc020_6903);
    }

    #[test]
    fn oa_format_ranges_disjoint() {
        assert!(I915_OA_FORMAT_MAX <= PRELIM_I915_OA_FORMAT_START);
        assert!(PRELIM_I915_OAM_FORMAT_A2U64_R2U64_B8_C8 < PRELIM_I915_OA_FORMAT_MAX);
    }

    #[test]
    fn perf_prop_namespacing() {
        assert!(DRM_I915_PERF_PROP_MAX < PRELIM_DRM_I915_PERF_PROP);
        assert_eq!(PRELIM_DRM_I915_PERF_PROP_OA_BUFFER_SIZE & 0xffff, 1);
        assert!(PRELIM_DRM_I915_EU_STALL_PROP_BUF_SZ < PRELIM_DRM_I915_PERF_PROP);
    }
}
