use crate::uapi::debug::DebuggerOpenParam;
use crate::uapi::{EngineClassInstance, MemoryClassInstance, UserExtension};
use crate::uapi::{PRELIM_I915_USER_EXT, genmask, genmask_ull};
use crate::utils::drm_iowr;

// ===============================================================================================
// Opcode tables
// ===============================================================================================

// Stable numbers grow upward from the bottom of the i915 command range.
pub const DRM_I915_GETPARAM: u32 = 0x06;
pub const DRM_I915_GEM_CREATE: u32 = 0x1b;
pub const DRM_I915_GEM_CONTEXT_GETPARAM: u32 = 0x34;
pub const DRM_I915_GEM_CONTEXT_SETPARAM: u32 = 0x35;
pub const DRM_I915_GEM_VM_BIND: u32 = 0x3c;
pub const DRM_I915_GEM_VM_UNBIND: u32 = 0x3d;
pub const DRM_I915_GEM_VM_ADVISE: u32 = 0x3e;
pub const DRM_I915_GEM_WAIT_USER_FENCE: u32 = 0x3f;
pub const DRM_I915_GEM_VM_PREFETCH: u32 = 0x40;
pub const DRM_I915_UUID_REGISTER: u32 = 0x41;
pub const DRM_I915_UUID_UNREGISTER: u32 = 0x42;
pub const DRM_I915_DEBUGGER_OPEN: u32 = 0x43;
pub const DRM_I915_GEM_CLOS_RESERVE: u32 = 0x44;
pub const DRM_I915_GEM_CLOS_FREE: u32 = 0x45;
pub const DRM_I915_GEM_CACHE_RESERVE: u32 = 0x46;
pub const DRM_I915_GEM_VM_GETPARAM: u32 = DRM_I915_GEM_CONTEXT_GETPARAM;
pub const DRM_I915_GEM_VM_SETPARAM: u32 = DRM_I915_GEM_CONTEXT_SETPARAM;

// PRELIM numbers count downward from 0x5f so the two spaces can never
// collide while both APIs keep growing.
pub const PRELIM_DRM_I915_AGAMA_IOCTL_VERSION: u32 = 0x5f;
/* 0x5e is free, please use if needed */
pub const PRELIM_DRM_I915_GEM_VM_BIND: u32 = 0x5d;
pub const PRELIM_DRM_I915_GEM_VM_UNBIND: u32 = 0x5c;
pub const PRELIM_DRM_I915_GEM_VM_ADVISE: u32 = 0x5b;
pub const PRELIM_DRM_I915_GEM_WAIT_USER_FENCE: u32 = 0x5a;
pub const PRELIM_DRM_I915_GEM_VM_PREFETCH: u32 = 0x59;
pub const PRELIM_DRM_I915_UUID_REGISTER: u32 = 0x58;
pub const PRELIM_DRM_I915_UUID_UNREGISTER: u32 = 0x57;
pub const PRELIM_DRM_I915_DEBUGGER_OPEN: u32 = 0x56;
pub const PRELIM_DRM_I915_GEM_CLOS_RESERVE: u32 = 0x55;
pub const PRELIM_DRM_I915_GEM_CLOS_FREE: u32 = 0x54;
pub const PRELIM_DRM_I915_GEM_CACHE_RESERVE: u32 = 0x53;
pub const PRELIM_DRM_I915_GEM_VM_GETPARAM: u32 = DRM_I915_GEM_CONTEXT_GETPARAM;
pub const PRELIM_DRM_I915_GEM_VM_SETPARAM: u32 = DRM_I915_GEM_CONTEXT_SETPARAM;

// ===============================================================================================
// Ioctl command numbers
// ===============================================================================================

pub const DRM_IOCTL_I915_GETPARAM: u32 = drm_iowr::<GetParam>(DRM_I915_GETPARAM);
pub const DRM_IOCTL_I915_GEM_CONTEXT_GETPARAM: u32 =
    drm_iowr::<GemContextParam>(DRM_I915_GEM_CONTEXT_GETPARAM);
pub const DRM_IOCTL_I915_GEM_CONTEXT_SETPARAM: u32 =
    drm_iowr::<GemContextParam>(DRM_I915_GEM_CONTEXT_SETPARAM);
pub const DRM_IOCTL_I915_GEM_CREATE_EXT: u32 = drm_iowr::<GemCreateExt>(DRM_I915_GEM_CREATE);
pub const DRM_IOCTL_I915_GEM_VM_BIND: u32 = drm_iowr::<GemVmBind>(DRM_I915_GEM_VM_BIND);
pub const DRM_IOCTL_I915_GEM_VM_UNBIND: u32 = drm_iowr::<GemVmBind>(DRM_I915_GEM_VM_UNBIND);
pub const DRM_IOCTL_I915_GEM_VM_ADVISE: u32 = drm_iowr::<GemVmAdvise>(DRM_I915_GEM_VM_ADVISE);
pub const DRM_IOCTL_I915_GEM_WAIT_USER_FENCE: u32 =
    drm_iowr::<GemWaitUserFence>(DRM_I915_GEM_WAIT_USER_FENCE);
pub const DRM_IOCTL_I915_GEM_VM_PREFETCH: u32 =
    drm_iowr::<GemVmPrefetch>(DRM_I915_GEM_VM_PREFETCH);
pub const DRM_IOCTL_I915_UUID_REGISTER: u32 = drm_iowr::<UuidControl>(DRM_I915_UUID_REGISTER);
pub const DRM_IOCTL_I915_UUID_UNREGISTER: u32 = drm_iowr::<UuidControl>(DRM_I915_UUID_UNREGISTER);
pub const DRM_IOCTL_I915_DEBUGGER_OPEN: u32 =
    drm_iowr::<DebuggerOpenParam>(DRM_I915_DEBUGGER_OPEN);
pub const DRM_IOCTL_I915_GEM_CLOS_RESERVE: u32 =
    drm_iowr::<GemClosReserve>(DRM_I915_GEM_CLOS_RESERVE);
pub const DRM_IOCTL_I915_GEM_CLOS_FREE: u32 = drm_iowr::<GemClosFree>(DRM_I915_GEM_CLOS_FREE);
pub const DRM_IOCTL_I915_GEM_CACHE_RESERVE: u32 =
    drm_iowr::<GemCacheReserve>(DRM_I915_GEM_CACHE_RESERVE);
pub const DRM_IOCTL_I915_GEM_VM_GETPARAM: u32 = drm_iowr::<GemVmParam>(DRM_I915_GEM_VM_GETPARAM);
pub const DRM_IOCTL_I915_GEM_VM_SETPARAM: u32 = drm_iowr::<GemVmParam>(DRM_I915_GEM_VM_SETPARAM);

pub const PRELIM_DRM_IOCTL_I915_GEM_CREATE_EXT: u32 = drm_iowr::<GemCreateExt>(DRM_I915_GEM_CREATE);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_BIND: u32 = drm_iowr::<GemVmBind>(PRELIM_DRM_I915_GEM_VM_BIND);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_UNBIND: u32 =
    drm_iowr::<GemVmBind>(PRELIM_DRM_I915_GEM_VM_UNBIND);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_ADVISE: u32 =
    drm_iowr::<GemVmAdvise>(PRELIM_DRM_I915_GEM_VM_ADVISE);
pub const PRELIM_DRM_IOCTL_I915_GEM_WAIT_USER_FENCE: u32 =
    drm_iowr::<GemWaitUserFence>(PRELIM_DRM_I915_GEM_WAIT_USER_FENCE);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_PREFETCH: u32 =
    drm_iowr::<GemVmPrefetch>(PRELIM_DRM_I915_GEM_VM_PREFETCH);
pub const PRELIM_DRM_IOCTL_I915_UUID_REGISTER: u32 =
    drm_iowr::<UuidControl>(PRELIM_DRM_I915_UUID_REGISTER);
pub const PRELIM_DRM_IOCTL_I915_UUID_UNREGISTER: u32 =
    drm_iowr::<UuidControl>(PRELIM_DRM_I915_UUID_UNREGISTER);
pub const PRELIM_DRM_IOCTL_I915_DEBUGGER_OPEN: u32 =
    drm_iowr::<DebuggerOpenParam>(PRELIM_DRM_I915_DEBUGGER_OPEN);
pub const PRELIM_DRM_IOCTL_I915_GEM_CLOS_RESERVE: u32 =
    drm_iowr::<GemClosReserve>(PRELIM_DRM_I915_GEM_CLOS_RESERVE);
pub const PRELIM_DRM_IOCTL_I915_GEM_CLOS_FREE: u32 =
    drm_iowr::<GemClosFree>(PRELIM_DRM_I915_GEM_CLOS_FREE);
pub const PRELIM_DRM_IOCTL_I915_GEM_CACHE_RESERVE: u32 =
    drm_iowr::<GemCacheReserve>(PRELIM_DRM_I915_GEM_CACHE_RESERVE);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_GETPARAM: u32 =
    drm_iowr::<GemVmParam>(PRELIM_DRM_I915_GEM_VM_GETPARAM);
pub const PRELIM_DRM_IOCTL_I915_GEM_VM_SETPARAM: u32 =
    drm_iowr::<GemVmParam>(PRELIM_DRM_I915_GEM_VM_SETPARAM);

// ===============================================================================================
// getparam
// ===============================================================================================

pub const PRELIM_I915_PARAM: u32 = 1 << 16;

/// Number of context map engines addressable via the low bits of execbuf2
/// flags. -EINVAL from the driver means the legacy maximum of 64 applies.
pub const PRELIM_I915_PARAM_EXECBUF2_MAX_ENGINE: u32 = PRELIM_I915_PARAM | 1;
pub const I915_PARAM_EXECBUF2_MAX_ENGINE: u32 = 55;

/// Total local memory in bytes.
pub const PRELIM_I915_PARAM_LMEM_TOTAL_BYTES: u32 = PRELIM_I915_PARAM | 2;
pub const I915_PARAM_LMEM_TOTAL_BYTES: u32 = 56;

/// Available local memory in bytes.
pub const PRELIM_I915_PARAM_LMEM_AVAIL_BYTES: u32 = PRELIM_I915_PARAM | 3;
pub const I915_PARAM_LMEM_AVAIL_BYTES: u32 = 57;

/// Shared Virtual Memory (SVM) support capability.
pub const PRELIM_I915_PARAM_HAS_SVM: u32 = PRELIM_I915_PARAM | 4;
pub const I915_PARAM_HAS_SVM: u32 = 58;

/// Frequency of the timestamps in OA reports. Used to be the CS timestamp
/// frequency but differs on some platforms.
pub const PRELIM_I915_PARAM_OA_TIMESTAMP_FREQUENCY: u32 = PRELIM_I915_PARAM | 5;

/// VM_BIND feature availability.
pub const PRELIM_I915_PARAM_HAS_VM_BIND: u32 = PRELIM_I915_PARAM | 6;
pub const I915_PARAM_HAS_VM_BIND: u32 = 59;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GetParam {
    pub param: i32,
    pub pad: i32,
    /// User pointer to the returned `i32` value.
    pub value_ptr: u64,
}

// ===============================================================================================
// Object creation
// ===============================================================================================

pub const PRELIM_I915_GEM_CREATE_EXT_SETPARAM: u32 = PRELIM_I915_USER_EXT | 1;
pub const PRELIM_I915_GEM_CREATE_EXT_FLAGS_UNKNOWN: u32 = !PRELIM_I915_GEM_CREATE_EXT_SETPARAM;
pub const I915_GEM_CREATE_EXT_SETPARAM: u32 = 1 << 0;
pub const I915_GEM_CREATE_EXT_FLAGS_UNKNOWN: u32 = (I915_GEM_CREATE_EXT_SETPARAM << 1).wrapping_neg();

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemCreateExt {
    /// Requested size; the page-aligned allocated size comes back here.
    pub size: u64,
    /// Returned (nonzero) handle for the object.
    pub handle: u32,
    pub pad: u32,
    pub extensions: u64,
}

/// Select the object namespace for a param.
pub const PRELIM_I915_OBJECT_PARAM: u64 = 1 << 48;
pub const I915_OBJECT_PARAM: u64 = 1 << 32;

/// Placement list param; data points to an array of [`MemoryClassInstance`]
/// in priority order. Requires `PRELIM_I915_OBJECT_PARAM` in the namespace
/// bits.
pub const PRELIM_I915_PARAM_MEMORY_REGIONS: u64 = (1 << 16) | 0x1;
pub const I915_PARAM_MEMORY_REGIONS: u64 = 0x1;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemObjectParam {
    /// Object handle (0 for create-time setparam).
    pub handle: u32,
    /// Data pointer size.
    pub size: u32,
    pub param: u64,
    /// Data value or pointer.
    pub data: u64,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemCreateExtSetparam {
    pub base: UserExtension,
    pub param: GemObjectParam,
}

// ===============================================================================================
// VM bind/unbind
// ===============================================================================================

pub const PRELIM_I915_GEM_VM_BIND_IMMEDIATE: u64 = 1 << 63;
pub const PRELIM_I915_GEM_VM_BIND_READONLY: u64 = 1 << 62;
pub const PRELIM_I915_GEM_VM_BIND_CAPTURE: u64 = 1 << 61;
pub const PRELIM_I915_GEM_VM_BIND_FD: u64 = 1 << 60;
pub const I915_GEM_VM_BIND_IMMEDIATE: u64 = 1 << 0;
pub const I915_GEM_VM_BIND_READONLY: u64 = 1 << 1;
pub const I915_GEM_VM_BIND_CAPTURE: u64 = 1 << 2;
pub const I915_GEM_VM_BIND_FD: u64 = 1 << 3;

/// BO handle, or a file descriptor of -1 for system pages when
/// `PRELIM_I915_GEM_VM_BIND_FD` is set.
#[repr(C)]
#[derive(Copy, Clone)]
pub union GemVmBindObject {
    pub handle: u32,
    pub fd: i32,
}

/// VA to object/buffer mapping to [un]bind.
///
/// A vm_bind holds a reference on the BO which is released during the
/// corresponding vm_unbind or when the VM is closed; closing the BO alone
/// does not release it.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct GemVmBind {
    pub vm_id: u32,
    pub object: GemVmBindObject,
    /// VA start to [un]bind.
    pub start: u64,
    /// Offset in object to [un]bind.
    pub offset: u64,
    /// VA length to [un]bind.
    pub length: u64,
    pub flags: u64,
    pub extensions: u64,
}

pub const PRELIM_I915_VM_BIND_EXT_SYNC_FENCE: u32 = PRELIM_I915_USER_EXT | 0;
pub const I915_VM_BIND_EXT_SYNC_FENCE: u32 = 0;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct VmBindExtSyncFence {
    pub base: UserExtension,
    pub addr: u64,
    pub val: u64,
}

pub const PRELIM_I915_VM_BIND_EXT_UUID: u32 = PRELIM_I915_USER_EXT | 1;
pub const I915_VM_BIND_EXT_UUID: u32 = 1;

/// Attaches registered metadata to the vm range being bound.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct VmBindExtUuid {
    pub base: UserExtension,
    /// Handle to the registered UUID resource.
    pub uuid_handle: u32,
}

pub const PRELIM_I915_VM_BIND_EXT_SET_PAT: u32 = PRELIM_I915_USER_EXT | 2;
pub const I915_VM_BIND_EXT_SET_PAT: u32 = 2;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct VmBindExtSetPat {
    pub base: UserExtension,
    pub pat_index: u64,
}

// ===============================================================================================
// VM control / VM param
// ===============================================================================================

pub const PRELIM_I915_GEM_VM_CONTROL_EXT_REGION: u32 = PRELIM_I915_USER_EXT | 0;
pub const I915_GEM_VM_CONTROL_EXT_REGION: u32 = 0;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemVmRegionExt {
    pub base: UserExtension,
    /// Memory region used to find the gt to create the vm on.
    pub region: MemoryClassInstance,
    pub pad: u32,
}

pub const PRELIM_I915_VM_CREATE_FLAGS_DISABLE_SCRATCH: u32 = (1 << 16) | 1;
pub const I915_VM_CREATE_FLAGS_DISABLE_SCRATCH: u32 = 1 << 0;
pub const PRELIM_I915_VM_CREATE_FLAGS_UNKNOWN: u32 = !(genmask(16, 16) | genmask(0, 0));

pub const PRELIM_I915_VM_PARAM: u64 = 1 << 63;
pub const I915_VM_PARAM: u64 = 2 << 32;
pub const PRELIM_I915_GEM_VM_PARAM_SVM: u64 = 1 << 16;
pub const I915_GEM_VM_PARAM_SVM: u64 = 0x1;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemVmParam {
    pub vm_id: u32,
    pub rsvd: u32,
    pub param: u64,
    pub value: u64,
}

// ===============================================================================================
// VM advise / prefetch
// ===============================================================================================

pub const PRELIM_I915_VM_ADVISE: u32 = 1 << 16;
/// Clears a previously set ATOMIC_SYSTEM / ATOMIC_DEVICE hint.
pub const PRELIM_I915_VM_ADVISE_ATOMIC_NONE: u32 = PRELIM_I915_VM_ADVISE | 0;
/// Atomic access is enabled for both CPU and GPU; influences migration policy.
pub const PRELIM_I915_VM_ADVISE_ATOMIC_SYSTEM: u32 = PRELIM_I915_VM_ADVISE | 1;
/// Atomic access is enabled for GPU devices; influences migration policy.
pub const PRELIM_I915_VM_ADVISE_ATOMIC_DEVICE: u32 = PRELIM_I915_VM_ADVISE | 2;
/// Preferred memory class:instance for the backing store. Hint only; atomic
/// hints win on conflict. Clear by passing memory class NONE.
pub const PRELIM_I915_VM_ADVISE_PREFERRED_LOCATION: u32 = PRELIM_I915_VM_ADVISE | 3;
pub const I915_VM_ADVISE_ATOMIC_NONE: u32 = 0;
pub const I915_VM_ADVISE_ATOMIC_SYSTEM: u32 = 1;
pub const I915_VM_ADVISE_ATOMIC_DEVICE: u32 = 2;
pub const I915_VM_ADVISE_PREFERRED_LOCATION: u32 = 3;

/// Set an attribute (hint) for an address range or a whole buffer object.
///
/// Whole object: specify `handle`. Address range: specify `vm_id`, `start`
/// and `length`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemVmAdvise {
    pub vm_id: u32,
    pub handle: u32,
    pub start: u64,
    pub length: u64,
    pub attribute: u32,
    /// Preferred location for object backing.
    pub region: MemoryClassInstance,
    pub rsvd: [u32; 2],
}

/// Prefetch an address range to a memory region.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemVmPrefetch {
    pub region: u32,
    pub rsvd: u32,
    pub start: u64,
    pub length: u64,
}

// ===============================================================================================
// User fence wait
// ===============================================================================================

pub const PRELIM_I915_UFENCE: u16 = 1 << 8;
pub const PRELIM_I915_UFENCE_WAIT_EQ: u16 = PRELIM_I915_UFENCE | 0;
pub const PRELIM_I915_UFENCE_WAIT_NEQ: u16 = PRELIM_I915_UFENCE | 1;
pub const PRELIM_I915_UFENCE_WAIT_GT: u16 = PRELIM_I915_UFENCE | 2;
pub const PRELIM_I915_UFENCE_WAIT_GTE: u16 = PRELIM_I915_UFENCE | 3;
pub const PRELIM_I915_UFENCE_WAIT_LT: u16 = PRELIM_I915_UFENCE | 4;
pub const PRELIM_I915_UFENCE_WAIT_LTE: u16 = PRELIM_I915_UFENCE | 5;
pub const PRELIM_I915_UFENCE_WAIT_BEFORE: u16 = PRELIM_I915_UFENCE | 6;
pub const PRELIM_I915_UFENCE_WAIT_AFTER: u16 = PRELIM_I915_UFENCE | 7;
pub const I915_UFENCE_WAIT_EQ: u16 = 0;
pub const I915_UFENCE_WAIT_NEQ: u16 = 1;
pub const I915_UFENCE_WAIT_GT: u16 = 2;
pub const I915_UFENCE_WAIT_GTE: u16 = 3;
pub const I915_UFENCE_WAIT_LT: u16 = 4;
pub const I915_UFENCE_WAIT_LTE: u16 = 5;
pub const I915_UFENCE_WAIT_BEFORE: u16 = 6;
pub const I915_UFENCE_WAIT_AFTER: u16 = 7;

/// Wait is serviced by a kernel async worker; `ctx_id` is ignored.
pub const PRELIM_I915_UFENCE_WAIT_SOFT: u16 = 1 << 15;
pub const PRELIM_I915_UFENCE_WAIT_ABSTIME: u16 = 1 << 14;
pub const I915_UFENCE_WAIT_SOFT: u16 = 0x1;
pub const I915_UFENCE_WAIT_ABSTIME: u16 = 0x2;

pub const PRELIM_I915_UFENCE_WAIT_U8: u64 = 0xff;
pub const PRELIM_I915_UFENCE_WAIT_U16: u64 = 0xffff;
pub const PRELIM_I915_UFENCE_WAIT_U32: u64 = 0xffff_ffff;
pub const PRELIM_I915_UFENCE_WAIT_U64: u64 = 0xffff_ffff_ffff_ffff;
pub const I915_UFENCE_WAIT_U8: u64 = 0xff;
pub const I915_UFENCE_WAIT_U16: u64 = 0xffff;
pub const I915_UFENCE_WAIT_U32: u64 = 0xffff_ffff;
pub const I915_UFENCE_WAIT_U64: u64 = 0xffff_ffff_ffff_ffff;

/// Wait on a user fence.
///
/// Wakes up either from the GPU context indicated by `ctx_id`, or from the
/// kernel async worker when `PRELIM_I915_UFENCE_WAIT_SOFT` is set.
/// The wakeup condition is `(*addr & mask) op (value & mask)`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemWaitUserFence {
    pub extensions: u64,
    pub addr: u64,
    pub ctx_id: u32,
    pub op: u16,
    pub flags: u16,
    pub value: u64,
    pub mask: u64,
    pub timeout: i64,
}

// ===============================================================================================
// UUID resources
// ===============================================================================================

pub const PRELIM_I915_UUID_CLASS_STRING: u32 = u32::MAX;
pub const I915_UUID_CLASS_STRING: u32 = u32::MAX;
pub const PRELIM_I915_UUID_CLASS_MAX_RESERVED: u32 = (-1024i32) as u32;
pub const I915_UUID_CLASS_MAX_RESERVED: u32 = (-1024i32) as u32;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct UuidControl {
    /// String formatted like "%08x-%04x-%04x-%04x-%012x".
    pub uuid: [u8; 36],
    /// Predefined UUID class or handle to a previously registered class.
    pub uuid_class: u32,
    /// MBZ
    pub flags: u32,
    /// Pointer to the CPU memory payload associated with the resource. For
    /// class STRING it must point to a valid string buffer, otherwise to a
    /// page-aligned buffer or be NULL.
    pub ptr: u64,
    /// Length of the payload in bytes.
    pub size: u64,
    /// Output: registered handle ID.
    pub handle: u32,
    /// MBZ
    pub extensions: u64,
}

impl Default for UuidControl {
    fn default() -> Self {
        Self {
            uuid: [0; 36],
            uuid_class: 0,
            flags: 0,
            ptr: 0,
            size: 0,
            handle: 0,
            extensions: 0,
        }
    }
}

// ===============================================================================================
// CLOS / cache way reservation
// ===============================================================================================

/// Request reservation of one free CLOS, for use in subsequent cache
/// reservations.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemClosReserve {
    pub clos_index: u16,
    pub pad16: u16,
}

/// Free a previously reserved CLOS set. Any active cache reservations for
/// the CLOS are dropped and returned to the shared set.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemClosFree {
    pub clos_index: u16,
    pub pad16: u16,
}

/// Request, or release, reservation of cache ways within a reserved CLOS.
///
/// With `num_ways` zero the existing reservation for (clos_index,
/// cache_level) is dropped and the waymask tracks the shared set again.
/// Otherwise the requested ways move from the shared set to this CLOS.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemCacheReserve {
    pub clos_index: u16,
    /// e.g. 3 for L3
    pub cache_level: u16,
    pub num_ways: u16,
    pub pad16: u16,
}

// ===============================================================================================
// Context parameters
// ===============================================================================================

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemContextParam {
    pub ctx_id: u32,
    pub size: u32,
    pub param: u64,
    pub value: u64,
}

pub const PRELIM_I915_CONTEXT_PARAM: u32 = 1 << 16;

/// Set or clear debug flags on a context. The value works with 32-bit
/// masking: the high half selects which flags change, the low half gives
/// the new state (e.g. 0x0000000100000001 sets bit 0, 0x0000000100000000
/// clears it).
pub const PRELIM_I915_CONTEXT_PARAM_DEBUG_FLAGS: u32 = PRELIM_I915_CONTEXT_PARAM | 0xfd;
pub const I915_CONTEXT_PARAM_DEBUG_FLAGS: u32 = 0xfd; /* temporary */

/// SIP is provided with the pipeline setup; the driver raises an exception
/// on hang resolution and waits for the SIP to signal attention before
/// capturing user objects of the context.
pub const PRELIM_I915_CONTEXT_PARAM_DEBUG_FLAG_SIP: u64 = 1 << 0;
pub const I915_CONTEXT_PARAM_DEBUG_FLAG_SIP: u64 = 1 << 0;

/// Access counter thresholds and configuration. Disabled by default.
pub const PRELIM_I915_CONTEXT_PARAM_ACC: u32 = PRELIM_I915_CONTEXT_PARAM | 0xd;
pub const I915_CONTEXT_PARAM_ACC: u32 = 0xd;

/// Enable runalone mode on a context, disabled by default.
pub const PRELIM_I915_CONTEXT_PARAM_RUNALONE: u32 = PRELIM_I915_CONTEXT_PARAM | 0xf;

pub const PRELIM_I915_CONTEXT_ACG_128K: u8 = 0;
pub const PRELIM_I915_CONTEXT_ACG_2M: u8 = 1;
pub const PRELIM_I915_CONTEXT_ACG_16M: u8 = 2;
pub const PRELIM_I915_CONTEXT_ACG_64M: u8 = 3;
pub const I915_CONTEXT_ACG_128K: u8 = 0;
pub const I915_CONTEXT_ACG_2M: u8 = 1;
pub const I915_CONTEXT_ACG_16M: u8 = 2;
pub const I915_CONTEXT_ACG_64M: u8 = 3;

/// Access counter programming, only allowed as a context-create extension.
///
/// Once a page's access count reaches `trigger` the hardware raises a
/// trigger interrupt and the driver migrates the page toward local memory.
/// A counter de-allocated after reaching `notify` is reported via
/// interrupt as well. Zero disables the respective reporting.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct GemContextParamAcc {
    pub trigger: u16,
    pub notify: u16,
    pub granularity: u8,
    pub pad1: u8,
    pub pad2: u16,
}

pub const PRELIM_I915_CONTEXT_CREATE_FLAGS_ULLS: u32 = 1 << 31;
pub const I915_CONTEXT_CREATE_FLAGS_ULLS: u32 = 1 << 2;
pub const I915_CONTEXT_CREATE_FLAGS_UNKNOWN: u32 = !(genmask(31, 31) | genmask(2, 0));

// ===============================================================================================
// Execbuf extensions
// ===============================================================================================

// Number of BBs in the execbuf2 IOCTL minus one; lets a single execbuf
// submit multiple BBs once the context has a parallel engine configured.
pub const I915_EXEC_NUMBER_BB_LSB: u32 = 21;
pub const I915_EXEC_NUMBER_BB_MASK: u64 = 0x3f << I915_EXEC_NUMBER_BB_LSB;
pub const I915_EXEC_NUMBER_BB_MSB: u32 = 26;
pub const I915_EXEC_NUMBER_BB_MASK_MSB: u64 = 1 << I915_EXEC_NUMBER_BB_MSB;
pub const PRELIM_I915_EXEC_NUMBER_BB_LSB: u32 = 48;
pub const PRELIM_I915_EXEC_NUMBER_BB_MASK: u64 = 0x3f << PRELIM_I915_EXEC_NUMBER_BB_LSB;
pub const PRELIM_I915_EXEC_NUMBER_BB_MSB: u32 = 54;
pub const PRELIM_I915_EXEC_NUMBER_BB_MASK_MSB: u64 = 1 << PRELIM_I915_EXEC_NUMBER_BB_MSB;

// Expands the addressable engines from 64 to 256. Userspace must query
// I915_PARAM_EXECBUF2_MAX_ENGINE and then set ENGINE_MASK_SELECT; only
// applies to contexts with an engine map.
pub const PRELIM_I915_EXEC_ENGINE_MASK: u64 = 0xff;
pub const PRELIM_I915_EXEC_ENGINE_MASK_SELECT: u64 = 1 << 55;
pub const I915_EXEC_ENGINE_MASK: u64 = 0xff;
pub const I915_EXEC_ENGINE_MASK_SELECT: u64 = 1 << 27;

pub const __I915_EXEC_UNKNOWN_FLAGS: u64 = !(genmask_ull(55, 48) | genmask_ull(27, 0));

// ===============================================================================================
// Parallel submission
// ===============================================================================================

pub const PRELIM_I915_CONTEXT_ENGINES_EXT_PARALLEL_SUBMIT: u32 = PRELIM_I915_USER_EXT | 2;
pub const I915_CONTEXT_ENGINES_EXT_PARALLEL_SUBMIT: u32 = 2;
pub const PRELIM_I915_CONTEXT_ENGINES_EXT_PARALLEL2_SUBMIT: u32 = PRELIM_I915_USER_EXT | 3;

/// Create implicit bonds between each context. Each context must have the
/// same number of siblings; bonds form between the siblings.
pub const PRELIM_I915_PARALLEL_IMPLICT_BONDS: u64 = 1 << 63;
pub const I915_PARALLEL_IMPLICT_BONDS: u64 = 1 << 0;
/// Do not preempt mid-BB; insert coordinated preemption points between
/// each set of BBs instead. A BB must then be submitted on every hardware
/// context of the parallel gem context.
pub const PRELIM_I915_PARALLEL_BATCH_PREEMPT_BOUNDARY: u64 = 1 << 62;
pub const I915_PARALLEL_BATCH_PREEMPT_BOUNDARY: u64 = 1 << 1;
pub const __I915_PARALLEL_UNKNOWN_FLAGS: u64 = !genmask_ull(1, 0);
pub const __PRELIM_I915_PARALLEL_UNKNOWN_FLAGS: u64 =
    !(genmask_ull(63, 62) | genmask_ull(1, 0));

/// Configure a gem context so multiple BBs are submitted in one execbuf
/// IOCTL and scheduled to run in parallel on the GPU.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ContextEnginesParallelSubmit {
    pub base: UserExtension,
    /// All undefined flags must be zero.
    pub flags: u64,
    /// Reserved for future use; must be zero.
    pub mbz64: [u64; 4],
}

/// Configure a slot in the context engine map for parallel submission.
///
/// Once a slot is configured for N BBs, exactly N BBs are expected in each
/// execbuf IOCTL: the last N buffer objects, or the first N with
/// I915_EXEC_BATCH_FIRST. Contexts must be of the same engine class in
/// logically contiguous order.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct ContextEnginesParallel2Submit {
    pub base: UserExtension,
    /// Slot for the parallel engine.
    pub engine_index: u16,
    /// Number of contexts per parallel engine.
    pub width: u16,
    /// Number of siblings per context.
    pub num_siblings: u16,
    pub mbz16: u16,
    /// All undefined flags must be zero.
    pub flags: u64,
    pub mbz64: [u64; 3],
    /// 2-d trailing array of engine instances, length = width * num_siblings,
    /// index = sibling + slot * num_siblings.
    pub engines: [EngineClassInstance; 0],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn gem_struct_layouts() {
        assert_eq!(size_of::<GetParam>(), 16);
        assert_eq!(size_of::<GemCreateExt>(), 24);
        assert_eq!(offset_of!(GemCreateExt, extensions), 16);
        assert_eq!(size_of::<GemObjectParam>(), 24);
        assert_eq!(size_of::<GemCreateExtSetparam>(), 40);
        assert_eq!(size_of::<GemVmBind>(), 48);
        assert_eq!(offset_of!(GemVmBind, start), 8);
        assert_eq!(offset_of!(GemVmBind, extensions), 40);
        assert_eq!(size_of::<GemVmAdvise>(), 40);
        assert_eq!(offset_of!(GemVmAdvise, attribute), 24);
        assert_eq!(offset_of!(GemVmAdvise, region), 28);
        assert_eq!(offset_of!(GemVmAdvise, rsvd), 32);
        assert_eq!(size_of::<GemVmPrefetch>(), 24);
        assert_eq!(size_of::<GemVmParam>(), 24);
        assert_eq!(size_of::<GemWaitUserFence>(), 48);
        assert_eq!(offset_of!(GemWaitUserFence, op), 20);
        assert_eq!(offset_of!(GemWaitUserFence, value), 24);
        assert_eq!(offset_of!(GemWaitUserFence, timeout), 40);
        assert_eq!(size_of::<GemClosReserve>(), 4);
        assert_eq!(size_of::<GemClosFree>(), 4);
        assert_eq!(size_of::<GemCacheReserve>(), 8);
        assert_eq!(size_of::<GemContextParam>(), 24);
        assert_eq!(size_of::<GemContextParamAcc>(), 8);
    }

    #[test]
    fn uuid_control_layout() {
        assert_eq!(offset_of!(UuidControl, uuid_class), 36);
        assert_eq!(offset_of!(UuidControl, flags), 40);
        // 4 bytes of natural alignment padding before ptr, as in the kernel.
        assert_eq!(offset_of!(UuidControl, ptr), 48);
        assert_eq!(offset_of!(UuidControl, size), 56);
        assert_eq!(offset_of!(UuidControl, handle), 64);
        assert_eq!(offset_of!(UuidControl, extensions), 72);
        assert_eq!(size_of::<UuidControl>(), 80);
    }

    #[test]
    fn extension_layouts() {
        assert_eq!(size_of::<VmBindExtSyncFence>(), 32);
        assert_eq!(size_of::<VmBindExtUuid>(), 24);
        assert_eq!(size_of::<VmBindExtSetPat>(), 24);
        assert_eq!(size_of::<GemVmRegionExt>(), 24);
        assert_eq!(size_of::<ContextEnginesParallelSubmit>(), 56);
        assert_eq!(size_of::<ContextEnginesParallel2Submit>(), 56);
        assert_eq!(offset_of!(ContextEnginesParallel2Submit, engine_index), 16);
        assert_eq!(offset_of!(ContextEnginesParallel2Submit, flags), 24);
        assert_eq!(offset_of!(ContextEnginesParallel2Submit, engines), 56);
    }

    #[test]
    fn ioctl_numbers_match_kernel() {
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_VM_BIND, 0xc030_649d);
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_VM_UNBIND, 0xc030_649c);
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_WAIT_USER_FENCE, 0xc030_649a);
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_VM_PREFETCH, 0xc018_6499);
        assert_eq!(PRELIM_DRM_IOCTL_I915_UUID_REGISTER, 0xc050_6498);
        assert_eq!(PRELIM_DRM_IOCTL_I915_DEBUGGER_OPEN, 0xc020_6496);
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_CLOS_RESERVE, 0xc004_6495);
        assert_eq!(PRELIM_DRM_IOCTL_I915_GEM_CACHE_RESERVE, 0xc008_6493);
        assert_eq!(DRM_IOCTL_I915_GEM_VM_BIND, 0xc030_647c);
        assert_eq!(DRM_IOCTL_I915_GEM_VM_GETPARAM, 0xc018_6474);
        assert_eq!(DRM_IOCTL_I915_GETPARAM, 0xc010_6446);
        assert_eq!(DRM_IOCTL_I915_GEM_CREATE_EXT, 0xc018_645b);
    }

    #[test]
    fn opcode_ranges_disjoint() {
        // Stable numbers grow up from 0x3c, PRELIM numbers count down from
        // 0x5f; the ranges must never meet.
        let stable_max = DRM_I915_GEM_CACHE_RESERVE;
        let prelim_min = PRELIM_DRM_I915_GEM_CACHE_RESERVE;
        assert!(stable_max < prelim_min);
        assert!(PRELIM_DRM_I915_AGAMA_IOCTL_VERSION == 0x5f);
    }

    #[test]
    fn param_namespaces_disjoint() {
        for prelim in [
            PRELIM_I915_PARAM_EXECBUF2_MAX_ENGINE,
            PRELIM_I915_PARAM_LMEM_TOTAL_BYTES,
            PRELIM_I915_PARAM_LMEM_AVAIL_BYTES,
            PRELIM_I915_PARAM_HAS_SVM,
            PRELIM_I915_PARAM_OA_TIMESTAMP_FREQUENCY,
            PRELIM_I915_PARAM_HAS_VM_BIND,
        ] {
            assert_ne!(prelim & PRELIM_I915_PARAM, 0);
        }
        for stable in [
            I915_PARAM_EXECBUF2_MAX_ENGINE,
            I915_PARAM_LMEM_TOTAL_BYTES,
            I915_PARAM_LMEM_AVAIL_BYTES,
            I915_PARAM_HAS_SVM,
            I915_PARAM_HAS_VM_BIND,
        ] {
            assert!(stable < PRELIM_I915_PARAM);
        }
    }

    #[test]
    fn ufence_op_encoding() {
        assert_eq!(PRELIM_I915_UFENCE_WAIT_EQ, 0x100);
        assert_eq!(PRELIM_I915_UFENCE_WAIT_AFTER, 0x107);
        assert_eq!(PRELIM_I915_UFENCE_WAIT_EQ & !PRELIM_I915_UFENCE, I915_UFENCE_WAIT_EQ);
        assert_eq!(
            PRELIM_I915_UFENCE_WAIT_AFTER & !PRELIM_I915_UFENCE,
            I915_UFENCE_WAIT_AFTER
        );
    }

    #[test]
    fn unknown_flag_masks() {
        assert_eq!(__I915_EXEC_UNKNOWN_FLAGS, !0x00ff_0000_0fff_ffffu64);
        assert_eq!(__PRELIM_I915_PARALLEL_UNKNOWN_FLAGS, !0xc000_0000_0000_0003u64);
        assert_eq!(I915_GEM_CREATE_EXT_FLAGS_UNKNOWN, 0xffff_fffe);
        assert_eq!(PRELIM_I915_VM_CREATE_FLAGS_UNKNOWN, !0x0001_0001u32);
    }
}
