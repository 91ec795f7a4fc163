use crate::uapi::EngineClassInstance;
use crate::uapi::ioctl::GemContextParam;
use crate::utils::{io, iow, iowr};

// ===============================================================================================
// Debugger connection
// ===============================================================================================

pub const PRELIM_DRM_I915_DEBUG_FLAG_FD_NONBLOCK: u32 = 1 << 31;
pub const DRM_I915_DEBUG_FLAG_FD_NONBLOCK: u32 = 1 << 0;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebuggerOpenParam {
    /// input: target process ID
    pub pid: u64,
    pub flags: u32,
    pub version: u32,
    /// input: event types to subscribe to
    pub events: u64,
    /// MBZ
    pub extensions: u64,
}

// Debugger-fd ioctls; the PRELIM set uses its own magic ('j') so it can
// never collide with stable numbers on the 'i' magic.
pub const PRELIM_I915_DEBUG_IOCTL_READ_EVENT: u32 = io(0x6a, 0x0);
pub const I915_DEBUG_IOCTL_READ_EVENT: u32 = io(0x69, 0x0);
pub const PRELIM_I915_DEBUG_IOCTL_READ_UUID: u32 = iowr::<DebugReadUuid>(0x6a, 0x1);
pub const I915_DEBUG_IOCTL_READ_UUID: u32 = iowr::<DebugReadUuid>(0x69, 0x1);
pub const PRELIM_I915_DEBUG_IOCTL_VM_OPEN: u32 = iow::<DebugVmOpen>(0x6a, 0x2);
pub const PRELIM_I915_DEBUG_IOCTL_EU_CONTROL: u32 = iowr::<DebugEuControl>(0x6a, 0x3);
pub const PRELIM_I915_DEBUG_IOCTL_ACK_EVENT: u32 = iow::<DebugEventAck>(0x6a, 0x4);

// ===============================================================================================
// Event records
// ===============================================================================================

pub const PRELIM_DRM_I915_DEBUG_EVENT_NONE: u32 = 0;
pub const PRELIM_DRM_I915_DEBUG_EVENT_READ: u32 = 1;
pub const PRELIM_DRM_I915_DEBUG_EVENT_CLIENT: u32 = 2;
pub const PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT: u32 = 3;
pub const PRELIM_DRM_I915_DEBUG_EVENT_UUID: u32 = 4;
pub const PRELIM_DRM_I915_DEBUG_EVENT_VM: u32 = 5;
pub const PRELIM_DRM_I915_DEBUG_EVENT_VM_BIND: u32 = 6;
pub const PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT_PARAM: u32 = 7;
pub const PRELIM_DRM_I915_DEBUG_EVENT_EU_ATTENTION: u32 = 8;
pub const PRELIM_DRM_I915_DEBUG_EVENT_ENGINES: u32 = 9;
pub const PRELIM_DRM_I915_DEBUG_EVENT_MAX_EVENT: u32 = PRELIM_DRM_I915_DEBUG_EVENT_ENGINES;

// Stable type values exist for the event types merged back upstream.
pub const DRM_I915_DEBUG_EVENT_NONE: u32 = 0;
pub const DRM_I915_DEBUG_EVENT_READ: u32 = 1;
pub const DRM_I915_DEBUG_EVENT_CLIENT: u32 = 2;
pub const DRM_I915_DEBUG_EVENT_CONTEXT: u32 = 3;
pub const DRM_I915_DEBUG_EVENT_UUID: u32 = 4;

pub const PRELIM_DRM_I915_DEBUG_EVENT_CREATE: u32 = 1 << 31;
pub const PRELIM_DRM_I915_DEBUG_EVENT_DESTROY: u32 = 1 << 30;
pub const PRELIM_DRM_I915_DEBUG_EVENT_STATE_CHANGE: u32 = 1 << 29;
/// The kernel blocks the debuggee until this event is acknowledged with
/// [`PRELIM_I915_DEBUG_IOCTL_ACK_EVENT`].
pub const PRELIM_DRM_I915_DEBUG_EVENT_NEED_ACK: u32 = 1 << 28;
pub const DRM_I915_DEBUG_EVENT_CREATE: u32 = 1 << 0;
pub const DRM_I915_DEBUG_EVENT_DESTROY: u32 = 1 << 1;
pub const DRM_I915_DEBUG_EVENT_STATE_CHANGE: u32 = 1 << 2;
pub const DRM_I915_DEBUG_EVENT_NEED_ACK: u32 = 1 << 3;

/// Common header of every debug event record; `size` covers header plus
/// the type-specific payload.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEvent {
    pub r#type: u32,
    pub flags: u32,
    pub seqno: u64,
    pub size: u64,
}

/// flags = CREATE/DESTROY
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventClient {
    pub base: DebugEvent,
    /// Unique per debug connection.
    pub handle: u64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventContext {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub handle: u64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventUuid {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub handle: u64,
    /// Can be filtered based on pre-defined classes.
    pub class_handle: u64,
    pub payload_size: u64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventVm {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub handle: u64,
}

/// Followed by `num_uuids` u64 uuid handles.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventVmBind {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub vm_handle: u64,
    pub va_start: u64,
    pub va_length: u64,
    pub num_uuids: u32,
    pub flags: u32,
    pub uuids: [u64; 0],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventContextParam {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub ctx_handle: u64,
    pub param: GemContextParam,
}

/// Followed by `bitmask_size` bytes of thread attention bits, in natural
/// hardware order starting from slice=0, subslice=0, eu=0, 8 attention
/// bits per EU. On dual-subslice parts the bitmask covers lockstepped EU
/// pairs, i.e. half the logical EU count of the topology query.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventEuAttention {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub ctx_handle: u64,
    pub lrc_handle: u64,
    pub flags: u32,
    pub ci: EngineClassInstance,
    pub bitmask_size: u32,
    pub bitmask: [u8; 0],
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEngineInfo {
    pub engine: EngineClassInstance,
    pub lrc_handle: u64,
}

/// Followed by `num_engines` [`DebugEngineInfo`] entries.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventEngines {
    pub base: DebugEvent,
    pub client_handle: u64,
    pub ctx_handle: u64,
    pub num_engines: u64,
    pub engines: [DebugEngineInfo; 0],
}

// ===============================================================================================
// Debugger-fd requests
// ===============================================================================================

#[repr(C, packed)]
#[derive(Debug, Copy, Clone)]
pub struct DebugReadUuid {
    pub client_handle: u64,
    pub handle: u64,
    /// MBZ
    pub flags: u32,
    /// output
    pub uuid: [u8; 36],
    pub payload_ptr: u64,
    pub payload_size: u64,
}

impl Default for DebugReadUuid {
    fn default() -> Self {
        Self {
            client_handle: 0,
            handle: 0,
            flags: 0,
            uuid: [0; 36],
            payload_ptr: 0,
            payload_size: 0,
        }
    }
}

pub const PRELIM_I915_DEBUG_VM_OPEN_READ_ONLY: u64 = libc::O_RDONLY as u64;
pub const PRELIM_I915_DEBUG_VM_OPEN_WRITE_ONLY: u64 = libc::O_WRONLY as u64;
pub const PRELIM_I915_DEBUG_VM_OPEN_READ_WRITE: u64 = libc::O_RDWR as u64;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugVmOpen {
    pub client_handle: u64,
    /// input: the target address space (ppGTT)
    pub handle: u64,
    pub flags: u64,
}

pub const PRELIM_I915_DEBUG_EU_THREADS_CMD_INTERRUPT_ALL: u32 = 0;
pub const PRELIM_I915_DEBUG_EU_THREADS_CMD_STOPPED: u32 = 1;
pub const PRELIM_I915_DEBUG_EU_THREADS_CMD_RESUME: u32 = 2;
pub const PRELIM_I915_DEBUG_EU_THREADS_CMD_INTERRUPT: u32 = 3;

/// Stop-the-world control over EU threads. `bitmask_ptr` points to a
/// caller buffer of `bitmask_size` attention bytes, in the same layout as
/// [`DebugEventEuAttention`].
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEuControl {
    pub client_handle: u64,
    pub cmd: u32,
    pub flags: u32,
    pub seqno: u64,
    pub ci: EngineClassInstance,
    pub bitmask_size: u32,
    pub bitmask_ptr: u64,
}

#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone)]
pub struct DebugEventAck {
    pub r#type: u32,
    /// MBZ
    pub flags: u32,
    pub seqno: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn event_layouts() {
        assert_eq!(size_of::<DebugEvent>(), 24);
        assert_eq!(size_of::<DebugEventClient>(), 32);
        assert_eq!(size_of::<DebugEventContext>(), 40);
        assert_eq!(size_of::<DebugEventUuid>(), 56);
        assert_eq!(size_of::<DebugEventVm>(), 40);
        assert_eq!(size_of::<DebugEventVmBind>(), 64);
        assert_eq!(offset_of!(DebugEventVmBind, num_uuids), 56);
        assert_eq!(offset_of!(DebugEventVmBind, uuids), 64);
        assert_eq!(size_of::<DebugEventContextParam>(), 64);
        assert_eq!(size_of::<DebugEventEuAttention>(), 60);
        assert_eq!(offset_of!(DebugEventEuAttention, ci), 52);
        assert_eq!(offset_of!(DebugEventEuAttention, bitmask), 60);
        assert_eq!(size_of::<DebugEngineInfo>(), 12);
        assert_eq!(size_of::<DebugEventEngines>(), 48);
    }

    #[test]
    fn request_layouts() {
        assert_eq!(size_of::<DebuggerOpenParam>(), 32);
        assert_eq!(size_of::<DebugReadUuid>(), 72);
        assert_eq!(offset_of!(DebugReadUuid, uuid), 20);
        assert_eq!(offset_of!(DebugReadUuid, payload_ptr), 56);
        assert_eq!(size_of::<DebugVmOpen>(), 24);
        assert_eq!(size_of::<DebugEuControl>(), 40);
        assert_eq!(offset_of!(DebugEuControl, bitmask_ptr), 32);
        assert_eq!(size_of::<DebugEventAck>(), 16);
    }

    #[test]
    fn debug_ioctl_numbers() {
        assert_eq!(PRELIM_I915_DEBUG_IOCTL_READ_EVENT, 0x0000_6a00);
        assert_eq!(PRELIM_I915_DEBUG_IOCTL_READ_UUID, 0xc048_6a01);
        assert_eq!(PRELIM_I915_DEBUG_IOCTL_VM_OPEN, 0x4018_6a02);
        assert_eq!(PRELIM_I915_DEBUG_IOCTL_EU_CONTROL, 0xc028_6a03);
        assert_eq!(PRELIM_I915_DEBUG_IOCTL_ACK_EVENT, 0x4010_6a04);
        // Stable numbers live on the 'i' magic.
        assert_eq!(I915_DEBUG_IOCTL_READ_EVENT, 0x0000_6900);
    }

    #[test]
    fn stable_event_types_match_prelim_values() {
        assert_eq!(DRM_I915_DEBUG_EVENT_NONE, PRELIM_DRM_I915_DEBUG_EVENT_NONE);
        assert_eq!(DRM_I915_DEBUG_EVENT_READ, PRELIM_DRM_I915_DEBUG_EVENT_READ);
        assert_eq!(DRM_I915_DEBUG_EVENT_CLIENT, PRELIM_DRM_I915_DEBUG_EVENT_CLIENT);
        assert_eq!(DRM_I915_DEBUG_EVENT_CONTEXT, PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT);
        assert_eq!(DRM_I915_DEBUG_EVENT_UUID, PRELIM_DRM_I915_DEBUG_EVENT_UUID);
    }

    #[test]
    fn prelim_flags_in_high_bits() {
        assert_eq!(PRELIM_DRM_I915_DEBUG_EVENT_CREATE & 0xffff, 0);
        assert_eq!(PRELIM_DRM_I915_DEBUG_EVENT_NEED_ACK, 0x1000_0000);
        assert_eq!(
            DRM_I915_DEBUG_EVENT_CREATE
                | DRM_I915_DEBUG_EVENT_DESTROY
                | DRM_I915_DEBUG_EVENT_STATE_CHANGE
                | DRM_I915_DEBUG_EVENT_NEED_ACK,
            0xf
        );
    }
}
