use crate::error::{I915Error, I915Result};
use crate::uapi::debug::{
    DebugEngineInfo, DebugEuControl, DebugEvent, DebugEventAck, DebugEventClient,
    DebugEventContext, DebugEventContextParam, DebugEventEngines, DebugEventEuAttention,
    DebugEventUuid, DebugEventVm, DebugEventVmBind, DebugReadUuid, DebugVmOpen,
    PRELIM_DRM_I915_DEBUG_EVENT_CLIENT, PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT,
    PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT_PARAM, PRELIM_DRM_I915_DEBUG_EVENT_ENGINES,
    PRELIM_DRM_I915_DEBUG_EVENT_EU_ATTENTION, PRELIM_DRM_I915_DEBUG_EVENT_READ,
    PRELIM_DRM_I915_DEBUG_EVENT_UUID, PRELIM_DRM_I915_DEBUG_EVENT_VM,
    PRELIM_DRM_I915_DEBUG_EVENT_VM_BIND, PRELIM_I915_DEBUG_IOCTL_ACK_EVENT,
    PRELIM_I915_DEBUG_IOCTL_EU_CONTROL, PRELIM_I915_DEBUG_IOCTL_READ_EVENT,
    PRELIM_I915_DEBUG_IOCTL_READ_UUID, PRELIM_I915_DEBUG_IOCTL_VM_OPEN,
};
use std::fs::File;
use std::io;
use std::mem::size_of;
use std::os::fd::RawFd;
use std::os::unix::io::{AsRawFd, FromRawFd};
use std::ptr;

/// A debugger connection to a GPU client, as handed back by
/// [`crate::device::DrmDevice::debugger_open`]. Dropping it closes the
/// connection and resumes the debuggee.
#[derive(Debug)]
pub struct Debugger {
    file: File,
}

/// One decoded debug event. Trailing variable-length payloads are copied
/// out of the read buffer into owned vectors.
#[derive(Debug, Clone)]
pub enum DebugEventView {
    /// Pseudo-event: more events are available than fit the buffer.
    Read(DebugEvent),
    Client(DebugEventClient),
    Context(DebugEventContext),
    Uuid(DebugEventUuid),
    Vm(DebugEventVm),
    VmBind {
        event: DebugEventVmBind,
        uuids: Vec<u64>,
    },
    ContextParam(DebugEventContextParam),
    EuAttention {
        event: DebugEventEuAttention,
        bitmask: Vec<u8>,
    },
    Engines {
        event: DebugEventEngines,
        engines: Vec<DebugEngineInfo>,
    },
}

impl DebugEventView {
    /// Decode one event record from `buf`. The buffer must start with a
    /// [`DebugEvent`] header whose `size` covers the whole record.
    pub fn parse(buf: &[u8]) -> I915Result<Self> {
        let header: DebugEvent = read_record(buf, 0)?;
        let total = header.size as usize;
        if total < size_of::<DebugEvent>() || total > buf.len() {
            return Err(I915Error::TruncatedEvent {
                needed: total,
                got: buf.len(),
            });
        }
        let record = &buf[..total];

        match header.r#type {
            PRELIM_DRM_I915_DEBUG_EVENT_READ => Ok(Self::Read(header)),
            PRELIM_DRM_I915_DEBUG_EVENT_CLIENT => Ok(Self::Client(read_record(record, 0)?)),
            PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT => Ok(Self::Context(read_record(record, 0)?)),
            PRELIM_DRM_I915_DEBUG_EVENT_UUID => Ok(Self::Uuid(read_record(record, 0)?)),
            PRELIM_DRM_I915_DEBUG_EVENT_VM => Ok(Self::Vm(read_record(record, 0)?)),
            PRELIM_DRM_I915_DEBUG_EVENT_VM_BIND => {
                let event: DebugEventVmBind = read_record(record, 0)?;
                let uuids = read_tail::<u64>(record, size_of::<DebugEventVmBind>(), event.num_uuids as usize)?;
                Ok(Self::VmBind { event, uuids })
            }
            PRELIM_DRM_I915_DEBUG_EVENT_CONTEXT_PARAM => {
                Ok(Self::ContextParam(read_record(record, 0)?))
            }
            PRELIM_DRM_I915_DEBUG_EVENT_EU_ATTENTION => {
                let event: DebugEventEuAttention = read_record(record, 0)?;
                let start = size_of::<DebugEventEuAttention>();
                let len = event.bitmask_size as usize;
                if record.len() < start + len {
                    return Err(I915Error::TruncatedEvent {
                        needed: start + len,
                        got: record.len(),
                    });
                }
                Ok(Self::EuAttention {
                    event,
                    bitmask: record[start..start + len].to_vec(),
                })
            }
            PRELIM_DRM_I915_DEBUG_EVENT_ENGINES => {
                let event: DebugEventEngines = read_record(record, 0)?;
                let engines = read_tail::<DebugEngineInfo>(
                    record,
                    size_of::<DebugEventEngines>(),
                    event.num_engines as usize,
                )?;
                Ok(Self::Engines { event, engines })
            }
            other => Err(I915Error::UnknownEventType(other)),
        }
    }

    /// The common header of the event.
    pub fn header(&self) -> DebugEvent {
        match self {
            Self::Read(e) => *e,
            Self::Client(e) => e.base,
            Self::Context(e) => e.base,
            Self::Uuid(e) => e.base,
            Self::Vm(e) => e.base,
            Self::VmBind { event, .. } => event.base,
            Self::ContextParam(e) => e.base,
            Self::EuAttention { event, .. } => event.base,
            Self::Engines { event, .. } => event.base,
        }
    }
}

/// Copy a `T` record out of `buf` at `offset`, tolerating packed layouts.
fn read_record<T: Copy>(buf: &[u8], offset: usize) -> I915Result<T> {
    let end = offset + size_of::<T>();
    if buf.len() < end {
        return Err(I915Error::TruncatedEvent {
            needed: end,
            got: buf.len(),
        });
    }
    Ok(unsafe { ptr::read_unaligned(buf[offset..].as_ptr().cast::<T>()) })
}

/// The count comes from the record itself, so bound it against the record
/// length before any allocation sized by it.
fn read_tail<T: Copy>(buf: &[u8], start: usize, count: usize) -> I915Result<Vec<T>> {
    let needed = count
        .checked_mul(size_of::<T>())
        .and_then(|bytes| bytes.checked_add(start))
        .unwrap_or(usize::MAX);
    if needed > buf.len() {
        return Err(I915Error::TruncatedEvent {
            needed,
            got: buf.len(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(read_record(buf, start + i * size_of::<T>())?);
    }
    Ok(out)
}

impl Debugger {
    pub(crate) fn new(file: File) -> Self {
        Self { file }
    }

    /// Wrap an already-open debugger fd.
    ///
    /// # Safety
    /// `fd` must be an open debugger connection fd owned by the caller.
    pub unsafe fn from_raw_fd(fd: RawFd) -> Self {
        Self {
            file: unsafe { File::from_raw_fd(fd) },
        }
    }

    /// # Safety
    /// The caller must ensure that `arg` points to valid memory appropriate for the specific `cmd`.
    unsafe fn ioctl<T>(&self, cmd: u32, arg: &mut T) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.file.as_raw_fd(), cmd as _, arg as *mut T) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    /// Read the next event from the connection into `buf` and decode it.
    /// The kernel rejects buffers smaller than the pending event, so size
    /// `buf` generously (a few KiB covers everything but large attention
    /// bitmasks and engine lists).
    pub fn read_event(&self, buf: &mut [u8]) -> I915Result<DebugEventView> {
        if buf.len() < size_of::<DebugEvent>() {
            return Err(I915Error::TruncatedEvent {
                needed: size_of::<DebugEvent>(),
                got: buf.len(),
            });
        }
        // The header going in tells the kernel how much room we have.
        let header = DebugEvent {
            size: buf.len() as u64,
            ..Default::default()
        };
        unsafe {
            ptr::write_unaligned(buf.as_mut_ptr().cast::<DebugEvent>(), header);
            self.ioctl(PRELIM_I915_DEBUG_IOCTL_READ_EVENT, &mut buf[0])?;
        }
        DebugEventView::parse(buf)
    }

    /// Acknowledge an event delivered with the NEED_ACK flag, unblocking
    /// the debuggee workload that raised it.
    pub fn ack_event(&self, r#type: u32, seqno: u64) -> io::Result<()> {
        let mut args = DebugEventAck {
            r#type,
            flags: 0,
            seqno,
        };
        unsafe { self.ioctl(PRELIM_I915_DEBUG_IOCTL_ACK_EVENT, &mut args) }
    }

    /// Issue an EU thread control command (interrupt, resume, or query of
    /// stopped threads).
    pub fn eu_control(&self, args: &mut DebugEuControl) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_I915_DEBUG_IOCTL_EU_CONTROL, args) }
    }

    /// Open the target's ppGTT address space for peek/poke access. The
    /// returned file supports pread/pwrite at GPU virtual addresses.
    pub fn vm_open(&self, args: &mut DebugVmOpen) -> io::Result<File> {
        let ret = unsafe { libc::ioctl(self.file.as_raw_fd(), PRELIM_I915_DEBUG_IOCTL_VM_OPEN as _, args as *mut DebugVmOpen) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(unsafe { File::from_raw_fd(ret) })
    }

    /// Fetch the uuid string (and payload, when `payload_ptr` is set) of a
    /// UUID resource announced by a [`DebugEventView::Uuid`] event.
    pub fn read_uuid(&self, args: &mut DebugReadUuid) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_I915_DEBUG_IOCTL_READ_UUID, args) }
    }
}

impl AsRawFd for Debugger {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uapi::debug::{
        PRELIM_DRM_I915_DEBUG_EVENT_CREATE, PRELIM_DRM_I915_DEBUG_EVENT_NEED_ACK,
    };

    fn push_header(buf: &mut Vec<u8>, r#type: u32, flags: u32, seqno: u64, size: u64) {
        buf.extend_from_slice(&r#type.to_ne_bytes());
        buf.extend_from_slice(&flags.to_ne_bytes());
        buf.extend_from_slice(&seqno.to_ne_bytes());
        buf.extend_from_slice(&size.to_ne_bytes());
    }

    #[test]
    fn parse_client_event() {
        let mut buf = Vec::new();
        push_header(
            &mut buf,
            PRELIM_DRM_I915_DEBUG_EVENT_CLIENT,
            PRELIM_DRM_I915_DEBUG_EVENT_CREATE,
            7,
            32,
        );
        buf.extend_from_slice(&0x1234_5678_u64.to_ne_bytes());

        match DebugEventView::parse(&buf).unwrap() {
            DebugEventView::Client(e) => {
                assert_eq!({ e.base.seqno }, 7);
                assert_eq!({ e.handle }, 0x1234_5678);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn parse_vm_bind_with_uuid_tail() {
        let mut buf = Vec::new();
        push_header(
            &mut buf,
            PRELIM_DRM_I915_DEBUG_EVENT_VM_BIND,
            PRELIM_DRM_I915_DEBUG_EVENT_CREATE | PRELIM_DRM_I915_DEBUG_EVENT_NEED_ACK,
            9,
            64 + 16,
        );
        buf.extend_from_slice(&1_u64.to_ne_bytes()); // client_handle
        buf.extend_from_slice(&2_u64.to_ne_bytes()); // vm_handle
        buf.extend_from_slice(&0x1000_u64.to_ne_bytes()); // va_start
        buf.extend_from_slice(&0x2000_u64.to_ne_bytes()); // va_length
        buf.extend_from_slice(&2_u32.to_ne_bytes()); // num_uuids
        buf.extend_from_slice(&0_u32.to_ne_bytes()); // flags
        buf.extend_from_slice(&11_u64.to_ne_bytes());
        buf.extend_from_slice(&22_u64.to_ne_bytes());

        match DebugEventView::parse(&buf).unwrap() {
            DebugEventView::VmBind { event, uuids } => {
                assert_eq!({ event.va_start }, 0x1000);
                assert_eq!(uuids, vec![11, 22]);
                assert_ne!(
                    event.base.flags & PRELIM_DRM_I915_DEBUG_EVENT_NEED_ACK,
                    0
                );
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn parse_eu_attention_bitmask() {
        let mut buf = Vec::new();
        push_header(&mut buf, PRELIM_DRM_I915_DEBUG_EVENT_EU_ATTENTION, 0, 3, 64);
        buf.extend_from_slice(&1_u64.to_ne_bytes()); // client_handle
        buf.extend_from_slice(&2_u64.to_ne_bytes()); // ctx_handle
        buf.extend_from_slice(&3_u64.to_ne_bytes()); // lrc_handle
        buf.extend_from_slice(&0_u32.to_ne_bytes()); // flags
        buf.extend_from_slice(&4_u16.to_ne_bytes()); // engine_class (compute)
        buf.extend_from_slice(&0_u16.to_ne_bytes()); // engine_instance
        buf.extend_from_slice(&4_u32.to_ne_bytes()); // bitmask_size
        buf.extend_from_slice(&[0xff, 0x00, 0x0f, 0xf0]);

        match DebugEventView::parse(&buf).unwrap() {
            DebugEventView::EuAttention { event, bitmask } => {
                assert_eq!({ event.ci.engine_class }, 4);
                assert_eq!(bitmask, vec![0xff, 0x00, 0x0f, 0xf0]);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn hostile_uuid_count_rejected_before_allocation() {
        // A minimal vm-bind record whose num_uuids field claims far more
        // tail entries than the record carries must fail cleanly, not
        // size an allocation from the hostile count.
        let mut buf = Vec::new();
        push_header(&mut buf, PRELIM_DRM_I915_DEBUG_EVENT_VM_BIND, 0, 5, 64);
        buf.extend_from_slice(&1_u64.to_ne_bytes()); // client_handle
        buf.extend_from_slice(&2_u64.to_ne_bytes()); // vm_handle
        buf.extend_from_slice(&0x1000_u64.to_ne_bytes()); // va_start
        buf.extend_from_slice(&0x2000_u64.to_ne_bytes()); // va_length
        buf.extend_from_slice(&u32::MAX.to_ne_bytes()); // num_uuids
        buf.extend_from_slice(&0_u32.to_ne_bytes()); // flags
        assert_eq!(buf.len(), 64);

        let err = DebugEventView::parse(&buf).unwrap_err();
        assert!(matches!(err, I915Error::TruncatedEvent { got: 64, .. }));
    }

    #[test]
    fn truncated_event_rejected() {
        let mut buf = Vec::new();
        // Declared size exceeds the buffer.
        push_header(&mut buf, PRELIM_DRM_I915_DEBUG_EVENT_CLIENT, 0, 1, 48);
        let err = DebugEventView::parse(&buf).unwrap_err();
        assert!(matches!(err, I915Error::TruncatedEvent { needed: 48, .. }));
    }

    #[test]
    fn unknown_type_rejected() {
        let mut buf = Vec::new();
        push_header(&mut buf, 0xdead, 0, 1, 24);
        let err = DebugEventView::parse(&buf).unwrap_err();
        assert!(matches!(err, I915Error::UnknownEventType(0xdead)));
    }
}
