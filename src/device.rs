use crate::debugger::Debugger;
use crate::uapi::debug::DebuggerOpenParam;
use crate::uapi::ioctl::{
    DRM_IOCTL_I915_GEM_CONTEXT_GETPARAM, DRM_IOCTL_I915_GEM_CONTEXT_SETPARAM,
    DRM_IOCTL_I915_GETPARAM, GemCacheReserve, GemClosFree, GemClosReserve, GemContextParam,
    GemCreateExt, GemVmAdvise, GemVmBind, GemVmParam, GemVmPrefetch, GemWaitUserFence, GetParam,
    PRELIM_DRM_IOCTL_I915_DEBUGGER_OPEN, PRELIM_DRM_IOCTL_I915_GEM_CACHE_RESERVE,
    PRELIM_DRM_IOCTL_I915_GEM_CLOS_FREE, PRELIM_DRM_IOCTL_I915_GEM_CLOS_RESERVE,
    PRELIM_DRM_IOCTL_I915_GEM_CREATE_EXT, PRELIM_DRM_IOCTL_I915_GEM_VM_ADVISE,
    PRELIM_DRM_IOCTL_I915_GEM_VM_BIND, PRELIM_DRM_IOCTL_I915_GEM_VM_GETPARAM,
    PRELIM_DRM_IOCTL_I915_GEM_VM_PREFETCH, PRELIM_DRM_IOCTL_I915_GEM_VM_SETPARAM,
    PRELIM_DRM_IOCTL_I915_GEM_VM_UNBIND, PRELIM_DRM_IOCTL_I915_GEM_WAIT_USER_FENCE,
    PRELIM_DRM_IOCTL_I915_UUID_REGISTER, PRELIM_DRM_IOCTL_I915_UUID_UNREGISTER, UuidControl,
};
use crate::uapi::query::{DRM_IOCTL_I915_QUERY, Query, QueryItem};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::RawFd;
use std::os::unix::io::{AsRawFd, FromRawFd};
use std::path::Path;
use std::sync::Arc;

/// A handle to an i915 DRM device node (for example `/dev/dri/renderD128`).
///
/// This struct provides methods to issue IOCTLs to the kernel driver.
/// It wraps the file descriptor in an `Arc`, so it is cheap to clone and share
/// across objects (like a Debugger connection) that need to persist beyond the
/// initial context.
#[derive(Clone, Debug)]
pub struct DrmDevice {
    pub file: Arc<File>,
}

impl DrmDevice {
    /// Opens the given DRM device node.
    ///
    /// # Errors
    /// Returns an error if the node cannot be opened (e.g., driver not
    /// loaded, permissions).
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        Ok(Self {
            file: Arc::new(file),
        })
    }

    /// Opens the first render node, `/dev/dri/renderD128`.
    pub fn open_render() -> io::Result<Self> {
        Self::open("/dev/dri/renderD128")
    }

    /// Generic unsafe helper to execute an IOCTL.
    ///
    /// # Safety
    /// The caller must ensure that `arg` points to valid memory appropriate for the specific `cmd`.
    unsafe fn ioctl<T>(&self, cmd: u32, arg: &mut T) -> io::Result<()> {
        let ret = unsafe { libc::ioctl(self.file.as_raw_fd(), cmd as _, arg as *mut T) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    /// Like [`Self::ioctl`], but returns the (non-negative) ioctl return
    /// value itself. Used by requests that hand back a new fd.
    ///
    /// # Safety
    /// Same contract as [`Self::ioctl`].
    unsafe fn ioctl_ret<T>(&self, cmd: u32, arg: &mut T) -> io::Result<libc::c_int> {
        let ret = unsafe { libc::ioctl(self.file.as_raw_fd(), cmd as _, arg as *mut T) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ret)
    }

    // ===========================================================================================
    // Driver parameters
    // ===========================================================================================

    /// Read a driver parameter. `param` takes the `I915_PARAM_*` /
    /// `PRELIM_I915_PARAM_*` values.
    pub fn getparam(&self, param: i32) -> io::Result<i32> {
        let mut value: i32 = 0;
        let mut args = GetParam {
            param,
            pad: 0,
            value_ptr: &mut value as *mut i32 as u64,
        };
        unsafe {
            self.ioctl(DRM_IOCTL_I915_GETPARAM, &mut args)?;
        }
        Ok(value)
    }

    // ===========================================================================================
    // Object creation and VM management
    // ===========================================================================================

    /// Create a GEM object, with placement and other properties supplied
    /// through the chained extensions. On success `args.handle` holds the
    /// new object handle.
    pub fn gem_create_ext(&self, args: &mut GemCreateExt) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_CREATE_EXT, args) }
    }

    /// Bind an object (or a userptr range) into a ppGTT address space.
    pub fn vm_bind(&self, args: &mut GemVmBind) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_BIND, args) }
    }

    /// Remove a binding previously established with [`Self::vm_bind`].
    /// `start`, `length` and `vm_id` must match the original bind.
    pub fn vm_unbind(&self, args: &mut GemVmBind) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_UNBIND, args) }
    }

    /// Set a memory attribute (preferred placement, atomic access mode) on
    /// an object or a virtual address range.
    pub fn vm_advise(&self, args: &mut GemVmAdvise) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_ADVISE, args) }
    }

    /// Migrate a virtual address range to the given memory region.
    pub fn vm_prefetch(&self, args: &mut GemVmPrefetch) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_PREFETCH, args) }
    }

    /// Read a VM parameter (currently the supported SVM level).
    pub fn vm_getparam(&self, args: &mut GemVmParam) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_GETPARAM, args) }
    }

    /// Set a VM parameter.
    pub fn vm_setparam(&self, args: &mut GemVmParam) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_VM_SETPARAM, args) }
    }

    // ===========================================================================================
    // User fences
    // ===========================================================================================

    /// Block until the value at `args.addr` satisfies the comparison in
    /// `args.op`/`args.value`/`args.mask`, or the timeout expires.
    pub fn wait_user_fence(&self, args: &mut GemWaitUserFence) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_WAIT_USER_FENCE, args) }
    }

    // ===========================================================================================
    // Context parameters
    // ===========================================================================================

    pub fn context_getparam(&self, args: &mut GemContextParam) -> io::Result<()> {
        unsafe { self.ioctl(DRM_IOCTL_I915_GEM_CONTEXT_GETPARAM, args) }
    }

    pub fn context_setparam(&self, args: &mut GemContextParam) -> io::Result<()> {
        unsafe { self.ioctl(DRM_IOCTL_I915_GEM_CONTEXT_SETPARAM, args) }
    }

    // ===========================================================================================
    // UUID resources
    // ===========================================================================================

    /// Register a UUID resource with the driver. On success `args.handle`
    /// holds the registered handle.
    pub fn uuid_register(&self, args: &mut UuidControl) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_UUID_REGISTER, args) }
    }

    /// Unregister a UUID resource by its `args.handle`.
    pub fn uuid_unregister(&self, args: &mut UuidControl) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_UUID_UNREGISTER, args) }
    }

    // ===========================================================================================
    // Debugger
    // ===========================================================================================

    /// Open a debugger connection to the process named by `param.pid`.
    /// The kernel hands back a new file descriptor carrying the event
    /// stream and the debugger-side ioctls.
    pub fn debugger_open(&self, param: &mut DebuggerOpenParam) -> io::Result<Debugger> {
        let fd = unsafe { self.ioctl_ret(PRELIM_DRM_IOCTL_I915_DEBUGGER_OPEN, param)? };
        let file = unsafe { File::from_raw_fd(fd) };
        Ok(Debugger::new(file))
    }

    // ===========================================================================================
    // Cache reservation (CLOS)
    // ===========================================================================================

    /// Reserve a free CLOS for this client. Returns the reserved index.
    pub fn clos_reserve(&self) -> io::Result<u16> {
        let mut args = GemClosReserve::default();
        unsafe {
            self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_CLOS_RESERVE, &mut args)?;
        }
        Ok(args.clos_index)
    }

    /// Free a previously reserved CLOS, returning any cache ways reserved
    /// under it back to the shared set.
    pub fn clos_free(&self, clos_index: u16) -> io::Result<()> {
        let mut args = GemClosFree {
            clos_index,
            pad16: 0,
        };
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_CLOS_FREE, &mut args) }
    }

    /// Reserve `num_ways` ways of the given cache level under a CLOS. A
    /// count of zero releases the reservation for that level.
    pub fn cache_reserve(&self, args: &mut GemCacheReserve) -> io::Result<()> {
        unsafe { self.ioctl(PRELIM_DRM_IOCTL_I915_GEM_CACHE_RESERVE, args) }
    }

    // ===========================================================================================
    // Query
    // ===========================================================================================

    /// Submit a batch of query items. Per-item status comes back in each
    /// item's `length` field; see [`crate::query`] for typed helpers built
    /// on top of this.
    pub fn query_items(&self, items: &mut [QueryItem]) -> io::Result<()> {
        let mut args = Query {
            num_items: items.len() as u32,
            flags: 0,
            items_ptr: items.as_mut_ptr() as u64,
        };
        unsafe { self.ioctl(DRM_IOCTL_I915_QUERY, &mut args) }
    }
}

impl AsRawFd for DrmDevice {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
