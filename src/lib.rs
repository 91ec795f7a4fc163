//! Rust bindings for the Intel i915 preliminary (PRELIM) DRM uapi, the
//! downstream extension set carried by data-center GPU kernels: explicit
//! VM_BIND, user fences, UUID resources, the EU debugger protocol, cache
//! reservation (CLOS), the extended query protocol, and the PMU and perf
//! interfaces.
//!
//! The [`uapi`] module tree is a bit-exact transcription of the kernel
//! ABI (structs, ioctl numbers, flag namespaces). [`device::DrmDevice`]
//! and [`debugger::Debugger`] wrap the raw ioctls in a safe interface,
//! and [`query`] adds typed helpers over the two-call query protocol.

pub mod debugger;
pub mod device;
pub mod error;
pub mod query;
pub mod uapi;
pub mod utils;

pub use debugger::{DebugEventView, Debugger};
pub use device::DrmDevice;
pub use error::{I915Error, I915Result};
