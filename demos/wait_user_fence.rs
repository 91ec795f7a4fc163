use i915_prelim::uapi::ioctl::{
    GemWaitUserFence, PRELIM_I915_UFENCE_WAIT_GTE, PRELIM_I915_UFENCE_WAIT_SOFT,
    PRELIM_I915_UFENCE_WAIT_U64,
};
use i915_prelim::DrmDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== User Fence Wait Test ===");

    let device = DrmDevice::open_render()?;
    println!("[+] Opened DRM render node");

    // A soft fence waits on plain memory with no GPU binding required,
    // so a pre-satisfied value makes the wait return immediately.
    let fence: u64 = 42;
    let mut args = GemWaitUserFence {
        addr: &fence as *const u64 as u64,
        op: PRELIM_I915_UFENCE_WAIT_GTE,
        flags: PRELIM_I915_UFENCE_WAIT_SOFT,
        value: 42,
        mask: PRELIM_I915_UFENCE_WAIT_U64,
        timeout: 1_000_000_000, // 1s
        ..Default::default()
    };

    device.wait_user_fence(&mut args)?;
    println!("[+] Soft fence at {:#x} satisfied (value >= 42)", { args.addr });

    Ok(())
}
