use i915_prelim::uapi::ioctl::GemCacheReserve;
use i915_prelim::DrmDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== CLOS Cache Reservation Test ===");

    let device = DrmDevice::open_render()?;
    println!("[+] Opened DRM render node");

    let clos_index = device.clos_reserve()?;
    println!("[+] Reserved CLOS {clos_index}");

    let mut args = GemCacheReserve {
        clos_index,
        cache_level: 3,
        num_ways: 2,
        pad16: 0,
    };
    match device.cache_reserve(&mut args) {
        Ok(()) => println!("[+] Reserved 2 ways of L3 under CLOS {clos_index}"),
        Err(e) => println!("[-] L3 way reservation refused: {e}"),
    }

    // num_ways == 0 releases the level reservation.
    args.num_ways = 0;
    let _ = device.cache_reserve(&mut args);

    device.clos_free(clos_index)?;
    println!("[+] Freed CLOS {clos_index}");

    Ok(())
}
