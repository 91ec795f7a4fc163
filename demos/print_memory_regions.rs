use i915_prelim::uapi::query::PRELIM_DRM_I915_QUERY_MEMORY_REGIONS;
use i915_prelim::DrmDevice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("============================================================");
    println!("            i915 PRELIM Memory Region Enumeration           ");
    println!("============================================================");

    let device = DrmDevice::open_render()?;
    println!("[+] Opened DRM render node");

    let regions = device.memory_regions()?;
    println!(
        "[+] Query 0x{PRELIM_DRM_I915_QUERY_MEMORY_REGIONS:x} returned {} region(s)",
        regions.len()
    );

    for (i, info) in regions.iter().enumerate() {
        let class = match info.region.memory_class {
            0 => "SYSTEM",
            1 => "DEVICE",
            _ => "UNKNOWN",
        };
        println!(
            "    Region {i}: class={class} instance={} probed={} MiB unallocated={} MiB",
            info.region.memory_instance,
            info.probed_size / (1024 * 1024),
            info.unallocated_size / (1024 * 1024),
        );
    }

    println!("\n[+] Engine list:");
    for engine in device.engine_info()? {
        println!(
            "    class={} instance={} logical={} caps=0x{:x}",
            engine.engine.engine_class,
            engine.engine.engine_instance,
            engine.logical_instance,
            engine.capabilities,
        );
    }

    Ok(())
}
