//! Typed helpers over the query ioctl. Each helper drives the two-call
//! protocol: probe with a zero length to learn the required size, allocate,
//! then call again to fill the buffer, and finally decode the fixed header
//! plus its trailing entries with bounds checks.

use crate::device::DrmDevice;
use crate::error::{I915Error, I915Result};
use crate::uapi::query::{
    EngineInfo, MemoryRegionInfo, PRELIM_DRM_I915_QUERY_CS_CYCLES,
    PRELIM_DRM_I915_QUERY_DISTANCE_INFO, PRELIM_DRM_I915_QUERY_ENGINE_INFO,
    PRELIM_DRM_I915_QUERY_FABRIC_INFO, PRELIM_DRM_I915_QUERY_HWCONFIG_TABLE,
    PRELIM_DRM_I915_QUERY_MEMORY_REGIONS, QueryCsCycles, QueryDistanceInfo, QueryEngineInfo,
    QueryFabricInfo, QueryItem, QueryMemoryRegions,
};
use crate::uapi::{EngineClassInstance, MemoryClassInstance};
use std::io;
use std::mem::size_of;
use std::ptr;

fn item_status(item: &QueryItem) -> io::Result<usize> {
    if item.length < 0 {
        return Err(io::Error::from_raw_os_error(-item.length));
    }
    Ok(item.length as usize)
}

fn read_entry<T: Copy>(buf: &[u8], offset: usize) -> I915Result<T> {
    let end = offset + size_of::<T>();
    if buf.len() < end {
        return Err(I915Error::TruncatedQuery {
            needed: end,
            got: buf.len(),
        });
    }
    Ok(unsafe { ptr::read_unaligned(buf[offset..].as_ptr().cast::<T>()) })
}

/// The count comes from the kernel-filled header, but the decode must not
/// size any allocation from it before checking it against the buffer.
fn decode_list<H: Copy, T: Copy>(buf: &[u8], count: usize) -> I915Result<Vec<T>> {
    let needed = count
        .checked_mul(size_of::<T>())
        .and_then(|bytes| bytes.checked_add(size_of::<H>()))
        .unwrap_or(usize::MAX);
    if needed > buf.len() {
        return Err(I915Error::TruncatedQuery {
            needed,
            got: buf.len(),
        });
    }
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(read_entry(buf, size_of::<H>() + i * size_of::<T>())?);
    }
    Ok(out)
}

impl DrmDevice {
    /// Run one query item with the two-call protocol and return the raw
    /// response bytes.
    pub fn query_blob(&self, query_id: u64, flags: u32) -> I915Result<Vec<u8>> {
        let mut item = QueryItem {
            query_id,
            length: 0,
            flags,
            data_ptr: 0,
        };
        self.query_items(std::slice::from_mut(&mut item))?;
        let len = item_status(&item)?;

        let mut buf = vec![0u8; len];
        item.data_ptr = buf.as_mut_ptr() as u64;
        self.query_items(std::slice::from_mut(&mut item))?;
        let written = item_status(&item)?;
        buf.truncate(written.min(len));
        Ok(buf)
    }

    /// Run one query item against a caller-prepared, fixed-size response
    /// struct whose input fields are already set.
    fn query_fixed<T: Copy>(&self, query_id: u64, value: &mut T) -> I915Result<()> {
        let mut item = QueryItem {
            query_id,
            length: size_of::<T>() as i32,
            flags: 0,
            data_ptr: value as *mut T as u64,
        };
        self.query_items(std::slice::from_mut(&mut item))?;
        item_status(&item)?;
        Ok(())
    }

    /// Enumerate the memory regions known to the driver.
    pub fn memory_regions(&self) -> I915Result<Vec<MemoryRegionInfo>> {
        let buf = self.query_blob(PRELIM_DRM_I915_QUERY_MEMORY_REGIONS, 0)?;
        let header: QueryMemoryRegions = read_entry(&buf, 0)?;
        decode_list::<QueryMemoryRegions, MemoryRegionInfo>(&buf, header.num_regions as usize)
    }

    /// Enumerate the engines of the device, with their capabilities.
    pub fn engine_info(&self) -> I915Result<Vec<EngineInfo>> {
        let buf = self.query_blob(PRELIM_DRM_I915_QUERY_ENGINE_INFO, 0)?;
        let header: QueryEngineInfo = read_entry(&buf, 0)?;
        decode_list::<QueryEngineInfo, EngineInfo>(&buf, header.num_engines as usize)
    }

    /// Distance of `engine` to `region`; -1 means the region is
    /// unreachable from that engine.
    pub fn distance_info(
        &self,
        engine: EngineClassInstance,
        region: MemoryClassInstance,
    ) -> I915Result<i32> {
        let mut info = QueryDistanceInfo {
            engine,
            region,
            ..Default::default()
        };
        self.query_fixed(PRELIM_DRM_I915_QUERY_DISTANCE_INFO, &mut info)?;
        Ok(info.distance)
    }

    /// Sample the command streamer cycle counter of `engine` together with
    /// a CPU timestamp on `clockid`.
    pub fn cs_cycles(
        &self,
        engine: EngineClassInstance,
        clockid: i32,
    ) -> I915Result<QueryCsCycles> {
        let mut cycles = QueryCsCycles {
            engine,
            clockid,
            ..Default::default()
        };
        self.query_fixed(PRELIM_DRM_I915_QUERY_CS_CYCLES, &mut cycles)?;
        Ok(cycles)
    }

    /// Bandwidth and latency of the fabric connection to `fabric_id`.
    /// Zero bandwidth means there is no fabric.
    pub fn fabric_info(&self, fabric_id: u32) -> I915Result<QueryFabricInfo> {
        let mut info = QueryFabricInfo {
            fabric_id,
            ..Default::default()
        };
        self.query_fixed(PRELIM_DRM_I915_QUERY_FABRIC_INFO, &mut info)?;
        Ok(info)
    }

    /// The device information table, as an opaque blob of u32 key/value
    /// records.
    pub fn hwconfig_table(&self) -> I915Result<Vec<u8>> {
        self.query_blob(PRELIM_DRM_I915_QUERY_HWCONFIG_TABLE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_memory_region_list() {
        let mut buf = vec![0u8; size_of::<QueryMemoryRegions>() + 2 * size_of::<MemoryRegionInfo>()];
        buf[0..4].copy_from_slice(&2u32.to_ne_bytes());
        // First region: class 0 (system), probed_size at offset 16+24.
        let base = size_of::<QueryMemoryRegions>();
        buf[base + 24..base + 32].copy_from_slice(&0x4000_0000u64.to_ne_bytes());
        // Second region: class 1 instance 0, device memory.
        let base2 = base + size_of::<MemoryRegionInfo>();
        buf[base2..base2 + 2].copy_from_slice(&1u16.to_ne_bytes());

        let header: QueryMemoryRegions = read_entry(&buf, 0).unwrap();
        let regions =
            decode_list::<QueryMemoryRegions, MemoryRegionInfo>(&buf, header.num_regions as usize)
                .unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].probed_size, 0x4000_0000);
        assert_eq!(regions[1].region.memory_class, 1);
    }

    #[test]
    fn short_buffer_rejected() {
        let buf = vec![0u8; 8];
        let err = read_entry::<QueryMemoryRegions>(&buf, 0).unwrap_err();
        assert!(matches!(err, I915Error::TruncatedQuery { needed: 16, got: 8 }));
    }

    #[test]
    fn count_beyond_buffer_rejected() {
        // Header claims three engines but the buffer holds one.
        let mut buf = vec![0u8; size_of::<QueryEngineInfo>() + size_of::<EngineInfo>()];
        buf[0..4].copy_from_slice(&3u32.to_ne_bytes());
        let header: QueryEngineInfo = read_entry(&buf, 0).unwrap();
        let err = decode_list::<QueryEngineInfo, EngineInfo>(&buf, header.num_engines as usize)
            .unwrap_err();
        assert!(matches!(err, I915Error::TruncatedQuery { .. }));
    }

    #[test]
    fn hostile_region_count_rejected_before_allocation() {
        // A header-sized buffer claiming u32::MAX regions must fail the
        // bounds check, not size an allocation from the claimed count.
        let mut buf = vec![0u8; size_of::<QueryMemoryRegions>()];
        buf[0..4].copy_from_slice(&u32::MAX.to_ne_bytes());
        let header: QueryMemoryRegions = read_entry(&buf, 0).unwrap();
        let err =
            decode_list::<QueryMemoryRegions, MemoryRegionInfo>(&buf, header.num_regions as usize)
                .unwrap_err();
        assert!(matches!(err, I915Error::TruncatedQuery { got: 16, .. }));
    }

    #[test]
    fn negative_length_is_errno() {
        let item = QueryItem {
            query_id: PRELIM_DRM_I915_QUERY_MEMORY_REGIONS,
            length: -libc::EINVAL,
            flags: 0,
            data_ptr: 0,
        };
        let err = item_status(&item).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EINVAL));
    }
}
