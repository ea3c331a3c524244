use rand::Rng;
use tracing::debug;

use crate::{
    internals::core::ports::{CpuPort, GpuPort, RamPort, SensorError},
    models::{free_memory::FreeMemory, usage::Usage},
};

/// Installed memory the ram stub pretends to have, in megabytes.
pub const RAM_TOTAL_MEGABYTES: i32 = 1024 * 8;

/// Least memory the ram stub reports as in use, in megabytes.
pub const RAM_MIN_USED_MEGABYTES: i32 = 1024 * 3;

/// Stand-in cpu sensor reporting a random usage in `0..100`.
pub struct RandomCpuAdapter;

/// Stand-in gpu sensor reporting a random usage in `0..100`.
pub struct RandomGpuAdapter;

/// Stand-in ram sensor. Picks a random amount in use between
/// `RAM_MIN_USED_MEGABYTES` and `RAM_TOTAL_MEGABYTES` and reports the rest
/// as free.
pub struct RandomRamAdapter;

impl CpuPort for RandomCpuAdapter {
    fn usage(&self) -> Result<Usage, SensorError> {
        let usage = Usage::from(rand::thread_rng().gen_range(0..100));
        debug!("Random cpu usage: {}", usage);
        Ok(usage)
    }
}

impl GpuPort for RandomGpuAdapter {
    fn usage(&self) -> Result<Usage, SensorError> {
        let usage = Usage::from(rand::thread_rng().gen_range(0..100));
        debug!("Random gpu usage: {}", usage);
        Ok(usage)
    }
}

impl RamPort for RandomRamAdapter {
    fn free_memory(&self) -> Result<FreeMemory, SensorError> {
        let used = rand::thread_rng().gen_range(RAM_MIN_USED_MEGABYTES..RAM_TOTAL_MEGABYTES);
        let free = FreeMemory::from(RAM_TOTAL_MEGABYTES - used);
        debug!("Random ram usage: {}MB used, {} free", used, free);
        Ok(free)
    }
}
