use self::adapters::{RandomCpuAdapter, RandomGpuAdapter, RandomRamAdapter};

pub mod adapters;

pub struct HostSensorModule {
    pub cpu_adapter: RandomCpuAdapter,
    pub gpu_adapter: RandomGpuAdapter,
    pub ram_adapter: RandomRamAdapter,
}

impl HostSensorModule {
    pub fn initialize() -> Self {
        Self {
            cpu_adapter: RandomCpuAdapter {},
            gpu_adapter: RandomGpuAdapter {},
            ram_adapter: RandomRamAdapter {},
        }
    }
}
