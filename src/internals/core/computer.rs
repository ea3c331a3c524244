use thiserror::Error;
use tracing::{debug, trace};

use crate::models::diagnosis::Diagnosis;

use super::ports::{CpuPort, Diagnosable, GpuPort, RamPort, SensorError};

/// A machine made of a cpu, a gpu and memory, each reached only through
/// its port so any of them can be swapped for a test double.
pub struct Computer<C: CpuPort, G: GpuPort, M: RamPort> {
    cpu: C,
    gpu: G,
    memory: M,
}

#[derive(Error, Debug)]
pub enum DiagnoseError {
    #[error("Failed to read cpu usage.")]
    FailedToReadCpu(#[source] SensorError),

    #[error("Failed to read gpu usage.")]
    FailedToReadGpu(#[source] SensorError),

    #[error("Failed to read free memory.")]
    FailedToReadMemory(#[source] SensorError),
}

impl<C: CpuPort, G: GpuPort, M: RamPort> Computer<C, G, M> {
    pub fn new(cpu: C, gpu: G, memory: M) -> Self {
        Self { cpu, gpu, memory }
    }
}

impl<C: CpuPort, G: GpuPort, M: RamPort> Diagnosable for Computer<C, G, M> {
    /// Check cpu, then gpu, then memory, stopping at the first violation.
    /// Usage equal to its threshold passes. Free memory equal to its
    /// threshold does not.
    #[tracing::instrument(skip(self))]
    fn diagnose(
        &self,
        cpu_threshold: i32,
        gpu_threshold: i32,
        memory_threshold: i32,
    ) -> Result<Diagnosis, DiagnoseError> {
        let cpu_usage = self.cpu.usage().map_err(DiagnoseError::FailedToReadCpu)?;
        trace!("Got cpu usage: {}", cpu_usage);
        if cpu_usage.value > cpu_threshold {
            debug!("Cpu usage {} above threshold {}.", cpu_usage, cpu_threshold);
            return Ok(Diagnosis::CpuOverUtilized);
        }

        let gpu_usage = self.gpu.usage().map_err(DiagnoseError::FailedToReadGpu)?;
        trace!("Got gpu usage: {}", gpu_usage);
        if gpu_usage.value > gpu_threshold {
            debug!("Gpu usage {} above threshold {}.", gpu_usage, gpu_threshold);
            return Ok(Diagnosis::GpuOverUtilized);
        }

        let free_memory = self
            .memory
            .free_memory()
            .map_err(DiagnoseError::FailedToReadMemory)?;
        trace!("Got free memory: {}", free_memory);
        if free_memory.megabytes <= memory_threshold {
            debug!(
                "Free memory {} at or below threshold {}MB.",
                free_memory, memory_threshold
            );
            return Ok(Diagnosis::InsufficientMemory);
        }

        Ok(Diagnosis::Healthy)
    }
}
