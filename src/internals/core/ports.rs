use std::{io, sync::Arc};

use thiserror::Error;

use crate::models::{diagnosis::Diagnosis, free_memory::FreeMemory, usage::Usage};

use super::computer::DiagnoseError;

/// Failure of a single sensor read. Kept separate from the diagnosis
/// outcomes, which are expected results and not errors.
#[derive(Error, Debug)]
pub enum SensorError {
    /// The underlying source could not be read.
    #[error("Failed to read sensor.")]
    FailedToRead(#[source] io::Error),
}

#[cfg_attr(test, mockall::automock)]
pub trait CpuPort {
    /// Current cpu utilization.
    fn usage(&self) -> Result<Usage, SensorError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait GpuPort {
    /// Current gpu utilization.
    fn usage(&self) -> Result<Usage, SensorError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RamPort {
    /// Memory currently free.
    fn free_memory(&self) -> Result<FreeMemory, SensorError>;
}

/// Anything able to compare its current readings against thresholds.
#[cfg_attr(test, mockall::automock)]
pub trait Diagnosable {
    fn diagnose(
        &self,
        cpu_threshold: i32,
        gpu_threshold: i32,
        memory_threshold: i32,
    ) -> Result<Diagnosis, DiagnoseError>;
}

impl<T: CpuPort + ?Sized> CpuPort for &T {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: CpuPort + ?Sized> CpuPort for Box<T> {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: CpuPort + ?Sized> CpuPort for Arc<T> {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: GpuPort + ?Sized> GpuPort for &T {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: GpuPort + ?Sized> GpuPort for Box<T> {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: GpuPort + ?Sized> GpuPort for Arc<T> {
    fn usage(&self) -> Result<Usage, SensorError> {
        (**self).usage()
    }
}

impl<T: RamPort + ?Sized> RamPort for &T {
    fn free_memory(&self) -> Result<FreeMemory, SensorError> {
        (**self).free_memory()
    }
}

impl<T: RamPort + ?Sized> RamPort for Box<T> {
    fn free_memory(&self) -> Result<FreeMemory, SensorError> {
        (**self).free_memory()
    }
}

impl<T: RamPort + ?Sized> RamPort for Arc<T> {
    fn free_memory(&self) -> Result<FreeMemory, SensorError> {
        (**self).free_memory()
    }
}
