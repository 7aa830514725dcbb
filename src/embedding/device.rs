use candle_core::Device;
use tracing::{debug, info, warn};

type DeviceCtor = fn() -> candle_core::Result<Device>;

/// Selects the compute device: the first usable GPU backend compiled in, else CPU.
pub fn select_device() -> Device {
    for (backend, ctor) in gpu_backends() {
        match ctor() {
            Ok(device) => {
                info!(backend, "Using GPU acceleration");
                return device;
            }
            Err(e) => {
                warn!(backend, error = %e, "GPU device unavailable");
            }
        }
    }

    debug!("Running encoder on CPU");
    Device::Cpu
}

#[allow(unused_mut)]
fn gpu_backends() -> Vec<(&'static str, DeviceCtor)> {
    let mut backends: Vec<(&'static str, DeviceCtor)> = Vec::new();

    #[cfg(feature = "metal")]
    backends.push(("metal", || Device::new_metal(0)));

    #[cfg(feature = "cuda")]
    backends.push(("cuda", || Device::new_cuda(0)));

    backends
}
