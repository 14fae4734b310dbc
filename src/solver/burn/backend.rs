//! Backend abstraction for tensor-offloaded limiter stages.
//!
//! This module provides the `LimiterBackend` trait that abstracts over
//! different Burn backends (CUDA, WGPU, NdArray), plus host/device transfer
//! helpers for the flat field arrays.

use burn::prelude::*;

/// Trait for backends suitable for limiter computations.
///
/// Bounds Burn backends to ensure float elements convert to/from `f64`, so
/// device results can be compared bit-for-bit against the host kernels.
pub trait LimiterBackend: Backend {
    /// Get the default device for this backend.
    fn default_device() -> Self::Device;
}

#[cfg(feature = "burn-ndarray")]
impl LimiterBackend for burn_ndarray::NdArray {
    fn default_device() -> Self::Device {
        burn_ndarray::NdArrayDevice::Cpu
    }
}

#[cfg(feature = "burn-wgpu")]
impl LimiterBackend for burn_wgpu::Wgpu {
    fn default_device() -> Self::Device {
        burn_wgpu::WgpuDevice::default()
    }
}

#[cfg(feature = "burn-cuda")]
impl LimiterBackend for burn_cuda::Cuda {
    fn default_device() -> Self::Device {
        burn_cuda::CudaDevice::default()
    }
}

/// Helper to create a 1D float tensor from a field slice on the given device.
#[inline]
pub fn tensor_from_field<B: Backend>(data: &[f64], device: &B::Device) -> Tensor<B, 1>
where
    B::FloatElem: From<f64>,
{
    let len = data.len();
    let converted: Vec<B::FloatElem> = data.iter().map(|&x| B::FloatElem::from(x)).collect();
    Tensor::from_data(burn::tensor::TensorData::new(converted, vec![len]), device)
}

/// Helper to download a 1D float tensor into a `Vec<f64>` field.
#[inline]
pub fn tensor_to_field<B: Backend>(tensor: &Tensor<B, 1>) -> Vec<f64>
where
    f64: From<B::FloatElem>,
{
    tensor
        .to_data()
        .to_vec::<B::FloatElem>()
        .unwrap()
        .into_iter()
        .map(f64::from)
        .collect()
}

/// Helper to create a 1D integer index tensor from cell ids.
#[inline]
pub fn tensor_from_indices<B: Backend>(indices: &[usize], device: &B::Device) -> Tensor<B, 1, Int>
where
    B::IntElem: From<i64>,
{
    let len = indices.len();
    let converted: Vec<B::IntElem> = indices
        .iter()
        .map(|&i| B::IntElem::from(i as i64))
        .collect();
    Tensor::from_data(burn::tensor::TensorData::new(converted, vec![len]), device)
}
