//! Device-resident connectivity for the tensor limiter stages.
//!
//! Only the gather indices of the elementwise stages live on the device:
//! owner/neighbour cell ids for interior faces and the `p_cell` map for
//! patch faces. The grouped accumulation addressing stays on the host.

use burn::prelude::*;

use crate::mesh::{LduMesh, Patch};

use super::backend::tensor_from_indices;

/// Device-resident interior face connectivity.
#[derive(Clone, Debug)]
pub struct DeviceConnectivity<B: Backend> {
    /// Owner cell id per face, length `n_faces`
    pub owner: Tensor<B, 1, Int>,
    /// Neighbour cell id per face, length `n_faces`
    pub neighbour: Tensor<B, 1, Int>,
    /// Number of interior faces
    pub n_faces: usize,
}

impl<B: Backend> DeviceConnectivity<B>
where
    B::IntElem: From<i64>,
{
    /// Upload interior face connectivity from host addressing.
    pub fn from_mesh(mesh: &LduMesh, device: &B::Device) -> Self {
        Self {
            owner: tensor_from_indices(&mesh.owner, device),
            neighbour: tensor_from_indices(&mesh.neighbour, device),
            n_faces: mesh.n_faces(),
        }
    }
}

/// Device-resident patch face-to-cell map.
#[derive(Clone, Debug)]
pub struct DevicePatch<B: Backend> {
    /// Global cell id per patch-local face, length `n_faces`
    pub p_cell: Tensor<B, 1, Int>,
    /// Number of patch faces
    pub n_faces: usize,
}

impl<B: Backend> DevicePatch<B>
where
    B::IntElem: From<i64>,
{
    /// Upload the patch face-to-cell map from host addressing.
    pub fn from_patch(patch: &Patch, device: &B::Device) -> Self {
        Self {
            p_cell: tensor_from_indices(&patch.p_cell, device),
            n_faces: patch.n_faces(),
        }
    }
}
