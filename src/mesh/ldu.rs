//! Lower-diagonal/upper-diagonal (LDU) face addressing for unstructured
//! meshes.
//!
//! Each interior face connects exactly two cells: the *owner* (smaller cell
//! id by construction) and the *neighbour*. Faces are stored sorted by owner,
//! so each cell's owner-side faces form one contiguous range (`own_start`).
//! Iterating faces from the neighbour's perspective uses `losort`, a face
//! ordering grouped by neighbour cell id with per-cell ranges (`nei_start`).
//!
//! The limiter kernels consume these arrays read-only and perform no bounds
//! checks of their own, so all validation happens here at construction time.

use thiserror::Error;

use crate::types::CellIndex;

/// Error type for connectivity construction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Owner and neighbour lists have different lengths.
    #[error("owner list has {owner} entries but neighbour list has {neighbour}")]
    LengthMismatch { owner: usize, neighbour: usize },

    /// A face references a cell id outside `0..n_cells`.
    #[error("face {face} references cell {cell}, but the mesh has {n_cells} cells")]
    CellOutOfRange {
        face: usize,
        cell: usize,
        n_cells: usize,
    },

    /// A face's owner id is not strictly smaller than its neighbour id.
    #[error("face {face} has owner {owner} >= neighbour {neighbour}")]
    OwnerNotBelowNeighbour {
        face: usize,
        owner: usize,
        neighbour: usize,
    },

    /// Faces are not sorted by owner cell id.
    #[error("face {face} breaks the owner-sorted face ordering")]
    UnsortedOwners { face: usize },
}

/// Interior-face connectivity in LDU addressing form.
///
/// Invariants (enforced by [`LduMesh::from_owner_neighbour`]):
/// - `owner[f] < neighbour[f]` for every face,
/// - `owner` is non-decreasing, so `own_start[c]..own_start[c + 1]` is the
///   contiguous, ascending range of faces owned by cell `c`,
/// - `losort[nei_start[c]..nei_start[c + 1]]` lists the faces where cell `c`
///   is the neighbour, in ascending face id,
/// - every interior face appears exactly once on each side.
#[derive(Clone, Debug)]
pub struct LduMesh {
    /// Number of cells
    pub n_cells: usize,
    /// Owner cell id per face
    pub owner: Vec<usize>,
    /// Neighbour cell id per face
    pub neighbour: Vec<usize>,
    /// Per-cell offsets into the owner-sorted face list, length `n_cells + 1`
    pub own_start: Vec<usize>,
    /// Per-cell offsets into `losort`, length `n_cells + 1`
    pub nei_start: Vec<usize>,
    /// Face ids grouped by neighbour cell, length `n_faces`
    pub losort: Vec<usize>,
}

impl LduMesh {
    /// Build LDU addressing from raw owner/neighbour lists.
    ///
    /// Validates the caller contract (matching lengths, in-range cell ids,
    /// `owner < neighbour`, owner-sorted ordering) and derives the
    /// `own_start`/`nei_start`/`losort` arrays consumed by the kernels.
    ///
    /// # Arguments
    /// * `n_cells` - Number of cells in the mesh
    /// * `owner` - Owner cell id for each interior face
    /// * `neighbour` - Neighbour cell id for each interior face
    ///
    /// # Errors
    /// Returns [`MeshError`] describing the first violated invariant.
    pub fn from_owner_neighbour(
        n_cells: usize,
        owner: Vec<usize>,
        neighbour: Vec<usize>,
    ) -> Result<Self, MeshError> {
        if owner.len() != neighbour.len() {
            return Err(MeshError::LengthMismatch {
                owner: owner.len(),
                neighbour: neighbour.len(),
            });
        }

        for (face, (&own, &nei)) in owner.iter().zip(neighbour.iter()).enumerate() {
            if own >= n_cells {
                return Err(MeshError::CellOutOfRange {
                    face,
                    cell: own,
                    n_cells,
                });
            }
            if nei >= n_cells {
                return Err(MeshError::CellOutOfRange {
                    face,
                    cell: nei,
                    n_cells,
                });
            }
            if own >= nei {
                return Err(MeshError::OwnerNotBelowNeighbour {
                    face,
                    owner: own,
                    neighbour: nei,
                });
            }
            if face > 0 && owner[face - 1] > own {
                return Err(MeshError::UnsortedOwners { face });
            }
        }

        Ok(Self::build(n_cells, owner, neighbour))
    }

    /// Build addressing from lists already known to satisfy the invariants.
    ///
    /// Used by the structured-mesh constructors, where validity holds by
    /// construction.
    pub(crate) fn build(n_cells: usize, owner: Vec<usize>, neighbour: Vec<usize>) -> Self {
        let n_faces = owner.len();

        // Owner side: faces are owner-sorted, so a counting pass gives the
        // contiguous per-cell ranges.
        let mut own_start = vec![0usize; n_cells + 1];
        for &own in &owner {
            own_start[own + 1] += 1;
        }
        for c in 0..n_cells {
            own_start[c + 1] += own_start[c];
        }

        // Neighbour side: stable counting sort of face ids by neighbour cell.
        // Filling in ascending face order keeps each cell's group sorted by
        // face id, which fixes the neighbour-side traversal order.
        let mut nei_start = vec![0usize; n_cells + 1];
        for &nei in &neighbour {
            nei_start[nei + 1] += 1;
        }
        for c in 0..n_cells {
            nei_start[c + 1] += nei_start[c];
        }

        let mut losort = vec![0usize; n_faces];
        let mut cursor = nei_start.clone();
        for (face, &nei) in neighbour.iter().enumerate() {
            losort[cursor[nei]] = face;
            cursor[nei] += 1;
        }

        Self {
            n_cells,
            owner,
            neighbour,
            own_start,
            nei_start,
            losort,
        }
    }

    /// Number of interior faces.
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.owner.len()
    }

    /// Contiguous range of face ids owned by `cell`, in ascending order.
    #[inline]
    pub fn owner_faces(&self, cell: CellIndex) -> std::ops::Range<usize> {
        let c = cell.get();
        self.own_start[c]..self.own_start[c + 1]
    }

    /// Face ids where `cell` is the neighbour, in `losort` order.
    #[inline]
    pub fn neighbour_faces(&self, cell: CellIndex) -> &[usize] {
        let c = cell.get();
        &self.losort[self.nei_start[c]..self.nei_start[c + 1]]
    }
}
