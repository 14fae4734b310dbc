//! Boundary patch addressing.
//!
//! A patch is a subset of boundary faces. Each patch face has only an owner
//! cell, identified through the `p_cell` map from patch-local face id to
//! global cell id. For cell-wise accumulation the faces are additionally
//! grouped by owning cell with a `nei_start`/`losort`-style structure, the
//! same layout the interior addressing uses for neighbour-side traversal.
//!
//! Several patches may reference the same global cell; the accumulation
//! drivers are responsible for merging their contributions safely.

use super::MeshError;

/// Addressing for one boundary patch.
#[derive(Clone, Debug)]
pub struct Patch {
    /// Global cell id per patch-local face, length `n_faces`
    pub p_cell: Vec<usize>,
    /// Per-group offsets into `losort`, length `n_groups + 1`
    pub nei_start: Vec<usize>,
    /// Patch-local face ids grouped by owning cell, length `n_faces`
    pub losort: Vec<usize>,
    /// Global cell id per group, length `n_groups`
    pub cells: Vec<usize>,
}

impl Patch {
    /// Build patch addressing from the per-face owning-cell map.
    ///
    /// Faces are grouped by owning cell (groups in ascending global cell id,
    /// faces within a group in ascending patch-local face id), which fixes
    /// the accumulation traversal order.
    ///
    /// # Arguments
    /// * `n_cells` - Number of cells in the global mesh
    /// * `p_cell` - Global cell id for each patch-local face
    ///
    /// # Errors
    /// Returns [`MeshError::CellOutOfRange`] if any entry references a cell
    /// outside `0..n_cells`.
    pub fn from_face_cells(n_cells: usize, p_cell: Vec<usize>) -> Result<Self, MeshError> {
        for (face, &cell) in p_cell.iter().enumerate() {
            if cell >= n_cells {
                return Err(MeshError::CellOutOfRange {
                    face,
                    cell,
                    n_cells,
                });
            }
        }

        // Distinct owning cells, ascending.
        let mut cells: Vec<usize> = p_cell.clone();
        cells.sort_unstable();
        cells.dedup();

        // Cell id -> group slot for the counting sort below.
        let group_of = |cell: usize| -> usize {
            // cells is sorted and contains cell by construction
            cells.binary_search(&cell).unwrap_or(usize::MAX)
        };

        let n_groups = cells.len();
        let mut nei_start = vec![0usize; n_groups + 1];
        for &cell in &p_cell {
            nei_start[group_of(cell) + 1] += 1;
        }
        for g in 0..n_groups {
            nei_start[g + 1] += nei_start[g];
        }

        let mut losort = vec![0usize; p_cell.len()];
        let mut cursor = nei_start.clone();
        for (face, &cell) in p_cell.iter().enumerate() {
            let g = group_of(cell);
            losort[cursor[g]] = face;
            cursor[g] += 1;
        }

        Ok(Self {
            p_cell,
            nei_start,
            losort,
            cells,
        })
    }

    /// Number of patch faces.
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.p_cell.len()
    }

    /// Number of distinct owning cells.
    #[inline]
    pub fn n_groups(&self) -> usize {
        self.cells.len()
    }

    /// Patch-local face ids owned by group `group`, in ascending order.
    #[inline]
    pub fn group_faces(&self, group: usize) -> &[usize] {
        &self.losort[self.nei_start[group]..self.nei_start[group + 1]]
    }

    /// Global cell id of group `group`.
    #[inline]
    pub fn group_cell(&self, group: usize) -> usize {
        self.cells[group]
    }
}
