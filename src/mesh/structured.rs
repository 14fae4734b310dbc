//! Structured test meshes expressed in LDU addressing.
//!
//! The limiter itself is mesh-agnostic; these constructors exist so tests
//! and benchmarks can build valid connectivity without an external mesh
//! provider.

use super::LduMesh;

impl LduMesh {
    /// Create a 1-D chain of `n` cells with `n - 1` interior faces.
    ///
    /// Face `f` connects owner `f` to neighbour `f + 1`.
    pub fn line(n: usize) -> Self {
        let n_faces = n.saturating_sub(1);
        let owner: Vec<usize> = (0..n_faces).collect();
        let neighbour: Vec<usize> = (1..n).collect();
        Self::build(n, owner, neighbour)
    }

    /// Create a uniform `nx` × `ny` quadrilateral grid.
    ///
    /// Cell `(i, j)` has id `j * nx + i`. Each cell owns its east face
    /// (neighbour `id + 1`) and its north face (neighbour `id + nx`), so the
    /// face list is owner-sorted by construction.
    pub fn uniform_rectangle(nx: usize, ny: usize) -> Self {
        let n_cells = nx * ny;
        let mut owner = Vec::new();
        let mut neighbour = Vec::new();

        for j in 0..ny {
            for i in 0..nx {
                let cell = j * nx + i;
                if i + 1 < nx {
                    owner.push(cell);
                    neighbour.push(cell + 1);
                }
                if j + 1 < ny {
                    owner.push(cell);
                    neighbour.push(cell + nx);
                }
            }
        }

        Self::build(n_cells, owner, neighbour)
    }
}
