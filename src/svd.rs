//! Thin wrapper around nalgebra's dense singular value decomposition for
//! caller-owned, row-major buffers.

use anyhow::Result;
use nalgebra::{DMatrix, DVector};

/// Iteration cap handed to nalgebra before the decomposition is declared
/// non-convergent.
const MAX_SVD_ITERATIONS: usize = 1000;

/// Singular value decomposition `A = U Σ Vᵀ` of a dense `nr × nc` matrix.
///
/// The factors `U` and `Vᵀ` are only computed when requested; singular
/// values are always available, sorted in descending order.
#[derive(Debug, Clone)]
pub struct Svd {
    singular_values: DVector<f64>,
    u: Option<DMatrix<f64>>,
    vt: Option<DMatrix<f64>>,
}

impl Svd {
    /// Decompose a row-major buffer holding an `nr × nc` matrix whose rows
    /// are `nld` values apart (`nld >= nc`; trailing row padding beyond the
    /// last element need not exist).
    pub fn decompose(
        a: &[f64],
        nr: usize,
        nc: usize,
        nld: usize,
        compute_u: bool,
        compute_vt: bool,
    ) -> Result<Self> {
        anyhow::ensure!(nr > 0 && nc > 0, "empty matrix ({} x {})", nr, nc);
        anyhow::ensure!(
            nld >= nc,
            "leading dimension {} smaller than column count {}",
            nld,
            nc
        );
        let needed = (nr - 1) * nld + nc;
        anyhow::ensure!(
            a.len() >= needed,
            "buffer holds {} values but {} are required",
            a.len(),
            needed
        );
        let matrix = DMatrix::from_fn(nr, nc, |row, col| a[row * nld + col]);
        let svd = matrix
            .try_svd(compute_u, compute_vt, f64::EPSILON, MAX_SVD_ITERATIONS)
            .ok_or_else(|| anyhow::anyhow!("SVD failed to converge"))?;
        Ok(Self {
            singular_values: svd.singular_values,
            u: svd.u,
            vt: svd.v_t,
        })
    }

    /// Singular values, descending.
    pub fn singular_values(&self) -> &DVector<f64> {
        &self.singular_values
    }

    /// Left singular vectors, present when requested at decomposition.
    pub fn u(&self) -> Option<&DMatrix<f64>> {
        self.u.as_ref()
    }

    /// Transposed right singular vectors, present when requested at
    /// decomposition.
    pub fn vt(&self) -> Option<&DMatrix<f64>> {
        self.vt.as_ref()
    }

    /// Number of singular values above `eps`.
    pub fn rank(&self, eps: f64) -> usize {
        self.singular_values.iter().filter(|&&sv| sv > eps).count()
    }
}
