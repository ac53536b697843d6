use crate::error::Result;
use crate::matrix::{validate_permutation, DistanceMatrix};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Agglomeration rule requested from the clustering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkageMethod {
    Single,
    Complete,
    #[default]
    Average,
    Weighted,
    Ward,
}

impl fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkageMethod::Single => "single",
            LinkageMethod::Complete => "complete",
            LinkageMethod::Average => "average",
            LinkageMethod::Weighted => "weighted",
            LinkageMethod::Ward => "ward",
        };
        f.write_str(name)
    }
}

/// External hierarchical clustering
///
/// Given the condensed upper triangle of an `n × n` distance matrix, returns
/// the dendrogram's leaf order as a permutation of `0..n`.
pub trait Linkage {
    fn leaf_order(&self, condensed: &[f64], n: usize, method: LinkageMethod)
        -> Result<Vec<usize>>;
}

impl<F> Linkage for F
where
    F: Fn(&[f64], usize, LinkageMethod) -> Result<Vec<usize>>,
{
    fn leaf_order(
        &self,
        condensed: &[f64],
        n: usize,
        method: LinkageMethod,
    ) -> Result<Vec<usize>> {
        self(condensed, n, method)
    }
}

/// A distance matrix reordered by dendrogram leaf order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteredMatrix {
    pub matrix: DistanceMatrix,
    pub leaf_order: Vec<usize>,
}

/// Reorder rows and columns so that clustered sequences sit together
///
/// Uses average linkage. This is a presentation transform only; it never
/// feeds back into distance computation.
///
/// # Errors
/// `Linkage` if the collaborator fails or returns something that is not a
/// permutation; `Dimension` if the order has the wrong length.
pub fn cluster_reorder(matrix: &DistanceMatrix, linkage: &dyn Linkage) -> Result<ClusteredMatrix> {
    cluster_reorder_with(matrix, linkage, LinkageMethod::Average)
}

/// [`cluster_reorder`] with an explicit linkage method
pub fn cluster_reorder_with(
    matrix: &DistanceMatrix,
    linkage: &dyn Linkage,
    method: LinkageMethod,
) -> Result<ClusteredMatrix> {
    let condensed = matrix.condensed();
    let leaf_order = linkage.leaf_order(&condensed, matrix.size(), method)?;
    validate_permutation(&leaf_order, matrix.size())?;
    debug!(size = matrix.size(), %method, ?leaf_order, "reordering matrix by dendrogram leaves");

    Ok(ClusteredMatrix {
        matrix: matrix.permuted(&leaf_order)?,
        leaf_order,
    })
}
