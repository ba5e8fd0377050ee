use ndarray::{Array2, ArrayView2};

use crate::processing::{MatchError, MatchResult};

/// Guard against division by zero for zero-norm vectors.
pub const NORM_EPSILON: f32 = 1e-12;

/// Compute the all-pairs cosine similarity matrix.
///
/// Rows of the result correspond to requirement vectors, columns to catalog
/// vectors. Both inputs must share the same embedding width.
pub fn cosine_similarity_matrix(
    requirements: ArrayView2<f32>,
    catalog: ArrayView2<f32>,
) -> MatchResult<Array2<f32>> {
    if requirements.ncols() != catalog.ncols() {
        return Err(MatchError::DimensionMismatch {
            left: requirements.ncols(),
            right: catalog.ncols(),
        });
    }

    let catalog_norms: Vec<f32> = catalog
        .rows()
        .into_iter()
        .map(|row| row.dot(&row).sqrt())
        .collect();

    let mut matrix = Array2::zeros((requirements.nrows(), catalog.nrows()));
    for (i, requirement) in requirements.rows().into_iter().enumerate() {
        let requirement_norm = requirement.dot(&requirement).sqrt();
        for (j, entry) in catalog.rows().into_iter().enumerate() {
            let denominator = (requirement_norm * catalog_norms[j]).max(NORM_EPSILON);
            matrix[[i, j]] = requirement.dot(&entry) / denominator;
        }
    }
    Ok(matrix)
}

/// For each row, the column index with the highest similarity.
///
/// A strict greater-than scan keeps ties on the lowest column index, so
/// equal scores resolve to the entry that appears first in the catalog.
pub fn best_match_indices(matrix: &Array2<f32>) -> Vec<usize> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_score = f32::NEG_INFINITY;
            for (j, &score) in row.iter().enumerate() {
                if score > best_score {
                    best = j;
                    best_score = score;
                }
            }
            best
        })
        .collect()
}
