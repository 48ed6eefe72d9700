//! Discrete smoothing filters with zero-padded boundaries

use ndarray::Array2;
use num_traits::{Float, NumAssign};

/// Side length of the uniform smoothing kernel
pub const KERNEL_SIZE: usize = 3;

/// Number of cells in the uniform smoothing kernel
pub const KERNEL_CELL_COUNT: usize = KERNEL_SIZE * KERNEL_SIZE;

/// Apply a 3×3 uniform-averaging convolution with "same" output size
///
/// Each output cell is the mean of itself and its 8 neighbors with weight
/// 1/9 each. The boundary policy is zero padding: cells outside the grid
/// contribute zero to the sum but the divisor stays at 9, so means near the
/// borders come out lower than in the interior.
pub fn uniform_filter_3x3<T: Float + NumAssign>(input: &Array2<T>) -> Array2<T> {
    let divisor = T::from(KERNEL_CELL_COUNT).unwrap_or_else(T::one);

    Array2::from_shape_fn(input.dim(), |(row, col)| {
        let mut sum = T::zero();
        for row_offset in -1..=1_isize {
            for col_offset in -1..=1_isize {
                let neighbor = row
                    .checked_add_signed(row_offset)
                    .zip(col.checked_add_signed(col_offset));
                if let Some(index) = neighbor
                    && let Some(value) = input.get(index)
                {
                    sum += *value;
                }
            }
        }
        sum / divisor
    })
}
