// External libraries
use cgmath::{Matrix3, SquareMatrix, Vector2};

// LIFECELL
use crate::grid::Dimensions;

/// Affine transform from grid space to a display surface: a per-axis scale
/// followed by a translation. The input side of the display contract inverts
/// it to map pointer positions back into grid coordinates.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    scale: Vector2<f32>,
    offset: Vector2<f32>,
}

impl Viewport {
    pub fn new(scale: Vector2<f32>, offset: Vector2<f32>) -> Self {
        Self { scale, offset }
    }

    /// Scales the grid uniformly to fill the surface, letterboxing or
    /// pillarboxing along the slack axis to preserve aspect ratio.
    pub fn fit(surface: Vector2<f32>, dim: Dimensions) -> Self {
        let grid_size = Vector2::new(dim.width() as f32, dim.height() as f32);
        let mut scale = Vector2::new(surface.x / grid_size.x, surface.y / grid_size.y);
        let mut offset = Vector2::new(0.0, 0.0);

        if scale.x > scale.y {
            scale.x = scale.y;
            offset.x = (surface.x - grid_size.x * scale.x) / 2.0;
        } else {
            scale.y = scale.x;
            offset.y = (surface.y - grid_size.y * scale.y) / 2.0;
        }

        Self { scale, offset }
    }

    #[inline]
    pub fn scale(&self) -> Vector2<f32> {
        self.scale
    }

    #[inline]
    pub fn offset(&self) -> Vector2<f32> {
        self.offset
    }

    /// The grid-to-surface transform as a homogeneous 2D matrix.
    pub fn matrix(&self) -> Matrix3<f32> {
        Matrix3::from_translation(self.offset)
            * Matrix3::from_nonuniform_scale(self.scale.x, self.scale.y)
    }

    /// Maps a surface position back into grid coordinates, which may lie
    /// outside the grid. A degenerate (non-invertible) viewport maps every
    /// position to an out-of-range coordinate.
    pub fn grid_position(&self, position: Vector2<f32>) -> (i32, i32) {
        let inverse = match self.matrix().invert() {
            Some(inverse) => inverse,
            None => return DEGENERATE_POSITION,
        };
        let mapped = inverse * position.extend(1.0);
        (mapped.x.floor() as i32, mapped.y.floor() as i32)
    }
}

const DEGENERATE_POSITION: (i32, i32) = (-1, -1);
