//! End-to-end generation pipeline and collection assembly
//!
//! Data flows strictly synthesizer → renderer → serializer. Each piece is
//! generated with independently re-drawn wave parameters and noise from the
//! same random source handle, so a fixed seed reproduces a whole collection.

use crate::io::error::{Result, invalid_parameter};
use crate::render::{RenderedImage, render};
use crate::synthesis::Field;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered sequence of rendered pieces, the unit of serialized output
///
/// Serializes transparently as a bare JSON array of image records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtCollection {
    pieces: Vec<RenderedImage>,
}

impl ArtCollection {
    /// Create an empty collection with room for `count` pieces
    pub fn with_capacity(count: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(count),
        }
    }

    /// Append a rendered piece, preserving generation order
    pub fn push(&mut self, piece: RenderedImage) {
        self.pieces.push(piece);
    }

    /// Number of pieces in the collection
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the collection holds no pieces
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The rendered pieces in generation order
    pub fn pieces(&self) -> &[RenderedImage] {
        &self.pieces
    }
}

/// Generate a single piece: synthesize a field and render it
///
/// # Errors
///
/// Returns an error if `size` is zero or if rendering fails.
pub fn generate_piece<R: Rng>(size: usize, rng: &mut R) -> Result<RenderedImage> {
    if size == 0 {
        return Err(invalid_parameter(
            "size",
            &size,
            &"grid resolution must be positive",
        ));
    }

    let field = Field::synthesize(size, rng);
    render(&field)
}

/// Run the full pipeline `count` times and collect the results
///
/// # Errors
///
/// Returns an error if `size` is zero or if rendering fails.
pub fn generate_collection<R: Rng>(count: usize, size: usize, rng: &mut R) -> Result<ArtCollection> {
    let mut collection = ArtCollection::with_capacity(count);
    for _ in 0..count {
        collection.push(generate_piece(size, rng)?);
    }
    Ok(collection)
}
