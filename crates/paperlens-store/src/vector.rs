//! f32 vector ↔ little-endian BLOB codec.
//!
//! Stored vectors are reused directly by the internal check, so the codec
//! must be lossless.

use ndarray::Array1;
use paperlens_core::{Error, Result};

/// Encode a float32 vector as little-endian bytes.
pub fn vector_to_blob(vector: &Array1<f32>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for v in vector.iter() {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

/// Decode little-endian bytes back into a float32 vector of `dim` elements.
pub fn blob_to_vector(bytes: &[u8], dim: usize) -> Result<Array1<f32>> {
    if bytes.len() != dim * 4 {
        return Err(Error::Storage(format!(
            "vector blob has {} bytes, expected {} for dim {}",
            bytes.len(),
            dim * 4,
            dim
        )));
    }
    Ok(Array1::from_iter(bytes.chunks_exact(4).map(|chunk| {
        f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
    })))
}
