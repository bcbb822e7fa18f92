//! Pairwise measures between two per-document term vectors.

use ndarray::ArrayView1;

use crate::error::{NetworkError, Result};

/// Value reported by [`cosine_similarity`] when a vector has zero norm.
pub const UNDEFINED_SIMILARITY: f64 = -1.0;

fn check_len(a: &ArrayView1<'_, u32>, b: &ArrayView1<'_, u32>) -> Result<()> {
    if a.len() != b.len() {
        return Err(NetworkError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Cosine of the angle between `a` and `b`, `None` if either is all zero.
pub fn cosine(a: ArrayView1<'_, u32>, b: ArrayView1<'_, u32>) -> Result<Option<f64>> {
    check_len(&a, &b)?;
    let mut dot = 0.0_f64;
    let mut a_norm = 0.0_f64;
    let mut b_norm = 0.0_f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        a_norm += x * x;
        b_norm += y * y;
    }
    if a_norm * b_norm == 0.0 {
        return Ok(None);
    }
    Ok(Some(dot / (a_norm * b_norm).sqrt()))
}

///Cosine similarity with [`UNDEFINED_SIMILARITY`] standing in for a zero vector.
/// # Example
/// ```
/// use ndarray::aview1;
/// use word_network::cosine_similarity;
/// let s = cosine_similarity(aview1(&[1, 0]), aview1(&[0, 0])).unwrap();
/// assert_eq!(s, -1.0);
/// ```
pub fn cosine_similarity(a: ArrayView1<'_, u32>, b: ArrayView1<'_, u32>) -> Result<f64> {
    Ok(cosine(a, b)?.unwrap_or(UNDEFINED_SIMILARITY))
}

/// Number of documents in which both words occur at least once.
pub fn cooccurrence_count(a: ArrayView1<'_, u32>, b: ArrayView1<'_, u32>) -> Result<u64> {
    check_len(&a, &b)?;
    Ok(a.iter().zip(b.iter()).filter(|(x, y)| **x > 0 && **y > 0).count() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::aview1;

    const EPS: f64 = 1e-12;

    #[test]
    fn identical_direction_is_one() {
        let s = cosine_similarity(aview1(&[1, 2, 0]), aview1(&[2, 4, 0])).unwrap();
        assert!((s - 1.0).abs() < EPS);
    }

    #[test]
    fn orthogonal_vectors_are_zero() {
        let s = cosine_similarity(aview1(&[1, 0]), aview1(&[0, 3])).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn known_value() {
        // (1*1 + 1*0) / (sqrt(2) * 1)
        let s = cosine_similarity(aview1(&[1, 1]), aview1(&[1, 0])).unwrap();
        assert!((s - 1.0 / 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn zero_vector_gives_sentinel() {
        assert_eq!(cosine(aview1(&[0, 0]), aview1(&[1, 1])).unwrap(), None);
        assert_eq!(
            cosine_similarity(aview1(&[0, 0]), aview1(&[0, 0])).unwrap(),
            UNDEFINED_SIMILARITY
        );
    }

    #[test]
    fn bounded_for_non_zero_vectors() {
        let vectors: [&[u32]; 4] = [&[1, 0, 2], &[0, 5, 1], &[3, 3, 3], &[7, 0, 0]];
        for a in vectors {
            for b in vectors {
                let s = cosine_similarity(aview1(a), aview1(b)).unwrap();
                assert!((-1.0..=1.0 + EPS).contains(&s), "{s} out of range");
            }
        }
    }

    #[test]
    fn count_is_symmetric_and_counts_shared_documents() {
        let a = aview1(&[1, 0, 2, 1]);
        let b = aview1(&[3, 1, 0, 1]);
        assert_eq!(cooccurrence_count(a, b).unwrap(), 2);
        assert_eq!(cooccurrence_count(b, a).unwrap(), 2);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = cooccurrence_count(aview1(&[1]), aview1(&[1, 2])).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::LengthMismatch { left: 1, right: 2 }
        ));
        assert!(cosine(aview1(&[1, 2]), aview1(&[1])).is_err());
    }
}
