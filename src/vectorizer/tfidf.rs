use num::Float;

/// TF-IDF calculation engine
/// Turns stored count vectors into weighted vectors of `N`.
/// Plugged into [`BagOfWords<E>`](crate::BagOfWords) as a type parameter.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// IDF per slot
    /// # Arguments
    /// * `doc_freq` - documents containing each slot's token
    /// * `doc_num` - documents in the corpus
    fn idf_vec(doc_freq: &[u64], doc_num: u64) -> Vec<N>;

    /// weight one document; `tf_vec` and `idf_vec` have the same width
    fn tfidf_vec(tf_vec: &[u32], idf_vec: &[N]) -> Vec<N>;

    /// counts converted without weighting
    fn raw_vec(tf_vec: &[u32]) -> Vec<N>;
}

/// Default TF-IDF engine
/// Smoothed IDF: `ln((N + 1) / (df + 1)) + 1`, so every IDF is finite and
/// at least 1, and weight is `tf * idf` (zero where `tf` is zero).
/// Implemented for `f32` and `f64`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    #[inline]
    pub fn smoothed_idf(doc_freq: u64, doc_num: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    fn idf_vec(doc_freq: &[u64], doc_num: u64) -> Vec<f64> {
        doc_freq
            .iter()
            .map(|&df| Self::smoothed_idf(df, doc_num))
            .collect()
    }

    fn tfidf_vec(tf_vec: &[u32], idf_vec: &[f64]) -> Vec<f64> {
        tf_vec
            .iter()
            .zip(idf_vec)
            .map(|(&tf, &idf)| if tf > 0 { tf as f64 * idf } else { 0.0 })
            .collect()
    }

    fn raw_vec(tf_vec: &[u32]) -> Vec<f64> {
        tf_vec.iter().map(|&tf| tf as f64).collect()
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    fn idf_vec(doc_freq: &[u64], doc_num: u64) -> Vec<f32> {
        doc_freq
            .iter()
            .map(|&df| Self::smoothed_idf(df, doc_num) as f32)
            .collect()
    }

    fn tfidf_vec(tf_vec: &[u32], idf_vec: &[f32]) -> Vec<f32> {
        tf_vec
            .iter()
            .zip(idf_vec)
            .map(|(&tf, &idf)| if tf > 0 { tf as f32 * idf } else { 0.0 })
            .collect()
    }

    fn raw_vec(tf_vec: &[u32]) -> Vec<f32> {
        tf_vec.iter().map(|&tf| tf as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_is_one_when_term_in_every_document() {
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&[3, 1, 0], 3);
        assert!((idf[0] - 1.0).abs() < 1e-12);
        assert!((idf[1] - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
        assert!(idf.iter().all(|v| v.is_finite() && *v >= 1.0));
    }

    #[test]
    fn zero_counts_score_zero() {
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&[1, 2, 1, 1], 2);
        let w: Vec<f64> = DefaultTFIDFEngine::tfidf_vec(&[0, 1, 2, 0], &idf);
        assert_eq!(w[0], 0.0);
        assert_eq!(w[3], 0.0);
        assert!((w[1] - 1.0).abs() < 1e-12);
        assert!((w[2] - 2.0 * ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn f32_matches_f64() {
        let idf64: Vec<f64> = DefaultTFIDFEngine::idf_vec(&[1, 4], 5);
        let idf32: Vec<f32> = DefaultTFIDFEngine::idf_vec(&[1, 4], 5);
        let w64: Vec<f64> = DefaultTFIDFEngine::tfidf_vec(&[3, 1], &idf64);
        let w32: Vec<f32> = DefaultTFIDFEngine::tfidf_vec(&[3, 1], &idf32);
        for (a, b) in w64.iter().zip(&w32) {
            assert!((*a as f32 - b).abs() < 1e-5);
        }
        let raw: Vec<f32> = DefaultTFIDFEngine::raw_vec(&[0, 7]);
        assert_eq!(raw, vec![0.0, 7.0]);
    }
}
