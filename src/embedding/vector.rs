/// Fixed-length sentence vector, unit-normalized on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// L2-normalizes `values`; an all-zero vector is kept as is.
    ///
    /// The norm is accumulated in `f64` so self-similarity stays within one `f32` ULP
    /// of 1.0 regardless of dimension.
    pub fn normalized(mut values: Vec<f32>) -> Self {
        let norm = values
            .iter()
            .map(|x| f64::from(*x) * f64::from(*x))
            .sum::<f64>()
            .sqrt();

        if norm > 0.0 {
            for x in &mut values {
                *x = (f64::from(*x) / norm) as f32;
            }
        }

        Self(values)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Cosine similarity with `other`, which for unit vectors is the dot product.
    pub fn cosine(&self, other: &Embedding) -> f32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum::<f64>() as f32
    }
}
