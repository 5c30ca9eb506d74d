//! Ordered `(x, y)` observations.
//!
//! [`SampleSeries`] stores its columns separately so the interpolation 
//! configs can borrow `x` and `y` as plain slices.

use crate::sampling::errors::SamplingError;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}


#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SamplingError> {
        if x.len() != y.len() {
            return Err(SamplingError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        Ok(Self { x, y })
    }

    pub fn from_samples<I: IntoIterator<Item = Sample>>(samples: I) -> Self {
        let (x, y) = samples.into_iter().map(|s| (s.x, s.y)).unzip();
        Self { x, y }
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }

    pub fn get(&self, i: usize) -> Option<Sample> {
        Some(Sample { x: *self.x.get(i)?, y: *self.y.get(i)? })
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Sample { x, y })
    }

    /// Gathers the samples at `indices`, in the order given. 
    /// 
    /// # Errors 
    /// [`SamplingError::IndexOutOfRange`] for the first index past the end.
    pub fn select(&self, indices: &[usize]) -> Result<SampleSeries, SamplingError> {
        let len = self.len();
        if let Some(&idx) = indices.iter().find(|&&i| i >= len) {
            return Err(SamplingError::IndexOutOfRange { idx, len });
        }
        Ok(SampleSeries {
            x: indices.iter().map(|&i| self.x[i]).collect(),
            y: indices.iter().map(|&i| self.y[i]).collect(),
        })
    }

    /// First `len` samples.
    pub(crate) fn truncated(&self, len: usize) -> SampleSeries {
        let len = len.min(self.len());
        SampleSeries { x: self.x[..len].to_vec(), y: self.y[..len].to_vec() }
    }
}

impl FromIterator<Sample> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::from_samples(iter)
    }
}
