use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Ordered list of community rating submissions for one movie.
///
/// The community rating is never stored, it is always projected from the
/// submissions through [`RatingLedger::mean`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingLedger {
    submissions: Vec<f64>,
}

impl RatingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_submissions(submissions: Vec<f64>) -> Self {
        Self { submissions }
    }

    pub fn push(&mut self, rating: f64) {
        self.submissions.push(rating);
    }

    pub fn submissions(&self) -> &[f64] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Arithmetic mean of the submissions, `0.0` when there are none.
    pub fn mean(&self) -> f64 {
        if self.submissions.is_empty() {
            return 0.0;
        }
        self.submissions.iter().sum::<f64>() / self.submissions.len() as f64
    }
}

// Bitwise comparison keeps Eq and Hash consistent with each other.
impl PartialEq for RatingLedger {
    fn eq(&self, other: &Self) -> bool {
        self.submissions.len() == other.submissions.len()
            && self
                .submissions
                .iter()
                .zip(other.submissions.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for RatingLedger {}

impl Hash for RatingLedger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.submissions.len().hash(state);
        for rating in self.submissions.iter() {
            rating.to_bits().hash(state);
        }
    }
}
