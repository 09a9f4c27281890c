use chrono::{DateTime, Utc};

/// Final result of a quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl ScoreReport {
    /// Count correct marks into a report.
    #[must_use]
    pub fn from_marks(
        marks: &[bool],
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            correct: marks.iter().filter(|mark| **mark).count(),
            total: marks.len(),
            started_at,
            completed_at,
        }
    }

    /// Percentage of correct answers, `100 * correct / total`.
    ///
    /// An empty attempt reports 0.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            100.0 * self.correct as f64 / self.total as f64
        }
    }
}
