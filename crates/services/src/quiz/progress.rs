/// Aggregated view of quiz progress, useful for UI footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based page number.
    pub page_number: usize,
    pub page_count: usize,
    pub total_questions: usize,
}
