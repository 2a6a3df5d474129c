/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
    pub is_complete: bool,
}
