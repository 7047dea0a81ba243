use crate::bank::QuestionBank;
use crate::models::{Category, Difficulty, Question};

/// Questions of `category` matching `difficulty` exactly, first `count` in bank order.
pub fn select(
    bank: &QuestionBank,
    category: Category,
    difficulty: Difficulty,
    count: usize,
) -> Vec<Question> {
    bank.questions(category)
        .iter()
        .filter(|q| q.difficulty == difficulty)
        .take(count)
        .cloned()
        .collect()
}
