use serde::{Deserialize, Serialize};
use std::fmt;

pub const QUESTION_COUNTS: [usize; 3] = [5, 10, 15];
pub const DEFAULT_QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Tech,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::General, Category::Tech];

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General Knowledge",
            Category::Tech => "Technology",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Category::General => Category::Tech,
            Category::Tech => Category::General,
        }
    }

    pub fn prev(self) -> Self {
        // Two variants, so stepping back is the same as stepping forward.
        self.next()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::General => write!(f, "general"),
            Category::Tech => write!(f, "tech"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Normal => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Normal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Result,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Menu => write!(f, "menu"),
            GamePhase::Playing => write!(f, "playing"),
            GamePhase::Result => write!(f, "result"),
        }
    }
}

/// What the player picked on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub category: Category,
    pub difficulty: Difficulty,
    pub count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: Category::default(),
            difficulty: Difficulty::default(),
            count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl Settings {
    pub fn next_count(&self) -> usize {
        step_count(self.count, 1)
    }

    pub fn prev_count(&self) -> usize {
        step_count(self.count, QUESTION_COUNTS.len() - 1)
    }
}

fn step_count(count: usize, step: usize) -> usize {
    let pos = QUESTION_COUNTS
        .iter()
        .position(|&c| c == count)
        .unwrap_or(1);
    QUESTION_COUNTS[(pos + step) % QUESTION_COUNTS.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    pub explanation: String,
}

impl Question {
    /// A missing answer is never correct.
    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_answer)
    }

    pub fn correct_text(&self) -> &str {
        self.answers
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One resolved question in the outcome log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question: String,
    pub user_answer: Option<usize>,
    pub correct_answer: usize,
    pub is_correct: bool,
    pub time_spent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Grade::Excellent
        } else if percentage >= 60 {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Excellent => "Outstanding result!",
            Grade::Good => "Nice work!",
            Grade::KeepPracticing => "Keep practicing and try again!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

impl ResultSummary {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            (score as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.category, Category::General);
        assert_eq!(settings.difficulty, Difficulty::Normal);
        assert_eq!(settings.count, 10);
    }

    #[test]
    fn test_count_cycles_through_allowed_values() {
        let mut settings = Settings::default();
        settings.count = settings.next_count();
        assert_eq!(settings.count, 15);
        settings.count = settings.next_count();
        assert_eq!(settings.count, 5);
        settings.count = settings.prev_count();
        assert_eq!(settings.count, 15);
    }

    #[test]
    fn test_difficulty_cycle_is_closed() {
        for d in Difficulty::ALL {
            assert_eq!(d.next().prev(), d);
        }
        assert_eq!(Category::General.next(), Category::Tech);
        assert_eq!(Category::Tech.prev(), Category::General);
    }

    #[test]
    fn test_no_answer_is_never_correct() {
        let q = Question {
            id: 1,
            question: "2 + 2?".to_string(),
            answers: vec!["3".to_string(), "4".to_string()],
            correct_answer: 1,
            difficulty: Difficulty::Easy,
            explanation: String::new(),
        };
        assert!(q.is_correct(Some(1)));
        assert!(!q.is_correct(Some(0)));
        assert!(!q.is_correct(None));
        assert_eq!(q.correct_text(), "4");
    }

    #[test]
    fn test_result_summary_rounding_and_grades() {
        let perfect = ResultSummary::new(2, 2);
        assert_eq!(perfect.percentage, 100);
        assert_eq!(perfect.grade, Grade::Excellent);

        let two_thirds = ResultSummary::new(2, 3);
        assert_eq!(two_thirds.percentage, 67);
        assert_eq!(two_thirds.grade, Grade::Good);

        let low = ResultSummary::new(1, 5);
        assert_eq!(low.percentage, 20);
        assert_eq!(low.grade, Grade::KeepPracticing);
    }

    #[test]
    fn test_result_summary_empty_session() {
        let summary = ResultSummary::new(0, 0);
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.grade, Grade::KeepPracticing);
    }

    #[test]
    fn test_difficulty_serde_is_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let parsed: Category = serde_json::from_str("\"tech\"").unwrap();
        assert_eq!(parsed, Category::Tech);
    }
}
