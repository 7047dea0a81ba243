use crate::models::{Category, Difficulty, Question};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid question bank json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {id} has {count} answers, at least 2 are required")]
    TooFewAnswers { id: u32, count: usize },
    #[error("question {id} marks answer {index} as correct but only has {count} answers")]
    CorrectAnswerOutOfRange { id: u32, index: usize, count: usize },
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
}

/// Questions grouped by category, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub general: Vec<Question>,
    #[serde(default)]
    pub tech: Vec<Question>,
}

impl QuestionBank {
    pub fn questions(&self, category: Category) -> &[Question] {
        match category {
            Category::General => &self.general,
            Category::Tech => &self.tech,
        }
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.tech.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_json(content: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = serde_json::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let content = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let bank = Self::from_json(&content)?;
        crate::logger::log(&format!(
            "Loaded {} questions from {}",
            bank.len(),
            path.display()
        ));
        Ok(bank)
    }

    pub fn validate(&self) -> Result<(), BankError> {
        let mut seen = HashSet::new();
        for question in Category::ALL
            .iter()
            .flat_map(|&category| self.questions(category))
        {
            let count = question.answers.len();
            if count < 2 {
                return Err(BankError::TooFewAnswers {
                    id: question.id,
                    count,
                });
            }
            if question.correct_answer >= count {
                return Err(BankError::CorrectAnswerOutOfRange {
                    id: question.id,
                    index: question.correct_answer,
                    count,
                });
            }
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
        }
        Ok(())
    }

    /// The content shipped with the game.
    pub fn builtin() -> Self {
        Self {
            general: vec![
                question(
                    1,
                    "What is the capital of Japan?",
                    &["Osaka", "Tokyo", "Kyoto", "Nagoya"],
                    1,
                    Difficulty::Easy,
                    "Tokyo is the capital of Japan. Edo was renamed Tokyo in 1868.",
                ),
                question(
                    2,
                    "What is the highest mountain on Earth?",
                    &["Mount Fuji", "Kilimanjaro", "Everest", "Matterhorn"],
                    2,
                    Difficulty::Easy,
                    "At 8,848 m, Everest is the highest peak in the world.",
                ),
                question(
                    3,
                    "Which is the largest planet in the solar system?",
                    &["Saturn", "Jupiter", "Neptune", "Earth"],
                    1,
                    Difficulty::Normal,
                    "Jupiter is the largest planet in the solar system, roughly 11 times the diameter of Earth.",
                ),
                question(
                    4,
                    "Roughly how fast does light travel, in km per second?",
                    &["300,000", "30,000", "3,000,000", "30,000,000"],
                    0,
                    Difficulty::Normal,
                    "Light travels at about 300,000 km/s (exactly 299,792,458 m/s).",
                ),
                question(
                    5,
                    "Who discovered the double-helix structure of DNA?",
                    &["Mendel", "Darwin", "Watson and Crick", "Pasteur"],
                    2,
                    Difficulty::Hard,
                    "James Watson and Francis Crick described the DNA double helix in 1953.",
                ),
            ],
            tech: vec![
                question(
                    6,
                    "What does HTML stand for?",
                    &[
                        "HyperText Markup Language",
                        "Home Tool Markup Language",
                        "Hyperlink Text Management Language",
                        "High Tech Modern Language",
                    ],
                    0,
                    Difficulty::Easy,
                    "HTML stands for HyperText Markup Language, the markup language used to build web pages.",
                ),
                question(
                    7,
                    "Which keyword declares a variable in JavaScript?",
                    &["variable", "var", "declare", "set"],
                    1,
                    Difficulty::Easy,
                    "JavaScript declares variables with var, let and const.",
                ),
                question(
                    8,
                    "Which CSS property sets the space outside a box?",
                    &["padding", "margin", "border", "spacing"],
                    1,
                    Difficulty::Normal,
                    "margin is the space outside an element; padding is the space inside it.",
                ),
                question(
                    9,
                    "Which React hook manages component state?",
                    &["useEffect", "useState", "useContext", "useRef"],
                    1,
                    Difficulty::Normal,
                    "useState is the basic state hook in React.",
                ),
                question(
                    10,
                    "What does the S in HTTPS stand for?",
                    &["Server", "Security", "Secure", "System"],
                    2,
                    Difficulty::Hard,
                    "The S stands for Secure: traffic is encrypted with SSL/TLS.",
                ),
            ],
        }
    }
}

fn question(
    id: u32,
    text: &str,
    answers: &[&str],
    correct_answer: usize,
    difficulty: Difficulty,
    explanation: &str,
) -> Question {
    Question {
        id,
        question: text.to_string(),
        answers: answers.iter().map(|a| a.to_string()).collect(),
        correct_answer,
        difficulty,
        explanation: explanation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_BANK: &str = r#"{
        "general": [
            {
                "id": 100,
                "question": "Largest ocean?",
                "answers": ["Atlantic", "Pacific"],
                "correct_answer": 1,
                "difficulty": "easy",
                "explanation": "The Pacific covers about a third of the planet."
            }
        ],
        "tech": []
    }"#;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        assert!(bank.validate().is_ok());
        assert_eq!(bank.questions(Category::General).len(), 5);
        assert_eq!(bank.questions(Category::Tech).len(), 5);
        assert_eq!(bank.len(), 10);
    }

    #[test]
    fn test_builtin_bank_keeps_category_partitions() {
        let bank = QuestionBank::builtin();
        let general_ids: Vec<u32> = bank.general.iter().map(|q| q.id).collect();
        let tech_ids: Vec<u32> = bank.tech.iter().map(|q| q.id).collect();
        assert_eq!(general_ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(tech_ids, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_from_json_valid() {
        let bank = QuestionBank::from_json(VALID_BANK).unwrap();
        assert_eq!(bank.general.len(), 1);
        assert!(bank.tech.is_empty());
        assert_eq!(bank.general[0].correct_text(), "Pacific");
    }

    #[test]
    fn test_from_json_missing_category_defaults_to_empty() {
        let bank = QuestionBank::from_json(r#"{"general": []}"#).unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn test_rejects_single_answer_question() {
        let json = VALID_BANK.replace(r#"["Atlantic", "Pacific"]"#, r#"["Pacific"]"#);
        let json = json.replace(r#""correct_answer": 1"#, r#""correct_answer": 0"#);
        match QuestionBank::from_json(&json) {
            Err(BankError::TooFewAnswers { id, count }) => {
                assert_eq!(id, 100);
                assert_eq!(count, 1);
            }
            other => panic!("expected TooFewAnswers, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_correct_answer() {
        let json = VALID_BANK.replace(r#""correct_answer": 1"#, r#""correct_answer": 4"#);
        assert!(matches!(
            QuestionBank::from_json(&json),
            Err(BankError::CorrectAnswerOutOfRange {
                id: 100,
                index: 4,
                count: 2
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids_across_categories() {
        let mut bank = QuestionBank::builtin();
        let mut copy = bank.general[0].clone();
        copy.difficulty = Difficulty::Hard;
        bank.tech.push(copy);
        assert!(matches!(bank.validate(), Err(BankError::DuplicateId(1))));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let json = VALID_BANK.replace(r#""easy""#, r#""impossible""#);
        assert!(matches!(
            QuestionBank::from_json(&json),
            Err(BankError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID_BANK.as_bytes()).unwrap();

        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.general[0].id, 100);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = QuestionBank::load(&path).unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
