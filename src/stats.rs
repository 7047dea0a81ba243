use crate::models::ResultSummary;

/// Results of the games finished since the program started. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayStats {
    pub games_played: usize,
    pub best_percentage: Option<u32>,
    total_percentage: u64,
}

impl PlayStats {
    pub fn record(&mut self, summary: &ResultSummary) {
        self.games_played += 1;
        self.total_percentage += summary.percentage as u64;
        self.best_percentage = Some(
            self.best_percentage
                .map_or(summary.percentage, |best| best.max(summary.percentage)),
        );
    }

    pub fn average_percentage(&self) -> Option<u32> {
        if self.games_played == 0 {
            return None;
        }
        Some((self.total_percentage as f64 / self.games_played as f64).round() as u32)
    }

    pub fn average_grade(&self) -> Option<char> {
        self.average_percentage().map(|avg| match avg {
            90.. => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            60..=69 => 'D',
            _ => 'F',
        })
    }
}
