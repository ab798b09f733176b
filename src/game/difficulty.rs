#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Card count and countdown seconds for the level.
    pub fn config(self) -> (usize, u32) {
        match self {
            Difficulty::Easy => (5, 5),
            Difficulty::Medium => (8, 8),
            Difficulty::Hard => (12, 12),
        }
    }

    pub fn card_count(self) -> usize {
        self.config().0
    }

    pub fn countdown_seconds(self) -> u32 {
        self.config().1
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "level-easy",
            Difficulty::Medium => "level-medium",
            Difficulty::Hard => "level-hard",
        }
    }
}
