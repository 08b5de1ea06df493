//! Five-star rating state and its feedback messages

/// Number of selectable star positions.
pub const STAR_COUNT: usize = 5;

/// Score-to-feedback table. Scores outside these keys are never displayed.
const RATING_MESSAGES: [(u8, &str); 6] = [
    (0, "별점 미등록"),
    (2, "최악이에요"),
    (4, "별로예요"),
    (6, "보통이에요"),
    (8, "재밌어요"),
    (10, "명작이에요"),
];

/// Feedback text for a score, or `None` when the score is not a table key.
pub fn feedback_message(score: u8) -> Option<&'static str> {
    RATING_MESSAGES
        .iter()
        .find(|(key, _)| *key == score)
        .map(|(_, message)| *message)
}

/// The user's star selection for the movie currently shown in the detail
/// view. Starts unset and is discarded when the view closes; a reopened view
/// gets a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rating {
    selected: Option<u8>,
}

impl Rating {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the star at `index`, filling positions `0..=index`.
    /// Indices at or beyond [`STAR_COUNT`] are ignored.
    pub fn select(&mut self, index: u8) {
        if (index as usize) < STAR_COUNT {
            self.selected = Some(index);
        }
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Score shown next to the stars: `(index + 1) * 2`, or 0 when unset.
    pub fn score(&self) -> u8 {
        match self.selected {
            Some(index) => (index + 1) * 2,
            None => 0,
        }
    }

    /// Feedback text for the current score.
    pub fn message(&self) -> &'static str {
        // score() stays inside the table keys
        feedback_message(self.score()).unwrap_or(RATING_MESSAGES[0].1)
    }

    /// Per-position fill state, a contiguous prefix up to the selection.
    pub fn fill(&self) -> [bool; STAR_COUNT] {
        std::array::from_fn(|position| match self.selected {
            Some(index) => position <= index as usize,
            None => false,
        })
    }

    /// How many stars are filled.
    pub fn filled_count(&self) -> usize {
        match self.selected {
            Some(index) => index as usize + 1,
            None => 0,
        }
    }
}
