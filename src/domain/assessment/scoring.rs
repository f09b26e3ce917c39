//! Scorer and track classifier.

use super::AnswerSheet;
use crate::domain::curriculum::Question;
use crate::domain::foundation::Score;
use crate::domain::profile::Track;

/// Scores above this are at least practitioner.
pub const PRACTITIONER_THRESHOLD: f64 = 40.0;

/// Scores above this are advanced.
pub const ADVANCED_THRESHOLD: f64 = 70.0;

/// Percentage of `questions` answered correctly in `answers`.
///
/// Missing answers and option ids that match nothing count as wrong.
/// An empty question set scores zero.
pub fn score_answers(questions: &[Question], answers: &AnswerSheet) -> Score {
    let correct = questions
        .iter()
        .filter(|q| {
            answers
                .selection(q.id())
                .map(|selected| q.is_correct(selected))
                .unwrap_or(false)
        })
        .count();
    Score::from_ratio(correct, questions.len())
}

/// Maps a diagnostic score to a track. Boundaries fall to the lower tier.
pub fn classify(score: Score) -> Track {
    let value = score.value();
    if value > ADVANCED_THRESHOLD {
        Track::Advanced
    } else if value > PRACTITIONER_THRESHOLD {
        Track::Practitioner
    } else {
        Track::Foundation
    }
}
