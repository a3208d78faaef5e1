//! Top-1 selection over the model's score vector.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};
use crate::labels;

/// Outcome of a single classification request.
///
/// Pure data; the unrecognized arm deliberately carries neither label nor
/// score, since neither is surfaced to the user in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// The top score cleared the confidence threshold.
    Recognized { breed: String, score: f32 },
    /// No class scored high enough to report.
    Unrecognized,
}

impl Verdict {
    /// Render the user-facing result string.
    pub fn display_text(&self) -> String {
        match self {
            Verdict::Recognized { breed, .. } => labels::recognized_text(breed),
            Verdict::Unrecognized => labels::UNRECOGNIZED_TEXT.to_string(),
        }
    }
}

/// Pick the winning class from a score vector.
///
/// The winner is the first index holding the maximum score (ties break
/// toward the lower index), found with a direct scan rather than a sort.
/// A score vector that is empty or disagrees with the label table length is
/// a configuration error and fails fast.
pub fn select_verdict(scores: &[f32], labels: &[&str], threshold: f32) -> Result<Verdict> {
    if scores.is_empty() {
        return Err(ClassifierError::EmptyScoreVector);
    }
    if scores.len() != labels.len() {
        return Err(ClassifierError::LabelTable {
            scores: scores.len(),
            labels: labels.len(),
        });
    }
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ClassifierError::ThresholdRange(threshold as f64));
    }

    let mut winner = 0;
    for (index, &score) in scores.iter().enumerate().skip(1) {
        // Strict comparison keeps the earliest maximum.
        if score > scores[winner] {
            winner = index;
        }
    }

    let score = scores[winner];
    if score >= threshold {
        Ok(Verdict::Recognized {
            breed: labels[winner].to_string(),
            score,
        })
    } else {
        Ok(Verdict::Unrecognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn first_maximum_wins_ties() {
        let verdict = select_verdict(&[0.5, 0.9, 0.9, 0.1], &LABELS, 0.9).unwrap();
        assert_eq!(
            verdict,
            Verdict::Recognized {
                breed: "b".to_string(),
                score: 0.9
            }
        );
    }

    #[test]
    fn below_threshold_withholds_label_and_score() {
        let verdict = select_verdict(&[0.2, 0.3, 0.1, 0.25], &LABELS, 0.9).unwrap();
        assert_eq!(verdict, Verdict::Unrecognized);
        assert_eq!(verdict.display_text(), crate::labels::UNRECOGNIZED_TEXT);
    }

    #[test]
    fn length_mismatch_fails_fast() {
        let err = select_verdict(&[0.1, 0.2], &LABELS, 0.5).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::LabelTable {
                scores: 2,
                labels: 4
            }
        ));
    }

    #[test]
    fn empty_scores_fail_fast() {
        let err = select_verdict(&[], &[], 0.5).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyScoreVector));
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let err = select_verdict(&[0.1; 4], &LABELS, 1.5).unwrap_err();
        assert!(matches!(err, ClassifierError::ThresholdRange(_)));
    }

    #[test]
    fn selection_is_deterministic() {
        let scores = [0.91, 0.4, 0.91, 0.2];
        let first = select_verdict(&scores, &LABELS, 0.9).unwrap();
        let second = select_verdict(&scores, &LABELS, 0.9).unwrap();
        assert_eq!(first, second);
    }
}
