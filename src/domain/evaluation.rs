use super::entities::DisplayMode;
use super::format::format_value;

/// Differences below this are float noise from summing tenths.
const FAIR_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing on either side yet.
    Empty,
    Fair,
    /// Their side is worth more than yours.
    Win,
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub difference_magnitude: f64,
    /// Share of the trade on your side, `0.0..=1.0`; drives the indicator bar.
    pub fill_ratio: f64,
}

impl Default for Outcome {
    fn default() -> Self {
        evaluate(0.0, 0.0)
    }
}

pub fn evaluate(your_total: f64, their_total: f64) -> Outcome {
    if your_total == 0.0 && their_total == 0.0 {
        return Outcome {
            verdict: Verdict::Empty,
            difference_magnitude: 0.0,
            fill_ratio: 0.5,
        };
    }

    let combined = your_total + their_total;
    let fill_ratio = if combined > 0.0 {
        (your_total / combined).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let difference = their_total - your_total;
    let (verdict, difference_magnitude) = if difference.abs() < FAIR_TOLERANCE {
        (Verdict::Fair, 0.0)
    } else if difference > 0.0 {
        (Verdict::Win, difference)
    } else {
        (Verdict::Loss, -difference)
    };

    Outcome {
        verdict,
        difference_magnitude,
        fill_ratio,
    }
}

/// Text shown in the verdict badge: headline plus an optional caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeLabel {
    pub headline: String,
    pub caption: Option<String>,
}

pub fn outcome_label(outcome: &Outcome, mode: DisplayMode) -> OutcomeLabel {
    match outcome.verdict {
        Verdict::Empty => OutcomeLabel {
            headline: "--".to_string(),
            caption: None,
        },
        Verdict::Fair => OutcomeLabel {
            headline: "Fair".to_string(),
            caption: None,
        },
        Verdict::Win | Verdict::Loss => {
            let word = if outcome.verdict == Verdict::Win {
                "Win"
            } else {
                "Loss"
            };
            OutcomeLabel {
                headline: format_value(outcome.difference_magnitude, mode),
                caption: Some(format!("{mode} {word}")),
            }
        }
    }
}
