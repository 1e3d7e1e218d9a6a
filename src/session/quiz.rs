//! Unit quiz session
//!
//! Select-then-advance over a fixed question sequence. Unlike the graded
//! lesson flow, the quiz allows a non-scored skip, and scoring happens at
//! the end from the recorded answers.

use crate::content::exercises::QuizQuestion;

/// Final quiz result handed to the enclosing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub max_score: u32,
}

/// One row of the post-quiz review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReviewRow {
    pub question: &'static QuizQuestion,
    /// What the learner answered, if not skipped
    pub given: Option<String>,
    pub correct: bool,
}

/// State machine for one run through the quiz
#[derive(Debug)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    index: usize,
    answers: Vec<Option<String>>,
    finished: bool,
    outcome_reported: bool,
}

impl QuizSession {
    /// Start a session over the given question sequence
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            answers: vec![None; questions.len()],
            finished: questions.is_empty(),
            outcome_reported: false,
        }
    }

    /// The question currently in play, if any remain
    pub fn current(&self) -> Option<&'static QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    /// 1-based position and total, for the progress header
    pub fn position(&self) -> (usize, usize) {
        (
            (self.index + 1).min(self.questions.len()),
            self.questions.len(),
        )
    }

    /// Completion ratio in [0, 1] for the progress gauge
    pub fn progress_ratio(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.index + 1) as f64 / self.questions.len() as f64
    }

    /// Record an answer for the current question and advance
    pub fn submit(&mut self, answer: &str) {
        if self.finished {
            return;
        }
        self.answers[self.index] = Some(answer.to_string());
        self.step();
    }

    /// Advance without recording an answer. Skipped questions score
    /// nothing but are not an error.
    pub fn skip(&mut self) {
        if self.finished {
            return;
        }
        self.answers[self.index] = None;
        self.step();
    }

    fn step(&mut self) {
        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.finished = true;
        }
    }

    /// Whether every question has been answered or skipped
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Points earned from the recorded answers
    pub fn score(&self) -> u32 {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.as_deref() == Some(q.answer))
            .map(|(q, _)| q.points)
            .sum()
    }

    /// Total points available
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Accuracy as a whole percentage of available points
    pub fn accuracy_percent(&self) -> u32 {
        let max = self.max_score();
        if max == 0 {
            return 0;
        }
        self.score() * 100 / max
    }

    /// Per-question review rows for the results view
    pub fn review(&self) -> Vec<QuizReviewRow> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| QuizReviewRow {
                question: q,
                given: a.clone(),
                correct: a.as_deref() == Some(q.answer),
            })
            .collect()
    }

    /// Report the final outcome. Returns `Some` exactly once, and only
    /// after the quiz is finished.
    pub fn complete(&mut self) -> Option<QuizOutcome> {
        if !self.finished || self.outcome_reported {
            return None;
        }
        self.outcome_reported = true;
        Some(QuizOutcome {
            score: self.score(),
            max_score: self.max_score(),
        })
    }
}
