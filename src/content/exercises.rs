//! Exercise and quiz question banks
//!
//! Literal in-file sequences driving the graded lesson flow and the unit
//! quiz. Answer checking itself lives in [`crate::session`].

/// How an exercise is presented and answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    /// Pick one of several options
    MultipleChoice,
    /// Type a translation of the prompt
    Translation,
    /// Type the missing word
    FillBlank,
    /// Pick the phrase that was heard (audio is display-only here)
    Listening,
}

impl ExerciseKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::MultipleChoice => "MULTIPLE CHOICE",
            ExerciseKind::Translation => "TRANSLATION",
            ExerciseKind::FillBlank => "FILL BLANK",
            ExerciseKind::Listening => "LISTENING",
        }
    }

    /// Whether this kind takes free-text input rather than an option pick
    pub fn is_text_entry(&self) -> bool {
        matches!(self, ExerciseKind::Translation | ExerciseKind::FillBlank)
    }
}

/// One graded exercise in a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub kind: ExerciseKind,
    pub prompt: &'static str,
    /// Empty for text-entry kinds
    pub options: &'static [&'static str],
    pub answer: &'static str,
    /// Supporting text shown under the input, if any
    pub hint: Option<&'static str>,
}

/// The exercise sequence for the guided lesson flow
pub const LESSON_EXERCISES: &[Exercise] = &[
    Exercise {
        id: 1,
        kind: ExerciseKind::MultipleChoice,
        prompt: "What does \"Jambo\" mean in English?",
        options: &["Goodbye", "Hello", "Thank you", "Please"],
        answer: "Hello",
        hint: None,
    },
    Exercise {
        id: 2,
        kind: ExerciseKind::Translation,
        prompt: "Translate: How are you?",
        options: &[],
        answer: "Habari yako?",
        hint: Some("Habari yako?"),
    },
    Exercise {
        id: 3,
        kind: ExerciseKind::FillBlank,
        prompt: "Fill in the blank: Jina langu ni _____",
        options: &[],
        answer: "name",
        hint: Some("My name is _____"),
    },
    Exercise {
        id: 4,
        kind: ExerciseKind::Listening,
        prompt: "Listen and select the correct phrase:",
        options: &["Asante sana", "Karibu sana", "Habari gani", "Nzuri sana"],
        answer: "Asante sana",
        hint: None,
    },
];

/// One question in the unit quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
    pub points: u32,
}

/// The unit quiz question sequence
pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        prompt: "How do you say \"Good morning\" in Swahili?",
        options: &[
            "Habari za asubuhi",
            "Habari za jioni",
            "Asante sana",
            "Karibu",
        ],
        answer: "Habari za asubuhi",
        points: 20,
    },
    QuizQuestion {
        id: 2,
        prompt: "What is the Swahili word for \"water\"?",
        options: &["Chakula", "Maji", "Kahawa", "Maziwa"],
        answer: "Maji",
        points: 20,
    },
    QuizQuestion {
        id: 3,
        prompt: "Which phrase means \"Thank you very much\"?",
        options: &["Jambo sana", "Asante sana", "Karibu sana", "Nzuri sana"],
        answer: "Asante sana",
        points: 20,
    },
    QuizQuestion {
        id: 4,
        prompt: "How do you say \"I am fine\" in Swahili?",
        options: &["Niko vizuri", "Nina njaa", "Ninapenda", "Ninaenda"],
        answer: "Niko vizuri",
        points: 20,
    },
    QuizQuestion {
        id: 5,
        prompt: "What does \"Pole pole\" mean?",
        options: &["Very fast", "Slowly/Gently", "Right now", "Maybe"],
        answer: "Slowly/Gently",
        points: 20,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_exercises_contain_their_answer() {
        for exercise in LESSON_EXERCISES {
            if !exercise.kind.is_text_entry() {
                assert!(
                    exercise.options.contains(&exercise.answer),
                    "exercise {} answer missing from options",
                    exercise.id
                );
            }
        }
        for question in QUIZ_QUESTIONS {
            assert!(question.options.contains(&question.answer));
        }
    }

    #[test]
    fn test_text_entry_exercises_have_no_options() {
        for exercise in LESSON_EXERCISES {
            if exercise.kind.is_text_entry() {
                assert!(exercise.options.is_empty());
            }
        }
    }

    #[test]
    fn test_quiz_points_are_uniform() {
        assert!(QUIZ_QUESTIONS.iter().all(|q| q.points == 20));
    }
}
