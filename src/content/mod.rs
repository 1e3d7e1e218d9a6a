//! Static course content
//!
//! Literal catalog data for the app: supported languages, proficiency
//! levels, course units, and the lesson/quiz exercise banks. Everything
//! here is defined at compile time and read-only at runtime.

pub mod catalog;
pub mod course;
pub mod exercises;

pub use catalog::{Difficulty, Language, ProficiencyLevel, LANGUAGES, PROFICIENCY_LEVELS};
pub use course::{LessonEntry, LessonKind, LessonStatus, Unit, UNITS};
pub use exercises::{Exercise, ExerciseKind, QuizQuestion, LESSON_EXERCISES, QUIZ_QUESTIONS};
