//! Course structure data
//!
//! The unit and lesson tree shown on the course-overview screen. Progress
//! percentages and lock flags are pre-set literals; nothing derives them
//! from completion state.

/// Completion status of a single lesson entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    Completed,
    /// The next lesson the learner should take
    Current,
    Locked,
}

/// What kind of activity a lesson entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    Lesson,
    Quiz,
    Practice,
}

impl LessonKind {
    pub fn label(&self) -> &'static str {
        match self {
            LessonKind::Lesson => "Lesson",
            LessonKind::Quiz => "Quiz",
            LessonKind::Practice => "Practice",
        }
    }
}

/// A single row in a unit's lesson list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonEntry {
    pub id: u32,
    pub title: &'static str,
    /// Display-only estimate, e.g. "15 min"
    pub duration: &'static str,
    pub status: LessonStatus,
    pub xp: u32,
    pub kind: LessonKind,
}

/// A course unit grouping several lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Completion percentage, 0-100
    pub progress: u8,
    pub unlocked: bool,
    pub lessons: &'static [LessonEntry],
}

/// The course tree for every language track
pub const UNITS: &[Unit] = &[
    Unit {
        id: 1,
        title: "Unit 1: Foundations",
        description: "Learn the basics of pronunciation and alphabet",
        progress: 100,
        unlocked: true,
        lessons: &[
            LessonEntry {
                id: 1,
                title: "Introduction",
                duration: "10 min",
                status: LessonStatus::Completed,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 2,
                title: "The Alphabet",
                duration: "15 min",
                status: LessonStatus::Completed,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 3,
                title: "Pronunciation Basics",
                duration: "20 min",
                status: LessonStatus::Completed,
                xp: 75,
                kind: LessonKind::Practice,
            },
            LessonEntry {
                id: 4,
                title: "Unit 1 Quiz",
                duration: "10 min",
                status: LessonStatus::Completed,
                xp: 100,
                kind: LessonKind::Quiz,
            },
        ],
    },
    Unit {
        id: 2,
        title: "Unit 2: Greetings & Introductions",
        description: "Master common greetings and how to introduce yourself",
        progress: 60,
        unlocked: true,
        lessons: &[
            LessonEntry {
                id: 5,
                title: "Common Greetings",
                duration: "15 min",
                status: LessonStatus::Completed,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 6,
                title: "Introducing Yourself",
                duration: "15 min",
                status: LessonStatus::Current,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 7,
                title: "Conversation Practice",
                duration: "20 min",
                status: LessonStatus::Locked,
                xp: 75,
                kind: LessonKind::Practice,
            },
            LessonEntry {
                id: 8,
                title: "Unit 2 Quiz",
                duration: "10 min",
                status: LessonStatus::Locked,
                xp: 100,
                kind: LessonKind::Quiz,
            },
        ],
    },
    Unit {
        id: 3,
        title: "Unit 3: Numbers & Time",
        description: "Learn to count and tell time",
        progress: 0,
        unlocked: false,
        lessons: &[
            LessonEntry {
                id: 9,
                title: "Numbers 1-100",
                duration: "15 min",
                status: LessonStatus::Locked,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 10,
                title: "Telling Time",
                duration: "15 min",
                status: LessonStatus::Locked,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 11,
                title: "Practice: Time & Numbers",
                duration: "20 min",
                status: LessonStatus::Locked,
                xp: 75,
                kind: LessonKind::Practice,
            },
            LessonEntry {
                id: 12,
                title: "Unit 3 Quiz",
                duration: "10 min",
                status: LessonStatus::Locked,
                xp: 100,
                kind: LessonKind::Quiz,
            },
        ],
    },
    Unit {
        id: 4,
        title: "Unit 4: Family & Relationships",
        description: "Vocabulary for family members and relationships",
        progress: 0,
        unlocked: false,
        lessons: &[
            LessonEntry {
                id: 13,
                title: "Family Members",
                duration: "15 min",
                status: LessonStatus::Locked,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 14,
                title: "Describing Relationships",
                duration: "15 min",
                status: LessonStatus::Locked,
                xp: 50,
                kind: LessonKind::Lesson,
            },
            LessonEntry {
                id: 15,
                title: "Family Conversations",
                duration: "20 min",
                status: LessonStatus::Locked,
                xp: 75,
                kind: LessonKind::Practice,
            },
            LessonEntry {
                id: 16,
                title: "Unit 4 Quiz",
                duration: "10 min",
                status: LessonStatus::Locked,
                xp: 100,
                kind: LessonKind::Quiz,
            },
        ],
    },
];

/// Overall course progress: the arithmetic mean of all unit percentages
pub fn overall_progress() -> u8 {
    if UNITS.is_empty() {
        return 0;
    }
    let total: u32 = UNITS.iter().map(|u| u.progress as u32).sum();
    (total / UNITS.len() as u32) as u8
}

/// The lesson entry the learner should take next, if any
pub fn current_lesson() -> Option<(&'static Unit, &'static LessonEntry)> {
    UNITS
        .iter()
        .filter(|u| u.unlocked)
        .find_map(|u| {
            u.lessons
                .iter()
                .find(|l| l.status == LessonStatus::Current)
                .map(|l| (u, l))
        })
}

/// Whether a lesson entry can be started from the course screen
pub fn is_startable(unit: &Unit, lesson: &LessonEntry) -> bool {
    unit.unlocked && lesson.status != LessonStatus::Locked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_progress_is_mean_of_units() {
        // 100 + 60 + 0 + 0 over four units
        assert_eq!(overall_progress(), 40);
    }

    #[test]
    fn test_current_lesson_is_in_an_unlocked_unit() {
        let (unit, lesson) = current_lesson().expect("course should have a current lesson");
        assert!(unit.unlocked);
        assert_eq!(lesson.status, LessonStatus::Current);
        assert_eq!(lesson.title, "Introducing Yourself");
    }

    #[test]
    fn test_locked_lessons_are_not_startable() {
        let locked_unit = &UNITS[2];
        assert!(!locked_unit.unlocked);
        for lesson in locked_unit.lessons {
            assert!(!is_startable(locked_unit, lesson));
        }
    }

    #[test]
    fn test_completed_and_current_lessons_are_startable() {
        let unit = &UNITS[1];
        assert!(is_startable(unit, &unit.lessons[0]));
        assert!(is_startable(unit, &unit.lessons[1]));
        assert!(!is_startable(unit, &unit.lessons[2]));
    }
}
