//! Integration tests for the lesson and quiz flows, end to end through
//! the session state machines and into history persistence.

use lingafriq::config::persistence::HistoryStorage;
use lingafriq::content::exercises::{LESSON_EXERCISES, QUIZ_QUESTIONS};
use lingafriq::models::record::{ActivityKind, SessionRecord};
use lingafriq::session::lesson::{LessonSession, POINTS_PER_EXERCISE};
use lingafriq::session::quiz::QuizSession;
use tempfile::TempDir;

#[test]
fn test_lesson_outcome_lands_in_history() {
    // Play the documented scenario: correct, incorrect, correct, correct.
    let mut session = LessonSession::new(LESSON_EXERCISES);
    let answers = ["Hello", "Good", "name", "Asante sana"];

    let mut outcome = None;
    for answer in answers {
        session.check(answer).expect("check should be permitted");
        outcome = session.advance();
    }
    let outcome = outcome.expect("last advance completes the lesson");
    assert_eq!(outcome.score, 3 * POINTS_PER_EXERCISE);

    // Persist it the way the app does and read it back.
    let dir = TempDir::new().unwrap();
    let storage = HistoryStorage::with_path(dir.path().join("history.json"));
    storage
        .append_record(SessionRecord::new(
            "swahili",
            ActivityKind::Lesson,
            outcome.score,
            outcome.max_score,
        ))
        .unwrap();

    let records = storage.load_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, 75);
    assert_eq!(records[0].max_score, 100);
    assert_eq!(records[0].accuracy_percent(), 75);
}

#[test]
fn test_quiz_with_skips_lands_in_history() {
    let mut session = QuizSession::new(QUIZ_QUESTIONS);

    // Answer two correctly, skip the rest.
    session.submit(QUIZ_QUESTIONS[0].answer);
    session.submit(QUIZ_QUESTIONS[1].answer);
    while session.current().is_some() {
        session.skip();
    }
    let outcome = session.complete().expect("finished quiz completes once");
    assert_eq!(outcome.score, 40);

    let dir = TempDir::new().unwrap();
    let storage = HistoryStorage::with_path(dir.path().join("history.json"));
    storage
        .append_record(SessionRecord::new(
            "zulu",
            ActivityKind::Quiz,
            outcome.score,
            outcome.max_score,
        ))
        .unwrap();

    let recent = storage.recent_records(10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].activity, ActivityKind::Quiz);
    assert_eq!(recent[0].accuracy_percent(), 40);
}

#[test]
fn test_repeated_sessions_accumulate_newest_first() {
    let dir = TempDir::new().unwrap();
    let storage = HistoryStorage::with_path(dir.path().join("history.json"));

    for score in [25u32, 50, 75] {
        let mut session = LessonSession::new(LESSON_EXERCISES);
        // Answer enough exercises correctly to reach the target score.
        let correct = (score / POINTS_PER_EXERCISE) as usize;
        for (i, exercise) in LESSON_EXERCISES.iter().enumerate() {
            let answer = if i < correct { exercise.answer } else { "wrong" };
            session.check(answer).unwrap();
            session.advance();
        }
        assert_eq!(session.score(), score);
        storage
            .append_record(SessionRecord::new(
                "swahili",
                ActivityKind::Lesson,
                session.score(),
                session.max_score(),
            ))
            .unwrap();
    }

    let recent = storage.recent_records(10).unwrap();
    assert_eq!(recent.len(), 3);
    assert!(recent[0].timestamp >= recent[1].timestamp);
    assert!(recent[1].timestamp >= recent[2].timestamp);
}
