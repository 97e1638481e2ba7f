//! Quiz state: one question at a time with a timed feedback window.
//!
//! Submitting an answer shows feedback for two seconds. A correct answer
//! advances the question index immediately, but the prompt on screen stays
//! on the answered question until the window closes; then the next question
//! is displayed with the answer line and feedback cleared.

use std::time::{Duration, Instant};

use crate::content::{QuizQuestion, QUIZ_QUESTIONS};

/// How long feedback stays on screen before the next question appears.
pub const REDISPLAY: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub struct QuizState {
    /// Question the next submission is checked against.
    index: usize,
    /// Question currently on screen. Lags `index` during feedback.
    displayed: usize,
    answer: String,
    feedback: String,
    redisplay_at: Option<Instant>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            index: 0,
            displayed: 0,
            answer: String::new(),
            feedback: String::new(),
            redisplay_at: None,
        }
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question to render.
    pub fn question(&self) -> &'static QuizQuestion {
        &QUIZ_QUESTIONS[self.displayed]
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn push_char(&mut self, c: char) {
        self.answer.push(c);
    }

    pub fn backspace(&mut self) {
        self.answer.pop();
    }

    /// Check the typed answer, set feedback, and arm the redisplay timer.
    ///
    /// Comparison ignores case and surrounding whitespace. A correct answer
    /// advances the check index modulo the question count; the displayed
    /// question catches up when the timer fires.
    pub fn submit(&mut self, now: Instant) {
        let question = &QUIZ_QUESTIONS[self.index];
        let given = self.answer.trim().to_lowercase();
        if given == question.answer.to_lowercase() {
            self.feedback = format!("✅ Correct! {}", question.explanation);
            self.index = (self.index + 1) % QUIZ_QUESTIONS.len();
        } else {
            self.feedback = format!("❌ Not quite. {}", question.explanation);
        }
        self.redisplay_at = Some(now + REDISPLAY);
    }

    /// Close the feedback window if its deadline has passed.
    ///
    /// Returns true when the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.redisplay_at {
            Some(deadline) if now >= deadline => {
                self.redisplay_at = None;
                self.displayed = self.index;
                self.answer.clear();
                self.feedback.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_answer(quiz: &mut QuizState, text: &str) {
        for c in text.chars() {
            quiz.push_char(c);
        }
    }

    #[test]
    fn test_correct_answer_advances_but_display_waits() {
        let mut quiz = QuizState::new();
        let first_prompt = quiz.question().prompt;
        let t0 = Instant::now();

        type_answer(&mut quiz, "def");
        quiz.submit(t0);
        assert!(quiz.feedback().starts_with("✅ Correct!"));
        // Prompt is pinned until the window closes.
        assert_eq!(quiz.question().prompt, first_prompt);

        assert!(!quiz.tick(t0 + Duration::from_millis(1999)));
        assert!(quiz.tick(t0 + REDISPLAY));
        assert_ne!(quiz.question().prompt, first_prompt);
        assert!(quiz.answer().is_empty());
        assert!(quiz.feedback().is_empty());
    }

    #[test]
    fn test_incorrect_answer_keeps_question() {
        let mut quiz = QuizState::new();
        let prompt = quiz.question().prompt;
        let t0 = Instant::now();

        type_answer(&mut quiz, "lambda");
        quiz.submit(t0);
        assert!(quiz.feedback().starts_with("❌ Not quite."));
        assert!(quiz.tick(t0 + REDISPLAY));
        assert_eq!(quiz.question().prompt, prompt);
    }

    #[test]
    fn test_comparison_ignores_case_and_whitespace() {
        let mut quiz = QuizState::new();
        type_answer(&mut quiz, "  DEF ");
        quiz.submit(Instant::now());
        assert!(quiz.feedback().starts_with("✅ Correct!"));
    }

    #[test]
    fn test_resubmit_rearms_window() {
        let mut quiz = QuizState::new();
        let t0 = Instant::now();
        quiz.submit(t0);
        quiz.submit(t0 + Duration::from_secs(1));
        // First deadline has been replaced, nothing fires at it.
        assert!(!quiz.tick(t0 + REDISPLAY));
        assert!(quiz.tick(t0 + Duration::from_secs(1) + REDISPLAY));
    }

    #[test]
    fn test_wraps_around_question_list() {
        let mut quiz = QuizState::new();
        let mut t = Instant::now();
        let first_prompt = quiz.question().prompt;
        for _ in 0..QUIZ_QUESTIONS.len() {
            let answer = QUIZ_QUESTIONS
                .iter()
                .find(|q| q.prompt == quiz.question().prompt)
                .map(|q| q.answer)
                .unwrap_or_default();
            type_answer(&mut quiz, answer);
            quiz.submit(t);
            t += REDISPLAY;
            assert!(quiz.tick(t));
        }
        assert_eq!(quiz.question().prompt, first_prompt);
    }

    #[test]
    fn test_backspace_edits_answer() {
        let mut quiz = QuizState::new();
        type_answer(&mut quiz, "dex");
        quiz.backspace();
        quiz.push_char('f');
        assert_eq!(quiz.answer(), "def");
    }

    #[test]
    fn test_tick_without_submission_is_quiet() {
        let mut quiz = QuizState::new();
        assert!(!quiz.tick(Instant::now() + Duration::from_secs(60)));
    }
}
