//! Quiz session state machine
//!
//! One session runs from `start()` until the last life is lost. Transitions
//! are synchronous and run on a single logical thread of control; calls that
//! arrive in the wrong phase are ignored rather than treated as errors, since
//! the presentation layer may deliver stray late events.

use super::question::{Question, QuestionSource};
use crate::consts::{QUESTION_SECONDS, STARTING_LIVES, TICK_WARNING_SECONDS};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created but never started
    NotStarted,
    /// Active gameplay
    Playing,
    /// Out of lives
    GameOver,
}

/// Sound side effects emitted by transitions, drained by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Correct answer
    Correct,
    /// Wrong answer or time up
    Wrong,
    /// Run ended
    GameOver,
    /// Countdown warning
    Tick,
}

/// Complete quiz session state
#[derive(Debug, Clone)]
pub struct GameSession {
    score: u32,
    lives: u8,
    /// Seconds remaining on the current question
    timer: u8,
    phase: GamePhase,
    question: Option<Question>,
    questions: QuestionSource,
    /// Bumped on every new question; the shell re-arms its countdown when this changes
    generation: u64,
    cues: Vec<SoundCue>,
}

impl GameSession {
    /// Create a session; questions are drawn deterministically from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            timer: QUESTION_SECONDS,
            phase: GamePhase::NotStarted,
            question: None,
            questions: QuestionSource::new(seed),
            generation: 0,
            cues: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Seconds remaining on the current question
    pub fn timer(&self) -> u8 {
        self.timer
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Bumped on every new question; compare across transitions to detect
    /// question changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Take the sound cues queued since the last drain
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Begin (or restart) a run. Valid from any phase.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
        self.next_question();
    }

    /// Check an answer against the current question. Ignored unless `Playing`.
    /// Comparison is exact string equality; anything else is simply wrong.
    pub fn submit_answer(&mut self, input: &str) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let correct = self.question.as_ref().is_some_and(|q| q.answer == input);
        if correct {
            self.score += 1;
            self.cues.push(SoundCue::Correct);
            self.next_question();
        } else {
            self.wrong_answer();
        }
    }

    /// Advance the countdown by one second. Ignored unless `Playing`.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.timer <= 1 {
            // Question expired; costs a life exactly like a wrong submission
            self.timer = QUESTION_SECONDS;
            self.wrong_answer();
            return;
        }
        self.timer -= 1;
        if self.timer <= TICK_WARNING_SECONDS {
            self.cues.push(SoundCue::Tick);
        }
    }

    /// Shared by incorrect submissions and timer expiry so life bookkeeping
    /// cannot diverge between the two paths.
    fn wrong_answer(&mut self) {
        self.cues.push(SoundCue::Wrong);
        self.lives -= 1;
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.cues.push(SoundCue::GameOver);
        } else {
            self.next_question();
        }
    }

    /// Install a fresh question and reset the countdown
    fn next_question(&mut self) {
        self.question = Some(self.questions.next_question());
        self.timer = QUESTION_SECONDS;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playing_session(seed: u64) -> GameSession {
        let mut session = GameSession::new(seed);
        session.start();
        session.drain_cues();
        session
    }

    fn correct_answer(session: &GameSession) -> String {
        session
            .question()
            .expect("question while playing")
            .answer
            .clone()
    }

    #[test]
    fn test_start_resets_state() {
        let mut session = GameSession::new(12345);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert!(session.question().is_none());

        session.start();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.timer(), QUESTION_SECONDS);
        assert!(session.question().is_some());
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let mut session = playing_session(12345);
        for _ in 0..10 {
            session.tick();
        }
        let generation = session.generation();

        session.submit_answer(&correct_answer(&session));

        assert_eq!(session.score(), 1);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.timer(), QUESTION_SECONDS);
        assert_eq!(session.generation(), generation + 1);
        assert_eq!(session.drain_cues(), vec![SoundCue::Correct]);
    }

    #[test]
    fn test_wrong_answer_costs_life() {
        let mut session = playing_session(12345);
        let generation = session.generation();

        session.submit_answer("not the answer");

        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), STARTING_LIVES - 1);
        assert_eq!(session.timer(), QUESTION_SECONDS);
        assert_eq!(session.generation(), generation + 1);
        assert_eq!(session.drain_cues(), vec![SoundCue::Wrong]);
    }

    #[test]
    fn test_last_life_ends_the_run() {
        let mut session = playing_session(12345);
        session.submit_answer("");
        session.submit_answer("");
        assert_eq!(session.lives(), 1);
        session.drain_cues();

        session.submit_answer("");

        assert_eq!(session.lives(), 0);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.drain_cues(), vec![SoundCue::Wrong, SoundCue::GameOver]);
    }

    #[test]
    fn test_transitions_after_game_over_are_ignored() {
        let mut session = playing_session(12345);
        for _ in 0..STARTING_LIVES {
            session.submit_answer("");
        }
        assert_eq!(session.phase(), GamePhase::GameOver);
        session.drain_cues();
        let generation = session.generation();
        let timer = session.timer();

        session.tick();
        session.submit_answer("");
        session.submit_answer("42");

        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), 0);
        assert_eq!(session.timer(), timer);
        assert_eq!(session.generation(), generation);
        assert!(session.drain_cues().is_empty());
    }

    #[test]
    fn test_tick_counts_down_and_warns() {
        let mut session = playing_session(12345);

        session.tick();
        assert_eq!(session.timer(), QUESTION_SECONDS - 1);
        assert!(session.drain_cues().is_empty());

        // No warning cue until the countdown enters [1, TICK_WARNING_SECONDS]
        while session.timer() > TICK_WARNING_SECONDS + 1 {
            session.tick();
        }
        assert!(session.drain_cues().is_empty());

        session.tick();
        assert_eq!(session.timer(), TICK_WARNING_SECONDS);
        assert_eq!(session.drain_cues(), vec![SoundCue::Tick]);
    }

    #[test]
    fn test_timer_expiry_is_a_wrong_answer() {
        let mut session = playing_session(12345);
        while session.timer() > 1 {
            session.tick();
        }
        session.drain_cues();
        let generation = session.generation();

        session.tick();

        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), STARTING_LIVES - 1);
        assert_eq!(session.timer(), QUESTION_SECONDS);
        assert_eq!(session.generation(), generation + 1);
        assert_eq!(session.drain_cues(), vec![SoundCue::Wrong]);
    }

    #[test]
    fn test_expiry_on_last_life_ends_the_run() {
        let mut session = playing_session(12345);
        session.submit_answer("");
        session.submit_answer("");
        while session.timer() > 1 {
            session.tick();
        }
        session.drain_cues();

        session.tick();

        assert_eq!(session.lives(), 0);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.drain_cues(), vec![SoundCue::Wrong, SoundCue::GameOver]);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut session = playing_session(12345);
        session.submit_answer(&correct_answer(&session));
        for _ in 0..STARTING_LIVES {
            session.submit_answer("");
        }
        assert_eq!(session.phase(), GamePhase::GameOver);

        session.start();

        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.timer(), QUESTION_SECONDS);
        assert!(session.question().is_some());
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed see the same questions
        let mut s1 = playing_session(99999);
        let mut s2 = playing_session(99999);
        for _ in 0..20 {
            assert_eq!(s1.question(), s2.question());
            let answer = correct_answer(&s1);
            s1.submit_answer(&answer);
            s2.submit_answer(&answer);
        }
        assert_eq!(s1.score(), 20);
        assert_eq!(s2.score(), 20);
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_intent_sequence(
            seed in any::<u64>(),
            actions in prop::collection::vec(0u8..3, 0..200),
        ) {
            let mut session = GameSession::new(seed);
            session.start();
            let mut last_score = session.score();

            for action in actions {
                let was_playing = session.phase() == GamePhase::Playing;
                match action {
                    0 => session.tick(),
                    1 => {
                        let answer = session
                            .question()
                            .map(|q| q.answer.clone())
                            .unwrap_or_default();
                        session.submit_answer(&answer);
                    }
                    _ => session.submit_answer("wrong"),
                }

                prop_assert!(session.lives() <= STARTING_LIVES);
                prop_assert_eq!(
                    session.phase() == GamePhase::GameOver,
                    session.lives() == 0
                );
                prop_assert!(
                    session.phase() != GamePhase::Playing || session.question().is_some()
                );
                prop_assert!((1..=QUESTION_SECONDS).contains(&session.timer()));
                // Score moves only on a correct submission, by exactly one
                if action == 1 && was_playing {
                    prop_assert_eq!(session.score(), last_score + 1);
                } else {
                    prop_assert_eq!(session.score(), last_score);
                }
                last_score = session.score();
            }
        }
    }
}
