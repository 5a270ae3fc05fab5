//! Question generation
//!
//! Questions are drawn from a seeded RNG so a session's sequence is
//! reproducible from its seed.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{OPERAND_MAX, OPERAND_MIN};

/// A single multiplication question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Human-readable expression, e.g. "7 × 8"
    pub text: String,
    /// Canonical correct answer, the decimal string of the product
    pub answer: String,
}

impl Question {
    fn from_operands(a: u32, b: u32) -> Self {
        Self {
            text: format!("{a} × {b}"),
            answer: (a * b).to_string(),
        }
    }
}

/// Seeded source of random questions
#[derive(Debug, Clone)]
pub struct QuestionSource {
    rng: Pcg32,
}

impl QuestionSource {
    /// Create a source drawing from the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw the next question, operands uniform in [OPERAND_MIN, OPERAND_MAX]
    pub fn next_question(&mut self) -> Question {
        let a = self.rng.random_range(OPERAND_MIN..=OPERAND_MAX);
        let b = self.rng.random_range(OPERAND_MIN..=OPERAND_MAX);
        Question::from_operands(a, b)
    }
}
