use anyhow::Result;
use derive_more::Display;
use rand::Rng;

use crate::{catalog::Catalog, pool::pick};

/// Largest sum Ralph can still count on his fingers. Inclusive.
pub const DIFFICULTY_THRESHOLD: f64 = 10.0;

/// Placeholder replaced by the sum in easy response templates.
pub const ANSWER_SLOT: &str = "{answer}";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Sum within the threshold; the answer is revealed.
    #[display("easy")]
    Easy,
    /// Sum above the threshold; the answer is withheld.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// Classifies a sum. The threshold applies to the sum, not the operands.
    #[must_use]
    pub fn classify(sum: f64) -> Self {
        if sum <= DIFFICULTY_THRESHOLD {
            Self::Easy
        } else {
            Self::Hard
        }
    }
}

/// Two operands and their sum, fixed at construction.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display("{first} + {second}")]
pub struct MathProblem {
    first: f64,
    second: f64,
    sum: f64,
}

impl MathProblem {
    #[must_use]
    pub fn new(first: f64, second: f64) -> Self {
        Self {
            first,
            second,
            sum: first + second,
        }
    }

    #[must_use]
    pub fn first(&self) -> f64 {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> f64 {
        self.second
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.sum
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::classify(self.sum)
    }

    /// Picks Ralph's answer: a filled-in easy template, or a hard deflection
    /// that never mentions the sum.
    pub fn respond<R>(&self, catalog: &Catalog, rng: &mut R) -> Result<Response>
    where
        R: Rng + ?Sized,
    {
        let difficulty = self.difficulty();
        let text = match difficulty {
            Difficulty::Easy => fill_template(pick(catalog.easy_responses, "easy response", rng)?, self.sum),
            Difficulty::Hard => (*pick(catalog.hard_responses, "hard response", rng)?).to_string(),
        };
        Ok(Response { difficulty, text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub difficulty: Difficulty,
    pub text: String,
}

/// Substitutes `answer` into the template's [`ANSWER_SLOT`].
#[must_use]
pub fn fill_template(template: &str, answer: f64) -> String {
    template.replace(ANSWER_SLOT, &answer.to_string())
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
