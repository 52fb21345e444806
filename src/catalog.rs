//! Fixed text pools used for flavor. Every selection from these is uniformly
//! random and carries no meaning.

use bon::Builder;

pub const QUOTES: &[&str] = &[
    "I'm a unitard!",
    "Me fail English? That's unpossible!",
    "My cat's breath smells like cat food.",
    "I bent my Wookiee.",
    "I'm learnding!",
    "That's where I saw the leprechaun. He tells me to burn things!",
    "My doctor said I wouldn't have so many nose bleeds if I kept my finger outta there.",
    "When I grow up, I want to be a principal or a caterpillar.",
];

/// Templates for sums within the threshold. Each carries one `{answer}` slot.
pub const EASY_RESPONSES: &[&str] = &[
    "I counted on my fingers! The answer is {answer}! I'm learnding!",
    "That's easy! I got {answer}! My teacher will be so proud!",
    "I used my fingers and toes! The answer is {answer}!",
    "Yay! I know this one! It's {answer}!",
];

/// Deflections for sums above the threshold. These never reveal the answer.
pub const HARD_RESPONSES: &[&str] = &[
    "That's too hard! I ran out of fingers! My brain hurts!",
    "I can't count that high! My head feels funny!",
    "That's unpossible! I only have 10 fingers!",
    "Too many numbers! I need a nap!",
];

pub const NUMBER_ERROR_MESSAGES: &[&str] = &[
    "That's not a number! Ralph needs numbers to count!",
    "I don't understand! Please use numbers like 5 or 3.14!",
    "My brain hurts! That's not a number I can count!",
];

pub const MENU_ERROR_MESSAGES: &[&str] = &[
    "That's not a number I know! Please choose 1, 2, or 3.",
    "I can only count to 3! Pick 1, 2, or 3!",
    "My brain is confused! Use 1, 2, or 3!",
];

pub const INTERRUPT_MESSAGES: &[&str] = &[
    "\n\nRalph got scared! Bye bye!",
    "\n\nI have to go now! My cat's breath smells like cat food!",
    "\n\nBye! I'm going to play with my toys!",
];

/// Every pool the application draws from, owned for the lifetime of the run
/// and handed to each feature by reference.
#[derive(Debug, Clone, Builder)]
pub struct Catalog {
    #[builder(default = QUOTES)]
    pub quotes: &'static [&'static str],
    #[builder(default = EASY_RESPONSES)]
    pub easy_responses: &'static [&'static str],
    #[builder(default = HARD_RESPONSES)]
    pub hard_responses: &'static [&'static str],
    #[builder(default = NUMBER_ERROR_MESSAGES)]
    pub number_errors: &'static [&'static str],
    #[builder(default = MENU_ERROR_MESSAGES)]
    pub menu_errors: &'static [&'static str],
    #[builder(default = INTERRUPT_MESSAGES)]
    pub interrupt_messages: &'static [&'static str],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builder().build()
    }
}
