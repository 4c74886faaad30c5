//! The reflection prompt set and deterministic prompt selection.

use balm_core::BalmError;

pub const REFLECTION_PROMPTS: &[&str] = &[
    "What are three things you're grateful for today, no matter how small?",
    "Describe a moment today when you felt proud of yourself.",
    "What emotion did you experience most today, and what might have caused it?",
    "If you could give your past self one piece of advice, what would it be?",
    "What's one thing you learned about yourself this week?",
    "How did you show kindness to yourself or others today?",
    "What challenge are you currently facing, and what strength can help you through it?",
    "Describe a person who makes you feel supported and why.",
    "What's something you're looking forward to, and how does it make you feel?",
    "What would you tell a friend who was feeling the way you feel right now?",
    "When did you feel most like yourself today?",
    "What small act of self-care could you do right now?",
    "How has your perspective on something changed recently?",
    "What boundary do you need to set to protect your wellbeing?",
    "What brings you the most peace, and how can you access it more often?",
];

/// Fetch a prompt by explicit index.
pub fn prompt_at(index: usize) -> Result<&'static str, BalmError> {
    REFLECTION_PROMPTS
        .get(index)
        .copied()
        .ok_or(BalmError::PromptIndexOutOfRange {
            index,
            max: REFLECTION_PROMPTS.len() - 1,
        })
}

/// Pick the next prompt, never repeating `current`.
///
/// `pick` is caller-supplied (typically RNG-derived) so this stays a pure
/// function.
pub fn next_prompt(current: Option<&str>, pick: usize) -> &'static str {
    let candidates: Vec<&'static str> = REFLECTION_PROMPTS
        .iter()
        .copied()
        .filter(|prompt| Some(*prompt) != current)
        .collect();
    candidates[pick % candidates.len()]
}
