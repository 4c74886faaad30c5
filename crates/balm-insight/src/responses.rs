//! Immediate feedback shown after a mood check-in.

/// Activities suggested after a middling check-in.
pub const WELLNESS_ACTIVITIES: &[&str] = &[
    "Take 5 deep breaths 🌬️",
    "Write down 3 things you're grateful for ✨",
    "Go for a short mindful walk 🚶‍♀️",
    "Listen to calming music 🎵",
    "Do a quick meditation 🧘‍♀️",
    "Call someone you care about 📞",
    "Take a warm shower or bath 🛁",
];

/// Celebration lines for a good check-in.
pub const CELEBRATIONS: &[&str] = &[
    "Amazing! Keep spreading those good vibes! ✨",
    "You're radiating positivity today! 🌟",
    "Great energy! Your happiness is contagious! 😊",
    "Fantastic mood! You're doing great! 🎉",
    "Love this positive energy! Keep it up! 💫",
];

/// Response to a check-in, graded by level.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CheckinResponse {
    /// Level 1-2: supportive message with follow-up actions.
    Support {
        title: &'static str,
        message: &'static str,
        actions: &'static [&'static str],
    },
    /// Level 3: a single wellness activity suggestion.
    Suggestion { activity: &'static str },
    /// Level 4-5: a celebration line.
    Celebration { message: &'static str },
}

/// Grade a check-in and pick the response text.
///
/// `pick` selects from the suggestion/celebration pools (callers pass an
/// RNG-derived value); the grading itself is fixed by level.
pub fn checkin_response(level: u8, pick: usize) -> CheckinResponse {
    match level {
        0..=2 => CheckinResponse::Support {
            title: "We notice you might be having a tough time 💙",
            message: "Remember: You're not alone. Consider reaching out to a friend, family \
                      member, or mental health professional. Your wellbeing matters.",
            actions: &[
                "Start breathing exercise",
                "View positive reflections",
                "Emergency resources",
            ],
        },
        3 => CheckinResponse::Suggestion {
            activity: WELLNESS_ACTIVITIES[pick % WELLNESS_ACTIVITIES.len()],
        },
        _ => CheckinResponse::Celebration {
            message: CELEBRATIONS[pick % CELEBRATIONS.len()],
        },
    }
}
