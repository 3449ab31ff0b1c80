//! MatriBot response routing: utterance -> canned reply.
//!
//! Case-insensitive substring match against fixed keyword sets, checked in
//! priority order. First matching topic wins; unmatched input gets the fallback.

use super::entities::BotReply;

const FOOD_KEYWORDS: &[&str] = &["food", "diet", "eat"];
const EXERCISE_KEYWORDS: &[&str] = &["exercise", "workout", "activity"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi"];

/// Opening message of every chat session.
pub const WELCOME_TEXT: &str =
    "Hi there! I'm MatriBot 🤖 Your Pregnancy Assistant. How can I help you today?";
pub const WELCOME_OPTIONS: &[&str] = &["Food tips", "Exercise advice", "Health concerns"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Food,
    Exercise,
    Greeting,
    Fallback,
}

impl Topic {
    /// Priority order used by `detect`.
    const ORDERED: [(Topic, &'static [&'static str]); 3] = [
        (Topic::Food, FOOD_KEYWORDS),
        (Topic::Exercise, EXERCISE_KEYWORDS),
        (Topic::Greeting, GREETING_KEYWORDS),
    ];

    pub fn detect(utterance: &str) -> Topic {
        let lower = utterance.to_lowercase();
        Self::ORDERED
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Fallback)
    }

    pub fn reply(self) -> BotReply {
        match self {
            Topic::Food => canned(
                "Nutrition is key during pregnancy! Here are some general guidelines:",
                &[
                    "🍎 Eat plenty of fruits and vegetables (5 servings daily)",
                    "🥛 Include calcium-rich foods (dairy, leafy greens)",
                    "🥩 Lean proteins (chicken, fish, legumes)",
                    "💧 Stay hydrated (8-10 glasses of water)",
                    "🚫 Avoid raw/undercooked foods and unpasteurized dairy",
                ],
                &["Low risk diet", "Mid risk diet", "High risk diet"],
            ),
            Topic::Exercise => canned(
                "Staying active is important, but safety first!",
                &[
                    "🚶‍♀️ Walking is excellent (30 mins daily)",
                    "🧘 Prenatal yoga improves flexibility",
                    "🏊 Swimming is gentle on joints",
                    "🛑 Avoid contact sports and hot yoga",
                    "💓 Listen to your body's signals",
                ],
                &["Low risk exercise", "Mid risk exercise", "High risk exercise"],
            ),
            Topic::Greeting => canned(
                "Hello! 👋 I'm MatriBot, your pregnancy assistant. Ask me about nutrition, exercise, or health tips!",
                &[],
                &["First trimester tips", "Foods to avoid", "Safe exercises"],
            ),
            Topic::Fallback => canned(
                "I'm here to help with pregnancy-related questions about food, exercise, or health. What would you like to know?",
                &[],
                &["Food safety", "Exercise limits", "Warning signs"],
            ),
        }
    }
}

/// Route a free-text utterance to its reply. Never fails.
pub fn route(utterance: &str) -> BotReply {
    Topic::detect(utterance).reply()
}

pub fn welcome() -> BotReply {
    canned(WELCOME_TEXT, &[], WELCOME_OPTIONS)
}

fn canned(text: &str, details: &[&str], options: &[&str]) -> BotReply {
    BotReply {
        text: text.to_string(),
        details: details.iter().map(|s| s.to_string()).collect(),
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_request() {
        assert_eq!(Topic::detect("I need food tips"), Topic::Food);
        let reply = route("I need food tips");
        assert!(reply.text.starts_with("Nutrition is key"));
        assert_eq!(reply.details.len(), 5);
        assert_eq!(
            reply.options,
            vec!["Low risk diet", "Mid risk diet", "High risk diet"]
        );
    }

    #[test]
    fn test_greeting() {
        assert_eq!(Topic::detect("hello there"), Topic::Greeting);
        let reply = route("hello there");
        assert!(reply.text.starts_with("Hello!"));
        assert!(reply.details.is_empty());
    }

    #[test]
    fn test_unmatched_falls_back() {
        assert_eq!(Topic::detect("xyz"), Topic::Fallback);
        assert_eq!(route("xyz").options, vec!["Food safety", "Exercise limits", "Warning signs"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Topic::detect("WORKOUT plans?"), Topic::Exercise);
        assert_eq!(Topic::detect("Healthy DIET"), Topic::Food);
    }

    #[test]
    fn test_food_outranks_exercise_and_greeting() {
        assert_eq!(Topic::detect("hi, what should I eat after exercise?"), Topic::Food);
        assert_eq!(Topic::detect("hi, any exercise ideas?"), Topic::Exercise);
    }

    #[test]
    fn test_substring_matching_is_literal() {
        // "this" contains "hi"; "great" contains "eat".
        assert_eq!(Topic::detect("this"), Topic::Greeting);
        assert_eq!(Topic::detect("great"), Topic::Food);
    }

    #[test]
    fn test_quick_reply_labels_route_as_expected() {
        assert_eq!(Topic::detect("Food tips"), Topic::Food);
        assert_eq!(Topic::detect("Exercise advice"), Topic::Exercise);
        assert_eq!(Topic::detect("Health concerns"), Topic::Fallback);
        assert_eq!(Topic::detect("Mid risk diet"), Topic::Food);
        assert_eq!(Topic::detect("Safe exercises"), Topic::Exercise);
    }

    #[test]
    fn test_route_is_repeatable() {
        assert_eq!(route("hello"), route("hello"));
        assert_eq!(route(""), Topic::Fallback.reply());
    }
}
