//! Daily wisdom catalog - rotating quotes and affirmations for the dashboard.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A titled quote shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WisdomQuote {
    pub title: &'static str,
    pub text: &'static str,
    pub author: &'static str,
}

/// The full wisdom catalog, in rotation order.
pub const DAILY_WISDOM: &[WisdomQuote] = &[
    WisdomQuote {
        title: "Daily Wisdom",
        text: "The best way to predict the future is to create it.",
        author: "Peter Drucker",
    },
    WisdomQuote {
        title: "Mindful Moment",
        text: "In the midst of movement and chaos, keep stillness inside of you.",
        author: "Deepak Chopra",
    },
    WisdomQuote {
        title: "Daily Affirmation",
        text: "I am worthy of love, peace, and happiness.",
        author: "Self-Compassion Practice",
    },
    WisdomQuote {
        title: "Wellness Wisdom",
        text: "Take care of your body. It's the only place you have to live.",
        author: "Jim Rohn",
    },
    WisdomQuote {
        title: "Mindful Reminder",
        text: "You don't have to control your thoughts. You just have to stop letting them control you.",
        author: "Dan Millman",
    },
    WisdomQuote {
        title: "Daily Inspiration",
        text: "Your mind is a powerful thing. When you fill it with positive thoughts, your life will start to change.",
        author: "Buddha",
    },
    WisdomQuote {
        title: "Peaceful Thought",
        text: "Peace comes from within. Do not seek it without.",
        author: "Buddha",
    },
    WisdomQuote {
        title: "Growth Mindset",
        text: "The only impossible journey is the one you never begin.",
        author: "Tony Robbins",
    },
    WisdomQuote {
        title: "Self-Care Reminder",
        text: "You yourself, as much as anybody in the entire universe, deserve your love and affection.",
        author: "Buddha",
    },
    WisdomQuote {
        title: "Mindful Living",
        text: "The present moment is the only time over which we have dominion.",
        author: "Thích Nhất Hạnh",
    },
    WisdomQuote {
        title: "Inner Peace",
        text: "Nothing can bring you peace but yourself.",
        author: "Ralph Waldo Emerson",
    },
    WisdomQuote {
        title: "Daily Courage",
        text: "Do not let what you cannot do interfere with what you can do.",
        author: "John Wooden",
    },
    WisdomQuote {
        title: "Wellness Quote",
        text: "Health is a state of complete harmony of the body, mind and spirit.",
        author: "B.K.S. Iyengar",
    },
    WisdomQuote {
        title: "Positive Energy",
        text: "Every day may not be good, but there is something good in every day.",
        author: "Alice Morse Earle",
    },
    WisdomQuote {
        title: "Mental Strength",
        text: "The mind is everything. What you think you become.",
        author: "Buddha",
    },
    WisdomQuote {
        title: "Daily Gratitude",
        text: "Gratitude turns what we have into enough.",
        author: "Aesop",
    },
    WisdomQuote {
        title: "Mindful Breathing",
        text: "Feelings come and go like clouds in a windy sky. Conscious breathing is my anchor.",
        author: "Thích Nhất Hạnh",
    },
    WisdomQuote {
        title: "Self-Belief",
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    WisdomQuote {
        title: "Calm Mind",
        text: "You have power over your mind - not outside events. Realize this, and you will find strength.",
        author: "Marcus Aurelius",
    },
    WisdomQuote {
        title: "Daily Progress",
        text: "Progress, not perfection, is what we should be asking of ourselves.",
        author: "Julia Cameron",
    },
    WisdomQuote {
        title: "Wellness Journey",
        text: "Healing takes time, and asking for help is a courageous step.",
        author: "Mariska Hargitay",
    },
    WisdomQuote {
        title: "Inner Strength",
        text: "You are braver than you believe, stronger than you seem, and smarter than you think.",
        author: "A.A. Milne",
    },
    WisdomQuote {
        title: "Mindful Choice",
        text: "Between stimulus and response there is a space. In that space is our power to choose our response.",
        author: "Viktor E. Frankl",
    },
    WisdomQuote {
        title: "Self-Compassion",
        text: "Talk to yourself like you would to someone you love.",
        author: "Brené Brown",
    },
    WisdomQuote {
        title: "Present Moment",
        text: "Realize deeply that the present moment is all you ever have.",
        author: "Eckhart Tolle",
    },
];

/// Get the wisdom quote for a given date.
///
/// Uses the day of year as an index so the same date always yields the same
/// quote, rotating through the whole catalog.
pub fn daily_wisdom(date: NaiveDate) -> &'static WisdomQuote {
    let index = date.ordinal0() as usize % DAILY_WISDOM.len();
    &DAILY_WISDOM[index]
}

/// Get `count` random affirmations, excluding the given date's daily quote.
pub fn random_affirmations<R: Rng + ?Sized>(
    date: NaiveDate,
    count: usize,
    rng: &mut R,
) -> Vec<&'static WisdomQuote> {
    let daily = daily_wisdom(date);

    let mut others: Vec<&'static WisdomQuote> = DAILY_WISDOM
        .iter()
        .filter(|quote| quote.text != daily.text)
        .collect();

    others.shuffle(rng);
    others.truncate(count);
    others
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_daily_wisdom_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(daily_wisdom(date), daily_wisdom(date));
    }

    #[test]
    fn test_daily_wisdom_rotates() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_ne!(daily_wisdom(first), daily_wisdom(second));
    }

    #[test]
    fn test_rotation_covers_catalog() {
        // Day 1 and day 1 + catalog length wrap to the same quote.
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let wrapped = start + chrono::Days::new(DAILY_WISDOM.len() as u64);
        assert_eq!(daily_wisdom(start), daily_wisdom(wrapped));
    }

    #[test]
    fn test_random_affirmations_exclude_daily() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let daily = daily_wisdom(date);
        let mut rng = StdRng::seed_from_u64(7);

        let affirmations = random_affirmations(date, 3, &mut rng);
        assert_eq!(affirmations.len(), 3);
        assert!(affirmations.iter().all(|quote| quote.text != daily.text));
    }

    #[test]
    fn test_random_affirmations_seeded_are_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let first = random_affirmations(date, 3, &mut StdRng::seed_from_u64(42));
        let second = random_affirmations(date, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
