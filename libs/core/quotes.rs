use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub id: &'static str,
    pub text: &'static str,
    pub author: &'static str,
}

const fn quote(id: &'static str, text: &'static str, author: &'static str) -> Quote {
    Quote { id, text, author }
}

pub static MOTIVATIONAL_QUOTES: [Quote; 10] = [
    quote("1", "The only way to do great work is to love what you do.", "Steve Jobs"),
    quote("2", "Believe you can and you're halfway there.", "Theodore Roosevelt"),
    quote(
        "3",
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
    ),
    quote(
        "4",
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    quote("5", "It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    quote("6", "Everything you've ever wanted is on the other side of fear.", "George Addair"),
    quote(
        "7",
        "Success usually comes to those who are too busy to be looking for it.",
        "Henry David Thoreau",
    ),
    quote("8", "Don't be afraid to give up the good to go for the great.", "John D. Rockefeller"),
    quote("9", "I find that the harder I work, the more luck I seem to have.", "Thomas Jefferson"),
    quote(
        "10",
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
];

pub fn quotes() -> &'static [Quote] {
    &MOTIVATIONAL_QUOTES
}

/// Same quote for a whole day, the next one the day after
pub fn quote_of_the_day(date: NaiveDate) -> &'static Quote {
    let index = date.num_days_from_ce().rem_euclid(MOTIVATIONAL_QUOTES.len() as i32) as usize;
    &MOTIVATIONAL_QUOTES[index]
}
