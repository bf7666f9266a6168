//! Shared helpers for callers of the library

/// User-agent fragments of crawlers and link-preview bots
const BOT_PATTERNS: [&str; 11] = [
    "bot",
    "crawler",
    "spider",
    "facebookexternalhit",
    "discordbot",
    "whatsapp",
    "telegram",
    "twitter",
    "slack",
    "linkedinbot",
    "embedly",
];

/// True when `user_agent` looks like a crawler or link-preview fetcher.
///
/// Matching is a case-insensitive substring test. Callers use it to serve
/// preview cards to bots and a redirect to everyone else.
pub fn is_bot(user_agent: &str) -> bool {
    let lower = user_agent.to_lowercase();
    BOT_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}
