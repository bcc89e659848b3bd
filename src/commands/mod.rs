//! Commands of the bot

use crate::Data;

pub mod champion;
pub mod rolls;
pub mod stats;

/// Every command registered on the platform
pub fn all() -> Vec<poise::Command<Data, anyhow::Error>> {
    vec![rolls::roll(), stats::stats(), stats::leaderboard(), stats::lb(), champion::champion()]
}
