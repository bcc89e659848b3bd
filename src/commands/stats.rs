//! Commands showing statistics computed from the roll history

use anyhow::Result;
use chrono::Utc;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};
use poise::{CreateReply, command};

use crate::Context;
use crate::history::{Category, CategorySpec, LeaderboardEntry, UserStats};

/// Number of leaderboard entries shown when no limit is given
const DEFAULT_LIMIT: i64 = 10;

/// Largest number of leaderboard entries
const MAX_LIMIT: usize = 25;

const STATS_COLOUR: u32 = 0x34_98_DB;

const LEADERBOARD_COLOUR: u32 = 0xF1_C4_0F;

/// Show your roll statistics
#[command(slash_command, prefix_command, category = "Stats")]
pub async fn stats(ctx: Context<'_>) -> Result<()> {
    let author = ctx.author();
    let Some(stats) = ctx.data().store.stats(author.id.get(), Utc::now()).await? else {
        ctx.say(format!("{} has no rolls yet. Try `/roll` first!", author.name)).await?;
        return Ok(());
    };

    let embed = stats_fields(&stats).into_iter().fold(
        CreateEmbed::new()
            .title(format!("Roll stats for {}", author.name))
            .colour(STATS_COLOUR),
        |embed, (name, value)| embed.field(name, value, true),
    );
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn stats_fields(stats: &UserStats) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Total rolls", stats.total.to_string()),
        ("Natural 20s", format!("{} ({:.1}%)", stats.nat20s, stats.luck_percent())),
        ("Natural 1s", format!("{} ({:.1}%)", stats.nat1s, stats.unluck_percent())),
        ("Average roll", format!("{:.2}", stats.average)),
        ("Today", stats.today.to_string()),
        ("This week", stats.this_week.to_string()),
        (
            "Favourite champion",
            stats
                .favourite
                .as_ref()
                .map_or_else(|| "none yet".to_owned(), |(name, times)| format!("{name} ({times}×)")),
        ),
        ("Rank", stats.rank.map_or_else(|| "unranked".to_owned(), |rank| format!("#{rank}"))),
    ];

    if let Some(last) = &stats.last {
        let champion = match (&last.champion, last.role) {
            (Some(name), Some(role)) => format!(" ({name}, {})", role.key()),
            (Some(name), None) => format!(" ({name})"),
            (None, _) => String::new(),
        };
        fields.push(("Last roll", format!("{}{champion} <t:{}:R>", last.die, last.timestamp.timestamp())));
    }

    fields
}

/// Show the roll leaderboard
///
/// Examples:
/// * `/leaderboard`
/// * `/leaderboard luckiest 5`
#[command(slash_command, prefix_command, category = "Stats")]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[description = "Ranking to show"] category: Option<Category>,
    #[description = "Number of entries, from 1 to 25"] limit: Option<i64>,
) -> Result<()> {
    show_leaderboard(ctx, category, limit).await
}

/// Shorthand for `/leaderboard`
#[command(slash_command, prefix_command, category = "Stats")]
pub async fn lb(
    ctx: Context<'_>,
    #[description = "Ranking to show"] category: Option<Category>,
    #[description = "Number of entries, from 1 to 25"] limit: Option<i64>,
) -> Result<()> {
    show_leaderboard(ctx, category, limit).await
}

/// Number of entries to show, or `None` when out of bounds.
fn parse_limit(limit: Option<i64>) -> Option<usize> {
    usize::try_from(limit.unwrap_or(DEFAULT_LIMIT))
        .ok()
        .filter(|limit| (1..=MAX_LIMIT).contains(limit))
}

async fn show_leaderboard(ctx: Context<'_>, category: Option<Category>, limit: Option<i64>) -> Result<()> {
    let Some(limit) = parse_limit(limit) else {
        ctx.send(
            CreateReply::default()
                .content(format!("The limit must be between 1 and {MAX_LIMIT}."))
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    let spec = category.unwrap_or(Category::TotalRolls).spec();
    let store = &ctx.data().store;
    let now = Utc::now();
    let entries = store.leaderboard(spec.category, limit, now).await?;
    let rank = store.rank_of(spec.category, ctx.author().id.get(), now).await?;

    let embed = CreateEmbed::new()
        .title(spec.title)
        .description(leaderboard_text(spec, &entries))
        .colour(LEADERBOARD_COLOUR)
        .footer(CreateEmbedFooter::new(leaderboard_footer(spec, rank)));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn leaderboard_footer(spec: &CategorySpec, rank: Option<usize>) -> String {
    let rank = rank.map_or_else(|| "You are not ranked".to_owned(), |rank| format!("You are #{rank}"));
    if spec.min_rolls > 1 {
        format!("{rank} · only players with at least {} rolls", spec.min_rolls)
    } else {
        rank
    }
}

fn leaderboard_text(spec: &CategorySpec, entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return if spec.min_rolls > 1 {
            format!("Nobody has rolled at least {} times yet.", spec.min_rolls)
        } else {
            "No rolls recorded yet.".to_owned()
        };
    }

    entries
        .iter()
        .map(|entry| {
            let medal = match entry.rank {
                1 => "🥇 ",
                2 => "🥈 ",
                3 => "🥉 ",
                _ => "",
            };
            format!(
                "{medal}**#{}** {} — {} ({} rolls)",
                entry.rank,
                entry.username,
                spec.format.format(entry.value),
                entry.rolls
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
