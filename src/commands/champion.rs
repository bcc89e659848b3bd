//! Champion lookup

use anyhow::Result;
use poise::serenity_prelude::{CreateAttachment, CreateEmbed};
use poise::{CreateReply, command};

use crate::Context;
use crate::champions::ChampionProfile;

/// Maximum number of names suggested when the lookup fails
const MAX_SUGGESTIONS: usize = 5;

/// Show the aggression scores of a champion in every role it is listed in
///
/// Examples:
/// * `/champion teemo`
/// * `/champion Kha'Zix`
#[command(slash_command, prefix_command, category = "Champions")]
pub async fn champion(ctx: Context<'_>, #[description = "Champion name"] #[rest] name: String) -> Result<()> {
    let data = ctx.data();
    let Some(profile) = data.roster.find(&name) else {
        ctx.say(not_found(&name, &data.roster.suggest(&name, MAX_SUGGESTIONS))).await?;
        return Ok(());
    };

    let mut embed = CreateEmbed::new().title(&profile.name).description(scores_text(&profile));
    let mut reply = CreateReply::default();
    if let Some(icon) = data.icons.resolve(&profile.name) {
        let attachment = CreateAttachment::path(&icon).await?;
        embed = embed.thumbnail(format!("attachment://{}", attachment.filename));
        reply = reply.attachment(attachment);
    }

    ctx.send(reply.embed(embed)).await?;
    Ok(())
}

fn scores_text(profile: &ChampionProfile) -> String {
    profile
        .scores
        .iter()
        .map(|(role, score)| format!("**{}**: {score}/20", role.key()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn not_found(name: &str, suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        format!("No champion named `{name}` was found.")
    } else {
        format!("No champion named `{name}` was found. Did you mean: {}?", suggestions.join(", "))
    }
}
