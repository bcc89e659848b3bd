//! Commands used to roll the die

use anyhow::Result;
use chrono::Utc;
use log::info;
use poise::serenity_prelude::{CreateAttachment, CreateEmbed, CreateEmbedFooter};
use poise::{CreateReply, command};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Context;
use crate::champions::Role;
use crate::dice::{self, Bucket};
use crate::history::NewRoll;

/// Embed colour of each bucket, from red to gold
const fn colour(bucket: Bucket) -> u32 {
    match bucket {
        Bucket::NaturalOne => 0x99_2D_22,
        Bucket::Hide => 0xE7_4C_3C,
        Bucket::Skirmish => 0xE6_7E_22,
        Bucket::Playmaker => 0x34_98_DB,
        Bucket::Engage => 0x2E_CC_71,
        Bucket::NaturalTwenty => 0xF1_C4_0F,
    }
}

/// Roll a d20 and get a champion matching the same aggression range
///
/// Examples:
/// * `/roll`
/// * `/roll jungle`
#[command(slash_command, prefix_command, aliases("r"), category = "Rolls")]
pub async fn roll(ctx: Context<'_>, #[description = "Optional: pick a lane/role"] role: Option<Role>) -> Result<()> {
    let data = ctx.data();
    let mut rng = StdRng::from_entropy();
    let outcome = dice::roll(&data.roster, role, &mut rng);

    let author = ctx.author();
    data.store
        .record(NewRoll::from_outcome(author.id.get(), &author.name, &outcome), Utc::now())
        .await?;
    info!(
        "{} rolled {} in {}: {}",
        author.name,
        outcome.die,
        outcome.scope_label(),
        outcome.champion.as_deref().unwrap_or("no champion")
    );

    let mut embed = CreateEmbed::new()
        .title(outcome.headline())
        .description(outcome.quote)
        .colour(colour(outcome.bucket))
        .footer(CreateEmbedFooter::new(format!("{} · range {}", author.name, outcome.bucket)));

    let mut reply = CreateReply::default();
    if let Some(icon) = outcome.champion.as_deref().and_then(|champion| data.icons.resolve(champion)) {
        let attachment = CreateAttachment::path(&icon).await?;
        embed = embed.thumbnail(format!("attachment://{}", attachment.filename));
        reply = reply.attachment(attachment);
    }

    ctx.send(reply.embed(embed)).await?;
    Ok(())
}
