//! `Rift Roller`

mod champions;
mod commands;
mod config;
mod dice;
mod history;
mod icons;

use std::process;
use std::sync::Arc;

use anyhow::Result;
use log::{Level, error, info, warn};
use poise::serenity_prelude::{ClientBuilder, GatewayIntents};
use serenity::gateway::GatewayError;
use serenity::http::HttpError;

use crate::champions::Roster;
use crate::config::{Config, TokenError};
use crate::history::RollStore;
use crate::icons::IconResolver;

/// Data shared by every command invocation
pub struct Data {
    pub roster: Roster,
    pub store: RollStore,
    pub icons: IconResolver,
}

pub type Context<'a> = poise::Context<'a, Data, anyhow::Error>;

async fn on_error(error: poise::FrameworkError<'_, Data, anyhow::Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error returned by command {}: {error:#}", ctx.command().name);
            ctx.reply(format!("Error: the command returned the following message: `{error}`"))
                .await
                .map(|_| ())
                .unwrap_or_default();
        },
        error => {
            if let Err(err) = poise::builtins::on_error(error).await {
                error!("Could not handle framework error: {err}");
            }
        },
    }
}

/// Prints what went wrong with the token and how to fix it, then exits.
fn exit_with(err: &TokenError) -> ! {
    error!("{err}");
    eprintln!("ERROR: {err}.\n{}", err.remediation());
    process::exit(1)
}

/// Whether the platform refused to log in with the given token
fn rejects_token(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => true,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => response.status_code.as_u16() == 401,
        _ => false,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let config = Config::load().unwrap_or_else(|err| exit_with(&err));

    let store = RollStore::new(config.database_path());
    store.init().await?;
    info!("Roll history stored in {}", store.path().display());

    let icons = IconResolver::new(config.icons_dir());
    if !icons.dir().is_dir() {
        warn!("Icon directory {} not found, rolls will be sent without icons", icons.dir().display());
    }

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                match poise::builtins::register_globally(ctx, &framework.options().commands).await {
                    Ok(()) => info!("{} joined the game, slash commands synced", ready.user.name),
                    Err(err) => warn!("{} joined the game but slash commands could not be synced: {err}", ready.user.name),
                }
                Ok(Data {
                    roster: Roster::builtin(),
                    store,
                    icons,
                })
            })
        })
        .build();

    let mut client = ClientBuilder::new(&config.token, GatewayIntents::non_privileged())
        .framework(framework)
        .await?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Could not handle SIGINT signal: {err}");
            return;
        }
        warn!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    if let Err(err) = client.start().await {
        if rejects_token(&err) {
            exit_with(&TokenError::Rejected);
        }
        error!("Client error: {err:?}");
        return Err(err.into());
    }

    Ok(())
}
