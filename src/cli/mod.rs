//! # CLI Layer
//!
//! This module is one possible UI client for cardz, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Argument parsing lives in [`setup`], output formatting in [`print`];
//! `run()` resolves the environment and session and dispatches to the API.
//!
//! ## Sessions
//!
//! The auth commands (`signup`, `login`, `logout`) manage the persisted
//! owner session and never touch the catalog. Every other command needs the
//! catalog and a session: `--user <link>` pins a read-only viewer session to
//! the shared collection, otherwise the saved owner session is restored.

mod print;
mod setup;

use crate::api::CardzApi;
use crate::auth::{seed_owner_email, AuthError, AuthRegistry};
use crate::catalog::load_catalog;
use crate::clipboard::copy_to_clipboard;
use crate::collection::{ListFilter, SortOrder};
use crate::commands::CmdMessage;
use crate::error::{CardzError, Result};
use crate::init::{initialize, CardzContext};
use crate::session::{self, Session};
use crate::store::fs::FileStore;
use clap::Parser;
use colored::Colorize;
use print::{print_cards, print_messages, print_stats, print_variations};
use setup::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = initialize(cli.data.as_deref(), cli.catalog.as_deref());

    // Auth commands manage the session and never need the catalog.
    match cli.command {
        Some(Commands::Signup { email, password }) => {
            return handle_signup(&ctx, &email, &password)
        }
        Some(Commands::Login { email, password, federated }) => {
            return handle_login(&ctx, email.as_deref(), password.as_deref(), federated)
        }
        Some(Commands::Logout) => return handle_logout(&ctx),
        _ => {}
    }

    let records = load_catalog(&ctx.catalog_path)?;
    let session = resolve_session(&cli, &ctx)?;
    let store = FileStore::new(ctx.data_dir.clone());
    let mut api = CardzApi::new(store, records, session);

    match cli.command {
        Some(Commands::List { status, era, desc, trade }) => {
            let filter = ListFilter {
                status: status.map(Into::into),
                era,
                order: if desc { SortOrder::Desc } else { SortOrder::Asc },
                trade_only: trade,
            };
            let result = api.list(&filter)?;
            print_messages(&result.messages);
            print_cards(&result.listed_cards);
            Ok(())
        }
        Some(Commands::Eras) => {
            let result = api.eras()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Stats) => {
            let result = api.stats()?;
            println!("{}", api.session().display_label().bold());
            if let Some(stats) = &result.stats {
                print_stats(stats);
            }
            Ok(())
        }
        Some(Commands::Show { card_id }) => {
            let result = api.show(&card_id)?;
            if let Some(card) = result.listed_cards.first() {
                println!(
                    "{} #{} · {} ({})",
                    card.record.name.bold(),
                    card.record.number,
                    card.record.set,
                    card.record.era.as_deref().unwrap_or("-"),
                );
                print_variations(card);
            }
            Ok(())
        }
        Some(Commands::Inc { card_id, key }) => {
            let result = api.increment(&card_id, &key)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Dec { card_id, key }) => {
            let result = api.decrement(&card_id, &key)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Order { card_id, key }) => {
            let result = api.toggle_ordered(&card_id, &key)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Lang { card_id, key, language }) => {
            handle_lang(&mut api, &card_id, &key, &language)
        }
        Some(Commands::Share { copy }) => {
            let result = api.share(&ctx.config.share_base_url)?;
            print_messages(&result.messages);
            if copy {
                if let Some(url) = &result.share_url {
                    match copy_to_clipboard(url) {
                        Ok(()) => print_messages(&[CmdMessage::success("Copied to clipboard.")]),
                        Err(e) => print_messages(&[CmdMessage::warning(format!(
                            "Could not copy to clipboard: {}",
                            e
                        ))]),
                    }
                }
            }
            Ok(())
        }
        // `cardz` with no command lists the collection.
        None => {
            let result = api.list(&ListFilter::default())?;
            print_messages(&result.messages);
            print_cards(&result.listed_cards);
            Ok(())
        }
        Some(Commands::Signup { .. }) | Some(Commands::Login { .. }) | Some(Commands::Logout) => {
            unreachable!("auth commands handled above")
        }
    }
}

fn resolve_session(cli: &Cli, ctx: &CardzContext) -> Result<Session> {
    if let Some(input) = &cli.user {
        return session::share_user_id(input)
            .map(Session::viewer)
            .ok_or_else(|| CardzError::Api(format!("Invalid share link: {}", input)));
    }
    session::load(&ctx.data_dir)?.ok_or_else(|| {
        CardzError::Api(
            "Not signed in. Run `cardz signup` or `cardz login` first, or pass --user to view a shared collection.".to_string(),
        )
    })
}

fn handle_signup(ctx: &CardzContext, email: &str, password: &str) -> Result<()> {
    let mut registry = AuthRegistry::load(&ctx.data_dir)?;
    let session = registry.sign_up(email, password)?;
    finish_sign_in(ctx, &session)?;
    print_messages(&[CmdMessage::success(format!(
        "Account created. Signed in as {}",
        email
    ))]);
    Ok(())
}

fn handle_login(
    ctx: &CardzContext,
    email: Option<&str>,
    password: Option<&str>,
    federated: bool,
) -> Result<()> {
    let mut registry = AuthRegistry::load(&ctx.data_dir)?;

    let session = if federated {
        match registry.sign_in_federated(email)? {
            Some(session) => session,
            None => {
                print_messages(&[CmdMessage::info("Sign-in cancelled.")]);
                return Ok(());
            }
        }
    } else {
        let (email, password) = match (email, password) {
            (Some(e), Some(p)) => (e, p),
            _ => return Err(AuthError::MissingCredentials.into()),
        };
        registry.sign_in(email, password)?
    };

    finish_sign_in(ctx, &session)?;
    print_messages(&[CmdMessage::success(format!(
        "Signed in as {}",
        session.display_label()
    ))]);
    Ok(())
}

fn finish_sign_in(ctx: &CardzContext, session: &Session) -> Result<()> {
    session::save(&ctx.data_dir, session)?;
    let mut store = FileStore::new(ctx.data_dir.clone());
    seed_owner_email(&mut store, session)
}

fn handle_logout(ctx: &CardzContext) -> Result<()> {
    session::clear(&ctx.data_dir)?;
    print_messages(&[CmdMessage::info("Signed out.")]);
    Ok(())
}

/// Toggling a language the template does not offer is refused with a
/// warning instead of silently doing nothing.
fn handle_lang(
    api: &mut CardzApi<FileStore>,
    card_id: &str,
    key: &str,
    language: &str,
) -> Result<()> {
    if let Some(card) = api.collection().card(card_id) {
        if let Some(template) = card.record.variations.get(key) {
            if !template.available_languages.iter().any(|l| l == language) {
                print_messages(&[CmdMessage::warning(format!(
                    "Language {} is not available for {} ({})",
                    language, card_id, key
                ))]);
                return Ok(());
            }
        }
    }
    let result = api.toggle_language(card_id, key, language)?;
    print_messages(&result.messages);
    Ok(())
}
