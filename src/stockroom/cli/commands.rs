//! # CLI Layer
//!
//! One client of the stockroom API. It parses arguments, opens the data file,
//! dispatches to [`InventoryApi`] and prints what comes back.
//!
//! One-shot subcommands that change the inventory save the data file before
//! exiting; read-only ones never write. The `menu` subcommand keeps the
//! inventory open across many operations and only saves when asked or when
//! `autosave` is on.

use super::menu;
use super::render::{render_config, render_item, render_items, render_messages, render_page};
use super::setup::{AddArgs, Cli, Commands, UpdateArgs};
use clap::Parser;
use stockroom::api::{CmdMessage, CmdResult, ConfigAction, InventoryApi, ItemUpdate, MessageLevel};
use stockroom::codec::DecodePolicy;
use stockroom::config::Settings;
use stockroom::error::Result;
use stockroom::model::ItemFields;
use stockroom::store::Inventory;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let interactive = matches!(cli.command, Some(Commands::Menu));
    let mut api = init_api(&cli, !interactive)?;

    match cli.command {
        Some(Commands::List {
            sort,
            page,
            page_size,
        }) => show(api.list(sort, page_size, page)?),
        Some(Commands::Get { id }) => show(api.get(id)?),
        Some(Commands::Add(args)) => show(api.add(add_fields(args))?),
        Some(Commands::Update { id, fields }) => show(api.update(id, item_update(fields))?),
        Some(Commands::Remove { id }) => show(api.remove(id)?),
        Some(Commands::Search { term }) => show(api.search(&term)?),
        Some(Commands::LowStock { threshold }) => show(api.low_stock(threshold)?),
        Some(Commands::Import { path }) => show(api.import(&path)?),
        Some(Commands::Export { path }) => show(api.export(path.as_deref())?),
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        Some(Commands::Menu) => handle_menu(&mut api),
        None => show(api.list(None, None, 1)?),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_api(cli: &Cli, always_save: bool) -> Result<InventoryApi> {
    let mut settings = Settings::load(&cli.config)?;
    if let Some(data) = &cli.data {
        settings.data_file = data.clone();
    }
    debug!(config = %cli.config.display(), data = %settings.data_file.display(), "starting");

    let policy = if cli.strict {
        DecodePolicy::Strict
    } else {
        DecodePolicy::Lenient
    };
    let store = Inventory::new().with_policy(policy);
    let mut api =
        InventoryApi::new(store, settings, cli.config.clone()).with_always_save(always_save);

    let opened = api.open_data_file()?;
    info!(items = api.store().len(), "inventory loaded");
    print_messages(&without_success(opened.messages));
    Ok(api)
}

fn show(result: CmdResult) -> Result<()> {
    print!("{}", render_result(&result));
    Ok(())
}

/// Everything a command produced, in display order.
pub(super) fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(page) = &result.page {
        out.push_str(&render_page(page));
    }
    if !result.listed_items.is_empty() {
        out.push_str(&render_items(&result.listed_items));
    }
    if result.messages.is_empty() {
        for item in &result.affected_items {
            out.push_str(&render_item(item));
        }
    }
    if !result.config_values.is_empty() && result.messages.is_empty() {
        out.push_str(&render_config(&result.config_values));
    }
    out.push_str(&render_messages(&result.messages));
    out
}

fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn without_success(messages: Vec<CmdMessage>) -> Vec<CmdMessage> {
    messages
        .into_iter()
        .filter(|m| m.level != MessageLevel::Success)
        .collect()
}

fn add_fields(args: AddArgs) -> ItemFields {
    ItemFields {
        name: args.name,
        category: args.category,
        supplier: args.supplier,
        quantity: args.quantity,
        price: args.price,
    }
}

fn item_update(args: UpdateArgs) -> ItemUpdate {
    ItemUpdate {
        name: args.name,
        category: args.category,
        supplier: args.supplier,
        quantity: args.quantity,
        price: args.price,
    }
}

fn handle_config(api: &mut InventoryApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    show(api.config(action)?)
}

fn handle_menu(api: &mut InventoryApi) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(api, stdin.lock(), stdout.lock())
}
