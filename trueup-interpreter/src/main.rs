#![warn(clippy::uninlined_format_args)]

mod config;

use config::{AppConfig, init_logging};
use std::{borrow::Cow, env, process};
use trueup_application::{GroupSnapshotProvider, SettlementService};
use trueup_infrastructure::JsonSnapshotStore;
use trueup_presentation::{SettlementPresenter, TimelinePresenter, strings};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(&config);

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("Usage: trueup_interpreter <groups.json> [group-id]".into());
    };

    let store = JsonSnapshotStore::from_path(&path)
        .map_err(|err| format!("Failed to load '{path}': {err}"))?;

    let group_id = match args.next() {
        Some(id) => id,
        None => select_sole_group(&store)?,
    };

    let service = SettlementService::with_context(&store, config.settlement_context());
    let result = service.settle_group(&group_id).map_err(|err| err.to_string())?;

    let group = store.load_group(&group_id).map_err(|err| err.to_string())?;
    let view = SettlementPresenter::render(&result, &group, &config.currency_symbol);
    let timeline = TimelinePresenter::render(&group, &group, &config.currency_symbol);

    println!("{} ({})", group.name, group.id);
    print!("{}", view.to_text());
    println!("{}:", strings::ACTIVITY);
    for line in timeline {
        println!("  {line}");
    }
    Ok(())
}

fn select_sole_group(store: &JsonSnapshotStore) -> CliResult<String> {
    if let Some(id) = store.sole_group_id() {
        return Ok(id.to_string());
    }
    if store.is_empty() {
        return Err("Snapshot contains no groups".into());
    }

    Err(format!(
        "Snapshot contains {} groups; pass one of: {}",
        store.len(),
        store.group_ids().join(", ")
    )
    .into())
}
