use anyhow::{anyhow, Context, Result};
use clap::Parser;

use pencil::cli::{CliArgs, RunMode};
use pencil::config::PencilConfig;
use pencil::messages::PencilMsg;
use pencil::script;
use pencil::session::Session;
use pencil::update::run;

fn main() -> Result<()> {
    pencil::tracing::init();

    let args = CliArgs::parse();
    let config = args.into_config().map_err(|e| anyhow!(e))?;

    let file_config = match &config.config_path {
        Some(path) => PencilConfig::load_from(path),
        None => PencilConfig::load(),
    };
    let pencil_config = file_config.merge(config.overrides);
    tracing::debug!(?pencil_config, "pencil configuration");

    let actions = match &config.mode {
        RunMode::Script { path, .. } => script::load(path)?,
        RunMode::Write(text) => vec![PencilMsg::Write(text.clone())],
    };

    let mut session = Session::with_text(pencil_config, config.mode.initial_text());

    let failures = match run(&mut session, actions, config.keep_going) {
        Ok(failures) => failures,
        Err(failure) => {
            return Err(anyhow!(
                "step {} ({}) failed: {}",
                failure.step + 1,
                failure.action,
                failure.error
            ))
        }
    };

    if config.json {
        let report = session.report(failures);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("{}", session.text());
        for failure in &failures {
            eprintln!(
                "skipped step {} ({}): {}",
                failure.step + 1,
                failure.action,
                failure.error
            );
        }
    }

    Ok(())
}
