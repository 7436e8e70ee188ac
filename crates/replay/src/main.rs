// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replays a JSON script of wizard commands against a fresh building and
//! emits the finished per-unit payload.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod script;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::eyre};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use unit_wizard::{Command, CompletedBuildingUnits};
use unit_wizard_api::{
    ApiError, AuthenticatedActor, BuildingPersistence, FinishWizardResponse, JsonFilePersistence,
    PersistenceError, Role, WizardHandle, authenticate_stub, execute, finish_and_submit,
    open_wizard,
};
use unit_wizard_audit::{AuditEvent, Cause};

use crate::script::ReplayScript;

/// Command-line arguments for the replay tool.
#[derive(Debug, Parser)]
#[command(name = "unit-wizard-replay", version, about)]
struct Args {
    /// Path to the JSON script to replay
    #[arg(short, long)]
    script: PathBuf,

    /// Write the finished payload here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Identifier recorded as the actor on every audit event
    #[arg(short, long, default_value = "replay")]
    actor: String,

    /// Continue past rejected commands instead of stopping
    #[arg(long)]
    keep_going: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Prints the payload to stdout as pretty JSON.
struct StdoutPersistence;

impl BuildingPersistence for StdoutPersistence {
    fn submit_units(&mut self, payload: &CompletedBuildingUnits) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string_pretty(payload)?;
        writeln!(std::io::stdout().lock(), "{json}").map_err(|source| PersistenceError::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set.
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    replay(args)
}

fn replay(args: Args) -> Result<()> {
    let script: ReplayScript = ReplayScript::load(&args.script)?;
    let actor: AuthenticatedActor = authenticate_stub(args.actor, Role::Admin)?;
    let script_name: String = args.script.display().to_string();

    let (mut handle, opened) = open_wizard(
        &script.building,
        &actor,
        replay_cause(&script_name, "open", "Open wizard"),
    )?;
    info!(
        total_units = opened.total_units,
        number_of_floors = opened.number_of_floors,
        commands = script.commands.len(),
        "Replaying script"
    );

    let mut sink: Box<dyn BuildingPersistence> = match args.output {
        Some(path) => Box::new(JsonFilePersistence::new(path)),
        None => Box::new(StdoutPersistence),
    };

    let mut rejected: usize = 0;
    for (index, command) in script.commands.into_iter().enumerate() {
        let line: usize = index + 1;
        let action: &'static str = command.action_name();
        let cause: Cause = replay_cause(&script_name, &line.to_string(), action);

        let result: Result<(), ApiError> = if command == Command::Finish {
            finish_and_submit(&mut handle, sink.as_mut(), &actor, cause)
                .map(|response| log_finish(&response))
        } else {
            execute(&mut handle, command, &actor, cause).map(|response| {
                debug!(
                    command = line,
                    action = %response.action,
                    step = %response.current_step,
                    "Command accepted"
                );
            })
        };

        if let Err(err) = result {
            rejected += 1;
            if !args.keep_going {
                print_timeline(&handle);
                return Err(eyre!("Command {line} ({action}) was rejected: {err}"));
            }
            warn!(command = line, action, error = %err, "Command rejected; continuing");
        }
    }

    if !handle.session().is_finished() {
        info!("Script did not finish the wizard; finishing now");
        let cause: Cause = replay_cause(&script_name, "finish", "Implicit finish");
        let response: FinishWizardResponse =
            finish_and_submit(&mut handle, sink.as_mut(), &actor, cause)?;
        log_finish(&response);
    }

    print_timeline(&handle);
    if rejected > 0 {
        error!(rejected, "Some commands were rejected");
    }
    Ok(())
}

fn replay_cause(script_name: &str, label: &str, description: &str) -> Cause {
    Cause::new(
        format!("{script_name}#{label}"),
        format!("{description} ({script_name})"),
    )
}

fn log_finish(response: &FinishWizardResponse) {
    if response.incomplete_steps.is_empty() {
        info!(units = response.units_submitted, "{}", response.message);
    } else {
        warn!(units = response.units_submitted, "{}", response.message);
    }
}

fn print_timeline(handle: &WizardHandle) {
    for event in handle.audit_log().events() {
        log_event(event);
    }
}

fn log_event(event: &AuditEvent) {
    info!(
        sequence = event.sequence.unwrap_or_default(),
        actor = %event.actor.id,
        action = %event.action.name,
        details = event.action.details.as_deref().unwrap_or(""),
        before = %event.before.data,
        after = %event.after.data,
        "Audit event"
    );
}
