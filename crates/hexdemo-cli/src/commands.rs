use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use hexdemo_cli::driver::{DriverMode, RunSummary, run_lines};
use hexdemo_cli::parse::HELP;
use hexdemo_cli::render::{ops_table, render_session};
use hexdemo_cli::session::{Session, SessionConfig};

use crate::cli::RunArgs;

pub fn run_ops() -> Result<()> {
    println!("{}", ops_table());
    Ok(())
}

pub fn run_repl(config: SessionConfig) -> Result<()> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    if interactive {
        writeln!(stdout, "{HELP}\n")?;
        write!(stdout, "{}", render_session(&session))?;
    }
    let mode = if interactive {
        DriverMode::Interactive
    } else {
        DriverMode::Script
    };
    let summary = run_lines(&mut session, stdin.lock(), &mut stdout, mode)
        .context("interactive session")?;
    info!(
        commands = summary.commands,
        failures = summary.failures.len(),
        "session ended"
    );
    Ok(())
}

pub fn run_script(args: &RunArgs, config: SessionConfig) -> Result<RunSummary> {
    let span = info_span!("script", path = %args.script.display());
    let _guard = span.enter();
    let mut session = Session::new(config);
    let mut stdout = io::stdout().lock();
    let result = if args.script == Path::new("-") {
        run_lines(&mut session, io::stdin().lock(), &mut stdout, DriverMode::Script)
    } else {
        let reader = open_script(&args.script)?;
        run_lines(&mut session, reader, &mut stdout, DriverMode::Script)
    };
    let summary = result.context("run script")?;
    if args.json {
        let state = serde_json::to_string_pretty(&session.state()).context("serialize state")?;
        writeln!(stdout, "{state}")?;
    } else {
        write!(stdout, "{}", render_session(&session))?;
    }
    info!(
        lines = summary.lines,
        commands = summary.commands,
        failures = summary.failures.len(),
        "script complete"
    );
    Ok(summary)
}

fn open_script(path: &Path) -> Result<impl BufRead> {
    let file = File::open(path).with_context(|| format!("open script {}", path.display()))?;
    Ok(BufReader::new(file))
}
