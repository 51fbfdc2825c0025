use clap::Parser;
use log::LevelFilter;
use serde_json::Value;

use interview::{
    error::{default_error_handler, Result},
    output, spinner, Confirm, Group, GroupMultiSelect, GroupedOpts, Opt, Select,
    Session, Text,
};

/// CLI arguments for the sample interview.
#[derive(Parser, Debug)]
#[command(author, version, about = "Sample interview built on the interview crate")]
struct Args {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Skip the simulated install step.
    #[arg(long = "skip-install")]
    skip_install: bool,
}

fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    if let Err(err) = run(&args) {
        default_error_handler(err);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut session = Session::new();
    session.on_cancel(|| output::cancel("Interview cancelled. No files were written."));

    output::intro("create-project");

    let results = Group::new(&session)
        .step("name", |session, _| {
            Ok(Text::new("Project name")
                .placeholder("my-app")
                .default_value("my-app")
                .validate(|input| {
                    input.contains(' ').then(|| "No spaces allowed.".to_string())
                })
                .run(session)?
                .into_json())
        })
        .step("flavor", |session, _| {
            Ok(Select::new("Pick a project flavor")
                .option(Opt::new("bin", "Binary"))
                .option(Opt::new("lib", "Library").hint("no main.rs"))
                .run(session)?
                .into_json())
        })
        .step("tools", |session, _| {
            Ok(GroupMultiSelect::new("Select tooling")
                .options(
                    GroupedOpts::new()
                        .group(
                            "lint",
                            vec![Opt::of("clippy"), Opt::of("rustfmt")],
                        )
                        .group("test", vec![Opt::of("nextest")]),
                )
                .initial_values(vec!["clippy", "rustfmt"])
                .run(session)?
                .into_json())
        })
        .step("install", |session, results| {
            let name =
                results.get("name").and_then(Value::as_str).unwrap_or("the project");
            Ok(Confirm::new(format!("Install dependencies for {name}?"))
                .run(session)?
                .into_json())
        })
        .on_cancel(|partial| {
            output::log::warn(&format!(
                "Continuing with {} answer(s) so far.",
                partial.len()
            ));
        })
        .run()?;

    log::debug!("collected answers: {}", results.to_json());

    if !args.skip_install
        && results.get("install").and_then(Value::as_bool).unwrap_or(false)
    {
        let mut spin = spinner();
        spin.start("Installing dependencies");
        std::thread::sleep(std::time::Duration::from_millis(1500));
        spin.stop("Dependencies installed.");
    }

    let name = results.get("name").and_then(Value::as_str).unwrap_or("my-app");
    output::note(&format!("cd {name}\ncargo run"), "Next steps");
    output::outro("Done. Happy hacking!");

    Ok(())
}
