use std::io;

use dialoguer::Select;

use crate::cli::io::{dialog_err, print_error, print_info, theme, ConsoleNotifier};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::runner::{run_flow, DialoguerUi, RunOutcome, ScriptUi};
use crate::config::ConfigManager;
use crate::errors::FormError;
use crate::flows::flow_for;
use crate::forms::{FlowKind, SessionContext};
use crate::storage::JsonArchive;
use crate::wizard::{WizardController, WizardSession};

/// When set, prompts are answered from stdin, one line each, and output is
/// kept plain.
pub const SCRIPT_MODE_ENV: &str = "COACH_CORE_CLI_SCRIPT";

const COMMANDS: [&str; 4] = ["run", "list", "help", "version"];

pub fn run_cli() -> Result<(), FormError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<(), FormError> {
    let script_mode = std::env::var_os(SCRIPT_MODE_ENV).is_some();
    if script_mode {
        output::set_preferences(OutputPreferences { plain_mode: true });
    }

    match args.first().map(String::as_str) {
        None => {
            print_usage();
            Ok(())
        }
        Some("run") => run_command(args.get(1).map(String::as_str), script_mode),
        Some("list") => {
            list_flows();
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("version") | Some("--version") => {
            print_info(format!("coach_core {}", env!("CARGO_PKG_VERSION")));
            Ok(())
        }
        Some(other) => {
            match suggest(other, &COMMANDS) {
                Some(near) => print_error(format!("Unknown command `{other}`. Did you mean `{near}`?")),
                None => print_error(format!("Unknown command `{other}`. Try `help`.")),
            }
            Ok(())
        }
    }
}

fn run_command(slug: Option<&str>, script_mode: bool) -> Result<(), FormError> {
    let kind = match slug {
        Some(raw) => match FlowKind::parse(raw) {
            Some(kind) => kind,
            None => {
                let slugs: Vec<&str> = FlowKind::ALL.iter().map(|kind| kind.slug()).collect();
                match suggest(raw, &slugs) {
                    Some(near) => {
                        print_error(format!("Unknown flow `{raw}`. Did you mean `{near}`?"))
                    }
                    None => print_error(format!("Unknown flow `{raw}`. Try `list`.")),
                }
                return Ok(());
            }
        },
        None if script_mode => {
            print_error("Script mode needs a flow, e.g. `run incident-report`.");
            return Ok(());
        }
        None => match choose_flow()? {
            Some(kind) => kind,
            None => {
                print_info("Cancelled.");
                return Ok(());
            }
        },
    };

    let manager = ConfigManager::new()?;
    let mut config = manager.load()?;
    let context = SessionContext::from_config(&config);

    let mut archive = JsonArchive::open_default()?;
    let outcome = {
        let mut notifier = ConsoleNotifier;
        let session = WizardSession::new(flow_for(kind), &context);
        let mut controller = WizardController::new(session, &mut archive, &mut notifier);
        if script_mode {
            let stdin = io::stdin();
            let mut ui = ScriptUi::new(stdin.lock());
            run_flow(&mut controller, &mut ui)?
        } else {
            let mut ui = DialoguerUi::new();
            run_flow(&mut controller, &mut ui)?
        }
    };

    match outcome {
        RunOutcome::Submitted(_) => {
            config.last_flow = Some(kind.slug().to_string());
            manager.save(&config)?;
            print_info(format!(
                "Stored under {}",
                archive.archive_path(kind).display()
            ));
        }
        RunOutcome::Cancelled => print_info("Cancelled. Nothing was submitted."),
    }
    Ok(())
}

fn choose_flow() -> Result<Option<FlowKind>, FormError> {
    let titles: Vec<&str> = FlowKind::ALL.iter().map(|kind| kind.title()).collect();
    let theme = theme();
    let selection = Select::with_theme(&theme)
        .with_prompt("Which form would you like to fill in?")
        .items(&titles)
        .default(0)
        .interact_opt()
        .map_err(dialog_err)?;
    Ok(selection.map(|index| FlowKind::ALL[index]))
}

fn list_flows() {
    for kind in FlowKind::ALL {
        println!("{:<20} {}", kind.slug(), kind.title());
    }
}

fn print_usage() {
    println!("coach_core_cli <command>");
    println!();
    println!("Commands:");
    println!("  run [flow]   Fill in and submit a form (flows listed by `list`)");
    println!("  list         Show the available form flows");
    println!("  help         Show this overview");
    println!("  version      Show the crate version");
    println!();
    println!(
        "Set {SCRIPT_MODE_ENV}=1 to answer prompts from stdin, one line per field."
    );
}

fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .map(|candidate| (strsim::levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_finds_near_misses() {
        assert_eq!(suggest("lst", &COMMANDS), Some("list"));
        assert_eq!(suggest("vesion", &COMMANDS), Some("version"));
        assert_eq!(suggest("completely-different", &COMMANDS), None);
    }
}
