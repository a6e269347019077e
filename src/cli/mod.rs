//! Terminal host for the meal list and its edit form.

pub mod output;
pub mod prompts;
pub mod shell;
pub mod view;

use thiserror::Error;

use crate::{
    config::ConfigManager,
    errors::{ConfigError, StorageError},
    form::FormError,
    list::{ListError, MealList},
    storage::JsonStorage,
    time::{CreationTimeFormatter, SystemClock},
};

pub use prompts::{DialoguerPrompter, Prompter, ScriptedAnswer, ScriptedPrompter};
pub use shell::{print_meals, run_form_session, run_shell, ShellContext};
pub use view::TerminalFormView;

pub const USAGE: &str = "Usage: food_tracker [list | --version | --help]";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("unrecognised argument `{0}`")]
    Usage(String),
    #[error("scripted input: {0}")]
    Script(String),
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interactive,
    List,
    Version,
    Help,
}

impl Command {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CommandError> {
        let mut args = args.into_iter();
        let command = match args.next().as_deref() {
            None => Command::Interactive,
            Some("list") => Command::List,
            Some("--version") | Some("-V") => Command::Version,
            Some("--help") | Some("-h") => Command::Help,
            Some(other) => return Err(CommandError::Usage(other.to_string())),
        };
        match args.next() {
            Some(extra) => Err(CommandError::Usage(extra)),
            None => Ok(command),
        }
    }
}

/// Entry point used by the `food_tracker` binary.
pub fn run_cli(args: impl IntoIterator<Item = String>) -> Result<(), CommandError> {
    let command = Command::parse(args)?;
    match command {
        Command::Version => {
            println!("food_tracker {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Interactive | Command::List => {}
    }

    let manager = ConfigManager::new();
    let config = manager.load()?;
    let storage = JsonStorage::from_config(&config, manager.base_dir());
    tracing::debug!(archive = %storage.path().display(), "Opening meal archive.");
    let mut list = MealList::open(storage)?;

    if command == Command::List {
        print_meals(&list);
        return Ok(());
    }

    let formatter = CreationTimeFormatter::new(config.timestamp_format);
    let mut prompter = DialoguerPrompter::new();
    let mut context = ShellContext {
        prompter: &mut prompter,
        clock: &SystemClock,
        formatter: &formatter,
    };
    run_shell(&mut list, &mut context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parse_recognises_commands() {
        assert_eq!(Command::parse(args(&[])).unwrap(), Command::Interactive);
        assert_eq!(Command::parse(args(&["list"])).unwrap(), Command::List);
        assert_eq!(Command::parse(args(&["-V"])).unwrap(), Command::Version);
        assert_eq!(Command::parse(args(&["--help"])).unwrap(), Command::Help);
    }

    #[test]
    fn parse_rejects_unknown_and_extra_arguments() {
        assert!(matches!(
            Command::parse(args(&["export"])),
            Err(CommandError::Usage(arg)) if arg == "export"
        ));
        assert!(matches!(
            Command::parse(args(&["list", "now"])),
            Err(CommandError::Usage(arg)) if arg == "now"
        ));
    }
}
