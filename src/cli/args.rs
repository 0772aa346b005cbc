//! Command line arguments
//!
//! Flags are single-dash and case-insensitive (`-add`, `-ADD`); `--help`,
//! `--add` and `--version` are also accepted.
//! They are first rewritten into canonical `--long` form, then parsed with
//! clap. Operations run in the order they were given.

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::config::paths::DEFAULT_CONFIG_FILE;
use crate::error::{BdError, BdResult};

/// Command line interface for bd
#[derive(Parser, Debug)]
#[command(
    name = "bd",
    version,
    about = "Keep track of upcoming birthdays",
    long_about = "Lists birthdays from a flat text file, soonest first, with a countdown \
                  and the age each person is about to turn. Records can be added and \
                  removed; the list is always printed last.",
    override_usage = "bd [-h] [-config ~/.bd.conf] [[-add dd/mm/yyyy \"name\" | -remove \"name\"] ...]"
)]
pub struct Cli {
    /// Use configuration file for the operations that follow
    #[arg(
        long,
        value_name = "FILE",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub config: Vec<String>,

    /// Config file in effect before any `-config`
    #[arg(hide = true, env = "BD_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub base_config: String,

    /// Add a birthday on dd/mm/yyyy for name
    #[arg(
        long,
        num_args = 2,
        value_names = ["DD/MM/YYYY", "NAME"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub add: Vec<String>,

    /// Remove a birthday for name
    #[arg(
        long,
        visible_alias = "delete",
        value_name = "NAME",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub remove: Vec<String>,
}

/// A single step requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Switch the config file for the steps after it
    Config { path: String },
    Add { date: String, name: String },
    Remove { name: String },
}

/// Everything one run of the program has to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Raw config path before any `-config`, `~` not yet expanded
    pub config: String,
    /// Steps in command line order
    pub operations: Vec<Operation>,
}

impl Invocation {
    /// Build an invocation from parsed matches, restoring command line order
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let cli = Cli::from_arg_matches(matches)?;
        let mut ordered: Vec<(usize, Operation)> = Vec::new();

        if let Some(indices) = matches.indices_of("config") {
            for (path, index) in cli.config.iter().zip(indices) {
                ordered.push((index, Operation::Config { path: path.clone() }));
            }
        }

        if let Some(indices) = matches.indices_of("add") {
            let indices: Vec<usize> = indices.collect();
            for (pair, index) in cli.add.chunks(2).zip(indices.iter().step_by(2)) {
                if let [date, name] = pair {
                    ordered.push((
                        *index,
                        Operation::Add {
                            date: date.clone(),
                            name: name.clone(),
                        },
                    ));
                }
            }
        }

        if let Some(indices) = matches.indices_of("remove") {
            for (name, index) in cli.remove.iter().zip(indices) {
                ordered.push((index, Operation::Remove { name: name.clone() }));
            }
        }

        ordered.sort_by_key(|(index, _)| *index);

        Ok(Self {
            config: cli.base_config,
            operations: ordered.into_iter().map(|(_, op)| op).collect(),
        })
    }

    /// Raw config path in effect after every step, used for the final list
    pub fn final_config(&self) -> &str {
        self.operations
            .iter()
            .rev()
            .find_map(|op| match op {
                Operation::Config { path } => Some(path.as_str()),
                _ => None,
            })
            .unwrap_or(&self.config)
    }
}

/// Rewrite flags into the canonical form clap understands
///
/// Unknown flags and missing flag arguments are reported here, before any
/// operation runs. The first item is the program name and is passed through.
pub fn normalize_args<I, T>(args: I) -> BdResult<Vec<String>>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized = vec![args.next().unwrap_or_else(|| "bd".to_string())];

    while let Some(arg) = args.next() {
        match arg.to_lowercase().as_str() {
            "-h" | "-help" | "--help" => normalized.push("--help".into()),
            "-v" | "--version" => normalized.push("--version".into()),
            "-config" => {
                let path = args
                    .next()
                    .ok_or_else(|| BdError::Argument("Missing configuration filename".into()))?;
                normalized.extend(["--config".to_string(), path]);
            }
            "-add" | "--add" => {
                let missing = || BdError::Argument("Missing birthday or name to add".into());
                let date = args.next().ok_or_else(missing)?;
                let name = args.next().ok_or_else(missing)?;
                normalized.extend(["--add".to_string(), date, name]);
            }
            "-remove" | "-delete" => {
                let name = args
                    .next()
                    .ok_or_else(|| BdError::Argument("Missing name to remove".into()))?;
                normalized.extend(["--remove".to_string(), name]);
            }
            _ => {
                return Err(BdError::Argument(format!(
                    "Unknown command line option: {}",
                    arg
                )))
            }
        }
    }

    Ok(normalized)
}

/// Outcome of argument parsing
#[derive(Debug)]
pub enum ParsedArgs {
    /// Run the invocation
    Run(Invocation),
    /// Help or version text to print before exiting successfully
    Info(String),
}

/// Normalise and parse the full argument list (program name first)
pub fn parse_args<I, T>(args: I) -> BdResult<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let normalized = normalize_args(args)?;

    let matches = match Cli::command().try_get_matches_from(normalized) {
        Ok(matches) => matches,
        Err(err) => return clap_outcome(err),
    };

    match Invocation::from_matches(&matches) {
        Ok(invocation) => Ok(ParsedArgs::Run(invocation)),
        Err(err) => clap_outcome(err),
    }
}

fn clap_outcome(err: clap::Error) -> BdResult<ParsedArgs> {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(ParsedArgs::Info(err.to_string())),
        _ => {
            let rendered = err.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            Err(BdError::Argument(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Invocation {
        let mut full = vec!["bd"];
        full.extend_from_slice(args);
        match parse_args(full).unwrap() {
            ParsedArgs::Run(invocation) => invocation,
            ParsedArgs::Info(text) => panic!("unexpected info output: {text}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let invocation = run(&[]);
        assert!(invocation.operations.is_empty());
    }

    #[test]
    fn test_case_insensitive_flags() {
        let invocation = run(&["-CONFIG", "/tmp/bd.conf", "-Add", "15/06/1990", "Alice"]);
        assert_eq!(invocation.final_config(), "/tmp/bd.conf");
        assert_eq!(
            invocation.operations,
            vec![
                Operation::Config {
                    path: "/tmp/bd.conf".into()
                },
                Operation::Add {
                    date: "15/06/1990".into(),
                    name: "Alice".into()
                },
            ]
        );
    }

    #[test]
    fn test_operations_keep_order() {
        let invocation = run(&[
            "-remove", "Bob", "-add", "15/06/1990", "Alice", "-delete", "carol", "--add",
            "01/01/1970", "Dave",
        ]);

        assert_eq!(
            invocation.operations,
            vec![
                Operation::Remove { name: "Bob".into() },
                Operation::Add {
                    date: "15/06/1990".into(),
                    name: "Alice".into()
                },
                Operation::Remove {
                    name: "carol".into()
                },
                Operation::Add {
                    date: "01/01/1970".into(),
                    name: "Dave".into()
                },
            ]
        );
    }

    #[test]
    fn test_last_config_is_listed() {
        let invocation = run(&["-config", "a.conf", "-config", "b.conf"]);
        assert_eq!(invocation.final_config(), "b.conf");
    }

    #[test]
    fn test_config_applies_from_where_it_appears() {
        let invocation = run(&[
            "-add", "01/01/1990", "A", "-config", "other.conf", "-remove", "B",
        ]);

        assert_eq!(
            invocation.operations,
            vec![
                Operation::Add {
                    date: "01/01/1990".into(),
                    name: "A".into()
                },
                Operation::Config {
                    path: "other.conf".into()
                },
                Operation::Remove { name: "B".into() },
            ]
        );
        assert_eq!(invocation.final_config(), "other.conf");
    }

    #[test]
    fn test_without_config_flag_uses_base() {
        let invocation = run(&["-add", "01/01/1990", "A"]);
        assert_eq!(invocation.final_config(), invocation.config);
        assert!(!invocation.config.is_empty());
    }

    #[test]
    fn test_undocumented_spellings_rejected() {
        for flag in ["--config", "--remove", "--delete", "-version"] {
            let err = parse_args(["bd", flag, "x"]).unwrap_err();
            assert_eq!(err.to_string(), format!("Unknown command line option: {}", flag));
        }
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-V", "-v", "--version"] {
            let parsed = parse_args(["bd", flag]).unwrap();
            assert!(matches!(parsed, ParsedArgs::Info(_)), "{flag}");
        }
    }

    #[test]
    fn test_hyphenated_values() {
        let invocation = run(&["-remove", "-Zed-"]);
        assert_eq!(
            invocation.operations,
            vec![Operation::Remove {
                name: "-Zed-".into()
            }]
        );
    }

    #[test]
    fn test_help_variants() {
        for flag in ["-h", "-help", "--help", "-HELP"] {
            let parsed = parse_args(["bd", flag]).unwrap();
            match parsed {
                ParsedArgs::Info(text) => assert!(text.contains("-config"), "{flag}"),
                ParsedArgs::Run(_) => panic!("{flag} should print help"),
            }
        }
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_args(["bd", "-frobnicate"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command line option: -frobnicate");
    }

    #[test]
    fn test_missing_arguments() {
        let err = parse_args(["bd", "-config"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration filename");

        let err = parse_args(["bd", "-add", "15/06/1990"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing birthday or name to add");

        let err = parse_args(["bd", "-remove"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing name to remove");
    }
}
