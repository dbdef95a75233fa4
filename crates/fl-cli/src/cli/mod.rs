use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fln` binary.
#[derive(Debug, Parser)]
#[command(name = "fln", version, about = "Fieldline - service ticket workflow")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};
    use crate::cli::subcommands::{AuthCommands, TicketCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fln", "--format", "table", "--limit", "10", "--verbose", "ticket", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fln", "ticket", "get", "12", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::Get { id: 12 }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["fln", "--format", "xml", "auth", "status"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["fln", "auth", "status"]).expect("cli should parse");
        assert_eq!(cli.global_flags().color, ColorMode::Auto);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn ticket_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["fln", "ticket", "get", "abc"]).is_err());
    }

    #[test]
    fn assign_requires_target() {
        assert!(Cli::try_parse_from(["fln", "ticket", "assign", "12"]).is_err());
        let cli = Cli::try_parse_from(["fln", "ticket", "assign", "12", "--to", "42"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::Assign { id: 12, to: 42 }
            }
        ));
    }

    #[test]
    fn note_takes_positional_text() {
        let cli = Cli::try_parse_from(["fln", "ticket", "note", "7", "called the customer"])
            .expect("cli should parse");
        match cli.command {
            Commands::Ticket {
                action: TicketCommands::Note { id, text },
            } => {
                assert_eq!(id, 7);
                assert_eq!(text, "called the customer");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
