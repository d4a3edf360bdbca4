use clap::{Parser, ValueEnum};

/// Search the web as you type from the terminal.
#[derive(Debug, Parser)]
#[command(name = "sayt", version, about)]
pub struct CliArgs {
    /// Query text to start with.
    pub query: Option<String>,

    /// Suggestion provider (builtin name, or `custom` as defined in the
    /// config file).
    #[arg(long, env = "SAYT_PROVIDER")]
    pub provider: Option<String>,

    /// Title shown next to the query prompt.
    #[arg(long)]
    pub title: Option<String>,

    /// Output format for the accepted selection.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Print the builtin provider names and exit.
    #[arg(long)]
    pub list_providers: bool,

    /// Print the effective configuration before starting.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn positional_query_and_provider_parse() {
        let cli = CliArgs::parse_from(["sayt", "--provider", "ecosia", "rust async"]);
        assert_eq!(cli.query.as_deref(), Some("rust async"));
        assert_eq!(cli.provider.as_deref(), Some("ecosia"));
        assert_eq!(cli.output, OutputFormat::Plain);
    }
}
