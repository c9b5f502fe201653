mod context;
mod descriptor;
mod error;
mod expander;
mod placeholder;
mod template;

use anyhow::{Context, Result};
use clap::Parser;
use context::RunContext;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "primgen")]
#[command(about = "Generate one Java source file per primitive type from a template")]
struct Cli {
    /// Template file, e.g. TypeTable.template -> IntTable.java, DoubleTable.java, ...
    template: PathBuf,

    /// Value substituted for $Tool$ (defaults to the program name as invoked)
    #[arg(long)]
    tool: Option<String>,

    /// Value substituted for $Date$ (defaults to the current local time)
    #[arg(long)]
    date: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = RunContext::resolve(cli.tool, cli.date);

    let outputs = expander::generate_all(&cli.template, &ctx)
        .inspect_err(|e| {
            if !e.is_configuration() {
                log::warn!("Generation stopped part way; earlier outputs were kept");
            }
        })
        .with_context(|| format!("Failed to generate sources from {}", cli.template.display()))?;

    log::info!("Generated {} files", outputs.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_template_argument_required() {
        assert!(Cli::try_parse_from(["primgen"]).is_err());
    }

    #[test]
    fn test_overrides_parsed() {
        let cli = Cli::try_parse_from([
            "primgen",
            "TypeTable.template",
            "--tool",
            "gen",
            "--date",
            "today",
        ])
        .unwrap();
        assert_eq!(cli.template, PathBuf::from("TypeTable.template"));
        assert_eq!(cli.tool.as_deref(), Some("gen"));
        assert_eq!(cli.date.as_deref(), Some("today"));
    }
}
