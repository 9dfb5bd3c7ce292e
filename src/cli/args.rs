// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines template source, data, output and logging flags for stencil

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Templates use the handlebars syntax. The context exposed to the template contains:
    data  - The data provided using the -d and -D flags (e.g. {{data.name}})
    env   - Environment variables (e.g. {{env.HOME}})

Run with --functions to list the functions available to templates.";

#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(about = "Render handlebars templates from the command line")]
#[command(version, after_help = AFTER_HELP)]
pub struct Args {
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "template",
        help = "Source template file (- for stdin), defaults to stdin"
    )]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_name = "TEMPLATE", help = "Inline template")]
    pub template: Option<String>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "-",
        help = "Output file (- for stdout)"
    )]
    pub output: String,

    #[arg(
        short,
        long,
        value_name = "PATHS",
        help = "JSON files to load as data, separated with the platform path separator (repeatable)"
    )]
    pub data: Vec<String>,

    #[arg(
        short = 'D',
        long = "data-inline",
        value_name = "JSON",
        help = "Inline JSON object merged into data after the files"
    )]
    pub data_inline: Option<String>,

    #[arg(long, help = "List the available template functions and exit")]
    pub functions: bool,

    #[arg(long, help = "Fail on references to missing data")]
    pub strict: bool,

    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Data files in load order, with every -d value split into its paths.
    pub fn data_paths(&self) -> Vec<PathBuf> {
        self.data
            .iter()
            .flat_map(std::env::split_paths)
            .filter(|path| !path.as_os_str().is_empty())
            .collect()
    }
}
