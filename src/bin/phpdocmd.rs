//! phpdocmd - Markdown API documentation from phpDocumentor structure.xml

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use phpdocmd::{Generator, Level, Options, load_options};

#[derive(Parser)]
#[command(name = "phpdocmd")]
#[command(version)]
#[command(about = "Generate Markdown API docs from phpDocumentor's structure.xml", long_about = None)]
struct Cli {
    /// structure.xml produced by `phpdoc --template=xml`
    input: PathBuf,

    /// Directory the pages are written to
    #[arg(default_value = ".")]
    output: PathBuf,

    /// Link template; `%c` is replaced by the class file name
    #[arg(long = "lt", value_name = "TEMPLATE")]
    link_template: Option<String>,

    /// Name of the index file (default ApiIndex.md)
    #[arg(long, value_name = "NAME")]
    index: Option<String>,

    /// Page granularity: `class`, or `component` for one page per member
    #[arg(long, value_name = "LEVEL")]
    level: Option<Level>,

    /// Sort the API index and class members
    #[arg(long)]
    sort_index: bool,

    /// Sort "see also" references
    #[arg(long)]
    sort_see: bool,

    /// Hide public members
    #[arg(long)]
    public_off: bool,

    /// Hide protected members
    #[arg(long)]
    protected_off: bool,

    /// Hide private members
    #[arg(long)]
    private_off: bool,

    /// JSON options file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => Options::default(),
        };

        if let Some(template) = &self.link_template {
            options.link_template = template.clone();
        }
        if let Some(index) = &self.index {
            options.index_file = index.clone();
        }
        if let Some(level) = self.level {
            options.level = level;
        }
        options.sort_index |= self.sort_index;
        options.sort_see |= self.sort_see;
        options.hide_public |= self.public_off;
        options.hide_protected |= self.protected_off;
        options.hide_private |= self.private_off;
        Ok(options)
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("phpdocmd={default_level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options()?;
    let report = Generator::new(options)
        .run(&cli.input, &cli.output)
        .with_context(|| format!("failed to generate documentation from {}", cli.input.display()))?;

    println!(
        "Wrote {} class pages, {} member pages and {} function pages to {}",
        report.class_pages,
        report.component_pages,
        report.function_pages,
        cli.output.display()
    );
    Ok(())
}
