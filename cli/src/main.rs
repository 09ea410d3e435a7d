//! lawmd CLI - statute PDF to Markdown converter

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use lawmd::{
    open_source, ConvertOptions, Error, ExtractOptions, FrontMatter, NoiseFilter, PageSelection,
    DEFAULT_STAMP,
};

#[derive(Parser)]
#[command(name = "lawmd")]
#[command(version)]
#[command(about = "Convert statute PDFs to structured Markdown", long_about = None)]
struct Cli {
    /// Input PDF (or form-feed paged .txt) file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output Markdown file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Markdown
    Convert(ConvertArgs),

    /// Show document information
    Info {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output Markdown file
    #[arg(short, long, value_name = "FILE", env = "LAWMD_OUTPUT")]
    output: Option<PathBuf>,

    /// Front matter title
    #[arg(long, env = "LAWMD_TITLE")]
    title: Option<String>,

    /// Front matter source attribution
    #[arg(long, env = "LAWMD_SOURCE")]
    source: Option<String>,

    /// Front matter document type
    #[arg(long)]
    doc_type: Option<String>,

    /// Publisher stamp removed from every page
    #[arg(long, value_name = "FRAGMENT", default_value = DEFAULT_STAMP)]
    stamp: String,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Log progress every N pages
    #[arg(long, value_name = "N", default_value_t = lawmd::source::DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u32,

    /// Print conversion statistics as JSON
    #[arg(long)]
    stats: bool,
}

impl ConvertArgs {
    fn with_input(input: PathBuf, output: Option<PathBuf>) -> Self {
        Self {
            input,
            output: output.or_else(|| std::env::var_os("LAWMD_OUTPUT").map(PathBuf::from)),
            title: None,
            source: None,
            doc_type: None,
            stamp: DEFAULT_STAMP.to_string(),
            pages: None,
            progress_interval: lawmd::source::DEFAULT_PROGRESS_INTERVAL,
            stats: false,
        }
    }

    fn options(&self) -> Result<ConvertOptions, Box<dyn std::error::Error>> {
        let pages = match self.pages.as_deref() {
            Some(p) => PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?,
            None => PageSelection::All,
        };
        let extract = ExtractOptions::new()
            .with_pages(pages)
            .with_progress_interval(self.progress_interval);

        let mut front_matter = FrontMatter::default();
        if let Some(ref title) = self.title {
            front_matter = front_matter.with_title(title);
        }
        if let Some(ref source) = self.source {
            front_matter = front_matter.with_source(source);
        }
        if let Some(ref doc_type) = self.doc_type {
            front_matter = front_matter.with_doc_type(doc_type);
        }

        Ok(ConvertOptions::new()
            .with_extract_options(extract)
            .with_noise_filter(NoiseFilter::with_stamp(&self.stamp))
            .with_front_matter(front_matter))
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let stem = self.input.file_stem().unwrap_or_default().to_string_lossy();
            PathBuf::from(format!("{}.md", stem))
        })
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert(args)) => cmd_convert(&args),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&ConvertArgs::with_input(input, cli.output))
            } else {
                println!("{}", "Usage: lawmd <INPUT> [OUTPUT]".yellow());
                println!("       lawmd --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if let Some(Error::MissingInput(_)) = e.downcast_ref::<Error>() {
            eprintln!(
                "{}",
                "Hint: download the consolidated text from ISAP and pass its path".dimmed()
            );
        }
        std::process::exit(1);
    }
}

fn cmd_convert(args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = args.options()?;
    let output = args.output_path();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting pages...");

    let result = lawmd::convert::convert_file(&args.input, &options, |progress| {
        pb.set_length(u64::from(progress.total));
        pb.set_position(u64::from(progress.page));
    });
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Writing Markdown...");
    lawmd::write_document(&output, &result.content)?;
    pb.finish_with_message("Done!");

    println!(
        "{} {} -> {}",
        "Converted".green().bold(),
        args.input.display(),
        output.display()
    );
    println!(
        "  {} pages, {} noise lines removed, {} structural markers",
        result.stats.pages_extracted,
        result.stats.noise_removed.values().sum::<usize>(),
        result.stats.marker_total()
    );
    for (level, count) in result.stats.marker_counts() {
        if count > 0 {
            println!("    {}: {}", level, count);
        }
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = open_source(input)?;
    let metadata = source.metadata();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), metadata.format);
    println!("{}: {}", "Pages".bold(), metadata.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if metadata.encrypted { "Yes" } else { "No" }
    );
    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref producer) = metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "lawmd".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Statute PDF to Markdown converter");
    println!();
    println!("License: MIT");
}
