//! harvardcv CLI - Harvard-style CV renderer

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use harvardcv::{
    generate_preview, generate_word, BlockKind, Classifier, DirectorySink, Error, JsonFormat,
    LineRole, Locale, Notice, NoticeLevel, RenderOptions, ResumeRecord,
};

#[derive(Parser)]
#[command(name = "harvardcv")]
#[command(version)]
#[command(about = "Render Harvard-style CVs to HTML and Word documents", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every rendering command.
#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// Render options file (JSON)
    #[arg(long, global = true, env = "HARVARDCV_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Locale for section titles and dates (en, es)
    #[arg(long, global = true, env = "HARVARDCV_LOCALE")]
    locale: Option<String>,

    /// Append the name and generation date at the bottom
    #[arg(long, global = true, env = "HARVARDCV_FOOTER")]
    footer: bool,

    /// File name prefix for exported documents
    #[arg(long, global = true, env = "HARVARDCV_PREFIX")]
    prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the HTML preview fragment
    Preview {
        /// Input record (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export the Word-compatible document
    #[command(alias = "doc")]
    Word {
        /// Input record (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },

    /// Dump the rendered document tree as JSON
    Json {
        /// Input record (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the role assigned to each line of a block
    Classify {
        /// Block the lines belong to (education, experience, skills)
        #[arg(short, long, value_parser = parse_block)]
        block: BlockKind,

        /// Text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print the classified lines as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show record information
    Info {
        /// Input record (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Write a sample record
    Example {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn parse_block(s: &str) -> Result<BlockKind, String> {
    BlockKind::parse(s).ok_or_else(|| {
        format!(
            "unknown block '{}' (expected education, experience or skills)",
            s
        )
    })
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Preview { input, output } => cmd_preview(&cli.config, &input, output.as_deref()),
        Commands::Word { input, output } => cmd_word(&cli.config, &input, &output),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&cli.config, &input, output.as_deref(), compact),
        Commands::Classify { block, input, json } => {
            cmd_classify(&cli.config, block, input.as_deref(), json)
        }
        Commands::Info { input } => cmd_info(&cli.config, &input),
        Commands::Example { output } => cmd_example(output.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        report(e.as_ref());
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn report(e: &(dyn std::error::Error + 'static)) {
    match e.downcast_ref::<Error>().map(Notice::from_error) {
        Some(notice) if notice.level == NoticeLevel::Warning => {
            eprintln!("{}: {} ({})", "Warning".yellow().bold(), notice.message, e);
        }
        _ => eprintln!("{}: {}", "Error".red().bold(), e),
    }
}

/// Build render options from the config file, then apply flag overrides.
fn build_options(config: &ConfigArgs) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = match &config.config {
        Some(path) => {
            log::debug!("Loading render options from {}", path.display());
            RenderOptions::from_json_file(path)?
        }
        None => RenderOptions::default(),
    };

    if let Some(ref tag) = config.locale {
        let locale = Locale::parse(tag)
            .ok_or_else(|| Error::Other(format!("Unsupported locale: {}", tag)))?;
        options = options.with_locale(locale);
    }
    if config.footer {
        options = options.with_footer(true);
    }
    if let Some(ref prefix) = config.prefix {
        options = options.with_file_prefix(prefix.as_str());
    }

    Ok(options)
}

/// Load a record the way the form submits it, with every field trimmed.
fn load(input: &Path) -> Result<ResumeRecord, Error> {
    Ok(harvardcv::load_record(input)?.trimmed())
}

fn write_or_print(output: Option<&Path>, content: &str) -> CmdResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_preview(config: &ConfigArgs, input: &Path, output: Option<&Path>) -> CmdResult {
    let options = build_options(config)?;
    let record = load(input)?;
    let html = generate_preview(&record, &options)?;
    write_or_print(output, &html)
}

fn cmd_word(config: &ConfigArgs, input: &Path, output: &Path) -> CmdResult {
    let options = build_options(config)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));

    pb.set_message("Loading record...");
    let record = load(input)?;

    pb.set_message("Generating document...");
    let mut sink = DirectorySink::new(output);
    let result = generate_word(&record, &options, &mut sink);
    pb.finish_and_clear();
    let result = result?;

    let notice = Notice::success("Word document generated successfully.");
    println!("{}", notice.message.green().bold());
    println!(
        "  {} {} ({} bytes, {})",
        "└─".dimmed(),
        sink.dir().join(&result.file_name).display(),
        result.size,
        result.mime_type
    );

    Ok(())
}

fn cmd_json(config: &ConfigArgs, input: &Path, output: Option<&Path>, compact: bool) -> CmdResult {
    let options = build_options(config)?;
    let record = load(input)?;
    record.validate()?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let doc = harvardcv::render::render(&record, &options);
    let json = harvardcv::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn cmd_classify(
    config: &ConfigArgs,
    block: BlockKind,
    input: Option<&Path>,
    json: bool,
) -> CmdResult {
    let options = build_options(config)?;
    let text = read_input(input)?;

    let classifier = Classifier::new(&options.institution_keywords);
    let lines = classifier.classify_block(block, &text);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    for line in &lines {
        let role = format!("{:<16}", line.role.as_str());
        let role = match line.role {
            LineRole::Institution => role.blue(),
            LineRole::DateRange => role.magenta(),
            LineRole::BulletItem => role.green(),
            LineRole::CategoryContent => role.yellow(),
            LineRole::Heading => role.bold(),
            LineRole::Plain => role.dimmed(),
        };
        println!("{} {}", role, line.plain_text());
    }

    Ok(())
}

fn cmd_info(config: &ConfigArgs, input: &Path) -> CmdResult {
    let options = build_options(config)?;
    let record = load(input)?;

    println!("{}", "Record Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    for field in harvardcv::Field::ALL {
        let status = if record.has(field) {
            "set".green()
        } else if field.is_required() {
            "missing".red()
        } else {
            "empty".dimmed()
        };
        println!("{}: {}", field.label().bold(), status);
    }

    if record.has(harvardcv::Field::Email) && !record.has_valid_email() {
        println!("{}: email address looks malformed", "Warning".yellow().bold());
    }

    if !record.missing_required().is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let doc = harvardcv::render::render(&record, &options);
    for section in &doc.sections {
        let lines = section.lines().len();
        if lines == 0 {
            println!("{}: paragraph", section.title.bold());
        } else {
            println!("{}: {} lines", section.title.bold(), lines);
        }
    }
    println!("{}: {}", "Contact lines".bold(), doc.contact.len());

    let file_name = harvardcv::filename::file_name(
        &record.name,
        options
            .generated_on
            .unwrap_or_else(harvardcv::export::today),
        &options.file_prefix,
        options.max_file_name_length,
    );
    println!("{}: {}", "File name".bold(), file_name);

    Ok(())
}

fn cmd_example(output: Option<&Path>) -> CmdResult {
    let json = ResumeRecord::example().to_json()?;
    write_or_print(output, &json)
}

fn cmd_version() {
    println!("{} {}", "harvardcv".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Harvard-style CV renderer");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_overrides() {
        let config = ConfigArgs {
            config: None,
            locale: Some("es-ES".to_string()),
            footer: true,
            prefix: Some("Resume".to_string()),
        };
        let options = build_options(&config).unwrap();
        assert_eq!(options.locale, Locale::Es);
        assert!(options.footer_enabled);
        assert_eq!(options.file_prefix, "Resume");
    }

    #[test]
    fn test_build_options_rejects_unknown_locale() {
        let config = ConfigArgs {
            locale: Some("fr".to_string()),
            ..Default::default()
        };
        let err = build_options(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Other(_))));
    }

    #[test]
    fn test_build_options_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"locale": "es", "file_prefix": "Curriculum"}"#).unwrap();

        let config = ConfigArgs {
            config: Some(path),
            ..Default::default()
        };
        let options = build_options(&config).unwrap();
        assert_eq!(options.locale, Locale::Es);
        assert_eq!(options.file_prefix, "Curriculum");
        assert!(!options.footer_enabled);
    }

    #[test]
    fn test_example_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        cmd_example(Some(&path)).unwrap();

        let record = harvardcv::load_record(&path).unwrap();
        assert_eq!(record, ResumeRecord::example());
    }

    #[test]
    fn test_word_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cv.json");
        cmd_example(Some(&input)).unwrap();

        let out = dir.path().join("out");
        cmd_word(&ConfigArgs::default(), &input, &out).unwrap();

        let files: Vec<_> = fs::read_dir(&out).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_load_trims_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.json");
        fs::write(
            &path,
            r#"{"nombre": "  Ana Pérez ", "email": " ana@example.com\n", "habilidades": "\nRust\n"}"#,
        )
        .unwrap();

        let record = load(&path).unwrap();
        assert_eq!(record.name, "Ana Pérez");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.skills, "Rust");
    }

    #[test]
    fn test_block_names() {
        assert_eq!(parse_block("education"), Ok(BlockKind::Education));
        assert_eq!(parse_block("Experiencia"), Ok(BlockKind::Experience));
        assert!(parse_block("hobbies").is_err());

        let cli = Cli::try_parse_from(["harvardcv", "classify", "-b", "habilidades"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Classify {
                block: BlockKind::Skills,
                ..
            }
        ));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["harvardcv", "--locale", "es", "word", "cv.json"]).unwrap();
        assert_eq!(cli.config.locale.as_deref(), Some("es"));
        assert!(matches!(cli.command, Commands::Word { .. }));
    }
}
