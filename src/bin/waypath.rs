use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "waypath", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Migrate a document to the current save-file version.
    Migrate(MigrateArgs),
    /// Validate a document against the schema of its declared version.
    Validate(ValidateArgs),
    /// Emit a Java constants class naming every trajectory in a document.
    GenNames(GenNamesArgs),
}

#[derive(Parser, Debug)]
struct MigrateArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct GenNamesArgs {
    /// Input document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Java package for the generated class.
    #[arg(long)]
    package: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Migrate(args) => cmd_migrate(args),
        Command::Validate(args) => cmd_validate(args),
        Command::GenNames(args) => cmd_gen_names(args),
    }
}

fn read_document_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open document '{}'", path.display()))?;
    let r = BufReader::new(f);
    let value = serde_json::from_reader(r).with_context(|| "parse document JSON")?;
    Ok(value)
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_migrate(args: MigrateArgs) -> anyhow::Result<()> {
    let value = read_document_json(&args.in_path)?;
    let doc = waypath::open_document(&value)?;
    let saved = waypath::to_save_value(&doc)?;
    let text = serde_json::to_string_pretty(&saved).with_context(|| "serialize document")?;
    write_output(args.out.as_deref(), &text)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let value = read_document_json(&args.in_path)?;
    if waypath::validate(&value) {
        eprintln!("{}: valid", args.in_path.display());
        Ok(())
    } else {
        Err(waypath::WaypathError::validation(format!(
            "{} does not match the schema of its declared version",
            args.in_path.display()
        ))
        .into())
    }
}

fn cmd_gen_names(args: GenNamesArgs) -> anyhow::Result<()> {
    let value = read_document_json(&args.in_path)?;
    let doc = waypath::open_document(&value)?;
    let names = doc.paths.keys().map(String::as_str);
    let source = waypath::gen_traj_names_file(names, &args.package);
    write_output(args.out.as_deref(), &source)
}
