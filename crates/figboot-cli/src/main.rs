use clap::{Parser, Subcommand};
use figboot_codegen::page::{page_file_name, render_page, STYLESHEET_FILE};
use figboot_codegen::ConvertOptions;
use figboot_tree::{DesignNode, TreeError};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figboot")]
#[command(about = "figboot — design-tool JSON to Bootstrap HTML transpiler")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a design document to an HTML page + stylesheet
    Build {
        /// Input .json file (`-` for stdin)
        path: String,

        /// Convert only the node with this id
        #[arg(long)]
        node: Option<String>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Page title (defaults to the node name)
        #[arg(long)]
        title: Option<String>,

        /// The page lives one directory below the stylesheet
        #[arg(long)]
        nested: bool,
    },

    /// Load and convert a design document without writing output
    Check {
        /// Input .json file (`-` for stdin)
        path: String,

        /// Check only the node with this id
        #[arg(long)]
        node: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("file not found: {0}")]
    NotFound(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Build {
            path,
            node,
            out,
            title,
            nested,
        } => cmd_build(&path, node.as_deref(), &out, title, nested),
        Command::Check { path, node } => cmd_check(&path, node.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_source(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| CliError::Io {
                path: "<stdin>".into(),
                source,
            })?;
        return Ok(source);
    }

    let p = Path::new(path);
    if !p.exists() {
        return Err(CliError::NotFound(path.to_string()));
    }
    std::fs::read_to_string(p).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })
}

fn load(path: &str, node: Option<&str>) -> Result<DesignNode, CliError> {
    let source = read_source(path)?;
    let root = figboot_tree::load_root(&source, node)?;
    log::info!("loaded '{}' ({} nodes)", root.name, root.node_count());
    Ok(root)
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn cmd_build(
    path: &str,
    node: Option<&str>,
    out: &Path,
    title: Option<String>,
    nested: bool,
) -> Result<(), CliError> {
    let root = load(path, node)?;
    let output = figboot_codegen::compile(Some(&root));

    let options = ConvertOptions {
        title: title.unwrap_or_else(|| root.name.clone()),
        top_level: !nested,
    };

    let css_dir = stylesheet_dir(out, nested);
    for dir in [out, css_dir.as_path()] {
        std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
            path: dir.display().to_string(),
            source,
        })?;
    }

    let html_path = out.join(page_file_name(&root.name));
    let css_path = css_dir.join(STYLESHEET_FILE);

    write_file(&html_path, &render_page(&output, &options))?;
    write_file(&css_path, &output.css)?;

    eprintln!("Built: {}", html_path.display());
    eprintln!("Built: {} ({} rules)", css_path.display(), output.rule_count);
    Ok(())
}

/// Directory the stylesheet is written to; must agree with
/// `stylesheet_href(!nested)` as seen from a page in `out`.
fn stylesheet_dir(out: &Path, nested: bool) -> PathBuf {
    if nested {
        out.join("..")
    } else {
        out.to_path_buf()
    }
}

fn cmd_check(path: &str, node: Option<&str>) -> Result<(), CliError> {
    let root = load(path, node)?;
    let output = figboot_codegen::compile(Some(&root));

    eprintln!(
        "OK: {path} ({} nodes, {} style rules)",
        root.node_count(),
        output.rule_count
    );
    Ok(())
}
