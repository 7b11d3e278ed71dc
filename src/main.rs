use clap::{Parser, Subcommand};
use scanfolio::{output, pair, prompt, viewer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanfolio")]
#[command(about = "Bundle scanned pages and their transcriptions into one HTML viewer")]
#[command(long_about = "\
Bundle scanned pages and their transcriptions into one HTML viewer

Point scanfolio at a directory of JPG scans and a directory of TXT
transcriptions. Files are paired by name, ignoring case:

  escaneos/pagina_001.jpg   <->  transcripciones/pagina_001.txt
  escaneos/PAGINA_002.JPG   <->  transcripciones/pagina_002.txt

The result is a single HTML file with every image and transcription
embedded — side-by-side browsing, keyboard navigation, zoom, and a
draggable divider, all offline and dependency-free.

Files without a same-named counterpart on the other side are skipped.
When --images or --texts is omitted, scanfolio asks for it interactively
(quotes and escaped spaces from drag-and-drop paste are handled).")]
#[command(version)]
struct Cli {
    /// Directory with the scanned JPG pages
    #[arg(long, global = true)]
    images: Option<PathBuf>,

    /// Directory with the TXT transcriptions
    #[arg(long, global = true)]
    texts: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pair pages with transcriptions and write the viewer
    Build {
        /// Output HTML file (".html" is appended if missing)
        #[arg(long, default_value = "viewer.html")]
        output: PathBuf,
    },
    /// List the pairs that would go into the viewer
    Scan {
        /// Print the pair list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the input directories without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let images = resolve_dir(cli.images, "Folder with the scanned JPG pages: ")?;
    let texts = resolve_dir(cli.texts, "Folder with the TXT transcriptions: ")?;

    let records = pair::pair(&images, &texts)?;
    if records.is_empty() {
        eprintln!("No image/text pairs with matching names were found.");
        eprintln!("Image and transcription must share a base name:");
        eprintln!("  pagina_001.jpg  <->  pagina_001.txt");
        std::process::exit(1);
    }

    match cli.command {
        Command::Build { output } => {
            let output = ensure_html_extension(output);
            output::print_pair_preview(&records);

            println!();
            println!("Generating viewer with {} pages...", records.len());
            let total = records.len();
            let bytes = viewer::generate(&records, &output, |i, record| {
                println!("{}", output::page_progress_line(i + 1, total, &record.name));
            })?;

            println!();
            output::print_build_summary(&output, bytes, total);
            println!();
            println!("  Done. Open the file in any browser.");
        }
        Command::Scan { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                output::print_scan_output(&records);
            }
        }
        Command::Check => {
            output::print_pair_preview(&records);
            println!("==> Inputs are valid");
        }
    }

    Ok(())
}

/// Use the flag value when given, otherwise ask interactively.
///
/// A flag pointing at a non-directory is fatal — re-prompting is only for
/// the interactive path, where the operator is present to correct it.
fn resolve_dir(
    arg: Option<PathBuf>,
    message: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match arg {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(format!("'{}' is not a valid directory", dir.display()).into()),
        None => Ok(prompt::ask_directory(message)?),
    }
}

/// Append ".html" unless the name already ends with it.
fn ensure_html_extension(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("html") => path,
        _ => {
            let mut name = path.into_os_string();
            name.push(".html");
            PathBuf::from(name)
        }
    }
}
