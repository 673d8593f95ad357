use clap::{Parser, Subcommand};
use figgen_client::{FigmaClient, FileMeta};
use figgen_codegen::generate_page;
use figgen_normalize::{document_to_pages, DesignPage};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "figgen")]
#[command(about = "figgen — Figma design to static HTML/CSS generator")]
#[command(version)]
struct Cli {
    /// Figma access token; falls back to the FIGMA_TOKEN environment variable
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download a Figma file and cache its JSON locally
    Fetch {
        /// Figma file key
        file_key: String,

        /// Directory for cached JSON snapshots
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Generate HTML + CSS pages from a cached JSON snapshot
    Generate {
        /// Figma file key
        file_key: String,

        /// Directory holding cached JSON snapshots
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,

        /// Directory for generated pages
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },

    /// Fetch a file and generate its pages in one step
    Build {
        /// Figma file key
        file_key: String,

        /// Directory for generated pages
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let token = cli.token;

    match cli.command {
        Command::Fetch { file_key, data_dir } => {
            cmd_fetch(&file_key, &data_dir, &require_token(token));
        }
        Command::Generate {
            file_key,
            data_dir,
            out_dir,
        } => cmd_generate(&file_key, &data_dir, &out_dir),
        Command::Build { file_key, out_dir } => {
            cmd_build(&file_key, &out_dir, &require_token(token));
        }
    }
}

fn require_token(flag: Option<String>) -> String {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return token;
    }
    match std::env::var("FIGMA_TOKEN") {
        Ok(token) if !token.is_empty() => token,
        _ => {
            eprintln!("Error: no access token; pass --token or set FIGMA_TOKEN");
            std::process::exit(1);
        }
    }
}

fn cmd_fetch(file_key: &str, data_dir: &Path, token: &str) {
    let file = fetch(file_key, token);

    if let Err(e) = std::fs::create_dir_all(data_dir) {
        eprintln!("Error creating {}: {e}", data_dir.display());
        std::process::exit(1);
    }

    let path = data_dir.join(format!("{file_key}.json"));
    let json = match serde_json::to_string_pretty(&file) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing {file_key}: {e}");
            std::process::exit(1);
        }
    };
    write_file(&path, &json);
    eprintln!("Fetched: {}", path.display());
}

fn cmd_generate(file_key: &str, data_dir: &Path, out_dir: &Path) {
    let path = data_dir.join(format!("{file_key}.json"));
    if !path.exists() {
        eprintln!("Error: cached JSON not found: {}", path.display());
        eprintln!("Run `figgen fetch {file_key}` first to download it.");
        std::process::exit(1);
    }

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    let file: serde_json::Value = match serde_json::from_str(&source) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    write_pages(&normalize(&file), out_dir);
}

fn cmd_build(file_key: &str, out_dir: &Path, token: &str) {
    let file = fetch(file_key, token);
    write_pages(&normalize(&file), out_dir);
}

fn fetch(file_key: &str, token: &str) -> serde_json::Value {
    log::info!("fetching Figma file {file_key}");
    let client = FigmaClient::new(token);
    match client.fetch_file(file_key) {
        Ok(file) => {
            let meta = FileMeta::from_file(&file);
            if !meta.name.is_empty() {
                log::info!("fetched \"{}\" (version {})", meta.name, meta.version);
            }
            file
        }
        Err(e) => {
            eprintln!("Fetch error: {e}");
            std::process::exit(1);
        }
    }
}

fn normalize(file: &serde_json::Value) -> Vec<DesignPage> {
    match document_to_pages(file) {
        Ok(pages) => pages,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn write_pages(pages: &[DesignPage], out_dir: &Path) {
    if let Err(e) = std::fs::create_dir_all(out_dir) {
        eprintln!("Error creating {}: {e}", out_dir.display());
        std::process::exit(1);
    }

    for (index, page) in pages.iter().enumerate() {
        let output = generate_page(page);
        let stem = page_file_stem(&page.name);

        write_file(&out_dir.join(format!("{stem}.html")), &output.html);
        write_file(&out_dir.join(format!("{stem}.css")), &output.css);

        // The first page doubles as the index, with its stylesheet under
        // the name the markup links.
        if index == 0 {
            write_file(&out_dir.join("index.html"), &output.html);
            write_file(&out_dir.join("styles.css"), &output.css);
        }
    }

    eprintln!("Generated {} page(s) in {}", pages.len(), out_dir.display());
}

fn write_file(path: &Path, contents: &str) {
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("Error writing {}: {e}", path.display());
        std::process::exit(1);
    }
    log::debug!("wrote {}", path.display());
}

/// Page name → artifact file stem: non-alphanumeric runs become a single
/// `_`, everything lowercased; `page` when nothing remains.
fn page_file_stem(name: &str) -> String {
    let mut stem = String::new();
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch.to_ascii_lowercase());
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    if stem.is_empty() {
        "page".to_string()
    } else {
        stem
    }
}
