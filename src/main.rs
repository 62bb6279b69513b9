use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use vcfsplit::config::Config;

#[derive(Parser)]
#[command(
    name = "vcfsplit",
    about = "Split a vCard contact export into one .vcf file per phone number"
)]
struct Cli {
    /// Input contact export (default: from config, contacts.vcf)
    input: Option<PathBuf>,

    /// Output directory (default: from config, formatted_contacts)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Display-name length budget (default: from config, 15)
    #[arg(long)]
    max_name_len: Option<usize>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let default_path = PathBuf::from("vcfsplit.config.json");
        if default_path.is_file() {
            load_config(&default_path)
        } else {
            Config::default()
        }
    };

    // CLI overrides
    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(n) = cli.max_name_len {
        if n < 3 {
            die("max name length must be at least 3");
        }
        config.max_name_len = n;
    }

    let written = vcfsplit::run(&config)
        .unwrap_or_else(|e| die(&format!("cannot split {}: {}", config.input.display(), e)));

    let basename = config
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input.display().to_string());
    eprintln!("Processed {} contacts from {}", written, basename);
}
