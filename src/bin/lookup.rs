//! phonedat: CLI for looking up carrier and region info of a phone number.

use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "phonedat")]
#[command(version = "0.1.0")]
#[command(about = "Look up carrier and region info for a Chinese phone number", long_about = None)]
struct Cli {
    /// Phone number to look up, without country code
    phone: String,

    /// Path to the phone.dat dataset file
    #[arg(short, long, default_value = "phone.dat")]
    data: PathBuf,

    /// Print the record as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let parser = match phonedat::Parser::open(&cli.data) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: cannot load dataset {:?}: {}", cli.data, e);
            process::exit(1);
        }
    };

    log::debug!(
        "Loaded dataset version {} with {} index entries",
        parser.version(),
        parser.entry_count()
    );

    match parser.find(&cli.phone) {
        Ok(record) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&record).expect("serialize record")
                );
            } else {
                print!("{}", record);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
