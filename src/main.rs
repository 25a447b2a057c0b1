use clap::Parser;
use colored::Colorize;

use msfpat::{offset, pattern};

#[derive(Parser)]
#[command(
    name = "msfpat",
    about = "Cyclic pattern generator & offset finder (Metasploit style)"
)]
struct Cli {
    /// Length of the pattern to generate/search
    length: usize,

    /// Find offset of VALUE inside a pattern
    #[arg(short, long, value_name = "VALUE")]
    query: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let Some(query) = cli.query else {
        println!("{}", pattern::generate(cli.length));
        return;
    };

    match offset::find(&query, cli.length) {
        Ok(offsets) => report(&offsets),
        Err(e) => {
            println!("{} {}", "[x]".red(), e);
            std::process::exit(1);
        }
    }
}

fn report(offsets: &[usize]) {
    match offsets {
        [] => println!("{} Value not found in the pattern.", "[x]".red()),
        [only] => println!("{} Found 1 occurrence at offset: {}", "[*]".green(), only),
        _ => {
            let joined = offsets
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "{} Found {} occurrences at offsets: {}",
                "[*]".green(),
                offsets.len(),
                joined
            );
        }
    }
}
