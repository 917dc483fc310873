use argbind::derive::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::exit;

#[derive(Debug, Default, ArgumentSchema)]
#[argbind(description = "Copy a file, throttled to a rate.")]
struct Parameters {
    #[argbind(tag = "--source|-s", help = "The file to copy.")]
    source: PathBuf,

    #[argbind(tag = "--destination|-d", help = "Where to copy it.")]
    destination: PathBuf,

    #[argbind(
        tag = "--rate|-r",
        optional,
        help = "Kilobytes per second.\nUnthrottled when absent."
    )]
    rate: Option<Decimal>,

    #[argbind(tag = "--retries", optional)]
    retries: u8,

    #[argbind(tag = "--verbose|-v", optional)]
    verbose: bool,

    #[argbind(tag = "--help|-h", optional, help_flag, help = "Show this help and exit.")]
    help: bool,
}

fn main() {
    let tokens: Vec<String> = std::env::args().skip(1).collect();

    match argbind::parse::<Parameters, _>(&tokens) {
        Ok(parameters) if parameters.help => match argbind::help_text::<Parameters>() {
            Ok(help) => println!("{help}"),
            Err(error) => {
                eprintln!("{error}");
                exit(1);
            }
        },
        Ok(parameters) => println!("{parameters:?}"),
        Err(error) => {
            eprintln!("Bind error: {error}");
            exit(1);
        }
    }
}
