use std::process;

use anyhow::Context;
use clap::Parser;

use genpass::charset::{self, Alphabet};

mod report;
mod table;

/// Generate a random password from a cryptographically secure source.
///
/// With no charset flags, lowercase, uppercase, digits and `!@#$%^&*()_` are all used.
#[derive(Parser)]
#[command(version, disable_help_flag = true)]
struct Args {
    /// Length of the password.
    #[arg(default_value_t = 16)]
    length: usize,
    /// a-f0-9
    #[arg(short = 'h', long)]
    hex: bool,
    /// a-zA-Z
    #[arg(short, long)]
    alpha: bool,
    /// a-z
    #[arg(short, long)]
    lower: bool,
    /// A-Z
    #[arg(short, long)]
    upper: bool,
    /// 0-9
    #[arg(short, long)]
    number: bool,
    /// !@#$%^&*()_
    #[arg(short, long)]
    special: bool,
    /// Interpret the length as a number of bytes (hex only).
    #[arg(short, long)]
    bytes: bool,
    /// Also show the base64 (raw url) encoding of the raw bytes (hex only).
    #[arg(short = 'B', long)]
    base64: bool,
    /// Show the entropy of the password.
    #[arg(short, long)]
    entropy: bool,
    /// Show how long it would take to have a 1% chance of generating the same password twice.
    #[arg(short, long)]
    collisions: bool,
    /// Number of passwords assumed to be generated each second, for --collisions.
    #[arg(long, default_value_t = 1)]
    rate: u64,
    /// Print everything as a single JSON object.
    #[arg(long)]
    json: bool,
    /// Print help.
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    /// The charset selected by the flags, in flag order; everything if none were given.
    fn charset(&self) -> String {
        let selected = [
            (self.hex, charset::CHARSET_HEX),
            (self.alpha, charset::CHARSET_ALPHA),
            (self.lower, charset::CHARSET_LOWER),
            (self.upper, charset::CHARSET_UPPER),
            (self.number, charset::CHARSET_NUM),
            (self.special, charset::CHARSET_SPECIAL),
        ];
        let charset = selected
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, chars)| *chars)
            .collect::<String>();
        if charset.is_empty() {
            charset::CHARSET_ALL.to_owned()
        } else {
            charset
        }
    }

    /// Length of the password in characters, after `--bytes` is taken into account.
    fn password_length(&self) -> Result<usize, ProgError> {
        if self.bytes && self.hex {
            self.length
                .checked_mul(2)
                .ok_or(ProgError::LengthTooLarge(self.length))
        } else {
            Ok(self.length)
        }
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    if (args.bytes || args.base64) && !args.hex {
        log::warn!("--bytes and --base64 only apply to hex passwords; ignoring them");
    }

    let length = args.password_length()?;
    if args.base64 && args.hex && length % 2 != 0 {
        return Err(ProgError::OddBase64Length(length));
    }

    let alphabet: Alphabet = charset::normalize(&args.charset());
    log::debug!("generating {} characters from {} symbols", length, alphabet.len());
    let password = genpass::password_generation::generate(&alphabet, length)?;

    let options = report::Options {
        base64: args.base64 && args.hex,
        entropy: args.entropy,
        collisions: args.collisions,
        rate: args.rate,
    };
    let report = report::Report::build(&options, &alphabet, password)?;

    let stdout = std::io::stdout().lock();
    if args.json {
        report
            .write_json(stdout)
            .context("failed to write report as JSON to stdout")?;
    } else {
        report
            .write_text(stdout)
            .context("failed to write report to stdout")?;
    }
    Ok(())
}

fn main() {
    init_logger();
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{} {}", console::style("error:").red().bold(), err);
            process::exit(1);
        }
    }
}

/// Logs go to stderr, so they never mix with the password on stdout.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("length must be a multiple of 2 for base64 encoding, got {0}")]
    OddBase64Length(usize),
    #[error("a length of {0} bytes is too large")]
    LengthTooLarge(usize),
    #[error(transparent)]
    Genpass(genpass::GenpassError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<genpass::GenpassError> for ProgError {
    fn from(err: genpass::GenpassError) -> ProgError {
        ProgError::Genpass(err)
    }
}
