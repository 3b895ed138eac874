//! Passcard - printable random character grids kept in an encrypted key file.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use passcard::config::DEFAULT_KEY_FILE;
use passcard::{Error, OutputFormat, PaletteKind, PasscardOptions, ViewKind, ViewOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "passcard")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Generate and view passcards",
    long_about = "Generates a random character grid to print and carry, stored encrypted under a secret key."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a passcard key file
    Generate {
        /// Where to write the key file
        #[arg(short = 'i', long, default_value = DEFAULT_KEY_FILE)]
        identity_file: PathBuf,

        /// Secret key (prompted for when absent)
        #[arg(short = 's', long, env = "PASSCARD_SECRET", hide_env_values = true)]
        secret_key: Option<String>,

        /// Characters to fill the grid with
        #[arg(short = 'c', long)]
        charset: Option<String>,

        /// Overwrite an existing key file
        #[arg(short = 'f', long)]
        force: bool,
    },

    /// View sub-grids stored in a passcard key file
    View {
        /// Key file to read
        identity_file: PathBuf,

        /// Secret key (prompted for when absent)
        #[arg(short = 's', long, env = "PASSCARD_SECRET", hide_env_values = true)]
        secret_key: Option<String>,

        /// Sub-grid: pincard, pincard_alt, alphanum, alphanum_alt, square,
        /// card_large, card, random; anything else shows the full grid
        #[arg(short = 't', long = "type", default_value = "card")]
        view_type: String,

        /// Row colors: passcard, martin_ankerl, krazydad, gradient
        #[arg(long, default_value = "passcard")]
        color: String,

        /// Print without row colors
        #[arg(long)]
        no_color: bool,

        /// Print without row and column headers
        #[arg(long)]
        no_header: bool,

        /// Output format: ascii, html
        #[arg(short = 'f', long, default_value = "ascii")]
        format: String,
    },

    /// Change the secret key of a passcard key file
    Passwd {
        /// Key file to re-encrypt
        identity_file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            identity_file,
            secret_key,
            charset,
            force,
        } => cmd_generate(&identity_file, secret_key, charset, force),

        Commands::View {
            identity_file,
            secret_key,
            view_type,
            color,
            no_color,
            no_header,
            format,
        } => {
            let palette = if no_color {
                None
            } else {
                Some(color.parse::<PaletteKind>()?)
            };
            let options = ViewOptions {
                kind: view_type.parse::<ViewKind>()?,
                palette,
                header: !no_header,
            };
            cmd_view(&identity_file, secret_key, &options, format.parse()?)
        }

        Commands::Passwd { identity_file } => cmd_passwd(&identity_file),
    }
}

fn prompt_secret(prompt: &str) -> io::Result<String> {
    let secret = match rpassword::prompt_password(prompt) {
        Ok(secret) => secret,
        Err(_) => {
            eprint!("{}", prompt);
            io::stderr().flush()?;
            let mut secret = String::new();
            io::stdin().read_line(&mut secret)?;
            secret
        }
    };
    Ok(secret.trim().to_string())
}

fn secret_or_prompt(secret: Option<String>, prompt: &str) -> io::Result<String> {
    match secret {
        Some(secret) => Ok(secret.trim().to_string()),
        None => prompt_secret(prompt),
    }
}

fn cmd_generate(
    path: &Path,
    secret: Option<String>,
    charset: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    if path.exists() {
        if !force {
            return Err(Error::KeyFileExists(path.to_path_buf()).into());
        }
        warn!("Overwriting file at: {}", path.display());
    }

    let secret = secret_or_prompt(secret, "Please, provide a secret key [Enter for none]: ")?;
    let options = match charset {
        Some(charset) => PasscardOptions::with_charset(charset),
        None => PasscardOptions::default(),
    };
    debug!(
        "Generating {}x{} passcard from {} characters",
        options.size.0,
        options.size.1,
        options.charset.chars().count()
    );

    passcard::create(&secret, path, options)
        .with_context(|| format!("Failed to create passcard at {}", path.display()))?;
    info!("Wrote key file {}", path.display());
    println!("Created Passcard key in: {}", path.display());

    Ok(())
}

fn cmd_view(
    path: &Path,
    secret: Option<String>,
    options: &ViewOptions,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let secret = secret_or_prompt(secret, "Please, provide your secret key [Enter for none]: ")?;
    let reader = passcard::read(&secret, path)
        .with_context(|| format!("Could not open passcard {}", path.display()))?;

    debug!(
        "Rendering {} view as {} (palette: {:?}, header: {})",
        options.kind, format, options.palette, options.header
    );
    let renderer = format.renderer();
    println!("{}", reader.render(renderer.as_ref(), options));

    Ok(())
}

fn cmd_passwd(path: &Path) -> anyhow::Result<()> {
    let old_secret = prompt_secret("Current secret key: ")?;
    let new_secret = prompt_secret("New secret key: ")?;
    let confirm = prompt_secret("Confirm new secret key: ")?;

    if new_secret != confirm {
        bail!("Secret keys do not match");
    }

    passcard::rekey(&old_secret, &new_secret, path)
        .with_context(|| format!("Could not re-encrypt {}", path.display()))?;
    println!("Secret key changed successfully");

    Ok(())
}
