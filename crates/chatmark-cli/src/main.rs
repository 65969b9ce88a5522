use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{StyleType, render_message};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
};

const USAGE: &str = "Usage: chatmark-cli [--style none|with-chars|without-chars] [--no-urls] [--raw] [--config PATH] [MESSAGE...]";

/// Parsed command line. Flags left as `None`/`false` fall back to the config.
#[derive(Debug, Default, PartialEq)]
struct Args {
    style: Option<StyleType>,
    no_urls: bool,
    raw: bool,
    config_path: Option<PathBuf>,
    message: Vec<String>,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => {
                let value = args.next().context("--style needs a value")?;
                parsed.style = Some(value.parse()?);
            }
            "--config" => {
                let value = args.next().context("--config needs a path")?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--no-urls" => parsed.no_urls = true,
            "--raw" => parsed.raw = true,
            "--" => {
                parsed.message.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'\n{USAGE}"),
            _ => parsed.message.push(arg),
        }
    }

    Ok(parsed)
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config_path {
        Some(path) => {
            let config_path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            log::debug!("Config path: {}", config_path.display());
            match Config::load_from_path(&config_path)? {
                Some(config) => Some(config),
                None => bail!("Config file '{}' not found", config_path.display()),
            }
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?
        }
    };

    Ok(loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    }))
}

fn main() -> Result<()> {
    // Info by default; RUST_LOG directives take precedence.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args)?;

    let mut options = config.render_options();
    if let Some(style) = args.style {
        options.style = style;
    }
    if args.no_urls {
        options.highlight_urls = false;
    }
    if args.raw {
        options.escape_html = false;
    }

    let message = if args.message.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read message from stdin")?;
        input
    } else {
        args.message.join(" ")
    };

    println!("{}", render_message(&message, &options));
    Ok(())
}
