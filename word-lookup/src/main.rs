use std::io::{self, Stdout};

use clap::Parser;
use dictionary::presentation::MORE_MEANINGS_LABEL;
use dictionary::{page, Dictionary, Directive, MeaningSection, WordQuery};
use tracing_subscriber::EnvFilter;

use config::Config;
use render::Renderer;
use utilities::{input, parse_command, Command};

mod config;
mod render;
mod utilities;

/// Look up English words in the free dictionary API.
#[derive(Debug, Parser)]
#[command(name = "word-lookup", version, about)]
struct Args {
    /// Word to look up; starts an interactive prompt when omitted
    word: Vec<String>,
    /// Show every part of speech right away instead of on `:more`
    #[arg(long)]
    expand: bool,
    /// Disable colours
    #[arg(long)]
    no_color: bool,
    /// Override the entries endpoint (DICTIONARY_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Request timeout in seconds (DICTIONARY_TIMEOUT_SECONDS)
    #[arg(long)]
    timeout_seconds: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if args.timeout_seconds.is_some() {
        config.timeout_seconds = args.timeout_seconds;
    }
    if args.no_color {
        config.theme.color = false;
    }
    tracing::debug!(?config, "starting");

    let dict = Dictionary::with_timeout(&config.api_url, config.timeout())?;
    let mut renderer = Renderer::new(io::stdout(), config.theme, args.expand);

    if !args.word.is_empty() {
        let query = WordQuery::new(&args.word.join(" "));
        let mut renderer = renderer.with_expand_hint("--expand");
        define_word(&dict, &mut renderer, &query).await?;
        return Ok(());
    }

    renderer.render_title()?;
    let mut last_sections: Option<Vec<MeaningSection>> = None;
    while let Some(line) = input(">> ")? {
        match parse_command(&line) {
            Command::Exit => break,
            Command::More => match &last_sections {
                Some(sections) => renderer.render_sections(MORE_MEANINGS_LABEL, sections)?,
                None => println!("Look up a word first."),
            },
            Command::Help => {
                println!("Type a word to look it up. :more expands the last result, :q quits.")
            }
            Command::Unknown(command) => {
                println!("Unknown command :{command}.");
            }
            Command::Lookup(query) if query.is_empty() => {}
            Command::Lookup(query) => {
                last_sections = define_word(&dict, &mut renderer, &query).await?;
            }
        }
    }
    Ok(())
}

/// Looks up and renders one query, returning its secondary meanings.
async fn define_word(
    dict: &Dictionary,
    renderer: &mut Renderer<Stdout>,
    query: &WordQuery,
) -> io::Result<Option<Vec<MeaningSection>>> {
    let Some(directives) = page::look_up(dict, query).await else {
        return Ok(None);
    };
    renderer.render(&directives)?;
    Ok(directives.into_iter().find_map(|directive| match directive {
        Directive::Expander { sections, .. } => Some(sections),
        _ => None,
    }))
}
