use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use ytally_core::{YouTubeClient, playlist_duration};

#[derive(Parser)]
#[command(name = "ytally")]
#[command(about = "Compute the total playback duration of a YouTube playlist")]
struct Cli {
    /// Playlist URL. When omitted, ytally prompts for URLs interactively.
    url: Option<String>,

    /// YouTube Data API key. Falls back to the YOUTUBE_API_KEY environment
    /// variable, then to an interactive prompt.
    #[arg(short = 'k', long)]
    api_key: Option<String>,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn prompt(term: &Term, msg: &str) -> Result<String> {
    term.write_str(msg)?;
    Ok(term.read_line()?.trim().to_owned())
}

fn resolve_client(api_key: Option<String>, term: &Term) -> Result<YouTubeClient> {
    if let Some(key) = api_key {
        return Ok(YouTubeClient::new(key));
    }
    match YouTubeClient::from_env() {
        Ok(client) => Ok(client),
        Err(_) => {
            let key = prompt(term, "Please enter your YouTube API key: ")?;
            Ok(YouTubeClient::new(key))
        }
    }
}

async fn fetch_and_report(client: &YouTubeClient, url: &str) -> bool {
    let spinner = create_spinner("Fetching playlist...");
    match playlist_duration(url, client).await {
        Ok(total) => {
            spinner.finish_with_message(format!(
                "{} Total playlist duration: {}",
                style("✓").green().bold(),
                style(total).cyan()
            ));
            true
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            false
        }
    }
}

async fn run_interactive(client: &YouTubeClient, term: &Term) -> Result<()> {
    loop {
        let url = prompt(term, "Enter a YouTube playlist URL (or 'q' to quit): ")?;
        if url.eq_ignore_ascii_case("q") {
            println!("Goodbye!");
            return Ok(());
        }
        if url.is_empty() {
            continue;
        }
        fetch_and_report(client, &url).await;
        println!();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let term = Term::stdout();

    println!(
        "\n{}  {}\n",
        style("ytally").cyan().bold(),
        style("YouTube Playlist Duration Calculator").dim()
    );

    let client = resolve_client(cli.api_key, &term)?;

    match cli.url {
        Some(url) => {
            if !fetch_and_report(&client, &url).await {
                std::process::exit(1);
            }
        }
        None => run_interactive(&client, &term).await?,
    }

    Ok(())
}
