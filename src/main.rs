mod fetch;
mod parser;

use std::time::Duration;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gh_contributions", about = "GitHub contribution calendar scraper")]
struct Cli {
    /// GitHub username
    username: String,
    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    json: bool,
    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = fetch::FetchOptions {
        timeout: Duration::from_secs(cli.timeout),
        ..Default::default()
    };

    let data = fetch::contributions_for(&cli.username, &options).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{} contributions in the last year ({} days on record)",
        data.total_contributions,
        data.days.len()
    );
    println!("Last contribution: {}", data.last_contribution);

    if !data.calendar.is_empty() {
        println!();
        print!("{}", render_calendar(&data.calendar));
    }

    Ok(())
}

const LEVEL_GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];

/// One character per calendar slot, one line per day-of-week row.
/// Padding slots past the end of the data render as blanks.
fn render_calendar(calendar: &[Vec<Option<parser::Day>>]) -> String {
    let mut out = String::new();
    for row in calendar {
        for slot in row {
            out.push(match slot {
                Some(day) => LEVEL_GLYPHS[(day.level as usize).min(4)],
                None => ' ',
            });
        }
        out.push('\n');
    }
    out
}
