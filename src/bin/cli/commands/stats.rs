use anyhow::Result;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let summary = app.progress.summarize()?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "perDate": summary.per_date.iter().map(|d| {
                    serde_json::json!({
                        "date": d.date,
                        "added": d.added,
                        "viewed": d.viewed,
                    })
                }).collect::<Vec<_>>(),
                "totalAdded": summary.total_added,
                "totalViewed": summary.total_viewed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if summary.per_date.is_empty() {
                println!("No activity recorded yet.");
                return Ok(());
            }

            println!("{:<12} {:>6} {:>6}", "Date", "Added", "Viewed");
            println!(
                "{} {} {}",
                "\u{2500}".repeat(12),
                "\u{2500}".repeat(6),
                "\u{2500}".repeat(6)
            );

            for day in &summary.per_date {
                if use_color {
                    println!(
                        "{}{:<12}{} {:>6} {:>6}",
                        Color::CYAN,
                        day.date,
                        Color::RESET,
                        day.added,
                        day.viewed
                    );
                } else {
                    println!("{:<12} {:>6} {:>6}", day.date, day.added, day.viewed);
                }
            }

            println!(
                "\nTotal: {} added, {} viewed",
                summary.total_added, summary.total_viewed
            );
        }
    }

    Ok(())
}
