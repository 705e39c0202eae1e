use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, pattern: &str, format: &OutputFormat) -> Result<()> {
    let matches = app.glossary.filter(pattern);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Plain => {
            if matches.is_empty() {
                println!("No words matching '{}'.", pattern);
                return Ok(());
            }

            for word in &matches {
                println!("{}", word);
            }

            println!("\n{} of {} words", matches.len(), app.glossary.len());
        }
    }

    Ok(())
}
