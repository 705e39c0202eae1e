use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let words = app.glossary.list();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&words)?);
        }
        OutputFormat::Plain => {
            if words.is_empty() {
                println!("No words yet. Add one with: glossa add <word>");
                return Ok(());
            }

            for word in &words {
                println!("{}", word);
            }

            println!("\n{} words", words.len());
        }
    }

    Ok(())
}
