use std::io::Write;

use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &mut App, word: &str, yes: bool) -> Result<()> {
    if !app.glossary.contains(word) {
        anyhow::bail!("No word '{}' in the glossary", word);
    }

    if !yes && !confirm(word)? {
        println!("Aborted.");
        return Ok(());
    }

    app.glossary
        .remove(word)
        .context(format!("Failed to delete '{}'", word))?;

    println!("Deleted \"{}\"", word);
    Ok(())
}

fn confirm(word: &str) -> Result<bool> {
    print!("Delete '{}'? [y/N] ", word);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
