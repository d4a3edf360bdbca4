use anyhow::Result;

use sayt_tui::SearchOutcome;

/// Print the accepted selection as `name<TAB>url`, one line, or nothing when
/// the picker was dismissed.
pub fn print_plain(outcome: &SearchOutcome) {
    if let Some(selection) = &outcome.selection {
        println!("{}\t{}", selection.name, selection.url);
    }
}

/// Print the full outcome (acceptance, query, selection) as JSON.
pub fn print_json(outcome: &SearchOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
