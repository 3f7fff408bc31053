use crate::cli::{
    args::{SeeArgs, SeeFormat},
    global::GlobalArgs,
};
use name_viz::{Settings, analyse, render_csv, render_json, render_table, resolve_labelled};
use std::io::{self, IsTerminal, Write};

pub fn handle(
    args: SeeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // --name wins over positional words
    let mut input = args.name.as_deref().map(str::trim).unwrap_or_default().to_string();
    if input.is_empty() {
        input = args.words.join(" ");
    }
    if input.is_empty() {
        return Err("no name provided; use --name or add it after the command".into());
    }

    let mode = args.reverse.as_deref().unwrap_or_default();
    let resolved = resolve_labelled(mode, &input)?;
    let rows = analyse(&resolved.text)?;
    tracing::debug!(mode, rows = rows.len(), "analysed input");

    match args.format {
        SeeFormat::Table => {
            if let Some(warning) = &resolved.warning {
                let color = global.color(settings, io::stdout().is_terminal());
                println!("{} {}", warning_prefix(color), warning);
            }
            print!("{}", render_table(&resolved, &rows));
        }
        SeeFormat::Json => {
            report_warning(resolved.warning.as_deref(), global, settings);
            println!("{}", render_json(&rows)?);
        }
        SeeFormat::Csv => {
            report_warning(resolved.warning.as_deref(), global, settings);
            io::stdout().write_all(&render_csv(&rows)?)?;
        }
    }

    Ok(())
}

/// Machine-readable formats keep stdout clean; the warning goes to stderr.
fn report_warning(warning: Option<&str>, global: &GlobalArgs, settings: &Settings) {
    if let Some(warning) = warning {
        let color = global.color(settings, io::stderr().is_terminal());
        eprintln!("{} {}", warning_prefix(color), warning);
    }
}

pub(crate) fn warning_prefix(color: bool) -> &'static str {
    if color {
        "\x1b[1;33mWarning:\x1b[0m"
    } else {
        "Warning:"
    }
}
