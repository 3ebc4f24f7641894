use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use dispmode_core::{Display, DisplayBackend, Monitor};

use crate::error::CliResult;

pub fn execute<B: DisplayBackend>(display: &Display<B>, json: bool) -> CliResult<()> {
    let monitors = display.monitors()?;

    if json {
        let text = serde_json::to_string_pretty(&monitors)?;
        println!("{text}");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#"),
            Cell::new("Name"),
            Cell::new("Adapter"),
            Cell::new("Position"),
            Cell::new("Size (mm)").set_alignment(CellAlignment::Right),
            Cell::new("Current mode"),
        ]);

    for (i, monitor) in monitors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index_label(i, monitor)),
            Cell::new(&monitor.name),
            Cell::new(&monitor.adapter),
            Cell::new(format!("{}, {}", monitor.x, monitor.y)),
            Cell::new(format!("{} x {}", monitor.width_mm, monitor.height_mm))
                .set_alignment(CellAlignment::Right),
            Cell::new(display.current_video_mode(monitor)),
        ]);
    }

    println!("{table}");
    println!("\n{} monitor(s) found", monitors.len());
    Ok(())
}

/// Row label; only the OS-flagged primary is marked.
fn index_label(index: usize, monitor: &Monitor) -> String {
    if monitor.primary {
        format!("{index} (primary)")
    } else {
        index.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(primary: bool) -> Monitor {
        Monitor {
            name: "Generic PnP Monitor".into(),
            width_mm: 600,
            height_mm: 340,
            x: 0,
            y: 0,
            primary,
            adapter: r"\\.\DISPLAY1".into(),
        }
    }

    #[test]
    fn primary_monitor_is_labelled() {
        assert_eq!(index_label(0, &monitor(true)), "0 (primary)");
    }

    #[test]
    fn first_row_without_primary_flag_is_unlabelled() {
        assert_eq!(index_label(0, &monitor(false)), "0");
    }
}
