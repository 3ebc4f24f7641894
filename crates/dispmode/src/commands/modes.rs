use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use dispmode_core::{Display, DisplayBackend};

use super::monitor_at;
use crate::error::CliResult;

pub fn execute<B: DisplayBackend>(display: &Display<B>, index: usize, json: bool) -> CliResult<()> {
    let monitor = monitor_at(display, index)?;
    let modes = display.video_modes(&monitor)?;

    if json {
        let text = serde_json::to_string_pretty(&modes)?;
        println!("{text}");
        return Ok(());
    }

    let current = display.current_video_mode(&monitor);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("Bits").set_alignment(CellAlignment::Right),
            Cell::new("R/G/B"),
            Cell::new(""),
        ]);

    for mode in &modes {
        let marker = if *mode == current { "current" } else { "" };
        table.add_row(vec![
            Cell::new(mode.width).set_alignment(CellAlignment::Right),
            Cell::new(mode.height).set_alignment(CellAlignment::Right),
            Cell::new(mode.bits_per_pixel()).set_alignment(CellAlignment::Right),
            Cell::new(format!(
                "{}/{}/{}",
                mode.red_bits, mode.green_bits, mode.blue_bits
            )),
            Cell::new(marker),
        ]);
    }

    println!("{} ({})", monitor.name, monitor.adapter);
    println!("{table}");
    println!("\n{} mode(s) found", modes.len());
    Ok(())
}
