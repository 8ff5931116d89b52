//! Render the kanban board for a pipeline.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::{Color, Colorize};

use crate::board::alert::AlertSeverity;
use crate::board::{compute_alert, project_board};
use crate::commands::common::{find_pipeline, load_state, open_data_dir, run_ownerless_migration};
use crate::models::canon::StageMap;
use crate::models::parcel::Parcel;
use crate::notify::TerminalNotifier;
use crate::store::context::load_context;

pub fn execute(pipeline: Option<i64>) -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, mut parcels) = load_state(&data_dir)?;
    run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &TerminalNotifier)?;

    let context = load_context(&data_dir, &pipelines)?;
    let pipeline_id = pipeline.unwrap_or(context.active_pipeline);
    let pipeline = find_pipeline(&pipelines, pipeline_id)?;

    let now = Utc::now();
    let projection = project_board(&parcels, pipeline, now);
    let map = StageMap::for_pipeline(pipeline);

    println!("{}", pipeline.name.bold().blue());
    println!("{}", "=".repeat(50));

    for group in &projection.groups {
        let header = format!("{} ({})", group.column.title, group.parcels.len());
        println!(
            "\n{}",
            header.bold().color(stage_color(&group.column.color))
        );
        for parcel in &group.parcels {
            print_parcel_line(parcel, &map, now);
        }
    }

    if !projection.unresolved.is_empty() {
        println!(
            "\n{} {} colis sans colonne: {}",
            "!".yellow().bold(),
            projection.unresolved.len(),
            projection.unresolved.join(", ")
        );
    }

    println!();
    Ok(())
}

fn print_parcel_line(parcel: &Parcel, map: &StageMap, now: DateTime<Utc>) {
    let mut line = format!("  {} — {}", parcel.id, parcel.client_name);
    if !parcel.ville.is_empty() {
        line.push_str(&format!(" ({})", parcel.ville));
    }
    if let Some(prix) = &parcel.prix {
        line.push_str(&format!(" {prix} DH"));
    }

    match compute_alert(parcel, map, now) {
        Some(alert) => {
            let badge = match alert.severity {
                AlertSeverity::Overdue => alert.label.red().bold(),
                AlertSeverity::Soon => alert.label.yellow().bold(),
            };
            println!("{line} {badge}");
        }
        None => println!("{line}"),
    }
}

/// Map a stage color token to a terminal color. Unknown tokens fall back
/// to white rather than failing the render.
fn stage_color(token: &str) -> Color {
    match token {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        "red" => Color::Red,
        _ => Color::White,
    }
}
