use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Parser;
use colored::Colorize;

use study_slot_grid::domain::clock::fixed_clock::FixedClock;
use study_slot_grid::domain::drag::pointer::{PointerEvent, PointerPosition};
use study_slot_grid::domain::grid::time_slot_grid::TimeSlotGrid;
use study_slot_grid::domain::selection::selection_listener::RecordingListener;
use study_slot_grid::domain::slot_model::time_of_day::TimeOfDay;
use study_slot_grid::{load_time_slot_grid, load_time_slot_grid_with_clock, logger};

/// Show the bookable slots of a space on one date and optionally simulate a selection.
#[derive(Debug, Parser)]
#[command(name = "slot-grid", version)]
struct Cli {
    /// Scenario JSON with operating hours, bookings and the selected date.
    scenario: String,

    /// Instant the operating-timezone clock should read, as YYYY-MM-DDTHH:MM.
    #[arg(long)]
    now: Option<String>,

    /// Click the row starting at HH:MM.
    #[arg(long)]
    click: Option<String>,

    /// After the click, drag the resize handle by this many pixels (negative shrinks).
    #[arg(long, allow_hyphen_values = true)]
    drag_px: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let listener = RecordingListener::new();

    let mut grid = match &cli.now {
        Some(now) => {
            let now = NaiveDateTime::parse_from_str(now, "%Y-%m-%dT%H:%M").with_context(|| format!("--now '{}' is not YYYY-MM-DDTHH:MM", now))?;
            load_time_slot_grid_with_clock(&cli.scenario, Arc::new(FixedClock::new(now)), Box::new(listener.clone()))?
        }
        None => load_time_slot_grid(&cli.scenario, Box::new(listener.clone()))?,
    };

    print_slot_table(&grid);

    if let Some(click) = &cli.click {
        let tick = TimeOfDay::parse(click)?;
        if !grid.click(tick) {
            println!("{}", format!("{} cannot start a booking.", tick).yellow());
        }

        if let Some(drag_px) = cli.drag_px {
            let handle_y = grid.geometry().map(|g| g.top_px + g.height_px).unwrap_or_default();
            grid.pointer_event(PointerEvent::Down(PointerPosition::new(0.0, handle_y)));
            grid.pointer_event(PointerEvent::Move(PointerPosition::new(0.0, handle_y + drag_px)));
            grid.pointer_event(PointerEvent::Up);
        }
    }

    for emitted in listener.history() {
        println!("{}", serde_json::to_string(&emitted)?);
    }
    if grid.is_capped_early() {
        println!("{}", "Selection cannot reach the 3-hour maximum.".dimmed());
    }

    Ok(())
}

fn print_slot_table(grid: &TimeSlotGrid) {
    println!("{}", format!("== {} ==", grid.date()).bold());

    if grid.slots().is_empty() {
        println!("{}", "Closed or no bookable time left.".yellow());
        return;
    }

    let starts: HashSet<TimeOfDay> = grid.available_starts().into_iter().collect();
    for slot in grid.slots() {
        let marker = if slot.is_hour_boundary { "──" } else { "  " };
        let status = if slot.is_blocked {
            "blocked".red()
        } else if starts.contains(&slot.offset) {
            "start".green()
        } else {
            "free".normal()
        };
        println!("{} {} {}", marker, slot.offset, status);
    }
}
