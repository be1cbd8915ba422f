use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::grid_scenario_dto::GridScenarioDto;
use crate::api::selection_dto::SelectionDto;
use crate::domain::booking::booking_panel::BookingPanel;
use crate::domain::booking::booking_submitter::BookingReceipt;
use crate::domain::clock::system_clock::SystemClock;
use crate::domain::drag::drag_controller::DragController;
use crate::domain::drag::pointer::{GestureDisposition, PointerEvent, PointerEventSource};
use crate::domain::grid::grid_config::GridConfig;
use crate::domain::selection::selection::{Selection, SelectionGeometry};
use crate::domain::selection::selection_engine::SelectionEngine;
use crate::domain::selection::selection_event::{ClearReason, SelectionEvent};
use crate::domain::selection::selection_listener::SelectionListener;
use crate::domain::slot_model::booked_interval::{BookedInterval, booked_intervals_from_dto};
use crate::domain::slot_model::operating_window::OperatingHours;
use crate::domain::slot_model::slot::{DayLayout, Slot};
use crate::domain::slot_model::time_of_day::TimeOfDay;
use crate::error::{Error, Result};

/// The booking grid of one space: day layout, selection and resize gesture.
///
/// Inputs flow one way. Whenever the date, the operating hours or the bookings
/// change, the slots are regenerated and handed to the selection engine.
#[derive(Debug)]
pub struct TimeSlotGrid {
    config: GridConfig,
    clock: Arc<dyn SystemClock>,
    hours: OperatingHours,
    engine: SelectionEngine,
    drag: DragController,
    external_selection: Option<SelectionDto>,
}

impl TimeSlotGrid {
    pub fn new(
        config: GridConfig,
        clock: Arc<dyn SystemClock>,
        date: NaiveDate,
        hours: OperatingHours,
        booked: Vec<BookedInterval>,
        listener: Box<dyn SelectionListener>,
        pointer_source: Arc<dyn PointerEventSource>,
    ) -> Self {
        let layout = DayLayout::build(date, hours.window_for(date), booked, clock.now());
        let mut engine = SelectionEngine::new(layout, listener);
        engine.set_read_only(config.read_only);

        TimeSlotGrid {
            config,
            clock,
            hours,
            engine,
            drag: DragController::new(pointer_source, config.slot_pixel_height),
            external_selection: None,
        }
    }

    pub fn from_scenario(
        dto: &GridScenarioDto,
        clock: Arc<dyn SystemClock>,
        listener: Box<dyn SelectionListener>,
        pointer_source: Arc<dyn PointerEventSource>,
    ) -> Result<Self> {
        let config = GridConfig::from_dto(&dto.config)?;
        let date = parse_date(&dto.selected_date)?;
        let hours = OperatingHours::from_dto(&dto.operating_hours);
        let booked = booked_intervals_from_dto(&dto.booked_slots);

        let grid = Self::new(config, clock, date, hours, booked, listener, pointer_source);
        log::info!("Loaded grid for {} with {} slots ({} bookings).", date, grid.slots().len(), grid.engine.layout().booked.len());

        Ok(grid)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn date(&self) -> NaiveDate {
        self.engine.layout().date
    }

    pub fn slots(&self) -> &[Slot] {
        &self.engine.layout().slots
    }

    pub fn selection(&self) -> Option<Selection> {
        self.engine.selection()
    }

    pub fn snapshot(&self) -> Option<SelectionDto> {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Shows another date with its bookings. The selection is cleared if the date differs.
    pub fn set_date(&mut self, date: NaiveDate, booked: Vec<BookedInterval>) {
        if date != self.date() {
            self.drag.end_drag();
        }
        self.rebuild(date, booked);
    }

    pub fn set_operating_hours(&mut self, hours: OperatingHours) {
        self.hours = hours;
        self.rebuild(self.date(), self.engine.layout().booked.clone());
    }

    pub fn set_booked_intervals(&mut self, booked: Vec<BookedInterval>) {
        self.rebuild(self.date(), booked);
    }

    /// Re-reads the clock so past ticks of today become blocked.
    pub fn refresh(&mut self) {
        self.rebuild(self.date(), self.engine.layout().booked.clone());
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
        self.engine.set_read_only(read_only);
        if read_only {
            self.drag.end_drag();
        }
    }

    pub fn click(&mut self, tick: TimeOfDay) -> bool {
        self.engine.handle(SelectionEvent::Click(tick))
    }

    pub fn pointer_event(&mut self, event: PointerEvent) -> GestureDisposition {
        self.drag.handle_pointer_event(event, &mut self.engine)
    }

    /// Applies the selection value held by the surrounding page. Only a transition
    /// from a value to `None` acts, clearing the grid's own selection.
    pub fn sync_external_selection(&mut self, external: Option<SelectionDto>) -> bool {
        let was_set = self.external_selection.is_some();
        self.external_selection = external;

        if was_set && self.external_selection.is_none() {
            self.drag.end_drag();
            return self.engine.handle(SelectionEvent::Clear(ClearReason::ExternalReset));
        }
        false
    }

    pub fn geometry(&self) -> Option<SelectionGeometry> {
        self.engine.geometry(self.config.slot_pixel_height)
    }

    pub fn is_capped_early(&self) -> bool {
        self.engine.is_capped_early()
    }

    /// Ticks where a click would open a selection.
    pub fn available_starts(&self) -> Vec<TimeOfDay> {
        self.slots().iter().map(|slot| slot.offset).filter(|tick| self.engine.can_start_at(*tick)).collect()
    }

    pub fn confirm_booking(&mut self, panel: &mut BookingPanel) -> Result<BookingReceipt> {
        self.drag.end_drag();
        panel.confirm(self.date(), &mut self.engine)
    }

    pub fn cancel_booking(&mut self, panel: &mut BookingPanel) {
        self.drag.end_drag();
        panel.cancel(&mut self.engine);
    }

    fn rebuild(&mut self, date: NaiveDate, booked: Vec<BookedInterval>) {
        let layout = DayLayout::build(date, self.hours.window_for(date), booked, self.clock.now());
        self.engine.set_layout(layout);
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(text.to_string()))
}
