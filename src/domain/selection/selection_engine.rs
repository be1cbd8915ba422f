use crate::api::selection_dto::SelectionDto;
use crate::domain::selection::selection::{MAX_DURATION, MIN_DURATION, Selection, SelectionGeometry};
use crate::domain::selection::selection_event::{ClearReason, SelectionEvent};
use crate::domain::selection::selection_listener::SelectionListener;
use crate::domain::slot_model::slot::DayLayout;
use crate::domain::slot_model::time_of_day::{SLOT_GRANULARITY, TimeOfDay};

/// Owner of the current selection of one grid.
///
/// States are `Empty` (`selection == None`) and `Active`. A click on an eligible
/// tick moves `Empty -> Active`, resizing keeps it `Active` with a new end, and any
/// clear moves back to `Empty`. Invalid requests are dropped without an emission.
pub struct SelectionEngine {
    layout: DayLayout,
    selection: Option<Selection>,
    read_only: bool,
    listener: Box<dyn SelectionListener>,
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("date", &self.layout.date)
            .field("selection", &self.selection)
            .field("read_only", &self.read_only)
            .finish()
    }
}

impl SelectionEngine {
    pub fn new(layout: DayLayout, listener: Box<dyn SelectionListener>) -> Self {
        SelectionEngine { layout, selection: None, read_only: false, listener }
    }

    pub fn layout(&self) -> &DayLayout {
        &self.layout
    }

    /// Replaces the day layout. Switching to another date clears the selection.
    pub fn set_layout(&mut self, layout: DayLayout) {
        let date_changed = layout.date != self.layout.date;
        self.layout = layout;

        if date_changed {
            self.handle(SelectionEvent::Clear(ClearReason::DateChanged));
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    /// Read-only copy of the selection for consumers such as the booking panel.
    pub fn snapshot(&self) -> Option<SelectionDto> {
        self.selection.map(|s| s.to_dto())
    }

    /// Whether a click on `tick` may open a selection of the minimum duration.
    pub fn can_start_at(&self, tick: TimeOfDay) -> bool {
        let Some(slot) = self.layout.slot_at(tick) else {
            return false;
        };
        if slot.is_blocked {
            return false;
        }

        let Some(window) = self.layout.window else {
            return false;
        };

        let min_end = tick.minutes() + MIN_DURATION;
        if min_end > window.end.minutes() {
            return false;
        }

        let min_end = TimeOfDay::from_minutes(min_end as i64);
        !self.layout.booked.iter().any(|b| b.overlaps(tick, min_end))
    }

    /// Hard ceiling for the end of a selection starting at `tick`: the earliest of
    /// the duration cap, the closing time and the next booking after `tick`.
    pub fn compute_max_end(&self, tick: TimeOfDay) -> TimeOfDay {
        let mut max_end = tick.offset_by(MAX_DURATION as i64);

        if let Some(window) = self.layout.window {
            max_end = max_end.min(window.end);
        }

        if let Some(next_booking) = self.layout.booked.iter().filter(|b| b.start > tick).map(|b| b.start).min() {
            max_end = max_end.min(next_booking);
        }

        max_end
    }

    /// `true` while a booking or the closing time cuts the selection short of [`MAX_DURATION`].
    pub fn is_capped_early(&self) -> bool {
        match self.selection {
            Some(selection) => self.compute_max_end(selection.start).minutes() < selection.start.minutes() + MAX_DURATION,
            None => false,
        }
    }

    pub fn geometry(&self, slot_pixel_height: f64) -> Option<SelectionGeometry> {
        let selection = self.selection?;
        let origin = self.layout.first_offset().unwrap_or(selection.start);
        Some(SelectionGeometry::of(&selection, origin, slot_pixel_height))
    }

    pub fn select_start(&mut self, tick: TimeOfDay) -> bool {
        self.handle(SelectionEvent::Click(tick))
    }

    pub fn resize_end_to(&mut self, raw_end: i64) -> bool {
        self.handle(SelectionEvent::ResizeEnd(raw_end))
    }

    /// Drops the selection and always emits `None`.
    pub fn clear(&mut self) {
        self.handle(SelectionEvent::Clear(ClearReason::Explicit));
    }

    /// Applies `event` to the selection.
    ///
    /// # Returns
    /// `true` if the selection changed.
    pub fn handle(&mut self, event: SelectionEvent) -> bool {
        match event {
            SelectionEvent::Click(tick) => self.on_click(tick),
            SelectionEvent::ResizeEnd(raw_end) => self.on_resize(raw_end),
            SelectionEvent::Clear(reason) => self.on_clear(reason),
        }
    }

    fn on_click(&mut self, tick: TimeOfDay) -> bool {
        if self.read_only {
            log::debug!("Ignoring click on {}: grid is read-only.", tick);
            return false;
        }
        if let Some(selection) = self.selection {
            log::debug!("Ignoring click on {}: selection {}-{} is already active.", tick, selection.start, selection.end);
            return false;
        }
        if !self.can_start_at(tick) {
            log::debug!("Ignoring click on {}: no free {} minutes from there.", tick, MIN_DURATION);
            return false;
        }

        self.selection = Some(Selection { start: tick, end: tick.offset_by(MIN_DURATION as i64) });
        self.emit();
        true
    }

    fn on_resize(&mut self, raw_end: i64) -> bool {
        if self.read_only {
            return false;
        }
        let Some(current) = self.selection else {
            return false;
        };

        let start = current.start.minutes() as i64;
        let min_end = start + MIN_DURATION as i64;
        let max_end = self.compute_max_end(current.start).minutes() as i64;

        if max_end < min_end {
            log::debug!("Selection {}-{} no longer fits its day layout; resize ignored.", current.start, current.end);
            return false;
        }

        let clamped = raw_end.clamp(min_end, max_end);
        let step = SLOT_GRANULARITY as i64;
        let mut snapped = start + (clamped - start + step / 2) / step * step;
        // A ceiling off the 15-minute grid must never be exceeded by rounding up.
        if snapped > max_end {
            snapped -= step;
        }

        let new_end = TimeOfDay::from_minutes(snapped);
        if new_end == current.end {
            return false;
        }

        self.selection = Some(Selection { start: current.start, end: new_end });
        self.emit();
        true
    }

    fn on_clear(&mut self, reason: ClearReason) -> bool {
        let had_selection = self.selection.take().is_some();
        log::debug!("Clearing selection ({:?}).", reason);
        self.listener.on_selection_change(None);
        had_selection
    }

    fn emit(&mut self) {
        let dto = self.snapshot();
        if let Some(dto) = &dto {
            log::debug!("Selection changed to {}-{} ({} min).", dto.start, dto.end, dto.duration_minutes);
        }
        self.listener.on_selection_change(dto.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::selection::selection_listener::RecordingListener;
    use crate::domain::slot_model::booked_interval::BookedInterval;
    use crate::domain::slot_model::operating_window::OperatingWindow;

    fn hm(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hm(h, m)
    }

    fn engine(window: (TimeOfDay, TimeOfDay), booked: Vec<BookedInterval>) -> (SelectionEngine, RecordingListener) {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let window = OperatingWindow::new(window.0, window.1).unwrap();
        let listener = RecordingListener::new();
        let layout = DayLayout::build(date, Some(window), booked, now);
        (SelectionEngine::new(layout, Box::new(listener.clone())), listener)
    }

    #[test]
    fn max_end_ignores_bookings_before_start() {
        let booked = vec![BookedInterval::new(hm(8, 0), hm(9, 0)), BookedInterval::new(hm(12, 0), hm(13, 0))];
        let (engine, _) = engine((hm(8, 0), hm(22, 0)), booked);

        assert_eq!(engine.compute_max_end(hm(10, 0)), hm(12, 0));
        assert_eq!(engine.compute_max_end(hm(13, 0)), hm(16, 0));
    }

    #[test]
    fn snaps_to_nearest_tick_from_start() {
        let (mut engine, _) = engine((hm(8, 0), hm(22, 0)), vec![]);
        assert!(engine.select_start(hm(10, 0)));

        assert!(engine.resize_end_to(hm(11, 37).minutes() as i64));
        assert_eq!(engine.selection().unwrap().end, hm(11, 30));

        assert!(engine.resize_end_to(hm(11, 38).minutes() as i64));
        assert_eq!(engine.selection().unwrap().end, hm(11, 45));
    }

    #[test]
    fn off_grid_ceiling_rounds_down() {
        let (mut engine, _) = engine((hm(8, 0), hm(22, 0)), vec![BookedInterval::new(hm(11, 40), hm(12, 0))]);
        assert!(engine.select_start(hm(10, 0)));

        engine.resize_end_to(10_000);
        assert_eq!(engine.selection().unwrap().end, hm(11, 30));
        assert!(engine.is_capped_early());
    }

    #[test]
    fn click_while_active_keeps_start() {
        let (mut engine, listener) = engine((hm(8, 0), hm(22, 0)), vec![]);
        assert!(engine.select_start(hm(10, 0)));
        assert!(!engine.select_start(hm(14, 0)));

        assert_eq!(engine.selection().unwrap().start, hm(10, 0));
        assert_eq!(listener.len(), 1);
    }

    #[test]
    fn read_only_rejects_click_and_resize() {
        let (mut engine, listener) = engine((hm(8, 0), hm(22, 0)), vec![]);
        engine.set_read_only(true);

        assert!(!engine.select_start(hm(10, 0)));
        assert!(!engine.resize_end_to(700));
        assert!(listener.is_empty());
    }

    #[test]
    fn geometry_is_relative_to_first_row() {
        let (mut engine, _) = engine((hm(8, 0), hm(22, 0)), vec![]);
        assert!(engine.geometry(12.0).is_none());

        engine.select_start(hm(10, 0));
        let geometry = engine.geometry(12.0).unwrap();
        assert_eq!(geometry.top_px, 96.0);
        assert_eq!(geometry.height_px, 48.0);
    }
}
