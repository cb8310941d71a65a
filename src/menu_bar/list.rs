//! Horizontal slot list with pooled cells.
//!
//! Plays the role of the reusable-list primitive: it reloads all slots from
//! the label list, keeps its own selection bookkeeping for the selected
//! visual, and turns a column offset into an item index. Cells are never
//! dropped on reload; a shorter list leaves the tail of the pool idle.

use super::cell::MenuBarCell;

#[derive(Debug, Default)]
pub struct SlotList {
    pool: Vec<MenuBarCell>,
    item_count: usize,
    selected: Option<usize>,
}

impl SlotList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind every slot from `labels`, dequeuing pooled cells first.
    ///
    /// Clears the list's selection; callers select a slot afterwards.
    pub fn reload(&mut self, labels: &[String]) {
        for (index, label) in labels.iter().enumerate() {
            let cell = self.dequeue(index);
            cell.bind(Some(label.as_str()));
        }
        for idle in self.pool.iter_mut().skip(labels.len()) {
            idle.prepare_for_reuse();
            idle.bind(None);
        }
        self.item_count = labels.len();
        self.selected = None;
    }

    fn dequeue(&mut self, index: usize) -> &mut MenuBarCell {
        if index >= self.pool.len() {
            self.pool.push(MenuBarCell::new());
        }
        let cell = &mut self.pool[index];
        cell.prepare_for_reuse();
        cell
    }

    /// Mark `index` as the selected slot. Out-of-range indices are ignored.
    pub fn select_item(&mut self, index: usize) {
        if index >= self.item_count {
            return;
        }
        if let Some(previous) = self.selected.take() {
            if let Some(cell) = self.pool.get_mut(previous) {
                cell.set_selected(false);
            }
        }
        self.pool[index].set_selected(true);
        self.selected = Some(index);
    }

    pub fn selected_item(&self) -> Option<usize> {
        self.selected
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Bound slots, in index order.
    pub fn cells(&self) -> &[MenuBarCell] {
        &self.pool[..self.item_count]
    }

    /// Number of cell instances ever allocated.
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    /// Item drawn at `column` (relative to the list's left edge).
    pub fn slot_at(&self, column: u16, item_width: f32) -> Option<usize> {
        if item_width <= 0.0 {
            return None;
        }
        (0..self.item_count).find(|&index| {
            let (start, end) = slot_span(index, item_width);
            (start..end).contains(&column)
        })
    }
}

/// Columns `[start, end)` covered by slot `index`, rounded the same way
/// for drawing and hit-testing.
pub fn slot_span(index: usize, item_width: f32) -> (u16, u16) {
    let start = (item_width * index as f32).round() as u16;
    let end = (item_width * (index + 1) as f32).round() as u16;
    (start, end)
}
