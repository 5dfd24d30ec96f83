//! Sparse panel value store.
//!
//! The host renderer reads panel values from a flat integer array. The
//! controller keeps only the slots it owns in a fixed-capacity map and copies
//! them into the host's array with [`Panel::write_to`].

use heapless::FnvIndexMap;

use crate::indices::PanelIndex;

/// Maximum number of distinct panel slots held at once.
pub const PANEL_CAPACITY: usize = 64;

/// Panel values keyed by [`PanelIndex`].
///
/// Unset slots read as `0`, the same as a freshly zeroed host array.
///
/// # Example
///
/// ```rust
/// use lrv_cab::panel::Panel;
/// use lrv_cab::indices::panel;
///
/// let mut p = Panel::new();
/// assert_eq!(p.get(panel::HEADLIGHT), 0);
///
/// p.toggle(panel::HEADLIGHT);
/// assert_eq!(p.get(panel::HEADLIGHT), 1);
/// p.toggle(panel::HEADLIGHT);
/// assert_eq!(p.get(panel::HEADLIGHT), 0);
///
/// let mut flat = [0i32; 256];
/// p.set(panel::INDICATOR, 3);
/// p.write_to(&mut flat);
/// assert_eq!(flat[102], 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Panel {
    slots: FnvIndexMap<PanelIndex, i32, PANEL_CAPACITY>,
}

impl Panel {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a slot.
    pub fn get(&self, index: PanelIndex) -> i32 {
        self.slots.get(&index).copied().unwrap_or(0)
    }

    /// Set a slot. Dropped with a warning if the panel is full.
    pub fn set(&mut self, index: PanelIndex, value: i32) {
        if self.slots.insert(index, value).is_err() {
            tracing::warn!(index = index.index(), "panel full, value dropped");
        }
    }

    /// Set a slot to `0`.
    pub fn clear(&mut self, index: PanelIndex) {
        self.set(index, 0);
    }

    /// Flip a 0/1 slot.
    pub fn toggle(&mut self, index: PanelIndex) {
        self.set(index, self.get(index) ^ 1);
    }

    /// Add one to a counter slot.
    pub fn increment(&mut self, index: PanelIndex) {
        self.set(index, self.get(index).wrapping_add(1));
    }

    /// Whether a slot is non-zero.
    pub fn is_raised(&self, index: PanelIndex) -> bool {
        self.get(index) != 0
    }

    /// Iterate over the slots that have been written.
    pub fn iter(&self) -> impl Iterator<Item = (PanelIndex, i32)> + '_ {
        self.slots.iter().map(|(k, v)| (*k, *v))
    }

    /// Copy every written slot into a flat host array.
    ///
    /// Slots beyond the end of `out` are skipped.
    pub fn write_to(&self, out: &mut [i32]) {
        for (index, value) in self.iter() {
            if let Some(slot) = out.get_mut(index.index()) {
                *slot = value;
            }
        }
    }
}
