use crate::row::SlideRow;

/// Application callbacks fired when a settle animation ends.
///
/// Never called during a live drag. Exactly one method fires per settle.
pub trait SideOpenListener {
    /// The left panel is open by `size` pixels.
    fn on_left_open(&self, owner: &SlideRow, size: i32);

    /// The right panel is open by `size` pixels.
    fn on_right_open(&self, owner: &SlideRow, size: i32);

    fn on_close(&self, owner: &SlideRow);
}
