/// Coalescing helper for render decisions
pub struct Coalescer;

impl Coalescer {
    /// Render when this loop changed state or the host asked for a frame
    #[inline]
    pub fn decide_render(processed_msgs: usize, saw_tui_render: bool) -> bool {
        processed_msgs > 0 || saw_tui_render
    }
}
