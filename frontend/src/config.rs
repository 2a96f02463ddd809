use shared::SlotWindow;

/// Compile-time settings for the prototype. There is no backend to point
/// at, so everything here tunes the simulated experience.
pub struct Config;

impl Config {
    /// Delay applied to sign-in and sign-up before they resolve.
    pub fn simulated_latency_ms() -> u32 {
        1000
    }

    pub fn toast_duration_ms() -> u32 {
        5000
    }

    /// Hours offered by the availability grid on the profile page
    pub fn slot_window() -> SlotWindow {
        SlotWindow::default()
    }
}
