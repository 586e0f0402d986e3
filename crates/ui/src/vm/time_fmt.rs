/// Format remaining seconds as `MM:SS`.
#[must_use]
pub fn format_mm_ss(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}
