mod board_vm;
mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use board_vm::{map_board_rows, BoardRowVm, RECENT_SHOWN};
pub use quiz_vm::{nav_state, option_states, NavVm, OptionState, OptionVm};
pub use results_vm::{map_results, ResultsVm};
pub use time_fmt::format_mm_ss;
