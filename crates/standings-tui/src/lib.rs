// Library root: re-exports the dashboard modules so integration tests can
// drive the view state and widgets directly.

pub mod protocol;
pub mod tui;
