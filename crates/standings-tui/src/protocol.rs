// Message types passed between the input handler and the dashboard loop.

/// Which view fills the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Chart,
    Summary,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Chart, TabId::Summary];

    /// The tab after this one, wrapping around.
    pub fn next(self) -> TabId {
        match self {
            TabId::Chart => TabId::Summary,
            TabId::Summary => TabId::Chart,
        }
    }
}

/// Commands the input handler cannot satisfy by mutating view state alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Write the standings and summary to the export directory.
    Export,
    Quit,
}
