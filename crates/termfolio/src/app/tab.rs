/// The four tabs of the window, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Home,
    Projects,
    Dev,
    Social,
}

impl TabId {
    pub const ALL: [TabId; 4] = [TabId::Home, TabId::Projects, TabId::Dev, TabId::Social];

    pub fn label(self) -> &'static str {
        match self {
            TabId::Home => "~ home",
            TabId::Projects => "projects",
            TabId::Dev => "dev",
            TabId::Social => "social",
        }
    }

    pub fn index(self) -> usize {
        match self {
            TabId::Home => 0,
            TabId::Projects => 1,
            TabId::Dev => 2,
            TabId::Social => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<TabId> {
        Self::ALL.get(index).copied()
    }

    /// The tab to the right, wrapping to home.
    pub fn next(self) -> TabId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping to social.
    pub fn prev(self) -> TabId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether Enter on this tab leads back home.
    pub fn is_last(self) -> bool {
        self.next() == TabId::Home
    }
}
