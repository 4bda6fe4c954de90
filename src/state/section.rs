/// Top-level sections the navbar can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Technology,
}

impl Section {
    /// Navbar order
    pub const ALL: [Section; 3] = [Section::Home, Section::About, Section::Technology];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Technology => "Technology",
        }
    }
}
