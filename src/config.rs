use clap::ValueEnum;

/// Layout of a rendered state-transition table.
#[derive(ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TableStyle {
    /// Cells boxed with `+---+` borders.
    #[default]
    Grid,
    /// Columns separated by whitespace only.
    Plain,
}

/// Direction in which graphviz lays out a graph.
#[derive(ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RankDir {
    #[default]
    #[value(name = "lr")]
    LeftRight,
    #[value(name = "tb")]
    TopBottom,
}

impl RankDir {
    /// The value of the dot `rankdir` attribute.
    pub const fn as_dot(self) -> &'static str {
        match self {
            RankDir::LeftRight => "LR",
            RankDir::TopBottom => "TB",
        }
    }
}

/// Options shared by the table renderer and the dot exporter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderConfig {
    pub table_style: TableStyle,
    pub rankdir: RankDir,
    /// Identifier of the emitted dot graph.
    pub graph_name: String,
    /// Prefix of the initial state's row label.
    pub initial_marker: String,
    /// Prefix of the final states' row labels.
    pub final_marker: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_style: TableStyle::Grid,
            rankdir: RankDir::LeftRight,
            graph_name: "fsm".to_owned(),
            initial_marker: "->".to_owned(),
            final_marker: "*".to_owned(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_style = style;
        self
    }

    #[must_use]
    pub fn with_rankdir(mut self, rankdir: RankDir) -> Self {
        self.rankdir = rankdir;
        self
    }

    #[must_use]
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    #[must_use]
    pub fn with_markers(mut self, initial: impl Into<String>, fin: impl Into<String>) -> Self {
        self.initial_marker = initial.into();
        self.final_marker = fin.into();
        self
    }
}
