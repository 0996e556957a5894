use serde::{Deserialize, Serialize};

/// One row of a checklist or radiolist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    /// Short name dialog reports back when the row is selected.
    pub tag: String,

    /// Description shown next to the tag.
    pub description: String,

    /// Initial on/off state (for a radiolist, the one selected entry).
    pub selected: bool,

    /// Bottom-line help for the row; emitted only when
    /// [`Options::item_help`](crate::Options::item_help) is set.
    #[serde(default)]
    pub help: Option<String>,
}

impl CheckItem {
    pub fn new(tag: impl Into<String>, description: impl Into<String>, selected: bool) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            selected,
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// One row of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Short name dialog reports back when the row is chosen.
    pub tag: String,

    /// Description shown next to the tag.
    pub description: String,

    /// Bottom-line help for the row; emitted only when
    /// [`Options::item_help`](crate::Options::item_help) is set.
    #[serde(default)]
    pub help: Option<String>,
}

impl MenuItem {
    pub fn new(tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// The three file-viewer variants behind [`Dialog::textbox`](crate::Dialog::textbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextboxMode {
    /// Static viewer with scrolling and searching.
    Text,
    /// Follow the file like `tail -f`.
    Tail,
    /// Follow the file as a background task, like `tail -f &`.
    TailBg,
}

impl TextboxMode {
    pub(crate) fn flag(self) -> &'static str {
        match self {
            TextboxMode::Text => "--textbox",
            TextboxMode::Tail => "--tailbox",
            TextboxMode::TailBg => "--tailboxbg",
        }
    }
}
