// Global presentation options and their compilation to dialog flags

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::command::ArgList;

/// Name of the dialog binary when no override is configured.
pub const DEFAULT_PROGRAM: &str = "dialog";

/// Environment variable consulted for the dialog binary path.
pub const PROGRAM_ENV_VAR: &str = "DIALOG";

/// Presentation settings applied to every widget shown through one
/// [`Dialog`](crate::Dialog) handle.
///
/// Every field defaults to "unset" and an unset field contributes no
/// command-line token at all: the compiled flag list is the minimal set
/// consistent with what was explicitly configured. Fields may be mutated
/// freely between widget calls; each call reads the current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Width/height ratio used by dialog's auto-sizing (its own default is 9).
    #[serde(default)]
    pub aspect: Option<u32>,

    /// Backdrop title shown at the top of the screen, behind every box.
    #[serde(default)]
    pub backtitle: Option<String>,

    /// Sound the audible alarm on each screen refresh.
    #[serde(default)]
    pub beep: bool,

    /// Screen position (row, column) of the upper-left corner of each box.
    #[serde(default)]
    pub begin: Option<(u32, u32)>,

    /// Honor embedded newlines in box text instead of reflowing.
    /// Carried in the bag for completeness; dialog reads it from widget text
    /// handling, and the compiler does not emit it.
    #[serde(default)]
    pub cr_wrap: bool,

    /// Add a per-row help column to checklist, radiolist, and menu rows,
    /// shown on the bottom line for the highlighted row. Changes the argument
    /// shape of those widgets.
    #[serde(default)]
    pub item_help: bool,

    /// Suppress the Cancel button (Esc still cancels).
    #[serde(default)]
    pub no_cancel: bool,

    /// Shadow under each box. Tri-state: `None` leaves dialog's default
    /// alone, `Some(true)` forces `--shadow`, `Some(false)` forces
    /// `--no-shadow`.
    #[serde(default)]
    pub shadow: Option<bool>,

    /// Seconds to sleep after a box is dismissed.
    #[serde(default)]
    pub sleep: Option<u32>,

    /// Expand tab characters to spaces.
    #[serde(default)]
    pub tab_correct: bool,

    /// Spaces per tab when `tab_correct` is set (dialog's default is 8).
    #[serde(default)]
    pub tab_len: Option<u32>,

    /// Title line inside the top border of each box.
    #[serde(default)]
    pub title: Option<String>,

    /// Path to the dialog binary. When unset, the `DIALOG` environment
    /// variable is consulted, then plain `dialog` resolved via `PATH`.
    #[serde(default)]
    pub program: Option<PathBuf>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the program to invoke: explicit override, then the `DIALOG`
    /// environment variable, then the bare default name.
    pub fn program(&self) -> String {
        if let Some(path) = &self.program {
            return path.to_string_lossy().to_string();
        }
        match std::env::var(PROGRAM_ENV_VAR) {
            Ok(path) if !path.is_empty() => path,
            _ => DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Compile the set fields into global flag tokens, in a fixed order.
    ///
    /// Values are passed through unvalidated; dialog itself rejects anything
    /// it cannot digest.
    pub fn to_args(&self) -> ArgList {
        let mut args = ArgList::new();

        // Tri-state: only a touched shadow setting emits anything.
        match self.shadow {
            Some(true) => {
                args.flag("--shadow");
            }
            Some(false) => {
                args.flag("--no-shadow");
            }
            None => {}
        }

        if let Some(aspect) = self.aspect {
            args.flag("--aspect").num(aspect);
        }
        if self.beep {
            args.flag("--beep");
        }
        if let Some((row, col)) = self.begin {
            args.flag("--begin").num(row).num(col);
        }
        if let Some(backtitle) = &self.backtitle {
            args.flag("--backtitle").text(backtitle);
        }
        if self.item_help {
            args.flag("--item-help");
        }
        if let Some(sleep) = self.sleep {
            args.flag("--sleep").num(sleep);
        }
        if self.tab_correct {
            args.flag("--tab-correct");
        }
        if let Some(tab_len) = self.tab_len {
            args.flag("--tab-len").num(tab_len);
        }
        if let Some(title) = &self.title {
            args.flag("--title").text(title);
        }
        if self.no_cancel {
            args.flag("--nocancel");
        }

        args
    }
}
