//! Typed interface to the [dialog(1)] terminal widget utility.
//!
//! dlgwrap never draws anything itself. For each widget it compiles the
//! configured presentation options into global flags, appends the
//! widget-specific arguments, runs the external dialog program with its
//! result stream captured (`--stdout`), and maps the (exit status, captured
//! text) pair to a typed value:
//!
//! - exit 0 → the captured text is decoded per widget kind into a `String`,
//!   `Vec<String>`, [`chrono::NaiveDate`], [`chrono::NaiveTime`], or unit;
//! - any non-zero exit → `Ok(None)`, the absence value, covering Cancel,
//!   Escape, and a failed or missing binary alike.
//!
//! ```no_run
//! use dlgwrap::{Dialog, MenuItem};
//!
//! let mut dialog = Dialog::new();
//! dialog.options_mut().title = Some("Main menu".to_string());
//! dialog.options_mut().shadow = Some(false);
//!
//! let items = [
//!     MenuItem::new("backup", "Back up the system"),
//!     MenuItem::new("restore", "Restore from backup"),
//! ];
//! match dialog.menu("Pick an action", &items, 0, 0, 0)? {
//!     Some(tag) => println!("chose {tag}"),
//!     None => println!("cancelled"),
//! }
//! # Ok::<(), dlgwrap::Error>(())
//! ```
//!
//! Arguments are passed to the child as separate argv entries, so caller
//! text containing quotes or shell metacharacters cannot corrupt the
//! command.
//!
//! [dialog(1)]: https://invisible-island.net/dialog/

pub mod command;
pub mod decode;
mod dialog;
mod error;
pub mod form;
mod options;
pub mod runner;
mod types;

pub use dialog::{Dialog, DialogResult};
pub use error::Error;
pub use form::{FormField, SimpleFormOptions, build_simple_form};
pub use options::{DEFAULT_PROGRAM, Options, PROGRAM_ENV_VAR};
pub use runner::{CommandRunner, ProcessRunner, RunOutput};
pub use types::{CheckItem, MenuItem, TextboxMode};
