// The widget invoker: one method per dialog widget

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};

use crate::command::ArgList;
use crate::decode;
use crate::error::Error;
use crate::form::{FormField, SimpleFormOptions, build_simple_form};
use crate::options::Options;
use crate::runner::{CommandRunner, ProcessRunner};
use crate::types::{CheckItem, MenuItem, TextboxMode};

/// Result of a widget call. `Ok(None)` is the absence value: the user
/// cancelled or escaped, or the dialog program failed or was missing. An
/// `Err` only occurs when dialog confirmed but its output violated the
/// widget's decoding contract.
pub type DialogResult<T> = Result<Option<T>, Error>;

/// A reusable handle to the dialog program.
///
/// Holds the presentation [`Options`] applied to every widget and the runner
/// that executes the program. Each widget method blocks until the spawned
/// process exits, then maps its exit status and captured stdout to a typed
/// result. Options are read fresh on every call, so they may be adjusted
/// between widgets.
///
/// ```no_run
/// use dlgwrap::Dialog;
///
/// let mut dialog = Dialog::new();
/// dialog.options_mut().title = Some("Setup".to_string());
/// if dialog.yesno("Proceed with installation?", 0, 0)?.is_some() {
///     // confirmed
/// }
/// # Ok::<(), dlgwrap::Error>(())
/// ```
pub struct Dialog {
    options: Options,
    runner: Box<dyn CommandRunner>,
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog {
    /// Handle backed by the real dialog binary.
    pub fn new() -> Self {
        Self::with_runner(Box::new(ProcessRunner))
    }

    /// Handle backed by a custom runner. Tests use this to substitute a
    /// scripted fake for the external program.
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            options: Options::default(),
            runner,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Assemble the full argv, run the program, and apply the exit-status
    /// contract: only exit 0 yields captured text for decoding.
    fn exec(&self, widget_args: ArgList) -> DialogResult<String> {
        let program = self.options.program();
        let mut args = self.options.to_args();
        args.flag("--stdout");
        args.extend(widget_args);
        let args = args.into_vec();

        tracing::debug!(%program, ?args, "invoking dialog");

        match self.runner.run(&program, &args) {
            Ok(out) if out.success() => Ok(Some(out.stdout)),
            Ok(out) => {
                tracing::debug!(code = ?out.code, "dialog returned no result");
                Ok(None)
            }
            Err(err) => {
                // A missing or unrunnable binary collapses into the same
                // "no result" outcome as a cancel.
                tracing::warn!(%program, %err, "failed to run dialog");
                Ok(None)
            }
        }
    }

    /// Month/day/year picker. `date` seeds the initial selection; `None`
    /// uses today. Returns the picked date, decoded from dialog's
    /// `day/month/year` output.
    pub fn calendar(
        &self,
        text: &str,
        height: u32,
        width: u32,
        date: Option<NaiveDate>,
    ) -> DialogResult<NaiveDate> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let mut args = ArgList::new();
        args.flag("--calendar")
            .text(text)
            .num(height)
            .num(width)
            .num(date.day())
            .num(date.month())
            .num(date.year());

        match self.exec(args)? {
            Some(raw) => decode::decode_date(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Multi-selection list. Returns the tags of all rows left switched on,
    /// which may legitimately be none.
    pub fn checklist(
        &self,
        text: &str,
        items: &[CheckItem],
        height: u32,
        width: u32,
        list_height: u32,
    ) -> DialogResult<Vec<String>> {
        let mut args = ArgList::new();
        args.flag("--checklist")
            .text(text)
            .num(height)
            .num(width)
            .num(list_height);
        self.push_check_items(&mut args, items);

        Ok(self.exec(args)?.map(|raw| decode::decode_tags(&raw)))
    }

    /// Single-selection list with radio-button semantics. Returns the
    /// selected tag verbatim.
    pub fn radiolist(
        &self,
        text: &str,
        items: &[CheckItem],
        height: u32,
        width: u32,
        list_height: u32,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--radiolist")
            .text(text)
            .num(height)
            .num(width)
            .num(list_height);
        self.push_check_items(&mut args, items);

        self.exec(args)
    }

    /// Menu of tagged entries. Returns the chosen tag verbatim.
    pub fn menu(
        &self,
        text: &str,
        items: &[MenuItem],
        height: u32,
        width: u32,
        menu_height: u32,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--menu")
            .text(text)
            .num(height)
            .num(width)
            .num(menu_height);
        for item in items {
            args.text(&item.tag).text(&item.description);
            if self.options.item_help {
                args.text(item.help.as_deref().unwrap_or(""));
            }
        }

        self.exec(args)
    }

    /// File-selection dialog seeded with `path`. Returns the accepted path
    /// as text.
    pub fn fselect(&self, path: &Path, height: u32, width: u32) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--fselect")
            .text(path.to_string_lossy())
            .num(height)
            .num(width);
        self.exec(args)
    }

    /// Directory-selection dialog seeded with `path`.
    pub fn dselect(&self, path: &Path, height: u32, width: u32) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--dselect")
            .text(path.to_string_lossy())
            .num(height)
            .num(width);
        self.exec(args)
    }

    /// Message shown without waiting for acknowledgement; dialog exits
    /// immediately and leaves the text on screen.
    pub fn infobox(&self, text: &str, height: u32, width: u32) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--infobox").text(text).num(height).num(width);
        self.exec(args)
    }

    /// Message with a single OK button. `Some(())` means acknowledged.
    pub fn msgbox(&self, text: &str, height: u32, width: u32) -> DialogResult<()> {
        let mut args = ArgList::new();
        args.flag("--msgbox").text(text).num(height).num(width);
        Ok(self.exec(args)?.map(|_| ()))
    }

    /// Yes/No question. `Some(true)` on Yes; No and Escape are both the
    /// absence value, exactly as the exit status reports them.
    pub fn yesno(&self, text: &str, height: u32, width: u32) -> DialogResult<bool> {
        let mut args = ArgList::new();
        args.flag("--yesno").text(text).num(height).num(width);
        Ok(self.exec(args)?.map(|_| true))
    }

    /// One-line text input, optionally seeded with `init`.
    pub fn inputbox(
        &self,
        text: &str,
        height: u32,
        width: u32,
        init: Option<&str>,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--inputbox").text(text).num(height).num(width);
        if let Some(init) = init {
            args.text(init);
        }
        self.exec(args)
    }

    /// Like [`inputbox`](Self::inputbox) but with hidden input. Seeding a
    /// visible-in-process-table default password is possible but unwise.
    pub fn passwordbox(
        &self,
        text: &str,
        height: u32,
        width: u32,
        init: Option<&str>,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--passwordbox").text(text).num(height).num(width);
        if let Some(init) = init {
            args.text(init);
        }
        self.exec(args)
    }

    /// File viewer in one of three modes: static, tailing, or
    /// background-tailing.
    pub fn textbox(
        &self,
        file: &Path,
        mode: TextboxMode,
        height: u32,
        width: u32,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag(mode.flag())
            .text(file.to_string_lossy())
            .num(height)
            .num(width);
        self.exec(args)
    }

    /// Full-screen editor over a copy of `file`. Returns the edited
    /// contents.
    pub fn editbox(&self, file: &Path, height: u32, width: u32) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--editbox")
            .text(file.to_string_lossy())
            .num(height)
            .num(width);
        self.exec(args)
    }

    /// Hour/minute/second picker. `time` seeds the initial selection; `None`
    /// uses the current time.
    pub fn timebox(
        &self,
        text: &str,
        height: u32,
        width: u32,
        time: Option<NaiveTime>,
    ) -> DialogResult<NaiveTime> {
        let time = time.unwrap_or_else(|| Local::now().time());
        let mut args = ArgList::new();
        args.flag("--timebox")
            .text(text)
            .num(height)
            .num(width)
            .num(time.hour())
            .num(time.minute())
            .num(time.second());

        match self.exec(args)? {
            Some(raw) => decode::decode_time(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Form of labelled fields at explicit coordinates. Returns one value
    /// per editable field, in declaration order; read-only fields contribute
    /// nothing.
    pub fn form(
        &self,
        text: &str,
        height: u32,
        width: u32,
        form_height: u32,
        fields: &[FormField],
    ) -> DialogResult<Vec<String>> {
        let mut args = ArgList::new();
        args.flag("--form")
            .text(text)
            .num(height)
            .num(width)
            .num(form_height);
        for field in fields {
            args.text(&field.label)
                .num(field.label_y)
                .num(field.label_x)
                .text(&field.value)
                .num(field.field_y)
                .num(field.field_x)
                .num(field.field_len)
                .num(field.input_len);
        }

        Ok(self.exec(args)?.map(|raw| decode::decode_form(&raw)))
    }

    /// Vertically stacked form synthesized from (label, initial value)
    /// pairs; see [`build_simple_form`] for the layout rules.
    pub fn simple_form(
        &self,
        text: &str,
        items: &[(String, String)],
        opts: &SimpleFormOptions,
    ) -> DialogResult<Vec<String>> {
        let fields = build_simple_form(items, opts);
        self.form(text, opts.height, opts.width, opts.form_height, &fields)
    }

    /// Countdown box that dismisses itself after `seconds` unless the user
    /// answers first.
    pub fn pause(
        &self,
        text: &str,
        height: u32,
        width: u32,
        seconds: u32,
    ) -> DialogResult<String> {
        let mut args = ArgList::new();
        args.flag("--pause")
            .text(text)
            .num(height)
            .num(width)
            .num(seconds);
        self.exec(args)
    }

    /// Progress meter. Unsupported: driving `--gauge` means streaming
    /// percentage updates to the child's stdin while it runs, which this
    /// synchronous call model cannot express. Never spawns anything and
    /// always returns the absence value.
    pub fn gauge(&self, _text: &str, _height: u32, _width: u32) -> DialogResult<()> {
        Ok(None)
    }

    fn push_check_items(&self, args: &mut ArgList, items: &[CheckItem]) {
        for item in items {
            args.text(&item.tag)
                .text(&item.description)
                .on_off(item.selected);
            if self.options.item_help {
                args.text(item.help.as_deref().unwrap_or(""));
            }
        }
    }
}
