// End-to-end tests of command assembly and result mapping, run against a
// scripted runner instead of the real dialog binary.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};
use dlgwrap::{
    CheckItem, CommandRunner, Dialog, FormField, MenuItem, RunOutput, SimpleFormOptions,
    TextboxMode,
};
use insta::assert_snapshot;

/// Records every (program, argv) it receives and plays back scripted
/// responses in order.
#[derive(Default)]
struct FakeRunner {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    responses: Mutex<VecDeque<io::Result<RunOutput>>>,
}

impl FakeRunner {
    fn ok(stdout: &str) -> Self {
        Self::scripted(vec![Ok(RunOutput {
            code: Some(0),
            stdout: stdout.to_string(),
        })])
    }

    fn exit(code: i32, stdout: &str) -> Self {
        Self::scripted(vec![Ok(RunOutput {
            code: Some(code),
            stdout: stdout.to_string(),
        })])
    }

    fn spawn_failure() -> Self {
        Self::scripted(vec![Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No such file or directory",
        ))])
    }

    fn scripted(responses: Vec<io::Result<RunOutput>>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            responses: Mutex::new(responses.into()),
        }
    }

    fn call_log(&self) -> Arc<Mutex<Vec<(String, Vec<String>)>>> {
        self.calls.clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(RunOutput {
                    code: Some(0),
                    stdout: String::new(),
                })
            })
    }
}

/// Dialog wired to a fake runner plus a handle on the argv log.
fn rigged(runner: FakeRunner) -> (Dialog, Arc<Mutex<Vec<(String, Vec<String>)>>>) {
    let calls = runner.call_log();
    let mut dialog = Dialog::with_runner(Box::new(runner));
    dialog.options_mut().program = Some(PathBuf::from("dialog"));
    (dialog, calls)
}

fn argv_string(calls: &Arc<Mutex<Vec<(String, Vec<String>)>>>) -> String {
    let calls = calls.lock().unwrap();
    let (program, args) = calls.last().expect("no dialog invocation recorded");
    let mut parts = vec![program.clone()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

#[test]
fn snapshot_menu_with_global_options() {
    let (mut dialog, calls) = rigged(FakeRunner::ok("restore\n"));
    dialog.options_mut().title = Some("Main menu".to_string());
    dialog.options_mut().backtitle = Some("acme installer".to_string());
    dialog.options_mut().shadow = Some(false);
    dialog.options_mut().no_cancel = true;

    let items = [
        MenuItem::new("backup", "Back up the system"),
        MenuItem::new("restore", "Restore from backup"),
    ];
    let result = dialog.menu("Pick an action", &items, 20, 60, 8).unwrap();

    assert_eq!(result.as_deref(), Some("restore\n"));
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --no-shadow --backtitle acme installer --title Main menu --nocancel --stdout --menu Pick an action 20 60 8 backup Back up the system restore Restore from backup"
    );
}

#[test]
fn snapshot_checklist_with_item_help() {
    let (mut dialog, calls) = rigged(FakeRunner::ok(""));
    dialog.options_mut().item_help = true;

    let items = [
        CheckItem::new("eth0", "wired", true).with_help("on-board NIC"),
        CheckItem::new("wlan0", "wireless", false).with_help("usb adapter"),
    ];
    dialog.checklist("Interfaces", &items, 0, 0, 0).unwrap();

    assert_snapshot!(
        argv_string(&calls),
        @"dialog --item-help --stdout --checklist Interfaces 0 0 0 eth0 wired on on-board NIC wlan0 wireless off usb adapter"
    );
}

#[test]
fn test_item_help_without_help_text_emits_empty_token() {
    let (mut dialog, calls) = rigged(FakeRunner::ok(""));
    dialog.options_mut().item_help = true;

    dialog
        .checklist("Pick", &[CheckItem::new("a", "A", false)], 0, 0, 0)
        .unwrap();

    let calls = calls.lock().unwrap();
    let (_, args) = calls.last().unwrap();
    // The help column still occupies its argv slot.
    assert_eq!(&args[args.len() - 4..], ["a", "A", "off", ""]);
}

#[test]
fn snapshot_calendar_with_seed_date() {
    let (dialog, calls) = rigged(FakeRunner::ok("25/12/2024\n"));
    let picked = dialog
        .calendar(
            "Pick a date",
            0,
            0,
            NaiveDate::from_ymd_opt(2024, 12, 25),
        )
        .unwrap();

    assert_eq!(picked, NaiveDate::from_ymd_opt(2024, 12, 25));
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --stdout --calendar Pick a date 0 0 25 12 2024"
    );
}

#[test]
fn snapshot_form_fields() {
    let (dialog, calls) = rigged(FakeRunner::ok("alice\n"));
    let fields = [
        FormField::new("Host:", 1, 1, "db01", 1, 8, 0, 0),
        FormField::new("User:", 2, 1, "alice", 2, 8, 24, 0),
    ];
    let values = dialog.form("Credentials", 0, 0, 0, &fields).unwrap();

    // The read-only first field wrote no line.
    assert_eq!(values, Some(vec!["alice".to_string()]));
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --stdout --form Credentials 0 0 0 Host: 1 1 db01 1 8 0 0 User: 2 1 alice 2 8 24 0"
    );
}

#[test]
fn snapshot_pause_and_textbox_modes() {
    let (dialog, calls) = rigged(FakeRunner::scripted(vec![
        Ok(RunOutput {
            code: Some(0),
            stdout: String::new(),
        }),
        Ok(RunOutput {
            code: Some(0),
            stdout: String::new(),
        }),
    ]));

    dialog.pause("Rebooting soon", 10, 40, 15).unwrap();
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --stdout --pause Rebooting soon 10 40 15"
    );

    dialog
        .textbox(Path::new("/var/log/syslog"), TextboxMode::Tail, 0, 0)
        .unwrap();
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --stdout --tailbox /var/log/syslog 0 0"
    );
}

#[test]
fn test_caller_text_reaches_argv_verbatim() {
    let (dialog, calls) = rigged(FakeRunner::ok(""));
    dialog
        .msgbox(r#"Path is "C:\tmp"; continue?"#, 0, 0)
        .unwrap();

    let calls = calls.lock().unwrap();
    let (_, args) = calls.last().unwrap();
    assert!(args.contains(&r#"Path is "C:\tmp"; continue?"#.to_string()));
}

#[test]
fn test_nonzero_exit_is_absence_regardless_of_output() {
    let (dialog, _) = rigged(FakeRunner::exit(1, "would-be answer"));
    assert_eq!(dialog.inputbox("Name?", 0, 0, None).unwrap(), None);

    let (dialog, _) = rigged(FakeRunner::exit(255, "25/12/2024"));
    assert_eq!(dialog.calendar("Date?", 0, 0, None).unwrap(), None);
}

#[test]
fn test_spawn_failure_collapses_to_absence() {
    let (dialog, _) = rigged(FakeRunner::spawn_failure());
    assert_eq!(dialog.yesno("Continue?", 0, 0).unwrap(), None);
}

#[test]
fn test_yesno_and_msgbox_map_exit_status_only() {
    let (dialog, _) = rigged(FakeRunner::ok("whatever dialog printed"));
    assert_eq!(dialog.yesno("Continue?", 0, 0).unwrap(), Some(true));

    let (dialog, _) = rigged(FakeRunner::exit(1, ""));
    assert_eq!(dialog.yesno("Continue?", 0, 0).unwrap(), None);

    let (dialog, _) = rigged(FakeRunner::ok(""));
    assert_eq!(dialog.msgbox("Done.", 0, 0).unwrap(), Some(()));
}

#[test]
fn test_checklist_empty_selection_is_confirmed_empty() {
    let (dialog, _) = rigged(FakeRunner::ok(""));
    let selected = dialog
        .checklist("Pick none", &[CheckItem::new("a", "A", false)], 0, 0, 0)
        .unwrap();
    assert_eq!(selected, Some(Vec::new()));
}

#[test]
fn test_checklist_decodes_quoted_tags() {
    let (dialog, _) = rigged(FakeRunner::ok(r#""alpha" "beta""#));
    let selected = dialog
        .checklist(
            "Pick",
            &[
                CheckItem::new("alpha", "A", true),
                CheckItem::new("beta", "B", true),
            ],
            0,
            0,
            0,
        )
        .unwrap();
    assert_eq!(
        selected,
        Some(vec!["alpha".to_string(), "beta".to_string()])
    );
}

#[test]
fn test_malformed_calendar_output_fails_loudly() {
    let (dialog, _) = rigged(FakeRunner::ok("not a date"));
    assert!(dialog.calendar("Date?", 0, 0, None).is_err());
}

#[test]
fn test_timebox_decodes_time() {
    let (dialog, _) = rigged(FakeRunner::ok("23:05:09\n"));
    let time = dialog
        .timebox("Time?", 0, 0, NaiveTime::from_hms_opt(12, 0, 0))
        .unwrap();
    assert_eq!(time, NaiveTime::from_hms_opt(23, 5, 9));
}

#[test]
fn test_gauge_never_executes() {
    let (dialog, calls) = rigged(FakeRunner::ok(""));
    assert_eq!(dialog.gauge("Working...", 0, 0).unwrap(), None);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_simple_form_layout_and_decode() {
    let (dialog, calls) = rigged(FakeRunner::ok("bob\n90210\n"));
    let items = [
        ("Name:".to_string(), String::new()),
        ("Postal Code:".to_string(), "12345".to_string()),
    ];
    let values = dialog
        .simple_form("Edit your values", &items, &SimpleFormOptions::default())
        .unwrap();

    assert_eq!(values, Some(vec!["bob".to_string(), "90210".to_string()]));
    // Label width 13 (longest label + 1), field width 6 (longest value + 1).
    assert_snapshot!(
        argv_string(&calls),
        @"dialog --stdout --form Edit your values 0 0 0 Name: 1 1  1 13 6 0 Postal Code: 2 1 12345 2 13 6 0"
    );
}

#[test]
fn test_options_are_reread_each_call() {
    let (mut dialog, calls) = rigged(FakeRunner::scripted(vec![
        Ok(RunOutput {
            code: Some(0),
            stdout: String::new(),
        }),
        Ok(RunOutput {
            code: Some(0),
            stdout: String::new(),
        }),
    ]));

    dialog.msgbox("first", 0, 0).unwrap();
    dialog.options_mut().title = Some("Later".to_string());
    dialog.msgbox("second", 0, 0).unwrap();

    let calls = calls.lock().unwrap();
    assert!(!calls[0].1.contains(&"--title".to_string()));
    assert!(calls[1].1.contains(&"--title".to_string()));
}

#[test]
fn test_editbox_roundtrip_with_real_path() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let (dialog, calls) = rigged(FakeRunner::ok("edited contents\n"));
    let contents = dialog.editbox(file.path(), 0, 0).unwrap();

    assert_eq!(contents.as_deref(), Some("edited contents\n"));
    let calls = calls.lock().unwrap();
    assert!(
        calls[0]
            .1
            .contains(&file.path().to_string_lossy().to_string())
    );
}
