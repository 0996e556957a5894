// Walk through the widgets against a real dialog binary:
//
//   cargo run --example tour -- menu
//   cargo run --example tour -- --title "Setup" --no-shadow checklist

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use dlgwrap::{CheckItem, Dialog, MenuItem, SimpleFormOptions, TextboxMode};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Widget {
    Menu,
    Checklist,
    Radiolist,
    Inputbox,
    Passwordbox,
    Yesno,
    Msgbox,
    Calendar,
    Timebox,
    Fselect,
    Dselect,
    Textbox,
    Form,
    Pause,
}

#[derive(Debug, Parser)]
#[command(about = "Show one dlgwrap widget and print the decoded result")]
struct Args {
    #[arg(value_enum)]
    widget: Widget,

    /// Title inside the box border.
    #[arg(long)]
    title: Option<String>,

    /// Backdrop title at the top of the screen.
    #[arg(long)]
    backtitle: Option<String>,

    /// Force --no-shadow.
    #[arg(long)]
    no_shadow: bool,

    /// Path to the dialog binary (otherwise $DIALOG, then $PATH).
    #[arg(long)]
    program: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dlgwrap=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut dialog = Dialog::new();
    dialog.options_mut().title = args.title;
    dialog.options_mut().backtitle = args.backtitle;
    dialog.options_mut().program = args.program;
    if args.no_shadow {
        dialog.options_mut().shadow = Some(false);
    }

    match args.widget {
        Widget::Menu => {
            let items = [
                MenuItem::new("backup", "Back up the system"),
                MenuItem::new("restore", "Restore from backup"),
                MenuItem::new("quit", "Do nothing"),
            ];
            report(dialog.menu("Pick an action", &items, 0, 0, 0)?);
        }
        Widget::Checklist => {
            let items = [
                CheckItem::new("eth0", "wired", true),
                CheckItem::new("wlan0", "wireless", false),
                CheckItem::new("lo", "loopback", false),
            ];
            report(dialog.checklist("Enable interfaces", &items, 0, 0, 0)?);
        }
        Widget::Radiolist => {
            let items = [
                CheckItem::new("vim", "the one true editor", true),
                CheckItem::new("emacs", "the other one", false),
            ];
            report(dialog.radiolist("Default editor", &items, 0, 0, 0)?);
        }
        Widget::Inputbox => {
            report(dialog.inputbox("Hostname?", 0, 0, Some("localhost"))?);
        }
        Widget::Passwordbox => {
            report(dialog.passwordbox("Root password?", 0, 0, None)?);
        }
        Widget::Yesno => {
            report(dialog.yesno("Proceed with installation?", 0, 0)?);
        }
        Widget::Msgbox => {
            report(dialog.msgbox("Installation finished.", 0, 0)?);
        }
        Widget::Calendar => {
            report(dialog.calendar("Schedule the backup", 0, 0, None)?);
        }
        Widget::Timebox => {
            report(dialog.timebox("At what time?", 0, 0, None)?);
        }
        Widget::Fselect => {
            report(dialog.fselect(Path::new("/etc/"), 10, 60)?);
        }
        Widget::Dselect => {
            report(dialog.dselect(Path::new("/var/"), 10, 60)?);
        }
        Widget::Textbox => {
            report(dialog.textbox(Path::new("/etc/hostname"), TextboxMode::Text, 0, 0)?);
        }
        Widget::Form => {
            let items = [
                ("Name:".to_string(), String::new()),
                ("Postal Code:".to_string(), "12345".to_string()),
            ];
            report(dialog.simple_form("Edit your values", &items, &SimpleFormOptions::default())?);
        }
        Widget::Pause => {
            report(dialog.pause("Rebooting in a moment", 10, 40, 5)?);
        }
    }

    Ok(())
}

fn report<T: std::fmt::Debug>(result: Option<T>) {
    match result {
        Some(value) => println!("confirmed: {value:?}"),
        None => println!("cancelled"),
    }
}
