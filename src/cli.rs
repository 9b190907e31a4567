//! Command line definitions for the recruit-desk binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use recruit_desk::domain::{ComposeInput, Language, MessageKind, Theme};

#[derive(Parser)]
#[command(
    name = "recruit-desk",
    version,
    about = "Recruiting office assistant - candidate messages and spreadsheet import",
    long_about = "Render bilingual WhatsApp messages for candidates, import candidate \
                  spreadsheets and review the message history.\n\n\
                  Database: RECRUIT_DESK_DB_PATH or the user data directory.\n\
                  Accounts: JSON file named by RECRUIT_DESK_CREDENTIALS."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output language (default: the saved preference).
    #[arg(long = "lang", value_enum, global = true)]
    pub lang: Option<LangArg>,

    /// Account name for commands that need a signed-in user.
    #[arg(long = "user", value_name = "NAME", global = true)]
    pub user: Option<String>,

    /// Account password.
    #[arg(long = "password", value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Preview a message, or send it with --send.
    Render(RenderArgs),

    /// Import a candidate spreadsheet (CSV, Excel, ODS).
    Import(ImportArgs),

    /// List, annotate or delete imported candidates.
    Candidates(CandidatesArgs),

    /// Show sent messages, newest first.
    History(HistoryArgs),

    /// Delete the whole message history.
    ClearHistory,

    /// Show every message template in the active language.
    Templates,

    /// Show or change the saved preferences.
    Prefs(PrefsArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Message kind.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: KindArg,

    /// Log the message and print the wa.me link (requires --user/--password).
    #[arg(long = "send")]
    pub send: bool,

    #[arg(long = "name")]
    pub name: Option<String>,

    #[arg(long = "phone")]
    pub phone: Option<String>,

    /// Interview location id.
    #[arg(long = "location", value_name = "ID")]
    pub location: Option<String>,

    /// Interview date; YYYY-MM-DD also fills the week day.
    #[arg(long = "date")]
    pub date: Option<String>,

    #[arg(long = "day")]
    pub day: Option<String>,

    #[arg(long = "time")]
    pub time: Option<String>,

    #[arg(long = "position")]
    pub position: Option<String>,

    #[arg(long = "form-link", value_name = "URL")]
    pub form_link: Option<String>,

    #[arg(long = "notes")]
    pub notes: Option<String>,
}

impl RenderArgs {
    /// Inputs given on the command line that the chosen kind never renders
    pub fn ignored_inputs(&self) -> Vec<ComposeInput> {
        let given = [
            (ComposeInput::Location, self.location.is_some()),
            (ComposeInput::Date, self.date.is_some()),
            (ComposeInput::Day, self.day.is_some()),
            (ComposeInput::Time, self.time.is_some()),
            (ComposeInput::FormLink, self.form_link.is_some()),
            (ComposeInput::Position, self.position.is_some()),
        ];
        let relevant = MessageKind::from(self.kind).relevant_inputs();

        given
            .into_iter()
            .filter(|(input, is_given)| *is_given && !relevant.contains(input))
            .map(|(input, _)| input)
            .collect()
    }
}

/// Flag name of a compose input, for messages
pub fn input_flag(input: ComposeInput) -> &'static str {
    match input {
        ComposeInput::Location => "--location",
        ComposeInput::Date => "--date",
        ComposeInput::Day => "--day",
        ComposeInput::Time => "--time",
        ComposeInput::FormLink => "--form-link",
        ComposeInput::Position => "--position",
    }
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Spreadsheet to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct CandidatesArgs {
    /// Replace a candidate's notes; TEXT may start with a dash.
    #[arg(
        long = "notes",
        num_args = 2,
        value_names = ["ID", "TEXT"],
        allow_hyphen_values = true,
        conflicts_with_all = ["delete", "clear"]
    )]
    pub notes: Option<Vec<String>>,

    /// Delete a candidate; repeat to delete several.
    #[arg(long = "delete", value_name = "ID", conflicts_with = "clear")]
    pub delete: Vec<String>,

    /// Delete every imported candidate.
    #[arg(long = "clear")]
    pub clear: bool,
}

impl CandidatesArgs {
    /// `--notes ID TEXT` as a pair
    pub fn notes(&self) -> Option<(&str, &str)> {
        match self.notes.as_deref() {
            Some([id, text]) => Some((id.as_str(), text.as_str())),
            _ => None,
        }
    }
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Show only the newest N entries.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct PrefsArgs {
    /// Save the display language.
    #[arg(long = "set-language", value_enum, value_name = "LANG")]
    pub set_language: Option<LangArg>,

    /// Save the display theme.
    #[arg(long = "theme", value_enum)]
    pub theme: Option<ThemeArg>,

    /// Override the info-collection form link (admin); "" restores the default.
    #[arg(long = "form-link", value_name = "URL")]
    pub form_link: Option<String>,
}

impl PrefsArgs {
    pub fn changes_anything(&self) -> bool {
        self.set_language.is_some() || self.theme.is_some() || self.form_link.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Interview,
    Reminder,
    #[value(alias = "info")]
    InfoCollection,
    Rejection,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Interview => MessageKind::Interview,
            KindArg::Reminder => MessageKind::Reminder,
            KindArg::InfoCollection => MessageKind::InfoCollection,
            KindArg::Rejection => MessageKind::Rejection,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    Ar,
    En,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Ar => Language::Ar,
            LangArg::En => Language::En,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Sepia,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Sepia => Theme::Sepia,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("recruit-desk").chain(args.iter().copied()))
    }

    #[test]
    fn test_send_flag_does_not_take_the_kind() {
        let cli = parse(&["render", "--send", "interview", "--name", "Sara"]).unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert!(args.send);
        assert_eq!(args.kind, KindArg::Interview);
        assert_eq!(args.name.as_deref(), Some("Sara"));
    }

    #[test]
    fn test_kind_names() {
        for (raw, kind) in [
            ("info-collection", KindArg::InfoCollection),
            ("info", KindArg::InfoCollection),
            ("rejection", KindArg::Rejection),
        ] {
            let Command::Render(args) = parse(&["render", raw]).unwrap().command else {
                panic!("expected render");
            };
            assert_eq!(args.kind, kind);
        }
        assert!(parse(&["render", "welcome"]).is_err());
        assert!(parse(&["render"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = parse(&[
            "history", "--limit", "5", "--lang", "ar", "--user", "reem", "--password", "p",
            "--log-format", "json",
        ])
        .unwrap();
        assert_eq!(cli.lang, Some(LangArg::Ar));
        assert_eq!(cli.user.as_deref(), Some("reem"));
        assert_eq!(cli.log_format, LogFormatArg::Json);
        let Command::History(args) = cli.command else {
            panic!("expected history");
        };
        assert_eq!(args.limit, Some(5));

        assert!(parse(&["history", "--limit", "many"]).is_err());
    }

    #[test]
    fn test_notes_keeps_text_starting_with_dashes() {
        let cli = parse(&["candidates", "--notes", "c1", "--follow up--"]).unwrap();
        let Command::Candidates(args) = cli.command else {
            panic!("expected candidates");
        };
        assert_eq!(args.notes(), Some(("c1", "--follow up--")));
        assert!(!args.clear);
    }

    #[test]
    fn test_notes_without_text_is_rejected() {
        assert!(parse(&["candidates", "--notes", "c1"]).is_err());
        assert!(parse(&["candidates", "--notes"]).is_err());
    }

    #[test]
    fn test_delete_repeats_and_conflicts() {
        let cli = parse(&["candidates", "--delete", "a", "--delete", "b"]).unwrap();
        let Command::Candidates(args) = cli.command else {
            panic!("expected candidates");
        };
        assert_eq!(args.delete, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(args.notes(), None);

        assert!(parse(&["candidates", "--delete", "a", "--clear"]).is_err());
        assert!(parse(&["candidates", "--clear", "--notes", "c1", "x"]).is_err());
    }

    #[test]
    fn test_ignored_inputs_follow_kind() {
        let Command::Render(args) = parse(&[
            "render", "reminder", "--location", "shorafa", "--time", "10:00", "--position", "Driver",
        ])
        .unwrap()
        .command
        else {
            panic!("expected render");
        };
        assert_eq!(
            args.ignored_inputs(),
            vec![ComposeInput::Time, ComposeInput::Position]
        );
        assert_eq!(input_flag(ComposeInput::Time), "--time");

        let Command::Render(args) = parse(&["render", "rejection", "--name", "Sara"]).unwrap().command
        else {
            panic!("expected render");
        };
        assert!(args.ignored_inputs().is_empty());
    }

    #[test]
    fn test_prefs_args() {
        let Command::Prefs(args) = parse(&["prefs"]).unwrap().command else {
            panic!("expected prefs");
        };
        assert!(!args.changes_anything());

        let Command::Prefs(args) = parse(&["prefs", "--set-language", "en", "--theme", "sepia"])
            .unwrap()
            .command
        else {
            panic!("expected prefs");
        };
        assert_eq!(Language::from(args.set_language.unwrap()), Language::En);
        assert_eq!(Theme::from(args.theme.unwrap()), Theme::Sepia);
        assert!(parse(&["prefs", "--theme", "blue"]).is_err());
    }
}
