// ==========================================
// Recruit Desk - command line entry
// ==========================================
// Commands and options are defined in cli.rs (`recruit-desk --help`)
//
// Database: RECRUIT_DESK_DB_PATH or the user data directory
// Accounts: JSON file named by RECRUIT_DESK_CREDENTIALS
// ==========================================

mod cli;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{
    input_flag, CandidatesArgs, Cli, Command, HistoryArgs, ImportArgs, LogFormatArg, PrefsArgs,
    RenderArgs,
};
use recruit_desk::app::{load_authenticator, AppState};
use recruit_desk::auth::AuthOutcome;
use recruit_desk::config::get_default_db_path;
use recruit_desk::domain::{CandidateField, Credentials, Language, MessageKind, User};
use recruit_desk::engine::composer;
use recruit_desk::i18n::{t_in, t_in_with_args};
use recruit_desk::{logging, ApiError};
use tracing::warn;

fn sign_in(cli: &Cli, language: Language) -> Result<User> {
    let username = cli.user.as_deref().context("--user is required")?;
    let password = cli.password.as_deref().context("--password is required")?;

    let authenticator = load_authenticator()?;
    match authenticator.authenticate(&Credentials::new(username, password), language) {
        AuthOutcome::Granted(user) => Ok(user),
        AuthOutcome::Denied => bail!(t_in("auth.denied", language)),
    }
}

/// Surface API errors in the operator's language; details go to the log
fn user_facing(err: ApiError, language: Language) -> anyhow::Error {
    tracing::debug!(error = %err, "api error");
    anyhow!(err.user_message(language))
}

fn field_list(fields: &[CandidateField]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

fn cmd_render(state: &AppState, cli: &Cli, args: &RenderArgs, language: Language) -> Result<()> {
    let kind = MessageKind::from(args.kind);

    let ignored = args.ignored_inputs();
    if !ignored.is_empty() {
        let flags: Vec<&str> = ignored.iter().map(|input| input_flag(*input)).collect();
        warn!(kind = %kind, ignored = ?flags, "inputs not used by this message kind");
        eprintln!(
            "{}",
            t_in_with_args("compose.ignored_inputs", language, &[("inputs", &flags.join(", "))])
        );
    }

    let mut form = state
        .composer_api
        .new_form(language, Local::now().date_naive())
        .map_err(|e| user_facing(e, language))?
        .with_kind(kind);

    if let Some(date) = &args.date {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(parsed) if args.day.is_none() => form = form.with_date(parsed, language),
            _ => form.date = date.clone(),
        }
    }

    let text_fields: [(&Option<String>, &mut String); 8] = [
        (&args.name, &mut form.name),
        (&args.phone, &mut form.phone),
        (&args.location, &mut form.location_id),
        (&args.day, &mut form.day),
        (&args.time, &mut form.time),
        (&args.position, &mut form.position),
        (&args.form_link, &mut form.form_link),
        (&args.notes, &mut form.notes),
    ];
    for (value, slot) in text_fields {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }

    if !args.send {
        println!("{}", composer::preview(&form, language));
        return Ok(());
    }

    let user = sign_in(cli, language)?;
    let dispatch = state
        .composer_api
        .send(&user, &form, language, Local::now().naive_local())
        .map_err(|e| user_facing(e, language))?;

    println!("{}", dispatch.text);
    println!();
    println!("{}", dispatch.link);
    Ok(())
}

fn cmd_import(state: &AppState, cli: &Cli, args: &ImportArgs, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let response = state
        .candidate_api
        .import_file(&user, &args.file)
        .map_err(|e| user_facing(e, language))?;

    println!(
        "{}",
        t_in_with_args("import.finished", language, &[("count", &response.imported.to_string())])
    );
    if !response.missing_columns.is_empty() {
        println!(
            "{}",
            t_in_with_args(
                "import.missing_columns",
                language,
                &[("columns", &field_list(&response.missing_columns))]
            )
        );
    }
    let loose = response.loosely_matched();
    if !loose.is_empty() {
        println!(
            "{}",
            t_in_with_args("import.partial_columns", language, &[("columns", &field_list(&loose))])
        );
    }
    println!("batch: {}", response.batch_id);
    Ok(())
}

fn cmd_candidates(state: &AppState, cli: &Cli, args: &CandidatesArgs, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let api = &state.candidate_api;

    if args.clear {
        let removed = api.clear(&user).map_err(|e| user_facing(e, language))?;
        println!(
            "{}",
            t_in_with_args("candidates.deleted", language, &[("count", &removed.to_string())])
        );
        return Ok(());
    }

    if !args.delete.is_empty() {
        let removed = match args.delete.as_slice() {
            [id] => api.delete(&user, id).map(|_| 1),
            ids => api.delete_many(&user, ids),
        }
        .map_err(|e| user_facing(e, language))?;
        println!(
            "{}",
            t_in_with_args("candidates.deleted", language, &[("count", &removed.to_string())])
        );
        return Ok(());
    }

    if let Some((id, text)) = args.notes() {
        api.update_notes(&user, id, text)
            .map_err(|e| user_facing(e, language))?;
        println!("{}", t_in("candidates.notes_saved", language));
        return Ok(());
    }

    let records = api.list(&user).map_err(|e| user_facing(e, language))?;
    if records.is_empty() {
        println!("{}", t_in("candidates.empty", language));
    }
    for record in records {
        println!("{}\t{}\t{}\t{}", record.id, record.full_name(), record.phone(), record.notes);
    }
    Ok(())
}

fn cmd_history(state: &AppState, cli: &Cli, args: &HistoryArgs, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let entries = state
        .history_api
        .list(&user, args.limit)
        .map_err(|e| user_facing(e, language))?;
    if entries.is_empty() {
        println!("{}", t_in("history.empty", language));
    }
    for entry in entries {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            entry.display_timestamp(),
            t_in(entry.kind.label_key(), language),
            entry.candidate_name,
            entry.phone,
            entry.details,
            t_in(entry.status.label_key(), language),
            entry.sender,
        );
    }
    Ok(())
}

fn cmd_clear_history(state: &AppState, cli: &Cli, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let removed = state
        .history_api
        .clear(&user)
        .map_err(|e| user_facing(e, language))?;
    println!(
        "{}",
        t_in_with_args("history.cleared", language, &[("count", &removed.to_string())])
    );
    Ok(())
}

fn cmd_templates(state: &AppState, cli: &Cli, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let templates = state
        .template_api
        .list(&user, language)
        .map_err(|e| user_facing(e, language))?;

    for view in templates {
        println!("==== {} ({}) ====", view.label, view.kind);
        println!("{}", view.body);
        println!();
    }
    Ok(())
}

fn cmd_prefs(state: &AppState, cli: &Cli, args: &PrefsArgs, language: Language) -> Result<()> {
    let user = sign_in(cli, language)?;
    let api = &state.preferences_api;

    let prefs = if args.set_language.is_some() || args.theme.is_some() {
        api.update(
            &user,
            args.set_language.map(Language::from),
            args.theme.map(Into::into),
        )
        .map_err(|e| user_facing(e, language))?
    } else {
        api.get(&user).map_err(|e| user_facing(e, language))?
    };

    let form_link = match &args.form_link {
        Some(link) => api.set_form_link(&user, link),
        None => api.form_link(&user),
    }
    .map_err(|e| user_facing(e, language))?;

    if args.changes_anything() {
        println!("{}", t_in("prefs.saved", language));
    }
    println!("{}", t_in_with_args("prefs.language", language, &[("value", prefs.language.code())]));
    println!("{}", t_in_with_args("prefs.theme", language, &[("value", prefs.theme.to_db_str())]));
    println!("{}", t_in_with_args("prefs.form_link", language, &[("value", &form_link)]));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.log_format {
        LogFormatArg::Pretty => logging::init(),
        LogFormatArg::Json => logging::init_json(),
    }

    let db_path = get_default_db_path();
    let state = AppState::new(db_path).map_err(|e| anyhow!(e.to_string()))?;

    let language = match cli.lang {
        Some(lang) => Language::from(lang),
        None => state.config.ui_preferences()?.language,
    };

    match &cli.command {
        Command::Render(args) => cmd_render(&state, &cli, args, language),
        Command::Import(args) => cmd_import(&state, &cli, args, language),
        Command::Candidates(args) => cmd_candidates(&state, &cli, args, language),
        Command::History(args) => cmd_history(&state, &cli, args, language),
        Command::ClearHistory => cmd_clear_history(&state, &cli, language),
        Command::Templates => cmd_templates(&state, &cli, language),
        Command::Prefs(args) => cmd_prefs(&state, &cli, args, language),
    }
}
