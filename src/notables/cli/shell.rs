use super::commands::{build_summarizer, current_year, report_error, AppContext};
use super::input::Input;
use super::print::{print_detail, print_messages, print_people, print_summary};
use colored::Colorize;
use notables::browse::BrowseState;
use notables::error::{NotablesError, Result};
use notables::filter::FilterField;
use notables::i18n::Labels;
use notables::model::{Language, Personality, PersonalityDraft};
use notables::session::Session;
use notables::summary::{
    summarize, Completion, SummaryGenerator, SummaryState, SummaryTicket, SummaryTracker,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Sections of `help`: a label key, then command syntax with the label key of its description.
const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "help_browsing",
        &[
            ("list", "help_list"),
            ("filter <field> [value]", "help_filter"),
            ("reset", "help_reset"),
            ("next | prev | page <n>", "help_paging"),
            ("show <id>", "help_show"),
            ("close", "help_close"),
            ("rate <1-5>", "help_rate"),
            ("lang <en|fr|ar>", "help_lang"),
            ("summary | cancel", "help_summary"),
        ],
    ),
    (
        "help_admin",
        &[
            ("login <user> <password>", "help_login"),
            ("logout", "help_logout"),
            ("search <term>", "help_search"),
            ("add <json>", "help_add"),
            ("edit <json>", "help_edit"),
            ("delete <id>", "help_delete"),
        ],
    ),
    ("help_other", &[("help", "help_help"), ("quit", "help_quit")]),
];

fn print_help(labels: &Labels, language: Language) {
    for (section, entries) in HELP {
        println!("{}", format!("{}:", labels.t(section, language)).bold());
        for (syntax, key) in *entries {
            println!("  {:<26}{}", syntax, labels.t(key, language));
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ShellCommand {
    Empty,
    List,
    Filter(FilterField, String),
    Reset,
    Next,
    Prev,
    Page(usize),
    Show(u32),
    Close,
    Rate(u8),
    Lang(Language),
    Summary,
    Cancel,
    Login(String, String),
    Logout,
    Search(String),
    Add(String),
    Edit(String),
    Delete(u32),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
enum ParseError {
    /// Arguments did not fit the verb; carries its syntax.
    Usage(&'static str),
    UnknownCommand(String),
    UnknownField(String),
    UnknownLanguage(String),
}

impl ParseError {
    fn localized(&self, labels: &Labels, language: Language) -> String {
        match self {
            ParseError::Usage(syntax) => {
                format!("{} {}", labels.t("shell_usage", language), syntax)
            }
            ParseError::UnknownCommand(verb) => format!(
                "{} {}. {}",
                labels.t("shell_unknown_command", language),
                verb,
                labels.t("shell_try_help", language)
            ),
            ParseError::UnknownField(field) => {
                format!("{} {}", labels.t("shell_unknown_field", language), field)
            }
            ParseError::UnknownLanguage(code) => {
                format!("{} {}", labels.t("shell_unknown_language", language), code)
            }
        }
    }
}

fn number<T: FromStr>(arg: &str, syntax: &'static str) -> std::result::Result<T, ParseError> {
    arg.parse().map_err(|_| ParseError::Usage(syntax))
}

fn required(arg: &str, syntax: &'static str) -> std::result::Result<String, ParseError> {
    if arg.is_empty() {
        Err(ParseError::Usage(syntax))
    } else {
        Ok(arg.to_string())
    }
}

fn parse(line: &str) -> std::result::Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "list" | "ls" => ShellCommand::List,
        "filter" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(ParseError::Usage("filter <field> [value]"));
            }
            let field = field
                .parse()
                .map_err(|_| ParseError::UnknownField(field.to_string()))?;
            ShellCommand::Filter(field, value.to_string())
        }
        "reset" => ShellCommand::Reset,
        "next" | "n" => ShellCommand::Next,
        "prev" | "p" => ShellCommand::Prev,
        "page" => ShellCommand::Page(number(rest, "page <n>")?),
        "show" => ShellCommand::Show(number(rest, "show <id>")?),
        "close" | "back" => ShellCommand::Close,
        "rate" => ShellCommand::Rate(number(rest, "rate <1-5>")?),
        "lang" => ShellCommand::Lang(
            rest.parse()
                .map_err(|_| ParseError::UnknownLanguage(rest.to_string()))?,
        ),
        "summary" => ShellCommand::Summary,
        "cancel" => ShellCommand::Cancel,
        "login" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(user), Some(password)) => {
                    ShellCommand::Login(user.to_string(), password.to_string())
                }
                _ => return Err(ParseError::Usage("login <user> <password>")),
            }
        }
        "logout" => ShellCommand::Logout,
        "search" => ShellCommand::Search(rest.to_string()),
        "add" => ShellCommand::Add(required(rest, "add <json>")?),
        "edit" => ShellCommand::Edit(required(rest, "edit <json>")?),
        "delete" => ShellCommand::Delete(number(rest, "delete <id>")?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

type SummaryDone = (SummaryTicket, Result<String>);

struct Shell<'a> {
    ctx: &'a mut AppContext,
    browse: BrowseState,
    session: Session,
    tracker: SummaryTracker,
    tasks: HashMap<u32, JoinHandle<()>>,
    generator: Option<Arc<dyn SummaryGenerator>>,
    tx: mpsc::Sender<SummaryDone>,
}

pub(super) async fn run(ctx: &mut AppContext) -> Result<()> {
    let language = ctx.language;
    let generator = build_summarizer(&ctx.config).ok();
    let (tx, mut rx) = mpsc::channel::<SummaryDone>(8);

    let mut shell = Shell {
        ctx,
        browse: BrowseState::new(language),
        session: Session::new(language),
        tracker: SummaryTracker::new(),
        tasks: HashMap::new(),
        generator,
        tx,
    };

    let mut input = Input::from_stdin();

    shell.finish(shell.show_grid());
    loop {
        tokio::select! {
            line = input.next_line() => {
                let Some(line) = line else { break };
                if shell.execute(&line) == Flow::Quit {
                    break;
                }
                input.line_done();
            }
            Some((ticket, result)) = rx.recv() => shell.on_summary(ticket, result),
        }
    }

    shell.abort_all();
    Ok(())
}

impl Shell<'_> {
    fn language(&self) -> Language {
        self.browse.language
    }

    fn finish(&self, outcome: Result<()>) {
        if let Err(e) = outcome {
            report_error(&*self.ctx, self.language(), &e);
        }
    }

    fn execute(&mut self, line: &str) -> Flow {
        let command = match parse(line) {
            Ok(command) => command,
            Err(error) => {
                let message = error.localized(self.ctx.api.labels(), self.language());
                eprintln!("{}", message.red());
                return Flow::Continue;
            }
        };

        let outcome = match command {
            ShellCommand::Empty => Ok(()),
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Help => {
                print_help(self.ctx.api.labels(), self.language());
                Ok(())
            }
            ShellCommand::List => self.show_grid(),
            ShellCommand::Filter(field, value) => self
                .browse
                .set_filter(field, &value)
                .and_then(|_| self.show_grid()),
            ShellCommand::Reset => {
                self.browse.reset_filters();
                self.show_grid()
            }
            ShellCommand::Next => self.total_pages().and_then(|total| {
                self.browse.next_page(total);
                self.show_grid()
            }),
            ShellCommand::Prev => {
                self.browse.previous_page();
                self.show_grid()
            }
            ShellCommand::Page(page) => {
                self.browse.go_to_page(page);
                self.show_grid()
            }
            ShellCommand::Show(id) => self.select(id),
            ShellCommand::Close => {
                self.browse.clear_selection();
                self.show_grid()
            }
            ShellCommand::Rate(vote) => self.rate(vote),
            ShellCommand::Lang(language) => {
                self.browse.language = language;
                self.session.language = language;
                self.refresh()
            }
            ShellCommand::Summary => self.request_summary(),
            ShellCommand::Cancel => {
                self.cancel_summary();
                Ok(())
            }
            ShellCommand::Login(user, password) => {
                self.browse.clear_selection();
                let result = self.ctx.api.login(&mut self.session, &user, &password);
                print_messages(&result.messages);
                Ok(())
            }
            ShellCommand::Logout => {
                let result = self.ctx.api.logout(&mut self.session);
                print_messages(&result.messages);
                Ok(())
            }
            ShellCommand::Search(term) => self.search(&term),
            ShellCommand::Add(json) => self.add(&json),
            ShellCommand::Edit(json) => self.edit(&json),
            ShellCommand::Delete(id) => self.delete(id),
        };

        self.finish(outcome);
        Flow::Continue
    }

    fn total_pages(&self) -> Result<usize> {
        let result = self.ctx.api.list(self.browse.filter(), 1)?;
        Ok(result.page.map(|p| p.total_pages).unwrap_or(0))
    }

    fn show_grid(&self) -> Result<()> {
        let result = self.ctx.api.list(self.browse.filter(), self.browse.page())?;
        print_people(
            &result.listed,
            result.page,
            self.ctx.api.labels(),
            self.language(),
        );
        Ok(())
    }

    fn refresh(&self) -> Result<()> {
        match self.browse.selected() {
            Some(id) => self.show_detail(id),
            None => self.show_grid(),
        }
    }

    fn show_detail(&self, id: u32) -> Result<()> {
        let view = self
            .ctx
            .api
            .detail(id, self.language())
            .ok_or(NotablesError::NotFound(id))?;
        print_detail(&view, self.ctx.api.labels(), self.language());
        self.print_summary_state(id);
        Ok(())
    }

    fn select(&mut self, id: u32) -> Result<()> {
        if self.ctx.api.detail(id, self.language()).is_none() {
            return Err(NotablesError::NotFound(id));
        }
        self.browse.select(id);
        self.show_detail(id)
    }

    /// The open personality, or a hint on stderr when there is none.
    fn selected_or_hint(&self) -> Option<u32> {
        let selected = self.browse.selected();
        if selected.is_none() {
            let hint = self.ctx.api.labels().t("shell_select_first", self.language());
            eprintln!("{}", hint.yellow());
        }
        selected
    }

    fn rate(&mut self, vote: u8) -> Result<()> {
        let Some(id) = self.selected_or_hint() else {
            return Ok(());
        };
        let result = self.ctx.api.rate(id, vote, self.language())?;
        print_messages(&result.messages);
        if let Some(person) = result.affected.first() {
            println!(
                "★ {:.1} ({} {})",
                person.rating,
                person.rating_votes,
                self.ctx.api.labels().t("votes", self.language())
            );
        }
        Ok(())
    }

    fn request_summary(&mut self) -> Result<()> {
        let Some(id) = self.selected_or_hint() else {
            return Ok(());
        };
        let request = self
            .ctx
            .api
            .summary_request(id, self.language())
            .ok_or(NotablesError::NotFound(id))?;

        if let Some(previous) = self.tasks.remove(&id) {
            previous.abort();
        }
        let ticket = self.tracker.begin(id);

        let Some(generator) = self.generator.as_ref().map(Arc::clone) else {
            self.on_summary(ticket, Err(NotablesError::SummaryUnavailable));
            return Ok(());
        };

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = summarize(generator.as_ref(), &request).await;
            let _ = tx.send((ticket, result)).await;
        });
        self.tasks.insert(id, handle);
        self.print_summary_state(id);
        Ok(())
    }

    fn cancel_summary(&mut self) {
        let Some(id) = self.selected_or_hint() else {
            return;
        };
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
        if self.tracker.cancel(id) {
            let labels = self.ctx.api.labels();
            println!("{}", labels.t("ai_summary_cancelled", self.language()).dimmed());
        }
    }

    fn on_summary(&mut self, ticket: SummaryTicket, result: Result<String>) {
        let id = ticket.person_id;
        if matches!(self.tracker.state(id), Some(SummaryState::Pending(t)) if *t == ticket) {
            self.tasks.remove(&id);
        }
        match self.tracker.complete(ticket, result, self.browse.selected()) {
            Completion::Applied => self.print_summary_state(id),
            Completion::Discarded => {
                debug!(person = id, "summary arrived after the selection changed")
            }
        }
    }

    fn print_summary_state(&self, id: u32) {
        let labels = self.ctx.api.labels();
        let language = self.language();
        match self.tracker.state(id) {
            Some(SummaryState::Ready(text)) => print_summary(
                labels.t("ai_summary_title", language),
                text,
                labels.t("ai_summary_disclaimer", language),
            ),
            Some(SummaryState::Pending(_)) => {
                println!("{}", labels.t("ai_summary_generating", language).dimmed())
            }
            Some(SummaryState::Failed) => {
                println!("{}", labels.t("ai_summary_error", language).red())
            }
            None => {}
        }
    }

    fn search(&mut self, term: &str) -> Result<()> {
        self.browse.clear_selection();
        let result = self.ctx.api.search(&self.session, term)?;
        print_people(&result.listed, None, self.ctx.api.labels(), self.language());
        Ok(())
    }

    fn add(&mut self, json: &str) -> Result<()> {
        self.browse.clear_selection();
        let draft: PersonalityDraft = serde_json::from_str(json)?;
        let result = self
            .ctx
            .api
            .create_personality(&self.session, draft, current_year())?;
        self.browse.collection_changed();
        print_messages(&result.messages);
        for person in &result.affected {
            println!("{}", format!("id {}", person.id).dimmed());
        }
        Ok(())
    }

    fn edit(&mut self, json: &str) -> Result<()> {
        self.browse.clear_selection();
        let person: Personality = serde_json::from_str(json)?;
        let result = self
            .ctx
            .api
            .update_personality(&self.session, person, current_year())?;
        self.browse.collection_changed();
        print_messages(&result.messages);
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<()> {
        let result = self.ctx.api.delete_personality(&self.session, id)?;
        self.browse.collection_changed();
        if self.browse.is_selected(id) {
            self.browse.clear_selection();
        }
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
        self.tracker.clear(id);
        print_messages(&result.messages);
        Ok(())
    }

    fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(parse("next"), Ok(ShellCommand::Next));
        assert_eq!(parse("  page 3 "), Ok(ShellCommand::Page(3)));
        assert_eq!(parse("SHOW 12"), Ok(ShellCommand::Show(12)));
        assert_eq!(parse(""), Ok(ShellCommand::Empty));
    }

    #[test]
    fn parses_filters_with_and_without_value() {
        assert_eq!(
            parse("filter birth-year 19"),
            Ok(ShellCommand::Filter(FilterField::BirthYear, "19".into()))
        );
        assert_eq!(
            parse("filter death-year"),
            Ok(ShellCommand::Filter(FilterField::DeathYear, String::new()))
        );
        assert!(parse("filter").is_err());
        assert!(parse("filter colour red").is_err());
    }

    #[test]
    fn keeps_json_payloads_whole() {
        let json = r#"{"name": {"fr": "Nour"}}"#;
        assert_eq!(
            parse(&format!("add {}", json)),
            Ok(ShellCommand::Add(json.to_string()))
        );
        assert!(parse("add").is_err());
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(
            parse("login admin admin123"),
            Ok(ShellCommand::Login("admin".into(), "admin123".into()))
        );
        assert!(parse("login admin").is_err());
        assert_eq!(parse("lang ar"), Ok(ShellCommand::Lang(Language::Ar)));
        assert!(parse("lang xx").is_err());
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_verbs() {
        assert_eq!(parse("rate five"), Err(ParseError::Usage("rate <1-5>")));
        assert_eq!(parse("rate 300"), Err(ParseError::Usage("rate <1-5>")));
        assert_eq!(
            parse("dance"),
            Err(ParseError::UnknownCommand("dance".into()))
        );
        assert_eq!(
            parse("filter colour red"),
            Err(ParseError::UnknownField("colour".into()))
        );
        assert_eq!(
            parse("lang xx"),
            Err(ParseError::UnknownLanguage("xx".into()))
        );
    }

    #[test]
    fn parse_errors_use_the_label_catalog() {
        let labels = Labels::builtin();
        assert_eq!(
            ParseError::Usage("show <id>").localized(labels, Language::Fr),
            "Utilisation : show <id>"
        );
        assert_eq!(
            ParseError::UnknownCommand("dance".into()).localized(labels, Language::En),
            "Unknown command: dance. Type help for the list of commands."
        );
    }

    #[test]
    fn help_entries_have_english_labels() {
        let labels = Labels::builtin();
        for (section, entries) in HELP {
            assert_ne!(labels.t(section, Language::En), *section);
            for (_, key) in *entries {
                assert_ne!(labels.t(key, Language::En), *key, "missing label {}", key);
            }
        }
    }
}
