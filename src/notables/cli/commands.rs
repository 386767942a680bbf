use super::print::{print_detail, print_field_errors, print_people, print_summary};
use super::setup::{Cli, Commands, FilterArgs};
use super::shell;
use chrono::{Datelike, Utc};
use clap::Parser;
use colored::Colorize;
use notables::api::DirectoryApi;
use notables::config::{self, NotablesConfig};
use notables::error::{NotablesError, Result};
use notables::filter::{FilterField, FilterSpec};
use notables::model::Language;
use notables::store::memory::InMemoryStore;
use notables::store::seed;
use notables::summary::{summarize, GeminiSummarizer, SummaryGenerator};
use std::sync::Arc;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

pub(super) struct AppContext {
    pub api: DirectoryApi<InMemoryStore>,
    pub config: NotablesConfig,
    pub language: Language,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::List { filters, page }) => handle_list(&ctx, &filters, page),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Summary { id }) => handle_summary(&ctx, id).await,
        Some(Commands::Shell) => shell::run(&mut ctx).await,
        None => handle_list(&ctx, &FilterArgs::default(), 1),
    };

    if let Err(e) = outcome {
        report_error(&ctx, ctx.language, &e);
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match config::home_dir() {
        Ok(home) => NotablesConfig::load(&home).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            NotablesConfig::default()
        }),
        Err(_) => NotablesConfig::default(),
    };

    let people = match cli.data.as_ref().or(config.data_file.as_ref()) {
        Some(path) => seed::load_collection(path)?,
        None => seed::builtin_collection()?,
    };

    let language = cli.lang.unwrap_or(config.default_language);
    Ok(AppContext {
        api: DirectoryApi::new(InMemoryStore::with_people(people)),
        config,
        language,
    })
}

pub(super) fn current_year() -> i32 {
    Utc::now().year()
}

/// The configured summary backend, or `SummaryUnavailable` when it cannot be built.
pub(super) fn build_summarizer(config: &NotablesConfig) -> Result<Arc<dyn SummaryGenerator>> {
    match GeminiSummarizer::from_env(config.summary_model.clone(), config.summary_timeout_secs) {
        Ok(generator) => Ok(Arc::new(generator)),
        Err(e) => {
            warn!(error = %e, "summaries disabled");
            Err(NotablesError::SummaryUnavailable)
        }
    }
}

/// Prints `err` for the user, localized where a label exists for it.
pub(super) fn report_error(ctx: &AppContext, language: Language, err: &NotablesError) {
    let labels = ctx.api.labels();
    match err {
        NotablesError::Validation(errors) => print_field_errors(errors, labels, language),
        NotablesError::NotFound(_) => eprintln!("{}", labels.t("not_found", language).red()),
        NotablesError::Unauthorized => {
            eprintln!("{}", labels.t("admin_required", language).red())
        }
        NotablesError::SummaryUnavailable => {
            eprintln!("{}", labels.t("ai_summary_error", language).red())
        }
        other => eprintln!("Error: {}", other),
    }
}

fn filter_spec(args: &FilterArgs) -> Result<FilterSpec> {
    let mut spec = FilterSpec::new();
    let fields = [
        (FilterField::Domain, &args.domain),
        (FilterField::BirthYear, &args.birth_year),
        (FilterField::DeathYear, &args.death_year),
        (FilterField::Status, &args.status),
        (FilterField::Gender, &args.gender),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            spec.set(field, value)?;
        }
    }
    Ok(spec)
}

fn handle_list(ctx: &AppContext, filters: &FilterArgs, page: usize) -> Result<()> {
    let spec = filter_spec(filters)?;
    let result = ctx.api.list(&spec, page)?;
    let labels = ctx.api.labels();
    println!("{}", labels.t("main_title", ctx.language).bold());
    println!();
    print_people(&result.listed, result.page, labels, ctx.language);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    let view = ctx
        .api
        .detail(id, ctx.language)
        .ok_or(NotablesError::NotFound(id))?;
    print_detail(&view, ctx.api.labels(), ctx.language);
    Ok(())
}

async fn handle_summary(ctx: &AppContext, id: u32) -> Result<()> {
    let request = ctx
        .api
        .summary_request(id, ctx.language)
        .ok_or(NotablesError::NotFound(id))?;
    let generator = build_summarizer(&ctx.config)?;
    let labels = ctx.api.labels();

    eprintln!("{}", labels.t("ai_summary_generating", ctx.language).dimmed());
    let text = summarize(generator.as_ref(), &request).await?;
    print_summary(
        labels.t("ai_summary_title", ctx.language),
        &text,
        labels.t("ai_summary_disclaimer", ctx.language),
    );
    Ok(())
}
