use super::args::{Cli, Commands, FilterArgs, OutputFormat};
use super::print::{print_books, print_full_books, print_json, print_messages, print_stats};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use shelf::api::{BookUpdate, CmdResult, ConfigAction, ShelfApi, ShelfPaths};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::logging;
use shelf::model::{Book, Scope, SearchField};
use shelf::store::fs::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const PROJECT_DIR: &str = ".shelf";

struct AppContext {
    api: ShelfApi<FileStore>,
    scope: Scope,
    config: ShelfConfig,
    output: OutputFormat,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if !console::user_attended() {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        Some(Commands::Add {
            title,
            author,
            genre,
            status,
            rating,
            date,
            notes,
        }) => {
            let mut book = Book::new(title, author)
                .with_genre(genre)
                .with_status(status)
                .with_rating(rating)
                .with_notes(notes);
            if let Some(date) = date {
                book = book.with_date_added(date);
            }
            handle_add(&mut ctx, book)
        }
        Some(Commands::List { filter }) => handle_list(&ctx, &filter),
        Some(Commands::Search { term, field }) => handle_search(&ctx, term, field),
        Some(Commands::View { selectors }) => handle_view(&ctx, &selectors),
        Some(Commands::Edit {
            selector,
            title,
            author,
            genre,
            status,
            rating,
            notes,
        }) => {
            let update = BookUpdate {
                title,
                author,
                genre,
                status,
                rating,
                notes,
            };
            handle_edit(&mut ctx, &selector, &update)
        }
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, &selectors),
        Some(Commands::Stats { filter }) => handle_stats(&ctx, &filter),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, &FilterArgs::default()),
    }?;

    Ok(if result.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(PROJECT_DIR);

    let global_dir = ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine the data directory".into()))?;

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = match ShelfConfig::load(config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format!("Warning: {}; using default settings", e).yellow());
            ShelfConfig::default()
        }
    };
    debug!(?scope, data_file = %config.data_file, "context ready");

    let store = FileStore::new(Some(project_dir.clone()), global_dir.clone())
        .with_data_file(&config.data_file);
    let paths = ShelfPaths {
        project: Some(project_dir),
        global: global_dir,
    };

    Ok(AppContext {
        api: ShelfApi::new(store, paths),
        scope,
        config,
        output: cli.output,
    })
}

impl AppContext {
    fn json(&self) -> bool {
        self.output == OutputFormat::Json
    }

    /// Prints messages, then the books a mutation touched.
    fn finish_change(&self, result: CmdResult) -> Result<CmdResult> {
        print_messages(&result.messages, self.json());
        if self.json() {
            print_json(&result.affected_books)?;
        }
        Ok(result)
    }

    fn finish_listing(&self, result: CmdResult) -> Result<CmdResult> {
        if self.json() {
            print_messages(&result.messages, true);
            print_json(&result.listed_books)?;
        } else {
            print_messages(&result.messages, false);
            print_books(&result.listed_books);
        }
        Ok(result)
    }
}

fn handle_add(ctx: &mut AppContext, book: Book) -> Result<CmdResult> {
    let result = ctx.api.add_book(ctx.scope, book)?;
    ctx.finish_change(result)
}

fn handle_list(ctx: &AppContext, filter: &FilterArgs) -> Result<CmdResult> {
    let result = ctx.api.list_books(ctx.scope, &filter.to_filter())?;
    if ctx.json() {
        return ctx.finish_listing(result);
    }

    print_messages(&result.messages, false);
    print_books(&result.listed_books);
    if let Some(stats) = &result.stats {
        println!();
        print_stats(stats);
    }
    Ok(result)
}

fn handle_search(
    ctx: &AppContext,
    term: Vec<String>,
    field: Option<SearchField>,
) -> Result<CmdResult> {
    let term = term.join(" ");
    let field = field.unwrap_or(ctx.config.search_field);
    let result = ctx.api.search_books(ctx.scope, &term, field)?;
    ctx.finish_listing(result)
}

fn handle_view(ctx: &AppContext, selectors: &[String]) -> Result<CmdResult> {
    let result = ctx.api.view_books(ctx.scope, selectors)?;
    if ctx.json() {
        return ctx.finish_listing(result);
    }
    print_full_books(&result.listed_books);
    print_messages(&result.messages, false);
    Ok(result)
}

fn handle_edit(ctx: &mut AppContext, selector: &[String], update: &BookUpdate) -> Result<CmdResult> {
    let result = ctx.api.update_book(ctx.scope, selector, update)?;
    ctx.finish_change(result)
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<CmdResult> {
    let result = ctx.api.delete_books(ctx.scope, selectors)?;
    ctx.finish_change(result)
}

fn handle_stats(ctx: &AppContext, filter: &FilterArgs) -> Result<CmdResult> {
    let result = ctx.api.stats(ctx.scope, &filter.to_filter())?;
    print_messages(&result.messages, ctx.json());
    if let Some(stats) = &result.stats {
        if ctx.json() {
            print_json(stats)?;
        } else {
            print_stats(stats);
        }
    }
    Ok(result)
}

fn handle_path(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.catalog_path(ctx.scope)?;
    if let Some(path) = &result.catalog_path {
        println!("{}", path.display());
    }
    Ok(result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in ShelfConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages, false);
    Ok(result)
}

fn handle_init(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages, false);
    Ok(result)
}
