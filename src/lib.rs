// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::application::forms::{AuthForm, AuthMode, CategoryForm, CategorySubmit, NoteForm};
use crate::application::{
    CategoryCreator, LoadState, NoteBrowser, NoteDeleter, NoteSaver, NotesApi, SessionService,
};
use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::Session;
use crate::infrastructure::{Config, FileCredentialStore, NotesApiClient};
use crate::ports::TextPresenter;

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notectl with arguments");

    // Initialize configuration
    let app_dir = default_app_dir()?;
    let config_path = match args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            path
        }
        None => app_dir.join(CONFIG_FILE_NAME),
    };
    let mut config = Config::load_or_default(&config_path)?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }

    // Initialize infrastructure
    let store = FileCredentialStore::new(&app_dir);
    let api = NotesApiClient::new(&config.api.base_url);

    // Initialize application
    let mut sessions = SessionService::new(api, store);
    let presenter = TextPresenter::new(config.ui.theme);

    match args.command {
        Command::Login { email, password } => {
            let mut form = AuthForm::new(AuthMode::Login, email, password);
            match form.submit(&mut sessions).await {
                Some(session) => report_session(&session),
                None => bail!(form
                    .error
                    .unwrap_or_else(|| "Authentication failed".to_string())),
            }
        }

        Command::Signup { email, password } => {
            let mut form = AuthForm::new(AuthMode::Signup, email, password);
            match form.submit(&mut sessions).await {
                Some(session) => report_session(&session),
                None => bail!(form
                    .error
                    .unwrap_or_else(|| "Authentication failed".to_string())),
            }
        }

        Command::Logout => {
            sessions.logout()?;
            println!("Logged out.");
        }

        Command::Whoami => match sessions.restore().await {
            Session::Confirmed { identity } => println!("{}", identity.email),
            _ => bail!("Not logged in"),
        },

        Command::Theme => {
            config.ui.theme = config.ui.theme.toggle();
            config.save(&config_path)?;
            println!("Theme is now {}.", config.ui.theme);
        }

        command => {
            // Everything else talks to the note endpoints and needs a
            // confirmed session first.
            let session = sessions.restore().await;
            if !session.is_authenticated() {
                bail!("Not logged in. Run `notectl login <email> <password>` first.");
            }
            let api = sessions.api().clone();
            run_authenticated(command, api, session, &presenter).await?;
        }
    }

    Ok(())
}

async fn run_authenticated(
    command: Command,
    api: NotesApiClient,
    session: Session,
    presenter: &TextPresenter,
) -> Result<()> {
    match command {
        Command::List {
            category,
            tag,
            search,
            json,
        } => {
            let mut browser = NoteBrowser::new(api, session);
            browser.prime().await;
            if let Some(category) = category {
                browser.set_category(Some(category)).await;
            }
            if let Some(tag) = tag {
                browser.set_tag(Some(tag)).await;
            }
            if let Some(search) = search {
                browser.set_search(search).await;
            }
            if *browser.state() == LoadState::Idle {
                browser.refresh().await;
            }
            if let LoadState::Failed { reason } = browser.state() {
                bail!("Could not load notes: {reason}");
            }
            info!(count = browser.notes().len(), "Listing notes");
            if json {
                println!("{}", serde_json::to_string_pretty(browser.notes())?);
            } else {
                print!("{}", presenter.render_list(browser.notes()));
            }
        }

        Command::Show { note_id, json } => {
            let mut browser = NoteBrowser::new(api, session);
            browser.refresh().await;
            if let LoadState::Failed { reason } = browser.state() {
                bail!("Could not load notes: {reason}");
            }
            let Some(note) = browser.find_note(note_id) else {
                bail!("Note not found: {note_id}");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(note)?);
            } else {
                print!("{}", presenter.render_note(note));
            }
        }

        Command::Add {
            title,
            content,
            category,
            tags,
        } => {
            let mut form = NoteForm::blank();
            form.title = title;
            form.content = content;
            form.category = category.unwrap_or_default();
            form.tags_input = tags;

            let saver = NoteSaver::new(api);
            match form.submit(&saver).await {
                Some(saved) => println!("Saved note {}.", saved.id.unwrap_or_default()),
                None => bail!(form
                    .error
                    .unwrap_or_else(|| "Failed to save note".to_string())),
            }
        }

        Command::Edit {
            note_id,
            title,
            content,
            category,
            tags,
        } => {
            let mut browser = NoteBrowser::new(api.clone(), session);
            browser.refresh().await;
            if let LoadState::Failed { reason } = browser.state() {
                bail!("Could not load notes: {reason}");
            }
            let Some(note) = browser.find_note(note_id) else {
                bail!("Note not found: {note_id}");
            };

            let mut form = NoteForm::editing(note);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(tags) = tags {
                form.tags_input = tags;
            }

            let saver = NoteSaver::new(api);
            match form.submit(&saver).await {
                Some(saved) => println!("Saved note {}.", saved.id.unwrap_or_default()),
                None => bail!(form
                    .error
                    .unwrap_or_else(|| "Failed to save note".to_string())),
            }
        }

        Command::Delete { note_id, yes } => {
            if !yes && !confirm(&format!("Delete note {note_id}? [y/N] "))? {
                println!("Aborted.");
                return Ok(());
            }
            NoteDeleter::new(api).delete(note_id).await?;
            println!("Deleted note {note_id}.");
        }

        Command::Categories => {
            let categories = api.list_categories().await?;
            print!("{}", presenter.render_labels("Categories", &categories));
        }

        Command::NewCategory { name } => {
            let creator = CategoryCreator::new(api);
            let mut form = CategoryForm::new(name);
            match form.submit(&creator).await {
                Some(CategorySubmit::Created) => {
                    println!("Created category {}.", form.name.trim())
                }
                Some(CategorySubmit::Ignored) => {
                    println!("Nothing to create: category name is empty.")
                }
                None => bail!(form
                    .error
                    .unwrap_or_else(|| "Failed to create category".to_string())),
            }
        }

        Command::Tags => {
            let mut browser = NoteBrowser::new(api, session);
            browser.prime().await;
            browser.refresh().await;
            print!("{}", presenter.render_labels("Tags", browser.visible_tags()));
        }

        _ => unreachable!("handled in run"),
    }
    Ok(())
}

fn report_session(session: &Session) {
    match session {
        Session::Confirmed { identity } => println!("Logged in as {}.", identity.email),
        Session::Pending { email } => println!(
            "Logged in as {email} (identity not confirmed yet, the server may still reject it)."
        ),
        Session::Anonymous => println!("Not logged in."),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    use std::io::Write;

    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub fn default_app_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join(APP_DIR_NAME))
}
