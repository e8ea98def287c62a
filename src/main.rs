#[macro_use]
extern crate log;

use clap::Parser;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

mod api;
mod app;
mod cli;
mod settings;

use crate::api::api_models::FieldErrors;
use crate::api::{HuddleApi, HuddleApiClient, HuddleApiError, HuddleResult};
use crate::app::components::*;
use crate::app::state::LoadingState;
use crate::app::{ActionDispatcher, App, AppEvent, AppModel, AppState, DispatchLoop};
use crate::cli::{Cli, Commands};
use crate::settings::HuddleSettings;

const GROUP_FIELDS: &[&str] = &["name"];
const EVENT_FIELDS: &[&str] = &[
    "name",
    "description",
    "start_time",
    "end_time",
    "location",
    "poster",
];

struct ProgressLogger;

impl EventListener for ProgressLogger {
    fn on_event(&mut self, event: &AppEvent) {
        info!("{:?}", event);
    }
}

// The screen a command drives, kept around so it can be rendered once the store has settled
enum View {
    Groups(GroupsIndexModel),
    Group(GroupShowModel),
    NewGroup(GroupFormModel, String),
    NewEvent(NewEventModel, EventForm),
}

impl View {
    fn new(command: Commands, model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        match command {
            Commands::Groups => Self::Groups(GroupsIndexModel::new(model, dispatcher)),
            Commands::Group { id } => Self::Group(GroupShowModel::new(id, model, dispatcher)),
            Commands::NewGroup { name } => {
                Self::NewGroup(GroupFormModel::new(model, dispatcher), name)
            }
            Commands::NewEvent(args) => Self::NewEvent(
                NewEventModel::new(args.group_id, model, dispatcher),
                args.into(),
            ),
        }
    }

    async fn execute(&self) -> HuddleResult<()> {
        match self {
            Self::Groups(index) => index.load().await,
            Self::Group(show) => show.load().await,
            Self::NewGroup(form, name) => {
                let group = form.submit(name).await?;
                println!("Created group #{} {}", group.id, group.name);
                Ok(())
            }
            Self::NewEvent(form, event_form) => {
                let event = form.submit(event_form.clone()).await?;
                println!("Created event #{} {}", event.id, event.name);
                Ok(())
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Groups(index) => match index.loading_state() {
                LoadingState::Failed => writeln!(out, "Groups failed to load"),
                state if state.is_loading() => writeln!(out, "Groups are still loading"),
                _ => {
                    for group in index.groups().iter() {
                        writeln!(out, "#{:<6} {}", group.id, group.name)?;
                    }
                    Ok(())
                }
            },
            Self::Group(show) => match show.loading_state() {
                LoadingState::Failed => writeln!(out, "Group #{} failed to load", show.id),
                state if state.is_loading() => {
                    writeln!(out, "Group #{} is still loading", show.id)
                }
                _ => {
                    if let Some(group) = show.group() {
                        writeln!(out, "{}", group.name)?;
                    }
                    for event in show.events() {
                        writeln!(
                            out,
                            "  #{:<6} {} | {} -> {} | {}",
                            event.id, event.name, event.start_time, event.end_time, event.location
                        )?;
                        if let Some(url) = event.poster_url.as_ref() {
                            writeln!(out, "          poster: {url}")?;
                        }
                    }
                    Ok(())
                }
            },
            Self::NewGroup(..) | Self::NewEvent(..) => Ok(()),
        }
    }

    fn report(&self, err: &HuddleApiError, out: &mut impl Write) -> io::Result<()> {
        let (errors, fields) = match self {
            Self::NewGroup(form, _) => (form.errors(), GROUP_FIELDS),
            Self::NewEvent(form, _) => (form.errors(), EVENT_FIELDS),
            _ => return writeln!(out, "error: {err}"),
        };
        if errors.is_empty() {
            writeln!(out, "error: {err}")
        } else {
            write_field_errors(out, &errors, fields)
        }
    }
}

// Known fields first, in form order, then whatever else the server complained about
fn write_field_errors(
    out: &mut impl Write,
    errors: &FieldErrors,
    fields: &[&str],
) -> io::Result<()> {
    for field in fields {
        if let Some(message) = errors.get(field) {
            writeln!(out, "{field}: {message}")?;
        }
    }
    for (field, message) in errors.iter().filter(|(field, _)| !fields.contains(field)) {
        writeln!(out, "{field}: {message}")?;
    }
    Ok(())
}

async fn run(command: Commands, api: Arc<dyn HuddleApiClient + Send + Sync>) -> i32 {
    let model = Rc::new(AppModel::new(AppState::new(), api));
    let dispatch_loop = DispatchLoop::new();
    let stopper = dispatch_loop.make_stopper();
    let view = View::new(command, Rc::clone(&model), dispatch_loop.make_dispatcher());

    let mut app = App::new(model);
    app.subscribe(Box::new(ProgressLogger));

    let view_ref = &view;
    let (result, ()) = futures::join!(
        async move {
            let result = view_ref.execute().await;
            stopper.stop();
            result
        },
        app.start(dispatch_loop)
    );

    if let Err(err) = view.render(&mut io::stdout().lock()) {
        error!("Could not write output: {}", err);
    }
    match result {
        Ok(()) => 0,
        Err(err) => {
            if let Err(io_err) = view.report(&err, &mut io::stderr().lock()) {
                error!("Could not write output: {}", io_err);
            }
            1
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let command = Cli::parse().into_command();

    let settings = HuddleSettings::new_from_env();
    debug!("using {}", settings.api_url);

    let api = match HuddleApi::new(&settings.api_url) {
        Ok(api) => api,
        Err(err) => {
            error!("Could not create HTTP client: {}", err);
            std::process::exit(1);
        }
    };

    let code = run(command, Arc::new(api)).await;
    std::process::exit(code);
}
