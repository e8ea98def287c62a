//! Command line definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::api_models::GroupId;
use crate::app::components::EventForm;

/// Terminal client for a groups and events service.
#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    // Listing groups is what a bare `huddle` does
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Groups)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// List all groups
    Groups,

    /// Show a group and its events
    Group {
        /// Group id
        id: GroupId,
    },

    /// Create a group
    NewGroup {
        /// Group name
        name: String,
    },

    /// Create an event in a group
    NewEvent(NewEventArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct NewEventArgs {
    /// Group the event belongs to
    pub group_id: GroupId,
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    /// Image file uploaded as the event poster
    pub poster: Option<PathBuf>,
}

impl From<NewEventArgs> for EventForm {
    fn from(args: NewEventArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            start_time: args.start_time,
            end_time: args.end_time,
            location: args.location,
            poster_path: args.poster,
        }
    }
}
