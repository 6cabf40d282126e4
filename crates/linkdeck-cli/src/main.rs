//! LinkDeck CLI
//!
//! Thin wrapper around linkdeck-core for command-line usage. Works on the
//! same data file as the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # List saved links
//! linkdeck list
//!
//! # Save a link
//! linkdeck add https://docs.rs --title "Docs"
//!
//! # File a link under a group
//! linkdeck group add Reading
//! linkdeck move <link_id> --group <group_id>
//!
//! # Back up and restore
//! linkdeck export backup.json
//! linkdeck import backup.json
//!
//! # Check what the scanner would make of some text
//! linkdeck classify "example.com/page"
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use linkdeck_core::{
    domain_of, is_probably_url, logging, Backup, GroupId, Library, LibraryStore, LinkEdit, LinkId,
};

/// LinkDeck - local-first link organizer
#[derive(Parser)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "LinkDeck - manage saved links from the terminal")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: platform data dir /linkdeck)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show where the data file lives and what it holds
    Info,

    /// List saved links
    List {
        /// Only links in this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Save a new link
    Add {
        url: String,
        /// Title (defaults to the domain)
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Group id to file the link under
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Change a saved link
    Edit {
        id: String,
        #[arg(long)]
        url: Option<String>,
        #[arg(short, long)]
        title: Option<String>,
        /// New description; pass an empty string to clear it
        #[arg(short = 'D', long)]
        description: Option<String>,
    },

    /// Delete a saved link
    Remove { id: String },

    /// Move a link to a group (omit --group to ungroup it)
    Move {
        id: String,
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Group management
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Write every link and group to a JSON backup
    Export { file: PathBuf },

    /// Replace the library with a JSON backup
    Import { file: PathBuf },

    /// Delete every link and group
    Clear {
        /// Required confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Report whether the scanner would treat TEXT as a URL
    Classify { text: String },
}

#[derive(Subcommand)]
enum GroupAction {
    /// Create a group
    Add { name: String },
    /// List groups with link counts
    List,
    /// Rename a group
    Rename { id: String, name: String },
    /// Delete a group; its links become ungrouped
    Remove { id: String },
}

/// Default data directory (<platform data dir>/linkdeck)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkdeck")
}

fn parse_group(group: Option<&str>) -> Result<Option<GroupId>> {
    group
        .map(|g| g.parse::<GroupId>())
        .transpose()
        .context("Invalid group id")
}

fn print_library(library: &Library, group: Option<&GroupId>) {
    let mut count = 0;
    for link in library.links_in(group) {
        count += 1;
        println!("{}", link.title);
        println!("  ID: {}", link.id);
        println!("  URL: {}", link.url);
        if let Some(description) = &link.description {
            println!("  Description: {}", description);
        }
    }
    if count == 0 {
        println!("No links.");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = LibraryStore::new(&data_dir);
    let mut library = store
        .load()
        .with_context(|| format!("Failed to load {}", store.path().display()))?;
    tracing::debug!(
        path = %store.path().display(),
        links = library.links.len(),
        groups = library.groups.len(),
        "Library loaded"
    );

    match cli.command {
        Commands::Info => {
            println!("LinkDeck");
            println!("  Data file: {}", store.path().display());
            println!("  Links: {}", library.links.len());
            println!("  Groups: {}", library.groups.len());
        }

        Commands::List { group } => {
            let group = parse_group(group.as_deref())?;
            if group.is_none() {
                // Everything, grouped links first under their group heading
                for g in &library.groups {
                    println!("[{}] {}", g.id, g.name);
                    print_library(&library, Some(&g.id));
                    println!();
                }
                println!("[ungrouped]");
            }
            print_library(&library, group.as_ref());
        }

        Commands::Add {
            url,
            title,
            description,
            group,
        } => {
            let group = parse_group(group.as_deref())?;
            let title = title.unwrap_or_else(|| domain_of(&url));
            let id = library.add_link(&url, &title, description.as_deref(), group)?;
            store.save(&library)?;
            println!("Added link: {}", title);
            println!("  ID: {}", id);
        }

        Commands::Edit {
            id,
            url,
            title,
            description,
        } => {
            let id: LinkId = id.parse()?;
            library.update_link(
                &id,
                LinkEdit {
                    url,
                    title,
                    description,
                },
            )?;
            store.save(&library)?;
            println!("Updated link {}", id);
        }

        Commands::Remove { id } => {
            let id: LinkId = id.parse()?;
            let link = library.delete_link(&id)?;
            store.save(&library)?;
            println!("Removed link: {}", link.title);
        }

        Commands::Move { id, group } => {
            let id: LinkId = id.parse()?;
            let group = parse_group(group.as_deref())?;
            library.move_link(&id, group)?;
            store.save(&library)?;
            match group {
                Some(g) => println!("Moved link {} to group {}", id, g),
                None => println!("Ungrouped link {}", id),
            }
        }

        Commands::Group { action } => match action {
            GroupAction::Add { name } => {
                let id = library.add_group(&name);
                store.save(&library)?;
                println!("Created group: {}", name);
                println!("  ID: {}", id);
            }
            GroupAction::List => {
                if library.groups.is_empty() {
                    println!("No groups.");
                }
                for g in &library.groups {
                    let count = library.links_in(Some(&g.id)).count();
                    println!("{} ({} links)", g.name, count);
                    println!("  ID: {}", g.id);
                }
            }
            GroupAction::Rename { id, name } => {
                let id: GroupId = id.parse()?;
                library.rename_group(&id, &name)?;
                store.save(&library)?;
                println!("Renamed group {} to {}", id, name);
            }
            GroupAction::Remove { id } => {
                let id: GroupId = id.parse()?;
                let group = library.delete_group(&id)?;
                store.save(&library)?;
                println!("Removed group: {}", group.name);
            }
        },

        Commands::Export { file } => {
            let json = Backup::from_library(&library).to_json()?;
            std::fs::write(&file, json)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            println!(
                "Exported {} links and {} groups to {}",
                library.links.len(),
                library.groups.len(),
                file.display()
            );
        }

        Commands::Import { file } => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let (links, groups) = Backup::parse(&json)?.into_parts();
            let (link_count, group_count) = (links.len(), groups.len());
            library.replace(links, groups);
            store.save(&library)?;
            println!("Imported {} links and {} groups", link_count, group_count);
        }

        Commands::Clear { yes } => {
            if !yes {
                bail!("Refusing to clear without --yes");
            }
            library.clear();
            store.save(&library)?;
            println!("Cleared all links and groups");
        }

        Commands::Classify { text } => {
            if is_probably_url(&text) {
                println!("url");
            } else {
                println!("text");
            }
        }
    }

    Ok(())
}
