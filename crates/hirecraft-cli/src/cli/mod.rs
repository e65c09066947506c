//! Command-line surface: browse the content library, inspect workspace
//! tabs, export documents to markdown, and reset the stored snapshot.

mod clipboard;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use hirecraft::config::HirecraftConfig;
use hirecraft::export;
use hirecraft::filter::filter_blocks;
use hirecraft::model::BlockKind;
use hirecraft::render::{render_case_study, render_job_ad, render_profile};
use hirecraft::seed;
use hirecraft::state::{AppState, LibraryFilter, ModuleState, Tab};
use hirecraft::store::fs::FileStore;
use hirecraft::store::{load_or_seed, SnapshotStore};

#[derive(Parser)]
#[command(name = "hirecraft", version, about = "Recruiting content builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the content library
    Library {
        /// Only blocks of this type (e.g. skill, requirement, red_flag)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Only blocks in this category
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive search over title, content, and tags
        #[arg(long)]
        search: Option<String>,
        /// Emit matching blocks as JSON
        #[arg(long)]
        json: bool,
    },
    /// List workspace tabs
    Tabs,
    /// Render a tab's selected document to markdown
    Export {
        /// Tab id to export from
        tab_id: String,
        /// Document id (defaults to the tab's selection)
        #[arg(long)]
        id: Option<String>,
        /// Write a .md file instead of printing; takes a directory, or
        /// uses the configured export directory when given bare
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        out: Option<PathBuf>,
        /// Copy the markdown to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Replace the stored snapshot with a fresh seed state
    Reset {
        /// Confirm the reset (required)
        #[arg(long)]
        yes: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = HirecraftConfig::load()?;
    let snapshot_path = config.snapshot_path()?;
    tracing::debug!("snapshot at {}", snapshot_path.display());
    let mut store = FileStore::new(&snapshot_path);
    let state = load_or_seed(&store);

    match cli.command {
        Commands::Library {
            kind,
            category,
            search,
            json,
        } => library(&state, kind, category, search, json),
        Commands::Tabs => tabs(&state),
        Commands::Export {
            tab_id,
            id,
            out,
            copy,
        } => export_tab(&state, &config, &tab_id, id.as_deref(), out, copy),
        Commands::Reset { yes } => {
            if !yes {
                bail!("refusing to reset without --yes (this discards all tabs and edits)");
            }
            store
                .save(&seed::seed_state())
                .context("failed to write seed snapshot")?;
            println!("Workspace reset to seed state.");
            Ok(())
        }
    }
}

fn library(
    state: &AppState,
    kind: Option<String>,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let kind = match kind {
        Some(raw) => Some(BlockKind::from_str(&raw).map_err(anyhow::Error::msg)?),
        None => None,
    };
    let filter = LibraryFilter {
        kind,
        category,
        tags: None,
        search_query: search,
    };

    let blocks = filter_blocks(&state.content_blocks, &filter);
    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }
    for block in &blocks {
        let tags = if block.tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", block.tags.join(", "))
        };
        println!("{:<24} {:<22} {}{}", block.kind.as_str(), block.id, block.title, tags);
    }
    println!("{} block(s)", blocks.len());
    Ok(())
}

fn tabs(state: &AppState) -> Result<()> {
    if state.tabs.is_empty() {
        println!("No open tabs.");
        return Ok(());
    }
    for tab in &state.tabs {
        let active = if state.active_tab_id.as_deref() == Some(tab.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!(
            "{active} {:<42} {:<12} {:<24} {} document(s)",
            tab.id,
            tab.module_kind.as_str(),
            tab.name,
            tab.state.document_count()
        );
    }
    Ok(())
}

fn export_tab(
    state: &AppState,
    config: &HirecraftConfig,
    tab_id: &str,
    doc_id: Option<&str>,
    out: Option<PathBuf>,
    copy: bool,
) -> Result<()> {
    let tab = state
        .tab(tab_id)
        .with_context(|| format!("no tab with id {tab_id}"))?;
    let (title, markdown) = render_document(state, tab, doc_id)?;

    if copy {
        clipboard::copy_to_clipboard(&markdown)?;
        println!("Copied \"{title}\" to clipboard.");
        return Ok(());
    }
    if let Some(dir) = out {
        let dir = if dir.as_os_str().is_empty() {
            config.export_dir()
        } else {
            dir
        };
        let path = export::write_markdown(&dir, &title, &markdown)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    print!("{markdown}");
    Ok(())
}

fn render_document(state: &AppState, tab: &Tab, doc_id: Option<&str>) -> Result<(String, String)> {
    let selected = doc_id.or(tab.state.selected_id());
    let Some(id) = selected else {
        bail!("tab {} has no selected document; pass --id", tab.id);
    };

    match &tab.state {
        ModuleState::Profiles { profiles, .. } => {
            let profile = profiles
                .iter()
                .find(|p| p.id == id)
                .with_context(|| format!("no profile {id} in tab {}", tab.id))?;
            Ok((
                profile.name.clone(),
                render_profile(profile, &state.content_blocks),
            ))
        }
        ModuleState::JobAds { job_ads, .. } => {
            let ad = job_ads
                .iter()
                .find(|a| a.id == id)
                .with_context(|| format!("no job ad {id} in tab {}", tab.id))?;
            Ok((ad.title.clone(), render_job_ad(ad, &state.content_blocks)))
        }
        ModuleState::CaseStudies { case_studies, .. } => {
            let case = case_studies
                .iter()
                .find(|c| c.id == id)
                .with_context(|| format!("no case study {id} in tab {}", tab.id))?;
            Ok((
                case.title.clone(),
                render_case_study(case, &state.content_blocks),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hirecraft::test_utils::workspace_with_profile;

    #[test]
    fn cli_args_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_uses_selection_when_no_id_given() {
        let (state, tab_id, _) = workspace_with_profile("Senior PM");
        let tab = state.tab(&tab_id).unwrap();
        let (title, markdown) = render_document(&state, tab, None).unwrap();
        assert_eq!(title, "Senior PM");
        assert!(markdown.starts_with("# Senior PM\n"));
    }

    #[test]
    fn export_rejects_unknown_document_id() {
        let (state, tab_id, _) = workspace_with_profile("Senior PM");
        let tab = state.tab(&tab_id).unwrap();
        assert!(render_document(&state, tab, Some("profile-nope")).is_err());
    }
}
