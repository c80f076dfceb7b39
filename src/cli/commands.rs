use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::{label, ToDisplayTrees};
use crate::config::{global_config_path, local_config_path, Settings, CONFIG_TEMPLATE};
use crate::domain::category::{is_valid_slug, CategoryRecord};
use crate::domain::TreeBuilder;
use crate::infrastructure::select::{selection_items, Selector, SkimSelector};
use crate::infrastructure::store::{expand_user_path, load_records};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { file, ids }) => _tree(file, *ids),
        Some(Commands::List { file, ids }) => _list(file, *ids),
        Some(Commands::Subtree { file, id, ids }) => _subtree(file, *id, *ids),
        Some(Commands::Check { file, strict }) => _check(file, *strict),
        Some(Commands::Stats { file }) => _stats(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Pick { file }) => _pick(file, &SkimSelector),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn _load(file: &Path) -> CliResult<Vec<CategoryRecord>> {
    let path = expand_user_path(file);
    Ok(load_records(&path)?)
}

#[instrument]
fn _tree(file: &Path, ids: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let show_ids = ids || settings.show_ids;
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records)?;
    for display in tree.to_display_trees(show_ids) {
        print!("{}", display);
    }
    Ok(())
}

#[instrument]
fn _list(file: &Path, ids: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let show_ids = ids || settings.show_ids;
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records)?;
    for (depth, record) in tree.flatten_with_depth() {
        output::info(&format!(
            "{}{}",
            settings.indent.repeat(depth),
            label(record, show_ids)
        ));
    }
    Ok(())
}

#[instrument]
fn _subtree(file: &Path, id: u64, ids: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let show_ids = ids || settings.show_ids;
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_subtree(id, &records)?;
    for display in tree.to_display_trees(show_ids) {
        print!("{}", display);
    }
    Ok(())
}

#[instrument]
fn _check(file: &Path, strict: bool) -> CliResult<()> {
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let audit = builder.audit(&records);
    debug!(?audit, "audit complete");

    let mut findings = 0;
    for dup in &audit.duplicates {
        findings += 1;
        output::warning(&format!("duplicate id {}: {}", dup.id, dup.name));
    }
    for orphan in &audit.orphans {
        findings += 1;
        output::warning(&format!(
            "orphaned category {} ({}): parent {} not found",
            orphan.name, orphan.id, orphan.parent_id
        ));
    }
    for id in &audit.cycles {
        findings += 1;
        output::failure(&format!("category {} sits on a cyclic parent chain", id));
    }
    for record in &records {
        if let Some(slug) = &record.slug {
            if !is_valid_slug(slug) {
                findings += 1;
                output::warning(&format!(
                    "category {} has malformed slug {:?}",
                    record.id, slug
                ));
            }
        }
    }

    if !audit.cycles.is_empty() || (strict && findings > 0) {
        return Err(CliError::CheckFailed(findings));
    }
    if findings == 0 {
        output::success("no issues found");
    }
    Ok(())
}

#[instrument]
fn _stats(file: &Path) -> CliResult<()> {
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records)?;
    let flattened = tree.flatten_with_depth();
    let top_level = flattened.iter().filter(|(depth, _)| *depth == 0).count();

    output::header("Hierarchy statistics");
    output::detail(&format!("categories: {}", flattened.len()));
    output::detail(&format!("top-level:  {}", top_level));
    // sentinel does not count as a level
    output::detail(&format!("depth:      {}", tree.depth().saturating_sub(1)));
    output::detail(&format!("leaves:     {}", tree.leaf_categories().len()));
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records)?;
    for record in tree.leaf_categories() {
        output::info(&format!("{} ({})", record.name, record.display_slug()));
    }
    Ok(())
}

#[instrument(skip(selector))]
fn _pick(file: &Path, selector: &dyn Selector) -> CliResult<()> {
    let settings = Settings::load()?;
    let records = _load(file)?;
    let mut builder = TreeBuilder::new();
    let tree = builder.build_forest(&records)?;
    let items = selection_items(&tree, &settings.indent);

    if let Some(item) = selector.select_one(&items, "category> ")? {
        // echo the selected record, not the indented display line
        if let Some(record) = tree.flatten().into_iter().find(|r| r.id == item.id) {
            output::info(&format!("{}\t{}", record.id, record.name));
        }
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&format!("indent = {:?}", settings.indent));
            output::info(&format!("show_ids = {}", settings.show_ids));
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".to_string())
                })?
            } else {
                local_config_path()
            };
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        crate::infrastructure::InfraError::io(
                            format!("create {}", parent.display()),
                            e,
                        )
                    })?;
                }
            }
            fs::write(&path, CONFIG_TEMPLATE).map_err(|e| {
                crate::infrastructure::InfraError::io(format!("write {}", path.display()), e)
            })?;
            output::success(&format!("wrote {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            if let Some(global) = global_config_path() {
                output::info(&format!("global: {} {}", global.display(), exists_marker(&global)));
            }
            let local = local_config_path();
            output::info(&format!("local:  {} {}", local.display(), exists_marker(&local)));
            Ok(())
        }
    }
}

fn exists_marker(path: &Path) -> &'static str {
    if path.exists() {
        "(exists)"
    } else {
        "(not found)"
    }
}

fn _completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
