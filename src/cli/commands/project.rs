use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, MoveDirection, ProjectAction};
use crate::config::Config;
use crate::core::projects::{Direction, ProjectLogic};
use crate::errors::AppResult;
use crate::models::project::Project;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table, TableCell};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn print_projects(projects: &[Project]) {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::right("ID"),
        Column::left("Name"),
        Column::left("Visible"),
        Column::left("Autostart"),
    ]);

    for (i, p) in projects.iter().enumerate() {
        table.add_row(vec![
            TableCell::plain((i + 1).to_string()),
            TableCell::plain(p.id.to_string()),
            TableCell::plain(p.name.clone()),
            TableCell::plain(if p.visible { "yes" } else { "no" }),
            TableCell::plain(if p.autostart { "yes" } else { "" }),
        ]);
    }

    print!("{}", table.render(false));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    let store = open_store(cfg)?;

    match action {
        ProjectAction::List { all } => {
            let projects = ProjectLogic::list(&store, *all)?;
            if projects.is_empty() {
                info("No projects yet. Add one with `timekeeper project add <name>`.");
            } else {
                print_projects(&projects);
            }
        }

        ProjectAction::Add {
            name,
            autostart,
            hidden,
        } => {
            let p = ProjectLogic::add(&store, name, *autostart, !*hidden)?;
            if p.is_persisted() {
                success(format!("Added project #{} {}", p.id, p.name));
            } else {
                warning(format!("Read-only mode: project {} was not saved", p.name));
            }
        }

        ProjectAction::Rename { id, name } => {
            let p = ProjectLogic::rename(&store, *id, name)?;
            success(format!("Project #{} renamed to {}", p.id, p.name));
        }

        ProjectAction::Show { id } => {
            let p = ProjectLogic::set_visible(&store, *id, true)?;
            success(format!("Project {} is visible", p.name));
        }

        ProjectAction::Hide { id } => {
            let p = ProjectLogic::set_visible(&store, *id, false)?;
            success(format!("Project {} is hidden", p.name));
        }

        ProjectAction::Autostart { id, none } => {
            let target = if *none { None } else { *id };
            match ProjectLogic::set_autostart(&store, target)? {
                Some(p) => success(format!("Project {} starts automatically", p.name)),
                None => success("Autostart cleared"),
            }
        }

        ProjectAction::Move { id, direction } => {
            let direction = match direction {
                MoveDirection::Up => Direction::Up,
                MoveDirection::Down => Direction::Down,
            };
            let projects = ProjectLogic::move_project(&store, *id, direction)?;
            print_projects(&projects);
        }

        ProjectAction::Del { id, yes } => {
            let prompt = format!(
                "Delete project #{} and ALL of its history? This action is irreversible.",
                id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            if ProjectLogic::remove(&store, *id)? {
                success(format!("Project #{} has been deleted.", id));
            } else {
                warning(format!("Project #{} was not deleted.", id));
            }
        }
    }

    Ok(())
}
