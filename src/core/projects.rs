//! Project management: creation, ordering, visibility, autostart, removal.

use crate::db::{HistoryStore, ProjectStore};
use crate::errors::{AppError, AppResult};
use crate::models::project::{Project, max_position, sort_by_position};
use crate::ui::messages::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub struct ProjectLogic;

impl ProjectLogic {
    /// All projects in display order.
    pub fn list<S: ProjectStore + ?Sized>(store: &S, include_hidden: bool) -> AppResult<Vec<Project>> {
        let mut projects: Vec<Project> = store
            .all_projects()?
            .into_iter()
            .filter(|p| include_hidden || p.visible)
            .collect();
        sort_by_position(&mut projects);
        Ok(projects)
    }

    fn find<S: ProjectStore + ?Sized>(store: &S, id: i64) -> AppResult<Project> {
        store
            .project_by_id(id)?
            .ok_or(AppError::ProjectNotFound(id))
    }

    /// Create a project at the end of the list.
    pub fn add<S: ProjectStore + ?Sized>(
        store: &S,
        name: &str,
        autostart: bool,
        visible: bool,
    ) -> AppResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument("project name must not be empty".into()));
        }

        let existing = store.all_projects()?;
        let mut project = Project::placeholder(name, &existing, max_position(&existing) + 1);
        project.visible = visible;

        let project = store.save_project(&project)?;

        if autostart
            && project.is_persisted()
            && let Some(updated) = Self::set_autostart(store, Some(project.id))?
        {
            return Ok(updated);
        }
        Ok(project)
    }

    pub fn rename<S: ProjectStore + ?Sized>(store: &S, id: i64, name: &str) -> AppResult<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument("project name must not be empty".into()));
        }

        let mut project = Self::find(store, id)?;
        project.name = name.to_string();
        store.save_project(&project)
    }

    pub fn set_visible<S: ProjectStore + ?Sized>(store: &S, id: i64, visible: bool) -> AppResult<Project> {
        let mut project = Self::find(store, id)?;
        project.visible = visible;
        store.save_project(&project)
    }

    /// Make `id` the only autostart project, or clear autostart with `None`.
    /// Returns the updated target project.
    pub fn set_autostart<S: ProjectStore + ?Sized>(
        store: &S,
        id: Option<i64>,
    ) -> AppResult<Option<Project>> {
        let projects = store.all_projects()?;

        if let Some(id) = id
            && !projects.iter().any(|p| p.id == id)
        {
            return Err(AppError::ProjectNotFound(id));
        }

        let mut target = None;
        for mut p in projects {
            let wanted = Some(p.id) == id;
            if p.autostart != wanted {
                p.autostart = wanted;
                p = store.save_project(&p)?;
            }
            if wanted {
                target = Some(p);
            }
        }

        Ok(target)
    }

    /// Swap a project with its neighbour and renumber every position
    /// (0-based, list order).
    pub fn move_project<S: ProjectStore + ?Sized>(
        store: &S,
        id: i64,
        direction: Direction,
    ) -> AppResult<Vec<Project>> {
        let mut projects = Self::list(store, true)?;

        let idx = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::ProjectNotFound(id))?;

        let target = match direction {
            Direction::Up => idx.checked_sub(1),
            Direction::Down => Some(idx + 1).filter(|i| *i < projects.len()),
        };

        if let Some(t) = target {
            projects.swap(idx, t);
        }

        for (pos, p) in projects.iter_mut().enumerate() {
            if p.position != pos as i64 {
                p.position = pos as i64;
                *p = store.save_project(p)?;
            }
        }

        Ok(projects)
    }

    /// Delete a project after removing its history rows.
    pub fn remove<S: ProjectStore + HistoryStore + ?Sized>(store: &S, id: i64) -> AppResult<bool> {
        let project = Self::find(store, id)?;

        store.delete_history_for_project(&project)?;
        let deleted = store.delete_project(&project)?;

        if deleted {
            info(format!("Deleted project {} and its history", project.name));
        }
        Ok(deleted)
    }
}
