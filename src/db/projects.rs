use super::SqliteStore;
use super::queries::{SELECT_PROJECTS, map_project};
use super::store::ProjectStore;
use crate::errors::AppResult;
use crate::models::project::Project;
use rusqlite::{OptionalExtension, params};

impl ProjectStore for SqliteStore {
    fn all_projects(&self) -> AppResult<Vec<Project>> {
        self.pool().with_conn(|conn| {
            let mut stmt = conn.prepare(SELECT_PROJECTS)?;
            let rows = stmt.query_map([], map_project)?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    fn project_by_id(&self, id: i64) -> AppResult<Option<Project>> {
        self.pool().with_conn(|conn| {
            let sql = format!("{SELECT_PROJECTS} WHERE id = ?1");
            let project = conn.query_row(&sql, [id], map_project).optional()?;
            Ok(project)
        })
    }

    fn save_project(&self, project: &Project) -> AppResult<Project> {
        if self.is_read_only() {
            return Ok(project.clone());
        }

        self.pool().with_conn(|conn| {
            let mut saved = project.clone();

            if project.is_persisted() {
                conn.execute(
                    "UPDATE projects
                     SET name = ?1, autostart = ?2, visibility = ?3, position = ?4
                     WHERE id = ?5",
                    params![
                        project.name,
                        project.autostart,
                        project.visible,
                        project.position,
                        project.id,
                    ],
                )?;
            } else {
                conn.execute(
                    "INSERT INTO projects (name, autostart, visibility, position)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        project.name,
                        project.autostart,
                        project.visible,
                        project.position,
                    ],
                )?;
                saved.id = conn.last_insert_rowid();
            }

            Ok(saved)
        })
    }

    fn delete_project(&self, project: &Project) -> AppResult<bool> {
        if self.is_read_only() || !project.is_persisted() {
            return Ok(false);
        }

        self.pool().with_conn(|conn| {
            let affected = conn.execute("DELETE FROM projects WHERE id = ?1", [project.id])?;
            Ok(affected > 0)
        })
    }
}
