use serde::Serialize;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A named task the user tracks time against.
///
/// `id` is the database identity. Projects that were created but not yet
/// written carry a negative placeholder id which is replaced by the
/// generated identity on first save.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub autostart: bool, // ⇔ projects.autostart (INT 0/1)
    pub visible: bool,   // ⇔ projects.visibility (INT 0/1)
    pub position: i64,   // ⇔ projects.position (manual order)
}

impl Project {
    pub fn new(id: i64, name: &str, autostart: bool, visible: bool, position: i64) -> Self {
        Self {
            id,
            name: name.to_string(),
            autostart,
            visible,
            position,
        }
    }

    /// Build an unsaved project whose placeholder id does not collide with
    /// any id (real or placeholder) in `existing`.
    pub fn placeholder(name: &str, existing: &[Project], position: i64) -> Self {
        Self::new(next_placeholder_id(existing), name, false, true, position)
    }

    pub fn is_persisted(&self) -> bool {
        self.id >= 0
    }
}

/// `-(max |id| + 1)` over the given projects.
pub fn next_placeholder_id(existing: &[Project]) -> i64 {
    let max = existing.iter().map(|p| p.id.abs()).max().unwrap_or(0);
    -(max + 1)
}

/// Highest `position` in use, 0 when there are no projects.
pub fn max_position(projects: &[Project]) -> i64 {
    projects.iter().map(|p| p.position).max().unwrap_or(0)
}

/// Display order: `position` ascending, ties broken by `id` ascending.
pub fn sort_by_position(projects: &mut [Project]) {
    projects.sort_by(compare_position);
}

fn compare_position(a: &Project, b: &Project) -> Ordering {
    a.position.cmp(&b.position).then(a.id.cmp(&b.id))
}

// Identity semantics: two projects are the same row iff their ids match.
impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
