use crate::content::Project;

// number of tags a project card shows before collapsing the rest into a "+N" badge
pub const CARD_TAG_LIMIT: usize = 3;

// project modal selection
//
// a single optional slot: selecting another project replaces the current one, so at most
// one modal can ever be open.  only the id is stored, and lookups go back to the static
// list, which keeps the selection from pointing at anything outside of it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<u32>,
}

impl ProjectSelection {
    pub fn select(&mut self, project: &Project) {
        self.selected = Some(project.id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn current<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }
}

// the tags shown on a card, and how many were left out
pub fn card_tags(project: &Project) -> (&[&'static str], usize) {
    let shown = project.tags.len().min(CARD_TAG_LIMIT);
    (&project.tags[..shown], project.tags.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn later_selection_replaces_earlier() {
        let mut sel = ProjectSelection::default();
        sel.select(&PROJECTS[0]);
        sel.select(&PROJECTS[2]);
        assert_eq!(sel.current(PROJECTS).map(|p| p.id), Some(PROJECTS[2].id));
    }

    #[test]
    fn close_clears_selection() {
        let mut sel = ProjectSelection::default();
        assert!(sel.current(PROJECTS).is_none());

        sel.select(&PROJECTS[1]);
        assert!(sel.is_open());
        sel.close();
        assert!(!sel.is_open());
        assert!(sel.current(PROJECTS).is_none());
    }

    #[test]
    fn card_tags_overflow() {
        let (shown, hidden) = card_tags(&PROJECTS[0]);
        assert_eq!(shown, &["Python", "Machine Learning", "Network Security"]);
        assert_eq!(hidden, 1);
    }
}
