//! Projection of composed people onto the public view.

use super::model::{ComposedPerson, PersonView};

/// Anything that can be projected onto a [`PersonView`]. Projecting a view
/// is the identity.
pub trait Project {
    fn project(self) -> PersonView;
}

impl Project for ComposedPerson {
    fn project(self) -> PersonView {
        let record = self.record;
        PersonView {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            program: record.program,
            languages: record.languages,
            availability: record.availability,
            portfolio: record.portfolio,
            hyper_email: record.hyper_email,
            hard_skills: self.hard_skills,
            contact: self.contact,
        }
    }
}

impl Project for PersonView {
    fn project(self) -> PersonView {
        self
    }
}

#[must_use]
pub fn project_all<P: Project>(people: Vec<P>) -> Vec<PersonView> {
    people.into_iter().map(Project::project).collect()
}
