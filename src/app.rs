//! Composition root: groups the authentication descriptor, the two polling
//! triggers and the create action under their host-facing keys.

use crate::auth;
use crate::creates::upload;
use crate::fields::{AuthenticationDescriptor, CreateDescriptor, TriggerDescriptor};
use crate::triggers::{projects, publish};

#[derive(Debug, Clone)]
pub struct App {
    pub authentication: &'static AuthenticationDescriptor,
    pub triggers: Vec<&'static TriggerDescriptor>,
    pub creates: Vec<&'static CreateDescriptor>,
}

impl App {
    pub fn trigger(&self, key: &str) -> Option<&'static TriggerDescriptor> {
        self.triggers.iter().copied().find(|t| t.key == key)
    }

    pub fn create(&self, key: &str) -> Option<&'static CreateDescriptor> {
        self.creates.iter().copied().find(|c| c.key == key)
    }
}

pub fn app() -> App {
    App {
        authentication: &auth::AUTHENTICATION,
        triggers: vec![&*publish::TRIGGER, &*projects::TRIGGER],
        creates: vec![&*upload::CREATE],
    }
}
