pub mod projects;
pub mod publish;
