//! Candidate profile records module
//!
//! Educations, skills, language abilities, work experiences and resumes.
//! Each type lives in its own table keyed to a candidate profile and is
//! served by the same list/create/delete route shape.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::profile_routes;
