//! Candidates module
//!
//! Candidate profiles and the three recruitment pipeline stages built on
//! them: applicants (with wishlist), shortlisted candidates (with the
//! interview flow) and successful candidates. Pipeline reads return the
//! full profile expansion assembled by `CandidateService`.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::candidate_routes;
pub use services::CandidateService;
