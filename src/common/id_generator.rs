// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., J_K7NP3X for jobs)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Candidate profile (CP_)
    CandidateProfile,
    /// Company (C_)
    Company,
    /// Hiring officer (HO_)
    Officer,
    /// Job posting (J_)
    Job,
    /// Applicant record, wishlist included (A_)
    Applicant,
    /// Shortlisted candidate (SC_)
    ShortlistedCandidate,
    /// Successful candidate (HC_) - H for Hired
    SuccessfulCandidate,
    /// Education record (E_)
    Education,
    /// Skill (SK_)
    Skill,
    /// Language ability (LG_)
    LangAbility,
    /// Work experience (W_)
    WorkExperience,
    /// Resume (R_)
    Resume,
    /// Chat message (M_)
    Message,
    /// Notification (N_)
    Notification,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::CandidateProfile => "CP",
            EntityPrefix::Company => "C",
            EntityPrefix::Officer => "HO",
            EntityPrefix::Job => "J",
            EntityPrefix::Applicant => "A",
            EntityPrefix::ShortlistedCandidate => "SC",
            EntityPrefix::SuccessfulCandidate => "HC",
            EntityPrefix::Education => "E",
            EntityPrefix::Skill => "SK",
            EntityPrefix::LangAbility => "LG",
            EntityPrefix::WorkExperience => "W",
            EntityPrefix::Resume => "R",
            EntityPrefix::Message => "M",
            EntityPrefix::Notification => "N",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// # Arguments
/// * `prefix` - The entity type prefix
///
/// # Returns
/// A string in format "PREFIX_XXXXXX" (e.g., "J_K7NP3X")
///
/// # Example
/// ```
/// use crate::common::id_generator::{generate_id, EntityPrefix};
///
/// let job_id = generate_id(EntityPrefix::Job);
/// // Returns something like "J_K7NP3X"
///
/// let user_id = generate_id(EntityPrefix::User);
/// // Returns something like "U_8MWQT2"
/// ```
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

/// Generate a raw Crockford Base32 string without prefix
/// Useful for one-off identifiers that don't map to an entity
///
/// # Arguments
/// * `length` - Number of random characters
///
/// # Example
/// ```
/// let random_str = generate_raw_id(8);
/// // Returns something like "K7NP3XY2"
/// ```
pub fn generate_raw_id(length: usize) -> String {
    generate_crockford_string(length)
}

// ============================================================================
// Convenience functions for each entity type
// ============================================================================

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Candidate Profile ID (CP_XXXXXX)
pub fn generate_candidate_profile_id() -> String {
    generate_id(EntityPrefix::CandidateProfile)
}

/// Generate a Company ID (C_XXXXXX)
pub fn generate_company_id() -> String {
    generate_id(EntityPrefix::Company)
}

/// Generate an Officer ID (HO_XXXXXX)
pub fn generate_officer_id() -> String {
    generate_id(EntityPrefix::Officer)
}

/// Generate a Job ID (J_XXXXXX)
pub fn generate_job_id() -> String {
    generate_id(EntityPrefix::Job)
}

/// Generate an Applicant ID (A_XXXXXX)
pub fn generate_applicant_id() -> String {
    generate_id(EntityPrefix::Applicant)
}

/// Generate a Shortlisted Candidate ID (SC_XXXXXX)
pub fn generate_shortlisted_candidate_id() -> String {
    generate_id(EntityPrefix::ShortlistedCandidate)
}

/// Generate a Successful Candidate ID (HC_XXXXXX)
pub fn generate_successful_candidate_id() -> String {
    generate_id(EntityPrefix::SuccessfulCandidate)
}

/// Generate an Education ID (E_XXXXXX)
pub fn generate_education_id() -> String {
    generate_id(EntityPrefix::Education)
}

/// Generate a Skill ID (SK_XXXXXX)
pub fn generate_skill_id() -> String {
    generate_id(EntityPrefix::Skill)
}

/// Generate a Language Ability ID (LG_XXXXXX)
pub fn generate_lang_ability_id() -> String {
    generate_id(EntityPrefix::LangAbility)
}

/// Generate a Work Experience ID (W_XXXXXX)
pub fn generate_work_experience_id() -> String {
    generate_id(EntityPrefix::WorkExperience)
}

/// Generate a Resume ID (R_XXXXXX)
pub fn generate_resume_id() -> String {
    generate_id(EntityPrefix::Resume)
}

/// Generate a Message ID (M_XXXXXX)
pub fn generate_message_id() -> String {
    generate_id(EntityPrefix::Message)
}

/// Generate a Notification ID (N_XXXXXX)
pub fn generate_notification_id() -> String {
    generate_id(EntityPrefix::Notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let job_id = generate_job_id();
        assert!(job_id.starts_with("J_"));
        assert_eq!(job_id.len(), 8); // "J_" + 6 chars

        let profile_id = generate_candidate_profile_id();
        assert!(profile_id.starts_with("CP_"));
        assert_eq!(profile_id.len(), 9);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_job_id();
        let random_part = &id[2..]; // Skip "J_"

        for c in random_part.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        // Verify no ambiguous characters
        assert!(!random_part.contains('I'));
        assert!(!random_part.contains('L'));
        assert!(!random_part.contains('O'));
        assert!(!random_part.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_job_id();
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_all_prefixes() {
        assert!(generate_user_id().starts_with("U_"));
        assert!(generate_candidate_profile_id().starts_with("CP_"));
        assert!(generate_company_id().starts_with("C_"));
        assert!(generate_officer_id().starts_with("HO_"));
        assert!(generate_job_id().starts_with("J_"));
        assert!(generate_applicant_id().starts_with("A_"));
        assert!(generate_shortlisted_candidate_id().starts_with("SC_"));
        assert!(generate_successful_candidate_id().starts_with("HC_"));
        assert!(generate_education_id().starts_with("E_"));
        assert!(generate_skill_id().starts_with("SK_"));
        assert!(generate_lang_ability_id().starts_with("LG_"));
        assert!(generate_work_experience_id().starts_with("W_"));
        assert!(generate_resume_id().starts_with("R_"));
        assert!(generate_message_id().starts_with("M_"));
        assert!(generate_notification_id().starts_with("N_"));
    }

    #[test]
    fn test_raw_id() {
        let raw = generate_raw_id(8);
        assert_eq!(raw.len(), 8);
        assert!(!raw.contains('_')); // No prefix separator
    }
}
