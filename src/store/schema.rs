//! Property names the three remote tables are expected to carry.
//!
//! These names are the contract with the remote store. The skills table's
//! `Skill` select column is the single canonical representation of a hard
//! skill; the roster table's `Hard Skills` column is a relation and is never
//! filtered on.

/// Primary roster table.
pub mod roster {
    /// Title column holding the numeric student identifier as text.
    pub const STUDENT_ID: &str = "Student ID";
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const HYPER_EMAIL: &str = "Hyper Email";
    pub const PROGRAM: &str = "Program";
    pub const LANGUAGES: &str = "Languages";
    /// Relation to rows of the skills table.
    pub const HARD_SKILLS: &str = "Hard Skills";
    pub const AVAILABILITY: &str = "Availability";
    pub const PORTFOLIO: &str = "Portfolio";
    /// Relation to a row of the contacts table.
    pub const CONTACT: &str = "Contact";
}

/// Per-person skill entries.
pub mod skills {
    pub const STUDENT_ID: &str = "Student ID";
    pub const SKILL: &str = "Skill";
    pub const COMMENT: &str = "Comment";
}

/// Per-person contact entries.
pub mod contacts {
    pub const STUDENT_ID: &str = "Student ID";
    pub const EMAIL: &str = "Email";
    pub const LINKEDIN: &str = "LinkedIn";
    pub const SLACK_MEMBER_ID: &str = "Slack Member ID";
}
