//! Business services containing domain logic and use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    generate_code, is_code_valid, CodeSender, IssueOutcome, VerificationConfig,
    VerificationOutcome, VerificationService,
};
