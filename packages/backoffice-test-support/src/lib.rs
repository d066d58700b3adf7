//! Test support for the backoffice service: one-time logging setup and
//! assertions on the Problem Details error contract.

pub mod logging;
pub mod problem_details;

pub use problem_details::{assert_problem_details, ProblemDetailsLike};
