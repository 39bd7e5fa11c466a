//! Support modules for catalog page BDD tests.
//!
//! Step definitions in `page_steps` register themselves with every scenario
//! binary that includes this module.

pub(crate) mod page_steps;
pub(crate) mod state;

pub(crate) use state::PageState;
