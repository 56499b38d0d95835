//! End-to-end tests against the assembled router.

mod common;
mod flow;
mod gate;
