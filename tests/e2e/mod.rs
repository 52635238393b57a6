//! End-to-end tests driving the aria-hooks binary

mod fixtures;
mod hooks;
mod install;
