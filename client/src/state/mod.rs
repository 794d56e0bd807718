//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `steps` holds the plain data model and its operations; `navigation`
//! wraps it in a reactive handle for the components.

pub mod navigation;
pub mod steps;
