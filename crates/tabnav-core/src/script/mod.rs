//! Navigation scripts and built-in recipes.
//!
//! A [`Script`] is an ordered list of [`Step`]s, each one call on a router capability.
//! Scripts are plain JSON so QA can replay a navigation path headlessly; recipes are
//! the named scripts that ship with the crate.

pub mod errors;
pub mod recipes;
mod types;

pub use errors::ScriptError;
pub use recipes::{Recipe, find_recipe, recipes};
pub use types::{Script, Step};
