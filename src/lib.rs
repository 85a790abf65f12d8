pub mod api;
pub mod articles;
pub mod core;
pub mod discovery;
pub mod persistence;
pub mod reconcile;
pub mod state;

pub use crate::core::{
    Config,
    DishmateError,
};
