pub mod config;
pub mod errors;
pub mod models;

pub use config::Config;
pub use errors::DishmateError;
pub use models::{
    AnnotatedRecipe,
    Article,
    CatalogIngredient,
    Ingredient,
    PantryMatch,
    Recipe,
    RecipeSummary,
};
