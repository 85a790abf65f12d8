pub mod favorites;
pub mod meal_plan;
pub mod pantry;
pub mod shopping_list;

pub use favorites::Favorites;
pub use meal_plan::MealPlan;
pub use pantry::{
    Pantry,
    PantryItem,
};
pub use shopping_list::{
    ShoppingItem,
    ShoppingList,
};
