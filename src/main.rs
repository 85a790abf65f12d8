use dishmate::{
    api::MealDbClient,
    core::Config,
    discovery,
    persistence::FileStorage,
    state::{
        Favorites,
        Pantry,
    },
};

#[tokio::main]
async fn main() {
    let storage = FileStorage::new();
    let pantry = Pantry::load(&storage);
    let favorites = Favorites::load(&storage);

    if pantry.is_empty() {
        println!("Your pantry is empty! Add ingredients to discover recipes.");
        return;
    }

    let client = match MealDbClient::new(Config::default()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("Finding recipes for {} pantry ingredients...", pantry.len());
    let results = discovery::discover_by_pantry(&client, &pantry, &favorites).await;

    if results.is_empty() {
        println!("No recipes found matching your pantry ingredients.");
        return;
    }

    for entry in &results {
        let marker = if entry.is_favorite { "*" } else { " " };
        println!("{} {:<45} ingredients: {}", marker, entry.recipe.name, entry.pantry.label());
    }
}
