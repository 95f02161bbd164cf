mod recipe_card;

pub use recipe_card::RecipeCard;
