use card::{CardState, RecipeCard, RecipeCardData, Registry, TAG_NAME};
use serde_json::json;

const SOUP_ARTICLE: &str = concat!(
    r#"<article>"#,
    r#"<img src="a.jpg" alt="alt">"#,
    r#"<p class="title"><a href="&#x2f;r&#x2f;1">Soup</a></p>"#,
    r#"<p class="organization">ChefCo</p>"#,
    r#"<div class="rating"><span>4</span><img src=".&#x2f;assets&#x2f;images&#x2f;icons&#x2f;4-star.svg" alt="4 stars"><span>(120)</span></div>"#,
    r#"<time>20 min</time>"#,
    r#"<p class="ingredients">Water, Salt</p>"#,
    r#"</article>"#,
);

fn soup() -> serde_json::Value {
    json!({
        "imgSrc": "a.jpg",
        "imgAlt": "alt",
        "titleLnk": "/r/1",
        "titleTxt": "Soup",
        "organization": "ChefCo",
        "rating": 4,
        "numRatings": 120,
        "lengthTime": "20",
        "ingredients": "Water, Salt",
    })
}

#[test]
fn serializes_bound_card_inside_shadow_root() {
    let mut card = RecipeCard::new();
    card.set_data_value(&soup()).unwrap();

    let html = card.to_string();
    let expected_tail = format!("</style>{}</template></recipe-card>", SOUP_ARTICLE);

    assert_eq!(card.state(), CardState::Bound);
    assert!(html.starts_with(r#"<recipe-card><template shadowrootmode="open"><style>"#));
    assert!(html.ends_with(&expected_tail), "{}", html);
}

#[test]
fn rebinding_serializes_only_the_latest_record() {
    let mut card = RecipeCard::new();
    card.set_data_value(&json!({ "titleTxt": "Stew", "organization": "Other" })).unwrap();
    card.set_data_value(&soup()).unwrap();

    let html = card.to_string();
    assert_eq!(html.matches("<article>").count(), 1);
    assert!(html.contains(SOUP_ARTICLE));
    assert!(!html.contains("Stew"));
    assert!(!html.contains("Other"));
}

#[test]
fn injected_markup_cannot_escape_the_card() {
    let data: RecipeCardData = serde_json::from_value(json!({
        "imgSrc": "x\" onerror=\"alert(1)",
        "titleTxt": "</template><style>body { display: none }</style>",
        "organization": "<i>ChefCo</i>",
    }))
    .unwrap();

    let mut card = RecipeCard::new();
    card.set_data(Some(&data));
    let html = card.to_string();

    assert_eq!(html.matches("</template>").count(), 1);
    assert_eq!(html.matches("<style>").count(), 1);
    assert!(html.contains(r#"<img src="x&quot; onerror=&quot;alert(1)" alt="">"#));
    assert!(html.contains("&lt;i&gt;ChefCo&lt;&#x2f;i&gt;"));
}

#[test]
fn registry_pages_render_every_record() {
    let registry = Registry::with_recipe_card().unwrap();
    let records = json!([soup(), { "titleTxt": "Stew", "rating": 3 }]);

    let cards = card::page::render(&registry, &records).unwrap();
    let page = card::page::document("Recipes", &cards);

    assert_eq!(page.matches(&format!("<{}>", TAG_NAME)).count(), 2);
    assert!(page.contains(SOUP_ARTICLE));
    assert!(page.contains(r#"<img src=".&#x2f;assets&#x2f;images&#x2f;icons&#x2f;3-star.svg" alt="3 stars">"#));
    assert!(page.contains("<title>Recipes</title>"));
}
