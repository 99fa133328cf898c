use rand::Rng;

use crate::domain::{
    diet::{Classification, Diet, classify},
    meal_plan::{
        entities::{DayMeals, DayPlan, GeneratedPlan, GroceryItem, Meal, MealSlot},
        value_objects::Preferences,
    },
};

/// Base menu tier, most restrictive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietTier {
    Vegan,
    Vegetarian,
    Omnivore,
}

/// What the demo generator needs to know about a restriction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoProfile {
    pub tier: DietTier,
    pub dairy_free: bool,
    pub egg_free: bool,
    pub gluten_free: bool,
    pub pescatarian: bool,
}

impl From<&Classification> for DemoProfile {
    fn from(classification: &Classification) -> Self {
        let vegan = classification.is_active(Diet::Vegan);
        let tier = if vegan {
            DietTier::Vegan
        } else if classification.is_active(Diet::Vegetarian) {
            DietTier::Vegetarian
        } else {
            DietTier::Omnivore
        };

        Self {
            tier,
            dairy_free: vegan || classification.is_active(Diet::DairyFree),
            egg_free: vegan || classification.is_active(Diet::EggFree),
            gluten_free: classification.is_active(Diet::GlutenFree),
            pescatarian: classification.is_active(Diet::Pescatarian),
        }
    }
}

/// Produce a plan without calling a provider.
///
/// Every requested slot of every day gets one of three candidate meals for
/// the classified diet, drawn from `rng`; unrequested slots stay empty. The
/// grocery list is the fixed list for the diet with substitutions applied.
pub fn synthesize<R>(preferences: &Preferences, rng: &mut R) -> GeneratedPlan
where
    R: Rng + ?Sized,
{
    let profile = DemoProfile::from(&classify(&preferences.dietary_restrictions));
    let slots = preferences.meals.slots();

    let meal_plan = (1..=preferences.number_of_days)
        .map(|index| {
            let mut meals = DayMeals::default();
            for &slot in &slots {
                let options = candidates(&profile, slot);
                let choice = options[rng.gen_range(0..options.len())].clone();
                *meals.slot_mut(slot) = Some(choice);
            }

            DayPlan {
                day: format!("Day {}", index),
                meals,
            }
        })
        .collect();

    GeneratedPlan {
        meal_plan,
        grocery_list: grocery_list(&profile),
    }
}

fn pick<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition { when_true } else { when_false }
}

struct Staples {
    bread: &'static str,
    tortilla: &'static str,
    nut_spread: &'static str,
}

impl Staples {
    fn for_profile(profile: &DemoProfile) -> Self {
        Self {
            bread: pick(
                profile.gluten_free,
                "Toasted rice cakes",
                "Whole grain bread",
            ),
            tortilla: pick(profile.gluten_free, "Corn tortilla", "Whole wheat tortilla"),
            nut_spread: pick(profile.dairy_free, "almond spread", "almond butter"),
        }
    }
}

/// Candidate meals for one slot, always three.
pub fn candidates(profile: &DemoProfile, slot: MealSlot) -> Vec<Meal> {
    match slot {
        MealSlot::Breakfast => breakfasts(profile),
        MealSlot::Lunch => lunches(profile),
        MealSlot::Dinner => dinners(profile),
        MealSlot::Snacks => snacks(profile),
    }
}

fn breakfasts(profile: &DemoProfile) -> Vec<Meal> {
    let staples = Staples::for_profile(profile);

    if profile.tier == DietTier::Vegan {
        return vec![
            Meal::new(
                "Overnight Oats with Berries",
                "Steel-cut oats soaked in oat drink with chia seeds and fresh berries",
                320.0,
            ),
            Meal::new(
                "Avocado Toast",
                format!(
                    "{} with smashed avocado, cherry tomatoes, and nutritional yeast",
                    staples.bread
                ),
                280.0,
            ),
            Meal::new(
                "Tofu Scramble",
                "Scrambled tofu with turmeric, nutritional yeast, and vegetables",
                300.0,
            ),
        ];
    }

    vec![
        pick(
            profile.dairy_free,
            Meal::new(
                "Coconut Berry Parfait",
                "Cultured coconut with fresh berries and granola",
                320.0,
            ),
            Meal::new(
                "Greek Yogurt Parfait",
                "Greek yogurt with fresh berries and granola",
                320.0,
            ),
        ),
        Meal::new(
            "Avocado Toast",
            format!(
                "{} with smashed avocado and {}",
                staples.bread,
                pick(profile.egg_free, "cherry tomatoes", "a poached egg")
            ),
            280.0,
        ),
        Meal::new(
            "Overnight Oats",
            format!(
                "Steel-cut oats with {}, banana, and {}",
                pick(profile.dairy_free, "oat drink", "milk"),
                staples.nut_spread
            ),
            350.0,
        ),
    ]
}

fn lunches(profile: &DemoProfile) -> Vec<Meal> {
    let staples = Staples::for_profile(profile);

    match profile.tier {
        DietTier::Vegan => vec![
            Meal::new(
                "Buddha Bowl",
                "Quinoa with roasted vegetables, chickpeas, and tahini dressing",
                450.0,
            ),
            Meal::new(
                "Lentil Soup",
                "Hearty lentil soup with carrots, celery, and spinach",
                380.0,
            ),
            Meal::new(
                "Falafel Wrap",
                format!(
                    "{} with falafel, hummus, and fresh vegetables",
                    staples.tortilla
                ),
                420.0,
            ),
        ],
        DietTier::Vegetarian => {
            let filling = pick(
                profile.dairy_free,
                "tomato, basil, and avocado",
                "tomato, mozzarella, and basil",
            );
            vec![
                mediterranean_bowl(),
                pick(
                    profile.gluten_free,
                    Meal::new(
                        "Caprese Lettuce Wraps",
                        format!("Crisp lettuce leaves filled with {}", filling),
                        340.0,
                    ),
                    Meal::new(
                        "Caprese Sandwich",
                        format!("Whole grain bread with {}", filling),
                        380.0,
                    ),
                ),
                Meal::new(
                    "Garden Wrap",
                    format!("{} with hummus and fresh vegetables", staples.tortilla),
                    320.0,
                ),
            ]
        }
        DietTier::Omnivore => vec![
            mediterranean_bowl(),
            pick(
                profile.pescatarian,
                Meal::new(
                    "Grilled Shrimp Salad",
                    "Mixed greens with grilled shrimp and balsamic vinaigrette",
                    360.0,
                ),
                Meal::new(
                    "Grilled Chicken Salad",
                    "Mixed greens with grilled chicken and balsamic vinaigrette",
                    380.0,
                ),
            ),
            pick(
                profile.gluten_free,
                Meal::new("Tuna Lettuce Wraps", "Lettuce wraps with tuna salad", 300.0),
                Meal::new(
                    "Tuna Sandwich",
                    "Whole grain bread with tuna salad and lettuce",
                    320.0,
                ),
            ),
        ],
    }
}

fn mediterranean_bowl() -> Meal {
    Meal::new(
        "Mediterranean Bowl",
        "Quinoa with chickpeas, cucumber, and tahini dressing",
        450.0,
    )
}

fn primavera(profile: &DemoProfile, finish: &str) -> Meal {
    let (name, base) = pick(
        profile.gluten_free,
        ("Rice Noodle Primavera", "Rice noodles"),
        ("Pasta Primavera", "Whole wheat pasta"),
    );
    Meal::new(
        name,
        format!("{} with fresh vegetables and {}", base, finish),
        480.0,
    )
}

fn dinners(profile: &DemoProfile) -> Vec<Meal> {
    match profile.tier {
        DietTier::Vegan => vec![
            Meal::new(
                "Chickpea Curry",
                "Spiced chickpeas in a coconut sauce with vegetables over brown rice",
                520.0,
            ),
            Meal::new(
                "Vegetable Stir-Fry",
                "Mixed vegetables with tofu over brown rice with tamari sauce",
                480.0,
            ),
            Meal::new(
                "Stuffed Bell Peppers",
                "Bell peppers filled with quinoa, black beans, and vegetables",
                420.0,
            ),
        ],
        DietTier::Vegetarian => {
            let (vegetable, name) = pick(
                profile.egg_free,
                ("zucchini", "Zucchini"),
                ("eggplant", "Eggplant"),
            );
            vec![
                pick(
                    profile.dairy_free,
                    Meal::new(
                        format!("{} Marinara Bake", name),
                        format!(
                            "Baked {} with nutritional yeast and marinara sauce",
                            vegetable
                        ),
                        460.0,
                    ),
                    Meal::new(
                        format!("{} Parmesan", name),
                        format!("Baked {} with mozzarella and parmesan", vegetable),
                        520.0,
                    ),
                ),
                primavera(profile, pick(profile.dairy_free, "olive oil", "parmesan")),
                Meal::new(
                    "Vegetable Curry",
                    "Mixed vegetables in coconut curry sauce over rice",
                    420.0,
                ),
            ]
        }
        DietTier::Omnivore => vec![
            Meal::new(
                "Salmon with Roasted Vegetables",
                "Baked salmon with seasonal roasted vegetables",
                520.0,
            ),
            primavera(profile, "olive oil"),
            pick(
                profile.pescatarian,
                Meal::new(
                    "Shrimp Stir-Fry Bowl",
                    "Shrimp and mixed vegetables over brown rice",
                    420.0,
                ),
                Meal::new(
                    "Stir-Fry Bowl",
                    "Chicken and mixed vegetables over brown rice",
                    420.0,
                ),
            ),
        ],
    }
}

fn snacks(profile: &DemoProfile) -> Vec<Meal> {
    let staples = Staples::for_profile(profile);

    vec![
        Meal::new(
            pick(
                profile.dairy_free,
                "Apple with Almond Spread",
                "Apple with Almond Butter",
            ),
            format!("Fresh apple slices with natural {}", staples.nut_spread),
            180.0,
        ),
        Meal::new("Trail Mix", "Mixed nuts, seeds, and dried fruit", 150.0),
        Meal::new(
            "Hummus and Vegetable Sticks",
            "Fresh carrot, cucumber, and pepper sticks with homemade hummus",
            120.0,
        ),
    ]
}

/// The consolidated grocery list for a profile.
pub fn grocery_list(profile: &DemoProfile) -> Vec<GroceryItem> {
    let bread = pick(
        profile.gluten_free,
        GroceryItem::new("Rice Cakes", "1 pack", "Bakery"),
        GroceryItem::new("Whole Grain Bread", "1 loaf", "Bakery"),
    );
    let tortillas = pick(
        profile.gluten_free,
        GroceryItem::new("Corn Tortillas", "1 pack", "Bakery"),
        GroceryItem::new("Whole Wheat Tortillas", "1 pack", "Bakery"),
    );
    let nut_spread = pick(
        profile.dairy_free,
        GroceryItem::new("Almond Spread", "1 jar", "Pantry"),
        GroceryItem::new("Almond Butter", "1 jar", "Pantry"),
    );

    if profile.tier == DietTier::Vegan {
        return vec![
            GroceryItem::new("Oat Drink", "2 cartons", "Plant-Based"),
            GroceryItem::new("Tofu", "2 blocks", "Plant-Based"),
            GroceryItem::new("Nutritional Yeast", "1 container", "Plant-Based"),
            GroceryItem::new("Chickpeas", "3 cans", "Pantry"),
            GroceryItem::new("Black Beans", "2 cans", "Pantry"),
            GroceryItem::new("Red Lentils", "1 bag", "Pantry"),
            GroceryItem::new("Quinoa", "1 bag", "Pantry"),
            GroceryItem::new("Brown Rice", "1 bag", "Pantry"),
            GroceryItem::new("Steel-Cut Oats", "1 bag", "Pantry"),
            GroceryItem::new("Avocados", "4", "Produce"),
            GroceryItem::new("Bell Peppers", "6", "Produce"),
            GroceryItem::new("Spinach", "2 bunches", "Produce"),
            GroceryItem::new("Carrots", "1 bunch", "Produce"),
            GroceryItem::new("Celery", "1 head", "Produce"),
            GroceryItem::new("Broccoli", "2 heads", "Produce"),
            GroceryItem::new("Bananas", "6", "Produce"),
            GroceryItem::new("Berries", "2 pints", "Produce"),
            GroceryItem::new("Apples", "4", "Produce"),
            GroceryItem::new("Lemons", "3", "Produce"),
            GroceryItem::new("Garlic", "1 head", "Produce"),
            GroceryItem::new("Ginger", "1 piece", "Produce"),
            GroceryItem::new("Tahini", "1 jar", "Pantry"),
            GroceryItem::new("Coconut Curry Base", "2 cans", "Pantry"),
            GroceryItem::new("Tamari Sauce", "1 bottle", "Pantry"),
            GroceryItem::new("Olive Oil", "1 bottle", "Pantry"),
            nut_spread,
            GroceryItem::new("Chia Seeds", "1 bag", "Pantry"),
            GroceryItem::new("Trail Mix", "1 bag", "Pantry"),
            bread,
            tortillas,
        ];
    }

    let dairy = pick(
        profile.dairy_free,
        [
            GroceryItem::new("Oat Drink", "1 carton", "Plant-Based"),
            GroceryItem::new("Cultured Coconut", "2 containers", "Plant-Based"),
        ],
        [
            GroceryItem::new("Milk", "1 carton", "Dairy"),
            GroceryItem::new("Greek Yogurt", "2 containers", "Dairy"),
        ],
    );
    let eggs = pick(
        profile.egg_free,
        GroceryItem::new("Flax Seeds", "1 bag", "Pantry"),
        GroceryItem::new("Eggs", "1 dozen", "Dairy"),
    );
    let pasta = pick(
        profile.gluten_free,
        GroceryItem::new("Rice Noodles", "1 box", "Pantry"),
        GroceryItem::new("Whole Wheat Pasta", "1 box", "Pantry"),
    );

    let mut list: Vec<GroceryItem> = dairy.into_iter().collect();

    if profile.tier == DietTier::Vegetarian {
        list.extend([
            GroceryItem::new("Chickpeas", "2 cans", "Pantry"),
            GroceryItem::new("Quinoa", "1 bag", "Pantry"),
            GroceryItem::new("Avocados", "4", "Produce"),
            GroceryItem::new("Mixed Greens", "2 bags", "Produce"),
            GroceryItem::new("Romaine Lettuce", "1 head", "Produce"),
            GroceryItem::new("Cherry Tomatoes", "1 pint", "Produce"),
            GroceryItem::new("Cucumber", "2", "Produce"),
            GroceryItem::new(
                pick(profile.egg_free, "Zucchini", "Eggplant"),
                "2",
                "Produce",
            ),
            GroceryItem::new("Fresh Basil", "1 bunch", "Produce"),
            GroceryItem::new("Bananas", "6", "Produce"),
            GroceryItem::new("Berries", "2 pints", "Produce"),
            GroceryItem::new("Apples", "4", "Produce"),
            pick(
                profile.dairy_free,
                GroceryItem::new("Nutritional Yeast", "1 container", "Plant-Based"),
                GroceryItem::new("Parmesan Cheese", "1 container", "Dairy"),
            ),
            pick(
                profile.dairy_free,
                GroceryItem::new("Vegan Mozzarella", "1 package", "Plant-Based"),
                GroceryItem::new("Mozzarella Cheese", "1 package", "Dairy"),
            ),
            GroceryItem::new("Marinara Sauce", "1 jar", "Pantry"),
            GroceryItem::new("Tahini", "1 jar", "Pantry"),
            GroceryItem::new("Coconut Curry Base", "1 can", "Pantry"),
            GroceryItem::new("Granola", "1 bag", "Pantry"),
            GroceryItem::new("Steel-Cut Oats", "1 bag", "Pantry"),
            GroceryItem::new("Rice", "1 bag", "Pantry"),
        ]);
    } else {
        list.extend([
            pick(
                profile.pescatarian,
                GroceryItem::new("Shrimp", "1 lb", "Seafood"),
                GroceryItem::new("Chicken Breast", "1 lb", "Meat"),
            ),
            GroceryItem::new("Salmon Fillets", "4 pieces", "Seafood"),
            GroceryItem::new("Tuna", "2 cans", "Pantry"),
            GroceryItem::new("Quinoa", "1 bag", "Pantry"),
            GroceryItem::new("Chickpeas", "1 can", "Pantry"),
            GroceryItem::new("Avocados", "4", "Produce"),
            GroceryItem::new("Mixed Greens", "2 bags", "Produce"),
            GroceryItem::new("Romaine Lettuce", "1 head", "Produce"),
            GroceryItem::new("Cherry Tomatoes", "1 pint", "Produce"),
            GroceryItem::new("Cucumber", "2", "Produce"),
            GroceryItem::new("Seasonal Vegetables", "2 lbs", "Produce"),
            GroceryItem::new("Bananas", "6", "Produce"),
            GroceryItem::new("Berries", "2 pints", "Produce"),
            GroceryItem::new("Apples", "4", "Produce"),
            GroceryItem::new("Balsamic Vinegar", "1 bottle", "Pantry"),
            GroceryItem::new("Granola", "1 bag", "Pantry"),
            GroceryItem::new("Steel-Cut Oats", "1 bag", "Pantry"),
            GroceryItem::new("Brown Rice", "1 bag", "Pantry"),
        ]);
    }

    list.extend([
        GroceryItem::new("Olive Oil", "1 bottle", "Pantry"),
        nut_spread,
        bread,
        pasta,
        tortillas,
        eggs,
    ]);
    list
}
