use std::fmt::Write as _;

use crate::domain::{diet::ForbiddenSet, meal_plan::value_objects::Preferences};

/// JSON shape the provider must answer with.
const RESPONSE_CONTRACT: &str = r#"Respond with a single JSON object and nothing else (no prose, no Markdown fences) using exactly this structure:
{
  "mealPlan": [
    {
      "day": "Day 1",
      "meals": {
        "breakfast": { "name": "string", "description": "short description", "calories": 350 },
        "lunch": { "name": "string", "description": "short description", "calories": 500 },
        "dinner": { "name": "string", "description": "short description", "calories": 600 },
        "snacks": { "name": "string", "description": "short description", "calories": 150 }
      }
    }
  ],
  "groceryList": [
    { "item": "ingredient name", "quantity": "e.g. 1 lb, 2 heads, 500ml", "category": "e.g. Produce, Dairy, Meat, Pantry, Spices" }
  ]
}
"#;

const INSTRUCTIONS: &str = r#"Rules:
1. "mealPlan" holds exactly one entry per requested day, labelled "Day 1", "Day 2", and so on.
2. Each day only contains the meal keys listed under "Meals to plan"; omit every other key.
3. "groceryList" is consolidated: every ingredient appears once with the total quantity for the whole plan.
4. Use practical shopping quantities such as "1 bunch cilantro" or "200g tofu".
5. "calories" is an approximate per-serving figure and may be omitted.
6. "category" is optional but should use common grocery store sections.
7. Keep meals varied and descriptions short and appealing.
8. Output the raw JSON object only.
"#;

/// Build the generation prompt for a set of preferences.
///
/// When `forbidden` is non-empty the prompt carries an explicit list of
/// ingredients the provider must leave out of every meal and grocery item.
pub fn build_prompt(preferences: &Preferences, forbidden: &ForbiddenSet) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are an expert meal planner and nutritionist. Create a personalised meal plan \
         and a consolidated grocery list for the preferences below.\n\n",
    );
    prompt.push_str(RESPONSE_CONTRACT);

    prompt.push_str("\nUser preferences:\n");
    let _ = writeln!(
        prompt,
        "- Dietary restrictions: {}",
        non_blank(&preferences.dietary_restrictions).unwrap_or("None")
    );
    let _ = writeln!(
        prompt,
        "- Preferred cuisines: {}",
        non_blank(&preferences.preferred_cuisines).unwrap_or("Any")
    );
    let _ = writeln!(prompt, "- Number of days: {}", preferences.number_of_days);

    let slots: Vec<&str> = preferences
        .meals
        .slots()
        .iter()
        .map(|slot| slot.label())
        .collect();
    let _ = writeln!(
        prompt,
        "- Meals to plan: {}",
        if slots.is_empty() {
            "None specified".to_string()
        } else {
            slots.join(", ")
        }
    );

    if let Some(target) = preferences.calorie_target {
        let _ = writeln!(
            prompt,
            "- Daily calorie target: about {target} calories, spread sensibly across the meals"
        );
    }
    if let Some(notes) = preferences.other_requests.as_deref().and_then(non_blank) {
        let _ = writeln!(prompt, "- Other requests: {notes}");
    }

    if !forbidden.is_empty() {
        let tokens: Vec<&str> = forbidden.iter().map(String::as_str).collect();
        let _ = write!(
            prompt,
            "\nIMPORTANT: these dietary restrictions prohibit the following ingredients. \
             Do NOT use them, or name them, in any meal or grocery item:\n{}\n",
            tokens.join(", ")
        );
    }

    prompt.push('\n');
    prompt.push_str(INSTRUCTIONS);
    prompt.push_str("\nGenerate the plan now.\n");

    prompt
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
