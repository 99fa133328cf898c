use serde_json::{Value, json};

fn meal_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "calories": { "type": "number" }
        },
        "required": ["name", "description"]
    })
}

/// Returns the JSON schema for meal plan LLM responses
pub fn get_meal_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "mealPlan": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "string" },
                        "meals": {
                            "type": "object",
                            "properties": {
                                "breakfast": meal_schema(),
                                "lunch": meal_schema(),
                                "dinner": meal_schema(),
                                "snacks": meal_schema()
                            }
                        }
                    },
                    "required": ["day", "meals"]
                }
            },
            "groceryList": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "item": { "type": "string" },
                        "quantity": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["item", "quantity"]
                }
            }
        },
        "required": ["mealPlan", "groceryList"]
    })
}
