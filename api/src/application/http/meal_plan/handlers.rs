pub mod generate_plan;
