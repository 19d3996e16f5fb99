use ruletree::{Context, Engine, SequentialIds};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=ruletree=trace shows every visited node.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new().with_id_generator(SequentialIds::with_prefix("rule-"));

    // Parse two rules and join them
    let seniors = engine
        .parse("age > 30 AND department == Sales")
        .expect("failed to parse rule");
    let earners = engine
        .parse("salary > 50000 OR experience > 5")
        .expect("failed to parse rule");
    let rule = engine
        .combine(seniors, earners, "or")
        .expect("failed to combine rules");

    println!("{rule}");

    // The record form is what travels over the wire
    let record = engine.serialize(&rule);
    println!(
        "{}",
        serde_json::to_string_pretty(&record).expect("record is valid JSON")
    );

    let rule = engine.deserialize(&record).expect("failed to read record");

    let ctx = Context::new()
        .set("age", 28)
        .set("department", "Marketing")
        .set("salary", 62000)
        .set("experience", 3);

    match engine.evaluate(&rule, &ctx) {
        Ok(outcome) => println!("Result: {outcome}"),
        Err(e) => println!("Evaluation failed: {e}"),
    }
}
