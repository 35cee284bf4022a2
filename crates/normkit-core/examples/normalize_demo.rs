//! Normalization walkthrough
//!
//! Runs a request payload through the text and container helpers the way a
//! form handler would, then logs the result through the leveled logger.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use normkit_core::container::{except, is_empty, normalize_stacked, replace_key};
use normkit_core::logging_facility::{init, Profile};
use normkit_core::text::{self, limit, random_or_fallback, slug, snake, DEFAULT_END};
use normkit_core::{Logger, LoggerSettings, Mapping, TracingWriter};
use serde_json::{json, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    // Part 1: text
    let title = "Hello World! Dinner at 8";
    println!("slug:  {}", slug(title, text::DEFAULT_SLUG_SEPARATOR));
    println!(
        "snake: {}",
        snake("firstName", text::DEFAULT_SNAKE_DELIMITER)
    );
    println!("limit: {}", limit(title, 11, DEFAULT_END));
    println!("is:    {}", text::is("*.php", "myFile.php")?);

    let token = random_or_fallback(text::DEFAULT_RANDOM_LENGTH);
    println!(
        "token: {} chars from {} source",
        token.value().len(),
        token.source().as_str()
    );

    // Part 2: containers
    let payload: Mapping = serde_json::from_value(json!({
        "first-name": ["Ada", "Grace"],
        "last-name": ["Lovelace", "Hopper"],
        "_token": "abc",
    }))?;

    let fields = except(&payload, &["_token"]);
    let rows = normalize_stacked(&fields)?;
    for row in &rows {
        let row = replace_key(row, "-", "_");
        println!("row:   {}", Value::Object(row));
    }
    println!("empty: {}", is_empty(&fields));

    // Part 3: logging
    let options: Mapping = serde_json::from_value(json!({
        "log.level": "info",
        "log.name": "demo",
    }))?;
    let settings = LoggerSettings::from_options(&options)?;
    let writer = TracingWriter::from_settings(&settings);
    let logger = Logger::from_settings(&settings, writer);

    let mut context = Mapping::new();
    context.insert("rows".to_string(), json!(rows.len()));
    logger.info("payload normalized", &context);
    logger.debug("filtered out by the threshold", &context);

    Ok(())
}
