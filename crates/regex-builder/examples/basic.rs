//! Basic regex-builder usage example.
//!
//! Builds a few patterns fluently and runs them against a short text.
//! Set `RUST_LOG=regex_builder=trace` to watch fragments being rewritten and
//! patterns being compiled.
//!
//! Run with: `cargo run --example basic`

use regex_builder::prelude::*;
use tracing_subscriber::EnvFilter;

const TEXT: &str = "Ut enim ad minim veniam, quis nostrud ullamco laboris nisi ut aliquip \
    ex ea commodo consequat. Sunt in culpa qui officia deserunt mollit anim id est laborum \
    conseat. Call 555-1234 or 555-9876.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("regex-builder Basic Example");
    println!("===========================\n");

    // Example 1: Optional symbols
    println!("1. Making 'qu' optional in 'consequat'...");
    let mut builder = PatternBuilder::new();
    builder.word("consequat").optional_symbols("qu");
    println!("   Pattern: {}", builder.delimited());
    println!("   Matches: {:?}", builder.find_all(TEXT)?);

    // Example 2: Capture groups and replacement
    println!("\n2. Swapping the halves of phone numbers...");
    let builder = build(|p| {
        p.start_capture()
            .digit()
            .exactly(3)
            .end_capture()
            .symbols("-")
            .start_capture()
            .digit()
            .exactly(4)
            .end_capture();
    });
    println!("   Pattern: {builder}");
    for caps in builder.captures_all(TEXT)? {
        println!("   Groups:  {:?}", caps.to_strings());
    }
    println!("   Result:  {}", builder.replace("$2-$1", TEXT)?);

    // Example 3: Lookaround
    println!("\n3. Words preceded by 'in '...");
    let mut builder = PatternBuilder::new();
    builder
        .begins_with(SubPattern::nested(|p| {
            p.symbols("in").space();
        }))
        .any_word();
    println!("   Pattern: {builder}");
    println!("   Matches: {:?}", builder.find_all(TEXT)?);

    // Example 4: Errors surface at match time
    println!("\n4. Forgetting end_capture()...");
    let mut builder = PatternBuilder::new();
    builder.start_capture().symbols("oops");
    match builder.find(TEXT) {
        Ok(found) => println!("   Unexpected match: {found:?}"),
        Err(e) => println!("   Error: {}", e.to_string().lines().next().unwrap_or_default()),
    }

    println!("\nDone.");
    Ok(())
}
