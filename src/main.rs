//! Demonstration driver: builds sample inputs, parses them with the library
//! and prints the results to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as ClapParser;
use jsonio::parse;
use tracing::*;

mod logging;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON file to parse and re-emit. Without it, the built-in
    /// demonstration scenarios run instead.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(input = ?cli.input);

    match cli.input {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read file `{}`", path.display()))?;
            let value = match parse(&text) {
                Ok(value) => value,
                Err(e) => {
                    error!(path = %path.display(), %e, "failed to parse input");
                    return Err(e).context("failed to parse input");
                }
            };
            println!("{value}");
            Ok(())
        }
        None => run_demos(),
    }
}

fn run_demos() -> anyhow::Result<()> {
    demo_number()?;
    demo_string()?;
    demo_array()?;
    demo_object()?;
    demo_empty_object()?;
    demo_big_json()?;
    Ok(())
}

fn demo_number() -> anyhow::Result<()> {
    println!("* Parse and output number");
    let value = parse("123")?;
    println!("Number = {}", value.as_number()?);
    Ok(())
}

fn demo_string() -> anyhow::Result<()> {
    println!("* Parse and output string");
    let value = parse(r#""4\t56""#)?;
    println!("String = {}", value.as_str()?);
    Ok(())
}

fn demo_array() -> anyhow::Result<()> {
    println!("* Parse and output array");
    let value = parse(r#"[456, 1, 5, "world"]"#)?;
    println!("Array[3] = {}", value.as_array()?[3]);
    Ok(())
}

fn demo_object() -> anyhow::Result<()> {
    println!("* Parse and output object");
    let value = parse(
        r#"{ "array1": [456, 1, 5, "wor\tld", [1,2,3], {"test":"ok", "test2": 1}], "num2": 67834, "str3": "hello world", "obj4": {}, "emptyarr": [{},{},[]] }"#,
    )?;

    let n456 = value.as_object()?["array1"].as_array()?[0].as_number()?;

    println!("Object[\"array1\"][0] = {n456}");
    println!("Object = {value}");
    Ok(())
}

fn demo_empty_object() -> anyhow::Result<()> {
    println!("* Parse and output empty object");
    let value = parse("{}")?;
    println!("Object = {value}");
    Ok(())
}

fn demo_big_json() -> anyhow::Result<()> {
    println!("* Parse and extract value from big json");

    let value = parse(
        r#"{
	"glossary": {
		"title": "example glossary",
		"GlossDiv": {
			"title": "S",
			"GlossList": {
				"GlossEntry": {
					"ID": "SGML-\"test\"",
					"SortAs": "SGML",
					"GlossTerm": "Standard Generalized Markup Language",
					"Acronym": "SGML",
					"Abbrev": "ISO 8879:1986",
					"GlossDef": {
						"para": "A meta-markup language, used to create markup languages such as DocBook.",
						"GlossSeeAlso": ["GML", "XML"]
					},
					"GlossSee": "markup"
				}
			}
		}
	}
	}"#,
    )?;

    let gloss_entry_id = value.as_object()?["glossary"].as_object()?["GlossDiv"].as_object()?
        ["GlossList"]
        .as_object()?["GlossEntry"]
        .as_object()?["ID"]
        .as_str()?;

    println!("GlossEntry.ID = {gloss_entry_id}");
    println!("Glossary JSON = {value}");
    Ok(())
}
