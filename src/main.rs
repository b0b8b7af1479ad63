use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;

use mapxml::{render_json_str, RenderOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("mapxml")
        .about("Render a JSON document as XML")
        .arg(
            Arg::new("input")
                .help("Input JSON file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Name of the root element (default: xml_body)"),
        )
        .arg(
            Arg::new("list-item")
                .long("list-item")
                .help("Element name for list entries without a key (default: list_item)"),
        )
        .arg(
            Arg::new("charset")
                .long("charset")
                .help("Declared document encoding (default: UTF-8)"),
        )
        .arg(
            Arg::new("xml-version")
                .long("xml-version")
                .help("Declared XML version (default: 1.0)"),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input").unwrap();

    let options = RenderOptions {
        version: matches.get_one::<String>("xml-version").cloned(),
        charset: matches.get_one::<String>("charset").cloned(),
        super_parent_name: matches.get_one::<String>("root").cloned(),
        default_list_item_name: matches.get_one::<String>("list-item").cloned(),
    };

    let json_content = fs::read_to_string(input_file)
        .with_context(|| format!("failed to read {}", input_file))?;
    let output = render_json_str(&json_content, options)?;

    // The serialized document already ends with a newline
    print!("{}", output);

    Ok(())
}
