//! Parse a DXF file and print a summary of the document graph.

use std::process::ExitCode;

use dxfgraph::{default_parser, EntityType};

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dxfinfo <file.dxf>");
        return ExitCode::FAILURE;
    };

    let mut parser = default_parser();
    let doc = match parser.parse_file(&path) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(version) = doc.header.version() {
        println!("version:   {version}");
    }
    if let Some(code_page) = doc.header.code_page() {
        println!("code page: {code_page}");
    }
    println!("layers:    {}", doc.layers.len());
    println!("blocks:    {}", doc.blocks.len());
    println!("entities:  {}", doc.entity_count());

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entity in doc.entities() {
        let name = entity.entity_type();
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    for (name, count) in counts {
        println!("  {count:6}  {name}");
    }

    let splines = doc
        .entities()
        .iter()
        .filter(|e| matches!(e, EntityType::Spline(_)))
        .count();
    if splines > 0 {
        println!("splines convertible to polylines: {splines}");
    }

    if !doc.notifications.is_empty() {
        println!("notifications:");
        for notification in &doc.notifications {
            println!("  {notification}");
        }
    }

    ExitCode::SUCCESS
}
