use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use veil_db_core::parser::parser::parse;
use veil_db_core::Database;

const HELP: &[(&str, &str, &str)] = &[
    (
        "create table",
        "CREATE TABLE <table> (<col> <type> [NOT NULL], ..., PRIMARY KEY (<cols>), UNIQUE (<cols>));",
        "CREATE TABLE users (id INTEGER NOT NULL, name STRING, age INTEGER, PRIMARY KEY (id), UNIQUE (name));",
    ),
    ("drop table", "DROP TABLE <table>;", "DROP TABLE users;"),
    (
        "drop column",
        "DROP COLUMN <table> <column>;",
        "DROP COLUMN users age;",
    ),
    (
        "insert",
        "INSERT INTO <table> (col1, col2, ...) VALUES (val1, val2, ...);",
        "INSERT INTO users (id, name, age) VALUES ('1', 'Alice', '30');",
    ),
    (
        "select",
        "SELECT <col1, col2, ...> FROM <table> [WHERE <condition>];",
        "SELECT * FROM users WHERE id = 1;",
    ),
    (
        "update",
        "UPDATE <table> SET <col1> = <val1>, ... WHERE <condition>;",
        "UPDATE users SET name = 'Alicia', age = '31' WHERE id = 1;",
    ),
    (
        "delete",
        "DELETE FROM <table> WHERE <condition>;",
        "DELETE FROM users WHERE id = 1;",
    ),
    (
        "flush",
        "FLUSH <filename> <key>;",
        "FLUSH database.db mysecretkey;",
    ),
    (
        "load",
        "LOAD <filename> <key>;",
        "LOAD database.db mysecretkey;",
    ),
];

fn print_help(topic: &str) {
    let topic = topic.trim().to_lowercase();
    if topic.is_empty() {
        println!("Available commands and their usage:");
        for (name, usage, example) in HELP {
            println!("Command: {name}");
            println!("  Usage: {usage}");
            println!("  Example: {example}");
            println!();
        }
        println!("  parse <cmd>   -> show parsed Command (debug)");
        println!("  exit|quit     -> quit");
        return;
    }
    match HELP.iter().find(|(name, _, _)| *name == topic) {
        Some((name, usage, example)) => {
            println!("Help for command '{name}':");
            println!("  Usage: {usage}");
            println!("  Example: {example}");
        }
        None => eprintln!("No help available for command: {topic}"),
    }
}

/// Matches `help` as a whole word (any case), returning the topic that
/// follows it. Inputs like `helpful` are left for the parser.
fn help_topic(input: &str) -> Option<&str> {
    let mut parts = input.splitn(2, char::is_whitespace);
    let head = parts.next()?;
    if !head.eq_ignore_ascii_case("help") {
        return None;
    }
    Some(parts.next().unwrap_or(""))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut db = Database::new();

    println!("veil_db_cli (type 'help' or 'exit')");

    loop {
        print!("db> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                eprintln!("Failed to read input");
                continue;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(topic) = help_topic(input) {
            print_help(topic);
            continue;
        }

        // ---- PARSE DEBUG MODE ----
        if let Some(rest) = input.strip_prefix("parse ") {
            match parse(rest) {
                Ok(cmd) => println!("Parsed as: {cmd:?}"),
                Err(e) => eprintln!("Parse error: {e}"),
            }
            continue;
        }

        // ---- NORMAL EXECUTION MODE ----
        match db.execute(input) {
            Ok(out) => println!("{out}"),
            Err(err) => eprintln!("{err}"),
        }
    }

    println!("Exiting.");
}
