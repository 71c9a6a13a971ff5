use crate::error::DbError;
use crate::parser::command::{ColumnDef, Command, TableConstraintDef};
use crate::storage::table::strip_apostrophes;
use crate::types::datatype::parse_datatype;

/// Recognizes one command. A trailing semicolon is accepted anywhere.
pub fn parse(input: &str) -> Result<Command, DbError> {
    let input = input.trim();
    let input = input.strip_suffix(';').unwrap_or(input).trim_end();
    if input.is_empty() {
        return Err(DbError::Parse("empty command".to_string()));
    }

    if let Some(rest) = strip_keywords(input, &["create", "table"]) {
        parse_create(rest)
    } else if let Some(rest) = strip_keywords(input, &["drop", "table"]) {
        Ok(Command::DropTable {
            table: single_word(rest, "DROP TABLE <table>;")?,
        })
    } else if let Some(rest) = strip_keywords(input, &["drop", "column"]) {
        parse_drop_column(rest)
    } else if let Some(rest) = strip_keywords(input, &["flush"]) {
        let (path, key) = two_words(rest, "FLUSH <filename> <key>;")?;
        Ok(Command::Flush { path, key })
    } else if let Some(rest) = strip_keywords(input, &["load"]) {
        let (path, key) = two_words(rest, "LOAD <filename> <key>;")?;
        Ok(Command::Load { path, key })
    } else if let Some(rest) = strip_keywords(input, &["insert", "into"]) {
        parse_insert(rest)
    } else if let Some(rest) = strip_keywords(input, &["select"]) {
        parse_select(rest)
    } else if let Some(rest) = strip_keywords(input, &["update"]) {
        parse_update(rest)
    } else if let Some(rest) = strip_keywords(input, &["delete", "from"]) {
        parse_delete(rest)
    } else {
        let first = input.split_whitespace().next().unwrap_or(input);
        Err(DbError::Parse(format!("unsupported command '{first}'")))
    }
}

/// Body after `CREATE TABLE`: `<table> (<defs>)` where each def is a
/// column (`name TYPE [NOT NULL]`), `PRIMARY KEY (..)`, `UNIQUE (..)` or
/// `FOREIGN KEY (..) REFERENCES <table> (..)`.
fn parse_create(rest: &str) -> Result<Command, DbError> {
    const USAGE: &str =
        "CREATE TABLE <table> (<col> <type> [NOT NULL], ..., PRIMARY KEY (<cols>), UNIQUE (<cols>));";

    let open = rest
        .find('(')
        .ok_or_else(|| DbError::Parse(format!("invalid CREATE TABLE syntax. Usage: {USAGE}")))?;
    let close = rest
        .rfind(')')
        .filter(|&c| c > open)
        .ok_or_else(|| DbError::Parse(format!("invalid CREATE TABLE syntax. Usage: {USAGE}")))?;

    let table = single_word(&rest[..open], USAGE)?;
    let body = &rest[open + 1..close];

    let mut columns = Vec::new();
    let mut constraints = Vec::new();
    for def in split_top_level(body) {
        let def = def.trim();
        if def.is_empty() {
            continue;
        }
        if let Some(after) = strip_keywords(def, &["primary", "key"]) {
            constraints.push(TableConstraintDef::PrimaryKey(paren_list(after)?));
        } else if let Some(after) = strip_keywords(def, &["unique"]) {
            constraints.push(TableConstraintDef::Unique(paren_list(after)?));
        } else if let Some(after) = strip_keywords(def, &["foreign", "key"]) {
            constraints.push(parse_foreign_key(after)?);
        } else {
            columns.push(parse_column_def(def)?);
        }
    }

    Ok(Command::CreateTable {
        table,
        columns,
        constraints,
    })
}

fn parse_column_def(def: &str) -> Result<ColumnDef, DbError> {
    let tokens: Vec<&str> = def.split_whitespace().collect();
    let not_null = match tokens.as_slice() {
        [_, _] => false,
        [_, _, a, b] if a.eq_ignore_ascii_case("not") && b.eq_ignore_ascii_case("null") => true,
        _ => {
            return Err(DbError::Parse(format!(
                "invalid column definition '{def}'. Expected: <name> <INTEGER|FLOAT|STRING> [NOT NULL]"
            )));
        }
    };
    Ok(ColumnDef {
        name: tokens[0].to_string(),
        dtype: parse_datatype(tokens[1])?,
        not_null,
    })
}

/// `(<cols>) REFERENCES <table> (<refcols>)`
fn parse_foreign_key(after: &str) -> Result<TableConstraintDef, DbError> {
    const USAGE: &str = "FOREIGN KEY (<cols>) REFERENCES <table> (<refcols>)";
    let bad = || DbError::Parse(format!("invalid FOREIGN KEY definition. Usage: {USAGE}"));

    let open = after.find('(').ok_or_else(bad)?;
    let close = after[open..].find(')').ok_or_else(bad)? + open;
    let columns = comma_list(&after[open + 1..close]);

    let rest = strip_keywords(&after[close + 1..], &["references"]).ok_or_else(bad)?;
    let open = rest.find('(').ok_or_else(bad)?;
    let ref_table = rest[..open].trim();
    if ref_table.is_empty() || ref_table.contains(char::is_whitespace) {
        return Err(bad());
    }
    let close = rest[open..].find(')').ok_or_else(bad)? + open;
    let ref_columns = comma_list(&rest[open + 1..close]);

    Ok(TableConstraintDef::ForeignKey {
        columns,
        ref_table: ref_table.to_string(),
        ref_columns,
    })
}

/// `<table> (<cols>) VALUES (<vals>)`. Values keep their quotes; the
/// catalog unwraps them on insert.
fn parse_insert(rest: &str) -> Result<Command, DbError> {
    const USAGE: &str = "INSERT INTO <table> (col1, col2, ...) VALUES (val1, val2, ...);";
    let bad = || DbError::Parse(format!("invalid INSERT syntax. Usage: {USAGE}"));

    let open = rest.find('(').ok_or_else(bad)?;
    let table = single_word(&rest[..open], USAGE)?;
    let close = rest[open..].find(')').ok_or_else(bad)? + open;
    let columns = comma_list(&rest[open + 1..close]);

    let after = strip_keywords(&rest[close + 1..], &["values"]).ok_or_else(bad)?;
    let open = after.find('(').ok_or_else(bad)?;
    let close = after.rfind(')').filter(|&c| c > open).ok_or_else(bad)?;
    let values = comma_list(&after[open + 1..close]);

    Ok(Command::Insert {
        table,
        columns,
        values,
    })
}

/// `<cols> FROM <table> [WHERE <condition>]`
fn parse_select(rest: &str) -> Result<Command, DbError> {
    const USAGE: &str = "SELECT <col1, col2, ...> FROM <table> [WHERE <condition>];";

    let (cols_str, after) = split_on_keyword(rest, "from")
        .ok_or_else(|| DbError::Parse(format!("invalid SELECT syntax. Usage: {USAGE}")))?;

    let columns = if cols_str.trim() == "*" {
        vec!["*".to_string()]
    } else {
        comma_list(cols_str)
    };

    let (table, condition) = match split_on_keyword(after, "where") {
        Some((table, cond)) => (table, cond.trim().to_string()),
        None => (after, String::new()),
    };

    Ok(Command::Select {
        table: single_word(table, USAGE)?,
        columns,
        condition,
    })
}

/// `<table> SET <col> = <val>, ... WHERE <condition>`. Assignment values
/// are unquoted here; the condition is passed through untouched.
fn parse_update(rest: &str) -> Result<Command, DbError> {
    const USAGE: &str = "UPDATE <table> SET <col1> = <val1>, ... WHERE <condition>;";
    let bad = || DbError::Parse(format!("invalid UPDATE syntax. Usage: {USAGE}"));

    let (table, after_set) = split_on_keyword(rest, "set").ok_or_else(bad)?;
    let (set_clause, condition) = split_on_keyword(after_set, "where").ok_or_else(bad)?;

    let mut assignments = Vec::new();
    for part in set_clause.split(',') {
        // Parts without an '=' are silently dropped.
        if let Some((col, val)) = part.split_once('=') {
            assignments.push((
                col.trim().to_string(),
                strip_apostrophes(val.trim()).to_string(),
            ));
        }
    }

    Ok(Command::Update {
        table: single_word(table, USAGE)?,
        assignments,
        condition: condition.trim().to_string(),
    })
}

/// `<table> WHERE <condition>`
fn parse_delete(rest: &str) -> Result<Command, DbError> {
    const USAGE: &str = "DELETE FROM <table> WHERE <condition>;";

    let (table, condition) = split_on_keyword(rest, "where")
        .ok_or_else(|| DbError::Parse(format!("invalid DELETE syntax. Usage: {USAGE}")))?;

    Ok(Command::Delete {
        table: single_word(table, USAGE)?,
        condition: condition.trim().to_string(),
    })
}

fn parse_drop_column(rest: &str) -> Result<Command, DbError> {
    let (table, column) = two_words(rest, "DROP COLUMN <table> <column>;")?;
    Ok(Command::DropColumn { table, column })
}

/// Consumes the given keywords (ASCII case-insensitive, whitespace
/// separated) from the start of `s`, returning the remainder.
fn strip_keywords<'a>(s: &'a str, words: &[&str]) -> Option<&'a str> {
    let mut rest = s.trim_start();
    for word in words {
        // get() rejects indices that fall inside a multi-byte character,
        // so non-ASCII input falls through to a parse error.
        let head = rest.get(..word.len())?;
        if !head.eq_ignore_ascii_case(word) {
            return None;
        }
        let after = &rest[word.len()..];
        if !after.is_empty() && !after.starts_with(|c: char| c.is_whitespace() || c == '(') {
            return None;
        }
        rest = after.trim_start();
    }
    Some(rest)
}

/// Finds the first standalone occurrence of `keyword` (ASCII
/// case-insensitive, whitespace on both sides) and splits around it.
fn split_on_keyword<'a>(s: &'a str, keyword: &str) -> Option<(&'a str, &'a str)> {
    let bytes = s.as_bytes();
    let kw = keyword.as_bytes();
    if bytes.len() < kw.len() {
        return None;
    }
    for i in 0..=bytes.len() - kw.len() {
        if !bytes[i..i + kw.len()].eq_ignore_ascii_case(kw) {
            continue;
        }
        let j = i + kw.len();
        let before_ok = i == 0 || bytes[i - 1].is_ascii_whitespace();
        let after_ok = j == bytes.len() || bytes[j].is_ascii_whitespace();
        if before_ok && after_ok {
            return Some((&s[..i], &s[j..]));
        }
    }
    None
}

/// Splits on commas outside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// `(a, b, c)` -> trimmed names.
fn paren_list(s: &str) -> Result<Vec<String>, DbError> {
    let s = s.trim();
    let body = s
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| {
            DbError::Parse(format!("expected a parenthesized column list, got '{s}'"))
        })?;
    Ok(comma_list(body))
}

fn comma_list(s: &str) -> Vec<String> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }
    s.split(',').map(|t| t.trim().to_string()).collect()
}

fn single_word(s: &str, usage: &str) -> Result<String, DbError> {
    let s = s.trim();
    if s.is_empty() || s.contains(char::is_whitespace) {
        return Err(DbError::Parse(format!("expected a name. Usage: {usage}")));
    }
    Ok(s.to_string())
}

fn two_words(s: &str, usage: &str) -> Result<(String, String), DbError> {
    let mut it = s.split_whitespace();
    match (it.next(), it.next(), it.next()) {
        (Some(a), Some(b), None) => Ok((a.to_string(), b.to_string())),
        _ => Err(DbError::Parse(format!("expected two arguments. Usage: {usage}"))),
    }
}
