// Statement classification.

use sqldump_parser::Statement;

/// What the extractor does with a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Insert,
    /// Anything else, including empty statements.
    Other,
}

impl Command {
    /// Classify by the text of the first token, ignoring ASCII case.
    #[must_use]
    pub fn of(statement: &Statement) -> Self {
        match statement.command() {
            Some(command) if command.eq_ignore_ascii_case("CREATE") => Self::Create,
            Some(command) if command.eq_ignore_ascii_case("INSERT") => Self::Insert,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use sqldump_parser::parse_str;

    use super::*;

    fn classify(sql: &str) -> Vec<Command> {
        parse_str(sql).unwrap().iter().map(Command::of).collect()
    }

    #[test]
    fn classification() {
        assert_eq!(
            classify("create table t (a); INSERT INTO t VALUES (1); DROP TABLE t;;`insert` x;"),
            [
                Command::Create,
                Command::Insert,
                Command::Other,
                Command::Other,
                Command::Insert
            ]
        );
        assert_eq!(classify("LOCK TABLES `t` WRITE; 42;"), [Command::Other, Command::Other]);
    }
}
