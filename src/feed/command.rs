use thiserror::Error;

/// Errors raised while parsing a feed line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {got}")]
    WrongArity {
        line: usize,
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("line {line}: invalid score '{value}'")]
    InvalidScore { line: usize, value: String },

    #[error("line {line}: unterminated quote")]
    UnterminatedQuote { line: usize },
}

/// A single scoreboard instruction read from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home_team: String,
        away_team: String,
    },
    Update {
        home_team: String,
        away_team: String,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home_team: String,
        away_team: String,
    },
    Summary,
}

/// Parse one feed line. Returns `Ok(None)` for blank lines and `#` comments.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Command>, FeedError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed, line_no)?;
    let (name, args) = match tokens.split_first() {
        Some((name, args)) => (name.to_lowercase(), args),
        None => return Ok(None),
    };

    let arity = |expected: usize| -> Result<(), FeedError> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(FeedError::WrongArity {
                line: line_no,
                command: name.clone(),
                expected,
                got: args.len(),
            })
        }
    };

    let cmd = match name.as_str() {
        "start" => {
            arity(2)?;
            Command::Start {
                home_team: args[0].clone(),
                away_team: args[1].clone(),
            }
        }
        "update" => {
            arity(4)?;
            Command::Update {
                home_team: args[0].clone(),
                away_team: args[1].clone(),
                home_score: parse_score(&args[2], line_no)?,
                away_score: parse_score(&args[3], line_no)?,
            }
        }
        "finish" => {
            arity(2)?;
            Command::Finish {
                home_team: args[0].clone(),
                away_team: args[1].clone(),
            }
        }
        "summary" => {
            arity(0)?;
            Command::Summary
        }
        _ => {
            return Err(FeedError::UnknownCommand {
                line: line_no,
                command: name.clone(),
            })
        }
    };
    Ok(Some(cmd))
}

fn parse_score(value: &str, line_no: usize) -> Result<i32, FeedError> {
    value.parse().map_err(|_| FeedError::InvalidScore {
        line: line_no,
        value: value.to_string(),
    })
}

/// Split on whitespace; double quotes group a token and may produce an empty one.
fn tokenize(line: &str, line_no: usize) -> Result<Vec<String>, FeedError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(FeedError::UnterminatedQuote { line: line_no });
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_blank_and_comment() {
        assert_eq!(parse_line("", 1), Ok(None));
        assert_eq!(parse_line("   ", 1), Ok(None));
        assert_eq!(parse_line("# kickoff", 1), Ok(None));
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(
            parse_line("start Spain Portugal", 1),
            Ok(Some(Command::Start {
                home_team: "Spain".into(),
                away_team: "Portugal".into(),
            }))
        );
    }

    #[test]
    fn test_parse_quoted_names() {
        assert_eq!(
            parse_line(r#"START "Costa Rica"   "New Zealand""#, 1),
            Ok(Some(Command::Start {
                home_team: "Costa Rica".into(),
                away_team: "New Zealand".into(),
            }))
        );
    }

    #[test]
    fn test_parse_empty_quoted_name_reaches_registry() {
        assert_eq!(
            parse_line(r#"finish "" Portugal"#, 1),
            Ok(Some(Command::Finish {
                home_team: "".into(),
                away_team: "Portugal".into(),
            }))
        );
    }

    #[test]
    fn test_parse_update_with_negative_score() {
        assert_eq!(
            parse_line("update Spain Portugal -1 2", 1),
            Ok(Some(Command::Update {
                home_team: "Spain".into(),
                away_team: "Portugal".into(),
                home_score: -1,
                away_score: 2,
            }))
        );
    }

    #[test]
    fn test_parse_summary() {
        assert_eq!(parse_line("summary", 3), Ok(Some(Command::Summary)));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_line("update Spain Portugal 1", 7).unwrap_err();
        assert_eq!(
            err,
            FeedError::WrongArity {
                line: 7,
                command: "update".into(),
                expected: 4,
                got: 3,
            }
        );
    }

    #[test]
    fn test_invalid_score() {
        let err = parse_line("update Spain Portugal one 0", 2).unwrap_err();
        assert!(matches!(err, FeedError::InvalidScore { line: 2, .. }));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("pause Spain Portugal", 4).unwrap_err();
        assert!(matches!(err, FeedError::UnknownCommand { line: 4, .. }));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_line(r#"start "Costa Rica Panama"#, 5).unwrap_err();
        assert_eq!(err, FeedError::UnterminatedQuote { line: 5 });
    }
}
