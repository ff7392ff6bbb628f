//! Both renderers must select the same rows as the in-memory evaluator.
//!
//! The rendered REST filter and SQL fragment are parsed back into a small
//! expression type and evaluated with standard `ILIKE` semantics over a fixed
//! dataset.

use super::{render_rest, render_sql, SqlFragment};
use crate::domain::search::compiler::{compile_fielded, compile_filter, compile_simple, AllowList};
use crate::domain::search::predicate::{Field, FieldValues, Predicate};
use crate::domain::search::registry::{EmptySelection, Universe};
use crate::domain::search::types::{FilterRequest, StoredArticle};

#[derive(Debug)]
enum Expr {
    Const(bool),
    Like(Field, String),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    fn eval(&self, row: &StoredArticle) -> bool {
        match self {
            Expr::Const(value) => *value,
            Expr::Like(field, pattern) => ilike(row.value(*field), pattern),
            Expr::Not(inner) => !inner.eval(row),
            Expr::And(parts) => parts.iter().all(|p| p.eval(row)),
            Expr::Or(parts) => parts.iter().any(|p| p.eval(row)),
        }
    }
}

enum LikeToken {
    Any,
    One,
    Lit(char),
}

/// `value ILIKE pattern` with `\` as the escape character.
fn ilike(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.to_lowercase().chars().collect();
    let mut tokens = Vec::new();
    let mut chars = pattern.to_lowercase().chars().collect::<Vec<_>>().into_iter();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::Any,
            '_' => LikeToken::One,
            '\\' => LikeToken::Lit(chars.next().expect("dangling escape")),
            other => LikeToken::Lit(other),
        });
    }

    fn matches(value: &[char], tokens: &[LikeToken]) -> bool {
        match tokens.split_first() {
            None => value.is_empty(),
            Some((LikeToken::Any, rest)) => (0..=value.len()).any(|i| matches(&value[i..], rest)),
            Some((LikeToken::One, rest)) => !value.is_empty() && matches(&value[1..], rest),
            Some((LikeToken::Lit(c), rest)) => {
                value.first() == Some(c) && matches(&value[1..], rest)
            }
        }
    }

    matches(&value, &tokens)
}

struct RestParser {
    chars: Vec<char>,
    pos: usize,
}

impl RestParser {
    fn parse(param: Option<(&str, &str)>) -> Expr {
        let Some((key, value)) = param else {
            return Expr::Const(true);
        };

        let mut parser = RestParser {
            chars: value.chars().collect(),
            pos: 0,
        };
        let list = parser.list();
        assert_eq!(parser.pos, parser.chars.len(), "trailing input in {}", value);

        match key {
            "and" => Expr::And(list),
            "or" => Expr::Or(list),
            other => panic!("unexpected top-level key {}", other),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn eat(&mut self, literal: &str) -> bool {
        let len = literal.chars().count();
        let matches = self.chars.len() >= self.pos + len
            && self.chars[self.pos..self.pos + len]
                .iter()
                .copied()
                .eq(literal.chars());
        if matches {
            self.pos += len;
        }
        matches
    }

    fn expect(&mut self, literal: &str) {
        assert!(self.eat(literal), "expected {} at {}", literal, self.pos);
    }

    fn list(&mut self) -> Vec<Expr> {
        self.expect("(");
        let mut nodes = vec![self.node()];
        while self.eat(",") {
            nodes.push(self.node());
        }
        self.expect(")");
        nodes
    }

    fn node(&mut self) -> Expr {
        if self.eat("not.and") {
            return Expr::Not(Box::new(Expr::And(self.list())));
        }
        if self.eat("not.or") {
            return Expr::Not(Box::new(Expr::Or(self.list())));
        }
        if self.eat("and") {
            return Expr::And(self.list());
        }
        if self.eat("or") {
            return Expr::Or(self.list());
        }

        let mut column = String::new();
        while let Some(c) = self.peek().filter(|c| *c != '.') {
            column.push(c);
            self.pos += 1;
        }
        self.expect(".");
        let field: Field = column.parse().expect("unknown column");

        let negated = self.eat("not.");
        self.expect("ilike.");
        // PostgREST turns `*` into `%` before handing the pattern to ILIKE
        let like = Expr::Like(field, self.value().replace('*', "%"));

        if negated {
            Expr::Not(Box::new(like))
        } else {
            like
        }
    }

    fn value(&mut self) -> String {
        let mut value = String::new();
        if self.eat("\"") {
            loop {
                let c = self.peek().expect("unterminated quote");
                self.pos += 1;
                match c {
                    '\\' => {
                        value.push(self.peek().expect("dangling escape"));
                        self.pos += 1;
                    }
                    '"' => break,
                    other => value.push(other),
                }
            }
        } else {
            while let Some(c) = self.peek().filter(|c| *c != ',' && *c != ')') {
                value.push(c);
                self.pos += 1;
            }
        }
        value
    }
}

struct SqlParser<'a> {
    tokens: Vec<String>,
    pos: usize,
    params: &'a [String],
}

impl<'a> SqlParser<'a> {
    fn parse(fragment: &'a SqlFragment) -> Expr {
        let mut tokens = Vec::new();
        let mut word = String::new();
        for c in fragment.sql.chars() {
            if c == '(' || c == ')' || c.is_whitespace() {
                if !word.is_empty() {
                    tokens.push(std::mem::take(&mut word));
                }
                if !c.is_whitespace() {
                    tokens.push(c.to_string());
                }
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            tokens.push(word);
        }

        let mut parser = SqlParser {
            tokens,
            pos: 0,
            params: &fragment.params,
        };
        let expr = parser.expr();
        assert_eq!(parser.pos, parser.tokens.len(), "trailing tokens");
        expr
    }

    fn next(&mut self) -> String {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn expr(&mut self) -> Expr {
        let mut parts = vec![self.primary()];
        let mut op: Option<String> = None;

        while let Some(token) = self.tokens.get(self.pos).cloned() {
            if token != "AND" && token != "OR" {
                break;
            }
            if let Some(previous) = &op {
                assert_eq!(previous, &token, "mixed operators without parentheses");
            }
            self.pos += 1;
            parts.push(self.primary());
            op = Some(token);
        }

        match op.as_deref() {
            None => parts.remove(0),
            Some("AND") => Expr::And(parts),
            Some(_) => Expr::Or(parts),
        }
    }

    fn primary(&mut self) -> Expr {
        let token = self.next();
        match token.as_str() {
            "(" => {
                let expr = self.expr();
                assert_eq!(self.next(), ")");
                expr
            }
            "NOT" => {
                assert_eq!(self.next(), "(");
                let expr = self.expr();
                assert_eq!(self.next(), ")");
                Expr::Not(Box::new(expr))
            }
            "TRUE" => Expr::Const(true),
            "FALSE" => Expr::Const(false),
            column => {
                let field: Field = column.parse().expect("unknown column");
                assert_eq!(self.next(), "ILIKE");
                let placeholder = self.next();
                let index: usize = placeholder
                    .strip_prefix('$')
                    .and_then(|n| n.parse().ok())
                    .expect("expected a placeholder");
                Expr::Like(field, self.params[index - 1].clone())
            }
        }
    }
}

fn dataset() -> Vec<StoredArticle> {
    vec![
        StoredArticle::new("Scaling Kafka", "a", "... kafka latency tuning ..."),
        StoredArticle::new("gRPC scale", "b", "grpc internals, deprecated API"),
        StoredArticle::new("Unrelated", "c", "nothing relevant"),
        StoredArticle::new("Ep 1", "https://changelog.com/podcast/1", "Rust async, a,b test"),
        StoredArticle::new("Ep 2", "https://se-radio.net/ep", "50% off x_y sale"),
        StoredArticle::new("Quotes", "https://blog.cloudflare.com/q", "say \"hi\" to f(x)"),
        StoredArticle::new("Paths", "https://aws.amazon.com/p", "C:\\temp\\dir and 50 percent"),
        StoredArticle::new("", "", ""),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn requests() -> Vec<(FilterRequest, Option<AllowList>)> {
    let podcasts = Some(AllowList {
        universe: Universe::Podcasts,
        empty_selection: EmptySelection::All,
    });
    let companies = Some(AllowList {
        universe: Universe::Companies,
        empty_selection: EmptySelection::Unfiltered,
    });

    vec![
        (
            FilterRequest {
                or_groups: strings(&["kafka|latency", "grpc"]),
                excludes: strings(&["deprecated"]),
                title: Some("scal".into()),
                ..Default::default()
            },
            companies,
        ),
        (
            FilterRequest {
                podcasts: strings(&["changelog"]),
                ..Default::default()
            },
            podcasts,
        ),
        (
            FilterRequest {
                or_groups: strings(&["rust"]),
                ..Default::default()
            },
            podcasts,
        ),
        (
            FilterRequest {
                or_groups: strings(&["a,b", "50%", "x_y"]),
                ..Default::default()
            },
            None,
        ),
        (
            FilterRequest {
                or_groups: strings(&["say \"hi\"|f(x)"]),
                ..Default::default()
            },
            None,
        ),
        (
            FilterRequest {
                excludes: strings(&["\\temp", "tuning", "50_"]),
                ..Default::default()
            },
            None,
        ),
        (
            FilterRequest {
                or_groups: strings(&["kafka*tuning", "a||b"]),
                url: Some(".".into()),
                ..Default::default()
            },
            None,
        ),
        (
            FilterRequest {
                companies: strings(&["cloudflare", "amazon", "unknown"]),
                title: Some("S".into()),
                ..Default::default()
            },
            companies,
        ),
    ]
}

fn assert_equivalent(predicate: &Predicate) {
    let rows = dataset();
    let rest = RestParser::parse(render_rest(predicate).param());
    let fragment = render_sql(predicate);
    let sql = SqlParser::parse(&fragment);

    for row in &rows {
        let expected = predicate.matches(row);
        assert_eq!(rest.eval(row), expected, "rest: {:?} on {:?}", predicate, row);
        assert_eq!(sql.eval(row), expected, "sql: {:?} on {:?}", predicate, row);
    }
}

#[test]
fn ilike_semantics() {
    assert!(ilike("Hello World", "%world%"));
    assert!(ilike("50%", "50\\%"));
    assert!(!ilike("500", "50\\%"));
    assert!(ilike("x_y", "x\\_y"));
    assert!(!ilike("xzy", "x\\_y"));
    assert!(ilike("", "%%"));
}

#[test]
fn advanced_requests_select_identical_rows() {
    for (request, allow_list) in requests() {
        assert_equivalent(&compile_filter(&request, allow_list));
    }
}

#[test]
fn simple_and_fielded_select_identical_rows() {
    for query in ["database", "a,b", "50%", "f(x)", ""] {
        assert_equivalent(&compile_simple(query));
    }

    let fielded = FilterRequest {
        title: Some("ep".into()),
        url: Some("se-radio".into()),
        ..Default::default()
    };
    assert_equivalent(&compile_fielded(&fielded).unwrap());
}

#[test]
fn negated_compound_selects_identical_rows() {
    let p = !Predicate::any([
        Predicate::contains(Field::Text, "rust"),
        Predicate::contains(Field::Url, "amazon"),
    ]);
    assert_equivalent(&p);
}

#[test]
fn scenario_selects_row_a_on_every_backend() {
    let (request, allow_list) = requests().remove(0);
    let predicate = compile_filter(&request, allow_list);
    let rest = RestParser::parse(render_rest(&predicate).param());
    let fragment = render_sql(&predicate);
    let sql = SqlParser::parse(&fragment);

    for expr in [rest, sql] {
        let selected: Vec<_> = dataset()
            .into_iter()
            .filter(|row| expr.eval(row))
            .map(|row| row.url)
            .collect();
        assert_eq!(selected, vec!["a"]);
    }
}
