//! Token codes and tokens produced by the tokenizer.
//!
//! Token codes double as node types in the syntax tree and as terminal
//! symbols of the grammar tables, so they live in one integer space:
//!
//! - `0` is end-of-input;
//! - codes below 128 are single-byte operators and punctuation, using the
//!   byte value itself;
//! - keywords, multi-byte operators, literal classes and the synthetic node
//!   types start at [`TokenKind::FIRST_KEYWORD`] (57346) in grammar order.

use std::fmt;

use serde::{Serialize, Serializer};

use super::Span;

/// Integer code identifying a lexical class or a node type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKind(pub i32);

impl TokenKind {
    pub const EOF: Self = Self(0);

    pub const SELECT: Self = Self(57346);
    pub const INSERT: Self = Self(57347);
    pub const UPDATE: Self = Self(57348);
    pub const DELETE: Self = Self(57349);
    pub const FROM: Self = Self(57350);
    pub const WHERE: Self = Self(57351);
    pub const GROUP: Self = Self(57352);
    pub const HAVING: Self = Self(57353);
    pub const ORDER: Self = Self(57354);
    pub const BY: Self = Self(57355);
    pub const LIMIT: Self = Self(57356);
    pub const COMMENT: Self = Self(57357);
    pub const FOR: Self = Self(57358);
    pub const ALL: Self = Self(57359);
    pub const DISTINCT: Self = Self(57360);
    pub const AS: Self = Self(57361);
    pub const EXISTS: Self = Self(57362);
    pub const IN: Self = Self(57363);
    pub const IS: Self = Self(57364);
    pub const LIKE: Self = Self(57365);
    pub const BETWEEN: Self = Self(57366);
    pub const NULL: Self = Self(57367);
    pub const ASC: Self = Self(57368);
    pub const DESC: Self = Self(57369);
    pub const VALUES: Self = Self(57370);
    pub const INTO: Self = Self(57371);
    pub const DUPLICATE: Self = Self(57372);
    pub const KEY: Self = Self(57373);
    pub const DEFAULT: Self = Self(57374);
    pub const SET: Self = Self(57375);
    pub const LOCK: Self = Self(57376);
    pub const ID: Self = Self(57377);
    pub const STRING: Self = Self(57378);
    pub const NUMBER: Self = Self(57379);
    pub const VALUE_ARG: Self = Self(57380);
    pub const LE: Self = Self(57381);
    pub const GE: Self = Self(57382);
    pub const NE: Self = Self(57383);
    pub const NULL_SAFE_EQUAL: Self = Self(57384);
    pub const LEX_ERROR: Self = Self(57385);
    pub const UNION: Self = Self(57386);
    pub const MINUS: Self = Self(57387);
    pub const EXCEPT: Self = Self(57388);
    pub const INTERSECT: Self = Self(57389);
    pub const JOIN: Self = Self(57390);
    pub const STRAIGHT_JOIN: Self = Self(57391);
    pub const LEFT: Self = Self(57392);
    pub const RIGHT: Self = Self(57393);
    pub const INNER: Self = Self(57394);
    pub const OUTER: Self = Self(57395);
    pub const CROSS: Self = Self(57396);
    pub const NATURAL: Self = Self(57397);
    pub const USE: Self = Self(57398);
    pub const FORCE: Self = Self(57399);
    pub const ON: Self = Self(57400);
    pub const AND: Self = Self(57401);
    pub const OR: Self = Self(57402);
    pub const NOT: Self = Self(57403);
    pub const UNARY: Self = Self(57404);
    pub const CASE: Self = Self(57405);
    pub const WHEN: Self = Self(57406);
    pub const THEN: Self = Self(57407);
    pub const ELSE: Self = Self(57408);
    pub const END: Self = Self(57409);
    pub const CREATE: Self = Self(57410);
    pub const ALTER: Self = Self(57411);
    pub const DROP: Self = Self(57412);
    pub const RENAME: Self = Self(57413);
    pub const TABLE: Self = Self(57414);
    pub const INDEX: Self = Self(57415);
    pub const VIEW: Self = Self(57416);
    pub const TO: Self = Self(57417);
    pub const IGNORE: Self = Self(57418);
    pub const IF: Self = Self(57419);
    pub const UNIQUE: Self = Self(57420);
    pub const USING: Self = Self(57421);
    pub const NODE_LIST: Self = Self(57422);
    pub const UPLUS: Self = Self(57423);
    pub const UMINUS: Self = Self(57424);
    pub const CASE_WHEN: Self = Self(57425);
    pub const WHEN_LIST: Self = Self(57426);
    pub const FUNCTION: Self = Self(57427);
    pub const NO_LOCK: Self = Self(57428);
    pub const FOR_UPDATE: Self = Self(57429);
    pub const LOCK_IN_SHARE_MODE: Self = Self(57430);
    pub const NOT_IN: Self = Self(57431);
    pub const NOT_LIKE: Self = Self(57432);
    pub const NOT_BETWEEN: Self = Self(57433);
    pub const IS_NULL: Self = Self(57434);
    pub const IS_NOT_NULL: Self = Self(57435);
    pub const UNION_ALL: Self = Self(57436);
    pub const INDEX_LIST: Self = Self(57437);
    pub const TABLE_EXPR: Self = Self(57438);

    pub const LEFT_PAREN: Self = Self::char(b'(');
    pub const RIGHT_PAREN: Self = Self::char(b')');
    pub const COMMA: Self = Self::char(b',');
    pub const DOT: Self = Self::char(b'.');
    pub const STAR: Self = Self::char(b'*');
    pub const PLUS: Self = Self::char(b'+');
    pub const MINUS_SIGN: Self = Self::char(b'-');
    pub const SLASH: Self = Self::char(b'/');
    pub const PERCENT: Self = Self::char(b'%');
    pub const AMPERSAND: Self = Self::char(b'&');
    pub const PIPE: Self = Self::char(b'|');
    pub const CARET: Self = Self::char(b'^');
    pub const TILDE: Self = Self::char(b'~');
    pub const EQ: Self = Self::char(b'=');
    pub const LT: Self = Self::char(b'<');
    pub const GT: Self = Self::char(b'>');
}

/// Symbolic names of the codes starting at [`TokenKind::FIRST_KEYWORD`].
static NAMES: [&str; 93] = [
    "SELECT",
    "INSERT",
    "UPDATE",
    "DELETE",
    "FROM",
    "WHERE",
    "GROUP",
    "HAVING",
    "ORDER",
    "BY",
    "LIMIT",
    "COMMENT",
    "FOR",
    "ALL",
    "DISTINCT",
    "AS",
    "EXISTS",
    "IN",
    "IS",
    "LIKE",
    "BETWEEN",
    "NULL",
    "ASC",
    "DESC",
    "VALUES",
    "INTO",
    "DUPLICATE",
    "KEY",
    "DEFAULT",
    "SET",
    "LOCK",
    "ID",
    "STRING",
    "NUMBER",
    "VALUE_ARG",
    "LE",
    "GE",
    "NE",
    "NULL_SAFE_EQUAL",
    "LEX_ERROR",
    "UNION",
    "MINUS",
    "EXCEPT",
    "INTERSECT",
    "JOIN",
    "STRAIGHT_JOIN",
    "LEFT",
    "RIGHT",
    "INNER",
    "OUTER",
    "CROSS",
    "NATURAL",
    "USE",
    "FORCE",
    "ON",
    "AND",
    "OR",
    "NOT",
    "UNARY",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "CREATE",
    "ALTER",
    "DROP",
    "RENAME",
    "TABLE",
    "INDEX",
    "VIEW",
    "TO",
    "IGNORE",
    "IF",
    "UNIQUE",
    "USING",
    "NODE_LIST",
    "UPLUS",
    "UMINUS",
    "CASE_WHEN",
    "WHEN_LIST",
    "FUNCTION",
    "NO_LOCK",
    "FOR_UPDATE",
    "LOCK_IN_SHARE_MODE",
    "NOT_IN",
    "NOT_LIKE",
    "NOT_BETWEEN",
    "IS_NULL",
    "IS_NOT_NULL",
    "UNION_ALL",
    "INDEX_LIST",
    "TABLE_EXPR",
];

impl TokenKind {
    /// Code of the first keyword; lower codes are single bytes.
    pub const FIRST_KEYWORD: i32 = 57346;

    /// The code of a single-byte token.
    #[must_use]
    pub const fn char(byte: u8) -> Self {
        Self(byte as i32)
    }

    /// Looks up a keyword, ignoring ASCII case.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word.to_ascii_lowercase().as_str() {
            "all" => Self::ALL,
            "alter" => Self::ALTER,
            "and" => Self::AND,
            "as" => Self::AS,
            "asc" => Self::ASC,
            "between" => Self::BETWEEN,
            "by" => Self::BY,
            "case" => Self::CASE,
            "create" => Self::CREATE,
            "cross" => Self::CROSS,
            "default" => Self::DEFAULT,
            "delete" => Self::DELETE,
            "desc" => Self::DESC,
            "distinct" => Self::DISTINCT,
            "drop" => Self::DROP,
            "duplicate" => Self::DUPLICATE,
            "else" => Self::ELSE,
            "end" => Self::END,
            "except" => Self::EXCEPT,
            "exists" => Self::EXISTS,
            "for" => Self::FOR,
            "force" => Self::FORCE,
            "from" => Self::FROM,
            "group" => Self::GROUP,
            "having" => Self::HAVING,
            "if" => Self::IF,
            "ignore" => Self::IGNORE,
            "in" => Self::IN,
            "index" => Self::INDEX,
            "inner" => Self::INNER,
            "insert" => Self::INSERT,
            "intersect" => Self::INTERSECT,
            "into" => Self::INTO,
            "is" => Self::IS,
            "join" => Self::JOIN,
            "key" => Self::KEY,
            "left" => Self::LEFT,
            "like" => Self::LIKE,
            "limit" => Self::LIMIT,
            "lock" => Self::LOCK,
            "minus" => Self::MINUS,
            "natural" => Self::NATURAL,
            "not" => Self::NOT,
            "null" => Self::NULL,
            "on" => Self::ON,
            "or" => Self::OR,
            "order" => Self::ORDER,
            "outer" => Self::OUTER,
            "rename" => Self::RENAME,
            "right" => Self::RIGHT,
            "select" => Self::SELECT,
            "set" => Self::SET,
            "straight_join" => Self::STRAIGHT_JOIN,
            "table" => Self::TABLE,
            "then" => Self::THEN,
            "to" => Self::TO,
            "union" => Self::UNION,
            "unique" => Self::UNIQUE,
            "update" => Self::UPDATE,
            "use" => Self::USE,
            "using" => Self::USING,
            "values" => Self::VALUES,
            "view" => Self::VIEW,
            "when" => Self::WHEN,
            "where" => Self::WHERE,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for the end-of-input code.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        self.0 == 0
    }

    /// Returns the symbolic name: the keyword or node type name, or the
    /// character itself for single-byte codes.
    #[must_use]
    pub fn name(self) -> String {
        if self.is_eof() {
            return "$end".to_string();
        }
        if let Some(name) = self
            .0
            .checked_sub(Self::FIRST_KEYWORD)
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| NAMES.get(i))
        {
            return (*name).to_string();
        }
        match u8::try_from(self.0) {
            Ok(byte) if byte.is_ascii_graphic() => char::from(byte).to_string(),
            _ => format!("#{}", self.0),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenKind({})", self.name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// A token: its code, its payload and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind: TokenKind,
    /// Identifier text, decoded string contents, raw number text, comment
    /// text, or the spelling of a keyword or operator.
    pub value: Vec<u8>,
    /// Location in the input.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<Vec<u8>>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// An end-of-input token at `offset`.
    #[must_use]
    pub const fn eof(offset: usize) -> Self {
        Self {
            kind: TokenKind::EOF,
            value: Vec::new(),
            span: Span::point(offset),
        }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// The payload as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}
