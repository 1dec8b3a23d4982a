// used to print out readable forms of an operator
use std::fmt;

/// How an operator is rendered, and which types it may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `attr op literal`, legal for every type
    Comparison,
    /// `op(attr,'text')`, legal for strings only
    StringFunction,
    /// `attr eq null`, the value is ignored
    NullCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorToken {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    EqNull,
    NeNull,
}

/// Every operator a filter condition may carry, with its wire token.
pub const FILTER_OPERATORS: &[(OperatorToken, &str, OperatorClass)] = &[
    (OperatorToken::Eq, "eq", OperatorClass::Comparison),
    (OperatorToken::Ne, "ne", OperatorClass::Comparison),
    (OperatorToken::Gt, "gt", OperatorClass::Comparison),
    (OperatorToken::Ge, "ge", OperatorClass::Comparison),
    (OperatorToken::Lt, "lt", OperatorClass::Comparison),
    (OperatorToken::Le, "le", OperatorClass::Comparison),
    (OperatorToken::Contains, "contains", OperatorClass::StringFunction),
    (OperatorToken::NotContains, "not contains", OperatorClass::StringFunction),
    (OperatorToken::StartsWith, "startswith", OperatorClass::StringFunction),
    (OperatorToken::EndsWith, "endswith", OperatorClass::StringFunction),
    (OperatorToken::EqNull, "eq null", OperatorClass::NullCheck),
    (OperatorToken::NeNull, "ne null", OperatorClass::NullCheck),
];

impl OperatorToken {
    /// Looks the token up in [`FILTER_OPERATORS`]. Tokens are matched exactly,
    /// apart from surrounding whitespace.
    pub fn parse(token: &str) -> Option<OperatorToken> {
        let token = token.trim();
        FILTER_OPERATORS
            .iter()
            .find(|(_, text, _)| *text == token)
            .map(|(op, _, _)| *op)
    }
    fn entry(&self) -> &'static (OperatorToken, &'static str, OperatorClass) {
        // the table lists every variant in declaration order
        &FILTER_OPERATORS[*self as usize]
    }
    pub fn token(&self) -> &'static str {
        self.entry().1
    }
    pub fn class(&self) -> OperatorClass {
        self.entry().2
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
