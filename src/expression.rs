//! Structured `$filter` fragments.
//!
//! Builders assemble [`Expression`] trees; text only comes into existence when
//! a tree is displayed. All parenthesization rules live in the `Display` impl
//! below, which keeps them in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::operator::OperatorToken;

// ------------- Junction -------------
/// Logical operator joining the members of a group, or one group to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Junction {
    #[default]
    And,
    Or,
}

impl Junction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Junction::And => "and",
            Junction::Or => "or",
        }
    }
}
impl From<String> for Junction {
    // blank or unrecognized text falls back to "and"
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("or") {
            Junction::Or
        } else {
            Junction::And
        }
    }
}
impl From<Junction> for String {
    fn from(j: Junction) -> String {
        j.as_str().to_string()
    }
}
impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ------------- Expression -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `attr op literal`
    Compare {
        attribute: String,
        operator: OperatorToken,
        operand: String,
    },
    /// `attr eq null`
    NullCheck {
        attribute: String,
        operator: OperatorToken,
    },
    /// `contains(attr,'text')`, or the prefix form `not contains(attr,'text')`
    Function {
        attribute: String,
        operator: OperatorToken,
        operand: String,
    },
    /// A parenthesized and/or group, parenthesized even with a single member.
    Group {
        junction: Junction,
        members: Vec<Expression>,
    },
    /// A negated group. Members are and-ed together.
    Not(Vec<Expression>),
    /// Groups joined one after the other by their own inter-group operator.
    Chain {
        head: Box<Expression>,
        tail: Vec<(Junction, Expression)>,
    },
}

impl Expression {
    /// Chains `groups` in order; `None` when there is nothing to chain.
    pub fn chain<I>(groups: I) -> Option<Expression>
    where
        I: IntoIterator<Item = (Junction, Expression)>,
    {
        let mut groups = groups.into_iter();
        let (_, head) = groups.next()?;
        let tail: Vec<_> = groups.collect();
        if tail.is_empty() {
            Some(head)
        } else {
            Some(Expression::Chain { head: Box::new(head), tail })
        }
    }
}

fn write_joined(f: &mut fmt::Formatter, members: &[Expression], junction: Junction) -> fmt::Result {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", junction)?;
        }
        write!(f, "{}", member)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Compare { attribute, operator, operand } => {
                write!(f, "{} {} {}", attribute, operator, operand)
            }
            Expression::NullCheck { attribute, operator } => write!(f, "{} {}", attribute, operator),
            Expression::Function { attribute, operator, operand } => {
                write!(f, "{}({},{})", operator, attribute, operand)
            }
            Expression::Group { junction, members } => {
                write!(f, "(")?;
                write_joined(f, members, *junction)?;
                write!(f, ")")
            }
            Expression::Not(members) => {
                if let [single] = members.as_slice() {
                    write!(f, "not ({})", single)
                } else {
                    write!(f, "(not (")?;
                    write_joined(f, members, Junction::And)?;
                    write!(f, "))")
                }
            }
            Expression::Chain { head, tail } => {
                write!(f, "{}", head)?;
                for (junction, group) in tail {
                    write!(f, " {} {}", junction, group)?;
                }
                Ok(())
            }
        }
    }
}
