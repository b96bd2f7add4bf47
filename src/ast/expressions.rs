/// Integer Node
/// Every integer literal in the tree, wherever it appears. Literals have no
/// size limit, so the value is kept as its decimal digits without leading
/// zeros (`007` is stored as `7`, `000` as `0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerNode {
    pub value: String,
}

impl IntegerNode {
    /// Returns `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        let value = if trimmed.is_empty() { "0" } else { trimmed };

        Some(IntegerNode { value: String::from(value) })
    }
}

/// Var Ref
/// A reference to a name. Names are not resolved against the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    pub name: String,
}

/// Call Node
/// `name(arguments...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    pub name: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Integer(IntegerNode),
    VarRef(VarRef),
    Call(CallNode),
}

impl Expr {
    pub fn integer(value: u64) -> Self {
        Expr::Integer(IntegerNode { value: value.to_string() })
    }

    pub fn var_ref(name: impl Into<String>) -> Self {
        Expr::VarRef(VarRef { name: name.into() })
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Expr::Call(CallNode {
            name: name.into(),
            arguments,
        })
    }
}
