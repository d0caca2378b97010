use std::fmt;

/// How operators of equal precedence group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The operator catalog: four binary operators and the unary signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    UnaryPlus,
    UnaryMinus,
}

impl Operator {
    /// The alphabet the generator assigns between consecutive numbers
    pub const BINARY: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Precedence rank, higher binds tighter. Opening parentheses sit at 0.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 2,
            Operator::Mul | Operator::Div => 4,
            Operator::UnaryPlus | Operator::UnaryMinus => 6,
        }
    }

    pub fn arity(self) -> usize {
        if self.is_unary() { 1 } else { 2 }
    }

    pub fn associativity(self) -> Associativity {
        if self.is_unary() {
            Associativity::Right
        } else {
            Associativity::Left
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::UnaryPlus | Operator::UnaryMinus)
    }

    /// Source symbol; unary signs share their binary counterpart's symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add | Operator::UnaryPlus => '+',
            Operator::Sub | Operator::UnaryMinus => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Map a source symbol to its operator, resolving `+`/`-` by position
    pub fn from_symbol(symbol: char, unary_position: bool) -> Option<Operator> {
        match (symbol, unary_position) {
            ('+', true) => Some(Operator::UnaryPlus),
            ('-', true) => Some(Operator::UnaryMinus),
            ('+', false) => Some(Operator::Add),
            ('-', false) => Some(Operator::Sub),
            ('*', _) => Some(Operator::Mul),
            ('/', _) => Some(Operator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
