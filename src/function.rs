use crate::error::Error;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Scientific shortcut applied to the value of the whole buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine, in radians
    Sin,
    /// Cosine, in radians
    Cos,
    /// Tangent, in radians
    Tan,
    /// Base 10 logarithm
    Log,
    /// Square root
    Sqrt,
    /// Division by 100
    Percent,
}

lazy_static! {
    /// Labels accepted for each function, as found on the keypad and in
    /// typed input.
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::new();
        map.insert("sin", Function::Sin);
        map.insert("cos", Function::Cos);
        map.insert("tan", Function::Tan);
        map.insert("log", Function::Log);
        map.insert("√", Function::Sqrt);
        map.insert("sqrt", Function::Sqrt);
        map.insert("%", Function::Percent);
        map.shrink_to_fit();
        map
    };
}

impl Function {
    /// Apply the function to `x`
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => libm::sin(x),
            Self::Cos => libm::cos(x),
            Self::Tan => libm::tan(x),
            Self::Log => libm::log10(x),
            Self::Sqrt => libm::sqrt(x),
            Self::Percent => x / 100.0,
        }
    }

    /// The keypad label of this function
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "√",
            Self::Percent => "%",
        }
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.label())
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        FUNCTIONS
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownKey(label.to_string()))
    }
}
