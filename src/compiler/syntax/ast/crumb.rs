use std::fmt::{self, Display};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier(pub String);

impl From<&str> for Identifier {
    fn from(name: &str) -> Identifier {
        Identifier(name.to_string())
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Identifier(name) = self;
        write!(f, "{name}")
    }
}
