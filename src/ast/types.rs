use std::fmt::Display;

/// Optional fixed-rank shape of a variable or tensor literal.
///
/// An empty shape means no shape was given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarType {
    pub shape: Vec<usize>,
}

impl VarType {
    pub fn new(shape: Vec<usize>) -> Self {
        VarType { shape }
    }

    pub fn is_specified(&self) -> bool {
        !self.shape.is_empty()
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims: Vec<String> = self.shape.iter().map(|dim| dim.to_string()).collect();
        write!(f, "<{}>", dims.join(", "))
    }
}
