use ordermap::OrderMap;

use super::{diagnostics::DiagnosticKind, types::LiteralType};

/// Declared variables of one analysis run, in declaration order.
///
/// Entries are only ever added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    variable_lookup: OrderMap<String, LiteralType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: OrderMap::new(),
        }
    }

    /// Records `variable_name` with its type, or hands back a redeclaration
    /// when the name is taken. The existing entry is never overwritten.
    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: LiteralType,
    ) -> Result<(), DiagnosticKind> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(DiagnosticKind::Redeclaration {
                name: variable_name,
            })
        } else {
            self.variable_lookup.insert(variable_name, variable_type);
            Ok(())
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<LiteralType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LiteralType)> + '_ {
        self.variable_lookup
            .iter()
            .map(|(name, ty)| (name.as_str(), *ty))
    }
}
