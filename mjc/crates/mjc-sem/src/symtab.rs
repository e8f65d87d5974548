//! Symbol table: the ordered mapping from variable names to memory
//! addresses.

use indexmap::IndexMap;

/// Flat symbol table mapping each declared name to its memory address.
///
/// Addresses are consecutive nonnegative integers starting at 0, assigned
/// in declaration order. The insertion-ordered map keeps the declared-name
/// sequence and the name-to-address index in one structure. The table is
/// built once by the analyzer and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    slots: IndexMap<String, u32>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Declares a name, assigning it the next consecutive address.
    ///
    /// Returns the assigned address, or `None` if the name is already
    /// declared (the existing address is kept).
    pub fn declare(&mut self, name: &str) -> Option<u32> {
        if self.slots.contains_key(name) {
            return None;
        }
        let address = self.slots.len() as u32;
        self.slots.insert(name.to_string(), address);
        Some(address)
    }

    /// Looks up the address of a declared name.
    pub fn address(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Returns true if the name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of declared variables; equals the memory size the generated
    /// program allocates.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no variables are declared.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over declared names in address order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}
