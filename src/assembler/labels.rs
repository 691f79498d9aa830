//! Label table built during the single assembly pass.
//!
//! A label is bound when its declaration is reached and never moves. Names
//! are looked up in the table as it stands at the point of reference, so a
//! label can only be used after the line that declares it.
use std::collections::HashMap;

use super::error::{Error, Result};

pub struct Labels {
    labels: HashMap<String, u16>,
}

impl Labels {
    pub fn new() -> Self {
        Labels { labels: HashMap::new() }
    }

    pub fn declare(&mut self, name: &str, address: u16, line: usize) -> Result<()> {
        if self.labels.contains_key(name) {
            return Err(Error::DuplicateLabel { name: name.to_owned(), line });
        }
        debug!("label `{}` => 0x{:03X}", name, address);
        self.labels.insert(name.to_owned(), address);
        Ok(())
    }

    pub fn resolve(&self, name: &str, line: usize) -> Result<u16> {
        self.labels
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnresolvedLabel { name: name.to_owned(), line })
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_declare_and_resolve() {
        let mut labels = Labels::new();
        labels.declare("start", 0x200, 1).unwrap();
        labels.declare("sprite", 0x20A, 6).unwrap();

        assert_eq!(labels.resolve("start", 2).unwrap(), 0x200);
        assert_eq!(labels.resolve("sprite", 9).unwrap(), 0x20A);
    }

    #[test]
    fn test_unknown() {
        let labels = Labels::new();
        match labels.resolve("later", 3) {
            Err(Error::UnresolvedLabel { name, line }) => {
                assert_eq!(name, "later");
                assert_eq!(line, 3);
            }
            other => panic!("expected an unresolved label, got {:?}", other),
        }
    }

    #[test]
    fn test_redeclare() {
        let mut labels = Labels::new();
        labels.declare("loop", 0x204, 2).unwrap();
        assert!(matches!(labels.declare("loop", 0x210, 8), Err(Error::DuplicateLabel { .. })));
        assert_eq!(labels.resolve("loop", 9).unwrap(), 0x204);
    }
}
