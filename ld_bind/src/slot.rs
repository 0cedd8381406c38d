use crate::cell::Cell;
use crate::schema::Property;

/// Storage for one property, shaped by its cardinality.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Functional(Option<Cell>),
    /// Insertion order is serialization order.
    NonFunctional(Vec<Cell>),
}

impl Slot {
    pub fn for_property(property: &Property) -> Slot {
        if property.functional {
            Slot::Functional(None)
        } else {
            Slot::NonFunctional(Vec::new())
        }
    }

    pub fn as_slice(&self) -> &[Cell] {
        match self {
            Slot::Functional(cell) => cell.as_slice(),
            Slot::NonFunctional(cells) => cells,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        match self {
            Slot::Functional(cell) => cell.as_mut_slice(),
            Slot::NonFunctional(cells) => cells,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Replace the whole content with `cell`.
    pub fn set(&mut self, cell: Cell) {
        match self {
            Slot::Functional(slot) => *slot = Some(cell),
            Slot::NonFunctional(cells) => {
                cells.clear();
                cells.push(cell);
            }
        }
    }

    /// Add at the end. A functional slot keeps only the new value.
    pub fn append(&mut self, cell: Cell) {
        match self {
            Slot::Functional(slot) => *slot = Some(cell),
            Slot::NonFunctional(cells) => cells.push(cell),
        }
    }

    /// Add at the start. A functional slot keeps only the new value.
    pub fn prepend(&mut self, cell: Cell) {
        match self {
            Slot::Functional(slot) => *slot = Some(cell),
            Slot::NonFunctional(cells) => cells.insert(0, cell),
        }
    }

    /// Remove by position; later values shift left.
    pub fn remove(&mut self, index: usize) -> Option<Cell> {
        match self {
            Slot::Functional(slot) if index == 0 => slot.take(),
            Slot::Functional(_) => None,
            Slot::NonFunctional(cells) if index < cells.len() => Some(cells.remove(index)),
            Slot::NonFunctional(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iri::Iri;

    fn iri(text: &str) -> Cell {
        Cell::Iri(Iri::parse(text).unwrap())
    }

    fn texts(slot: &Slot) -> Vec<&str> {
        slot.as_slice()
            .iter()
            .filter_map(|cell| cell.as_iri().map(Iri::as_str))
            .collect()
    }

    #[test]
    fn non_functional_keeps_order() {
        let mut slot = Slot::NonFunctional(Vec::new());
        slot.append(iri("/b"));
        slot.append(iri("/c"));
        slot.prepend(iri("/a"));
        assert_eq!(texts(&slot), vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn remove_shifts_left() {
        let mut slot = Slot::NonFunctional(vec![iri("/a"), iri("/b"), iri("/c")]);
        let removed = slot.remove(1).unwrap();
        assert_eq!(removed.as_iri().unwrap().as_str(), "/b");
        assert_eq!(texts(&slot), vec!["/a", "/c"]);
        assert!(slot.remove(5).is_none());
    }

    #[test]
    fn functional_holds_one() {
        let mut slot = Slot::Functional(None);
        assert!(slot.is_empty());
        slot.append(iri("/a"));
        slot.append(iri("/b"));
        assert_eq!(texts(&slot), vec!["/b"]);
        assert!(slot.remove(1).is_none());
        assert!(slot.remove(0).is_some());
        assert_eq!(slot.len(), 0);
    }

    #[test]
    fn set_replaces_everything() {
        let mut slot = Slot::NonFunctional(vec![iri("/a"), iri("/b")]);
        slot.set(iri("/z"));
        assert_eq!(texts(&slot), vec!["/z"]);
    }
}
