/// The kind of write a value is being prepared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Update,
}

impl Operation {
    pub fn is_insert(self) -> bool {
        matches!(self, Operation::Insert)
    }

    pub fn is_update(self) -> bool {
        matches!(self, Operation::Update)
    }
}
