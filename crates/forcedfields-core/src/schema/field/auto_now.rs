use crate::stmt::Operation;

/// Which writes overwrite a timestamp column with the current time.
///
/// * `create` - on insert only
/// * `update` - on every write
/// * `update_only` - on update only
///
/// [`AutoNow::applies`] is total over every flag combination. Rejecting
/// combinations that make no sense is the descriptor's job, not this table's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoNow {
    pub create: bool,
    pub update: bool,
    pub update_only: bool,
}

impl AutoNow {
    /// Returns `true` when a write of kind `op` must ignore the attribute
    /// value and store the current time instead.
    pub fn applies(self, op: Operation) -> bool {
        match op {
            Operation::Insert => self.update || self.create,
            Operation::Update => self.update || self.update_only,
        }
    }

    /// True when any automatic policy is configured.
    pub fn is_set(self) -> bool {
        self.create || self.update || self.update_only
    }

    /// True when the column gets `DEFAULT CURRENT_TIMESTAMP`.
    pub(crate) fn defaults_to_now(self) -> bool {
        self.create || self.update
    }

    /// True when the column should be refreshed by the database on row
    /// updates.
    pub(crate) fn refreshes_on_update(self) -> bool {
        self.update || self.update_only
    }
}
