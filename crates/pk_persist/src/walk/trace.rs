use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

/// Helper struct for tracking the property path while a walk is running.
///
/// When loading fails somewhere inside a nested record, the plain error only
/// names the innermost property. The path collected here names the whole
/// descent down to it.
#[derive(Default, Clone)]
pub(super) struct PropertyPathStack {
    stack: Vec<&'static str>,
}

impl PropertyPathStack {
    /// Create a new empty [`PropertyPathStack`].
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a property name onto the stack.
    pub fn push(&mut self, name: &'static str) {
        self.stack.push(name);
    }

    /// Pop the last property name off the stack.
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// clear the stack
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl Debug for PropertyPathStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut iter = self.stack.iter();

        if let Some(first) = iter.next() {
            write!(f, "`{first}`")?;
        }

        for name in iter {
            write!(f, " -> `{name}`")?;
        }

        Ok(())
    }
}

std::thread_local! {
    pub(super) static PROPERTY_PATH_STACK: core::cell::RefCell<PropertyPathStack> =
        const { core::cell::RefCell::new(PropertyPathStack::new()) };
}
