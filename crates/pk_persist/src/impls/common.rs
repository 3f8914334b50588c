use core::fmt;

use crate::ops::Composite;

/// A function use for implementing [`Persist::persist_debug`] .
///
/// Renders the value like the standard struct `Debug` output, with the type
/// path as the struct name and every property in declaration order.
///
/// The default [`persist_debug`] already routes composite values here, so a
/// manual implementation only needs this when it overrides the default:
///
/// ```ignore
/// fn persist_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///     composite_debug(self, f)
/// }
/// ```
///
/// [`Persist::persist_debug`]: crate::Persist::persist_debug
/// [`persist_debug`]: crate::Persist::persist_debug
#[inline(never)]
pub fn composite_debug(value: &dyn Composite, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Non Inline: only be compiled once -> reduce compilation times
    let mut debug = f.debug_struct(value.type_path());

    for (index, property) in value.iter_properties().enumerate() {
        debug.field(value.name_at(index).unwrap(), &property as &dyn fmt::Debug);
    }
    debug.finish()
}
