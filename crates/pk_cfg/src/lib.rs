#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// define_alias

/// Defines named macro aliases for `cfg` conditions.
///
/// Every entry generates one macro next to the invocation. Because the
/// generated definitions live in the invoking crate, the conditions are
/// evaluated against that crate's features, not against `pk_cfg`.
///
/// A generated alias has two forms:
///
/// - `alias! { tokens }` emits the tokens only while the condition holds.
/// - `alias! { if { a } else { b } }` emits `a` while the condition holds and
///   `b` otherwise.
///
/// Both forms expand to the selected tokens directly, with no wrapping block,
/// so they work in item, statement and expression position alike. The usual
/// pattern is a per-crate `cfg` module:
///
/// ```
/// pub mod cfg {
///     pk_cfg::define_alias! {
///         #[cfg(all())] => always,
///         #[cfg(any())] => never,
///     }
/// }
///
/// // Tokens of an inactive alias are dropped before they are parsed as code.
/// cfg::never! { compile_error!("not emitted"); }
///
/// let chosen = cfg::always! {
///     if { "on" } else { "off" }
/// };
/// assert_eq!(chosen, "on");
/// ```
#[macro_export]
macro_rules! define_alias {
    ( $( #[cfg($meta:meta)] => $name:ident ),+ $(,)? ) => {
        $crate::define_alias! {
            @with_dollar [$]
            $( #[cfg($meta)] => $name, )+
        }
    };

    // Internal rule. The `[$]` token smuggles a dollar sign into the
    // transcriber so the generated macros can declare their own
    // metavariables.
    (
        @with_dollar [$dollar:tt]
        $( #[cfg($meta:meta)] => $name:ident, )+
    ) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Alias for `cfg(", stringify!($meta), ")`.")]
            #[doc(hidden)]
            #[macro_export]
            macro_rules! $name {
                ( if { $dollar($dollar if_tokens:tt)* } else { $dollar($dollar else_tokens:tt)* } ) => {
                    $dollar($dollar if_tokens)*
                };
                ( $dollar($dollar tokens:tt)* ) => {
                    $dollar($dollar tokens)*
                };
            }

            #[cfg(not($meta))]
            #[doc = concat!("Alias for `cfg(", stringify!($meta), ")`.")]
            #[doc(hidden)]
            #[macro_export]
            macro_rules! $name {
                ( if { $dollar($dollar if_tokens:tt)* } else { $dollar($dollar else_tokens:tt)* } ) => {
                    $dollar($dollar else_tokens)*
                };
                ( $dollar($dollar tokens:tt)* ) => {};
            }

            pub use $name;
        )+
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(all())] => enabled,
            #[cfg(any())] => disabled,
        }
    }

    #[test]
    fn expression_form_selects_branch() {
        let value = cfg::enabled! { if { 1 } else { 2 } };
        assert_eq!(value, 1);

        let value = cfg::disabled! { if { 1 } else { 2 } };
        assert_eq!(value, 2);
    }

    #[test]
    fn plain_form_keeps_or_drops_tokens() {
        let mut trace = 0;
        cfg::enabled! { trace += 1; }
        cfg::disabled! { trace += 10; }
        assert_eq!(trace, 1);
    }

    #[test]
    fn inactive_tokens_are_never_parsed_as_code() {
        cfg::disabled! { compile_error!("not emitted"); }
    }
}
