use crate::ops::PersistRef;
use crate::persistence::impl_persist_cast_fn;
use crate::{Leaf, Persist, PersistError};

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_persist_signed {
    ($($ty:ty),+ $(,)?) => {$(
        impl Persist for $ty {
            impl_persist_cast_fn!(stringify!($ty));

            #[inline]
            fn persist_ref(&self) -> PersistRef<'_> {
                PersistRef::Leaf(Leaf::Int(*self as i64))
            }

            fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
                match value.to_int().and_then(|number| Self::try_from(number).ok()) {
                    Some(number) => {
                        *self = number;
                        Ok(())
                    }
                    None => Err(PersistError::MismatchedLeaf {
                        from_kind: value.kind(),
                        to_type: self.type_path(),
                    }),
                }
            }
        }
    )+};
}

macro_rules! impl_persist_unsigned {
    ($($ty:ty),+ $(,)?) => {$(
        impl Persist for $ty {
            impl_persist_cast_fn!(stringify!($ty));

            #[inline]
            fn persist_ref(&self) -> PersistRef<'_> {
                PersistRef::Leaf(Leaf::UInt(*self as u64))
            }

            fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
                match value.to_uint().and_then(|number| Self::try_from(number).ok()) {
                    Some(number) => {
                        *self = number;
                        Ok(())
                    }
                    None => Err(PersistError::MismatchedLeaf {
                        from_kind: value.kind(),
                        to_type: self.type_path(),
                    }),
                }
            }
        }
    )+};
}

impl_persist_signed!(i8, i16, i32, i64, isize);
impl_persist_unsigned!(u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_persist_float {
    ($($ty:ty),+ $(,)?) => {$(
        impl Persist for $ty {
            impl_persist_cast_fn!(stringify!($ty));

            #[inline]
            fn persist_ref(&self) -> PersistRef<'_> {
                PersistRef::Leaf(Leaf::Float(*self as f64))
            }

            fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
                match value.to_float() {
                    Some(number) => {
                        *self = number as $ty;
                        Ok(())
                    }
                    None => Err(PersistError::MismatchedLeaf {
                        from_kind: value.kind(),
                        to_type: self.type_path(),
                    }),
                }
            }
        }
    )+};
}

impl_persist_float!(f32, f64);

// -----------------------------------------------------------------------------
// Bool

impl Persist for bool {
    impl_persist_cast_fn!("bool");

    #[inline]
    fn persist_ref(&self) -> PersistRef<'_> {
        PersistRef::Leaf(Leaf::Bool(*self))
    }

    fn apply_leaf(&mut self, value: Leaf) -> Result<(), PersistError> {
        match value.to_bool() {
            Some(flag) => {
                *self = flag;
                Ok(())
            }
            None => Err(PersistError::MismatchedLeaf {
                from_kind: value.kind(),
                to_type: self.type_path(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{Leaf, Persist, PersistError};

    #[test]
    fn scalars_widen_into_leaves() {
        assert_eq!((-3_i8).persist_ref().to_leaf(), Some(Leaf::Int(-3)));
        assert_eq!(7_usize.persist_ref().to_leaf(), Some(Leaf::UInt(7)));
        assert_eq!(1.5_f32.persist_ref().to_leaf(), Some(Leaf::Float(1.5)));
        assert_eq!(true.persist_ref().to_leaf(), Some(Leaf::Bool(true)));
    }

    #[test]
    fn apply_narrows_with_range_check() {
        let mut small = 0_i8;

        assert!(small.apply_leaf(Leaf::Int(127)).is_ok());
        assert_eq!(small, 127);

        assert!(small.apply_leaf(Leaf::Int(128)).is_err());
        assert_eq!(small, 127);
    }

    #[test]
    fn apply_crosses_signedness_when_the_value_fits() {
        let mut unsigned = 0_u32;
        assert!(unsigned.apply_leaf(Leaf::Int(9)).is_ok());
        assert_eq!(unsigned, 9);
        assert!(unsigned.apply_leaf(Leaf::Int(-9)).is_err());

        let mut signed = 0_i64;
        assert!(signed.apply_leaf(Leaf::UInt(3)).is_ok());
        assert_eq!(signed, 3);
        assert!(signed.apply_leaf(Leaf::UInt(u64::MAX)).is_err());
    }

    #[test]
    fn floats_accept_integer_leaves() {
        let mut float = 0.0_f64;

        assert!(float.apply_leaf(Leaf::Int(-2)).is_ok());
        assert_eq!(float, -2.0);

        let error = float.apply_leaf(Leaf::Str(String::from("2.0")));
        assert!(matches!(
            error,
            Err(PersistError::MismatchedLeaf { to_type: "f64", .. })
        ));
    }

    #[test]
    fn bool_requires_the_exact_encoding() {
        let mut flag = false;

        assert!(flag.apply_leaf(Leaf::Bool(true)).is_ok());
        assert!(flag);

        assert!(flag.apply_leaf(Leaf::Int(1)).is_err());
        assert!(flag);
    }
}
