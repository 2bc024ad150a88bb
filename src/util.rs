/// Define a `#[repr]` enum of integer constants together with conversions to and from the
/// underlying integer type.
///
/// Converting an unrecognized value fails with that value as the error.
macro_rules! define_int_enum {
    ($enum_doc:expr, $repr_type:ty, $enum_name:ident { $($variant:ident = $value:expr, $doc:expr;)* }) => {
        #[doc = $enum_doc]
        #[repr($repr_type)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                #[doc = $doc]
                $variant = $value,
            )*
        }

        impl From<$enum_name> for $repr_type {
            fn from(value: $enum_name) -> $repr_type {
                value as $repr_type
            }
        }

        impl TryFrom<$repr_type> for $enum_name {
            type Error = $repr_type;

            fn try_from(value: $repr_type) -> Result<Self, Self::Error> {
                match value {
                    $(x if x == $value => Ok($enum_name::$variant),)*
                    other => Err(other),
                }
            }
        }
    };
}

pub(crate) use define_int_enum;

/// Convert `s` into a null-terminated UTF-16 string, as expected by the `W` Windows APIs.
///
/// Interior nul characters are kept, so Windows will see the string as ending at the first one.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn to_null_terminated_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0u16)).collect()
}
