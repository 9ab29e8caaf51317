//! Macros making implementing the parameter namespaces easier.

/// Creates a type wrapping the integer code of a parameter namespace.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`,
/// `Hash`, and `Debug`, conversion from and to the raw integer and the
/// mnemonic, parsing from and composing to wire format, and, if the
/// `serde` feature is enabled, `Serialize` and `Deserialize` atop the raw
/// integer.
///
/// It also emits the canonical `(mnemonic, value)` assignments as an
/// associated constant so the registry can derive its lookup tables from
/// the same literals that define the associated constants.
///
/// For `FromStr` and `Display`, see the other macros in this module.
macro_rules! code_enum {
    ( $(#[$attr:meta])* =>
      $codetype:ident, $inttype:ident;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $codetype($inttype);

        impl $codetype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $codetype = $codetype($value);
            )*
        }

        impl $codetype {
            /// The canonical assignments of this namespace.
            ///
            /// Every `(mnemonic, value)` pair defined above appears here in
            /// definition order.
            pub const ASSIGNMENTS: &'static [(&'static str, $inttype)] = &[
                $( ($mnemonic, $value), )*
            ];

            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns a value from a well-defined mnemonic.
            ///
            /// Mnemonics are matched ignoring ASCII case.
            #[must_use]
            pub fn from_mnemonic(m: &str) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic) {
                        return Some($codetype::$variant)
                    }
                )*
                None
            }

            /// Returns the mnemonic for this value if there is one.
            ///
            /// If two well-defined mnemonics share a value, the one defined
            /// first wins.
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $(
                        $codetype::$variant => Some($mnemonic),
                    )*
                    _ => None
                }
            }

            /// Parses a value from the wire format.
            pub fn parse(
                cursor: &mut $crate::base::wire::WireCursor
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$inttype as $crate::base::wire::Parse>::parse(
                    cursor
                ).map(Self::from_int)
            }

            /// Composes the value into the wire format.
            pub fn compose(
                self, cursor: &mut $crate::base::wire::WireCursor
            ) {
                $crate::base::wire::Compose::compose(&self.to_int(), cursor)
            }
        }

        //--- From

        impl From<$inttype> for $codetype {
            fn from(value: $inttype) -> Self {
                $codetype::from_int(value)
            }
        }

        impl From<$codetype> for $inttype {
            fn from(value: $codetype) -> Self {
                value.to_int()
            }
        }

        //--- Debug

        impl core::fmt::Debug for $codetype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(mnemonic) => {
                        write!(
                            f,
                            concat!(stringify!($codetype), "::{}"),
                            mnemonic
                        )
                    }
                    None => {
                        f.debug_tuple(stringify!($codetype))
                            .field(&self.0)
                            .finish()
                    }
                }
            }
        }

        //--- Serialize and Deserialize

        #[cfg(feature = "serde")]
        impl serde::Serialize for $codetype {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.to_int(), serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $codetype {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                <$inttype as serde::Deserialize>::deserialize(deserializer)
                    .map(Self::from_int)
            }
        }
    }
}

/// Adds impls for `FromStr` and `Display` to the type given as first
/// argument.
///
/// For `FromStr`, recognizes all mnemonics case-insensitively as well as a
/// decimal number representing any value.
///
/// For `Display`, it will display a decimal number for values without
/// mnemonic.
macro_rules! code_enum_str_with_decimal {
    ($codetype:ident, $inttype:ident, $error:expr) => {
        impl core::str::FromStr for $codetype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $codetype::from_mnemonic(s) {
                    Some(res) => Ok(res),
                    None => {
                        if let Ok(res) = s.parse() {
                            Ok($codetype::from_int(res))
                        } else {
                            Err(FromStrError(()))
                        }
                    }
                }
            }
        }

        impl core::fmt::Display for $codetype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(m) => f.write_str(m),
                    None => {
                        write!(f, "{}", self.to_int())
                    }
                }
            }
        }

        from_str_error!($error);
    };
}

/// Adds impls for `FromStr` and `Display` to the type given as first
/// argument.
///
/// For `FromStr` recognizes all defined mnemonics ignoring case.
/// Additionally recognizes a value starting with the prefix given in the
/// second argument (again, ignoring case) directly followed by a decimal
/// number.
///
/// For `Display`, values without mnemonic will be written starting with the
/// prefix directly followed by the decimal representation of the value.
macro_rules! code_enum_str_with_prefix {
    ($codetype:ident, $prefix:expr, $inttype:ident, $error:expr) => {
        impl core::str::FromStr for $codetype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some(res) = $codetype::from_mnemonic(s) {
                    return Ok(res);
                }
                if let (Some(l), Some(r)) =
                    (s.get(..$prefix.len()), s.get($prefix.len()..))
                {
                    if l.eq_ignore_ascii_case($prefix) && !r.is_empty() {
                        if let Ok(value) = r.parse() {
                            return Ok($codetype::from_int(value));
                        }
                    }
                }
                Err(FromStrError(()))
            }
        }

        impl core::fmt::Display for $codetype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(m) => f.write_str(m),
                    None => {
                        write!(f, "{}{}", $prefix, self.to_int())
                    }
                }
            }
        }

        from_str_error!($error);
    };
}

macro_rules! from_str_error {
    ($description:expr) => {
        #[derive(Clone, Debug)]
        pub struct FromStrError(());

        impl std::error::Error for FromStrError {}

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str($description)
            }
        }
    };
}
