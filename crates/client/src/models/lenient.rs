//! Wire enumerations with lenient parsing.
//!
//! Every enumeration in the historian contract is carried as a string whose
//! canonical form equals the variant name. Parsing ignores ASCII case and
//! never fails: a string that matches no member resolves to `Unknown`.
//! `Unknown` serializes as JSON `null`, and `null` reads back as `Unknown`.

/// Declare a wire enum with an implicit trailing `Unknown` variant.
macro_rules! lenient_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Unrecognized or absent wire value.
            #[default]
            Unknown,
        }

        impl $name {
            /// All recognized members, in declaration order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Parse a wire string, ignoring ASCII case.
            ///
            /// Unrecognized input yields `Unknown`; this never fails.
            pub fn parse(value: &str) -> Self {
                match Self::KNOWN
                    .iter()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
                {
                    Some(member) => *member,
                    None => {
                        tracing::debug!(
                            enum_name = stringify!($name),
                            value,
                            "unrecognized wire value, resolving to Unknown"
                        );
                        Self::Unknown
                    }
                }
            }

            /// Canonical wire name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                    Self::Unknown => "Unknown",
                }
            }

            /// True for every member except `Unknown`.
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown)
            }
        }

        impl $crate::models::lenient::LenientEnum for $name {
            fn is_recognized(&self) -> bool {
                self.is_known()
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    Self::Unknown => serializer.serialize_none(),
                    known => serializer.serialize_str(known.as_str()),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <Option<String> as serde::Deserialize>::deserialize(deserializer)?;
                Ok(raw.as_deref().map_or(Self::Unknown, Self::parse))
            }
        }
    };
}

pub(crate) use lenient_enum;

/// Implemented by every enum declared with `lenient_enum!`.
pub(crate) trait LenientEnum {
    fn is_recognized(&self) -> bool;
}

/// `skip_serializing_if` predicate for optional wire enums.
///
/// `Some(Unknown)` is skipped along with `None`, so an unrecognized value
/// read from the wire is omitted on output instead of written as `null`.
pub(crate) fn is_absent<T: LenientEnum>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(|member| !member.is_recognized())
}
