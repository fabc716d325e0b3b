//! A set of macros for easily working with internals.

macro_rules! api {
    ($e:expr) => {
        concat!("https://discord.com/api/v10", $e)
    };
    ($e:expr, $($rest:tt)*) => {
        format!(api!($e), $($rest)*)
    };
}

/// Defines a fieldless enum whose variants map onto small integers on the wire.
///
/// Generates `num`, `from_num` and the serde impls. Deserializing a value that has no variant is
/// an error.
macro_rules! enum_number {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$inner:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$inner])*
                $variant,
            )*
        }

        impl $name {
            /// The wire value of this variant.
            #[must_use]
            pub const fn num(self) -> u8 {
                match self {
                    $( Self::$variant => $value, )*
                }
            }

            /// Looks up the variant for a wire value, if there is one.
            #[must_use]
            pub const fn from_num(num: u8) -> Option<Self> {
                match num {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_u8(self.num())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <u8 as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_num(value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(format!(
                        "unknown {} value: {}",
                        stringify!($name),
                        value
                    ))
                })
            }
        }
    };
}
