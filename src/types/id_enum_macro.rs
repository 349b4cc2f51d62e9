/// Declares a closed identifier enum together with its alias table.
///
/// Each variant is written as
/// `Variant => "canonical" : "Display name", "description" | "alias" | "alias"`.
/// The canonical string is what gets serialized; aliases are the exact,
/// case-sensitive tokens the resolver accepts. A canonical string is only an
/// alias if it is listed as one.
#[macro_export]
macro_rules! define_module_types {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $canonical:literal : $display_name:literal, $description:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $enum_name {
            /// Every `(alias, identifier)` pair, in declaration order.
            pub const ALIASES: &'static [(&'static str, Self)] = &[
                $(
                    $(
                        ($alias, Self::$variant),
                    )*
                )*
            ];

            const CANONICAL_NAMES: &'static [&'static str] = &[
                $(
                    $canonical,
                )*
            ];

            /// Stable string form, used for serialization and display.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $canonical,
                    )*
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $description,
                    )*
                }
            }

            /// All identifiers, in declaration order.
            pub fn all() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }

            fn from_canonical(name: &str) -> Option<Self> {
                match name {
                    $(
                        $canonical => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::types::UnknownModuleType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_canonical(s).ok_or_else(|| $crate::types::UnknownModuleType(s.to_string()))
            }
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_canonical(&s)
                    .ok_or_else(|| serde::de::Error::unknown_variant(&s, Self::CANONICAL_NAMES))
            }
        }
    };
}
