/// Declares an identifier enum with a `Custom(String)` fallback.
///
/// Each variant carries a slug, a display name and optional aliases. The
/// display name is what gets serialized; deserialization and `from_name`
/// accept any of the three, ignoring ASCII case and surrounding whitespace.
/// Unknown names deserialize to `Custom` so free-text values survive a round
/// trip untouched.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $slug:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::parse(&s))
            }
        }

        impl $enum_name {
            pub fn name(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $display_name,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            pub fn slug(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $slug,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                $(
                    if name.eq_ignore_ascii_case($slug)
                        || name.eq_ignore_ascii_case($display_name)
                        $( || name.eq_ignore_ascii_case($alias) )*
                    {
                        return Some(Self::$variant);
                    }
                )*
                None
            }

            /// Known variant for `name`, or `Custom` holding the trimmed input.
            pub fn parse(name: &str) -> Self {
                Self::from_name(name).unwrap_or_else(|| Self::Custom(name.trim().to_string()))
            }

            pub fn is_custom(&self) -> bool {
                matches!(self, Self::Custom(_))
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
