/// Assigns a field of a [`Draft`](crate::visitor::Draft) only when the new value
/// is not [`Identical`](crate::tree::Identical) to the current one, so an
/// unchanged field never forces a copy.
macro_rules! draft_set {
    ($draft:ident . $($field:ident).+ = $value:expr) => {{
        let value = $value;
        if !$crate::tree::Identical::identical(&$draft.current().$($field).+, &value) {
            $draft.edit().$($field).+ = value;
        }
    }};
}

/// A fieldless enum with a stable wire name per variant.
macro_rules! keyword_enum {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident => $text:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::tree::Identical for $name {
            fn identical(&self, other: &Self) -> bool {
                self == other
            }
        }
    };
}

/// Visits the prefix and markers every node carries.
macro_rules! walk_base {
    ($v:ident, $d:ident, $node:ident, $p:ident) => {
        draft_set!($d.base.prefix = $v.visit_space(&$node.base.prefix, $p));
        draft_set!($d.base.markers = $v.visit_markers(&$node.base.markers, $p));
    };
}
