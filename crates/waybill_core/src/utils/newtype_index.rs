/// Declares a position newtype serialized as a plain number.
///
/// `index_newtype!(RoutingIdx, indexes LocationIdx)` additionally lets the
/// type index slices of `LocationIdx`.
#[macro_export]
macro_rules! index_newtype {
    ($name:ident) => {
        #[derive(
            serde::Serialize,
            serde::Deserialize,
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Default,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(position: usize) -> Self {
                Self(position)
            }

            pub const fn get(&self) -> usize {
                self.0
            }

            /// Every position below `len`, in order.
            pub fn all(len: usize) -> impl Iterator<Item = Self> {
                (0..len).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<usize> for $name {
            fn from(position: usize) -> Self {
                Self(position)
            }
        }
    };
    ($name:ident, indexes $t:ty) => {
        $crate::index_newtype!($name);

        impl std::ops::Index<$name> for [$t] {
            type Output = $t;

            fn index(&self, index: $name) -> &$t {
                &self[index.0]
            }
        }

        impl std::ops::Index<$name> for Vec<$t> {
            type Output = $t;

            fn index(&self, index: $name) -> &$t {
                &self[index.0]
            }
        }
    };
}
