// ABOUTME: Declarative macros expanding per-entity schemas into typed accessors
// ABOUTME: Entities declare properties; the expansions drive the shared sync engine

//! Entity declaration macros.
//!
//! Entity files stay declarative: they invoke these macros to define the
//! handle struct, its lifecycle methods and one accessor pair per property.
//! All expansions funnel into the shared engines in [`crate::tree::base`]
//! and [`crate::tree::property`], so the get/compare/put discipline is
//! identical across the crate.

/// Expand an optional `since` literal into an `Option<&'static str>`.
macro_rules! since_opt {
    () => {
        None
    };
    ($lit:literal) => {
        Some($lit)
    };
}
pub(crate) use since_opt;

/// Define a tree object handle type and its [`TreeObject`] implementation.
macro_rules! define_tree_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            collection_label: $label:literal,
            service: $service:literal,
            properties: $props:ty,
            supported_since: $since:literal,
            property_names: [$($prop:literal),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: ::std::sync::Arc<$crate::tree::base::ObjectInner<$props>>,
        }

        impl $crate::tree::base::TreeObject for $name {
            type Properties = $props;

            const COLLECTION_LABEL: &'static str = $label;
            const SERVICE_NAME: &'static str = $service;
            const SUPPORTED_SINCE: &'static str = $since;
            const TYPE_NAME: &'static str = stringify!($name);
            const PROPERTY_NAMES: &'static [&'static str] = &[$($prop),*];

            fn inner(&self) -> &::std::sync::Arc<$crate::tree::base::ObjectInner<$props>> {
                &self.inner
            }

            fn from_inner(
                inner: ::std::sync::Arc<$crate::tree::base::ObjectInner<$props>>,
            ) -> Self {
                Self { inner }
            }

            fn object_cache(
            ) -> &'static $crate::tree::cache::ObjectCache<$crate::tree::base::ObjectInner<$props>>
            {
                static CACHE: ::std::sync::OnceLock<
                    $crate::tree::cache::ObjectCache<$crate::tree::base::ObjectInner<$props>>,
                > = ::std::sync::OnceLock::new();
                CACHE.get_or_init($crate::tree::cache::ObjectCache::new)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::tree::base::handles_equal(self, other)
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::tree::base::handle_hash(self, state);
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "<{} with name '{}'>",
                    stringify!($name),
                    $crate::tree::base::local_name(self)
                )
            }
        }

        impl $name {
            /// The resource path of this object; empty while unstored.
            pub fn resource_path(&self) -> $crate::paths::ResourcePath {
                $crate::paths::ResourcePath::from_string_unchecked(
                    $crate::tree::base::resource_path_value(self),
                )
            }

            /// Whether the object lives on a server.
            pub fn is_stored(&self) -> bool {
                $crate::tree::base::is_stored(self)
            }

            /// The last seen server version token of this object.
            pub fn version(&self) -> i64 {
                $crate::tree::base::local_version(self)
            }

            /// The name of the object.
            pub async fn name(&self) -> $crate::error::Result<String> {
                $crate::tree::property::get_property(self, "name", None, |state| {
                    Ok(state.info.name.clone())
                })
                .await
            }

            /// The id of the object, used as key in collections.
            pub async fn id(&self) -> $crate::error::Result<String> {
                $crate::tree::property::get_property(self, "id", None, |state| {
                    Ok(state.info.id.clone())
                })
                .await
            }

            /// The parent object.
            pub async fn parent(&self) -> $crate::error::Result<$crate::objects::AnyTreeObject> {
                $crate::objects::any::parent_of(self).await
            }
        }
    };
}
pub(crate) use define_tree_object;

/// Add the mutable-object surface: name writes and deletion.
macro_rules! impl_editable_object {
    ($name:ident) => {
        impl $name {
            /// Rename the object.
            pub async fn set_name(
                &self,
                name: impl Into<String>,
            ) -> $crate::error::Result<()> {
                let name = name.into();
                $crate::tree::property::set_property(
                    self,
                    "name",
                    None,
                    name,
                    |state| state.info.name.clone(),
                    |state, value| state.info.name = value,
                )
                .await
            }

            /// Delete the object on the server. The handle becomes unusable;
            /// further calls report not-found.
            pub async fn delete(&self) -> $crate::error::Result<()> {
                $crate::tree::base::delete(self).await
            }
        }
    };
}
pub(crate) use impl_editable_object;

/// Add the creatable-object surface: storing under a parent and cloning.
macro_rules! impl_creatable_object {
    ($name:ident, parent: $parent:ty) => {
        impl $name {
            /// Store the object on the server under `parent`, adopting the
            /// parent's server connection.
            pub async fn store(&self, parent: &$parent) -> $crate::error::Result<()> {
                let server = $crate::tree::base::server_wrapper(parent)?;
                let parent_path = $crate::tree::base::resource_path_value(parent);
                $crate::tree::base::store_with(self, &parent_path, server).await
            }

            /// Create a new unstored object with the same name and
            /// properties. With `unlink`, all links to other objects are
            /// removed, so the copy can be stored on another model.
            pub fn duplicate(&self, unlink: bool) -> Self {
                $crate::tree::base::duplicate(self, unlink)
            }
        }
    };
}
pub(crate) use impl_creatable_object;

/// Read-write scalar property; the wire field and exposed type coincide.
macro_rules! grpc_data_property {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident
        $(, readable_since = $rs:literal)? $(, writable_since = $ws:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| Ok(state.properties.$field.clone()),
            )
            .await
        }

        pub async fn $setter(&self, value: $ty) -> $crate::error::Result<()> {
            $crate::tree::property::set_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($ws)?),
                value,
                |state| state.properties.$field.clone(),
                |state, value| state.properties.$field = value,
            )
            .await
        }
    };
}
pub(crate) use grpc_data_property;

/// Read-write scalar property with wire conversions.
macro_rules! grpc_data_property_convert {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident,
        from = $from:path, to = $to:path
        $(, readable_since = $rs:literal)? $(, writable_since = $ws:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| $from(&state.properties.$field),
            )
            .await
        }

        pub async fn $setter(&self, value: $ty) -> $crate::error::Result<()> {
            $crate::tree::property::set_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($ws)?),
                $to(value),
                |state| state.properties.$field.clone(),
                |state, value| state.properties.$field = value,
            )
            .await
        }
    };
}
pub(crate) use grpc_data_property_convert;

/// Read-only scalar property.
macro_rules! grpc_data_property_read_only {
    (
        $(#[$meta:meta])*
        $getter:ident : $ty:ty, $field:ident
        $(, readable_since = $rs:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| Ok(state.properties.$field.clone()),
            )
            .await
        }
    };
}
pub(crate) use grpc_data_property_read_only;

/// Read-only scalar property with a wire conversion.
macro_rules! grpc_data_property_read_only_convert {
    (
        $(#[$meta:meta])*
        $getter:ident : $ty:ty, $field:ident, from = $from:path
        $(, readable_since = $rs:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| $from(&state.properties.$field),
            )
            .await
        }
    };
}
pub(crate) use grpc_data_property_read_only_convert;

/// Read-write enum property backed by a wire integer.
macro_rules! grpc_enum_property {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident
        $(, readable_since = $rs:literal)? $(, writable_since = $ws:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| <$ty as $crate::objects::enums::WireEnum>::from_wire(
                    state.properties.$field,
                ),
            )
            .await
        }

        pub async fn $setter(&self, value: $ty) -> $crate::error::Result<()> {
            $crate::tree::property::set_property(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($ws)?),
                <$ty as $crate::objects::enums::WireEnum>::to_wire(value),
                |state| state.properties.$field,
                |state, value| state.properties.$field = value,
            )
            .await
        }
    };
}
pub(crate) use grpc_enum_property;

/// Read-only enum property backed by a wire integer.
macro_rules! grpc_enum_property_read_only {
    (
        $(#[$meta:meta])*
        $getter:ident : $ty:ty, $field:ident
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<$ty> {
            $crate::tree::property::get_property(self, stringify!($getter), None, |state| {
                <$ty as $crate::objects::enums::WireEnum>::from_wire(state.properties.$field)
            })
            .await
        }
    };
}
pub(crate) use grpc_enum_property_read_only;

/// Read-write link property. The target must be stored; `None` unsets.
macro_rules! grpc_link_property {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident
        $(, readable_since = $rs:literal)? $(, writable_since = $ws:literal)?
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<Option<$ty>> {
            $crate::tree::property::get_linked(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($rs)?),
                |state| state.properties.$field.clone(),
            )
            .await
        }

        pub async fn $setter(&self, value: Option<&$ty>) -> $crate::error::Result<()> {
            $crate::tree::property::set_linked(
                self,
                stringify!($getter),
                $crate::tree::macros::since_opt!($($ws)?),
                value,
                |state| state.properties.$field.clone(),
                |state, value| state.properties.$field = value,
            )
            .await
        }
    };
}
pub(crate) use grpc_link_property;

/// Read-only link property.
macro_rules! grpc_link_property_read_only {
    (
        $(#[$meta:meta])*
        $getter:ident : $ty:ty, $field:ident
    ) => {
        $(#[$meta])*
        pub async fn $getter(&self) -> $crate::error::Result<Option<$ty>> {
            $crate::tree::property::get_linked(self, stringify!($getter), None, |state| {
                state.properties.$field.clone()
            })
            .await
        }
    };
}
pub(crate) use grpc_link_property_read_only;

/// Ordered, mutable list of links.
macro_rules! grpc_linked_object_list {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident
    ) => {
        $(#[$meta])*
        pub fn $getter(&self) -> $crate::tree::linked_list::LinkedObjectList<Self, $ty> {
            $crate::tree::linked_list::LinkedObjectList::new(
                self.clone(),
                stringify!($getter),
                |state| state.properties.$field.clone(),
                |state, value| state.properties.$field = value,
            )
        }

        pub async fn $setter(&self, values: &[$ty]) -> $crate::error::Result<()> {
            self.$getter().replace_all(values).await
        }
    };
}
pub(crate) use grpc_linked_object_list;

/// Ordered list of edge records.
macro_rules! grpc_edge_property_list {
    (
        $(#[$meta:meta])*
        $getter:ident, $setter:ident : $ty:ty, $field:ident
    ) => {
        $(#[$meta])*
        pub fn $getter(&self) -> $crate::tree::edge_list::EdgePropertyList<Self, $ty> {
            $crate::tree::edge_list::EdgePropertyList::new(
                self.clone(),
                stringify!($getter),
                |state| state.properties.$field.clone(),
                |state, value| state.properties.$field = value,
            )
        }

        pub async fn $setter(&self, values: &[$ty]) -> $crate::error::Result<()> {
            self.$getter().replace_all(values).await
        }
    };
}
pub(crate) use grpc_edge_property_list;

/// Child collection plus the associated create method.
macro_rules! grpc_collection_property {
    (
        $(#[$meta:meta])*
        $getter:ident, $create:ident : $ty:ty, $builder:ty
    ) => {
        $(#[$meta])*
        pub fn $getter(
            &self,
        ) -> $crate::error::Result<$crate::tree::collection::Collection<$ty>> {
            let server = $crate::tree::base::server_wrapper(self)?;
            let path = $crate::paths::join([
                $crate::tree::base::resource_path_value(self).as_str(),
                <$ty as $crate::tree::base::TreeObject>::COLLECTION_LABEL,
            ]);
            Ok($crate::tree::collection::Collection::new(server, path))
        }

        /// Build, store and return a new child object.
        pub async fn $create(&self, builder: $builder) -> $crate::error::Result<$ty> {
            let object = builder.build()?;
            object.store(self).await?;
            Ok(object)
        }
    };
}
pub(crate) use grpc_collection_property;

/// Read-only child collection.
macro_rules! grpc_collection_property_read_only {
    (
        $(#[$meta:meta])*
        $getter:ident : $ty:ty
    ) => {
        $(#[$meta])*
        pub fn $getter(
            &self,
        ) -> $crate::error::Result<$crate::tree::collection::Collection<$ty>> {
            let server = $crate::tree::base::server_wrapper(self)?;
            let path = $crate::paths::join([
                $crate::tree::base::resource_path_value(self).as_str(),
                <$ty as $crate::tree::base::TreeObject>::COLLECTION_LABEL,
            ]);
            Ok($crate::tree::collection::Collection::new(server, path))
        }
    };
}
pub(crate) use grpc_collection_property_read_only;

/// Implement [`LinkedPaths`] for a properties message by listing its link
/// fields: single links, repeated links, and edge messages with their link
/// field.
macro_rules! impl_linked_paths {
    (
        $ty:ty {
            singles: [$($single:ident),* $(,)?],
            lists: [$($list:ident),* $(,)?],
            edges: [$($edges:ident . $link:ident),* $(,)?] $(,)?
        }
    ) => {
        impl $crate::tree::base::LinkedPaths for $ty {
            #[allow(unused_mut)]
            fn linked_paths(&self) -> Vec<String> {
                let mut paths: Vec<String> = Vec::new();
                $( paths.push(self.$single.clone()); )*
                $( paths.extend(self.$list.iter().cloned()); )*
                $( paths.extend(self.$edges.iter().map(|edge| edge.$link.clone())); )*
                paths
            }

            #[allow(unused_variables)]
            fn map_links(&mut self, f: &mut dyn FnMut(&str) -> Option<String>) {
                $(
                    if let Some(new) = f(&self.$single) {
                        self.$single = new;
                    }
                )*
                // Entries of repeated link fields mapped to an empty path
                // are dropped; an empty entry would be an invalid link.
                $(
                    for path in self.$list.iter_mut() {
                        if let Some(new) = f(path) {
                            *path = new;
                        }
                    }
                    self.$list.retain(|path| !path.is_empty());
                )*
                $(
                    for edge in self.$edges.iter_mut() {
                        if let Some(new) = f(&edge.$link) {
                            edge.$link = new;
                        }
                    }
                    self.$edges.retain(|edge| !edge.$link.is_empty());
                )*
            }
        }
    };
}
pub(crate) use impl_linked_paths;

/// Define a polymorphic union over several handle types, resolved by the
/// collection label of a resource path.
macro_rules! define_linked_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub enum $name {
            $($variant($ty)),+
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $( (Self::$variant(a), Self::$variant(b)) => a == b, )+
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $( Self::$variant(value) => ::std::fmt::Debug::fmt(value, f), )+
                }
            }
        }

        #[::async_trait::async_trait]
        impl $crate::tree::linked::Linked for $name {
            fn path_value(&self) -> String {
                match self {
                    $( Self::$variant(value) => $crate::tree::linked::Linked::path_value(value), )+
                }
            }

            fn from_path(
                path: &str,
                server: &$crate::tree::base::ServerWrapper,
            ) -> $crate::error::Result<Self> {
                let label = $crate::paths::collection_label(path).unwrap_or_default();
                $(
                    if label == <$ty as $crate::tree::base::TreeObject>::COLLECTION_LABEL {
                        return Ok(Self::$variant(
                            <$ty as $crate::tree::linked::Linked>::from_path(path, server)?,
                        ));
                    }
                )+
                let allowed = [$(<$ty as $crate::tree::base::TreeObject>::COLLECTION_LABEL),+]
                    .join(", ");
                Err($crate::error::AcpError::invalid_argument(format!(
                    "Resource path '{path}' does not point into any of the allowed \
                     collections [{allowed}]."
                )))
            }

            async fn object_name(&self) -> $crate::error::Result<String> {
                match self {
                    $( Self::$variant(value) => {
                        $crate::tree::linked::Linked::object_name(value).await
                    } )+
                }
            }
        }
    };
}
pub(crate) use define_linked_union;
