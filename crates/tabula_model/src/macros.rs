//! Named accessor methods for [`Attributable`](crate::Attributable) hosts.

/// Generates a reader and a writer method per attribute on an
/// [`Attributable`](crate::Attributable) host.
///
/// The host must be a local type, since the methods land in an inherent
/// `impl` block.
///
/// ```
/// use std::sync::Arc;
/// use tabula_model::{Attributable, AttributeStore, attribute_accessors};
/// use tabula_schema::{AttributeDefinition, AttributeSchema};
///
/// struct Greeting {
///     schema: Arc<AttributeSchema<Greeting>>,
///     attributes: AttributeStore,
/// }
///
/// impl Attributable for Greeting {
///     fn attribute_schema(&self) -> &Arc<AttributeSchema<Self>> {
///         &self.schema
///     }
///     fn attribute_store(&self) -> &AttributeStore {
///         &self.attributes
///     }
///     fn attribute_store_mut(&mut self) -> &mut AttributeStore {
///         &mut self.attributes
///     }
/// }
///
/// attribute_accessors! {
///     Greeting {
///         hello / set_hello,
///     }
/// }
///
/// let schema = Arc::new(
///     AttributeSchema::new("Greeting")
///         .with_attribute(AttributeDefinition::new("hello"))
///         .unwrap(),
/// );
/// let mut greeting = Greeting { schema, attributes: AttributeStore::new() };
/// greeting.set_hello("blabla").unwrap();
/// assert_eq!(greeting.hello().unwrap().as_str(), Some("blabla"));
/// ```
#[macro_export]
macro_rules! attribute_accessors {
    ($host:ty { $($reader:ident / $writer:ident),* $(,)? }) => {
        impl $host {
            $(
                #[doc = concat!("Reads the `", stringify!($reader), "` attribute.")]
                ///
                /// # Errors
                ///
                /// Returns an error if the attribute is not declared.
                pub fn $reader(&mut self) -> $crate::Result<$crate::Value> {
                    $crate::Attributable::read_attribute(self, stringify!($reader))
                }

                #[doc = concat!("Writes the `", stringify!($reader), "` attribute.")]
                ///
                /// # Errors
                ///
                /// Returns an error if the attribute is not declared.
                pub fn $writer(
                    &mut self,
                    value: impl ::core::convert::Into<$crate::Value>,
                ) -> $crate::Result<()> {
                    $crate::Attributable::write_attribute(self, stringify!($reader), value)
                }
            )*
        }
    };
}
