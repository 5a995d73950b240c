#[cfg(feature = "api_resource")]
pub use api_resource::ApiResource;

/// REST resource metadata.
///
/// Usually derived with the `ApiResource` macro, which fills in pluralized
/// defaults from the struct name.
///
/// ```ignore
/// use core_proc_macros::ApiResource;
///
/// #[derive(ApiResource)]
/// #[api_resource(envelope = "result")]
/// pub struct Transport {
///     name: String,
/// }
///
/// assert_eq!(Transport::COLLECTION, "transports");
/// assert_eq!(Transport::URL, "/transports");
/// assert_eq!(Transport::LABEL, "Transport");
/// ```
pub trait ApiResource {
    /// Route of the resource group (e.g. "/transports")
    const URL: &'static str;
    /// Database collection name (e.g. "transports")
    const COLLECTION: &'static str;
    /// OpenAPI tag (e.g. "Transports")
    const TAG: &'static str;
    /// Human readable singular name used in messages (e.g. "Transport")
    const LABEL: &'static str;
    /// Top-level JSON key wrapping write responses ("data" or "result")
    const ENVELOPE: &'static str;
}
