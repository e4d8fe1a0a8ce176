use folio::{AdminClient, ClientConfig};

/// Admin client for the current build. The BFF origin comes from
/// `FOLIO_BFF_BASE_URL` at build time; unset means relative `/api` routing
/// under `FOLIO_BASE_PATH`, the same mount point the router uses.
#[cfg(target_arch = "wasm32")]
pub fn create() -> AdminClient {
    AdminClient::browser(ClientConfig::from_env())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create() -> AdminClient {
    AdminClient::native(
        ClientConfig::from_env(),
        None,
        folio::api::native::MemoryCookies::new(),
    )
}
