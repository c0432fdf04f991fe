use crate::lookup::worker::LookupRequest;

/// Side effects requested by the reducer and executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestRender,
    /// Persist the whole collection snapshot. Emitted after every mutation.
    SaveSnapshot,
    SpawnLookup(LookupRequest),
}
