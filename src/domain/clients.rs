// Connected-client domain model

/// The set of clients currently associated with the access point, in the
/// order the device reported them. Identifiers are opaque MAC strings; the
/// device is the source of truth and no format or uniqueness checks are
/// applied here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientList {
    pub macs: Vec<String>,
}

impl ClientList {
    pub fn new(macs: Vec<String>) -> Self {
        Self { macs }
    }

    pub fn len(&self) -> usize {
        self.macs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macs.is_empty()
    }
}
