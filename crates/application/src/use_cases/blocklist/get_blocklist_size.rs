use crate::ports::BlocklistLookup;
use std::sync::Arc;

pub struct GetBlocklistSizeUseCase {
    blocklist: Arc<dyn BlocklistLookup>,
}

impl GetBlocklistSizeUseCase {
    pub fn new(blocklist: Arc<dyn BlocklistLookup>) -> Self {
        Self { blocklist }
    }

    pub fn execute(&self) -> usize {
        self.blocklist.len()
    }
}
