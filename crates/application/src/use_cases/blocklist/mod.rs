mod get_blocklist_size;
mod reload_blocklist;

pub use get_blocklist_size::GetBlocklistSizeUseCase;
pub use reload_blocklist::ReloadBlocklistUseCase;
