pub mod get_denylist;
pub mod save_denylist;

pub use get_denylist::GetDenylistUseCase;
pub use save_denylist::SaveDenylistUseCase;
