pub mod add;
pub mod get;
pub mod list;
pub mod remove;

pub use add::AddRecordUseCase;
pub use get::GetRecordUseCase;
pub use list::ListRecordsUseCase;
pub use remove::RemoveRecordUseCase;
