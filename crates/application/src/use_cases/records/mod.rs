pub mod create_record;
pub mod delete_record;
pub mod get_records;
pub mod resolve_hostname;

pub use create_record::CreateRecordUseCase;
pub use delete_record::DeleteRecordUseCase;
pub use get_records::GetRecordsUseCase;
pub use resolve_hostname::ResolveHostnameUseCase;
