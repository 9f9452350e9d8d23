pub mod records;

pub use records::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, ResolveHostnameUseCase,
};
