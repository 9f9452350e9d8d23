use minidns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, ResolveHostnameUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}
