use minidns_application::ports::RecordRepository;
use minidns_application::services::{ChainResolver, HostnameLocks};
use minidns_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, ResolveHostnameUseCase,
};
use minidns_domain::Config;
use minidns_infrastructure::repositories::SqliteRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct UseCases {
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}

impl UseCases {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let repo: Arc<dyn RecordRepository> = Arc::new(SqliteRecordRepository::new(pool));
        let locks = Arc::new(HostnameLocks::new());

        Self {
            create_record: Arc::new(CreateRecordUseCase::new(repo.clone(), locks.clone())),
            get_records: Arc::new(GetRecordsUseCase::new(repo.clone())),
            resolve_hostname: Arc::new(ResolveHostnameUseCase::new(ChainResolver::new(
                repo.clone(),
                config.resolver.max_chain_length,
            ))),
            delete_record: Arc::new(DeleteRecordUseCase::new(repo, locks)),
        }
    }
}
