mod record;

pub use record::{
    CreateRecordRequest, DeleteRecordQuery, DeleteResponse, RecordResponse, ResolveResponse,
};
