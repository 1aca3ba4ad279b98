use std::sync::Arc;
use stubzone_application::ports::RecordStore;
use stubzone_application::use_cases::{
    AddRecordUseCase, GetRecordUseCase, ListRecordsUseCase, RemoveRecordUseCase,
};
use stubzone_domain::{Config, DomainError};
use stubzone_infrastructure::storage::JsonFileRecordStore;

pub struct RecordServices {
    pub add: Arc<AddRecordUseCase>,
    pub remove: Arc<RemoveRecordUseCase>,
    pub get: Arc<GetRecordUseCase>,
    pub list: Arc<ListRecordsUseCase>,
}

impl RecordServices {
    pub fn open(config: &Config) -> Result<Self, DomainError> {
        let store: Arc<dyn RecordStore> = Arc::new(JsonFileRecordStore::open(&config.storage.path)?);
        Ok(Self::new(store))
    }

    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            add: Arc::new(AddRecordUseCase::new(store.clone())),
            remove: Arc::new(RemoveRecordUseCase::new(store.clone())),
            get: Arc::new(GetRecordUseCase::new(store.clone())),
            list: Arc::new(ListRecordsUseCase::new(store)),
        }
    }
}
