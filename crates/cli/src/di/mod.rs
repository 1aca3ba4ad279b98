mod records;

pub use records::RecordServices;
