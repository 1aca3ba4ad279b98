//! Mapping from wire query types to `stubzone_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use stubzone_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Returns `None` for every type the store cannot hold (AAAA, MX, ANY, ...).
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types_map() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::A),
            Some(RecordType::A)
        );
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::CNAME),
            Some(RecordType::CNAME)
        );
    }

    #[test]
    fn test_unsupported_types_map_to_none() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::AAAA), None);
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::MX), None);
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::ANY), None);
    }
}
