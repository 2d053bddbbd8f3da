pub mod location {
    pub mod canonical;
    pub mod extract;
    pub mod gazetteer;
    pub mod standardize;
    pub mod states;
}
pub mod region {
    pub mod regions;
}
pub mod aggregate {
    pub mod counts;
}
pub mod service {
    pub mod log_service;
    pub mod record_service;
    pub mod resolve_service;
    pub mod var_service;
}
pub mod prelude;

pub use aggregate::counts::{aggregate, Aggregate, AggregateMode};
pub use location::canonical::{CanonicalLocation, StateCode};
pub use location::extract::extract_raw_location;
pub use location::standardize::standardize_location;
pub use region::regions::{classify, region_tags, Coast, Lean, RegionPreset, RegionTags};
pub use service::record_service::SpeechRecord;
pub use service::resolve_service::{resolve, resolve_record, resolve_records};
