// ABOUTME: Wire messages of the element set resource service

//! Element set service messages.

use super::base::StatusType;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {
    #[prost(enumeration = "StatusType", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub locked: bool,
    #[prost(bool, tag = "3")]
    pub middle_offset: bool,
    #[prost(int32, repeated, tag = "4")]
    pub element_labels: Vec<i32>,
}
